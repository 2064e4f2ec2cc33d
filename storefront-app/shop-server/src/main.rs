use axum::http::{header, HeaderValue, Method};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::{info, error};

use shop_api::{router, state::{AppState, DynNavigationService}};
use shop_infrastructure::{
    create_pool, run_migrations, PgNavigationRepository, PgPageRepository, PgStoreRepository,
};
use shop_security::JwtService;
use shop_shared::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize telemetry
    shop_shared::telemetry::init_telemetry();

    info!("Shop server starting...");

    // Load configuration (.env included)
    let config = match AppConfig::load() {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Connect to Database
    info!("Connecting to database...");
    let pool = create_pool(&config.database.url, config.database.max_connections).await?;
    info!("Database connection established.");

    if config.database.run_migrations {
        run_migrations(&pool).await?;
    }

    // Wire services
    let navigation: Arc<DynNavigationService> = Arc::new(DynNavigationService::new(
        Arc::new(PgNavigationRepository::new(pool.clone())),
        Arc::new(PgPageRepository::new(pool.clone())),
        Arc::new(PgStoreRepository::new(pool)),
        config.navigation.max_depth,
    ));
    let state = AppState {
        navigation,
        jwt: Arc::new(JwtService::new(&config.jwt.secret, config.jwt.access_token_expiry)),
    };

    // Build router
    let mut app = router(state);
    if let Some(origin) = &config.app.cors_origin {
        app = app.layer(
            CorsLayer::new()
                .allow_origin(origin.parse::<HeaderValue>()?)
                .allow_methods([
                    Method::GET,
                    Method::POST,
                    Method::PUT,
                    Method::DELETE,
                    Method::OPTIONS,
                ])
                .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]),
        );
    }

    // Bind address
    let host: std::net::IpAddr = config.app.host.parse()?;
    let addr = SocketAddr::from((host, config.app.port));
    info!("{} ({}) listening on {}", config.app.name, config.app.env, addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
