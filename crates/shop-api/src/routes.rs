//! Router assembly

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::handlers::{health, navigation};
use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        // Public storefront
        .route("/api/v1/stores/{store_id}/menu", get(navigation::menu))
        // Owner editing
        .route("/api/v1/stores/{store_id}/navigation", get(navigation::editor))
        .route(
            "/api/v1/stores/{store_id}/navigation/available-pages",
            get(navigation::available_pages),
        )
        .route("/api/v1/stores/{store_id}/navigation/items", post(navigation::add_item))
        .route(
            "/api/v1/stores/{store_id}/navigation/items/{item_id}",
            delete(navigation::remove_item),
        )
        .route("/api/v1/stores/{store_id}/navigation/order", put(navigation::save_order))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
