// ============================================================================
// Shop Infrastructure - PostgreSQL Store Repository
// File: crates/shop-infrastructure/src/database/postgres/store_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use sqlx::{PgPool, FromRow};
use uuid::Uuid;

use shop_core::domain::Store;
use shop_core::error::DomainError;
use shop_core::repositories::StoreRepository;

use super::db_error;

pub struct PgStoreRepository {
    pool: PgPool,
}

impl PgStoreRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct StoreRow {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub name: String,
    pub slug: String,
}

impl From<StoreRow> for Store {
    fn from(row: StoreRow) -> Self {
        Store {
            id: row.id,
            owner_id: row.owner_id,
            name: row.name,
            slug: row.slug,
        }
    }
}

#[async_trait]
impl StoreRepository for PgStoreRepository {
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Store>, DomainError> {
        let row: Option<StoreRow> = sqlx::query_as(
            "SELECT id, owner_id, name, slug FROM stores WHERE id = $1"
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("finding store by id", e))?;

        Ok(row.map(|r| r.into()))
    }
}
