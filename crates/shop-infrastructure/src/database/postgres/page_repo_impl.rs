// ============================================================================
// Shop Infrastructure - PostgreSQL Page Repository
// File: crates/shop-infrastructure/src/database/postgres/page_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use sqlx::{PgPool, FromRow};
use uuid::Uuid;

use shop_core::domain::Page;
use shop_core::error::DomainError;
use shop_core::repositories::PageRepository;

use super::db_error;

pub struct PgPageRepository {
    pool: PgPool,
}

impl PgPageRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct PageRow {
    pub id: Uuid,
    pub store_id: Uuid,
    pub title: String,
    pub slug: String,
    pub is_published: bool,
}

impl From<PageRow> for Page {
    fn from(row: PageRow) -> Self {
        Page {
            id: row.id,
            store_id: row.store_id,
            title: row.title,
            slug: row.slug,
            is_published: row.is_published,
        }
    }
}

#[async_trait]
impl PageRepository for PgPageRepository {
    async fn list_by_store(&self, store_id: &Uuid) -> Result<Vec<Page>, DomainError> {
        let rows: Vec<PageRow> = sqlx::query_as(
            r#"
            SELECT id, store_id, title, slug, is_published
            FROM pages
            WHERE store_id = $1
            ORDER BY title
            "#
        )
        .bind(store_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("listing pages", e))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, store_id: &Uuid, id: &Uuid) -> Result<Option<Page>, DomainError> {
        let row: Option<PageRow> = sqlx::query_as(
            r#"
            SELECT id, store_id, title, slug, is_published
            FROM pages
            WHERE id = $1 AND store_id = $2
            "#
        )
        .bind(id)
        .bind(store_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("finding page by id", e))?;

        Ok(row.map(|r| r.into()))
    }
}
