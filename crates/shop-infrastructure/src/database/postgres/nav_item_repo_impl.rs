// ============================================================================
// Shop Infrastructure - PostgreSQL Navigation Repository
// File: crates/shop-infrastructure/src/database/postgres/nav_item_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use sqlx::{PgPool, FromRow};
use uuid::Uuid;
use tracing::{info, error, warn};
use chrono::{DateTime, Utc};

use shop_core::domain::{NavItem, NavPlacement};
use shop_core::error::DomainError;
use shop_core::repositories::NavigationRepository;

use super::db_error;

pub struct PgNavigationRepository {
    pool: PgPool,
}

impl PgNavigationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Internal row type for SQLx mapping
#[derive(Debug, FromRow)]
struct NavItemRow {
    pub id: Uuid,
    pub store_id: Uuid,
    pub page_id: Uuid,
    pub title: String,
    pub parent_id: Option<Uuid>,
    pub position: i32,
    pub created_at: DateTime<Utc>,
    pub modified_at: Option<DateTime<Utc>>,
}

impl From<NavItemRow> for NavItem {
    fn from(row: NavItemRow) -> Self {
        NavItem {
            id: row.id,
            store_id: row.store_id,
            title: row.title,
            page_id: row.page_id,
            parent_id: row.parent_id,
            position: row.position,
            created_at: row.created_at,
            modified_at: row.modified_at,
        }
    }
}

#[async_trait]
impl NavigationRepository for PgNavigationRepository {
    async fn list_by_store(&self, store_id: &Uuid) -> Result<Vec<NavItem>, DomainError> {
        let rows: Vec<NavItemRow> = sqlx::query_as(
            r#"
            SELECT id, store_id, page_id, title, parent_id, position, created_at, modified_at
            FROM nav_items
            WHERE store_id = $1
            ORDER BY position, created_at
            "#
        )
        .bind(store_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("listing navigation items", e))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, store_id: &Uuid, id: &Uuid) -> Result<Option<NavItem>, DomainError> {
        let row: Option<NavItemRow> = sqlx::query_as(
            r#"
            SELECT id, store_id, page_id, title, parent_id, position, created_at, modified_at
            FROM nav_items
            WHERE id = $1 AND store_id = $2
            "#
        )
        .bind(id)
        .bind(store_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("finding navigation item by id", e))?;

        Ok(row.map(|r| r.into()))
    }

    async fn find_by_page(&self, store_id: &Uuid, page_id: &Uuid) -> Result<Option<NavItem>, DomainError> {
        let row: Option<NavItemRow> = sqlx::query_as(
            r#"
            SELECT id, store_id, page_id, title, parent_id, position, created_at, modified_at
            FROM nav_items
            WHERE store_id = $1 AND page_id = $2
            "#
        )
        .bind(store_id)
        .bind(page_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("finding navigation item by page", e))?;

        Ok(row.map(|r| r.into()))
    }

    async fn max_position(&self, store_id: &Uuid) -> Result<Option<i32>, DomainError> {
        sqlx::query_scalar::<_, Option<i32>>(
            "SELECT MAX(position) FROM nav_items WHERE store_id = $1"
        )
        .bind(store_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| db_error("reading max navigation position", e))
    }

    async fn create(&self, item: &NavItem) -> Result<NavItem, DomainError> {
        info!("Creating navigation item for page {}", item.page_id);

        let row: NavItemRow = sqlx::query_as(
            r#"
            INSERT INTO nav_items (
                id, store_id, page_id, title, parent_id, position, created_at, modified_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id, store_id, page_id, title, parent_id, position, created_at, modified_at
            "#
        )
        .bind(item.id)
        .bind(item.store_id)
        .bind(item.page_id)
        .bind(&item.title)
        .bind(item.parent_id)
        .bind(item.position)
        .bind(item.created_at)
        .bind(item.modified_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            let duplicate = e
                .as_database_error()
                .map(|db| db.is_unique_violation())
                .unwrap_or(false);
            if duplicate {
                warn!("Page {} already linked in store {}", item.page_id, item.store_id);
                DomainError::PageAlreadyLinked(item.page_id)
            } else {
                db_error("creating navigation item", e)
            }
        })?;

        Ok(row.into())
    }

    async fn delete_promoting_children(&self, store_id: &Uuid, id: &Uuid) -> Result<u64, DomainError> {
        let mut tx = self.pool.begin().await
            .map_err(|e| db_error("starting delete transaction", e))?;

        let promoted = sqlx::query(
            r#"
            UPDATE nav_items
            SET parent_id = NULL, modified_at = NOW()
            WHERE store_id = $1 AND parent_id = $2
            "#
        )
        .bind(store_id)
        .bind(id)
        .execute(&mut *tx)
        .await
        .map_err(|e| db_error("promoting navigation children", e))?
        .rows_affected();

        let deleted = sqlx::query("DELETE FROM nav_items WHERE id = $1 AND store_id = $2")
            .bind(id)
            .bind(store_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| db_error("deleting navigation item", e))?
            .rows_affected();

        if deleted == 0 {
            tx.rollback().await.map_err(|e| db_error("rolling back delete", e))?;
            return Err(DomainError::NavItemNotFound(*id));
        }

        tx.commit().await.map_err(|e| db_error("committing delete", e))?;
        Ok(promoted)
    }

    async fn apply_placements(&self, store_id: &Uuid, placements: &[NavPlacement]) -> Result<(), DomainError> {
        let mut tx = self.pool.begin().await
            .map_err(|e| db_error("starting placement transaction", e))?;

        for placement in placements {
            let updated = sqlx::query(
                r#"
                UPDATE nav_items
                SET position = $3, parent_id = $4, modified_at = NOW()
                WHERE id = $1 AND store_id = $2
                "#
            )
            .bind(placement.id)
            .bind(store_id)
            .bind(placement.position)
            .bind(placement.parent_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| db_error("updating navigation placement", e))?
            .rows_affected();

            if updated == 0 {
                error!("Navigation item {} vanished while saving store {}", placement.id, store_id);
                tx.rollback().await.map_err(|e| db_error("rolling back placements", e))?;
                return Err(DomainError::NavItemNotFound(placement.id));
            }
        }

        tx.commit().await.map_err(|e| db_error("committing placements", e))?;
        info!("Applied {} navigation placements for store {}", placements.len(), store_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_into_domain() {
        let parent = Uuid::new_v4();
        let row = NavItemRow {
            id: Uuid::new_v4(),
            store_id: Uuid::new_v4(),
            page_id: Uuid::new_v4(),
            title: "About".to_string(),
            parent_id: Some(parent),
            position: 2,
            created_at: Utc::now(),
            modified_at: None,
        };
        let page_id = row.page_id;
        let item: NavItem = row.into();
        assert_eq!(item.parent_id, Some(parent));
        assert_eq!(item.page_id, page_id);
        assert_eq!(item.position, 2);
        assert!(!item.is_root());
    }

    /// Needs a disposable database: `DATABASE_URL=... cargo test -- --ignored`
    #[tokio::test]
    #[ignore = "requires DATABASE_URL"]
    async fn test_apply_placements_rolls_back_on_unknown_item() {
        let url = std::env::var("DATABASE_URL").unwrap();
        let pool = crate::database::create_pool(&url, 2).await.unwrap();
        crate::database::run_migrations(&pool).await.unwrap();

        let store_id = Uuid::new_v4();
        sqlx::query("INSERT INTO stores (id, owner_id, name, slug) VALUES ($1, $2, 'Acme', $3)")
            .bind(store_id)
            .bind(Uuid::new_v4())
            .bind(format!("acme-{}", store_id))
            .execute(&pool)
            .await
            .unwrap();

        let repo = PgNavigationRepository::new(pool.clone());
        let mut created = Vec::new();
        for slug in ["about", "faq"] {
            let page_id = Uuid::new_v4();
            sqlx::query("INSERT INTO pages (id, store_id, title, slug, is_published) VALUES ($1, $2, $3, $3, TRUE)")
                .bind(page_id)
                .bind(store_id)
                .bind(slug)
                .execute(&pool)
                .await
                .unwrap();
            let position = created.len() as i32;
            let item = NavItem::new(store_id, page_id, slug, position).unwrap();
            created.push(repo.create(&item).await.unwrap());
        }

        let missing = Uuid::new_v4();
        let placements = [
            NavPlacement { id: created[1].id, position: 0, parent_id: None },
            NavPlacement { id: created[0].id, position: 1, parent_id: Some(created[1].id) },
            NavPlacement { id: missing, position: 2, parent_id: None },
        ];
        let err = repo.apply_placements(&store_id, &placements).await.unwrap_err();
        assert!(matches!(err, DomainError::NavItemNotFound(id) if id == missing));

        let after = repo.list_by_store(&store_id).await.unwrap();
        assert_eq!(after[0].id, created[0].id);
        assert!(after.iter().all(|i| i.parent_id.is_none()));

        sqlx::query("DELETE FROM stores WHERE id = $1")
            .bind(store_id)
            .execute(&pool)
            .await
            .unwrap();
    }
}
