//! PostgreSQL repository implementations

pub mod nav_item_repo_impl;
pub mod page_repo_impl;
pub mod store_repo_impl;

pub use nav_item_repo_impl::PgNavigationRepository;
pub use page_repo_impl::PgPageRepository;
pub use store_repo_impl::PgStoreRepository;

use shop_core::error::DomainError;
use tracing::error;

fn db_error(context: &str, e: sqlx::Error) -> DomainError {
    error!("Database error {}: {}", context, e);
    DomainError::DatabaseError(e.to_string())
}
