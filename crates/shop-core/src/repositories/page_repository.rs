//! Content page repository trait (port)

use async_trait::async_trait;
use uuid::Uuid;
use crate::domain::Page;
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PageRepository: Send + Sync {
    async fn list_by_store(&self, store_id: &Uuid) -> Result<Vec<Page>, DomainError>;
    async fn find_by_id(&self, store_id: &Uuid, id: &Uuid) -> Result<Option<Page>, DomainError>;
}
