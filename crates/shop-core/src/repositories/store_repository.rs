//! Store repository trait (port)

use async_trait::async_trait;
use uuid::Uuid;
use crate::domain::Store;
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StoreRepository: Send + Sync {
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Store>, DomainError>;
}
