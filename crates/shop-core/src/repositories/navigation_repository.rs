//! Navigation item repository trait (port)

use async_trait::async_trait;
use uuid::Uuid;
use crate::domain::{NavItem, NavPlacement};
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NavigationRepository: Send + Sync {
    async fn list_by_store(&self, store_id: &Uuid) -> Result<Vec<NavItem>, DomainError>;
    async fn find_by_id(&self, store_id: &Uuid, id: &Uuid) -> Result<Option<NavItem>, DomainError>;
    async fn find_by_page(&self, store_id: &Uuid, page_id: &Uuid) -> Result<Option<NavItem>, DomainError>;
    async fn max_position(&self, store_id: &Uuid) -> Result<Option<i32>, DomainError>;
    async fn create(&self, item: &NavItem) -> Result<NavItem, DomainError>;

    /// Delete one item and move its direct children to the top level.
    /// Returns the number of promoted children.
    async fn delete_promoting_children(&self, store_id: &Uuid, id: &Uuid) -> Result<u64, DomainError>;

    /// Write every placement or none of them.
    async fn apply_placements(&self, store_id: &Uuid, placements: &[NavPlacement]) -> Result<(), DomainError>;
}
