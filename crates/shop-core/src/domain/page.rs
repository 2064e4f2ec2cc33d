//! Content page entity (read-only from the navigation point of view)

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub id: Uuid,
    pub store_id: Uuid,
    pub title: String,
    pub slug: String,
    pub is_published: bool,
}
