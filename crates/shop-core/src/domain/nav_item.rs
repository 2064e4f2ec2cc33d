// ============================================================================
// Shop Core - Navigation Item Entity
// File: crates/shop-core/src/domain/nav_item.rs
// Description: Menu entry linking to a content page, plus its tree and
//              flattened working forms
// ============================================================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use shop_shared::utils::normalize_title;

/// Navigation item as stored
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct NavItem {
    pub id: Uuid,
    pub store_id: Uuid,

    #[validate(length(min = 1, max = 100, message = "Title must be between 1 and 100 characters"))]
    pub title: String,

    /// Linked content page; never changes after creation
    pub page_id: Uuid,

    pub parent_id: Option<Uuid>,
    pub position: i32,

    // Audit fields
    pub created_at: DateTime<Utc>,
    pub modified_at: Option<DateTime<Utc>>,
}

impl NavItem {
    /// New top-level item placed at `position`
    pub fn new(
        store_id: Uuid,
        page_id: Uuid,
        title: &str,
        position: i32,
    ) -> Result<Self, validator::ValidationErrors> {
        let item = Self {
            id: shop_shared::new_id(),
            store_id,
            title: normalize_title(title),
            page_id,
            parent_id: None,
            position,
            created_at: Utc::now(),
            modified_at: None,
        };

        item.validate()?;
        Ok(item)
    }

    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}

/// Item with its nested children, sorted by position
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NavNode {
    pub item: NavItem,
    pub children: Vec<NavNode>,
}

impl NavNode {
    pub fn id(&self) -> Uuid {
        self.item.id
    }

    /// Number of nodes in this subtree, self included
    pub fn size(&self) -> usize {
        1 + self.children.iter().map(NavNode::size).sum::<usize>()
    }
}

/// Pre-order, depth-annotated entry of the editable list.
///
/// `item.parent_id` holds the structural parent from the last flatten, not
/// necessarily the stored one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlatNavItem {
    pub item: NavItem,
    pub depth: usize,
}

impl FlatNavItem {
    pub fn id(&self) -> Uuid {
        self.item.id
    }
}

/// Row update emitted when saving the menu order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavPlacement {
    pub id: Uuid,
    pub position: i32,
    pub parent_id: Option<Uuid>,
}
