//! Request and response bodies

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use shop_core::domain::{FlatNavItem, NavItem, Page};
use shop_core::navigation::NavEditor;
use shop_core::services::OrderEntry;

/// Item of the editor list; `position` is the list index
#[derive(Debug, Serialize)]
pub struct NavItemDto {
    pub id: Uuid,
    pub title: String,
    pub page_id: Uuid,
    pub parent_id: Option<Uuid>,
    pub depth: usize,
    pub position: usize,
}

impl NavItemDto {
    fn from_flat(position: usize, entry: &FlatNavItem) -> Self {
        Self {
            id: entry.item.id,
            title: entry.item.title.clone(),
            page_id: entry.item.page_id,
            parent_id: entry.item.parent_id,
            depth: entry.depth,
            position,
        }
    }
}

impl From<&NavItem> for NavItemDto {
    fn from(item: &NavItem) -> Self {
        Self {
            id: item.id,
            title: item.title.clone(),
            page_id: item.page_id,
            parent_id: item.parent_id,
            depth: 0,
            position: usize::try_from(item.position).unwrap_or_default(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct EditorResponse {
    pub max_depth: usize,
    pub items: Vec<NavItemDto>,
}

impl From<&NavEditor> for EditorResponse {
    fn from(editor: &NavEditor) -> Self {
        Self {
            max_depth: editor.max_depth(),
            items: editor
                .items()
                .iter()
                .enumerate()
                .map(|(i, f)| NavItemDto::from_flat(i, f))
                .collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PageDto {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
}

impl From<Page> for PageDto {
    fn from(page: Page) -> Self {
        Self {
            id: page.id,
            title: page.title,
            slug: page.slug,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AddItemRequest {
    pub page_id: Uuid,
    #[serde(default)]
    pub title: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SaveOrderRequest {
    pub items: Vec<OrderEntry>,
}
