// ============================================================================
// Shop Core - Navigation Editing Session
// File: crates/shop-core/src/navigation/editor.rs
// Description: Owned state of one menu editing session (flattened list,
//              active drag, dirty flag)
// ============================================================================

use std::collections::HashSet;

use tracing::debug;
use uuid::Uuid;

use crate::domain::{FlatNavItem, NavItem, Page};
use super::depth::{normalize_depths, set_depth, DepthChange};
use super::placement::{map_placements, PlacementPlan};
use super::reorder;
use super::tree::{build_tree, flatten_tree};

/// Editing session over the flattened menu.
///
/// Every mutation is followed by a depth normalization pass, so the list
/// always satisfies `depth[i] <= depth[i - 1] + 1`.
#[derive(Debug, Clone)]
pub struct NavEditor {
    items: Vec<FlatNavItem>,
    max_depth: usize,
    active_id: Option<Uuid>,
    dirty: bool,
}

impl NavEditor {
    pub fn from_items(items: Vec<NavItem>, max_depth: usize) -> Self {
        let mut flat = flatten_tree(&build_tree(items));
        let adjusted = normalize_depths(&mut flat, max_depth);
        if adjusted > 0 {
            debug!(adjusted, "stored navigation deeper than allowed, clamped");
        }
        Self::from_flat(flat, max_depth)
    }

    /// Session over an already flattened list, normalized on entry
    pub fn from_flat(mut items: Vec<FlatNavItem>, max_depth: usize) -> Self {
        normalize_depths(&mut items, max_depth);
        Self {
            items,
            max_depth,
            active_id: None,
            dirty: false,
        }
    }

    pub fn items(&self) -> &[FlatNavItem] {
        &self.items
    }

    pub fn into_items(self) -> Vec<FlatNavItem> {
        self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn active_id(&self) -> Option<Uuid> {
        self.active_id
    }

    pub fn begin_drag(&mut self, id: Uuid) -> bool {
        if !self.items.iter().any(|f| f.id() == id) {
            return false;
        }
        self.active_id = Some(id);
        true
    }

    pub fn cancel_drag(&mut self) {
        self.active_id = None;
    }

    /// Drop the dragged item on `over_id`. Dropping on itself or outside the
    /// list only ends the drag.
    pub fn end_drag(&mut self, over_id: Option<Uuid>) -> bool {
        match (self.active_id.take(), over_id) {
            (Some(active), Some(over)) => self.move_item(active, over),
            _ => false,
        }
    }

    pub fn move_item(&mut self, source_id: Uuid, target_id: Uuid) -> bool {
        let changed = reorder::move_item(&mut self.items, source_id, target_id);
        self.after_edit(changed)
    }

    /// Nest one level deeper; refused when the predecessor is not deep
    /// enough to become the parent.
    pub fn indent(&mut self, id: Uuid) -> bool {
        let Some(index) = self.items.iter().position(|f| f.id() == id) else {
            return false;
        };
        let ceiling = index.checked_sub(1).map_or(0, |prev| self.items[prev].depth + 1);
        if self.items[index].depth >= ceiling {
            return false;
        }
        let changed = set_depth(&mut self.items, id, DepthChange::Indent, self.max_depth);
        self.after_edit(changed)
    }

    pub fn outdent(&mut self, id: Uuid) -> bool {
        let changed = set_depth(&mut self.items, id, DepthChange::Outdent, self.max_depth);
        self.after_edit(changed)
    }

    pub fn linked_page_ids(&self) -> HashSet<Uuid> {
        self.items.iter().map(|f| f.item.page_id).collect()
    }

    /// Pages not yet linked from the menu, in input order
    pub fn available_pages<'a>(&self, pages: &'a [Page]) -> Vec<&'a Page> {
        let linked = self.linked_page_ids();
        pages.iter().filter(|p| !linked.contains(&p.id)).collect()
    }

    pub fn placements(&self) -> PlacementPlan {
        map_placements(&self.items)
    }

    /// Clear the dirty flag once the placements were stored
    pub fn mark_saved(&mut self) {
        self.dirty = false;
    }

    fn after_edit(&mut self, changed: bool) -> bool {
        if changed {
            normalize_depths(&mut self.items, self.max_depth);
            self.dirty = true;
        }
        changed
    }
}
