// ============================================================================
// Shop Core - Navigation Depth Editor
// File: crates/shop-core/src/navigation/depth.rs
// Description: Indent / outdent of a single item in the flattened list
// ============================================================================

use uuid::Uuid;

use crate::domain::FlatNavItem;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DepthChange {
    Indent,
    Outdent,
}

impl DepthChange {
    fn apply(self, depth: usize, max_depth: usize) -> usize {
        match self {
            DepthChange::Indent => (depth + 1).min(max_depth),
            DepthChange::Outdent => depth.saturating_sub(1),
        }
    }
}

/// Change the depth of one item, leaving the list order alone.
///
/// Returns `false` when nothing changed: unknown id, already at the bound,
/// or an indent of the first item (it has nothing to nest under).
pub fn set_depth(list: &mut [FlatNavItem], item_id: Uuid, change: DepthChange, max_depth: usize) -> bool {
    let Some(index) = list.iter().position(|f| f.id() == item_id) else {
        return false;
    };

    let current = list[index].depth;
    let next = change.apply(current, max_depth);
    if next == current || (index == 0 && next > 0) {
        return false;
    }

    list[index].depth = next;
    true
}

/// Clamp every depth to at most one below its predecessor and to `max_depth`.
///
/// Returns how many items were adjusted.
pub fn normalize_depths(list: &mut [FlatNavItem], max_depth: usize) -> usize {
    let mut adjusted = 0;
    let mut prev: Option<usize> = None;
    for entry in list.iter_mut() {
        let ceiling = prev.map_or(0, |d| d + 1).min(max_depth);
        if entry.depth > ceiling {
            entry.depth = ceiling;
            adjusted += 1;
        }
        prev = Some(entry.depth);
    }
    adjusted
}
