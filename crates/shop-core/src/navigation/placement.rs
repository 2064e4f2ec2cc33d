// ============================================================================
// Shop Core - Navigation Placement Mapper
// File: crates/shop-core/src/navigation/placement.rs
// Description: Turns the edited flat list into {id, position, parent_id}
//              rows, resolving parents from the last item seen per depth
// ============================================================================

use std::collections::HashMap;

use serde::Serialize;
use uuid::Uuid;

use crate::domain::{FlatNavItem, NavPlacement};

/// Non-blocking notice about a malformed depth chain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PlacementWarning {
    /// Nothing was seen at `depth - 1`; the item was saved as top level
    MissingAncestor { item_id: Uuid, depth: usize },
    /// The predecessor sits more than one level above; the parent came from
    /// an earlier item at `depth - 1`
    DepthGap { item_id: Uuid, depth: usize, parent_id: Uuid },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PlacementPlan {
    pub placements: Vec<NavPlacement>,
    pub warnings: Vec<PlacementWarning>,
}

impl PlacementPlan {
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}

/// Single pass over the list; position is the list index.
///
/// A parent is always an earlier item of the same list, so the result is a
/// forest by construction.
pub fn map_placements(list: &[FlatNavItem]) -> PlacementPlan {
    let mut plan = PlacementPlan {
        placements: Vec::with_capacity(list.len()),
        warnings: Vec::new(),
    };
    // Sparse: depths come from clients and are not bounded here
    let mut last_seen: HashMap<usize, Uuid> = HashMap::new();
    let mut prev_depth: Option<usize> = None;

    for (index, entry) in list.iter().enumerate() {
        let id = entry.id();
        let depth = entry.depth;

        let parent_id = if depth == 0 {
            None
        } else {
            let found = last_seen.get(&(depth - 1)).copied();
            match found {
                None => plan.warnings.push(PlacementWarning::MissingAncestor { item_id: id, depth }),
                Some(parent_id) if prev_depth.map_or(true, |p| p.saturating_add(1) < depth) => {
                    plan.warnings.push(PlacementWarning::DepthGap { item_id: id, depth, parent_id })
                }
                Some(_) => {}
            }
            found
        };

        last_seen.insert(depth, id);
        prev_depth = Some(depth);

        plan.placements.push(NavPlacement {
            id,
            position: index as i32,
            parent_id,
        });
    }

    plan
}
