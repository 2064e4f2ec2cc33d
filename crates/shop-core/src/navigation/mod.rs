//! Navigation menu tree editing.
//!
//! Stored rows -> [`build_tree`] -> [`flatten_tree`] -> edits through
//! [`NavEditor`] -> [`map_placements`] -> storage.

pub mod depth;
pub mod editor;
pub mod placement;
pub mod reorder;
pub mod tree;

pub use depth::{normalize_depths, set_depth, DepthChange};
pub use editor::NavEditor;
pub use placement::{map_placements, PlacementPlan, PlacementWarning};
pub use reorder::move_item;
pub use tree::{build_tree, flatten_tree};
