//! Drag-and-drop reorder of the flattened list

use uuid::Uuid;

use crate::domain::FlatNavItem;

/// Move `source_id` to the index currently held by `target_id`.
///
/// Items in between shift by one; depths are left as they are.
pub fn move_item(list: &mut Vec<FlatNavItem>, source_id: Uuid, target_id: Uuid) -> bool {
    if source_id == target_id {
        return false;
    }
    let from = list.iter().position(|f| f.id() == source_id);
    let to = list.iter().position(|f| f.id() == target_id);
    let (Some(from), Some(to)) = (from, to) else {
        return false;
    };

    let moved = list.remove(from);
    list.insert(to, moved);
    true
}
