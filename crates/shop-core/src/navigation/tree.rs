// ============================================================================
// Shop Core - Navigation Tree Builder / Flattener
// File: crates/shop-core/src/navigation/tree.rs
// Description: Converts stored flat rows into a position-sorted forest and
//              the forest into the pre-order editing list
// ============================================================================

use std::collections::HashMap;

use tracing::warn;
use uuid::Uuid;

use crate::domain::{FlatNavItem, NavItem, NavNode};

/// Build a forest from flat rows.
///
/// Rows whose `parent_id` does not resolve are treated as roots. Every
/// sibling list is sorted by `position`, ties keep input order.
pub fn build_tree(items: Vec<NavItem>) -> Vec<NavNode> {
    let mut index: HashMap<Uuid, usize> = HashMap::with_capacity(items.len());
    for (i, item) in items.iter().enumerate() {
        index.entry(item.id).or_insert(i);
    }

    let mut parent_of: Vec<Option<usize>> = items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            item.parent_id
                .and_then(|pid| index.get(&pid).copied())
                .filter(|&p| p != i)
        })
        .collect();

    break_cycles(&mut parent_of, &items);

    let mut roots = Vec::new();
    let mut children: Vec<Vec<usize>> = vec![Vec::new(); items.len()];
    for (i, parent) in parent_of.iter().enumerate() {
        match parent {
            Some(p) => children[*p].push(i),
            None => roots.push(i),
        }
    }

    let mut slots: Vec<Option<NavItem>> = items.into_iter().map(Some).collect();
    let mut forest: Vec<NavNode> = roots
        .into_iter()
        .filter_map(|i| assemble(i, &mut slots, &children))
        .collect();
    sort_by_position(&mut forest);
    forest
}

/// Pre-order walk recomputing `parent_id` and `depth` from structure.
pub fn flatten_tree(forest: &[NavNode]) -> Vec<FlatNavItem> {
    let mut out = Vec::with_capacity(forest.iter().map(NavNode::size).sum());
    flatten_into(forest, None, 0, &mut out);
    out
}

fn flatten_into(nodes: &[NavNode], parent_id: Option<Uuid>, depth: usize, out: &mut Vec<FlatNavItem>) {
    for node in nodes {
        let mut item = node.item.clone();
        item.parent_id = parent_id;
        out.push(FlatNavItem { item, depth });
        flatten_into(&node.children, Some(node.id()), depth + 1, out);
    }
}

fn assemble(i: usize, slots: &mut [Option<NavItem>], children: &[Vec<usize>]) -> Option<NavNode> {
    let item = slots[i].take()?;
    let kids = children[i]
        .iter()
        .filter_map(|&c| assemble(c, slots, children))
        .collect();
    Some(NavNode { item, children: kids })
}

fn sort_by_position(nodes: &mut [NavNode]) {
    nodes.sort_by_key(|n| n.item.position);
    for node in nodes.iter_mut() {
        sort_by_position(&mut node.children);
    }
}

/// Stored rows should never form a parent cycle; if they do, the first node
/// reached twice on a walk is cut loose and becomes a root.
fn break_cycles(parent_of: &mut [Option<usize>], items: &[NavItem]) {
    const UNSEEN: u8 = 0;
    const ON_PATH: u8 = 1;
    const DONE: u8 = 2;

    let mut state = vec![UNSEEN; parent_of.len()];
    for start in 0..parent_of.len() {
        let mut path = Vec::new();
        let mut cur = Some(start);
        while let Some(i) = cur {
            match state[i] {
                DONE => break,
                ON_PATH => {
                    warn!(item_id = %items[i].id, "navigation parent cycle detected, promoting item to root");
                    parent_of[i] = None;
                    break;
                }
                _ => {
                    state[i] = ON_PATH;
                    path.push(i);
                    cur = parent_of[i];
                }
            }
        }
        for i in path {
            state[i] = DONE;
        }
    }
}
