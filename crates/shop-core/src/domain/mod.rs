//! # Shop Core - Domain Module
//! 
//! Domain entities for the storefront navigation menu.

pub mod nav_item;
pub mod page;
pub mod store;

// Re-export all entities
pub use nav_item::{NavItem, NavNode, FlatNavItem, NavPlacement};
pub use page::Page;
pub use store::Store;
