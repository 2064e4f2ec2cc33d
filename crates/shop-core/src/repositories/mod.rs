//! Repository traits (ports)

pub mod navigation_repository;
pub mod page_repository;
pub mod store_repository;

pub use navigation_repository::NavigationRepository;
pub use page_repository::PageRepository;
pub use store_repository::StoreRepository;

#[cfg(test)]
pub use navigation_repository::MockNavigationRepository;
#[cfg(test)]
pub use page_repository::MockPageRepository;
#[cfg(test)]
pub use store_repository::MockStoreRepository;
