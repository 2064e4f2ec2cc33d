//! Domain services (business logic)

pub mod navigation_service;

pub use navigation_service::{MenuLink, NavigationService, OrderEntry};
