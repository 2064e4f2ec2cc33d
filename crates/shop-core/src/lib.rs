//! # Shop Core
//! 
//! Domain entities, navigation tree editing, services, and repository traits
//! for the storefront navigation menu.

pub mod domain;
pub mod navigation;
pub mod services;
pub mod repositories;
pub mod error;

// Re-export domain entities
pub use domain::*;
pub use error::DomainError;
