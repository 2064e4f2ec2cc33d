//! # Shop Security
//! 
//! Bearer token handling for store owners.

pub mod jwt;

pub use jwt::{Claims, JwtError, JwtService};
