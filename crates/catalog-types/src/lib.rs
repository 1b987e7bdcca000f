//! Catalog Types - Shared domain types
//!
//! This crate contains domain types used across catalog crates:
//! - User identity
//! - Products
//! - Request/response bodies for the session flows

pub mod auth;
pub mod product;
pub mod user;

pub use auth::*;
pub use product::*;
pub use user::*;
