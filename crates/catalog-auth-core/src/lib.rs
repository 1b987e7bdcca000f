//! Catalog Auth Core - Authentication business logic
//!
//! Username/password registration and login, signed bearer tokens with a
//! fixed lifetime, and an explicit revocation list consulted on every
//! protected call.

pub mod config;
pub mod error;
pub mod gate;
pub mod password;
pub mod service;
pub mod token;

pub use config::*;
pub use error::*;
pub use gate::*;
pub use password::*;
pub use service::*;
pub use token::*;
