//! HTTP handlers

mod auth;
mod health;
mod products;

pub use auth::{login, logout, protected, register, CredentialsRequest};
pub use health::{health, ready};
pub use products::{
    create_product, delete_product, get_product, list_products, update_product, ProductRequest,
};
