//! # restaurant-core
//!
//! Core crate for the restaurant backend. Contains configuration schemas,
//! the unified error system, pagination and partial-update types, and the
//! document store trait implemented by `restaurant-database`.
//!
//! This crate has **no** internal dependencies on other workspace crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
