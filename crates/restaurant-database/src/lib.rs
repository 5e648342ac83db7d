//! # restaurant-database
//!
//! Document store backends and typed repositories.
//!
//! - `connection`: PostgreSQL pool management
//! - `store`: `DocumentStore` implementations and the timeout-enforcing
//!   `StoreManager`
//! - `repositories`: typed access to each collection

pub mod connection;
pub mod migration;
pub mod repositories;
pub mod store;

pub use connection::DocumentPool;
pub use store::StoreManager;
