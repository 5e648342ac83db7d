//! Core traits defined in `restaurant-core` and implemented by other crates.

pub mod store;

pub use store::{DocumentStore, from_document, to_document};
