//! Token lifecycle service.

pub mod service;

pub use service::TokenService;
