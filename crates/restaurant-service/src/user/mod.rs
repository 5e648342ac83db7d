//! User accounts and profiles.

pub mod account;
pub mod service;

pub use account::{AccountService, AuthSession, Signup};
pub use service::{UpdateProfile, UserService};
