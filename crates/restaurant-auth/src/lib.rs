//! # restaurant-auth
//!
//! Credential hashing and token handling for the restaurant backend.
//!
//! ## Modules
//!
//! - `password`: Argon2id password hashing and length policy
//! - `jwt`: token claims, signing and validation
//! - `token`: the token service: issue, validate, persist and refresh

pub mod jwt;
pub mod password;
pub mod token;

pub use jwt::{Claims, JwtDecoder, JwtEncoder, TokenError, TokenPair, TokenSubject, TokenType};
pub use password::{PasswordHasher, PasswordValidator};
pub use token::TokenService;
