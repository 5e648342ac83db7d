//! # restaurant-entity
//!
//! Domain records for the restaurant backend. Every struct in this crate
//! is stored as one JSON document in a named collection and implements
//! [`Record`] so repositories can address it generically.

pub mod food;
pub mod invoice;
pub mod menu;
pub mod order;
pub mod record;
pub mod table;
pub mod user;

pub use food::Food;
pub use invoice::{Invoice, PaymentMethod, PaymentStatus};
pub use menu::Menu;
pub use order::{Order, OrderItem, Quantity};
pub use record::Record;
pub use table::Table;
pub use user::{User, UserRole};
