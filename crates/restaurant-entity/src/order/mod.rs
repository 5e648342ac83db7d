//! Order and order item entities.

pub mod item;
pub mod model;

pub use item::{OrderItem, Quantity};
pub use model::Order;
