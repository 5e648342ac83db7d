//! Orders and their line items.

pub mod item;
pub mod service;

pub use item::{CreateOrderItem, OrderItemService, UpdateOrderItem};
pub use service::{CreateOrder, OrderService, UpdateOrder};
