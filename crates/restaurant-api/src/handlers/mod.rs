//! HTTP request handlers, one module per resource.

pub mod food;
pub mod health;
pub mod invoice;
pub mod menu;
pub mod order;
pub mod order_item;
pub mod table;
pub mod user;
