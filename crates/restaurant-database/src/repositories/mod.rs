//! Typed repositories over the document store.

pub mod record;
pub mod user;

pub use record::RecordRepository;
pub use user::UserRepository;

use restaurant_entity::{Food, Invoice, Menu, Order, OrderItem, Table};

/// Repository for menus.
pub type MenuRepository = RecordRepository<Menu>;
/// Repository for foods.
pub type FoodRepository = RecordRepository<Food>;
/// Repository for tables.
pub type TableRepository = RecordRepository<Table>;
/// Repository for orders.
pub type OrderRepository = RecordRepository<Order>;
/// Repository for order items.
pub type OrderItemRepository = RecordRepository<OrderItem>;
/// Repository for invoices.
pub type InvoiceRepository = RecordRepository<Invoice>;
