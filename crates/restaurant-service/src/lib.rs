//! # restaurant-service
//!
//! Business logic service layer. Each service validates its input, checks
//! referenced records exist, and performs the store operation through a
//! typed repository.
//!
//! Services follow constructor injection: all dependencies are provided at
//! construction time.

pub mod context;
pub mod food;
pub mod invoice;
pub mod menu;
pub mod order;
pub mod table;
pub mod user;

#[cfg(test)]
pub(crate) mod testing;

pub use context::RequestContext;
pub use food::FoodService;
pub use invoice::{InvoiceService, InvoiceView};
pub use menu::MenuService;
pub use order::{OrderItemService, OrderService};
pub use table::TableService;
pub use user::{AccountService, AuthSession, UserService};
