//! Invoice entities.

pub mod model;
pub mod payment;

pub use model::Invoice;
pub use payment::{PaymentMethod, PaymentStatus};
