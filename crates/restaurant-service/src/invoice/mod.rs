//! Invoices and the invoice view.

pub mod service;
pub mod view;

pub use service::{CreateInvoice, InvoiceService, UpdateInvoice};
pub use view::InvoiceView;
