//! Read model returned by `GET /invoices/{invoice_id}`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use restaurant_entity::{Invoice, OrderItem};

/// Placeholder rendered when an invoice has no payment method yet.
pub const NO_PAYMENT_METHOD: &str = "null";

/// An invoice joined with its order's table and items.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoiceView {
    /// Invoice identifier.
    pub invoice_id: String,
    /// Billed order.
    pub order_id: String,
    /// `CARD`, `CASH`, or `"null"` when unknown.
    pub payment_method: String,
    /// `PENDING` or `PAID`.
    pub payment_status: String,
    /// Sum of the order's item prices.
    pub payment_due: f64,
    /// Number of the table the order was placed at.
    pub table_number: Option<u32>,
    /// When payment is due.
    pub payment_due_date: DateTime<Utc>,
    /// The order's items.
    pub order_details: Vec<OrderItem>,
}

impl InvoiceView {
    /// Assemble the view from an invoice and the order data it refers to.
    pub fn new(invoice: Invoice, table_number: Option<u32>, items: Vec<OrderItem>) -> Self {
        let payment_due = items.iter().map(|item| item.unit_price).sum::<f64>();
        Self {
            invoice_id: invoice.invoice_id,
            order_id: invoice.order_id,
            payment_method: invoice
                .payment_method
                .map(|m| m.as_str().to_string())
                .unwrap_or_else(|| NO_PAYMENT_METHOD.to_string()),
            payment_status: invoice.payment_status.as_str().to_string(),
            payment_due: restaurant_entity::food::round_price(payment_due),
            table_number,
            payment_due_date: invoice.payment_due_date,
            order_details: items,
        }
    }
}
