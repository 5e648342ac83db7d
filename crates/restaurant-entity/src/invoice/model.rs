//! Invoice entity model.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::payment::{PaymentMethod, PaymentStatus};
use crate::record::{NewIdentity, Record};

/// Days between invoice creation and the payment due date.
pub const PAYMENT_TERM_DAYS: i64 = 1;

/// A bill raised against an order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invoice {
    /// Unique invoice identifier.
    pub id: Uuid,
    /// String form of `id`.
    pub invoice_id: String,
    /// Billed order.
    pub order_id: String,
    /// Payment method, unknown until paid.
    #[serde(default)]
    pub payment_method: Option<PaymentMethod>,
    /// Settlement state.
    #[serde(default)]
    pub payment_status: PaymentStatus,
    /// When payment is due.
    pub payment_due_date: DateTime<Utc>,
    /// When the invoice was created.
    pub created_at: DateTime<Utc>,
    /// When the invoice was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Invoice {
    /// Create a new invoice due one payment term from now.
    ///
    /// A missing status defaults to `PENDING`.
    pub fn new(
        order_id: String,
        payment_method: Option<PaymentMethod>,
        payment_status: Option<PaymentStatus>,
    ) -> Self {
        let identity = NewIdentity::generate();
        Self {
            id: identity.id,
            invoice_id: identity.key,
            order_id,
            payment_method,
            payment_status: payment_status.unwrap_or_default(),
            payment_due_date: identity.now + Duration::days(PAYMENT_TERM_DAYS),
            created_at: identity.now,
            updated_at: identity.now,
        }
    }
}

impl Record for Invoice {
    const COLLECTION: &'static str = "invoice";
    const KEY_FIELD: &'static str = "invoice_id";

    fn key(&self) -> &str {
        &self.invoice_id
    }

    fn id(&self) -> Uuid {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_invoice_defaults() {
        let invoice = Invoice::new("o1".into(), None, None);
        assert_eq!(invoice.payment_status, PaymentStatus::Pending);
        assert_eq!(
            invoice.payment_due_date - invoice.created_at,
            Duration::days(1)
        );
    }

    #[test]
    fn test_explicit_status_is_kept() {
        let invoice = Invoice::new("o1".into(), Some(PaymentMethod::Card), Some(PaymentStatus::Paid));
        assert_eq!(invoice.payment_status, PaymentStatus::Paid);
        assert_eq!(invoice.payment_method, Some(PaymentMethod::Card));
    }
}
