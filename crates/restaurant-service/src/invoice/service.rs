//! Invoice operations.

use serde::{Deserialize, Serialize};
use tracing::info;

use restaurant_core::error::AppError;
use restaurant_core::result::AppResult;
use restaurant_core::types::{DocumentPatch, Filter};
use restaurant_database::repositories::{
    InvoiceRepository, OrderItemRepository, OrderRepository, TableRepository,
};
use restaurant_entity::{Invoice, PaymentMethod, PaymentStatus};

use super::view::InvoiceView;

/// Data for a new invoice.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateInvoice {
    /// Billed order, must exist.
    pub order_id: String,
    /// Payment method if already known.
    pub payment_method: Option<PaymentMethod>,
    /// Initial status; `PENDING` when absent.
    pub payment_status: Option<PaymentStatus>,
}

/// Partial invoice update.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateInvoice {
    /// New payment method.
    pub payment_method: Option<PaymentMethod>,
    /// New status.
    pub payment_status: Option<PaymentStatus>,
}

/// Invoice CRUD and the joined invoice view.
#[derive(Debug, Clone)]
pub struct InvoiceService {
    invoices: InvoiceRepository,
    orders: OrderRepository,
    tables: TableRepository,
    items: OrderItemRepository,
}

impl InvoiceService {
    /// Creates a new invoice service.
    pub fn new(
        invoices: InvoiceRepository,
        orders: OrderRepository,
        tables: TableRepository,
        items: OrderItemRepository,
    ) -> Self {
        Self {
            invoices,
            orders,
            tables,
            items,
        }
    }

    /// All invoices.
    pub async fn list(&self) -> AppResult<Vec<Invoice>> {
        self.invoices.find_all().await
    }

    /// An invoice joined with its order's table number and items.
    pub async fn view(&self, invoice_id: &str) -> AppResult<InvoiceView> {
        let invoice = self.invoices.get(invoice_id).await?;
        let items = self
            .items
            .find_by(&Filter::eq("order_id", invoice.order_id.as_str()))
            .await?;

        let table_number = match self.orders.find_by_key(&invoice.order_id).await? {
            Some(order) => self
                .tables
                .find_by_key(&order.table_id)
                .await?
                .map(|table| table.table_number),
            None => None,
        };

        Ok(InvoiceView::new(invoice, table_number, items))
    }

    /// Raise an invoice against an existing order.
    pub async fn create(&self, req: CreateInvoice) -> AppResult<Invoice> {
        if !self.orders.exists(&req.order_id).await? {
            return Err(AppError::not_found(format!(
                "Order '{}' not found",
                req.order_id
            )));
        }

        let invoice = Invoice::new(req.order_id, req.payment_method, req.payment_status);
        self.invoices.insert(&invoice).await?;
        info!(invoice_id = %invoice.invoice_id, order_id = %invoice.order_id, "Invoice created");
        Ok(invoice)
    }

    /// Update payment details of an invoice, addressed by `invoice_id`.
    pub async fn update(&self, invoice_id: &str, req: UpdateInvoice) -> AppResult<Invoice> {
        let patch = DocumentPatch::new()
            .set_opt("payment_method", req.payment_method)?
            .set_opt("payment_status", req.payment_status)?;

        let invoice = self.invoices.update(invoice_id, patch).await?;
        info!(invoice_id, status = %invoice.payment_status, "Invoice updated");
        Ok(invoice)
    }
}
