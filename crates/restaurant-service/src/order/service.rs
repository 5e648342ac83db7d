//! Order operations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use restaurant_core::error::AppError;
use restaurant_core::result::AppResult;
use restaurant_core::types::DocumentPatch;
use restaurant_database::repositories::{OrderRepository, TableRepository};
use restaurant_entity::Order;

/// Data for a new order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateOrder {
    /// When the order was placed; defaults to now.
    pub order_date: Option<DateTime<Utc>>,
    /// Table the order is for.
    pub table_id: String,
}

/// Partial order update.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateOrder {
    /// New order date.
    pub order_date: Option<DateTime<Utc>>,
    /// New table, must exist.
    pub table_id: Option<String>,
}

/// Order CRUD with table reference checks.
#[derive(Debug, Clone)]
pub struct OrderService {
    orders: OrderRepository,
    tables: TableRepository,
}

impl OrderService {
    /// Creates a new order service.
    pub fn new(orders: OrderRepository, tables: TableRepository) -> Self {
        Self { orders, tables }
    }

    /// All orders.
    pub async fn list(&self) -> AppResult<Vec<Order>> {
        self.orders.find_all().await
    }

    /// An order by `order_id`.
    pub async fn get(&self, order_id: &str) -> AppResult<Order> {
        self.orders.get(order_id).await
    }

    /// Create an order for an existing table.
    pub async fn create(&self, req: CreateOrder) -> AppResult<Order> {
        self.require_table(&req.table_id).await?;

        let order = Order::new(req.order_date.unwrap_or_else(Utc::now), req.table_id);
        self.orders.insert(&order).await?;
        info!(order_id = %order.order_id, table_id = %order.table_id, "Order created");
        Ok(order)
    }

    /// Update an order.
    pub async fn update(&self, order_id: &str, req: UpdateOrder) -> AppResult<Order> {
        if let Some(table_id) = req.table_id.as_deref() {
            self.require_table(table_id).await?;
        }

        let patch = DocumentPatch::new()
            .set_opt("order_date", req.order_date)?
            .set_opt("table_id", req.table_id)?;
        self.orders.update(order_id, patch).await
    }

    async fn require_table(&self, table_id: &str) -> AppResult<()> {
        if !self.tables.exists(table_id).await? {
            return Err(AppError::not_found(format!("Table '{table_id}' not found")));
        }
        Ok(())
    }
}
