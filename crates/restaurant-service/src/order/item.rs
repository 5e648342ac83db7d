//! Order item operations.

use serde::{Deserialize, Serialize};
use tracing::info;

use restaurant_core::error::AppError;
use restaurant_core::result::AppResult;
use restaurant_core::types::{DocumentPatch, Filter};
use restaurant_database::repositories::{FoodRepository, OrderItemRepository, OrderRepository};
use restaurant_entity::{OrderItem, Quantity};

/// Data for a new order item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateOrderItem {
    /// Order the item is added to.
    pub order_id: String,
    /// Ordered dish.
    pub food_id: String,
    /// Portion size.
    pub quantity: Quantity,
}

/// Partial order item update.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateOrderItem {
    /// New portion size.
    pub quantity: Option<Quantity>,
    /// Replacement dish; the unit price is re-copied from it.
    pub food_id: Option<String>,
}

/// Order items: dishes on an order, priced when added.
#[derive(Debug, Clone)]
pub struct OrderItemService {
    items: OrderItemRepository,
    orders: OrderRepository,
    foods: FoodRepository,
}

impl OrderItemService {
    /// Creates a new order item service.
    pub fn new(items: OrderItemRepository, orders: OrderRepository, foods: FoodRepository) -> Self {
        Self {
            items,
            orders,
            foods,
        }
    }

    /// All order items.
    pub async fn list(&self) -> AppResult<Vec<OrderItem>> {
        self.items.find_all().await
    }

    /// An item by `order_item_id`.
    pub async fn get(&self, order_item_id: &str) -> AppResult<OrderItem> {
        self.items.get(order_item_id).await
    }

    /// Every item on an order, in the order they were added.
    pub async fn items_by_order(&self, order_id: &str) -> AppResult<Vec<OrderItem>> {
        if !self.orders.exists(order_id).await? {
            return Err(AppError::not_found(format!("Order '{order_id}' not found")));
        }
        self.items.find_by(&Filter::eq("order_id", order_id)).await
    }

    /// Add a dish to an existing order at the dish's current price.
    pub async fn create(&self, req: CreateOrderItem) -> AppResult<OrderItem> {
        if !self.orders.exists(&req.order_id).await? {
            return Err(AppError::not_found(format!(
                "Order '{}' not found",
                req.order_id
            )));
        }
        let food = self.foods.get(&req.food_id).await?;

        let item = OrderItem::new(req.order_id, food.food_id, req.quantity, food.price);
        self.items.insert(&item).await?;
        info!(
            order_item_id = %item.order_item_id,
            order_id = %item.order_id,
            "Order item created"
        );
        Ok(item)
    }

    /// Update an order item.
    pub async fn update(&self, order_item_id: &str, req: UpdateOrderItem) -> AppResult<OrderItem> {
        let mut patch = DocumentPatch::new().set_opt("quantity", req.quantity)?;

        if let Some(food_id) = req.food_id.as_deref() {
            let food = self.foods.get(food_id).await?;
            patch = patch
                .set("food_id", &food.food_id)?
                .set("unit_price", food.price)?;
        }

        self.items.update(order_item_id, patch).await
    }
}
