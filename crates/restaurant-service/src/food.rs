//! Food operations.

use serde::{Deserialize, Serialize};
use tracing::info;

use restaurant_core::error::AppError;
use restaurant_core::result::AppResult;
use restaurant_core::types::DocumentPatch;
use restaurant_database::repositories::{FoodRepository, MenuRepository};
use restaurant_entity::Food;
use restaurant_entity::food::round_price;

/// Data for a new food.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateFood {
    /// Dish name.
    pub name: String,
    /// Price before rounding.
    pub price: f64,
    /// Image URL.
    pub food_image: String,
    /// Owning menu.
    pub menu_id: String,
}

/// Partial food update.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateFood {
    /// New name.
    pub name: Option<String>,
    /// New price, rounded before storing.
    pub price: Option<f64>,
    /// New image URL.
    pub food_image: Option<String>,
    /// New owning menu, must exist.
    pub menu_id: Option<String>,
}

/// Food CRUD.
#[derive(Debug, Clone)]
pub struct FoodService {
    foods: FoodRepository,
    menus: MenuRepository,
}

impl FoodService {
    /// Creates a new food service.
    pub fn new(foods: FoodRepository, menus: MenuRepository) -> Self {
        Self { foods, menus }
    }

    /// All foods.
    pub async fn list(&self) -> AppResult<Vec<Food>> {
        self.foods.find_all().await
    }

    /// A food by `food_id`.
    pub async fn get(&self, food_id: &str) -> AppResult<Food> {
        self.foods.get(food_id).await
    }

    /// Create a food on an existing menu.
    pub async fn create(&self, req: CreateFood) -> AppResult<Food> {
        self.require_menu(&req.menu_id).await?;

        let food = Food::new(req.name, req.price, req.food_image, req.menu_id);
        self.foods.insert(&food).await?;
        info!(food_id = %food.food_id, menu_id = %food.menu_id, "Food created");
        Ok(food)
    }

    /// Update a food.
    pub async fn update(&self, food_id: &str, req: UpdateFood) -> AppResult<Food> {
        if let Some(menu_id) = req.menu_id.as_deref() {
            self.require_menu(menu_id).await?;
        }

        let patch = DocumentPatch::new()
            .set_opt("name", req.name)?
            .set_opt("price", req.price.map(round_price))?
            .set_opt("food_image", req.food_image)?
            .set_opt("menu_id", req.menu_id)?;

        self.foods.update(food_id, patch).await
    }

    async fn require_menu(&self, menu_id: &str) -> AppResult<()> {
        if !self.menus.exists(menu_id).await? {
            return Err(AppError::not_found(format!("Menu '{menu_id}' not found")));
        }
        Ok(())
    }
}
