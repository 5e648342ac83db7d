//! Menu operations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use restaurant_core::error::AppError;
use restaurant_core::result::AppResult;
use restaurant_core::types::DocumentPatch;
use restaurant_database::repositories::MenuRepository;
use restaurant_entity::Menu;
use restaurant_entity::menu::in_time_span;

/// Data for a new menu.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateMenu {
    /// Menu name.
    pub name: String,
    /// Menu category.
    pub category: String,
    /// Optional start of the active window.
    pub start_date: Option<DateTime<Utc>>,
    /// Optional end of the active window.
    pub end_date: Option<DateTime<Utc>>,
}

/// Partial menu update.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateMenu {
    /// New name.
    pub name: Option<String>,
    /// New category.
    pub category: Option<String>,
    /// New window start, only applied together with `end_date`.
    pub start_date: Option<DateTime<Utc>>,
    /// New window end, only applied together with `start_date`.
    pub end_date: Option<DateTime<Utc>>,
}

/// Menu CRUD.
#[derive(Debug, Clone)]
pub struct MenuService {
    menus: MenuRepository,
}

impl MenuService {
    /// Creates a new menu service.
    pub fn new(menus: MenuRepository) -> Self {
        Self { menus }
    }

    /// All menus.
    pub async fn list(&self) -> AppResult<Vec<Menu>> {
        self.menus.find_all().await
    }

    /// A menu by `menu_id`.
    pub async fn get(&self, menu_id: &str) -> AppResult<Menu> {
        self.menus.get(menu_id).await
    }

    /// Create a menu.
    pub async fn create(&self, req: CreateMenu) -> AppResult<Menu> {
        let menu = Menu::new(req.name, req.category, req.start_date, req.end_date);
        self.menus.insert(&menu).await?;
        info!(menu_id = %menu.menu_id, "Menu created");
        Ok(menu)
    }

    /// Update a menu.
    ///
    /// A schedule change needs both dates, a start in the future and an end
    /// after the start.
    pub async fn update(&self, menu_id: &str, req: UpdateMenu) -> AppResult<Menu> {
        let mut patch = DocumentPatch::new()
            .set_opt("name", req.name)?
            .set_opt("category", req.category)?;

        match (req.start_date, req.end_date) {
            (Some(start), Some(end)) => {
                if !in_time_span(start, end, Utc::now()) {
                    return Err(AppError::validation(
                        "Menu schedule must start in the future and end after it starts",
                    ));
                }
                patch = patch.set("start_date", start)?.set("end_date", end)?;
            }
            (None, None) => {}
            _ => {
                return Err(AppError::validation(
                    "start_date and end_date must be provided together",
                ));
            }
        }

        self.menus.update(menu_id, patch).await
    }
}
