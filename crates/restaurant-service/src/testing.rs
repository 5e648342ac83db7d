//! Shared fixtures for service tests.

use std::time::Duration;

use restaurant_auth::password::{PasswordHasher, PasswordValidator};
use restaurant_auth::TokenService;
use restaurant_core::config::AuthConfig;
use restaurant_core::result::AppResult;
use restaurant_database::StoreManager;
use restaurant_database::repositories::{RecordRepository, UserRepository};
use restaurant_entity::{Food, Order, User};

use crate::context::RequestContext;
use crate::food::{CreateFood, FoodService};
use crate::invoice::InvoiceService;
use crate::menu::{CreateMenu, MenuService};
use crate::order::{CreateOrder, OrderItemService, OrderService};
use crate::table::{CreateTable, TableService};
use crate::user::{AccountService, Signup, UserService};

/// Table number used by [`Fixture::seed_order`].
pub const SEED_TABLE_NUMBER: u32 = 7;

/// Every service wired to one in-memory store.
pub struct Fixture {
    pub users: UserRepository,
    pub tokens: TokenService,
    pub accounts: AccountService,
    pub user_service: UserService,
    pub menus: MenuService,
    pub foods: FoodService,
    pub tables: TableService,
    pub orders: OrderService,
    pub order_items: OrderItemService,
    pub invoices: InvoiceService,
}

impl Fixture {
    pub fn new() -> Self {
        let store = StoreManager::in_memory(Duration::from_secs(5));
        let auth = AuthConfig {
            jwt_secret: "fixture-secret".into(),
            ..AuthConfig::default()
        };

        let users = UserRepository::new(store.clone());
        let tokens = TokenService::new(&auth, users.clone());
        let menus = RecordRepository::new(store.clone());
        let foods = RecordRepository::new(store.clone());
        let tables = RecordRepository::new(store.clone());
        let orders = RecordRepository::new(store.clone());
        let items = RecordRepository::new(store.clone());
        let invoices = RecordRepository::new(store);

        Self {
            accounts: AccountService::new(
                users.clone(),
                PasswordHasher::new(),
                PasswordValidator::new(&auth),
                tokens.clone(),
            ),
            user_service: UserService::new(users.clone()),
            menus: MenuService::new(menus.clone()),
            foods: FoodService::new(foods.clone(), menus),
            tables: TableService::new(tables.clone()),
            orders: OrderService::new(orders.clone(), tables.clone()),
            order_items: OrderItemService::new(items.clone(), orders.clone(), foods),
            invoices: InvoiceService::new(invoices, orders, tables, items),
            users,
            tokens,
        }
    }

    pub fn context_for(&self, user: &User) -> RequestContext {
        RequestContext {
            user_id: user.user_id.clone(),
            email: user.email.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            request_time: chrono::Utc::now(),
        }
    }

    pub async fn seed_order(&self) -> AppResult<Order> {
        let table = self
            .tables
            .create(CreateTable {
                number_of_guests: 2,
                table_number: SEED_TABLE_NUMBER,
            })
            .await?;
        self.orders
            .create(CreateOrder {
                order_date: None,
                table_id: table.table_id,
            })
            .await
    }

    pub async fn seed_food(&self, price: f64) -> AppResult<Food> {
        let menu = self
            .menus
            .create(CreateMenu {
                name: "Dinner".into(),
                category: "evening".into(),
                start_date: None,
                end_date: None,
            })
            .await?;
        self.foods
            .create(CreateFood {
                name: "Pasta".into(),
                price,
                food_image: "http://img/pasta.png".into(),
                menu_id: menu.menu_id,
            })
            .await
    }
}

pub fn signup(email: &str, phone: &str) -> Signup {
    Signup {
        first_name: "Ada".into(),
        last_name: "Lovelace".into(),
        email: email.into(),
        phone: phone.into(),
        password: "correct-horse".into(),
        avatar: None,
    }
}
