//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use restaurant_auth::TokenService;
use restaurant_auth::password::{PasswordHasher, PasswordValidator};
use restaurant_core::config::AppConfig;
use restaurant_database::StoreManager;
use restaurant_database::repositories::{
    FoodRepository, InvoiceRepository, MenuRepository, OrderItemRepository, OrderRepository,
    RecordRepository, TableRepository, UserRepository,
};
use restaurant_service::{
    AccountService, FoodService, InvoiceService, MenuService, OrderItemService, OrderService,
    TableService, UserService,
};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Infrastructure ───────────────────────────────────────
    /// Document store with per-operation timeout
    pub store: StoreManager,

    // ── Auth ─────────────────────────────────────────────────
    /// Token issue, validation and persistence
    pub tokens: Arc<TokenService>,

    // ── Services ─────────────────────────────────────────────
    pub accounts: Arc<AccountService>,
    pub users: Arc<UserService>,
    pub menus: Arc<MenuService>,
    pub foods: Arc<FoodService>,
    pub tables: Arc<TableService>,
    pub orders: Arc<OrderService>,
    pub order_items: Arc<OrderItemService>,
    pub invoices: Arc<InvoiceService>,
}

impl AppState {
    /// Wires repositories and services on top of an open store.
    pub fn new(config: AppConfig, store: StoreManager) -> Self {
        let user_repo = UserRepository::new(store.clone());
        let menu_repo: MenuRepository = RecordRepository::new(store.clone());
        let food_repo: FoodRepository = RecordRepository::new(store.clone());
        let table_repo: TableRepository = RecordRepository::new(store.clone());
        let order_repo: OrderRepository = RecordRepository::new(store.clone());
        let item_repo: OrderItemRepository = RecordRepository::new(store.clone());
        let invoice_repo: InvoiceRepository = RecordRepository::new(store.clone());

        let tokens = TokenService::new(&config.auth, user_repo.clone());
        let accounts = AccountService::new(
            user_repo.clone(),
            PasswordHasher::new(),
            PasswordValidator::new(&config.auth),
            tokens.clone(),
        );

        Self {
            tokens: Arc::new(tokens),
            accounts: Arc::new(accounts),
            users: Arc::new(UserService::new(user_repo)),
            menus: Arc::new(MenuService::new(menu_repo.clone())),
            foods: Arc::new(FoodService::new(food_repo.clone(), menu_repo)),
            tables: Arc::new(TableService::new(table_repo.clone())),
            orders: Arc::new(OrderService::new(order_repo.clone(), table_repo.clone())),
            order_items: Arc::new(OrderItemService::new(
                item_repo.clone(),
                order_repo.clone(),
                food_repo,
            )),
            invoices: Arc::new(InvoiceService::new(
                invoice_repo,
                order_repo,
                table_repo,
                item_repo,
            )),
            config: Arc::new(config),
            store,
        }
    }
}
