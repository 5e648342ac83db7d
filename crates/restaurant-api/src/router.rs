//! Route definitions for the restaurant HTTP API.
//!
//! Public routes cover account creation, login, token refresh and health.
//! Everything else sits behind the token gate.

use axum::{
    Router,
    middleware as axum_middleware,
    routing::{get, post},
};

use crate::handlers;
use crate::middleware::auth::require_token;
use crate::state::AppState;

/// Build the Axum router with every route and the token gate.
pub fn build_router(state: AppState) -> Router {
    let protected = Router::new()
        .merge(user_routes())
        .merge(menu_routes())
        .merge(food_routes())
        .merge(table_routes())
        .merge(order_routes())
        .merge(order_item_routes())
        .merge(invoice_routes())
        .route_layer(axum_middleware::from_fn_with_state(
            state.clone(),
            require_token,
        ));

    Router::new()
        .merge(public_routes())
        .merge(protected)
        .with_state(state)
}

/// Signup, login, refresh and health
fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/users/sign_up", post(handlers::user::sign_up))
        .route("/users/login", post(handlers::user::login))
        .route("/users/refresh", post(handlers::user::refresh))
        .route("/health", get(handlers::health::health))
}

fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(handlers::user::list_users))
        .route("/users/me", get(handlers::user::me))
        .route(
            "/users/{user_id}",
            get(handlers::user::get_user).patch(handlers::user::update_user),
        )
}

fn menu_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/menus",
            get(handlers::menu::list_menus).post(handlers::menu::create_menu),
        )
        .route(
            "/menus/{menu_id}",
            get(handlers::menu::get_menu).patch(handlers::menu::update_menu),
        )
}

fn food_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/foods",
            get(handlers::food::list_foods).post(handlers::food::create_food),
        )
        .route(
            "/foods/{food_id}",
            get(handlers::food::get_food).patch(handlers::food::update_food),
        )
}

fn table_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/tables",
            get(handlers::table::list_tables).post(handlers::table::create_table),
        )
        .route(
            "/tables/{table_id}",
            get(handlers::table::get_table).patch(handlers::table::update_table),
        )
}

fn order_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/orders",
            get(handlers::order::list_orders).post(handlers::order::create_order),
        )
        .route(
            "/orders/{order_id}",
            get(handlers::order::get_order).patch(handlers::order::update_order),
        )
}

fn order_item_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/order_items",
            get(handlers::order_item::list_order_items)
                .post(handlers::order_item::create_order_item),
        )
        .route(
            "/order_items/order/{order_id}",
            get(handlers::order_item::items_by_order),
        )
        .route(
            "/order_items/{order_item_id}",
            get(handlers::order_item::get_order_item)
                .patch(handlers::order_item::update_order_item),
        )
}

fn invoice_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/invoices",
            get(handlers::invoice::list_invoices).post(handlers::invoice::create_invoice),
        )
        .route(
            "/invoices/{invoice_id}",
            get(handlers::invoice::get_invoice).patch(handlers::invoice::update_invoice),
        )
}
