//! Menus, foods, tables, orders, order items and invoices end to end.

use axum::http::StatusCode;
use serde_json::{Value, json};

use crate::helpers::TestApp;

struct Seeded {
    token: String,
    table: Value,
    food: Value,
    order: Value,
}

async fn seed(app: &TestApp) -> Seeded {
    let (token, _) = app.signed_up("chef@example.com", "555-9000").await;

    let table = app
        .create(
            "/tables",
            json!({ "number_of_guests": 4, "table_number": 12 }),
            &token,
        )
        .await;
    let menu = app
        .create(
            "/menus",
            json!({ "name": "Lunch", "category": "midday" }),
            &token,
        )
        .await;
    let food = app
        .create(
            "/foods",
            json!({
                "name": "Ramen",
                "price": 9.999,
                "food_image": "http://img/ramen.png",
                "menu_id": menu["menu_id"],
            }),
            &token,
        )
        .await;
    let order = app
        .create("/orders", json!({ "table_id": table["table_id"] }), &token)
        .await;

    Seeded {
        token,
        table,
        food,
        order,
    }
}

#[tokio::test]
async fn test_food_price_is_rounded_and_menu_required() {
    let app = TestApp::new();
    let seeded = seed(&app).await;
    assert_eq!(seeded.food["price"], 10.0);

    let response = app
        .request(
            "POST",
            "/foods",
            Some(json!({
                "name": "Ghost",
                "price": 1.0,
                "food_image": "http://img/ghost.png",
                "menu_id": "no-such-menu",
            })),
            Some(&seeded.token),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let response = app
        .request(
            "POST",
            "/foods",
            Some(json!({
                "name": "X",
                "price": 1.0,
                "food_image": "http://img/x.png",
                "menu_id": seeded.food["menu_id"],
            })),
            Some(&seeded.token),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_code(), "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_menu_update_requires_a_future_window() {
    let app = TestApp::new();
    let seeded = seed(&app).await;
    let menus = app
        .request("GET", "/menus", None, Some(&seeded.token))
        .await;
    let menu_id = menus.data()[0]["menu_id"].as_str().unwrap().to_string();

    let response = app
        .request(
            "PATCH",
            &format!("/menus/{menu_id}"),
            Some(json!({
                "start_date": "2001-01-01T00:00:00Z",
                "end_date": "2001-02-01T00:00:00Z",
            })),
            Some(&seeded.token),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let response = app
        .request(
            "PATCH",
            &format!("/menus/{menu_id}"),
            Some(json!({ "category": "all day" })),
            Some(&seeded.token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["category"], "all day");
}

#[tokio::test]
async fn test_order_requires_existing_table() {
    let app = TestApp::new();
    let seeded = seed(&app).await;

    let response = app
        .request(
            "POST",
            "/orders",
            Some(json!({ "table_id": "no-such-table" })),
            Some(&seeded.token),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let order_id = seeded.order["order_id"].as_str().unwrap();
    let response = app
        .request("GET", &format!("/orders/{order_id}"), None, Some(&seeded.token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["table_id"], seeded.table["table_id"]);
}

#[tokio::test]
async fn test_invoice_view_totals_the_order() {
    let app = TestApp::new();
    let seeded = seed(&app).await;
    let order_id = seeded.order["order_id"].as_str().unwrap();

    for quantity in ["S", "L"] {
        let item = app
            .create(
                "/order_items",
                json!({
                    "order_id": order_id,
                    "food_id": seeded.food["food_id"],
                    "quantity": quantity,
                }),
                &seeded.token,
            )
            .await;
        assert_eq!(item["unit_price"], 10.0);
    }

    let items = app
        .request(
            "GET",
            &format!("/order_items/order/{order_id}"),
            None,
            Some(&seeded.token),
        )
        .await;
    assert_eq!(items.data().as_array().unwrap().len(), 2);

    let invoice = app
        .create("/invoices", json!({ "order_id": order_id }), &seeded.token)
        .await;
    assert_eq!(invoice["payment_status"], "PENDING");
    let invoice_id = invoice["invoice_id"].as_str().unwrap();

    let view = app
        .request(
            "GET",
            &format!("/invoices/{invoice_id}"),
            None,
            Some(&seeded.token),
        )
        .await;
    assert_eq!(view.status, StatusCode::OK);
    assert_eq!(view.data()["payment_due"], 20.0);
    assert_eq!(view.data()["payment_method"], "null");
    assert_eq!(view.data()["table_number"], 12);
    assert_eq!(view.data()["order_details"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_invoice_update_by_invoice_id() {
    let app = TestApp::new();
    let seeded = seed(&app).await;
    let invoice = app
        .create(
            "/invoices",
            json!({ "order_id": seeded.order["order_id"], "payment_method": "CASH" }),
            &seeded.token,
        )
        .await;
    let invoice_id = invoice["invoice_id"].as_str().unwrap();

    let response = app
        .request(
            "PATCH",
            &format!("/invoices/{invoice_id}"),
            Some(json!({ "payment_method": "CARD", "payment_status": "PAID" })),
            Some(&seeded.token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["payment_method"], "CARD");
    assert_eq!(response.data()["payment_status"], "PAID");

    let response = app
        .request(
            "PATCH",
            "/invoices/no-such-invoice",
            Some(json!({ "payment_status": "PAID" })),
            Some(&seeded.token),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let response = app
        .request(
            "PATCH",
            &format!("/invoices/{invoice_id}"),
            Some(json!({ "payment_method": "CHEQUE" })),
            Some(&seeded.token),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}
