//! Request DTOs with validation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use restaurant_entity::{PaymentMethod, PaymentStatus, Quantity};
use restaurant_service::food::{CreateFood, UpdateFood};
use restaurant_service::invoice::{CreateInvoice, UpdateInvoice};
use restaurant_service::menu::{CreateMenu, UpdateMenu};
use restaurant_service::order::{CreateOrder, CreateOrderItem, UpdateOrder, UpdateOrderItem};
use restaurant_service::table::{CreateTable, UpdateTable};
use restaurant_service::user::{Signup, UpdateProfile};

// ── Users ───────────────────────────────────────────────────────

/// Signup request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(length(min = 2, max = 100))]
    pub first_name: String,
    #[validate(length(min = 2, max = 100))]
    pub last_name: String,
    #[validate(email(message = "Email is invalid"))]
    pub email: String,
    #[validate(length(min = 1, message = "Phone is required"))]
    pub phone: String,
    /// Length policy is enforced by the account service.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
    #[serde(default)]
    pub avatar: Option<String>,
}

impl From<SignupRequest> for Signup {
    fn from(req: SignupRequest) -> Self {
        Self {
            first_name: req.first_name,
            last_name: req.last_name,
            email: req.email,
            phone: req.phone,
            password: req.password,
            avatar: req.avatar,
        }
    }
}

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Email.
    #[validate(email(message = "Email is invalid"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Token refresh request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RefreshRequest {
    /// Refresh token.
    #[validate(length(min = 1, message = "Refresh token is required"))]
    pub refresh_token: String,
}

/// Update profile request.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[validate(length(min = 2, max = 100))]
    pub first_name: Option<String>,
    #[validate(length(min = 2, max = 100))]
    pub last_name: Option<String>,
    #[validate(length(min = 1))]
    pub phone: Option<String>,
    pub avatar: Option<String>,
}

impl From<UpdateProfileRequest> for UpdateProfile {
    fn from(req: UpdateProfileRequest) -> Self {
        Self {
            first_name: req.first_name,
            last_name: req.last_name,
            phone: req.phone,
            avatar: req.avatar,
        }
    }
}

// ── Menus ───────────────────────────────────────────────────────

/// Create menu request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateMenuRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "Category is required"))]
    pub category: String,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
}

impl From<CreateMenuRequest> for CreateMenu {
    fn from(req: CreateMenuRequest) -> Self {
        Self {
            name: req.name,
            category: req.category,
            start_date: req.start_date,
            end_date: req.end_date,
        }
    }
}

/// Update menu request.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateMenuRequest {
    #[validate(length(min = 1))]
    pub name: Option<String>,
    #[validate(length(min = 1))]
    pub category: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
}

impl From<UpdateMenuRequest> for UpdateMenu {
    fn from(req: UpdateMenuRequest) -> Self {
        Self {
            name: req.name,
            category: req.category,
            start_date: req.start_date,
            end_date: req.end_date,
        }
    }
}

// ── Foods ───────────────────────────────────────────────────────

/// Create food request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateFoodRequest {
    #[validate(length(min = 2, max = 100))]
    pub name: String,
    #[validate(range(min = 0.0, message = "Price must not be negative"))]
    pub price: f64,
    #[validate(length(min = 1, message = "Food image is required"))]
    pub food_image: String,
    #[validate(length(min = 1, message = "Menu id is required"))]
    pub menu_id: String,
}

impl From<CreateFoodRequest> for CreateFood {
    fn from(req: CreateFoodRequest) -> Self {
        Self {
            name: req.name,
            price: req.price,
            food_image: req.food_image,
            menu_id: req.menu_id,
        }
    }
}

/// Update food request.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateFoodRequest {
    #[validate(length(min = 2, max = 100))]
    pub name: Option<String>,
    #[validate(range(min = 0.0, message = "Price must not be negative"))]
    pub price: Option<f64>,
    pub food_image: Option<String>,
    pub menu_id: Option<String>,
}

impl From<UpdateFoodRequest> for UpdateFood {
    fn from(req: UpdateFoodRequest) -> Self {
        Self {
            name: req.name,
            price: req.price,
            food_image: req.food_image,
            menu_id: req.menu_id,
        }
    }
}

// ── Tables ──────────────────────────────────────────────────────

/// Create table request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateTableRequest {
    #[validate(range(min = 1, message = "A table seats at least one guest"))]
    pub number_of_guests: u32,
    pub table_number: u32,
}

impl From<CreateTableRequest> for CreateTable {
    fn from(req: CreateTableRequest) -> Self {
        Self {
            number_of_guests: req.number_of_guests,
            table_number: req.table_number,
        }
    }
}

/// Update table request.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateTableRequest {
    #[validate(range(min = 1, message = "A table seats at least one guest"))]
    pub number_of_guests: Option<u32>,
    pub table_number: Option<u32>,
}

impl From<UpdateTableRequest> for UpdateTable {
    fn from(req: UpdateTableRequest) -> Self {
        Self {
            number_of_guests: req.number_of_guests,
            table_number: req.table_number,
        }
    }
}

// ── Orders ──────────────────────────────────────────────────────

/// Create order request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateOrderRequest {
    /// Defaults to the time of the request.
    pub order_date: Option<DateTime<Utc>>,
    #[validate(length(min = 1, message = "Table id is required"))]
    pub table_id: String,
}

impl From<CreateOrderRequest> for CreateOrder {
    fn from(req: CreateOrderRequest) -> Self {
        Self {
            order_date: req.order_date,
            table_id: req.table_id,
        }
    }
}

/// Update order request.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateOrderRequest {
    pub order_date: Option<DateTime<Utc>>,
    #[validate(length(min = 1))]
    pub table_id: Option<String>,
}

impl From<UpdateOrderRequest> for UpdateOrder {
    fn from(req: UpdateOrderRequest) -> Self {
        Self {
            order_date: req.order_date,
            table_id: req.table_id,
        }
    }
}

/// Create order item request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateOrderItemRequest {
    #[validate(length(min = 1, message = "Order id is required"))]
    pub order_id: String,
    #[validate(length(min = 1, message = "Food id is required"))]
    pub food_id: String,
    pub quantity: Quantity,
}

impl From<CreateOrderItemRequest> for CreateOrderItem {
    fn from(req: CreateOrderItemRequest) -> Self {
        Self {
            order_id: req.order_id,
            food_id: req.food_id,
            quantity: req.quantity,
        }
    }
}

/// Update order item request.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateOrderItemRequest {
    pub quantity: Option<Quantity>,
    #[validate(length(min = 1))]
    pub food_id: Option<String>,
}

impl From<UpdateOrderItemRequest> for UpdateOrderItem {
    fn from(req: UpdateOrderItemRequest) -> Self {
        Self {
            quantity: req.quantity,
            food_id: req.food_id,
        }
    }
}

// ── Invoices ────────────────────────────────────────────────────

/// Create invoice request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateInvoiceRequest {
    #[validate(length(min = 1, message = "Order id is required"))]
    pub order_id: String,
    pub payment_method: Option<PaymentMethod>,
    pub payment_status: Option<PaymentStatus>,
}

impl From<CreateInvoiceRequest> for CreateInvoice {
    fn from(req: CreateInvoiceRequest) -> Self {
        Self {
            order_id: req.order_id,
            payment_method: req.payment_method,
            payment_status: req.payment_status,
        }
    }
}

/// Update invoice request.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateInvoiceRequest {
    pub payment_method: Option<PaymentMethod>,
    pub payment_status: Option<PaymentStatus>,
}

impl From<UpdateInvoiceRequest> for UpdateInvoice {
    fn from(req: UpdateInvoiceRequest) -> Self {
        Self {
            payment_method: req.payment_method,
            payment_status: req.payment_status,
        }
    }
}
