use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct CreateOrderItemRequest {
    pub product_id: i32,

    #[validate(range(min = 1, message = "Quantity must be at least 1"))]
    pub quantity: i32,

    #[validate(range(min = 0, message = "Price must not be negative"))]
    pub price: i64,
}

/// Order placement payload. `items` is only consulted when the caller's cart
/// is empty (the direct-order path); a non-empty cart always wins.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct CreateOrderRequest {
    pub user_id: i32,

    #[validate(range(min = 0, message = "Total price must not be negative"))]
    pub total_price: i64,

    #[validate(nested)]
    #[serde(default)]
    pub items: Vec<CreateOrderItemRequest>,
}
