use crate::model::CartItem;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct CartItemResponse {
    pub id: i32,
    pub product_id: i32,
    pub quantity: i32,
}

impl From<CartItem> for CartItemResponse {
    fn from(value: CartItem) -> Self {
        CartItemResponse {
            id: value.id,
            product_id: value.product_id,
            quantity: value.quantity,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct CartResponse {
    pub items: Vec<CartItemResponse>,
    pub total_items: i64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct CartTotalResponse {
    pub total_quantity: i64,
}
