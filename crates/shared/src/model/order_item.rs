use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Line item of a finalized order. `price` is the price snapshot taken at
/// order time; later product price changes do not alter it.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct OrderItem {
    pub id: i32,
    pub order_id: i32,
    pub product_id: i32,
    pub quantity: i32,
    pub price: i64,
}
