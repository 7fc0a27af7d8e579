use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TopSalesRow {
    pub product_id: i32,
    pub name: String,
    pub total_sold: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SalesHistoryRow {
    pub order_id: i32,
    pub product_id: i32,
    pub quantity: i32,
    pub price: i64,
    pub order_date: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductStatsRow {
    pub product_id: i32,
    pub name: String,
    pub total_sold: i64,
    pub last_purchased: Option<NaiveDateTime>,
    pub remaining_stock: i32,
}
