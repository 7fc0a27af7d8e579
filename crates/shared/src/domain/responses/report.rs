use crate::model::{Product, ProductStatsRow, SalesHistoryRow, TopSalesRow};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct TopProductResponse {
    pub product_id: i32,
    pub name: String,
    pub total_sold: i64,
}

impl From<TopSalesRow> for TopProductResponse {
    fn from(value: TopSalesRow) -> Self {
        TopProductResponse {
            product_id: value.product_id,
            name: value.name,
            total_sold: value.total_sold,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct SalesHistoryResponse {
    pub order_id: i32,
    pub product_id: i32,
    pub quantity: i32,
    pub price: i64,
    pub order_date: Option<String>,
}

impl From<SalesHistoryRow> for SalesHistoryResponse {
    fn from(value: SalesHistoryRow) -> Self {
        SalesHistoryResponse {
            order_id: value.order_id,
            product_id: value.product_id,
            quantity: value.quantity,
            price: value.price,
            order_date: value.order_date.map(|dt| dt.to_string()),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct ProductStatsResponse {
    pub product_id: i32,
    pub name: String,
    pub total_sold: i64,
    pub last_purchased: Option<String>,
    pub remaining_stock: i32,
}

impl From<ProductStatsRow> for ProductStatsResponse {
    fn from(value: ProductStatsRow) -> Self {
        ProductStatsResponse {
            product_id: value.product_id,
            name: value.name,
            total_sold: value.total_sold,
            last_purchased: value.last_purchased.map(|dt| dt.to_string()),
            remaining_stock: value.remaining_stock,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct RestockResponse {
    pub product_id: i32,
    pub new_stock: i32,
}

impl From<Product> for RestockResponse {
    fn from(value: Product) -> Self {
        RestockResponse {
            product_id: value.id,
            new_stock: value.stock,
        }
    }
}
