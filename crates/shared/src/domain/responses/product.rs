use crate::model::Product;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct ProductResponse {
    pub id: i32,
    pub category_id: i32,
    pub name: String,
    pub brand: String,
    pub price: i64,
    pub discount_rate: i32,
    pub discounted_price: i64,
    pub stock: i32,
    pub image_url: Option<String>,
    pub sku: Option<String>,
    pub created_at: Option<String>,
}

impl From<Product> for ProductResponse {
    fn from(value: Product) -> Self {
        ProductResponse {
            id: value.id,
            category_id: value.category_id,
            name: value.name,
            brand: value.brand,
            price: value.price,
            discount_rate: value.discount_rate,
            discounted_price: value.discounted_price,
            stock: value.stock,
            image_url: value.image_url,
            sku: value.sku,
            created_at: value.created_at.map(|dt| dt.to_string()),
        }
    }
}
