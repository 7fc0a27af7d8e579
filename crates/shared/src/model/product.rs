use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Product {
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
    pub created_at: Option<NaiveDateTime>,
}

/// Effective sale price after the discount rate is applied, floored to the
/// minor currency unit. Stored alongside `price` and `discount_rate` and
/// recomputed whenever either of them changes.
pub fn discounted_price(price: i64, discount_rate: i32) -> i64 {
    price * (100 - discount_rate as i64) / 100
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn discount_is_applied_and_floored() {
        assert_eq!(discounted_price(10_000, 25), 7_500);
        assert_eq!(discounted_price(999, 50), 499);
        assert_eq!(discounted_price(5_000, 0), 5_000);
        assert_eq!(discounted_price(5_000, 100), 0);
    }
}
