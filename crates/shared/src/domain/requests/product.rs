use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct CreateProductRequest {
    #[validate(length(min = 1, message = "Product name must not be empty"))]
    pub name: String,

    #[validate(length(min = 1, message = "Brand must not be empty"))]
    pub brand: String,

    #[validate(range(min = 0, message = "Price must not be negative"))]
    pub price: i64,

    #[validate(range(min = 0, max = 100, message = "Discount rate must be between 0 and 100"))]
    #[serde(default)]
    pub discount_rate: i32,

    #[validate(range(min = 0, message = "Stock must not be negative"))]
    pub stock: i32,

    pub category_id: i32,

    pub image_url: Option<String>,

    pub sku: Option<String>,
}

/// Partial update: only fields that are present overwrite the stored value.
/// `discounted_price` is never accepted from the outside, it is recomputed
/// whenever `price` or `discount_rate` changes.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema, Validate)]
pub struct UpdateProductRequest {
    #[validate(length(min = 1, message = "Product name must not be empty"))]
    pub name: Option<String>,

    #[validate(length(min = 1, message = "Brand must not be empty"))]
    pub brand: Option<String>,

    #[validate(range(min = 0, message = "Price must not be negative"))]
    pub price: Option<i64>,

    #[validate(range(min = 0, max = 100, message = "Discount rate must be between 0 and 100"))]
    pub discount_rate: Option<i32>,

    #[validate(range(min = 0, message = "Stock must not be negative"))]
    pub stock: Option<i32>,

    pub category_id: Option<i32>,

    pub image_url: Option<String>,

    pub sku: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RestockRequest {
    pub amount: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn discount_rate_out_of_range_rejected() {
        let req = CreateProductRequest {
            name: "Oversized Hoodie".into(),
            brand: "Covernat".into(),
            price: 59_000,
            discount_rate: 120,
            stock: 10,
            category_id: 1,
            image_url: None,
            sku: None,
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn absent_fields_skip_validation() {
        let req = UpdateProductRequest {
            price: Some(49_000),
            ..Default::default()
        };
        assert!(req.validate().is_ok());
    }
}
