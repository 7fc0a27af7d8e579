use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct AddCartItemRequest {
    pub product_id: i32,

    #[validate(range(min = 1, message = "Quantity must be at least 1"))]
    pub quantity: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_quantity_rejected() {
        let req = AddCartItemRequest {
            product_id: 1,
            quantity: 0,
        };
        assert!(req.validate().is_err());
    }
}
