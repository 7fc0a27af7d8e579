use crate::{
    domain::{
        requests::AddCartItemRequest,
        responses::{ApiResponse, CartItemResponse, CartResponse, CartTotalResponse},
    },
    errors::{RepositoryError, ServiceError},
    model::CartItem as CartItemModel,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynCartQueryRepository = Arc<dyn CartQueryRepositoryTrait + Send + Sync>;
pub type DynCartCommandRepository = Arc<dyn CartCommandRepositoryTrait + Send + Sync>;
pub type DynCartService = Arc<dyn CartServiceTrait + Send + Sync>;

#[async_trait]
pub trait CartQueryRepositoryTrait {
    async fn find_by_user(&self, user_id: i32) -> Result<Vec<CartItemModel>, RepositoryError>;
}

/// Write side of the stock reservation engine. `reserve` must be
/// linearizable per product: concurrent calls whose combined quantity
/// exceeds the recorded stock cannot all succeed.
#[async_trait]
pub trait CartCommandRepositoryTrait {
    async fn reserve(
        &self,
        user_id: i32,
        product_id: i32,
        quantity: i32,
    ) -> Result<CartItemModel, RepositoryError>;
}

#[async_trait]
pub trait CartServiceTrait {
    async fn add_to_cart(
        &self,
        user_id: i32,
        req: &AddCartItemRequest,
    ) -> Result<ApiResponse<CartItemResponse>, ServiceError>;
    async fn get_cart(&self, user_id: i32) -> Result<ApiResponse<CartResponse>, ServiceError>;
    async fn total_quantity(
        &self,
        user_id: i32,
    ) -> Result<ApiResponse<CartTotalResponse>, ServiceError>;
}
