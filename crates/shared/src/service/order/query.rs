use crate::{
    abstract_trait::{DynOrderQueryRepository, OrderQueryServiceTrait},
    domain::responses::{ApiResponse, OrderResponse},
    errors::ServiceError,
};
use async_trait::async_trait;

pub struct OrderQueryService {
    query: DynOrderQueryRepository,
}

impl OrderQueryService {
    pub fn new(query: DynOrderQueryRepository) -> Self {
        Self { query }
    }
}

#[async_trait]
impl OrderQueryServiceTrait for OrderQueryService {
    async fn find_by_user(
        &self,
        user_id: i32,
    ) -> Result<ApiResponse<Vec<OrderResponse>>, ServiceError> {
        let orders = self
            .query
            .find_by_user(user_id)
            .await
            .map_err(ServiceError::Repo)?;

        let mut responses = Vec::with_capacity(orders.len());
        for order in orders {
            let items = self
                .query
                .find_items_by_order(order.id)
                .await
                .map_err(ServiceError::Repo)?;
            responses.push(OrderResponse::from_parts(order, items));
        }

        Ok(ApiResponse::success("Orders", responses))
    }
}
