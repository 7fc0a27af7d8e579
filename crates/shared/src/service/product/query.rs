use crate::{
    abstract_trait::{DynProductQueryRepository, ProductQueryServiceTrait},
    domain::responses::{ApiResponse, ProductResponse},
    errors::ServiceError,
};
use async_trait::async_trait;

pub struct ProductQueryService {
    query: DynProductQueryRepository,
}

impl ProductQueryService {
    pub fn new(query: DynProductQueryRepository) -> Self {
        Self { query }
    }
}

#[async_trait]
impl ProductQueryServiceTrait for ProductQueryService {
    async fn find_all(&self) -> Result<ApiResponse<Vec<ProductResponse>>, ServiceError> {
        let products = self.query.find_all().await.map_err(ServiceError::Repo)?;

        Ok(ApiResponse::success(
            "Products",
            products.into_iter().map(ProductResponse::from).collect(),
        ))
    }

    async fn find_by_id(&self, id: i32) -> Result<ApiResponse<ProductResponse>, ServiceError> {
        let product = self.query.find_by_id(id).await.map_err(ServiceError::Repo)?;

        Ok(ApiResponse::success(
            "Product details",
            ProductResponse::from(product),
        ))
    }
}
