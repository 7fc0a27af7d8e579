use crate::{
    abstract_trait::{DynReportQueryRepository, DynUserQueryRepository, ReportServiceTrait},
    domain::responses::{
        ApiResponse, ProductStatsResponse, SalesHistoryResponse, TopProductResponse,
    },
    errors::ServiceError,
    service::ensure_admin,
};
use async_trait::async_trait;

const DEFAULT_TOP_SALES_LIMIT: i64 = 10;

pub struct ReportService {
    query: DynReportQueryRepository,
    user_query: DynUserQueryRepository,
}

impl ReportService {
    pub fn new(query: DynReportQueryRepository, user_query: DynUserQueryRepository) -> Self {
        Self { query, user_query }
    }
}

#[async_trait]
impl ReportServiceTrait for ReportService {
    async fn top_sales(
        &self,
        user_id: i32,
        limit: Option<i64>,
    ) -> Result<ApiResponse<Vec<TopProductResponse>>, ServiceError> {
        ensure_admin(&self.user_query, user_id).await?;

        let rows = self
            .query
            .top_sales(limit.unwrap_or(DEFAULT_TOP_SALES_LIMIT))
            .await
            .map_err(ServiceError::Repo)?;

        Ok(ApiResponse::success(
            "Top selling products",
            rows.into_iter().map(TopProductResponse::from).collect(),
        ))
    }

    async fn sales_history(
        &self,
        user_id: i32,
        product_id: Option<i32>,
    ) -> Result<ApiResponse<Vec<SalesHistoryResponse>>, ServiceError> {
        ensure_admin(&self.user_query, user_id).await?;

        let rows = self
            .query
            .sales_history(product_id)
            .await
            .map_err(ServiceError::Repo)?;

        Ok(ApiResponse::success(
            "Sales history",
            rows.into_iter().map(SalesHistoryResponse::from).collect(),
        ))
    }

    async fn product_stats(
        &self,
        user_id: i32,
        product_id: i32,
    ) -> Result<ApiResponse<ProductStatsResponse>, ServiceError> {
        ensure_admin(&self.user_query, user_id).await?;

        let stats = self
            .query
            .product_stats(product_id)
            .await
            .map_err(ServiceError::Repo)?;

        Ok(ApiResponse::success(
            "Product statistics",
            ProductStatsResponse::from(stats),
        ))
    }
}
