use crate::{
    domain::responses::{
        ApiResponse, ProductStatsResponse, SalesHistoryResponse, TopProductResponse,
    },
    errors::{RepositoryError, ServiceError},
    model::{ProductStatsRow, SalesHistoryRow, TopSalesRow},
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynReportQueryRepository = Arc<dyn ReportQueryRepositoryTrait + Send + Sync>;
pub type DynReportService = Arc<dyn ReportServiceTrait + Send + Sync>;

#[async_trait]
pub trait ReportQueryRepositoryTrait {
    async fn top_sales(&self, limit: i64) -> Result<Vec<TopSalesRow>, RepositoryError>;
    async fn sales_history(
        &self,
        product_id: Option<i32>,
    ) -> Result<Vec<SalesHistoryRow>, RepositoryError>;
    async fn product_stats(&self, product_id: i32) -> Result<ProductStatsRow, RepositoryError>;
}

#[async_trait]
pub trait ReportServiceTrait {
    async fn top_sales(
        &self,
        user_id: i32,
        limit: Option<i64>,
    ) -> Result<ApiResponse<Vec<TopProductResponse>>, ServiceError>;
    async fn sales_history(
        &self,
        user_id: i32,
        product_id: Option<i32>,
    ) -> Result<ApiResponse<Vec<SalesHistoryResponse>>, ServiceError>;
    async fn product_stats(
        &self,
        user_id: i32,
        product_id: i32,
    ) -> Result<ApiResponse<ProductStatsResponse>, ServiceError>;
}
