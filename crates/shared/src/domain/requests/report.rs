use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct TopSalesQuery {
    /// How many products to return, best sellers first.
    pub limit: Option<i64>,
}

#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct SalesHistoryQuery {
    /// Restrict the history to a single product.
    pub product_id: Option<i32>,
}
