use crate::{
    abstract_trait::ReportQueryRepositoryTrait,
    config::ConnectionPool,
    errors::RepositoryError,
    model::{Product as ProductModel, ProductStatsRow, SalesHistoryRow, TopSalesRow},
};
use async_trait::async_trait;
use chrono::NaiveDateTime;
use tracing::error;

pub struct ReportQueryRepository {
    db: ConnectionPool,
}

impl ReportQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ReportQueryRepositoryTrait for ReportQueryRepository {
    async fn top_sales(&self, limit: i64) -> Result<Vec<TopSalesRow>, RepositoryError> {
        sqlx::query_as::<_, TopSalesRow>(
            r#"
            SELECT p.id AS product_id, p.name, COALESCE(SUM(oi.quantity), 0)::BIGINT AS total_sold
            FROM products p
            JOIN order_items oi ON oi.product_id = p.id
            GROUP BY p.id, p.name
            ORDER BY total_sold DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.db)
        .await
        .map_err(|err| {
            error!("❌ Failed to compute top sales: {:?}", err);
            RepositoryError::from(err)
        })
    }

    async fn sales_history(
        &self,
        product_id: Option<i32>,
    ) -> Result<Vec<SalesHistoryRow>, RepositoryError> {
        let rows = match product_id {
            Some(product_id) => {
                sqlx::query_as::<_, SalesHistoryRow>(
                    r#"
                    SELECT oi.order_id, oi.product_id, oi.quantity, oi.price, o.order_date
                    FROM order_items oi
                    JOIN orders o ON o.id = oi.order_id
                    WHERE oi.product_id = $1
                    ORDER BY o.order_date DESC
                    "#,
                )
                .bind(product_id)
                .fetch_all(&self.db)
                .await
            }
            None => {
                sqlx::query_as::<_, SalesHistoryRow>(
                    r#"
                    SELECT oi.order_id, oi.product_id, oi.quantity, oi.price, o.order_date
                    FROM order_items oi
                    JOIN orders o ON o.id = oi.order_id
                    ORDER BY o.order_date DESC
                    "#,
                )
                .fetch_all(&self.db)
                .await
            }
        };

        rows.map_err(|err| {
            error!("❌ Failed to load sales history: {:?}", err);
            RepositoryError::from(err)
        })
    }

    async fn product_stats(&self, product_id: i32) -> Result<ProductStatsRow, RepositoryError> {
        let product = sqlx::query_as::<_, ProductModel>(
            r#"
            SELECT id, category_id, name, brand, price, discount_rate,
                   discounted_price, stock, image_url, sku, created_at
            FROM products
            WHERE id = $1
            "#,
        )
        .bind(product_id)
        .fetch_optional(&self.db)
        .await
        .map_err(RepositoryError::from)?
        .ok_or(RepositoryError::NotFound)?;

        let total_sold = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COALESCE(SUM(quantity), 0)::BIGINT
            FROM order_items
            WHERE product_id = $1
            "#,
        )
        .bind(product_id)
        .fetch_one(&self.db)
        .await
        .map_err(RepositoryError::from)?;

        let last_purchased = sqlx::query_scalar::<_, Option<NaiveDateTime>>(
            r#"
            SELECT o.order_date
            FROM orders o
            JOIN order_items oi ON oi.order_id = o.id
            WHERE oi.product_id = $1
            ORDER BY o.order_date DESC
            LIMIT 1
            "#,
        )
        .bind(product_id)
        .fetch_optional(&self.db)
        .await
        .map_err(|err| {
            error!("❌ Failed to load stats for product {}: {:?}", product_id, err);
            RepositoryError::from(err)
        })?
        .flatten();

        Ok(ProductStatsRow {
            product_id: product.id,
            name: product.name,
            total_sold,
            last_purchased,
            remaining_stock: product.stock,
        })
    }
}
