use crate::{
    abstract_trait::ProductQueryRepositoryTrait, config::ConnectionPool, errors::RepositoryError,
    model::Product as ProductModel,
};
use async_trait::async_trait;
use tracing::error;

pub struct ProductQueryRepository {
    db: ConnectionPool,
}

impl ProductQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductQueryRepositoryTrait for ProductQueryRepository {
    async fn find_all(&self) -> Result<Vec<ProductModel>, RepositoryError> {
        sqlx::query_as::<_, ProductModel>(
            r#"
            SELECT id, category_id, name, brand, price, discount_rate,
                   discounted_price, stock, image_url, sku, created_at
            FROM products
            ORDER BY id
            "#,
        )
        .fetch_all(&self.db)
        .await
        .map_err(|err| {
            error!("❌ Failed to list products: {:?}", err);
            RepositoryError::from(err)
        })
    }

    async fn find_by_id(&self, id: i32) -> Result<ProductModel, RepositoryError> {
        let product = sqlx::query_as::<_, ProductModel>(
            r#"
            SELECT id, category_id, name, brand, price, discount_rate,
                   discounted_price, stock, image_url, sku, created_at
            FROM products
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await
        .map_err(|err| {
            error!("❌ Failed to load product {}: {:?}", id, err);
            RepositoryError::from(err)
        })?;

        product.ok_or(RepositoryError::NotFound)
    }
}
