use crate::{
    abstract_trait::ProductCommandRepositoryTrait,
    config::ConnectionPool,
    domain::requests::{CreateProductRequest, UpdateProductRequest},
    errors::RepositoryError,
    model::{Product as ProductModel, discounted_price},
};
use async_trait::async_trait;
use tracing::{error, info};

pub struct ProductCommandRepository {
    db: ConnectionPool,
}

impl ProductCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductCommandRepositoryTrait for ProductCommandRepository {
    async fn create_product(
        &self,
        req: &CreateProductRequest,
    ) -> Result<ProductModel, RepositoryError> {
        let product = sqlx::query_as::<_, ProductModel>(
            r#"
            INSERT INTO products (category_id, name, brand, price, discount_rate,
                                  discounted_price, stock, image_url, sku)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING id, category_id, name, brand, price, discount_rate,
                      discounted_price, stock, image_url, sku, created_at
            "#,
        )
        .bind(req.category_id)
        .bind(&req.name)
        .bind(&req.brand)
        .bind(req.price)
        .bind(req.discount_rate)
        .bind(discounted_price(req.price, req.discount_rate))
        .bind(req.stock)
        .bind(&req.image_url)
        .bind(&req.sku)
        .fetch_one(&self.db)
        .await
        .map_err(|err| {
            error!("❌ Failed to create product {}: {:?}", req.name, err);
            RepositoryError::from(err)
        })?;

        info!("✅ Created product ID {} ({})", product.id, product.name);
        Ok(product)
    }

    // Patch-if-present: absent fields keep their stored value. The effective
    // price/discount pair always drives discounted_price, whichever of the
    // two the caller sent.
    async fn update_product(
        &self,
        id: i32,
        req: &UpdateProductRequest,
    ) -> Result<ProductModel, RepositoryError> {
        let product = sqlx::query_as::<_, ProductModel>(
            r#"
            UPDATE products
            SET name = COALESCE($2, name),
                brand = COALESCE($3, brand),
                price = COALESCE($4, price),
                discount_rate = COALESCE($5, discount_rate),
                discounted_price = COALESCE($4, price) * (100 - COALESCE($5, discount_rate)) / 100,
                stock = COALESCE($6, stock),
                category_id = COALESCE($7, category_id),
                image_url = COALESCE($8, image_url),
                sku = COALESCE($9, sku)
            WHERE id = $1
            RETURNING id, category_id, name, brand, price, discount_rate,
                      discounted_price, stock, image_url, sku, created_at
            "#,
        )
        .bind(id)
        .bind(&req.name)
        .bind(&req.brand)
        .bind(req.price)
        .bind(req.discount_rate)
        .bind(req.stock)
        .bind(req.category_id)
        .bind(&req.image_url)
        .bind(&req.sku)
        .fetch_optional(&self.db)
        .await
        .map_err(|err| {
            error!("❌ Failed to update product {}: {:?}", id, err);
            RepositoryError::from(err)
        })?
        .ok_or(RepositoryError::NotFound)?;

        info!("🔄 Updated product ID {}", product.id);
        Ok(product)
    }

    async fn delete_product(&self, id: i32) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            r#"
            DELETE FROM products
            WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&self.db)
        .await
        .map_err(|err| {
            error!("❌ Failed to delete product {}: {:?}", id, err);
            RepositoryError::from(err)
        })?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        info!("🗑️ Deleted product ID {}", id);
        Ok(())
    }

    async fn restock(&self, product_id: i32, amount: i32) -> Result<ProductModel, RepositoryError> {
        let product = sqlx::query_as::<_, ProductModel>(
            r#"
            UPDATE products
            SET stock = stock + $1
            WHERE id = $2
            RETURNING id, category_id, name, brand, price, discount_rate,
                      discounted_price, stock, image_url, sku, created_at
            "#,
        )
        .bind(amount)
        .bind(product_id)
        .fetch_optional(&self.db)
        .await
        .map_err(|err| {
            error!("❌ Failed to restock product {}: {:?}", product_id, err);
            RepositoryError::from(err)
        })?
        .ok_or(RepositoryError::NotFound)?;

        info!(
            "✅ Restocked product ID {} (new stock: {})",
            product.id, product.stock
        );
        Ok(product)
    }
}
