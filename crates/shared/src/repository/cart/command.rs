use crate::{
    abstract_trait::CartCommandRepositoryTrait, config::ConnectionPool, errors::RepositoryError,
    model::{CartItem as CartItemModel, Product as ProductModel},
};
use async_trait::async_trait;
use tracing::{error, info};

pub struct CartCommandRepository {
    db: ConnectionPool,
}

impl CartCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CartCommandRepositoryTrait for CartCommandRepository {
    // The reservation path. The product row is locked FOR UPDATE before its
    // stock is read, so concurrent reservations against the same product are
    // serialized: the second observes the already-decremented stock. The
    // decrement and the cart upsert commit or roll back together.
    async fn reserve(
        &self,
        user_id: i32,
        product_id: i32,
        quantity: i32,
    ) -> Result<CartItemModel, RepositoryError> {
        let mut tx = self.db.begin().await.map_err(RepositoryError::from)?;

        let product = sqlx::query_as::<_, ProductModel>(
            r#"
            SELECT id, category_id, name, brand, price, discount_rate,
                   discounted_price, stock, image_url, sku, created_at
            FROM products
            WHERE id = $1
            FOR UPDATE
            "#,
        )
        .bind(product_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|err| {
            error!("❌ Failed to lock product {}: {:?}", product_id, err);
            RepositoryError::from(err)
        })?
        .ok_or(RepositoryError::NotFound)?;

        if product.stock < quantity {
            return Err(RepositoryError::InsufficientStock {
                requested: quantity,
                available: product.stock,
            });
        }

        sqlx::query(
            r#"
            UPDATE products
            SET stock = stock - $1
            WHERE id = $2
            "#,
        )
        .bind(quantity)
        .bind(product_id)
        .execute(&mut *tx)
        .await
        .map_err(|err| {
            error!("❌ Failed to decrement stock product {}: {:?}", product_id, err);
            RepositoryError::from(err)
        })?;

        let item = sqlx::query_as::<_, CartItemModel>(
            r#"
            INSERT INTO cart_items (user_id, product_id, quantity)
            VALUES ($1, $2, $3)
            ON CONFLICT (user_id, product_id)
            DO UPDATE SET quantity = cart_items.quantity + EXCLUDED.quantity
            RETURNING id, user_id, product_id, quantity
            "#,
        )
        .bind(user_id)
        .bind(product_id)
        .bind(quantity)
        .fetch_one(&mut *tx)
        .await
        .map_err(|err| {
            error!("❌ Failed to upsert cart item for user {}: {:?}", user_id, err);
            RepositoryError::from(err)
        })?;

        tx.commit().await.map_err(RepositoryError::from)?;

        info!(
            "✅ Reserved {} x product {} for user {} (stock left: {})",
            quantity,
            product_id,
            user_id,
            product.stock - quantity
        );
        Ok(item)
    }
}
