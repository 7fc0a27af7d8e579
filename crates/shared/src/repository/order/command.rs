use crate::{
    abstract_trait::OrderCommandRepositoryTrait,
    config::ConnectionPool,
    domain::requests::CreateOrderItemRequest,
    errors::RepositoryError,
    model::{
        CartItem as CartItemModel, Order as OrderModel, OrderItem as OrderItemModel,
        Product as ProductModel,
    },
};
use async_trait::async_trait;
use tracing::{error, info};

pub struct OrderCommandRepository {
    db: ConnectionPool,
}

impl OrderCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OrderCommandRepositoryTrait for OrderCommandRepository {
    // Finalize. One transaction end to end: an error on any line rolls back
    // the order row, every order item, and every stock decrement.
    //
    // Cart path: stock was already taken at reservation time, so lines are
    // snapshotted (current product price) and the cart is cleared without
    // touching stock. Direct path (empty cart): each line re-validates stock
    // under the same FOR UPDATE discipline as `reserve` and decrements it.
    async fn create_order(
        &self,
        user_id: i32,
        total_price: i64,
        items: &[CreateOrderItemRequest],
    ) -> Result<(OrderModel, Vec<OrderItemModel>), RepositoryError> {
        let mut tx = self.db.begin().await.map_err(RepositoryError::from)?;

        let cart_items = sqlx::query_as::<_, CartItemModel>(
            r#"
            SELECT id, user_id, product_id, quantity
            FROM cart_items
            WHERE user_id = $1
            ORDER BY id
            "#,
        )
        .bind(user_id)
        .fetch_all(&mut *tx)
        .await
        .map_err(|err| {
            error!("❌ Failed to read cart for user {}: {:?}", user_id, err);
            RepositoryError::from(err)
        })?;

        let order = sqlx::query_as::<_, OrderModel>(
            r#"
            INSERT INTO orders (user_id, total_price)
            VALUES ($1, $2)
            RETURNING id, user_id, total_price, status, order_date
            "#,
        )
        .bind(user_id)
        .bind(total_price)
        .fetch_one(&mut *tx)
        .await
        .map_err(|err| {
            error!("❌ Failed to create order for user {}: {:?}", user_id, err);
            RepositoryError::from(err)
        })?;

        let mut order_items = Vec::new();

        if !cart_items.is_empty() {
            for cart_item in &cart_items {
                let product = sqlx::query_as::<_, ProductModel>(
                    r#"
                    SELECT id, category_id, name, brand, price, discount_rate,
                           discounted_price, stock, image_url, sku, created_at
                    FROM products
                    WHERE id = $1
                    "#,
                )
                .bind(cart_item.product_id)
                .fetch_optional(&mut *tx)
                .await
                .map_err(RepositoryError::from)?
                .ok_or(RepositoryError::NotFound)?;

                let order_item = insert_order_item(
                    &mut tx,
                    order.id,
                    cart_item.product_id,
                    cart_item.quantity,
                    product.price,
                )
                .await?;
                order_items.push(order_item);
            }

            sqlx::query(
                r#"
                DELETE FROM cart_items
                WHERE user_id = $1
                "#,
            )
            .bind(user_id)
            .execute(&mut *tx)
            .await
            .map_err(|err| {
                error!("❌ Failed to clear cart for user {}: {:?}", user_id, err);
                RepositoryError::from(err)
            })?;
        } else {
            for line in items {
                let product = sqlx::query_as::<_, ProductModel>(
                    r#"
                    SELECT id, category_id, name, brand, price, discount_rate,
                           discounted_price, stock, image_url, sku, created_at
                    FROM products
                    WHERE id = $1
                    FOR UPDATE
                    "#,
                )
                .bind(line.product_id)
                .fetch_optional(&mut *tx)
                .await
                .map_err(|err| {
                    error!("❌ Failed to lock product {}: {:?}", line.product_id, err);
                    RepositoryError::from(err)
                })?
                .ok_or(RepositoryError::NotFound)?;

                if product.stock < line.quantity {
                    return Err(RepositoryError::InsufficientStock {
                        requested: line.quantity,
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
                .bind(line.quantity)
                .bind(line.product_id)
                .execute(&mut *tx)
                .await
                .map_err(RepositoryError::from)?;

                let order_item = insert_order_item(
                    &mut tx,
                    order.id,
                    line.product_id,
                    line.quantity,
                    line.price,
                )
                .await?;
                order_items.push(order_item);
            }
        }

        tx.commit().await.map_err(RepositoryError::from)?;

        info!(
            "✅ Created order ID {} for user {} ({} items)",
            order.id,
            user_id,
            order_items.len()
        );
        Ok((order, order_items))
    }
}

async fn insert_order_item(
    tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
    order_id: i32,
    product_id: i32,
    quantity: i32,
    price: i64,
) -> Result<OrderItemModel, RepositoryError> {
    sqlx::query_as::<_, OrderItemModel>(
        r#"
        INSERT INTO order_items (order_id, product_id, quantity, price)
        VALUES ($1, $2, $3, $4)
        RETURNING id, order_id, product_id, quantity, price
        "#,
    )
    .bind(order_id)
    .bind(product_id)
    .bind(quantity)
    .bind(price)
    .fetch_one(&mut **tx)
    .await
    .map_err(|err| {
        error!("❌ Failed to insert order item for order {}: {:?}", order_id, err);
        RepositoryError::from(err)
    })
}
