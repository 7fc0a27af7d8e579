use crate::{
    abstract_trait::CartQueryRepositoryTrait, config::ConnectionPool, errors::RepositoryError,
    model::CartItem as CartItemModel,
};
use async_trait::async_trait;
use tracing::error;

pub struct CartQueryRepository {
    db: ConnectionPool,
}

impl CartQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CartQueryRepositoryTrait for CartQueryRepository {
    async fn find_by_user(&self, user_id: i32) -> Result<Vec<CartItemModel>, RepositoryError> {
        sqlx::query_as::<_, CartItemModel>(
            r#"
            SELECT id, user_id, product_id, quantity
            FROM cart_items
            WHERE user_id = $1
            ORDER BY id
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.db)
        .await
        .map_err(|err| {
            error!("❌ Failed to load cart for user {}: {:?}", user_id, err);
            RepositoryError::from(err)
        })
    }
}
