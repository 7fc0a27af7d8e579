use crate::{
    abstract_trait::CategoryQueryRepositoryTrait, config::ConnectionPool,
    errors::RepositoryError, model::Category as CategoryModel,
};
use async_trait::async_trait;
use tracing::error;

pub struct CategoryQueryRepository {
    db: ConnectionPool,
}

impl CategoryQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CategoryQueryRepositoryTrait for CategoryQueryRepository {
    async fn find_all(&self) -> Result<Vec<CategoryModel>, RepositoryError> {
        sqlx::query_as::<_, CategoryModel>(
            r#"
            SELECT id, name
            FROM categories
            ORDER BY id
            "#,
        )
        .fetch_all(&self.db)
        .await
        .map_err(|err| {
            error!("❌ Failed to list categories: {:?}", err);
            RepositoryError::from(err)
        })
    }
}
