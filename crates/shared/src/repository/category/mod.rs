mod command;
mod query;

pub use self::command::CategoryCommandRepository;
pub use self::query::CategoryQueryRepository;

use crate::abstract_trait::{DynCategoryCommandRepository, DynCategoryQueryRepository};
use crate::config::ConnectionPool;
use std::sync::Arc;

#[derive(Clone)]
pub struct CategoryRepository {
    pub query: DynCategoryQueryRepository,
    pub command: DynCategoryCommandRepository,
}

impl CategoryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self {
            query: Arc::new(CategoryQueryRepository::new(db.clone())),
            command: Arc::new(CategoryCommandRepository::new(db)),
        }
    }
}
