mod command;
mod query;

pub use self::command::UserCommandRepository;
pub use self::query::UserQueryRepository;

use crate::abstract_trait::{DynUserCommandRepository, DynUserQueryRepository};
use crate::config::ConnectionPool;
use std::sync::Arc;

#[derive(Clone)]
pub struct UserRepository {
    pub query: DynUserQueryRepository,
    pub command: DynUserCommandRepository,
}

impl UserRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self {
            query: Arc::new(UserQueryRepository::new(db.clone())),
            command: Arc::new(UserCommandRepository::new(db)),
        }
    }
}
