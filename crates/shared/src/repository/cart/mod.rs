mod command;
mod query;

pub use self::command::CartCommandRepository;
pub use self::query::CartQueryRepository;

use crate::abstract_trait::{DynCartCommandRepository, DynCartQueryRepository};
use crate::config::ConnectionPool;
use std::sync::Arc;

#[derive(Clone)]
pub struct CartRepository {
    pub query: DynCartQueryRepository,
    pub command: DynCartCommandRepository,
}

impl CartRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self {
            query: Arc::new(CartQueryRepository::new(db.clone())),
            command: Arc::new(CartCommandRepository::new(db)),
        }
    }
}
