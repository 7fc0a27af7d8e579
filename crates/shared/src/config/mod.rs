mod app;
mod database;
mod hashing;
mod jwt;

pub use self::app::Config;
pub use self::database::{ConnectionManager, ConnectionPool};
pub use self::hashing::Hashing;
pub use self::jwt::{Claims, JwtConfig};
