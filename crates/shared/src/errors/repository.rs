use sqlx::Error as SqlxError;
use thiserror::Error;

// Postgres SQLSTATEs that indicate a lost race on a row lock rather than a
// broken query: serialization_failure, deadlock_detected, lock_not_available.
const LOCK_CONFLICT_CODES: [&str; 3] = ["40001", "40P01", "55P03"];

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Sqlx(SqlxError),

    #[error("Not found")]
    NotFound,

    #[error("Insufficient stock: requested {requested}, available {available}")]
    InsufficientStock { requested: i32, available: i32 },

    #[error("Row lock conflict, retry the request")]
    LockConflict,

    #[error("Already exists: {0}")]
    AlreadyExists(String),

    #[error("Foreign key violation: {0}")]
    ForeignKey(String),

    #[error("Custom: {0}")]
    Custom(String),
}

impl From<SqlxError> for RepositoryError {
    fn from(err: SqlxError) -> Self {
        match &err {
            SqlxError::RowNotFound => return RepositoryError::NotFound,
            SqlxError::Database(db_err) => {
                let code = db_err.code().map(|code| code.to_string());
                let message = db_err.message().to_string();
                match code.as_deref() {
                    Some(code) if LOCK_CONFLICT_CODES.contains(&code) => {
                        return RepositoryError::LockConflict;
                    }
                    Some("23505") => return RepositoryError::AlreadyExists(message),
                    Some("23503") => return RepositoryError::ForeignKey(message),
                    _ => {}
                }
            }
            _ => {}
        }

        RepositoryError::Sqlx(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_not_found_maps_to_not_found() {
        let mapped = RepositoryError::from(SqlxError::RowNotFound);
        assert!(matches!(mapped, RepositoryError::NotFound));
    }

    #[test]
    fn pool_errors_stay_wrapped() {
        let mapped = RepositoryError::from(SqlxError::PoolClosed);
        assert!(matches!(mapped, RepositoryError::Sqlx(_)));
    }
}
