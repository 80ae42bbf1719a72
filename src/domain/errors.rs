use thiserror::Error;

/// Repository-related errors shared by every aggregate
#[derive(Debug, Error)]
pub enum RepositoryError {
  #[error("Database connection failed: {0}")]
  ConnectionFailed(String),

  #[error("Query execution failed: {0}")]
  QueryFailed(String),

  #[error("Transaction failed: {0}")]
  TransactionFailed(String),

  #[error("Record not found")]
  NotFound,

  #[error("Duplicate key violation: {0}")]
  DuplicateKey(String),

  #[error("Foreign key violation: {0}")]
  ForeignKeyViolation(String),

  #[error("Database error: {0}")]
  DatabaseError(String),

  #[error("Stored row is inconsistent: {0}")]
  InconsistentRow(String),
}

impl From<sqlx::Error> for RepositoryError {
  fn from(error: sqlx::Error) -> Self {
    match error {
      sqlx::Error::RowNotFound => RepositoryError::NotFound,
      sqlx::Error::Database(db_err) => {
        if db_err.is_unique_violation() {
          RepositoryError::DuplicateKey(db_err.message().to_string())
        } else if db_err.is_foreign_key_violation() {
          RepositoryError::ForeignKeyViolation(db_err.message().to_string())
        } else {
          RepositoryError::DatabaseError(db_err.message().to_string())
        }
      }
      sqlx::Error::PoolTimedOut => RepositoryError::ConnectionFailed("Pool timed out".to_string()),
      sqlx::Error::PoolClosed => RepositoryError::ConnectionFailed("Pool closed".to_string()),
      _ => RepositoryError::QueryFailed(error.to_string()),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_row_not_found_maps_to_not_found() {
    let error = RepositoryError::from(sqlx::Error::RowNotFound);
    assert!(matches!(error, RepositoryError::NotFound));
  }

  #[test]
  fn test_pool_errors_map_to_connection_failed() {
    assert!(matches!(
      RepositoryError::from(sqlx::Error::PoolTimedOut),
      RepositoryError::ConnectionFailed(_)
    ));
    assert!(matches!(
      RepositoryError::from(sqlx::Error::PoolClosed),
      RepositoryError::ConnectionFailed(_)
    ));
  }
}
