use thiserror::Error;

use crate::domain::errors::RepositoryError;

#[derive(Debug, Error)]
pub enum IndustryError {
  #[error("Industry with code {0} already exists")]
  AlreadyExists(String),

  #[error("Company {comp_code} or industry {ind_code} does not exist")]
  AssociationTargetNotFound { comp_code: String, ind_code: String },

  #[error("Company {comp_code} is already in industry {ind_code}")]
  AlreadyAssociated { comp_code: String, ind_code: String },

  #[error("Repository error: {0}")]
  Repository(#[from] RepositoryError),

  #[error("Validation error: {0}")]
  Validation(#[from] IndustryValidationError),
}

#[derive(Debug, Error)]
pub enum IndustryValidationError {
  #[error("Industry code cannot be empty")]
  CodeEmpty,

  #[error("Industry code must be at most {max} characters")]
  CodeTooLong { max: usize },

  #[error("Industry code '{0}' may only contain letters, digits, '-' and '_'")]
  CodeInvalidCharacters(String),

  #[error("Industry name cannot be empty")]
  NameEmpty,

  #[error("Industry name must be at most {max} characters")]
  NameTooLong { max: usize },
}

impl From<sqlx::Error> for IndustryError {
  fn from(error: sqlx::Error) -> Self {
    IndustryError::Repository(RepositoryError::from(error))
  }
}
