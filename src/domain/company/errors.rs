use thiserror::Error;

use crate::domain::errors::RepositoryError;

#[derive(Debug, Error)]
pub enum CompanyError {
  #[error("Company with code {0} does not exist")]
  NotFound(String),

  #[error("Company with code {0} already exists")]
  AlreadyExists(String),

  #[error("Repository error: {0}")]
  Repository(#[from] RepositoryError),

  #[error("Validation error: {0}")]
  Validation(#[from] ValidationError),
}

#[derive(Debug, Error)]
pub enum ValidationError {
  #[error("Company code cannot be empty")]
  CompanyCodeEmpty,

  #[error("Company code must be at most {max} characters")]
  CompanyCodeTooLong { max: usize },

  #[error("Company code '{0}' may only contain lowercase letters, digits and single dashes")]
  CompanyCodeInvalidFormat(String),

  #[error("Cannot derive a company code from name '{0}'")]
  CompanyCodeUnderivable(String),

  #[error("Company name must be at least {min} characters")]
  CompanyNameTooShort { min: usize },

  #[error("Company name must be at most {max} characters")]
  CompanyNameTooLong { max: usize },

  #[error("Description must be at most {max} characters")]
  DescriptionTooLong { max: usize },
}

impl From<sqlx::Error> for CompanyError {
  fn from(error: sqlx::Error) -> Self {
    CompanyError::Repository(RepositoryError::from(error))
  }
}
