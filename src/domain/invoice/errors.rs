use super::value_objects::ValueObjectError;
use thiserror::Error;

use crate::domain::company::CompanyError;
use crate::domain::errors::RepositoryError;

#[derive(Debug, Error)]
pub enum InvoiceError {
  #[error("Validation error: {0}")]
  Validation(#[from] ValueObjectError),

  #[error("Invoice with id {0} cannot be found")]
  InvoiceNotFound(i32),

  #[error("Company with code {0} does not exist")]
  CompanyNotFound(String),

  #[error("Repository error: {0}")]
  Repository(#[from] RepositoryError),
}

impl From<sqlx::Error> for InvoiceError {
  fn from(error: sqlx::Error) -> Self {
    InvoiceError::Repository(RepositoryError::from(error))
  }
}

impl From<CompanyError> for InvoiceError {
  fn from(error: CompanyError) -> Self {
    match error {
      CompanyError::NotFound(code) => InvoiceError::CompanyNotFound(code),
      CompanyError::Repository(e) => InvoiceError::Repository(e),
      CompanyError::AlreadyExists(_) | CompanyError::Validation(_) => {
        InvoiceError::Repository(RepositoryError::QueryFailed(error.to_string()))
      }
    }
  }
}
