use async_trait::async_trait;

use super::{
  entities::{Company, CompanySummary},
  errors::CompanyError,
};

#[async_trait]
pub trait CompanyRepository: Send + Sync {
  /// All companies ordered by name
  async fn list(&self) -> Result<Vec<CompanySummary>, CompanyError>;
  async fn find_by_code(&self, code: &str) -> Result<Option<Company>, CompanyError>;
  async fn create(&self, company: Company) -> Result<Company, CompanyError>;
  /// Returns `None` when no company has the given code
  async fn update(&self, company: Company) -> Result<Option<Company>, CompanyError>;
  /// Returns `false` when nothing was deleted
  async fn delete(&self, code: &str) -> Result<bool, CompanyError>;
}
