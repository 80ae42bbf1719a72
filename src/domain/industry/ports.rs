use async_trait::async_trait;

use super::entities::{CompanyIndustry, Industry, IndustryListing};
use super::errors::IndustryError;

#[async_trait]
pub trait IndustryRepository: Send + Sync {
  /// Every industry, including those without companies (empty list)
  async fn list_with_companies(&self) -> Result<Vec<IndustryListing>, IndustryError>;
  /// Industry names a company belongs to, ordered by name
  async fn find_names_by_company(&self, comp_code: &str) -> Result<Vec<String>, IndustryError>;
  async fn create(&self, industry: Industry) -> Result<Industry, IndustryError>;
  /// Referential integrity is left to the store
  async fn associate(&self, link: CompanyIndustry) -> Result<CompanyIndustry, IndustryError>;
}
