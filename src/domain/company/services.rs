use std::sync::Arc;

use super::{
  entities::{Company, CompanySummary},
  errors::CompanyError,
  ports::CompanyRepository,
  value_objects::{CompanyCode, CompanyDescription, CompanyName},
};
use crate::domain::errors::RepositoryError;

/// Company service implementing the company entity store
pub struct CompanyService {
  company_repo: Arc<dyn CompanyRepository>,
}

impl CompanyService {
  pub fn new(company_repo: Arc<dyn CompanyRepository>) -> Self {
    Self { company_repo }
  }

  /// List companies ordered by name
  pub async fn list_companies(&self) -> Result<Vec<CompanySummary>, CompanyError> {
    self.company_repo.list().await
  }

  /// Get a single company or `NotFound`
  pub async fn get_company(&self, code: &str) -> Result<Company, CompanyError> {
    self
      .company_repo
      .find_by_code(code)
      .await?
      .ok_or_else(|| CompanyError::NotFound(code.to_string()))
  }

  /// Create a company, deriving the code from the name when none is given
  pub async fn create_company(
    &self,
    code: Option<CompanyCode>,
    name: CompanyName,
    description: CompanyDescription,
  ) -> Result<Company, CompanyError> {
    let code = match code {
      Some(code) => code,
      None => CompanyCode::from_name(&name)?,
    };
    let code_value = code.as_str().to_string();

    let company = Company::new(code, name, description);
    let created = self
      .company_repo
      .create(company)
      .await
      .map_err(|e| match e {
        CompanyError::Repository(RepositoryError::DuplicateKey(_)) => {
          CompanyError::AlreadyExists(code_value.clone())
        }
        other => other,
      })?;

    tracing::info!(code = %created.code, "Company created");
    Ok(created)
  }

  /// Update name and description of an existing company
  pub async fn update_company(
    &self,
    code: &str,
    name: CompanyName,
    description: CompanyDescription,
  ) -> Result<Company, CompanyError> {
    let mut company = self.get_company(code).await?;
    company.update_profile(name, description);

    let updated = self
      .company_repo
      .update(company)
      .await?
      .ok_or_else(|| CompanyError::NotFound(code.to_string()))?;

    tracing::info!(code = %updated.code, "Company updated");
    Ok(updated)
  }

  /// Delete a company; invoices and industry links go with it
  pub async fn delete_company(&self, code: &str) -> Result<(), CompanyError> {
    if !self.company_repo.delete(code).await? {
      return Err(CompanyError::NotFound(code.to_string()));
    }

    tracing::info!(code, "Company deleted");
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::infrastructure::persistence::in_memory::InMemoryDatabase;

  fn service() -> CompanyService {
    let db = InMemoryDatabase::new();
    CompanyService::new(Arc::new(db.companies()))
  }

  fn name(value: &str) -> CompanyName {
    CompanyName::new(value).unwrap()
  }

  fn description(value: &str) -> CompanyDescription {
    CompanyDescription::new(value).unwrap()
  }

  #[tokio::test]
  async fn test_create_with_explicit_code() {
    let service = service();

    let company = service
      .create_company(
        Some(CompanyCode::new("apple").unwrap()),
        name("Apple Computer"),
        description("Maker of OSX."),
      )
      .await
      .unwrap();

    assert_eq!(company.code, "apple");
    assert_eq!(service.get_company("apple").await.unwrap(), company);
  }

  #[tokio::test]
  async fn test_create_derives_code() {
    let service = service();

    let company = service
      .create_company(None, name("Big Blue Inc."), description(""))
      .await
      .unwrap();

    assert_eq!(company.code, "big-blue-inc");
  }

  #[tokio::test]
  async fn test_create_duplicate_code_conflicts() {
    let service = service();
    let code = || Some(CompanyCode::new("ibm").unwrap());

    service
      .create_company(code(), name("IBM"), description("Big blue."))
      .await
      .unwrap();
    let result = service
      .create_company(code(), name("IBM again"), description(""))
      .await;

    assert!(matches!(result, Err(CompanyError::AlreadyExists(code)) if code == "ibm"));
  }

  #[tokio::test]
  async fn test_list_is_ordered_by_name() {
    let service = service();
    service
      .create_company(None, name("Zeta"), description(""))
      .await
      .unwrap();
    service
      .create_company(None, name("Alpha"), description(""))
      .await
      .unwrap();

    let names: Vec<_> = service
      .list_companies()
      .await
      .unwrap()
      .into_iter()
      .map(|c| c.name)
      .collect();

    assert_eq!(names, vec!["Alpha", "Zeta"]);
  }

  #[tokio::test]
  async fn test_update_unknown_company() {
    let service = service();

    let result = service
      .update_company("nope", name("Nope"), description(""))
      .await;

    assert!(matches!(result, Err(CompanyError::NotFound(code)) if code == "nope"));
  }

  #[tokio::test]
  async fn test_update_company() {
    let service = service();
    service
      .create_company(None, name("Apple"), description("old"))
      .await
      .unwrap();

    let updated = service
      .update_company("apple", name("Apple Inc."), description("new"))
      .await
      .unwrap();

    assert_eq!(updated.name, "Apple Inc.");
    assert_eq!(updated.description, "new");
  }

  #[tokio::test]
  async fn test_delete_twice_is_not_found() {
    let service = service();
    service
      .create_company(None, name("Apple"), description(""))
      .await
      .unwrap();

    service.delete_company("apple").await.unwrap();
    let result = service.delete_company("apple").await;

    assert!(matches!(result, Err(CompanyError::NotFound(_))));
  }
}
