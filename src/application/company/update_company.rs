use std::sync::Arc;

use super::CompanyResponse;
use crate::domain::company::{CompanyDescription, CompanyError, CompanyName, CompanyService};

#[derive(Debug, Clone)]
pub struct UpdateCompanyCommand {
  pub code: String,
  pub name: String,
  pub description: String,
}

pub struct UpdateCompanyUseCase {
  company_service: Arc<CompanyService>,
}

impl UpdateCompanyUseCase {
  pub fn new(company_service: Arc<CompanyService>) -> Self {
    Self { company_service }
  }

  pub async fn execute(&self, command: UpdateCompanyCommand) -> Result<CompanyResponse, CompanyError> {
    let name = CompanyName::new(command.name)?;
    let description = CompanyDescription::new(command.description)?;

    let company = self
      .company_service
      .update_company(&command.code, name, description)
      .await?;

    Ok(company.into())
  }
}
