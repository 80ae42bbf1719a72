use std::sync::Arc;

use super::CompanyResponse;
use crate::domain::company::{
  CompanyCode, CompanyDescription, CompanyError, CompanyName, CompanyService,
};

#[derive(Debug, Clone)]
pub struct CreateCompanyCommand {
  /// Derived from the name when absent
  pub code: Option<String>,
  pub name: String,
  pub description: Option<String>,
}

pub struct CreateCompanyUseCase {
  company_service: Arc<CompanyService>,
}

impl CreateCompanyUseCase {
  pub fn new(company_service: Arc<CompanyService>) -> Self {
    Self { company_service }
  }

  pub async fn execute(&self, command: CreateCompanyCommand) -> Result<CompanyResponse, CompanyError> {
    let code = command.code.map(CompanyCode::new).transpose()?;
    let name = CompanyName::new(command.name)?;
    let description = match command.description {
      Some(description) => CompanyDescription::new(description)?,
      None => CompanyDescription::default(),
    };

    let company = self
      .company_service
      .create_company(code, name, description)
      .await?;

    Ok(company.into())
  }
}
