use std::sync::Arc;

use crate::domain::company::{CompanyError, CompanyService, CompanySummary};

#[derive(Debug)]
pub struct ListCompaniesResponse {
  pub companies: Vec<CompanySummary>,
}

pub struct ListCompaniesUseCase {
  company_service: Arc<CompanyService>,
}

impl ListCompaniesUseCase {
  pub fn new(company_service: Arc<CompanyService>) -> Self {
    Self { company_service }
  }

  pub async fn execute(&self) -> Result<ListCompaniesResponse, CompanyError> {
    let companies = self.company_service.list_companies().await?;
    Ok(ListCompaniesResponse { companies })
  }
}
