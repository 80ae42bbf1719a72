pub mod create_company;
pub mod delete_company;
pub mod get_company_details;
pub mod list_companies;
pub mod update_company;

pub use create_company::{CreateCompanyCommand, CreateCompanyUseCase};
pub use delete_company::{DeleteCompanyCommand, DeleteCompanyUseCase};
pub use get_company_details::{GetCompanyDetailsCommand, GetCompanyDetailsUseCase};
pub use list_companies::{ListCompaniesResponse, ListCompaniesUseCase};
pub use update_company::{UpdateCompanyCommand, UpdateCompanyUseCase};

use crate::domain::company::Company;

/// Company as returned by create and update
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyResponse {
  pub code: String,
  pub name: String,
  pub description: String,
}

impl From<Company> for CompanyResponse {
  fn from(company: Company) -> Self {
    Self {
      code: company.code,
      name: company.name,
      description: company.description,
    }
  }
}
