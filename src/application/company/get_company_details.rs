use std::sync::Arc;

use crate::domain::company::{CompanyDetails, CompanyError, CompanyService};
use crate::domain::errors::RepositoryError;
use crate::domain::industry::{IndustryError, IndustryRepository};
use crate::domain::invoice::{InvoiceError, InvoiceRepository};

#[derive(Debug, Clone)]
pub struct GetCompanyDetailsCommand {
  pub code: String,
}

/// Read-model assembler joining a company with its invoice ids and industry
/// names
pub struct GetCompanyDetailsUseCase {
  company_service: Arc<CompanyService>,
  invoice_repo: Arc<dyn InvoiceRepository>,
  industry_repo: Arc<dyn IndustryRepository>,
}

impl GetCompanyDetailsUseCase {
  pub fn new(
    company_service: Arc<CompanyService>,
    invoice_repo: Arc<dyn InvoiceRepository>,
    industry_repo: Arc<dyn IndustryRepository>,
  ) -> Self {
    Self {
      company_service,
      invoice_repo,
      industry_repo,
    }
  }

  pub async fn execute(
    &self,
    command: GetCompanyDetailsCommand,
  ) -> Result<CompanyDetails, CompanyError> {
    // Unknown company short-circuits before the dependent lookups
    let company = self.company_service.get_company(&command.code).await?;

    let (invoices, industries) = futures_util::try_join!(
      async {
        self
          .invoice_repo
          .find_ids_by_company(&company.code)
          .await
          .map_err(from_invoice_error)
      },
      async {
        self
          .industry_repo
          .find_names_by_company(&company.code)
          .await
          .map_err(from_industry_error)
      },
    )?;

    tracing::debug!(
      code = %company.code,
      invoices = invoices.len(),
      industries = industries.len(),
      "Company details assembled"
    );

    Ok(CompanyDetails::assemble(company, invoices, industries))
  }
}

fn from_invoice_error(error: InvoiceError) -> CompanyError {
  match error {
    InvoiceError::Repository(e) => CompanyError::Repository(e),
    other => CompanyError::Repository(RepositoryError::QueryFailed(other.to_string())),
  }
}

fn from_industry_error(error: IndustryError) -> CompanyError {
  match error {
    IndustryError::Repository(e) => CompanyError::Repository(e),
    other => CompanyError::Repository(RepositoryError::QueryFailed(other.to_string())),
  }
}
