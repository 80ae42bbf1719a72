use std::sync::Arc;

use crate::domain::industry::{CompanyIndustry, IndustryCode, IndustryError, IndustryService};

#[derive(Debug, Clone)]
pub struct AssociateCompanyCommand {
  pub comp_code: String,
  pub ind_code: String,
}

pub struct AssociateCompanyUseCase {
  industry_service: Arc<IndustryService>,
}

impl AssociateCompanyUseCase {
  pub fn new(industry_service: Arc<IndustryService>) -> Self {
    Self { industry_service }
  }

  pub async fn execute(
    &self,
    command: AssociateCompanyCommand,
  ) -> Result<CompanyIndustry, IndustryError> {
    let ind_code = IndustryCode::new(command.ind_code)?;

    self
      .industry_service
      .associate_company(command.comp_code, ind_code)
      .await
  }
}
