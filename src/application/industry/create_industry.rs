use std::sync::Arc;

use crate::domain::industry::{
  Industry, IndustryCode, IndustryError, IndustryName, IndustryService,
};

#[derive(Debug, Clone)]
pub struct CreateIndustryCommand {
  pub ind_code: String,
  pub industry: String,
}

pub struct CreateIndustryUseCase {
  industry_service: Arc<IndustryService>,
}

impl CreateIndustryUseCase {
  pub fn new(industry_service: Arc<IndustryService>) -> Self {
    Self { industry_service }
  }

  pub async fn execute(&self, command: CreateIndustryCommand) -> Result<Industry, IndustryError> {
    let ind_code = IndustryCode::new(command.ind_code)?;
    let industry = IndustryName::new(command.industry)?;

    self.industry_service.create_industry(ind_code, industry).await
  }
}
