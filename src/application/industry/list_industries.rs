use std::sync::Arc;

use crate::domain::industry::{IndustryError, IndustryListing, IndustryService};

#[derive(Debug)]
pub struct ListIndustriesResponse {
  pub industries: Vec<IndustryListing>,
}

pub struct ListIndustriesUseCase {
  industry_service: Arc<IndustryService>,
}

impl ListIndustriesUseCase {
  pub fn new(industry_service: Arc<IndustryService>) -> Self {
    Self { industry_service }
  }

  pub async fn execute(&self) -> Result<ListIndustriesResponse, IndustryError> {
    let industries = self.industry_service.list_industries().await?;
    Ok(ListIndustriesResponse { industries })
  }
}
