use actix_web::{HttpResponse, web};
use std::sync::Arc;
use validator::Validate;

use crate::{
  adapters::http::{
    dtos::{
      AssociateCompanyRequest, CompanyIndustryEnvelope, CreateIndustryRequest, IndustryEnvelope,
      IndustryListResponse,
    },
    errors::ApiError,
  },
  application::industry::*,
};

/// List industries with the codes of their companies
/// GET /industries
pub async fn list_industries_handler(
  use_case: web::Data<Arc<ListIndustriesUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let response = use_case.execute().await?;

  Ok(HttpResponse::Ok().json(IndustryListResponse {
    industries: response.industries.into_iter().map(Into::into).collect(),
  }))
}

/// Create an industry
/// POST /industries
pub async fn create_industry_handler(
  request: web::Json<CreateIndustryRequest>,
  use_case: web::Data<Arc<CreateIndustryUseCase>>,
) -> Result<HttpResponse, ApiError> {
  request.validate()?;
  let request = request.into_inner();

  let command = CreateIndustryCommand {
    ind_code: request.ind_code,
    industry: request.industry,
  };

  let industry = use_case.execute(command).await?;

  Ok(HttpResponse::Created().json(IndustryEnvelope {
    industry: industry.into(),
  }))
}

/// Add a company to an industry
/// POST /industries/company
pub async fn associate_company_handler(
  request: web::Json<AssociateCompanyRequest>,
  use_case: web::Data<Arc<AssociateCompanyUseCase>>,
) -> Result<HttpResponse, ApiError> {
  request.validate()?;
  let request = request.into_inner();

  let command = AssociateCompanyCommand {
    comp_code: request.comp_code,
    ind_code: request.ind_code,
  };

  let link = use_case.execute(command).await?;

  Ok(HttpResponse::Created().json(CompanyIndustryEnvelope {
    company_industry: link.into(),
  }))
}
