use actix_web::{HttpResponse, web};
use std::sync::Arc;
use validator::Validate;

use crate::{
  adapters::http::{
    dtos::{
      CompanyDetailsEnvelope, CompanyEnvelope, CompanyListResponse, CreateCompanyRequest,
      StatusResponse, UpdateCompanyRequest,
    },
    errors::ApiError,
  },
  application::company::*,
};

/// List companies
/// GET /companies
pub async fn list_companies_handler(
  use_case: web::Data<Arc<ListCompaniesUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let response = use_case.execute().await?;

  Ok(HttpResponse::Ok().json(CompanyListResponse {
    companies: response.companies.into_iter().map(Into::into).collect(),
  }))
}

/// Get a company with its invoice ids and industries
/// GET /companies/{code}
pub async fn get_company_handler(
  code: web::Path<String>,
  use_case: web::Data<Arc<GetCompanyDetailsUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let command = GetCompanyDetailsCommand {
    code: code.into_inner(),
  };

  let details = use_case.execute(command).await?;

  Ok(HttpResponse::Ok().json(CompanyDetailsEnvelope {
    company: details.into(),
  }))
}

/// Create a company
/// POST /companies
pub async fn create_company_handler(
  request: web::Json<CreateCompanyRequest>,
  use_case: web::Data<Arc<CreateCompanyUseCase>>,
) -> Result<HttpResponse, ApiError> {
  request.validate()?;
  let request = request.into_inner();

  let command = CreateCompanyCommand {
    code: request.code,
    name: request.name,
    description: request.description,
  };

  let company = use_case.execute(command).await?;

  Ok(HttpResponse::Created().json(CompanyEnvelope {
    company: company.into(),
  }))
}

/// Update name and description of a company
/// PUT /companies/{code}
pub async fn update_company_handler(
  code: web::Path<String>,
  request: web::Json<UpdateCompanyRequest>,
  use_case: web::Data<Arc<UpdateCompanyUseCase>>,
) -> Result<HttpResponse, ApiError> {
  request.validate()?;
  let request = request.into_inner();

  let command = UpdateCompanyCommand {
    code: code.into_inner(),
    name: request.name,
    description: request.description,
  };

  let company = use_case.execute(command).await?;

  Ok(HttpResponse::Ok().json(CompanyEnvelope {
    company: company.into(),
  }))
}

/// Delete a company
/// DELETE /companies/{code}
pub async fn delete_company_handler(
  code: web::Path<String>,
  use_case: web::Data<Arc<DeleteCompanyUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let command = DeleteCompanyCommand {
    code: code.into_inner(),
  };

  use_case.execute(command).await?;

  Ok(HttpResponse::Ok().json(StatusResponse::deleted()))
}
