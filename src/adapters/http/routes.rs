use actix_web::web;
use std::sync::Arc;

use crate::application::company::{
  CreateCompanyUseCase, DeleteCompanyUseCase, GetCompanyDetailsUseCase, ListCompaniesUseCase,
  UpdateCompanyUseCase,
};
use crate::application::industry::{
  AssociateCompanyUseCase, CreateIndustryUseCase, ListIndustriesUseCase,
};
use crate::application::invoice::{
  CreateInvoiceUseCase, DeleteInvoiceUseCase, GetInvoiceDetailsUseCase, ListInvoicesUseCase,
  UpdateInvoiceUseCase,
};

use super::errors::ApiError;
use super::handlers::company::{
  create_company_handler, delete_company_handler, get_company_handler, list_companies_handler,
  update_company_handler,
};
use super::handlers::industry::{
  associate_company_handler, create_industry_handler, list_industries_handler,
};
use super::handlers::invoice::{
  create_invoice_handler, delete_invoice_handler, get_invoice_handler, list_invoices_handler,
  update_invoice_handler,
};

/// Use cases behind the company routes
#[derive(Clone)]
pub struct CompanyRouteDependencies {
  pub list_use_case: Arc<ListCompaniesUseCase>,
  pub get_details_use_case: Arc<GetCompanyDetailsUseCase>,
  pub create_use_case: Arc<CreateCompanyUseCase>,
  pub update_use_case: Arc<UpdateCompanyUseCase>,
  pub delete_use_case: Arc<DeleteCompanyUseCase>,
}

/// Use cases behind the invoice routes
#[derive(Clone)]
pub struct InvoiceRouteDependencies {
  pub list_use_case: Arc<ListInvoicesUseCase>,
  pub get_details_use_case: Arc<GetInvoiceDetailsUseCase>,
  pub create_use_case: Arc<CreateInvoiceUseCase>,
  pub update_use_case: Arc<UpdateInvoiceUseCase>,
  pub delete_use_case: Arc<DeleteInvoiceUseCase>,
}

/// Use cases behind the industry routes
#[derive(Clone)]
pub struct IndustryRouteDependencies {
  pub list_use_case: Arc<ListIndustriesUseCase>,
  pub create_use_case: Arc<CreateIndustryUseCase>,
  pub associate_use_case: Arc<AssociateCompanyUseCase>,
}

/// JSON body errors (malformed JSON, missing fields, wrong content type)
/// become 400 with the error envelope
pub fn json_config() -> web::JsonConfig {
  web::JsonConfig::default()
    .error_handler(|err, _req| ApiError::Validation(err.to_string()).into())
}

/// Path segments that fail to parse (e.g. a non-numeric invoice id) cannot
/// name an existing resource, so they are reported as 404
pub fn path_config() -> web::PathConfig {
  web::PathConfig::default().error_handler(|err, req| {
    tracing::debug!(path = %req.path(), error = %err, "Unparseable path segment");
    ApiError::NotFound(format!("No resource at {}", req.path())).into()
  })
}

/// Configure company routes
///
/// Mounts all company endpoints under the provided scope (e.g. /companies).
///
/// # Routes
///
/// - GET / - List companies
/// - POST / - Create a company
/// - GET /{code} - Company with invoice ids and industries
/// - PUT /{code} - Update a company
/// - DELETE /{code} - Delete a company
pub fn configure_company_routes(cfg: &mut web::ServiceConfig, deps: CompanyRouteDependencies) {
  cfg
    .app_data(web::Data::new(deps.list_use_case))
    .app_data(web::Data::new(deps.get_details_use_case))
    .app_data(web::Data::new(deps.create_use_case))
    .app_data(web::Data::new(deps.update_use_case))
    .app_data(web::Data::new(deps.delete_use_case))
    .route("", web::get().to(list_companies_handler))
    .route("", web::post().to(create_company_handler))
    .route("/{code}", web::get().to(get_company_handler))
    .route("/{code}", web::put().to(update_company_handler))
    .route("/{code}", web::delete().to(delete_company_handler));
}

/// Configure invoice routes
///
/// # Routes
///
/// - GET / - List invoices
/// - POST / - Create an invoice
/// - GET /{id} - Invoice with its company
/// - PUT /{id} - Update amount and payment state
/// - DELETE /{id} - Delete an invoice
pub fn configure_invoice_routes(cfg: &mut web::ServiceConfig, deps: InvoiceRouteDependencies) {
  cfg
    .app_data(web::Data::new(deps.list_use_case))
    .app_data(web::Data::new(deps.get_details_use_case))
    .app_data(web::Data::new(deps.create_use_case))
    .app_data(web::Data::new(deps.update_use_case))
    .app_data(web::Data::new(deps.delete_use_case))
    .route("", web::get().to(list_invoices_handler))
    .route("", web::post().to(create_invoice_handler))
    .route("/{id}", web::get().to(get_invoice_handler))
    .route("/{id}", web::put().to(update_invoice_handler))
    .route("/{id}", web::delete().to(delete_invoice_handler));
}

/// Configure industry routes
///
/// # Routes
///
/// - GET / - List industries with their company codes
/// - POST / - Create an industry
/// - POST /company - Add a company to an industry
pub fn configure_industry_routes(cfg: &mut web::ServiceConfig, deps: IndustryRouteDependencies) {
  cfg
    .app_data(web::Data::new(deps.list_use_case))
    .app_data(web::Data::new(deps.create_use_case))
    .app_data(web::Data::new(deps.associate_use_case))
    .route("", web::get().to(list_industries_handler))
    .route("", web::post().to(create_industry_handler))
    .route("/company", web::post().to(associate_company_handler));
}
