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
use crate::domain::company::{CompanyRepository, CompanyService};
use crate::domain::industry::{IndustryRepository, IndustryService};
use crate::domain::invoice::{InvoiceRepository, InvoiceService};

use super::handlers::{health_handler, not_found_handler};
use super::routes::{
  CompanyRouteDependencies, IndustryRouteDependencies, InvoiceRouteDependencies,
  configure_company_routes, configure_industry_routes, configure_invoice_routes, json_config,
  path_config,
};

/// Every use case the HTTP surface needs, wired from three repositories
#[derive(Clone)]
pub struct AppDependencies {
  pub companies: CompanyRouteDependencies,
  pub invoices: InvoiceRouteDependencies,
  pub industries: IndustryRouteDependencies,
}

impl AppDependencies {
  pub fn new(
    company_repo: Arc<dyn CompanyRepository>,
    invoice_repo: Arc<dyn InvoiceRepository>,
    industry_repo: Arc<dyn IndustryRepository>,
  ) -> Self {
    let company_service = Arc::new(CompanyService::new(company_repo.clone()));
    let invoice_service = Arc::new(InvoiceService::new(invoice_repo.clone(), company_repo));
    let industry_service = Arc::new(IndustryService::new(industry_repo.clone()));

    Self {
      companies: CompanyRouteDependencies {
        list_use_case: Arc::new(ListCompaniesUseCase::new(company_service.clone())),
        get_details_use_case: Arc::new(GetCompanyDetailsUseCase::new(
          company_service.clone(),
          invoice_repo,
          industry_repo,
        )),
        create_use_case: Arc::new(CreateCompanyUseCase::new(company_service.clone())),
        update_use_case: Arc::new(UpdateCompanyUseCase::new(company_service.clone())),
        delete_use_case: Arc::new(DeleteCompanyUseCase::new(company_service)),
      },
      invoices: InvoiceRouteDependencies {
        list_use_case: Arc::new(ListInvoicesUseCase::new(invoice_service.clone())),
        get_details_use_case: Arc::new(GetInvoiceDetailsUseCase::new(invoice_service.clone())),
        create_use_case: Arc::new(CreateInvoiceUseCase::new(invoice_service.clone())),
        update_use_case: Arc::new(UpdateInvoiceUseCase::new(invoice_service.clone())),
        delete_use_case: Arc::new(DeleteInvoiceUseCase::new(invoice_service)),
      },
      industries: IndustryRouteDependencies {
        list_use_case: Arc::new(ListIndustriesUseCase::new(industry_service.clone())),
        create_use_case: Arc::new(CreateIndustryUseCase::new(industry_service.clone())),
        associate_use_case: Arc::new(AssociateCompanyUseCase::new(industry_service)),
      },
    }
  }
}

/// Mount the whole route table: resource scopes, extractor error handlers,
/// the health check and the 404 fallback
pub fn configure_app(cfg: &mut web::ServiceConfig, deps: AppDependencies) {
  let AppDependencies {
    companies,
    invoices,
    industries,
  } = deps;

  cfg
    .app_data(json_config())
    .app_data(path_config())
    .service(
      web::scope("/companies").configure(|cfg| configure_company_routes(cfg, companies)),
    )
    .service(web::scope("/invoices").configure(|cfg| configure_invoice_routes(cfg, invoices)))
    .service(
      web::scope("/industries").configure(|cfg| configure_industry_routes(cfg, industries)),
    )
    .route("/health", web::get().to(health_handler))
    .default_service(web::to(not_found_handler));
}
