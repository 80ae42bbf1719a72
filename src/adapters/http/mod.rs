pub mod app;
pub mod dtos;
pub mod errors;
pub mod handlers;
pub mod middleware;
pub mod routes;

// Re-export commonly used types
pub use app::{AppDependencies, configure_app};
pub use dtos::{ErrorBody, ErrorResponse};
pub use errors::ApiError;
pub use handlers::{health_handler, not_found_handler};
pub use middleware::{RequestId, RequestIdExt, RequestIdMiddleware, RequestTimeoutMiddleware};
pub use routes::{
  CompanyRouteDependencies, IndustryRouteDependencies, InvoiceRouteDependencies,
  configure_company_routes, configure_industry_routes, configure_invoice_routes, json_config,
  path_config,
};
