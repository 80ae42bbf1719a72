pub mod company;
pub mod industry;
pub mod invoice;

use crate::adapters::http::errors::ApiError;
use actix_web::HttpRequest;

/// Fallback for every path no route matches
pub async fn not_found_handler(req: HttpRequest) -> Result<actix_web::HttpResponse, ApiError> {
  tracing::debug!(method = %req.method(), path = %req.path(), "No route matched");
  Err(ApiError::NotFound("Not Found".to_string()))
}

/// Liveness check
pub async fn health_handler() -> &'static str {
  "OK"
}
