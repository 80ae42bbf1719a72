use actix_web::{
  HttpResponse,
  error::ResponseError,
  http::{StatusCode, header::ContentType},
};
use serde::Serialize;
use std::fmt;

use crate::domain::company::CompanyError;
use crate::domain::industry::IndustryError;
use crate::domain::invoice::InvoiceError;

use super::dtos::{ErrorBody, ErrorResponse};

/// API error type that maps domain errors to HTTP responses
#[derive(Debug, Serialize)]
#[serde(tag = "type", content = "details")]
pub enum ApiError {
  /// Unknown resource or unmatched path (404 Not Found)
  NotFound(String),

  /// Validation error (400 Bad Request)
  Validation(String),

  /// Unique key already taken (409 Conflict)
  Conflict(String),

  /// Request took longer than allowed (503 Service Unavailable)
  Timeout(String),

  /// Internal server error (500 Internal Server Error)
  Internal(String),
}

impl fmt::Display for ApiError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ApiError::NotFound(msg) => write!(f, "Not found: {}", msg),
      ApiError::Validation(msg) => write!(f, "Validation error: {}", msg),
      ApiError::Conflict(msg) => write!(f, "Conflict: {}", msg),
      ApiError::Timeout(msg) => write!(f, "Timeout: {}", msg),
      ApiError::Internal(msg) => write!(f, "Internal error: {}", msg),
    }
  }
}

impl ResponseError for ApiError {
  fn status_code(&self) -> StatusCode {
    match self {
      ApiError::NotFound(_) => StatusCode::NOT_FOUND,
      ApiError::Validation(_) => StatusCode::BAD_REQUEST,
      ApiError::Conflict(_) => StatusCode::CONFLICT,
      ApiError::Timeout(_) => StatusCode::SERVICE_UNAVAILABLE,
      ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }

  fn error_response(&self) -> HttpResponse {
    let status = self.status_code();
    let message = match self {
      ApiError::NotFound(msg)
      | ApiError::Validation(msg)
      | ApiError::Conflict(msg)
      | ApiError::Timeout(msg) => msg.clone(),
      ApiError::Internal(msg) => {
        // Don't expose internal error details
        tracing::error!("Internal error: {}", msg);
        "An internal server error occurred".to_string()
      }
    };

    HttpResponse::build(status)
      .content_type(ContentType::json())
      .json(ErrorResponse {
        error: ErrorBody {
          message,
          status: status.as_u16(),
        },
      })
  }
}

/// Convert validation errors from validator crate
impl From<validator::ValidationErrors> for ApiError {
  fn from(errors: validator::ValidationErrors) -> Self {
    let messages: Vec<String> = errors
      .field_errors()
      .iter()
      .flat_map(|(field, errors)| {
        errors
          .iter()
          .map(|error| {
            error
              .message
              .as_ref()
              .map(|m| m.to_string())
              .unwrap_or_else(|| format!("Invalid field: {}", field))
          })
          .collect::<Vec<_>>()
      })
      .collect();

    ApiError::Validation(messages.join(", "))
  }
}

impl From<CompanyError> for ApiError {
  fn from(error: CompanyError) -> Self {
    match error {
      CompanyError::NotFound(_) => ApiError::NotFound(error.to_string()),
      CompanyError::AlreadyExists(_) => ApiError::Conflict(error.to_string()),
      CompanyError::Validation(e) => ApiError::Validation(e.to_string()),
      CompanyError::Repository(e) => ApiError::Internal(format!("Repository error: {}", e)),
    }
  }
}

impl From<InvoiceError> for ApiError {
  fn from(error: InvoiceError) -> Self {
    match error {
      InvoiceError::InvoiceNotFound(_) | InvoiceError::CompanyNotFound(_) => {
        ApiError::NotFound(error.to_string())
      }
      InvoiceError::Validation(e) => ApiError::Validation(e.to_string()),
      InvoiceError::Repository(e) => ApiError::Internal(format!("Repository error: {}", e)),
    }
  }
}

impl From<IndustryError> for ApiError {
  fn from(error: IndustryError) -> Self {
    match error {
      IndustryError::AssociationTargetNotFound { .. } => ApiError::NotFound(error.to_string()),
      IndustryError::AlreadyExists(_) | IndustryError::AlreadyAssociated { .. } => {
        ApiError::Conflict(error.to_string())
      }
      IndustryError::Validation(e) => ApiError::Validation(e.to_string()),
      IndustryError::Repository(e) => ApiError::Internal(format!("Repository error: {}", e)),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::errors::RepositoryError;
  use crate::domain::invoice::ValueObjectError;
  use actix_web::body::to_bytes;

  #[test]
  fn test_api_error_status_codes() {
    assert_eq!(
      ApiError::NotFound("test".to_string()).status_code(),
      StatusCode::NOT_FOUND
    );
    assert_eq!(
      ApiError::Validation("test".to_string()).status_code(),
      StatusCode::BAD_REQUEST
    );
    assert_eq!(
      ApiError::Conflict("test".to_string()).status_code(),
      StatusCode::CONFLICT
    );
    assert_eq!(
      ApiError::Timeout("test".to_string()).status_code(),
      StatusCode::SERVICE_UNAVAILABLE
    );
    assert_eq!(
      ApiError::Internal("test".to_string()).status_code(),
      StatusCode::INTERNAL_SERVER_ERROR
    );
  }

  #[test]
  fn test_domain_error_conversion() {
    let api_error: ApiError = CompanyError::NotFound("apple".to_string()).into();
    assert_eq!(api_error.status_code(), StatusCode::NOT_FOUND);

    let api_error: ApiError = CompanyError::AlreadyExists("apple".to_string()).into();
    assert_eq!(api_error.status_code(), StatusCode::CONFLICT);

    let api_error: ApiError = InvoiceError::CompanyNotFound("nope".to_string()).into();
    assert_eq!(api_error.status_code(), StatusCode::NOT_FOUND);

    let api_error: ApiError = InvoiceError::Validation(ValueObjectError::InvalidAmount(
      "must be positive".to_string(),
    ))
    .into();
    assert_eq!(api_error.status_code(), StatusCode::BAD_REQUEST);

    let api_error: ApiError = IndustryError::AlreadyAssociated {
      comp_code: "apple".to_string(),
      ind_code: "tech".to_string(),
    }
    .into();
    assert_eq!(api_error.status_code(), StatusCode::CONFLICT);

    let api_error: ApiError =
      IndustryError::Repository(RepositoryError::QueryFailed("boom".to_string())).into();
    assert_eq!(api_error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
  }

  #[actix_web::test]
  async fn test_error_envelope() {
    let response = ApiError::NotFound("Company with code nope does not exist".to_string())
      .error_response();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = to_bytes(response.into_body()).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["error"]["status"], 404);
    assert_eq!(
      json["error"]["message"],
      "Company with code nope does not exist"
    );
  }

  #[actix_web::test]
  async fn test_internal_error_hides_details() {
    let response = ApiError::Internal("connection refused on 10.0.0.3".to_string()).error_response();

    let body = to_bytes(response.into_body()).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["error"]["status"], 500);
    assert_eq!(json["error"]["message"], "An internal server error occurred");
  }
}
