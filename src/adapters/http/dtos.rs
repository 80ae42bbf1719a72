use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::application::company::CompanyResponse;
use crate::application::invoice::{GetInvoiceDetailsResponse, InvoiceResponse};
use crate::domain::company::{Company, CompanyDetails, CompanySummary};
use crate::domain::industry::{CompanyIndustry, Industry, IndustryListing};
use crate::domain::invoice::InvoiceSummary;

// Requests

/// Request for company creation
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCompanyRequest {
  /// Derived from the name when omitted
  #[validate(length(min = 1, max = 64, message = "Code must be between 1 and 64 characters"))]
  pub code: Option<String>,

  #[validate(length(min = 1, max = 255, message = "Name must be between 1 and 255 characters"))]
  pub name: String,

  #[validate(length(max = 2000, message = "Description must be at most 2000 characters"))]
  pub description: Option<String>,
}

/// Request for company update
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateCompanyRequest {
  #[validate(length(min = 1, max = 255, message = "Name must be between 1 and 255 characters"))]
  pub name: String,

  #[validate(length(max = 2000, message = "Description must be at most 2000 characters"))]
  pub description: String,
}

/// Request for invoice creation
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateInvoiceRequest {
  #[validate(length(min = 1, message = "Company code is required"))]
  pub comp_code: String,

  #[serde(with = "rust_decimal::serde::float")]
  pub amt: Decimal,
}

/// Request for invoice update
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateInvoiceRequest {
  #[serde(with = "rust_decimal::serde::float")]
  pub amt: Decimal,

  /// Omitted means the payment state is left as is
  #[serde(default)]
  pub paid: Option<bool>,
}

/// Request for industry creation
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateIndustryRequest {
  #[validate(length(min = 1, max = 32, message = "Industry code must be between 1 and 32 characters"))]
  pub ind_code: String,

  #[validate(length(min = 1, max = 255, message = "Industry must be between 1 and 255 characters"))]
  pub industry: String,
}

/// Request adding a company to an industry
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AssociateCompanyRequest {
  #[validate(length(min = 1, message = "Industry code is required"))]
  pub ind_code: String,

  #[validate(length(min = 1, message = "Company code is required"))]
  pub comp_code: String,
}

// Responses

#[derive(Debug, Clone, Serialize)]
pub struct CompanySummaryDto {
  pub code: String,
  pub name: String,
}

impl From<CompanySummary> for CompanySummaryDto {
  fn from(summary: CompanySummary) -> Self {
    Self {
      code: summary.code,
      name: summary.name,
    }
  }
}

#[derive(Debug, Clone, Serialize)]
pub struct CompanyListResponse {
  pub companies: Vec<CompanySummaryDto>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CompanyDto {
  pub code: String,
  pub name: String,
  pub description: String,
}

impl From<CompanyResponse> for CompanyDto {
  fn from(company: CompanyResponse) -> Self {
    Self {
      code: company.code,
      name: company.name,
      description: company.description,
    }
  }
}

impl From<Company> for CompanyDto {
  fn from(company: Company) -> Self {
    Self {
      code: company.code,
      name: company.name,
      description: company.description,
    }
  }
}

#[derive(Debug, Clone, Serialize)]
pub struct CompanyEnvelope {
  pub company: CompanyDto,
}

/// Company with joined invoice ids and industry names
#[derive(Debug, Clone, Serialize)]
pub struct CompanyDetailsDto {
  pub code: String,
  pub name: String,
  pub description: String,
  pub invoices: Vec<i32>,
  pub industries: Vec<String>,
}

impl From<CompanyDetails> for CompanyDetailsDto {
  fn from(details: CompanyDetails) -> Self {
    Self {
      code: details.code,
      name: details.name,
      description: details.description,
      invoices: details.invoices,
      industries: details.industries,
    }
  }
}

#[derive(Debug, Clone, Serialize)]
pub struct CompanyDetailsEnvelope {
  pub company: CompanyDetailsDto,
}

#[derive(Debug, Clone, Serialize)]
pub struct InvoiceSummaryDto {
  pub id: i32,
  pub comp_code: String,
}

impl From<InvoiceSummary> for InvoiceSummaryDto {
  fn from(summary: InvoiceSummary) -> Self {
    Self {
      id: summary.id,
      comp_code: summary.comp_code,
    }
  }
}

#[derive(Debug, Clone, Serialize)]
pub struct InvoiceListResponse {
  pub invoices: Vec<InvoiceSummaryDto>,
}

#[derive(Debug, Clone, Serialize)]
pub struct InvoiceDto {
  pub id: i32,
  pub comp_code: String,
  #[serde(with = "rust_decimal::serde::float")]
  pub amt: Decimal,
  pub paid: bool,
  pub add_date: DateTime<Utc>,
  pub paid_date: Option<NaiveDate>,
}

impl From<InvoiceResponse> for InvoiceDto {
  fn from(invoice: InvoiceResponse) -> Self {
    Self {
      id: invoice.id,
      comp_code: invoice.comp_code,
      amt: invoice.amt,
      paid: invoice.paid,
      add_date: invoice.add_date,
      paid_date: invoice.paid_date,
    }
  }
}

#[derive(Debug, Clone, Serialize)]
pub struct InvoiceEnvelope {
  pub invoice: InvoiceDto,
}

#[derive(Debug, Clone, Serialize)]
pub struct InvoiceDetailsDto {
  pub id: i32,
  #[serde(with = "rust_decimal::serde::float")]
  pub amt: Decimal,
  pub paid: bool,
  pub add_date: DateTime<Utc>,
  pub paid_date: Option<NaiveDate>,
  pub company: CompanyDto,
}

impl From<GetInvoiceDetailsResponse> for InvoiceDetailsDto {
  fn from(details: GetInvoiceDetailsResponse) -> Self {
    Self {
      id: details.id,
      amt: details.amt,
      paid: details.paid,
      add_date: details.add_date,
      paid_date: details.paid_date,
      company: details.company.into(),
    }
  }
}

#[derive(Debug, Clone, Serialize)]
pub struct InvoiceDetailsEnvelope {
  pub invoice: InvoiceDetailsDto,
}

#[derive(Debug, Clone, Serialize)]
pub struct IndustryListingDto {
  pub ind_code: String,
  pub industry: String,
  pub companies: Vec<String>,
}

impl From<IndustryListing> for IndustryListingDto {
  fn from(listing: IndustryListing) -> Self {
    Self {
      ind_code: listing.ind_code,
      industry: listing.industry,
      companies: listing.companies,
    }
  }
}

#[derive(Debug, Clone, Serialize)]
pub struct IndustryListResponse {
  pub industries: Vec<IndustryListingDto>,
}

#[derive(Debug, Clone, Serialize)]
pub struct IndustryDto {
  pub ind_code: String,
  pub industry: String,
}

impl From<Industry> for IndustryDto {
  fn from(industry: Industry) -> Self {
    Self {
      ind_code: industry.ind_code,
      industry: industry.industry,
    }
  }
}

#[derive(Debug, Clone, Serialize)]
pub struct IndustryEnvelope {
  pub industry: IndustryDto,
}

#[derive(Debug, Clone, Serialize)]
pub struct CompanyIndustryDto {
  pub comp_code: String,
  pub ind_code: String,
}

impl From<CompanyIndustry> for CompanyIndustryDto {
  fn from(link: CompanyIndustry) -> Self {
    Self {
      comp_code: link.comp_code,
      ind_code: link.ind_code,
    }
  }
}

#[derive(Debug, Clone, Serialize)]
pub struct CompanyIndustryEnvelope {
  pub company_industry: CompanyIndustryDto,
}

/// Body of successful deletes
#[derive(Debug, Clone, Serialize)]
pub struct StatusResponse {
  pub status: String,
}

impl StatusResponse {
  pub fn deleted() -> Self {
    Self {
      status: "deleted".to_string(),
    }
  }
}

/// Error envelope shared by every failing response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
  pub error: ErrorBody,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
  /// Human-readable error message
  pub message: String,

  /// HTTP status code, mirrored from the response
  pub status: u16,
}

#[cfg(test)]
mod tests {
  use super::*;
  use rust_decimal_macros::dec;
  use serde_json::json;

  #[test]
  fn test_create_company_request_code_is_optional() {
    let json = r#"{"name": "Apple Computer"}"#;
    let request: CreateCompanyRequest = serde_json::from_str(json).unwrap();

    assert!(request.code.is_none());
    assert!(request.description.is_none());
    assert!(request.validate().is_ok());
  }

  #[test]
  fn test_create_company_request_empty_name() {
    let request = CreateCompanyRequest {
      code: None,
      name: String::new(),
      description: None,
    };

    assert!(request.validate().is_err());
  }

  #[test]
  fn test_create_company_request_empty_code() {
    let request = CreateCompanyRequest {
      code: Some(String::new()),
      name: "Apple".to_string(),
      description: None,
    };

    assert!(request.validate().is_err());
  }

  #[test]
  fn test_invoice_amount_accepts_json_number() {
    let json = r#"{"comp_code": "apple", "amt": 100.5}"#;
    let request: CreateInvoiceRequest = serde_json::from_str(json).unwrap();

    assert_eq!(request.amt, dec!(100.5));
  }

  #[test]
  fn test_update_invoice_request_paid_is_optional() {
    let request: UpdateInvoiceRequest = serde_json::from_str(r#"{"amt": 10}"#).unwrap();
    assert_eq!(request.paid, None);

    let request: UpdateInvoiceRequest =
      serde_json::from_str(r#"{"amt": 10, "paid": true}"#).unwrap();
    assert_eq!(request.paid, Some(true));
  }

  #[test]
  fn test_update_invoice_request_requires_amount() {
    assert!(serde_json::from_str::<UpdateInvoiceRequest>(r#"{"paid": true}"#).is_err());
  }

  #[test]
  fn test_invoice_dto_serialization() {
    let dto = InvoiceDto {
      id: 1,
      comp_code: "apple".to_string(),
      amt: dec!(100.50),
      paid: true,
      add_date: DateTime::parse_from_rfc3339("2026-10-01T12:00:00Z")
        .unwrap()
        .with_timezone(&Utc),
      paid_date: NaiveDate::from_ymd_opt(2026, 10, 17),
    };

    let value = serde_json::to_value(&dto).unwrap();

    assert_eq!(value["amt"], json!(100.5));
    assert_eq!(value["paid_date"], json!("2026-10-17"));
    assert_eq!(value["add_date"], json!("2026-10-01T12:00:00Z"));
  }

  #[test]
  fn test_unpaid_invoice_serializes_null_paid_date() {
    let dto = InvoiceDto {
      id: 2,
      comp_code: "ibm".to_string(),
      amt: dec!(7),
      paid: false,
      add_date: Utc::now(),
      paid_date: None,
    };

    let value = serde_json::to_value(&dto).unwrap();

    assert!(value["paid_date"].is_null());
  }

  #[test]
  fn test_error_response_shape() {
    let response = ErrorResponse {
      error: ErrorBody {
        message: "Not Found".to_string(),
        status: 404,
      },
    };

    assert_eq!(
      serde_json::to_value(&response).unwrap(),
      json!({"error": {"message": "Not Found", "status": 404}})
    );
  }
}
