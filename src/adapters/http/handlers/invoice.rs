use actix_web::{HttpResponse, web};
use std::sync::Arc;
use validator::Validate;

use crate::{
  adapters::http::{
    dtos::{
      CreateInvoiceRequest, InvoiceDetailsEnvelope, InvoiceEnvelope, InvoiceListResponse,
      StatusResponse, UpdateInvoiceRequest,
    },
    errors::ApiError,
  },
  application::invoice::*,
};

/// List invoices
/// GET /invoices
pub async fn list_invoices_handler(
  use_case: web::Data<Arc<ListInvoicesUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let response = use_case.execute().await?;

  Ok(HttpResponse::Ok().json(InvoiceListResponse {
    invoices: response.invoices.into_iter().map(Into::into).collect(),
  }))
}

/// Get an invoice together with its company
/// GET /invoices/{id}
pub async fn get_invoice_handler(
  id: web::Path<i32>,
  use_case: web::Data<Arc<GetInvoiceDetailsUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let command = GetInvoiceDetailsCommand {
    id: id.into_inner(),
  };

  let details = use_case.execute(command).await?;

  Ok(HttpResponse::Ok().json(InvoiceDetailsEnvelope {
    invoice: details.into(),
  }))
}

/// Create an unpaid invoice
/// POST /invoices
pub async fn create_invoice_handler(
  request: web::Json<CreateInvoiceRequest>,
  use_case: web::Data<Arc<CreateInvoiceUseCase>>,
) -> Result<HttpResponse, ApiError> {
  request.validate()?;
  let request = request.into_inner();

  let command = CreateInvoiceCommand {
    comp_code: request.comp_code,
    amt: request.amt,
  };

  let invoice = use_case.execute(command).await?;

  Ok(HttpResponse::Created().json(InvoiceEnvelope {
    invoice: invoice.into(),
  }))
}

/// Update amount and payment state
/// PUT /invoices/{id}
pub async fn update_invoice_handler(
  id: web::Path<i32>,
  request: web::Json<UpdateInvoiceRequest>,
  use_case: web::Data<Arc<UpdateInvoiceUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let request = request.into_inner();

  let command = UpdateInvoiceCommand {
    id: id.into_inner(),
    amt: request.amt,
    paid: request.paid,
  };

  let invoice = use_case.execute(command).await?;

  Ok(HttpResponse::Ok().json(InvoiceEnvelope {
    invoice: invoice.into(),
  }))
}

/// Delete an invoice
/// DELETE /invoices/{id}
pub async fn delete_invoice_handler(
  id: web::Path<i32>,
  use_case: web::Data<Arc<DeleteInvoiceUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let command = DeleteInvoiceCommand {
    id: id.into_inner(),
  };

  use_case.execute(command).await?;

  Ok(HttpResponse::Ok().json(StatusResponse::deleted()))
}
