use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use std::sync::Arc;

use crate::domain::company::Company;
use crate::domain::invoice::{InvoiceError, InvoiceService};

#[derive(Debug, Clone)]
pub struct GetInvoiceDetailsCommand {
  pub id: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GetInvoiceDetailsResponse {
  pub id: i32,
  pub amt: Decimal,
  pub paid: bool,
  pub add_date: DateTime<Utc>,
  pub paid_date: Option<NaiveDate>,
  pub company: Company,
}

pub struct GetInvoiceDetailsUseCase {
  invoice_service: Arc<InvoiceService>,
}

impl GetInvoiceDetailsUseCase {
  pub fn new(invoice_service: Arc<InvoiceService>) -> Self {
    Self { invoice_service }
  }

  pub async fn execute(
    &self,
    command: GetInvoiceDetailsCommand,
  ) -> Result<GetInvoiceDetailsResponse, InvoiceError> {
    let details = self.invoice_service.get_invoice(command.id).await?;
    let invoice = details.invoice;

    Ok(GetInvoiceDetailsResponse {
      id: invoice.id,
      amt: invoice.amt,
      paid: invoice.paid(),
      add_date: invoice.add_date,
      paid_date: invoice.paid_date(),
      company: details.company,
    })
  }
}
