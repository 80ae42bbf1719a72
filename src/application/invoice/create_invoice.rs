use rust_decimal::Decimal;
use std::sync::Arc;

use super::InvoiceResponse;
use crate::domain::invoice::{Amount, InvoiceError, InvoiceService};

#[derive(Debug, Clone)]
pub struct CreateInvoiceCommand {
  pub comp_code: String,
  pub amt: Decimal,
}

pub struct CreateInvoiceUseCase {
  invoice_service: Arc<InvoiceService>,
}

impl CreateInvoiceUseCase {
  pub fn new(invoice_service: Arc<InvoiceService>) -> Self {
    Self { invoice_service }
  }

  pub async fn execute(&self, command: CreateInvoiceCommand) -> Result<InvoiceResponse, InvoiceError> {
    let amt = Amount::new(command.amt)?;

    let invoice = self
      .invoice_service
      .create_invoice(command.comp_code, amt)
      .await?;

    Ok(invoice.into())
  }
}
