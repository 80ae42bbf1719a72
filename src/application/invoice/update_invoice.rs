use rust_decimal::Decimal;
use std::sync::Arc;

use super::InvoiceResponse;
use crate::domain::invoice::{Amount, InvoiceError, InvoiceService};

#[derive(Debug, Clone)]
pub struct UpdateInvoiceCommand {
  pub id: i32,
  pub amt: Decimal,
  /// `None` leaves the payment state untouched
  pub paid: Option<bool>,
}

pub struct UpdateInvoiceUseCase {
  invoice_service: Arc<InvoiceService>,
}

impl UpdateInvoiceUseCase {
  pub fn new(invoice_service: Arc<InvoiceService>) -> Self {
    Self { invoice_service }
  }

  pub async fn execute(&self, command: UpdateInvoiceCommand) -> Result<InvoiceResponse, InvoiceError> {
    let amt = Amount::new(command.amt)?;

    let invoice = self
      .invoice_service
      .update_invoice(command.id, amt, command.paid)
      .await?;

    Ok(invoice.into())
  }
}
