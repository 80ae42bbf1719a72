pub mod create_invoice;
pub mod delete_invoice;
pub mod get_invoice_details;
pub mod list_invoices;
pub mod update_invoice;

pub use create_invoice::{CreateInvoiceCommand, CreateInvoiceUseCase};
pub use delete_invoice::{DeleteInvoiceCommand, DeleteInvoiceUseCase};
pub use get_invoice_details::{
  GetInvoiceDetailsCommand, GetInvoiceDetailsResponse, GetInvoiceDetailsUseCase,
};
pub use list_invoices::{ListInvoicesResponse, ListInvoicesUseCase};
pub use update_invoice::{UpdateInvoiceCommand, UpdateInvoiceUseCase};

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;

use crate::domain::invoice::Invoice;

/// Invoice as returned by create and update
#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceResponse {
  pub id: i32,
  pub comp_code: String,
  pub amt: Decimal,
  pub paid: bool,
  pub add_date: DateTime<Utc>,
  pub paid_date: Option<NaiveDate>,
}

impl From<Invoice> for InvoiceResponse {
  fn from(invoice: Invoice) -> Self {
    Self {
      id: invoice.id,
      paid: invoice.paid(),
      paid_date: invoice.paid_date(),
      comp_code: invoice.comp_code,
      amt: invoice.amt,
      add_date: invoice.add_date,
    }
  }
}
