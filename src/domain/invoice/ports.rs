use async_trait::async_trait;
use chrono::NaiveDate;

use super::entities::{Invoice, InvoiceDetails, InvoiceSummary, InvoiceUpdate, NewInvoice};
use super::errors::InvoiceError;

#[async_trait]
pub trait InvoiceRepository: Send + Sync {
  /// All invoices ordered by id
  async fn list(&self) -> Result<Vec<InvoiceSummary>, InvoiceError>;
  async fn find_details(&self, id: i32) -> Result<Option<InvoiceDetails>, InvoiceError>;
  /// Ids of a company's invoices, ordered
  async fn find_ids_by_company(&self, comp_code: &str) -> Result<Vec<i32>, InvoiceError>;
  /// Fails with `CompanyNotFound` when `comp_code` references no company
  async fn create(&self, invoice: NewInvoice) -> Result<Invoice, InvoiceError>;
  /// Reads the current row, applies [`Invoice::apply_update`] and writes it
  /// back as one atomic unit. `None` when the invoice does not exist.
  async fn update(
    &self,
    id: i32,
    update: InvoiceUpdate,
    today: NaiveDate,
  ) -> Result<Option<Invoice>, InvoiceError>;
  /// Returns `false` when nothing was deleted
  async fn delete(&self, id: i32) -> Result<bool, InvoiceError>;
}
