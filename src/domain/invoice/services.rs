use chrono::Utc;
use std::sync::Arc;

use super::{
  entities::{Invoice, InvoiceDetails, InvoiceSummary, InvoiceUpdate, NewInvoice},
  errors::InvoiceError,
  ports::InvoiceRepository,
  value_objects::Amount,
};
use crate::domain::company::CompanyRepository;

/// Invoice service implementing the invoice entity store
pub struct InvoiceService {
  invoice_repo: Arc<dyn InvoiceRepository>,
  company_repo: Arc<dyn CompanyRepository>,
}

impl InvoiceService {
  pub fn new(
    invoice_repo: Arc<dyn InvoiceRepository>,
    company_repo: Arc<dyn CompanyRepository>,
  ) -> Self {
    Self {
      invoice_repo,
      company_repo,
    }
  }

  pub async fn list_invoices(&self) -> Result<Vec<InvoiceSummary>, InvoiceError> {
    self.invoice_repo.list().await
  }

  pub async fn get_invoice(&self, id: i32) -> Result<InvoiceDetails, InvoiceError> {
    self
      .invoice_repo
      .find_details(id)
      .await?
      .ok_or(InvoiceError::InvoiceNotFound(id))
  }

  /// Create an unpaid invoice for an existing company
  pub async fn create_invoice(
    &self,
    comp_code: String,
    amt: Amount,
  ) -> Result<Invoice, InvoiceError> {
    // Checked here so an unknown company is a domain error, not a store failure
    if self.company_repo.find_by_code(&comp_code).await?.is_none() {
      return Err(InvoiceError::CompanyNotFound(comp_code));
    }

    let invoice = self
      .invoice_repo
      .create(NewInvoice { comp_code, amt })
      .await?;

    tracing::info!(id = invoice.id, comp_code = %invoice.comp_code, "Invoice created");
    Ok(invoice)
  }

  /// Update amount and payment state. The paid date is stamped by the server.
  pub async fn update_invoice(
    &self,
    id: i32,
    amt: Amount,
    paid: Option<bool>,
  ) -> Result<Invoice, InvoiceError> {
    let today = Utc::now().date_naive();
    let invoice = self
      .invoice_repo
      .update(id, InvoiceUpdate { amt, paid }, today)
      .await?
      .ok_or(InvoiceError::InvoiceNotFound(id))?;

    tracing::info!(
      id,
      paid = invoice.paid(),
      paid_date = ?invoice.paid_date(),
      "Invoice updated"
    );
    Ok(invoice)
  }

  pub async fn delete_invoice(&self, id: i32) -> Result<(), InvoiceError> {
    if !self.invoice_repo.delete(id).await? {
      return Err(InvoiceError::InvoiceNotFound(id));
    }

    tracing::info!(id, "Invoice deleted");
    Ok(())
  }
}
