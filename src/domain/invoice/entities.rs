use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;

use super::value_objects::{Amount, PaymentStatus};
use crate::domain::company::Company;

// Invoice - one billable amount owed by a company
#[derive(Debug, Clone, PartialEq)]
pub struct Invoice {
  pub id: i32,
  pub comp_code: String,
  pub amt: Decimal,
  pub status: PaymentStatus,
  pub add_date: DateTime<Utc>,
}

impl Invoice {
  pub fn paid(&self) -> bool {
    self.status.is_paid()
  }

  pub fn paid_date(&self) -> Option<NaiveDate> {
    self.status.paid_date()
  }

  /// Replace the amount and, when a paid flag is requested, run the payment
  /// transition against the current state.
  pub fn apply_update(&mut self, update: &InvoiceUpdate, today: NaiveDate) {
    self.amt = update.amt.value();
    if let Some(paid) = update.paid {
      self.status = self.status.transition(paid, today);
    }
  }
}

/// Data needed to insert an invoice; the store assigns id and add_date
#[derive(Debug, Clone)]
pub struct NewInvoice {
  pub comp_code: String,
  pub amt: Amount,
}

/// Requested change of an existing invoice
#[derive(Debug, Clone)]
pub struct InvoiceUpdate {
  pub amt: Amount,
  pub paid: Option<bool>,
}

/// Row of the invoice listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvoiceSummary {
  pub id: i32,
  pub comp_code: String,
}

/// Invoice joined with the company it bills
#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceDetails {
  pub invoice: Invoice,
  pub company: Company,
}

#[cfg(test)]
mod tests {
  use super::*;
  use rust_decimal_macros::dec;

  fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 17).unwrap()
  }

  fn unpaid_invoice() -> Invoice {
    Invoice {
      id: 1,
      comp_code: "apple".to_string(),
      amt: dec!(100),
      status: PaymentStatus::Unpaid,
      add_date: Utc::now(),
    }
  }

  #[test]
  fn test_apply_update_pays_invoice() {
    let mut invoice = unpaid_invoice();
    let update = InvoiceUpdate {
      amt: Amount::new(dec!(150)).unwrap(),
      paid: Some(true),
    };

    invoice.apply_update(&update, today());

    assert_eq!(invoice.amt, dec!(150));
    assert!(invoice.paid());
    assert_eq!(invoice.paid_date(), Some(today()));
  }

  #[test]
  fn test_apply_update_without_flag_keeps_status() {
    let mut invoice = unpaid_invoice();
    invoice.status = PaymentStatus::Paid {
      paid_date: NaiveDate::from_ymd_opt(2018, 1, 1).unwrap(),
    };
    let update = InvoiceUpdate {
      amt: Amount::new(dec!(1000)).unwrap(),
      paid: None,
    };

    invoice.apply_update(&update, today());

    assert_eq!(invoice.amt, dec!(1000));
    assert_eq!(
      invoice.paid_date(),
      Some(NaiveDate::from_ymd_opt(2018, 1, 1).unwrap())
    );
  }

  #[test]
  fn test_apply_update_unpays_invoice() {
    let mut invoice = unpaid_invoice();
    invoice.status = PaymentStatus::Paid {
      paid_date: NaiveDate::from_ymd_opt(2018, 1, 1).unwrap(),
    };
    let update = InvoiceUpdate {
      amt: Amount::new(dec!(100)).unwrap(),
      paid: Some(false),
    };

    invoice.apply_update(&update, today());

    assert!(!invoice.paid());
    assert_eq!(invoice.paid_date(), None);
  }
}
