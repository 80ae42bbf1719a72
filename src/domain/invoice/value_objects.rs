use chrono::NaiveDate;
use rust_decimal::Decimal;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValueObjectError {
  #[error("Invalid amount: {0}")]
  InvalidAmount(String),
  #[error("Invalid payment state: {0}")]
  InvalidPaymentState(String),
}

// Amount - positive, cents precision, fits NUMERIC(12,2)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Amount(Decimal);

impl Amount {
  const MAX_SCALE: u32 = 2;

  fn max() -> Decimal {
    Decimal::new(999_999_999_999, 2)
  }

  pub fn new(value: Decimal) -> Result<Self, ValueObjectError> {
    if value <= Decimal::ZERO {
      return Err(ValueObjectError::InvalidAmount(
        "Amount must be greater than zero".to_string(),
      ));
    }
    if value.normalize().scale() > Self::MAX_SCALE {
      return Err(ValueObjectError::InvalidAmount(
        "Amount cannot have more than 2 decimal places".to_string(),
      ));
    }
    if value > Self::max() {
      return Err(ValueObjectError::InvalidAmount(format!(
        "Amount cannot exceed {}",
        Self::max()
      )));
    }
    Ok(Self(value))
  }

  pub fn value(&self) -> Decimal {
    self.0
  }
}

/// Payment facet of an invoice. A paid invoice always carries its paid date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentStatus {
  Unpaid,
  Paid { paid_date: NaiveDate },
}

impl PaymentStatus {
  /// Rebuild from the `paid` / `paid_date` column pair
  pub fn from_parts(paid: bool, paid_date: Option<NaiveDate>) -> Result<Self, ValueObjectError> {
    match (paid, paid_date) {
      (false, None) => Ok(PaymentStatus::Unpaid),
      (true, Some(paid_date)) => Ok(PaymentStatus::Paid { paid_date }),
      (true, None) => Err(ValueObjectError::InvalidPaymentState(
        "paid invoice without paid_date".to_string(),
      )),
      (false, Some(_)) => Err(ValueObjectError::InvalidPaymentState(
        "unpaid invoice with paid_date".to_string(),
      )),
    }
  }

  /// Apply a requested paid flag. Paying stamps `today`, un-paying clears the
  /// date, an unchanged flag keeps the current state.
  pub fn transition(self, paid: bool, today: NaiveDate) -> Self {
    match (self, paid) {
      (PaymentStatus::Unpaid, true) => PaymentStatus::Paid { paid_date: today },
      (PaymentStatus::Paid { .. }, false) => PaymentStatus::Unpaid,
      (current, _) => current,
    }
  }

  pub fn is_paid(&self) -> bool {
    matches!(self, PaymentStatus::Paid { .. })
  }

  pub fn paid_date(&self) -> Option<NaiveDate> {
    match self {
      PaymentStatus::Paid { paid_date } => Some(*paid_date),
      PaymentStatus::Unpaid => None,
    }
  }
}
