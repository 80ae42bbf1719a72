use std::fmt;

use super::errors::IndustryValidationError;

/// Short unique industry code, e.g. `acct`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IndustryCode(String);

impl IndustryCode {
  const MAX_LENGTH: usize = 32;

  pub fn new(code: impl Into<String>) -> Result<Self, IndustryValidationError> {
    let code = code.into().trim().to_string();

    if code.is_empty() {
      return Err(IndustryValidationError::CodeEmpty);
    }

    if code.len() > Self::MAX_LENGTH {
      return Err(IndustryValidationError::CodeTooLong {
        max: Self::MAX_LENGTH,
      });
    }

    if !code
      .chars()
      .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_')
    {
      return Err(IndustryValidationError::CodeInvalidCharacters(code));
    }

    Ok(Self(code))
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }

  pub fn into_inner(self) -> String {
    self.0
  }
}

impl fmt::Display for IndustryCode {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

/// Display name of an industry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndustryName(String);

impl IndustryName {
  const MAX_LENGTH: usize = 255;

  pub fn new(name: impl Into<String>) -> Result<Self, IndustryValidationError> {
    let name = name.into().trim().to_string();

    if name.is_empty() {
      return Err(IndustryValidationError::NameEmpty);
    }

    if name.len() > Self::MAX_LENGTH {
      return Err(IndustryValidationError::NameTooLong {
        max: Self::MAX_LENGTH,
      });
    }

    Ok(Self(name))
  }

  pub fn into_inner(self) -> String {
    self.0
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_industry_code() {
    assert_eq!(IndustryCode::new(" acct ").unwrap().as_str(), "acct");
    assert!(matches!(
      IndustryCode::new("ACCT"),
      Err(IndustryValidationError::CodeInvalidCharacters(_))
    ));
    assert!(IndustryCode::new("tech_2").is_ok());
    assert!(matches!(
      IndustryCode::new(""),
      Err(IndustryValidationError::CodeEmpty)
    ));
    assert!(IndustryCode::new("no spaces").is_err());
    assert!(IndustryCode::new("x".repeat(33)).is_err());
  }

  #[test]
  fn test_industry_name() {
    assert_eq!(
      IndustryName::new(" Accounting ").unwrap().into_inner(),
      "Accounting"
    );
    assert!(IndustryName::new("  ").is_err());
  }
}
