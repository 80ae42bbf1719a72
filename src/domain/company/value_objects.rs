use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;

use super::errors::ValidationError;

lazy_static! {
  static ref NON_SLUG_CHARS: Regex = Regex::new(r"[^a-z0-9]+").expect("valid slug regex");
  static ref CODE_FORMAT: Regex = Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").expect("valid code regex");
}

/// Unique company code, used as the primary key and in URLs
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CompanyCode(String);

impl CompanyCode {
  pub const MAX_LENGTH: usize = 64;

  /// Accepts a caller-supplied code. Codes are lowercase URL slugs and are
  /// stored exactly as given, so uppercase input is rejected, not folded.
  pub fn new(code: impl Into<String>) -> Result<Self, ValidationError> {
    let code = code.into().trim().to_string();

    if code.is_empty() {
      return Err(ValidationError::CompanyCodeEmpty);
    }

    if code.len() > Self::MAX_LENGTH {
      return Err(ValidationError::CompanyCodeTooLong {
        max: Self::MAX_LENGTH,
      });
    }

    if !CODE_FORMAT.is_match(&code) {
      return Err(ValidationError::CompanyCodeInvalidFormat(code));
    }

    Ok(Self(code))
  }

  /// Derives a code from a company name: lowercase, runs of anything other
  /// than ASCII letters and digits become a single `-`.
  pub fn from_name(name: &CompanyName) -> Result<Self, ValidationError> {
    let lowered = name.as_str().to_lowercase();
    let slug = NON_SLUG_CHARS.replace_all(&lowered, "-");
    let slug = slug.trim_matches('-');

    if slug.is_empty() {
      return Err(ValidationError::CompanyCodeUnderivable(
        name.as_str().to_string(),
      ));
    }

    let truncated: String = slug.chars().take(Self::MAX_LENGTH).collect();
    Ok(Self(truncated.trim_end_matches('-').to_string()))
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }

  pub fn into_inner(self) -> String {
    self.0
  }
}

impl fmt::Display for CompanyCode {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

/// Company name value object with validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyName(String);

impl CompanyName {
  pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
    let name = name.into().trim().to_string();

    if name.is_empty() {
      return Err(ValidationError::CompanyNameTooShort { min: 1 });
    }

    if name.len() > 255 {
      return Err(ValidationError::CompanyNameTooLong { max: 255 });
    }

    Ok(Self(name))
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }

  pub fn into_inner(self) -> String {
    self.0
  }
}

/// Free-form company description
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CompanyDescription(String);

impl CompanyDescription {
  const MAX_LENGTH: usize = 2000;

  pub fn new(description: impl Into<String>) -> Result<Self, ValidationError> {
    let description = description.into().trim().to_string();

    if description.len() > Self::MAX_LENGTH {
      return Err(ValidationError::DescriptionTooLong {
        max: Self::MAX_LENGTH,
      });
    }

    Ok(Self(description))
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }

  pub fn into_inner(self) -> String {
    self.0
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_company_code_accepts_slugs() {
    assert_eq!(CompanyCode::new("apple").unwrap().as_str(), "apple");
    assert_eq!(CompanyCode::new("  ibm ").unwrap().as_str(), "ibm");
    assert_eq!(
      CompanyCode::new("big-blue-2").unwrap().as_str(),
      "big-blue-2"
    );
  }

  #[test]
  fn test_company_code_rejects_invalid() {
    assert!(matches!(
      CompanyCode::new("   "),
      Err(ValidationError::CompanyCodeEmpty)
    ));
    assert!(matches!(
      CompanyCode::new("has space"),
      Err(ValidationError::CompanyCodeInvalidFormat(_))
    ));
    assert!(matches!(
      CompanyCode::new("IBM"),
      Err(ValidationError::CompanyCodeInvalidFormat(code)) if code == "IBM"
    ));
    assert!(CompanyCode::new("-leading").is_err());
    assert!(CompanyCode::new("a".repeat(65)).is_err());
  }

  #[test]
  fn test_company_code_derived_from_name() {
    let name = CompanyName::new("Apple Computer").unwrap();
    assert_eq!(CompanyCode::from_name(&name).unwrap().as_str(), "apple-computer");

    let name = CompanyName::new("  AT&T -- Wireless!  ").unwrap();
    assert_eq!(CompanyCode::from_name(&name).unwrap().as_str(), "at-t-wireless");

    let name = CompanyName::new("Café 9").unwrap();
    assert_eq!(CompanyCode::from_name(&name).unwrap().as_str(), "caf-9");
  }

  #[test]
  fn test_derived_code_is_a_valid_code() {
    let name = CompanyName::new("International Business Machines").unwrap();
    let derived = CompanyCode::from_name(&name).unwrap();
    assert_eq!(CompanyCode::new(derived.as_str()).unwrap(), derived);
  }

  #[test]
  fn test_company_code_underivable_name() {
    let name = CompanyName::new("!!!").unwrap();
    assert!(matches!(
      CompanyCode::from_name(&name),
      Err(ValidationError::CompanyCodeUnderivable(_))
    ));
  }

  #[test]
  fn test_long_name_derives_bounded_code() {
    let name = CompanyName::new(format!("{} {}", "a".repeat(63), "b".repeat(10))).unwrap();
    let code = CompanyCode::from_name(&name).unwrap();
    assert!(code.as_str().len() <= CompanyCode::MAX_LENGTH);
    assert!(!code.as_str().ends_with('-'));
  }

  #[test]
  fn test_company_name() {
    assert_eq!(CompanyName::new(" Apple ").unwrap().as_str(), "Apple");
    assert!(CompanyName::new("").is_err());
    assert!(CompanyName::new("x".repeat(256)).is_err());
  }

  #[test]
  fn test_company_description() {
    assert_eq!(CompanyDescription::new("Maker of OSX.").unwrap().as_str(), "Maker of OSX.");
    assert_eq!(CompanyDescription::new("").unwrap().as_str(), "");
    assert!(CompanyDescription::new("x".repeat(2001)).is_err());
  }
}
