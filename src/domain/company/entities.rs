use super::value_objects::{CompanyCode, CompanyDescription, CompanyName};

/// Company entity keyed by its unique code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Company {
  pub code: String,
  pub name: String,
  pub description: String,
}

impl Company {
  /// Create new company (for creation)
  pub fn new(code: CompanyCode, name: CompanyName, description: CompanyDescription) -> Self {
    Self {
      code: code.into_inner(),
      name: name.into_inner(),
      description: description.into_inner(),
    }
  }

  /// Replace the mutable fields; the code never changes
  pub fn update_profile(&mut self, name: CompanyName, description: CompanyDescription) {
    self.name = name.into_inner();
    self.description = description.into_inner();
  }
}

/// Row of the company listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanySummary {
  pub code: String,
  pub name: String,
}

/// Company with its invoice ids and industry names joined in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyDetails {
  pub code: String,
  pub name: String,
  pub description: String,
  pub invoices: Vec<i32>,
  pub industries: Vec<String>,
}

impl CompanyDetails {
  pub fn assemble(company: Company, invoices: Vec<i32>, industries: Vec<String>) -> Self {
    Self {
      code: company.code,
      name: company.name,
      description: company.description,
      invoices,
      industries,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn apple() -> Company {
    Company::new(
      CompanyCode::new("apple").unwrap(),
      CompanyName::new("Apple Computer").unwrap(),
      CompanyDescription::new("Maker of OSX.").unwrap(),
    )
  }

  #[test]
  fn test_update_profile_keeps_code() {
    let mut company = apple();
    company.update_profile(
      CompanyName::new("Apple Inc.").unwrap(),
      CompanyDescription::new("Maker of macOS.").unwrap(),
    );

    assert_eq!(company.code, "apple");
    assert_eq!(company.name, "Apple Inc.");
    assert_eq!(company.description, "Maker of macOS.");
  }

  #[test]
  fn test_assemble_details() {
    let details = CompanyDetails::assemble(apple(), vec![1, 2], vec!["Technology".into()]);

    assert_eq!(details.code, "apple");
    assert_eq!(details.invoices, vec![1, 2]);
    assert_eq!(details.industries, vec!["Technology".to_string()]);
  }
}
