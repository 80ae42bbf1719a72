use super::value_objects::{IndustryCode, IndustryName};

/// Industry a company can belong to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Industry {
  pub ind_code: String,
  pub industry: String,
}

impl Industry {
  pub fn new(ind_code: IndustryCode, industry: IndustryName) -> Self {
    Self {
      ind_code: ind_code.into_inner(),
      industry: industry.into_inner(),
    }
  }
}

/// Industry with the codes of its member companies
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndustryListing {
  pub ind_code: String,
  pub industry: String,
  pub companies: Vec<String>,
}

/// Membership of a company in an industry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyIndustry {
  pub comp_code: String,
  pub ind_code: String,
}
