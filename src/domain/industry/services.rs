use std::sync::Arc;

use super::{
  entities::{CompanyIndustry, Industry, IndustryListing},
  errors::IndustryError,
  ports::IndustryRepository,
  value_objects::{IndustryCode, IndustryName},
};
use crate::domain::errors::RepositoryError;

/// Industry service implementing the industry entity store and its
/// company association
pub struct IndustryService {
  industry_repo: Arc<dyn IndustryRepository>,
}

impl IndustryService {
  pub fn new(industry_repo: Arc<dyn IndustryRepository>) -> Self {
    Self { industry_repo }
  }

  pub async fn list_industries(&self) -> Result<Vec<IndustryListing>, IndustryError> {
    self.industry_repo.list_with_companies().await
  }

  pub async fn create_industry(
    &self,
    ind_code: IndustryCode,
    industry: IndustryName,
  ) -> Result<Industry, IndustryError> {
    let code = ind_code.as_str().to_string();

    let created = self
      .industry_repo
      .create(Industry::new(ind_code, industry))
      .await
      .map_err(|e| match e {
        IndustryError::Repository(RepositoryError::DuplicateKey(_)) => {
          IndustryError::AlreadyExists(code.clone())
        }
        other => other,
      })?;

    tracing::info!(ind_code = %created.ind_code, "Industry created");
    Ok(created)
  }

  /// Add a company to an industry. Unknown company or industry is reported by
  /// the store's foreign keys.
  pub async fn associate_company(
    &self,
    comp_code: String,
    ind_code: IndustryCode,
  ) -> Result<CompanyIndustry, IndustryError> {
    let link = CompanyIndustry {
      comp_code,
      ind_code: ind_code.into_inner(),
    };
    let (comp_code, ind_code) = (link.comp_code.clone(), link.ind_code.clone());

    let created = self
      .industry_repo
      .associate(link)
      .await
      .map_err(|e| match e {
        IndustryError::Repository(RepositoryError::ForeignKeyViolation(_)) => {
          IndustryError::AssociationTargetNotFound {
            comp_code: comp_code.clone(),
            ind_code: ind_code.clone(),
          }
        }
        IndustryError::Repository(RepositoryError::DuplicateKey(_)) => {
          IndustryError::AlreadyAssociated {
            comp_code: comp_code.clone(),
            ind_code: ind_code.clone(),
          }
        }
        other => other,
      })?;

    tracing::info!(
      comp_code = %created.comp_code,
      ind_code = %created.ind_code,
      "Company added to industry"
    );
    Ok(created)
  }
}
