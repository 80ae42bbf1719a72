//! In-memory implementation of the repository ports
//!
//! Mirrors the relational schema closely enough for tests and local
//! development: unique keys, foreign keys and the cascade on company delete
//! behave like the Postgres tables.

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::domain::company::{Company, CompanyError, CompanyRepository, CompanySummary};
use crate::domain::errors::RepositoryError;
use crate::domain::industry::{
  CompanyIndustry, Industry, IndustryError, IndustryListing, IndustryRepository,
};
use crate::domain::invoice::{
  Invoice, InvoiceDetails, InvoiceError, InvoiceRepository, InvoiceSummary, InvoiceUpdate,
  NewInvoice, PaymentStatus,
};

#[derive(Default)]
struct State {
  companies: BTreeMap<String, Company>,
  invoices: BTreeMap<i32, Invoice>,
  last_invoice_id: i32,
  industries: BTreeMap<String, Industry>,
  // (comp_code, ind_code)
  company_industries: BTreeSet<(String, String)>,
}

/// Shared in-memory database handing out repository handles
#[derive(Clone, Default)]
pub struct InMemoryDatabase {
  state: Arc<RwLock<State>>,
}

impl InMemoryDatabase {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn companies(&self) -> InMemoryCompanyRepository {
    InMemoryCompanyRepository { db: self.clone() }
  }

  pub fn invoices(&self) -> InMemoryInvoiceRepository {
    InMemoryInvoiceRepository { db: self.clone() }
  }

  pub fn industries(&self) -> InMemoryIndustryRepository {
    InMemoryIndustryRepository { db: self.clone() }
  }

  fn read(&self) -> Result<RwLockReadGuard<'_, State>, RepositoryError> {
    self
      .state
      .read()
      .map_err(|e| RepositoryError::ConnectionFailed(format!("Failed to acquire read lock: {}", e)))
  }

  fn write(&self) -> Result<RwLockWriteGuard<'_, State>, RepositoryError> {
    self.state.write().map_err(|e| {
      RepositoryError::ConnectionFailed(format!("Failed to acquire write lock: {}", e))
    })
  }
}

pub struct InMemoryCompanyRepository {
  db: InMemoryDatabase,
}

#[async_trait]
impl CompanyRepository for InMemoryCompanyRepository {
  async fn list(&self) -> Result<Vec<CompanySummary>, CompanyError> {
    let state = self.db.read()?;
    let mut companies: Vec<CompanySummary> = state
      .companies
      .values()
      .map(|c| CompanySummary {
        code: c.code.clone(),
        name: c.name.clone(),
      })
      .collect();
    companies.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.code.cmp(&b.code)));
    Ok(companies)
  }

  async fn find_by_code(&self, code: &str) -> Result<Option<Company>, CompanyError> {
    Ok(self.db.read()?.companies.get(code).cloned())
  }

  async fn create(&self, company: Company) -> Result<Company, CompanyError> {
    let mut state = self.db.write()?;
    if state.companies.contains_key(&company.code) {
      return Err(RepositoryError::DuplicateKey(format!("companies_pkey ({})", company.code)).into());
    }
    state.companies.insert(company.code.clone(), company.clone());
    Ok(company)
  }

  async fn update(&self, company: Company) -> Result<Option<Company>, CompanyError> {
    let mut state = self.db.write()?;
    Ok(state.companies.get_mut(&company.code).map(|stored| {
      *stored = company;
      stored.clone()
    }))
  }

  async fn delete(&self, code: &str) -> Result<bool, CompanyError> {
    let mut state = self.db.write()?;
    if state.companies.remove(code).is_none() {
      return Ok(false);
    }
    state.invoices.retain(|_, invoice| invoice.comp_code != code);
    state.company_industries.retain(|(comp_code, _)| comp_code != code);
    Ok(true)
  }
}

pub struct InMemoryInvoiceRepository {
  db: InMemoryDatabase,
}

#[async_trait]
impl InvoiceRepository for InMemoryInvoiceRepository {
  async fn list(&self) -> Result<Vec<InvoiceSummary>, InvoiceError> {
    let state = self.db.read()?;
    Ok(
      state
        .invoices
        .values()
        .map(|i| InvoiceSummary {
          id: i.id,
          comp_code: i.comp_code.clone(),
        })
        .collect(),
    )
  }

  async fn find_details(&self, id: i32) -> Result<Option<InvoiceDetails>, InvoiceError> {
    let state = self.db.read()?;
    let Some(invoice) = state.invoices.get(&id) else {
      return Ok(None);
    };
    let company = state
      .companies
      .get(&invoice.comp_code)
      .cloned()
      .ok_or_else(|| RepositoryError::InconsistentRow(format!("invoice {} has no company", id)))?;

    Ok(Some(InvoiceDetails {
      invoice: invoice.clone(),
      company,
    }))
  }

  async fn find_ids_by_company(&self, comp_code: &str) -> Result<Vec<i32>, InvoiceError> {
    let state = self.db.read()?;
    Ok(
      state
        .invoices
        .values()
        .filter(|i| i.comp_code == comp_code)
        .map(|i| i.id)
        .collect(),
    )
  }

  async fn create(&self, invoice: NewInvoice) -> Result<Invoice, InvoiceError> {
    let mut state = self.db.write()?;
    if !state.companies.contains_key(&invoice.comp_code) {
      return Err(InvoiceError::CompanyNotFound(invoice.comp_code));
    }

    state.last_invoice_id += 1;
    let created = Invoice {
      id: state.last_invoice_id,
      comp_code: invoice.comp_code,
      amt: invoice.amt.value(),
      status: PaymentStatus::Unpaid,
      add_date: Utc::now(),
    };
    state.invoices.insert(created.id, created.clone());
    Ok(created)
  }

  async fn update(
    &self,
    id: i32,
    update: InvoiceUpdate,
    today: NaiveDate,
  ) -> Result<Option<Invoice>, InvoiceError> {
    // The write lock spans read and write, like the row lock in Postgres
    let mut state = self.db.write()?;
    Ok(state.invoices.get_mut(&id).map(|invoice| {
      invoice.apply_update(&update, today);
      invoice.clone()
    }))
  }

  async fn delete(&self, id: i32) -> Result<bool, InvoiceError> {
    Ok(self.db.write()?.invoices.remove(&id).is_some())
  }
}

pub struct InMemoryIndustryRepository {
  db: InMemoryDatabase,
}

#[async_trait]
impl IndustryRepository for InMemoryIndustryRepository {
  async fn list_with_companies(&self) -> Result<Vec<IndustryListing>, IndustryError> {
    let state = self.db.read()?;
    Ok(
      state
        .industries
        .values()
        .map(|industry| IndustryListing {
          ind_code: industry.ind_code.clone(),
          industry: industry.industry.clone(),
          companies: state
            .company_industries
            .iter()
            .filter(|(_, ind_code)| *ind_code == industry.ind_code)
            .map(|(comp_code, _)| comp_code.clone())
            .collect(),
        })
        .collect(),
    )
  }

  async fn find_names_by_company(&self, comp_code: &str) -> Result<Vec<String>, IndustryError> {
    let state = self.db.read()?;
    let mut names: Vec<String> = state
      .company_industries
      .iter()
      .filter(|(code, _)| code == comp_code)
      .filter_map(|(_, ind_code)| state.industries.get(ind_code))
      .map(|industry| industry.industry.clone())
      .collect();
    names.sort();
    Ok(names)
  }

  async fn create(&self, industry: Industry) -> Result<Industry, IndustryError> {
    let mut state = self.db.write()?;
    if state.industries.contains_key(&industry.ind_code) {
      return Err(
        RepositoryError::DuplicateKey(format!("industries_pkey ({})", industry.ind_code)).into(),
      );
    }
    state
      .industries
      .insert(industry.ind_code.clone(), industry.clone());
    Ok(industry)
  }

  async fn associate(&self, link: CompanyIndustry) -> Result<CompanyIndustry, IndustryError> {
    let mut state = self.db.write()?;
    if !state.companies.contains_key(&link.comp_code)
      || !state.industries.contains_key(&link.ind_code)
    {
      return Err(RepositoryError::ForeignKeyViolation("company_industries".to_string()).into());
    }
    if !state
      .company_industries
      .insert((link.comp_code.clone(), link.ind_code.clone()))
    {
      return Err(RepositoryError::DuplicateKey("company_industries_pkey".to_string()).into());
    }
    Ok(link)
  }
}
