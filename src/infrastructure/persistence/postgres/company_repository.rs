use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

use crate::domain::company::{Company, CompanyError, CompanyRepository, CompanySummary};

#[derive(Debug, FromRow)]
struct CompanyRow {
  code: String,
  name: String,
  description: String,
}

impl From<CompanyRow> for Company {
  fn from(row: CompanyRow) -> Self {
    Company {
      code: row.code,
      name: row.name,
      description: row.description,
    }
  }
}

#[derive(Debug, FromRow)]
struct CompanySummaryRow {
  code: String,
  name: String,
}

pub struct PostgresCompanyRepository {
  pool: PgPool,
}

impl PostgresCompanyRepository {
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }
}

#[async_trait]
impl CompanyRepository for PostgresCompanyRepository {
  async fn list(&self) -> Result<Vec<CompanySummary>, CompanyError> {
    let rows = sqlx::query_as::<_, CompanySummaryRow>(
      r#"
            SELECT code, name
            FROM companies
            ORDER BY name, code
            "#,
    )
    .fetch_all(&self.pool)
    .await?;

    Ok(
      rows
        .into_iter()
        .map(|r| CompanySummary {
          code: r.code,
          name: r.name,
        })
        .collect(),
    )
  }

  async fn find_by_code(&self, code: &str) -> Result<Option<Company>, CompanyError> {
    let row = sqlx::query_as::<_, CompanyRow>(
      r#"
            SELECT code, name, description
            FROM companies
            WHERE code = $1
            "#,
    )
    .bind(code)
    .fetch_optional(&self.pool)
    .await?;

    Ok(row.map(Company::from))
  }

  async fn create(&self, company: Company) -> Result<Company, CompanyError> {
    let row = sqlx::query_as::<_, CompanyRow>(
      r#"
            INSERT INTO companies (code, name, description)
            VALUES ($1, $2, $3)
            RETURNING code, name, description
            "#,
    )
    .bind(&company.code)
    .bind(&company.name)
    .bind(&company.description)
    .fetch_one(&self.pool)
    .await?;

    Ok(row.into())
  }

  async fn update(&self, company: Company) -> Result<Option<Company>, CompanyError> {
    let row = sqlx::query_as::<_, CompanyRow>(
      r#"
            UPDATE companies
            SET name = $2, description = $3
            WHERE code = $1
            RETURNING code, name, description
            "#,
    )
    .bind(&company.code)
    .bind(&company.name)
    .bind(&company.description)
    .fetch_optional(&self.pool)
    .await?;

    Ok(row.map(Company::from))
  }

  async fn delete(&self, code: &str) -> Result<bool, CompanyError> {
    // Invoices and industry links are removed by ON DELETE CASCADE
    let result = sqlx::query("DELETE FROM companies WHERE code = $1")
      .bind(code)
      .execute(&self.pool)
      .await?;

    Ok(result.rows_affected() > 0)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::errors::RepositoryError;
  use crate::infrastructure::persistence::postgres::test_support::setup_test_db;

  fn company(code: &str, name: &str, description: &str) -> Company {
    Company {
      code: code.to_string(),
      name: name.to_string(),
      description: description.to_string(),
    }
  }

  #[tokio::test]
  async fn test_create_and_find_company() {
    let (pool, _container) = setup_test_db().await;
    let repo = PostgresCompanyRepository::new(pool);

    let created = repo
      .create(company("apple", "Apple Computer", "Maker of OSX."))
      .await
      .unwrap();
    let found = repo.find_by_code("apple").await.unwrap();

    assert_eq!(found, Some(created));
    assert!(repo.find_by_code("unknown").await.unwrap().is_none());
  }

  #[tokio::test]
  async fn test_duplicate_code() {
    let (pool, _container) = setup_test_db().await;
    let repo = PostgresCompanyRepository::new(pool);

    repo.create(company("ibm", "IBM", "Big blue.")).await.unwrap();
    let result = repo.create(company("ibm", "IBM 2", "")).await;

    match result.unwrap_err() {
      CompanyError::Repository(RepositoryError::DuplicateKey(_)) => {}
      other => panic!("Expected Repository(DuplicateKey) error, got {:?}", other),
    }
  }

  #[tokio::test]
  async fn test_list_ordered_by_name() {
    let (pool, _container) = setup_test_db().await;
    let repo = PostgresCompanyRepository::new(pool);

    repo.create(company("ibm", "IBM", "Big blue.")).await.unwrap();
    repo
      .create(company("apple", "Apple Computer", "Maker of OSX."))
      .await
      .unwrap();

    let codes: Vec<_> = repo.list().await.unwrap().into_iter().map(|c| c.code).collect();
    assert_eq!(codes, vec!["apple", "ibm"]);
  }

  #[tokio::test]
  async fn test_update_company() {
    let (pool, _container) = setup_test_db().await;
    let repo = PostgresCompanyRepository::new(pool);

    repo.create(company("apple", "Apple", "old")).await.unwrap();
    let updated = repo
      .update(company("apple", "Apple Inc.", "new"))
      .await
      .unwrap()
      .unwrap();

    assert_eq!(updated.name, "Apple Inc.");
    assert_eq!(updated.description, "new");
    assert!(repo.update(company("nope", "x", "")).await.unwrap().is_none());
  }

  #[tokio::test]
  async fn test_delete_company() {
    let (pool, _container) = setup_test_db().await;
    let repo = PostgresCompanyRepository::new(pool);

    repo.create(company("apple", "Apple", "")).await.unwrap();

    assert!(repo.delete("apple").await.unwrap());
    assert!(!repo.delete("apple").await.unwrap());
  }
}
