use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

use crate::domain::industry::{
  CompanyIndustry, Industry, IndustryError, IndustryListing, IndustryRepository,
};

#[derive(Debug, FromRow)]
struct IndustryRow {
  ind_code: String,
  industry: String,
}

impl From<IndustryRow> for Industry {
  fn from(row: IndustryRow) -> Self {
    Industry {
      ind_code: row.ind_code,
      industry: row.industry,
    }
  }
}

#[derive(Debug, FromRow)]
struct IndustryListingRow {
  ind_code: String,
  industry: String,
  companies: Vec<String>,
}

#[derive(Debug, FromRow)]
struct CompanyIndustryRow {
  comp_code: String,
  ind_code: String,
}

pub struct PostgresIndustryRepository {
  pool: PgPool,
}

impl PostgresIndustryRepository {
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }
}

#[async_trait]
impl IndustryRepository for PostgresIndustryRepository {
  async fn list_with_companies(&self) -> Result<Vec<IndustryListing>, IndustryError> {
    // LEFT JOIN keeps industries without members; FILTER drops the NULL row
    let rows = sqlx::query_as::<_, IndustryListingRow>(
      r#"
            SELECT i.ind_code,
                   i.industry,
                   COALESCE(
                     array_agg(ci.comp_code ORDER BY ci.comp_code)
                       FILTER (WHERE ci.comp_code IS NOT NULL),
                     '{}'
                   ) AS companies
            FROM industries AS i
            LEFT JOIN company_industries AS ci ON ci.ind_code = i.ind_code
            GROUP BY i.ind_code, i.industry
            ORDER BY i.ind_code
            "#,
    )
    .fetch_all(&self.pool)
    .await?;

    Ok(
      rows
        .into_iter()
        .map(|r| IndustryListing {
          ind_code: r.ind_code,
          industry: r.industry,
          companies: r.companies,
        })
        .collect(),
    )
  }

  async fn find_names_by_company(&self, comp_code: &str) -> Result<Vec<String>, IndustryError> {
    let names = sqlx::query_scalar::<_, String>(
      r#"
            SELECT i.industry
            FROM company_industries AS ci
            JOIN industries AS i ON i.ind_code = ci.ind_code
            WHERE ci.comp_code = $1
            ORDER BY i.industry
            "#,
    )
    .bind(comp_code)
    .fetch_all(&self.pool)
    .await?;

    Ok(names)
  }

  async fn create(&self, industry: Industry) -> Result<Industry, IndustryError> {
    let row = sqlx::query_as::<_, IndustryRow>(
      r#"
            INSERT INTO industries (ind_code, industry)
            VALUES ($1, $2)
            RETURNING ind_code, industry
            "#,
    )
    .bind(&industry.ind_code)
    .bind(&industry.industry)
    .fetch_one(&self.pool)
    .await?;

    Ok(row.into())
  }

  async fn associate(&self, link: CompanyIndustry) -> Result<CompanyIndustry, IndustryError> {
    let row = sqlx::query_as::<_, CompanyIndustryRow>(
      r#"
            INSERT INTO company_industries (comp_code, ind_code)
            VALUES ($1, $2)
            RETURNING comp_code, ind_code
            "#,
    )
    .bind(&link.comp_code)
    .bind(&link.ind_code)
    .fetch_one(&self.pool)
    .await?;

    Ok(CompanyIndustry {
      comp_code: row.comp_code,
      ind_code: row.ind_code,
    })
  }
}
