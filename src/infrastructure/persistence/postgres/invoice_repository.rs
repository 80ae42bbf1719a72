use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool};

use crate::domain::company::Company;
use crate::domain::errors::RepositoryError;
use crate::domain::invoice::{
  Invoice, InvoiceDetails, InvoiceError, InvoiceRepository, InvoiceSummary, InvoiceUpdate,
  NewInvoice, PaymentStatus,
};

#[derive(Debug, FromRow)]
struct InvoiceRow {
  id: i32,
  comp_code: String,
  amt: Decimal,
  paid: bool,
  add_date: DateTime<Utc>,
  paid_date: Option<NaiveDate>,
}

impl TryFrom<InvoiceRow> for Invoice {
  type Error = InvoiceError;

  fn try_from(row: InvoiceRow) -> Result<Self, Self::Error> {
    let status = PaymentStatus::from_parts(row.paid, row.paid_date)
      .map_err(|e| RepositoryError::InconsistentRow(format!("invoice {}: {}", row.id, e)))?;

    Ok(Invoice {
      id: row.id,
      comp_code: row.comp_code,
      amt: row.amt,
      status,
      add_date: row.add_date,
    })
  }
}

#[derive(Debug, FromRow)]
struct InvoiceDetailsRow {
  id: i32,
  comp_code: String,
  amt: Decimal,
  paid: bool,
  add_date: DateTime<Utc>,
  paid_date: Option<NaiveDate>,
  name: String,
  description: String,
}

impl TryFrom<InvoiceDetailsRow> for InvoiceDetails {
  type Error = InvoiceError;

  fn try_from(row: InvoiceDetailsRow) -> Result<Self, Self::Error> {
    let company = Company {
      code: row.comp_code.clone(),
      name: row.name,
      description: row.description,
    };
    let invoice: Invoice = InvoiceRow {
      id: row.id,
      comp_code: row.comp_code,
      amt: row.amt,
      paid: row.paid,
      add_date: row.add_date,
      paid_date: row.paid_date,
    }
    .try_into()?;

    Ok(InvoiceDetails { invoice, company })
  }
}

#[derive(Debug, FromRow)]
struct InvoiceSummaryRow {
  id: i32,
  comp_code: String,
}

pub struct PostgresInvoiceRepository {
  pool: PgPool,
}

impl PostgresInvoiceRepository {
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }
}

#[async_trait]
impl InvoiceRepository for PostgresInvoiceRepository {
  async fn list(&self) -> Result<Vec<InvoiceSummary>, InvoiceError> {
    let rows = sqlx::query_as::<_, InvoiceSummaryRow>(
      r#"
            SELECT id, comp_code
            FROM invoices
            ORDER BY id
            "#,
    )
    .fetch_all(&self.pool)
    .await?;

    Ok(
      rows
        .into_iter()
        .map(|r| InvoiceSummary {
          id: r.id,
          comp_code: r.comp_code,
        })
        .collect(),
    )
  }

  async fn find_details(&self, id: i32) -> Result<Option<InvoiceDetails>, InvoiceError> {
    let row = sqlx::query_as::<_, InvoiceDetailsRow>(
      r#"
            SELECT i.id, i.comp_code, i.amt, i.paid, i.add_date, i.paid_date,
                   c.name, c.description
            FROM invoices AS i
            JOIN companies AS c ON c.code = i.comp_code
            WHERE i.id = $1
            "#,
    )
    .bind(id)
    .fetch_optional(&self.pool)
    .await?;

    row.map(|r| r.try_into()).transpose()
  }

  async fn find_ids_by_company(&self, comp_code: &str) -> Result<Vec<i32>, InvoiceError> {
    let ids = sqlx::query_scalar::<_, i32>(
      r#"
            SELECT id
            FROM invoices
            WHERE comp_code = $1
            ORDER BY id
            "#,
    )
    .bind(comp_code)
    .fetch_all(&self.pool)
    .await?;

    Ok(ids)
  }

  async fn create(&self, invoice: NewInvoice) -> Result<Invoice, InvoiceError> {
    let row = sqlx::query_as::<_, InvoiceRow>(
      r#"
            INSERT INTO invoices (comp_code, amt)
            VALUES ($1, $2)
            RETURNING id, comp_code, amt, paid, add_date, paid_date
            "#,
    )
    .bind(&invoice.comp_code)
    .bind(invoice.amt.value())
    .fetch_one(&self.pool)
    .await
    .map_err(|e| match RepositoryError::from(e) {
      // The company vanished between the existence check and the insert
      RepositoryError::ForeignKeyViolation(_) => {
        InvoiceError::CompanyNotFound(invoice.comp_code.clone())
      }
      other => InvoiceError::Repository(other),
    })?;

    row.try_into()
  }

  async fn update(
    &self,
    id: i32,
    update: InvoiceUpdate,
    today: NaiveDate,
  ) -> Result<Option<Invoice>, InvoiceError> {
    let mut tx = self.pool.begin().await?;

    // Row lock: concurrent updates of the same invoice wait here
    let current = sqlx::query_as::<_, InvoiceRow>(
      r#"
            SELECT id, comp_code, amt, paid, add_date, paid_date
            FROM invoices
            WHERE id = $1
            FOR UPDATE
            "#,
    )
    .bind(id)
    .fetch_optional(&mut *tx)
    .await?;

    let Some(current) = current else {
      tx.rollback().await?;
      return Ok(None);
    };

    let mut invoice: Invoice = current.try_into()?;
    invoice.apply_update(&update, today);

    let row = sqlx::query_as::<_, InvoiceRow>(
      r#"
            UPDATE invoices
            SET amt = $2, paid = $3, paid_date = $4
            WHERE id = $1
            RETURNING id, comp_code, amt, paid, add_date, paid_date
            "#,
    )
    .bind(invoice.id)
    .bind(invoice.amt)
    .bind(invoice.paid())
    .bind(invoice.paid_date())
    .fetch_one(&mut *tx)
    .await?;

    tx.commit()
      .await
      .map_err(|e| RepositoryError::TransactionFailed(e.to_string()))?;

    row.try_into().map(Some)
  }

  async fn delete(&self, id: i32) -> Result<bool, InvoiceError> {
    let result = sqlx::query("DELETE FROM invoices WHERE id = $1")
      .bind(id)
      .execute(&self.pool)
      .await?;

    Ok(result.rows_affected() > 0)
  }
}
