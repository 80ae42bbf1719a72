pub mod company_repository;
pub mod industry_repository;
pub mod invoice_repository;

pub use company_repository::PostgresCompanyRepository;
pub use industry_repository::PostgresIndustryRepository;
pub use invoice_repository::PostgresInvoiceRepository;

#[cfg(test)]
pub(crate) mod test_support {
  use sqlx::PgPool;
  use sqlx::postgres::PgPoolOptions;
  use testcontainers::ImageExt;
  use testcontainers_modules::postgres::Postgres;
  use testcontainers_modules::testcontainers::{ContainerAsync, runners::AsyncRunner};

  pub async fn setup_test_db() -> (PgPool, ContainerAsync<Postgres>) {
    let container = Postgres::default()
      .with_tag("16-alpine")
      .start()
      .await
      .expect("Failed to start postgres container");

    let host = container.get_host().await.expect("Failed to get host");
    let port = container
      .get_host_port_ipv4(5432)
      .await
      .expect("Failed to get port");
    let database_url = format!("postgres://postgres:postgres@{}:{}/postgres", host, port);

    let pool = PgPoolOptions::new()
      .max_connections(5)
      .connect(&database_url)
      .await
      .expect("Failed to connect to test database");

    sqlx::migrate!("./migrations")
      .run(&pool)
      .await
      .expect("Failed to run migrations");

    (pool, container)
  }

  /// Inserts the `apple` and `ibm` companies used across repository tests
  pub async fn seed_companies(pool: &PgPool) {
    sqlx::query(
      r#"
            INSERT INTO companies (code, name, description)
            VALUES ('apple', 'Apple Computer', 'Maker of OSX.'),
                   ('ibm', 'IBM', 'Big blue.')
            "#,
    )
    .execute(pool)
    .await
    .expect("Failed to seed companies");
  }
}
