use actix_web::{
  App,
  body::to_bytes,
  http::StatusCode,
  test::{self, TestRequest},
};
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

use biztime::adapters::http::{
  AppDependencies, RequestIdMiddleware, RequestTimeoutMiddleware, configure_app,
};
use biztime::domain::company::{Company, CompanyError, CompanyRepository, CompanySummary};
use biztime::infrastructure::persistence::in_memory::{
  InMemoryCompanyRepository, InMemoryDatabase,
};
use serde_json::Value;

/// Company store that stalls before every call
struct SlowCompanyRepository {
  inner: InMemoryCompanyRepository,
  delay: Duration,
}

#[async_trait]
impl CompanyRepository for SlowCompanyRepository {
  async fn list(&self) -> Result<Vec<CompanySummary>, CompanyError> {
    tokio::time::sleep(self.delay).await;
    self.inner.list().await
  }

  async fn find_by_code(&self, code: &str) -> Result<Option<Company>, CompanyError> {
    tokio::time::sleep(self.delay).await;
    self.inner.find_by_code(code).await
  }

  async fn create(&self, company: Company) -> Result<Company, CompanyError> {
    tokio::time::sleep(self.delay).await;
    self.inner.create(company).await
  }

  async fn update(&self, company: Company) -> Result<Option<Company>, CompanyError> {
    tokio::time::sleep(self.delay).await;
    self.inner.update(company).await
  }

  async fn delete(&self, code: &str) -> Result<bool, CompanyError> {
    tokio::time::sleep(self.delay).await;
    self.inner.delete(code).await
  }
}

fn slow_dependencies(db: &InMemoryDatabase) -> AppDependencies {
  AppDependencies::new(
    Arc::new(SlowCompanyRepository {
      inner: db.companies(),
      delay: Duration::from_millis(500),
    }),
    Arc::new(db.invoices()),
    Arc::new(db.industries()),
  )
}

#[actix_web::test]
async fn test_slow_store_times_out_with_error_envelope() {
  let db = InMemoryDatabase::new();
  let app = test::init_service(
    App::new()
      .wrap(RequestTimeoutMiddleware::new(Duration::from_millis(50)))
      .wrap(RequestIdMiddleware::new())
      .configure(|cfg| configure_app(cfg, slow_dependencies(&db))),
  )
  .await;

  let err = test::try_call_service(&app, TestRequest::get().uri("/companies").to_request())
    .await
    .err()
    .unwrap();
  let resp = err.error_response();

  assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
  let body = to_bytes(resp.into_body()).await.unwrap();
  let json: Value = serde_json::from_slice(&body).unwrap();
  assert_eq!(json["error"]["status"], 503);
  assert_eq!(json["error"]["message"], "Request timed out");
}

#[actix_web::test]
async fn test_routes_untouched_by_store_still_answer() {
  let db = InMemoryDatabase::new();
  let app = test::init_service(
    App::new()
      .wrap(RequestTimeoutMiddleware::new(Duration::from_millis(50)))
      .wrap(RequestIdMiddleware::new())
      .configure(|cfg| configure_app(cfg, slow_dependencies(&db))),
  )
  .await;

  let resp = test::call_service(&app, TestRequest::get().uri("/health").to_request()).await;
  assert_eq!(resp.status(), StatusCode::OK);
  assert!(resp.headers().contains_key("x-request-id"));

  let resp = test::call_service(&app, TestRequest::get().uri("/invoices/1").to_request()).await;
  assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
