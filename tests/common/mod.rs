use std::sync::Arc;

use biztime::adapters::http::AppDependencies;
use biztime::infrastructure::persistence::in_memory::InMemoryDatabase;

/// Use cases wired against a fresh in-memory database
pub fn dependencies(db: &InMemoryDatabase) -> AppDependencies {
  AppDependencies::new(
    Arc::new(db.companies()),
    Arc::new(db.invoices()),
    Arc::new(db.industries()),
  )
}

/// Initialise the full route table the way `main` mounts it
macro_rules! test_app {
  ($db:expr) => {
    actix_web::test::init_service(
      actix_web::App::new()
        .wrap(biztime::adapters::http::RequestTimeoutMiddleware::new(
          std::time::Duration::from_secs(5),
        ))
        .wrap(biztime::adapters::http::RequestIdMiddleware::new())
        .configure(|cfg| biztime::adapters::http::configure_app(cfg, common::dependencies(&$db))),
    )
    .await
  };
}
