use actix_web::{
  Error,
  body::MessageBody,
  dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready},
};
use futures_util::future::LocalBoxFuture;
use std::{
  future::{Ready, ready},
  rc::Rc,
  time::Duration,
};

use crate::adapters::http::errors::ApiError;

/// Bounds the time spent on a single request
///
/// When the inner service does not finish within the configured duration the
/// handler future is dropped (rolling back any open transaction) and the
/// request fails with [`ApiError::Timeout`], rendered as a 503 with the usual
/// error envelope.
#[derive(Debug, Clone)]
pub struct RequestTimeoutMiddleware {
  timeout: Duration,
}

impl RequestTimeoutMiddleware {
  pub fn new(timeout: Duration) -> Self {
    Self { timeout }
  }
}

impl<S, B> Transform<S, ServiceRequest> for RequestTimeoutMiddleware
where
  S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
  S::Future: 'static,
  B: MessageBody + 'static,
{
  type Response = ServiceResponse<B>;
  type Error = Error;
  type Transform = RequestTimeoutMiddlewareService<S>;
  type InitError = ();
  type Future = Ready<Result<Self::Transform, Self::InitError>>;

  fn new_transform(&self, service: S) -> Self::Future {
    ready(Ok(RequestTimeoutMiddlewareService {
      service: Rc::new(service),
      timeout: self.timeout,
    }))
  }
}

pub struct RequestTimeoutMiddlewareService<S> {
  service: Rc<S>,
  timeout: Duration,
}

impl<S, B> Service<ServiceRequest> for RequestTimeoutMiddlewareService<S>
where
  S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
  S::Future: 'static,
  B: MessageBody + 'static,
{
  type Response = ServiceResponse<B>;
  type Error = Error;
  type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

  forward_ready!(service);

  fn call(&self, req: ServiceRequest) -> Self::Future {
    let service = Rc::clone(&self.service);
    let timeout = self.timeout;

    Box::pin(async move {
      // The router needs sole ownership of the request, so keep owned copies
      // for the log line instead of a cloned HttpRequest
      let method = req.method().to_string();
      let path = req.path().to_string();

      match tokio::time::timeout(timeout, service.call(req)).await {
        Ok(res) => res,
        Err(_) => {
          tracing::warn!(
            method = %method,
            path = %path,
            timeout_seconds = timeout.as_secs_f64(),
            "Request timed out"
          );
          Err(ApiError::Timeout("Request timed out".to_string()).into())
        }
      }
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use actix_web::{
    App, HttpResponse,
    body::to_bytes,
    http::StatusCode,
    test::{self, TestRequest},
    web,
  };

  async fn slow_handler() -> HttpResponse {
    tokio::time::sleep(Duration::from_millis(500)).await;
    HttpResponse::Ok().finish()
  }

  async fn item_handler(id: web::Path<i32>) -> HttpResponse {
    HttpResponse::Ok().body(id.into_inner().to_string())
  }

  async fn fast_handler() -> HttpResponse {
    HttpResponse::Ok().body("done")
  }

  #[actix_web::test]
  async fn test_fast_request_passes_through() {
    let app = test::init_service(
      App::new()
        .wrap(RequestTimeoutMiddleware::new(Duration::from_secs(1)))
        .route("/", web::get().to(fast_handler)),
    )
    .await;

    let resp = test::call_service(&app, TestRequest::get().uri("/").to_request()).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(test::read_body(resp).await, "done");
  }

  #[actix_web::test]
  async fn test_slow_request_times_out() {
    let app = test::init_service(
      App::new()
        .wrap(RequestTimeoutMiddleware::new(Duration::from_millis(50)))
        .route("/", web::get().to(slow_handler)),
    )
    .await;

    let err = test::try_call_service(&app, TestRequest::get().uri("/").to_request())
      .await
      .err()
      .unwrap();
    let resp = err.error_response();

    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body = to_bytes(resp.into_body()).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["error"]["status"], 503);
    assert_eq!(json["error"]["message"], "Request timed out");
  }

  #[actix_web::test]
  async fn test_path_parameters_survive_the_middleware() {
    let app = test::init_service(
      App::new()
        .wrap(RequestTimeoutMiddleware::new(Duration::from_secs(1)))
        .route("/items/{id}", web::get().to(item_handler)),
    )
    .await;

    let resp = test::call_service(&app, TestRequest::get().uri("/items/7").to_request()).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(test::read_body(resp).await, "7");
  }
}
