pub mod request_id;
pub mod request_timeout;

pub use request_id::{RequestId, RequestIdExt, RequestIdMiddleware};
pub use request_timeout::RequestTimeoutMiddleware;
