//! HTTP middleware components.

pub mod logging;
pub mod metrics;
pub mod security_headers;
pub mod trace_id;

pub use metrics::{init_metrics, metrics_handler, metrics_middleware, record_created};
pub use security_headers::{security_headers_middleware, SecurityHeaders};
pub use trace_id::{trace_id, RequestId, REQUEST_ID_HEADER};
