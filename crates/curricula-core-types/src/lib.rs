//! Foundation types shared by the curricula crates
//!
//! - **Correlation ids**: `RequestId`, `TraceId`, `RequestContext`
//! - **Schema constants**: canonical structured-logging field keys and event names

pub mod correlation;
pub mod schema;

pub use correlation::{RequestContext, RequestId, TraceId};
