//! Field keys and event names shared by emitters and log consumers
//!
//! The `log_op_*` macros and the curriculum boundaries write these keys;
//! `test_capture` and the logging tests read them back by the same constants.

// Envelope fields
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";
/// Set by CLI commands from their `RequestContext`
pub const FIELD_REQUEST_ID: &str = "request_id";

// Tree addressing
pub const FIELD_NODE_ID: &str = "node_id";
pub const FIELD_PARENT_ID: &str = "parent_id";
pub const FIELD_NEW_PARENT_ID: &str = "new_parent_id";

// Error fields
pub const FIELD_ERR_KIND: &str = "err.kind";
pub const FIELD_ERR_CODE: &str = "err.code";

// Lifecycle events
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
