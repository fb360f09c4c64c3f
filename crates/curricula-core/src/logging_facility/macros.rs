//! Lifecycle macros for tree and curriculum boundaries
//!
//! A boundary emits one `start` event on entry and exactly one of `end` or
//! `end_error` on exit, all at `info`/`error` with `component`, `op` and
//! `event` set. Trailing arguments are ordinary `tracing` fields.

/// Entry into a boundary such as `Tree::insert_node` or a CLI command
///
/// ```
/// # use curricula_core::log_op_start;
/// log_op_start!("add_lesson");
/// log_op_start!("add_lesson", parent_id = "ch-1", node_id = "l-1-3");
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr $(, $($field:tt)*)?) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::core_types::schema::EVENT_START,
            $($($field)*)?
        );
    };
}

/// Successful exit; `duration_ms` comes first and is mandatory
///
/// ```
/// # use curricula_core::log_op_end;
/// log_op_end!("remove_node", duration_ms = 2, total_nodes = 8);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr $(, $($field:tt)*)?) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::core_types::schema::EVENT_END,
            duration_ms = $duration,
            $($($field)*)?
        );
    };
}

/// Failed exit
///
/// `$err` is converted into [`ExError`](crate::errors::ExError), so a
/// [`TreeError`](crate::errors::TreeError) works as well; the event gets its
/// kind under `err.kind` and its stable code under `err.code`.
///
/// ```
/// # use curricula_core::{log_op_error, errors::TreeError};
/// let err = TreeError::DepthExceeded {
///     node_id: "t-2-1-1".to_string(),
///     depth: 6,
///     max_depth: 5,
/// };
/// log_op_error!("move_topic", err, duration_ms = 1, node_id = "t-2-1-1");
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr $(, $($field:tt)*)?) => {{
        let ex_err: $crate::errors::ExError = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = $crate::core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err.kind = ?ex_err.kind(),
            err.code = ex_err.code(),
            $($($field)*)?
        );
    }};
}
