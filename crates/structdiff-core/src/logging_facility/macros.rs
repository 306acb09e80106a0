//! Canonical logging macros
//!
//! These macros provide a structured, consistent way to log operations.

/// Log the start of an operation
///
/// # Example
///
/// ```
/// # use structdiff_core::log_op_start;
/// log_op_start!("find_differences");
/// log_op_start!("find_differences", max_depth = 8);
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr) => {
        ::tracing::debug!(
            component = module_path!(),
            op = $op,
            event = $crate::core_types::schema::EVENT_START,
        );
    };
    ($op:expr, $($field:tt)*) => {
        ::tracing::debug!(
            component = module_path!(),
            op = $op,
            event = $crate::core_types::schema::EVENT_START,
            $($field)*
        );
    };
}

/// Log the successful end of an operation
///
/// # Example
///
/// ```
/// # use structdiff_core::log_op_end;
/// log_op_end!("find_differences", duration_ms = 3);
/// log_op_end!("find_differences", duration_ms = 3, diff_count = 2);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr) => {
        ::tracing::debug!(
            component = module_path!(),
            op = $op,
            event = $crate::core_types::schema::EVENT_END,
            duration_ms = $duration,
        );
    };
    ($op:expr, duration_ms = $duration:expr, $($field:tt)*) => {
        ::tracing::debug!(
            component = module_path!(),
            op = $op,
            event = $crate::core_types::schema::EVENT_END,
            duration_ms = $duration,
            $($field)*
        );
    };
}

/// Log an operation error
///
/// # Example
///
/// ```
/// # use structdiff_core::{log_op_error, errors::StructDiffError};
/// let err = StructDiffError::InvalidJson { reason: "eof".to_string() };
/// log_op_error!("parse_document", err, duration_ms = 1);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr) => {{
        use $crate::errors::ExError;
        let ex_err: ExError = $err.into();
        ::tracing::error!(
            component = module_path!(),
            op = $op,
            event = $crate::core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err.kind = ?ex_err.kind(),
            err.code = ex_err.code(),
        );
    }};
    ($op:expr, $err:expr, duration_ms = $duration:expr, $($field:tt)*) => {{
        use $crate::errors::ExError;
        let ex_err: ExError = $err.into();
        ::tracing::error!(
            component = module_path!(),
            op = $op,
            event = $crate::core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err.kind = ?ex_err.kind(),
            err.code = ex_err.code(),
            $($field)*
        );
    }};
}
