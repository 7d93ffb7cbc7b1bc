//! Canonical logging macros
//!
//! Every operation boundary logs one `start` and exactly one of `end` or
//! `end_error`, with the same `op` name.

/// Log the start of an operation
///
/// ```
/// # use dsreview_core::log_op_start;
/// log_op_start!("load_dataset");
/// log_op_start!("load_dataset", question_count = 12);
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr) => {
        $crate::tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::dsreview_core_types::schema::EVENT_START,
        );
    };
    ($op:expr, $($field:tt)*) => {
        $crate::tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::dsreview_core_types::schema::EVENT_START,
            $($field)*
        );
    };
}

/// Log the successful end of an operation
///
/// ```
/// # use dsreview_core::log_op_end;
/// log_op_end!("load_dataset", duration_ms = 42);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr) => {
        $crate::tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::dsreview_core_types::schema::EVENT_END,
            duration_ms = $duration,
        );
    };
    ($op:expr, duration_ms = $duration:expr, $($field:tt)*) => {
        $crate::tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::dsreview_core_types::schema::EVENT_END,
            duration_ms = $duration,
            $($field)*
        );
    };
}

/// Log an operation error
///
/// The error is cloned, so the caller keeps ownership.
///
/// ```
/// # use dsreview_core::{log_op_error, errors::ReviewError};
/// let err = ReviewError::QuestionNotFound { question_id: "q1".to_string() };
/// log_op_error!("submit_label", err, duration_ms = 3);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr) => {{
        let ex_err = $crate::errors::ExError::from(::std::clone::Clone::clone(&$err));
        $crate::tracing::error!(
            component = module_path!(),
            op = $op,
            event = $crate::dsreview_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err_kind = ?ex_err.kind(),
            err_code = ex_err.code(),
        );
    }};
    ($op:expr, $err:expr, duration_ms = $duration:expr, $($field:tt)*) => {{
        let ex_err = $crate::errors::ExError::from(::std::clone::Clone::clone(&$err));
        $crate::tracing::error!(
            component = module_path!(),
            op = $op,
            event = $crate::dsreview_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err_kind = ?ex_err.kind(),
            err_code = ex_err.code(),
            $($field)*
        );
    }};
}
