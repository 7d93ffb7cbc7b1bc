//! Error handling for dsreview-store
//!
//! Wraps dsreview-core ExError with store-specific helpers

use dsreview_core::errors::{ExError, ExErrorKind};
use std::path::Path;

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// Create an IO error
pub fn io_error(operation: &str, err: std::io::Error) -> ExError {
    ExError::new(ExErrorKind::Io)
        .with_op(operation.to_string())
        .with_message(err.to_string())
}

/// Create an error for a required data file that does not exist
pub fn file_missing(operation: &str, path: &Path) -> ExError {
    ExError::new(ExErrorKind::NotFound)
        .with_op(operation.to_string())
        .with_entity_id(path.display().to_string())
        .with_message(format!("required file not found: {}", path.display()))
}

/// Create an error from a CSV read/write failure
///
/// I/O failures surfaced through the CSV layer keep the `Io` kind.
pub fn csv_error(operation: &str, err: csv::Error) -> ExError {
    let kind = if err.is_io_error() {
        ExErrorKind::Io
    } else {
        ExErrorKind::Serialization
    };
    ExError::new(kind)
        .with_op(operation.to_string())
        .with_message(err.to_string())
}

/// Create a configuration parse error
pub fn config_error(path: &Path, err: toml::de::Error) -> ExError {
    ExError::new(ExErrorKind::InvalidInput)
        .with_op("load_config")
        .with_entity_id(path.display().to_string())
        .with_message(err.to_string())
}
