//! DSReview Store - file-backed persistence for the review tool
//!
//! Provides:
//! - Configuration loading (`dsreview.toml`)
//! - Wholesale CSV loading of the question and answer exports
//! - The label file, rewritten atomically on every change
//! - Statistics export

pub mod atomic;
pub mod config;
pub mod dataset;
pub mod errors;
pub mod export;
pub mod labels;

// Re-export key types
pub use config::ReviewConfig;
pub use dataset::load_dataset;
pub use errors::Result;
pub use labels::{LabelStore, UpsertOutcome};
