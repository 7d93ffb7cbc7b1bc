//! DSReview Core - in-memory review model for question datasets
//!
//! This crate provides the semantics shared by the store, server and CLI:
//! - Question, answer and label records
//! - Relationship derivation (version chains, bulk-delete clusters)
//! - Word-level diffs between question versions
//! - Browsing filters, pagination, statistics
//! - The labeling workflow (validation, snapshots, judge prompts)
//!
//! Everything here is pure and synchronous; file access lives in
//! `dsreview-store`.

pub mod browse;
pub mod dataset;
pub mod dates;
pub mod diff;
pub mod errors;
pub mod labeling;
pub mod logging_facility;
pub mod model;
pub mod relations;
pub mod stats;

// Used by the logging macros
#[doc(hidden)]
pub use dsreview_core_types;
#[doc(hidden)]
pub use tracing;

// Re-export commonly used types
pub use browse::{paginate, Page, QuestionFilter, StatusFilter, DEFAULT_PAGE_SIZE};
pub use dataset::{QuestionView, ReviewDataset};
pub use diff::{render_diff, DiffKind, DiffToken};
pub use errors::{ExError, ExErrorKind, Result, ReviewError};
pub use labeling::LabelSubmission;
pub use model::{AnswerOption, Label, LabelRecord, PassFail, QuestionRecord, QuestionType};
pub use relations::{derive_relationships, Relationships};
pub use stats::{compute_stats, Stats};
