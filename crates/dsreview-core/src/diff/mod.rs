//! Word-level text diff
//!
//! Compares two strings word by word with a longest-common-subsequence
//! table. Words are matched on a normalised form (trailing `.,;:!?` removed,
//! lower-cased) so that a word whose only change is punctuation or case is
//! reported as one removal immediately followed by one addition, never as an
//! unrelated edit elsewhere in the sentence.
//!
//! ## Entry point
//!
//! ```
//! use dsreview_core::diff::{render_diff, render_plain, DiffKind};
//!
//! let tokens = render_diff("a b c", "a x c");
//! let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
//! assert_eq!(
//!     kinds,
//!     vec![DiffKind::Unchanged, DiffKind::Removed, DiffKind::Added, DiffKind::Unchanged]
//! );
//! assert_eq!(render_plain(&tokens), "a b x c");
//! ```

pub mod engine;
pub mod model;
pub mod render;

pub use engine::{normalize_token, render_diff, tokenize};
pub use model::{DiffKind, DiffToken};
pub use render::{compare_versions, render_marked, render_plain, VersionComparison};
