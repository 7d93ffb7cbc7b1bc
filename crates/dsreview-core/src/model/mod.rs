//! Dataset records: questions, their answer options, and review labels

pub mod answer;
pub mod label;
pub mod question;

pub use answer::AnswerOption;
pub use label::{Label, LabelRecord, PassFail};
pub use question::{QuestionRecord, QuestionType};

/// Trim a raw field and map blank values to `None`
pub fn optional_text(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Map blank values to `None`, keeping any other value byte for byte
///
/// For cells compared as exact strings (deletion timestamps, version pointers).
pub fn exact_text(raw: &str) -> Option<String> {
    if raw.trim().is_empty() {
        None
    } else {
        Some(raw.to_string())
    }
}

/// Best-effort boolean coercion for exported flags (`true`, `1`, `yes`)
pub fn coerce_bool(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "true" | "1" | "yes"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_text_keeps_surrounding_space() {
        assert_eq!(exact_text(" \t"), None);
        assert_eq!(
            exact_text(" 2024-01-01T00:00:00Z"),
            Some(" 2024-01-01T00:00:00Z".to_string())
        );
    }

    #[test]
    fn test_optional_text_maps_blank_to_none() {
        assert_eq!(optional_text(""), None);
        assert_eq!(optional_text("   "), None);
        assert_eq!(optional_text(" q1 "), Some("q1".to_string()));
    }

    #[test]
    fn test_coerce_bool() {
        assert!(coerce_bool("true"));
        assert!(coerce_bool("TRUE"));
        assert!(coerce_bool("1"));
        assert!(!coerce_bool("false"));
        assert!(!coerce_bool(""));
        assert!(!coerce_bool("maybe"));
    }
}
