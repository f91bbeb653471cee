//! Create/edit form reconciliation.
//!
//! # Responsibility
//! - Seed editable drafts from defaults or from an existing record.
//! - Validate and normalize a draft into a full record on submit.
//! - Dispatch exactly one store mutation per successful submit.
//!
//! # Invariants
//! - A rejected submit never touches the store and keeps the draft intact.
//! - Edit mode keeps the original id and creation timestamp.
//! - List inputs are split on `,`, trimmed, and emptied pieces dropped.

pub mod drafts;
pub mod reconciler;

use std::error::Error;
use std::fmt::{Display, Formatter};

pub use drafts::{FormDefaults, JournalDraft, LearningDraft, ProjectDraft, SnippetDraft};
pub use reconciler::{Draft, FormMode, FormReconciler, Stamp, Submitted};

/// Submit rejected because the draft is incomplete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Required field is empty after trimming.
    MissingField(&'static str),
    /// Progress must lie in `0..=100`.
    ProgressOutOfRange(i64),
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField(field) => write!(f, "required field is empty: {field}"),
            Self::ProgressOutOfRange(value) => {
                write!(f, "progress must be between 0 and 100, got {value}")
            }
        }
    }
}

impl Error for ValidationError {}

/// Parses a comma-separated list input.
///
/// Pieces are trimmed and empty pieces dropped; order is preserved and
/// duplicates are kept.
pub fn parse_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}

/// Renders a list back into its editable comma-separated form.
pub fn join_list(items: &[String]) -> String {
    items.join(", ")
}

pub(crate) fn require(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::MissingField(field));
    }
    Ok(())
}

pub(crate) fn checked_progress(value: i64) -> Result<u8, ValidationError> {
    u8::try_from(value)
        .ok()
        .filter(|progress| *progress <= 100)
        .ok_or(ValidationError::ProgressOutOfRange(value))
}

pub(crate) fn optional_text(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::{checked_progress, join_list, optional_text, parse_list, require, ValidationError};

    #[test]
    fn parse_list_trims_and_drops_empty_pieces() {
        assert_eq!(
            parse_list("react, hook,  , debounce"),
            vec!["react", "hook", "debounce"]
        );
    }

    #[test]
    fn parse_list_handles_blank_and_trailing_commas() {
        assert!(parse_list("").is_empty());
        assert!(parse_list(" , ,").is_empty());
        assert_eq!(parse_list("rust,"), vec!["rust"]);
    }

    #[test]
    fn parse_list_keeps_duplicates_and_order() {
        assert_eq!(parse_list("b, a, b"), vec!["b", "a", "b"]);
    }

    #[test]
    fn join_list_is_readable_by_parse_list() {
        let items = vec!["Node.js".to_string(), "Express".to_string()];
        assert_eq!(join_list(&items), "Node.js, Express");
        assert_eq!(parse_list(&join_list(&items)), items);
    }

    #[test]
    fn require_rejects_whitespace_only() {
        assert_eq!(
            require("title", "   "),
            Err(ValidationError::MissingField("title"))
        );
        assert!(require("title", " x ").is_ok());
    }

    #[test]
    fn checked_progress_bounds() {
        assert_eq!(checked_progress(0), Ok(0));
        assert_eq!(checked_progress(100), Ok(100));
        assert_eq!(
            checked_progress(101),
            Err(ValidationError::ProgressOutOfRange(101))
        );
        assert_eq!(
            checked_progress(-1),
            Err(ValidationError::ProgressOutOfRange(-1))
        );
    }

    #[test]
    fn optional_text_maps_blank_to_none() {
        assert_eq!(optional_text("  "), None);
        assert_eq!(
            optional_text(" https://example.com ").as_deref(),
            Some("https://example.com")
        );
    }
}
