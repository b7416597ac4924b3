//! Search result value object

use super::category::JobCategory;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// The latest answer shown to the user
///
/// `text` is the model's markdown verbatim, or the fixed fallback message
/// when the call failed. Only one result is retained per session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub category: JobCategory,
    pub label: String,
    pub text: String,
    pub is_fallback: bool,
    pub fetched_at: DateTime<Local>,
}

impl SearchResult {
    pub fn new(category: JobCategory, text: impl Into<String>) -> Self {
        Self {
            category,
            label: category.label().to_string(),
            text: text.into(),
            is_fallback: false,
            fetched_at: Local::now(),
        }
    }

    pub fn fallback(category: JobCategory, text: impl Into<String>) -> Self {
        Self {
            is_fallback: true,
            ..Self::new(category, text)
        }
    }

    /// Header line shown above the rendered markdown
    pub fn heading(&self) -> String {
        format!("{}: latest job listings", self.label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_follows_category() {
        let result = SearchResult::new(JobCategory::Teacher, "| a | b |");
        assert_eq!(result.label, "Teacher (교사)");
        assert!(!result.is_fallback);
        assert_eq!(result.heading(), "Teacher (교사): latest job listings");
    }

    #[test]
    fn test_fallback_flag() {
        let result = SearchResult::fallback(JobCategory::MathTutor, "unavailable");
        assert!(result.is_fallback);
        assert_eq!(result.text, "unavailable");
    }
}
