//! Suggestions and how many rows they take in the overlay

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    /// Text shown in the overlay row
    pub display: String,
    /// Text submitted to the address bar when the row is chosen
    pub suggestion: String,
}

impl Suggestion {
    /// A suggestion displayed exactly as it will be submitted.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            display: text.clone(),
            suggestion: text,
        }
    }

    pub fn with_display(display: impl Into<String>, suggestion: impl Into<String>) -> Self {
        Self {
            display: display.into(),
            suggestion: suggestion.into(),
        }
    }
}

/// A query as issued to a source. The sequence number decides staleness.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionQuery {
    text: String,
    sequence: u64,
}

impl SuggestionQuery {
    pub fn new(text: impl Into<String>, sequence: u64) -> Self {
        Self {
            text: text.into(),
            sequence,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn sequence(&self) -> u64 {
        self.sequence
    }
}

/// One rendered overlay row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuggestionRow<'a> {
    /// Placeholder shown when there is nothing to suggest
    NoSuggestions,
    Suggestion(&'a Suggestion),
}

/// Bounds on the number of overlay rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowPolicy {
    pub min_rows: usize,
    pub max_rows: usize,
}

impl RowPolicy {
    pub fn new(min_rows: usize, max_rows: usize) -> Self {
        Self { min_rows, max_rows }
    }

    /// Placeholder rows when empty, otherwise the suggestions capped at `max_rows`.
    pub fn row_count(&self, suggestion_count: usize) -> usize {
        if suggestion_count == 0 {
            self.min_rows
        } else {
            suggestion_count.min(self.max_rows)
        }
    }

    /// Rows in source order. No re-sorting happens here.
    pub fn rows<'a>(&self, suggestions: &'a [Suggestion]) -> Vec<SuggestionRow<'a>> {
        if suggestions.is_empty() {
            return vec![SuggestionRow::NoSuggestions; self.min_rows];
        }
        suggestions
            .iter()
            .take(self.max_rows)
            .map(SuggestionRow::Suggestion)
            .collect()
    }
}

impl Default for RowPolicy {
    fn default() -> Self {
        Self::new(1, 6)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn suggestions(n: usize) -> Vec<Suggestion> {
        (0..n).map(|i| Suggestion::new(format!("duck {i}"))).collect()
    }

    #[test]
    fn test_row_count() {
        let policy = RowPolicy::default();
        assert_eq!(policy.row_count(0), 1);
        assert_eq!(policy.row_count(3), 3);
        assert_eq!(policy.row_count(9), 6);
    }

    #[test]
    fn test_rows_placeholder_when_empty() {
        let policy = RowPolicy::default();
        assert_eq!(policy.rows(&[]), vec![SuggestionRow::NoSuggestions]);
    }

    #[test]
    fn test_rows_keep_source_order() {
        let policy = RowPolicy::default();
        let list = suggestions(9);
        let rows = policy.rows(&list);
        assert_eq!(rows.len(), 6);
        assert_eq!(rows[0], SuggestionRow::Suggestion(&list[0]));
        assert_eq!(rows[5], SuggestionRow::Suggestion(&list[5]));
    }

    #[test]
    fn test_suggestion_deserialize() {
        let parsed: Suggestion =
            serde_json::from_str(r#"{"display":"DuckDuckGo","suggestion":"duckduckgo"}"#).unwrap();
        assert_eq!(parsed, Suggestion::with_display("DuckDuckGo", "duckduckgo"));
    }
}
