//! Document and configuration types for fuzzy ranking.
//!
//! The caller supplies a flat list of [`SearchDocument`] values per call;
//! the ranker returns [`SearchResult`] values it built from them. Neither
//! side retains state between calls and input documents are never mutated.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Maximum snippet length, in characters, before truncation.
pub const SNIPPET_LENGTH: usize = 100;

/// Marker appended to a snippet when the content was truncated.
pub const SNIPPET_ELLIPSIS: &str = "...";

/// A candidate document supplied by the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchDocument {
    /// Caller-supplied identifier; the only identity a document has.
    pub id: String,
    /// Document title.
    pub title: String,
    /// Document body. Only the first 500 characters participate in scoring.
    pub content: String,
    /// Single category label.
    pub category: String,
    /// Ordered tag list. May be empty.
    #[serde(default)]
    pub tags: Vec<String>,
}

/// A ranked hit returned to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub id: String,
    pub title: String,
    /// First [`SNIPPET_LENGTH`] characters of the content, with
    /// [`SNIPPET_ELLIPSIS`] appended when the content was longer.
    pub snippet: String,
    pub category: String,
    pub tags: Vec<String>,
    /// Best signal score, always in `[0, 100]`.
    pub score: f64,
}

impl SearchResult {
    /// Build a result from a document and its score, truncating the snippet.
    pub fn from_document(doc: &SearchDocument, score: f64) -> Self {
        let snippet = make_snippet(&doc.content);
        SearchResult {
            id: doc.id.clone(),
            title: doc.title.clone(),
            snippet,
            category: doc.category.clone(),
            tags: doc.tags.clone(),
            score,
        }
    }
}

/// Truncate content to the snippet length, appending an ellipsis marker
/// when anything was cut. Boundaries are measured in characters so that
/// multi-byte text is never split mid-scalar.
fn make_snippet(content: &str) -> String {
    let mut chars = content.char_indices();
    match chars.nth(SNIPPET_LENGTH) {
        Some((byte_end, _)) => {
            let mut snippet = content[..byte_end].to_string();
            snippet.push_str(SNIPPET_ELLIPSIS);
            snippet
        }
        None => content.to_string(),
    }
}

/// The document fields that can participate in scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SearchField {
    Title,
    Content,
    Category,
    Tags,
}

/// A set of [`SearchField`] values controlling which fields are scored.
///
/// Excluded fields are skipped entirely: no tokenization, no similarity
/// computation, no contribution to the score maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSelector {
    title: bool,
    content: bool,
    category: bool,
    tags: bool,
}

impl FieldSelector {
    /// Selector containing all four fields.
    pub fn all() -> Self {
        FieldSelector {
            title: true,
            content: true,
            category: true,
            tags: true,
        }
    }

    /// Selector containing no fields.
    pub fn none() -> Self {
        FieldSelector {
            title: false,
            content: false,
            category: false,
            tags: false,
        }
    }

    /// Add a field to this selector.
    pub fn with(mut self, field: SearchField) -> Self {
        match field {
            SearchField::Title => self.title = true,
            SearchField::Content => self.content = true,
            SearchField::Category => self.category = true,
            SearchField::Tags => self.tags = true,
        }
        self
    }

    /// Build a selector from a list of fields.
    pub fn from_fields(fields: &[SearchField]) -> Self {
        fields
            .iter()
            .fold(FieldSelector::none(), |sel, f| sel.with(*f))
    }

    /// Whether the given field participates in scoring.
    pub fn contains(&self, field: SearchField) -> bool {
        match field {
            SearchField::Title => self.title,
            SearchField::Content => self.content,
            SearchField::Category => self.category,
            SearchField::Tags => self.tags,
        }
    }

    /// Whether the selector is empty.
    pub fn is_empty(&self) -> bool {
        !(self.title || self.content || self.category || self.tags)
    }
}

impl Default for FieldSelector {
    fn default() -> Self {
        FieldSelector::all()
    }
}

/// Configuration for a ranking call.
///
/// Validated once at the boundary and passed by value into the pure
/// scoring path. An out-of-range threshold is a caller bug; the core does
/// not re-check it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Fields participating in scoring. Default: all four.
    pub fields: FieldSelector,
    /// Minimum score, in `[0, 100]`, a document must reach to be returned.
    pub threshold: f64,
}

/// Default minimum score for inclusion in results.
pub const DEFAULT_THRESHOLD: f64 = 70.0;

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            fields: FieldSelector::all(),
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc_with_content(content: &str) -> SearchDocument {
        SearchDocument {
            id: "1".to_string(),
            title: "title".to_string(),
            content: content.to_string(),
            category: "misc".to_string(),
            tags: vec![],
        }
    }

    #[test]
    fn test_snippet_short_content_untouched() {
        let doc = doc_with_content("short body");
        let result = SearchResult::from_document(&doc, 90.0);
        assert_eq!(result.snippet, "short body");
    }

    #[test]
    fn test_snippet_exactly_100_chars_untouched() {
        let content = "a".repeat(100);
        let doc = doc_with_content(&content);
        let result = SearchResult::from_document(&doc, 90.0);
        assert_eq!(result.snippet, content);
    }

    #[test]
    fn test_snippet_truncated_with_marker() {
        let content = "b".repeat(150);
        let doc = doc_with_content(&content);
        let result = SearchResult::from_document(&doc, 90.0);
        assert_eq!(result.snippet.len(), 100 + SNIPPET_ELLIPSIS.len());
        assert!(result.snippet.ends_with(SNIPPET_ELLIPSIS));
    }

    #[test]
    fn test_snippet_multibyte_boundary() {
        let content = "漢".repeat(120);
        let doc = doc_with_content(&content);
        let result = SearchResult::from_document(&doc, 90.0);
        assert_eq!(result.snippet.chars().count(), 100 + SNIPPET_ELLIPSIS.len());
        assert!(result.snippet.ends_with(SNIPPET_ELLIPSIS));
    }

    #[test]
    fn test_field_selector_default_is_all() {
        let sel = FieldSelector::default();
        assert!(sel.contains(SearchField::Title));
        assert!(sel.contains(SearchField::Content));
        assert!(sel.contains(SearchField::Category));
        assert!(sel.contains(SearchField::Tags));
    }

    #[test]
    fn test_field_selector_subset() {
        let sel = FieldSelector::none().with(SearchField::Tags);
        assert!(sel.contains(SearchField::Tags));
        assert!(!sel.contains(SearchField::Title));
        assert!(!sel.is_empty());
        assert!(FieldSelector::none().is_empty());
    }

    #[test]
    fn test_default_config() {
        let config = SearchConfig::default();
        assert_eq!(config.threshold, 70.0);
        assert_eq!(config.fields, FieldSelector::all());
    }
}
