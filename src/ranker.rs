//! Fuzzy match ranking over an in-memory document set.
//!
//! The ranker is a one-shot scorer: it takes a query and a slice of
//! documents, computes a score per document from several independent
//! signals, and returns the documents clearing the threshold in
//! descending score order. No index is built and no state survives the
//! call, so concurrent calls over shared read-only documents are safe.
//!
//! Per field, three signals are computed and the strongest one wins:
//!
//! 1. Exact token match - a query token appearing verbatim among the
//!    field's tokens scores a flat [`EXACT_MATCH_SCORE`]. One match is as
//!    good as many.
//! 2. String similarity - Jaro-Winkler between query and field value,
//!    scaled to `[0, 100]`.
//! 3. Phonetic similarity - Jaro-Winkler between the pinyin readings of
//!    query and field value, scaled to `[0, 100]`. Lets a latin-script
//!    query match a Han-script title.
//!
//! Signals are never summed. A perfect exact match must not be diluted by
//! a weak fuzzy score on another field, so the combination rule is max.

use std::collections::HashSet;

use crate::analysis::phonetic::{Phoneticizer, PinyinPhoneticizer};
use crate::analysis::similarity::{JaroWinkler, StringSimilarity};
use crate::analysis::tokenizer::{SimpleTokenizer, Tokenizer};
use crate::document::{SearchConfig, SearchDocument, SearchField, SearchResult};

/// Flat score recorded when a query token matches a field token verbatim.
pub const EXACT_MATCH_SCORE: f64 = 90.0;

/// Factor scaling a `[0, 1]` similarity into score space.
const SIMILARITY_SCALE: f64 = 100.0;

/// Number of content characters that participate in scoring. Bounds the
/// tokenization and similarity cost on long article bodies.
pub const CONTENT_SCORING_LIMIT: usize = 500;

/// Query state computed once per ranking call and shared across documents.
struct QueryContext {
    lower: String,
    tokens: Vec<String>,
    phonetic: String,
}

/// Multi-signal fuzzy ranker.
///
/// The three analysis seams are trait objects, so an alternative
/// similarity metric or transliteration backend can be swapped in without
/// changing the scoring control flow.
///
/// # Examples
///
/// ```
/// use kensaku::document::{SearchConfig, SearchDocument};
/// use kensaku::ranker::FuzzyRanker;
///
/// let docs = vec![SearchDocument {
///     id: "1".to_string(),
///     title: "Learning React Hooks".to_string(),
///     content: String::new(),
///     category: "frontend".to_string(),
///     tags: vec!["react".to_string()],
/// }];
///
/// let ranker = FuzzyRanker::new();
/// let results = ranker.rank("react", &docs, &SearchConfig::default());
/// assert_eq!(results.len(), 1);
/// assert!(results[0].score >= 90.0);
/// ```
pub struct FuzzyRanker {
    tokenizer: Box<dyn Tokenizer>,
    similarity: Box<dyn StringSimilarity>,
    phoneticizer: Box<dyn Phoneticizer>,
}

impl FuzzyRanker {
    /// Create a ranker with the default components: simple tokenizer,
    /// Jaro-Winkler similarity, pinyin phoneticizer.
    pub fn new() -> Self {
        FuzzyRanker {
            tokenizer: Box::new(SimpleTokenizer::new()),
            similarity: Box::new(JaroWinkler::new()),
            phoneticizer: Box::new(PinyinPhoneticizer::new()),
        }
    }

    /// Create a ranker from custom analysis components.
    pub fn with_components(
        tokenizer: Box<dyn Tokenizer>,
        similarity: Box<dyn StringSimilarity>,
        phoneticizer: Box<dyn Phoneticizer>,
    ) -> Self {
        FuzzyRanker {
            tokenizer,
            similarity,
            phoneticizer,
        }
    }

    /// Rank `documents` against `query`.
    ///
    /// Documents scoring at least `config.threshold` are returned in
    /// descending score order. The sort is stable, so equal scores keep
    /// the input document order. Input documents are never mutated.
    pub fn rank(
        &self,
        query: &str,
        documents: &[SearchDocument],
        config: &SearchConfig,
    ) -> Vec<SearchResult> {
        let ctx = self.prepare_query(query);

        let mut results: Vec<SearchResult> = documents
            .iter()
            .filter_map(|doc| {
                let score = self.score_prepared(&ctx, doc, config);
                if score >= config.threshold {
                    Some(SearchResult::from_document(doc, score))
                } else {
                    None
                }
            })
            .collect();

        results.sort_by(|a, b| b.score.total_cmp(&a.score));
        results
    }

    /// Score a single document against `query` without threshold
    /// filtering. Exposed for callers that want raw scores.
    pub fn score(&self, query: &str, doc: &SearchDocument, config: &SearchConfig) -> f64 {
        let ctx = self.prepare_query(query);
        self.score_prepared(&ctx, doc, config)
    }

    fn prepare_query(&self, query: &str) -> QueryContext {
        let lower = query.to_lowercase();
        let tokens = self.tokenizer.tokenize(&lower);
        let phonetic = self.phoneticizer.phoneticize(query);
        QueryContext {
            lower,
            tokens,
            phonetic,
        }
    }

    fn score_prepared(&self, ctx: &QueryContext, doc: &SearchDocument, config: &SearchConfig) -> f64 {
        let fields = &config.fields;

        let title_lower = fields
            .contains(SearchField::Title)
            .then(|| doc.title.to_lowercase());
        let content_lower = fields
            .contains(SearchField::Content)
            .then(|| truncate_chars(&doc.content, CONTENT_SCORING_LIMIT).to_lowercase());
        let category_lower = fields
            .contains(SearchField::Category)
            .then(|| doc.category.to_lowercase());
        let tags_lower: Vec<String> = if fields.contains(SearchField::Tags) {
            doc.tags.iter().map(|tag| tag.to_lowercase()).collect()
        } else {
            Vec::new()
        };

        let mut score: f64 = 0.0;

        // Exact token match across the selected fields.
        let mut field_tokens: HashSet<String> = HashSet::new();
        for text in [&title_lower, &content_lower, &category_lower]
            .into_iter()
            .flatten()
        {
            field_tokens.extend(self.tokenizer.tokenize(text));
        }
        let exact = ctx
            .tokens
            .iter()
            .any(|qt| field_tokens.contains(qt) || tags_lower.iter().any(|tag| tag == qt));
        if exact {
            score = score.max(EXACT_MATCH_SCORE);
        }

        // String similarity per field, scaled.
        for text in [&title_lower, &content_lower, &category_lower]
            .into_iter()
            .flatten()
        {
            let similarity = self.similarity.similarity(&ctx.lower, text);
            score = score.max(similarity * SIMILARITY_SCALE);
        }
        for tag in &tags_lower {
            let similarity = self.similarity.similarity(&ctx.lower, tag);
            score = score.max(similarity * SIMILARITY_SCALE);
        }

        // Phonetic similarity for title, category, and tags.
        if !ctx.phonetic.is_empty() {
            if fields.contains(SearchField::Title) {
                let title_phonetic = self.phoneticizer.phoneticize(&doc.title);
                if !title_phonetic.is_empty() {
                    let similarity = self.similarity.similarity(&ctx.phonetic, &title_phonetic);
                    score = score.max(similarity * SIMILARITY_SCALE);
                }
            }
            if fields.contains(SearchField::Category) {
                let category_phonetic = self.phoneticizer.phoneticize(&doc.category);
                if !category_phonetic.is_empty() {
                    let similarity = self.similarity.similarity(&ctx.phonetic, &category_phonetic);
                    score = score.max(similarity * SIMILARITY_SCALE);
                }
            }
            if fields.contains(SearchField::Tags) {
                for tag in &doc.tags {
                    let tag_phonetic = self.phoneticizer.phoneticize(tag);
                    let similarity = self.similarity.similarity(&ctx.phonetic, &tag_phonetic);
                    score = score.max(similarity * SIMILARITY_SCALE);
                }
            }
        }

        score.clamp(0.0, SIMILARITY_SCALE)
    }
}

impl Default for FuzzyRanker {
    fn default() -> Self {
        FuzzyRanker::new()
    }
}

/// Prefix of `text` containing at most `limit` characters.
fn truncate_chars(text: &str, limit: usize) -> &str {
    match text.char_indices().nth(limit) {
        Some((byte_end, _)) => &text[..byte_end],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{FieldSelector, SearchConfig};

    fn doc(id: &str, title: &str, content: &str, category: &str, tags: &[&str]) -> SearchDocument {
        SearchDocument {
            id: id.to_string(),
            title: title.to_string(),
            content: content.to_string(),
            category: category.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[test]
    fn test_exact_title_token_scores_ninety() {
        let ranker = FuzzyRanker::new();
        let d = doc("1", "Learning React Hooks", "", "frontend", &[]);
        let score = ranker.score("react", &d, &SearchConfig::default());
        assert!(score >= EXACT_MATCH_SCORE);
    }

    #[test]
    fn test_exact_match_is_flat_not_cumulative() {
        let ranker = FuzzyRanker::new();
        let once = doc("1", "react", "", "", &[]);
        let many = doc("2", "react react react", "", "", &[]);
        let config = SearchConfig {
            fields: FieldSelector::none().with(SearchField::Title),
            threshold: 0.0,
        };
        let s1 = ranker.score("react", &once, &config);
        let s2 = ranker.score("react", &many, &config);
        // The repeated document can only win through string similarity,
        // never through a stacked exact bonus.
        assert!(s1 >= EXACT_MATCH_SCORE);
        assert!(s2 >= EXACT_MATCH_SCORE);
        assert_eq!(s1, 100.0);
        assert!(s2 < 100.0);
    }

    #[test]
    fn test_content_truncated_before_scoring() {
        let ranker = FuzzyRanker::new();
        // The needle sits past the 500-character scoring window.
        let mut content = "x".repeat(CONTENT_SCORING_LIMIT);
        content.push_str(" needle");
        let d = doc("1", "", &content, "", &[]);
        let config = SearchConfig {
            fields: FieldSelector::none().with(SearchField::Content),
            threshold: 0.0,
        };
        let score = ranker.score("needle", &d, &config);
        assert!(score < EXACT_MATCH_SCORE);
    }

    #[test]
    fn test_excluded_fields_contribute_nothing() {
        let ranker = FuzzyRanker::new();
        let d = doc("1", "react", "", "misc", &["unrelated"]);
        let config = SearchConfig {
            fields: FieldSelector::none().with(SearchField::Tags),
            threshold: 0.0,
        };
        let score = ranker.score("react", &d, &config);
        assert!(score < EXACT_MATCH_SCORE);
    }

    #[test]
    fn test_tag_exact_match_gated_on_selection() {
        let ranker = FuzzyRanker::new();
        let d = doc("1", "unrelated title", "", "", &["react"]);
        let title_only = SearchConfig {
            fields: FieldSelector::none().with(SearchField::Title),
            threshold: 0.0,
        };
        let score = ranker.score("react", &d, &title_only);
        assert!(score < EXACT_MATCH_SCORE);
    }

    #[test]
    fn test_empty_tags_are_zero_signal() {
        let ranker = FuzzyRanker::new();
        let d = doc("1", "", "", "", &[]);
        let config = SearchConfig {
            fields: FieldSelector::none().with(SearchField::Tags),
            threshold: 0.0,
        };
        assert_eq!(ranker.score("anything", &d, &config), 0.0);
    }

    #[test]
    fn test_empty_query_never_panics() {
        let ranker = FuzzyRanker::new();
        let d = doc("1", "title", "content", "category", &["tag"]);
        let score = ranker.score("", &d, &SearchConfig::default());
        assert!((0.0..=100.0).contains(&score));
    }

    #[test]
    fn test_phonetic_cross_script_match() {
        let ranker = FuzzyRanker::new();
        let d = doc("1", "学习笔记", "", "", &[]);
        let config = SearchConfig {
            fields: FieldSelector::none().with(SearchField::Title),
            threshold: 0.0,
        };
        let score = ranker.score("xuexibiji", &d, &config);
        assert!(score >= 90.0, "phonetic match scored {score}");
    }

    #[test]
    fn test_rank_sorts_descending_and_filters() {
        let ranker = FuzzyRanker::new();
        let docs = vec![
            doc("1", "react", "", "", &[]),
            doc("2", "reactor", "", "", &[]),
            doc("3", "cooking pasta", "", "", &[]),
        ];
        let results = ranker.rank("react", &docs, &SearchConfig::default());
        assert!(results.len() >= 2);
        assert!(results.windows(2).all(|w| w[0].score >= w[1].score));
        assert!(results.iter().all(|r| r.id != "3"));
    }

    #[test]
    fn test_rank_stable_for_equal_scores() {
        let ranker = FuzzyRanker::new();
        // Identical fields give identical scores; order must be input order.
        let docs = vec![
            doc("first", "react", "", "", &[]),
            doc("second", "react", "", "", &[]),
        ];
        let results = ranker.rank("react", &docs, &SearchConfig::default());
        assert_eq!(results[0].id, "first");
        assert_eq!(results[1].id, "second");
    }

    #[test]
    fn test_rank_never_duplicates_documents() {
        let ranker = FuzzyRanker::new();
        let docs = vec![doc("1", "react", "react body", "react", &["react"])];
        let results = ranker.rank("react", &docs, &SearchConfig::default());
        assert_eq!(results.len(), 1);
    }

    #[test]
    fn test_truncate_chars_multibyte() {
        let text = "短".repeat(10);
        assert_eq!(truncate_chars(&text, 3).chars().count(), 3);
        assert_eq!(truncate_chars("abc", 10), "abc");
    }
}
