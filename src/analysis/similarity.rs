//! Normalized string similarity metrics.

/// Trait for normalized string similarity in `[0, 1]`.
///
/// Implementations must be symmetric-safe for ranking use: defined for
/// every pair of inputs, including empty strings, and deterministic.
pub trait StringSimilarity: Send + Sync {
    /// Similarity between `a` and `b`; `1.0` means identical.
    fn similarity(&self, a: &str, b: &str) -> f64;

    /// Get the name of this metric (for debugging and configuration).
    fn name(&self) -> &'static str;
}

/// Jaro-Winkler similarity.
///
/// Favors strings sharing a common prefix and tolerates character
/// transpositions, which suits short titles, categories, and tags.
///
/// # Examples
///
/// ```
/// use kensaku::analysis::similarity::{JaroWinkler, StringSimilarity};
///
/// let metric = JaroWinkler::new();
/// assert_eq!(metric.similarity("react", "react"), 1.0);
/// assert!(metric.similarity("react", "redux") > 0.5);
/// assert_eq!(metric.similarity("react", ""), 0.0);
/// ```
#[derive(Clone, Debug, Default)]
pub struct JaroWinkler;

impl JaroWinkler {
    /// Create a new Jaro-Winkler metric.
    pub fn new() -> Self {
        JaroWinkler
    }
}

impl StringSimilarity for JaroWinkler {
    fn similarity(&self, a: &str, b: &str) -> f64 {
        strsim::jaro_winkler(a, b)
    }

    fn name(&self) -> &'static str {
        "jaro_winkler"
    }
}
