//! # Kensaku
//!
//! A fuzzy match ranking library for Rust.
//!
//! Kensaku scores a set of candidate documents against a free-text query by
//! combining three independent signals per field and keeping the strongest:
//!
//! - Exact token match (a flat high-confidence score)
//! - Jaro-Winkler string similarity
//! - Phonetic (pinyin) similarity for cross-script matching
//!
//! The engine is a one-shot, in-memory ranker: no index is built or retained
//! between calls, documents are never mutated, and ranking a fixed input is
//! fully deterministic.
//!
//! ## Example
//!
//! ```
//! use kensaku::document::{SearchConfig, SearchDocument};
//! use kensaku::ranker::FuzzyRanker;
//!
//! let docs = vec![SearchDocument {
//!     id: "1".to_string(),
//!     title: "Learning React Hooks".to_string(),
//!     content: "A tour of useState and useEffect.".to_string(),
//!     category: "frontend".to_string(),
//!     tags: vec!["react".to_string(), "hooks".to_string()],
//! }];
//!
//! let ranker = FuzzyRanker::new();
//! let results = ranker.rank("react", &docs, &SearchConfig::default());
//! assert_eq!(results[0].id, "1");
//! ```

pub mod analysis;
pub mod cli;
pub mod document;
pub mod error;
pub mod ranker;

pub mod prelude {
    pub use crate::analysis::phonetic::{Phoneticizer, PinyinPhoneticizer};
    pub use crate::analysis::similarity::{JaroWinkler, StringSimilarity};
    pub use crate::analysis::tokenizer::{SimpleTokenizer, Tokenizer};
    pub use crate::document::{
        FieldSelector, SearchConfig, SearchDocument, SearchField, SearchResult,
    };
    pub use crate::error::{KensakuError, Result};
    pub use crate::ranker::FuzzyRanker;
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
