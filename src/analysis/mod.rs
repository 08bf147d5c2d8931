//! Text analysis primitives for fuzzy ranking.
//!
//! Three narrow seams, each behind a trait so the backing algorithm can be
//! swapped without touching the ranker's control flow:
//!
//! - [`tokenizer::Tokenizer`] - splits text into comparable tokens
//! - [`phonetic::Phoneticizer`] - maps text to a latin phonetic form
//! - [`similarity::StringSimilarity`] - normalized string similarity in `[0, 1]`

pub mod phonetic;
pub mod similarity;
pub mod tokenizer;

pub use phonetic::{Phoneticizer, PinyinPhoneticizer};
pub use similarity::{JaroWinkler, StringSimilarity};
pub use tokenizer::{SimpleTokenizer, Tokenizer};
