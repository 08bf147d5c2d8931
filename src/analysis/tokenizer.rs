//! Tokenizer implementations for fuzzy matching.
//!
//! Tokenizers split input text into the atoms used for exact-match
//! comparison. Unlike a full indexing pipeline, tokenization here is a
//! total function: every input produces a token list, never an error.

/// Trait for tokenizers that convert text into tokens.
///
/// Implementations must be pure and deterministic. Case folding is the
/// caller's responsibility; call sites lower-case text before tokenizing.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text.
    fn tokenize(&self, text: &str) -> Vec<String>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

/// Characters that delimit word tokens: ASCII sentence punctuation and the
/// full-width CJK equivalents.
const DELIMITERS: [char; 10] = ['，', '。', '！', '？', '；', ',', '.', '!', '?', ';'];

/// A tokenizer that splits on whitespace and sentence punctuation, then
/// appends each non-ASCII alphanumeric character of the input as a
/// single-character token.
///
/// The per-character tokens make substring-level matching work for
/// languages without whitespace-delimited words, notably CJK text, where
/// a one-character query should still hit a title containing it. ASCII
/// characters are not emitted individually: latin words already form
/// whole tokens, and a single shared letter must not count as an exact
/// match between unrelated English texts.
///
/// # Examples
///
/// ```
/// use kensaku::analysis::tokenizer::{SimpleTokenizer, Tokenizer};
///
/// let tokenizer = SimpleTokenizer::new();
/// let tokens = tokenizer.tokenize("react 学习");
/// assert!(tokens.contains(&"react".to_string()));
/// assert!(tokens.contains(&"学习".to_string()));
/// assert!(tokens.contains(&"学".to_string()));
/// assert!(!tokens.contains(&"r".to_string()));
/// ```
#[derive(Clone, Debug, Default)]
pub struct SimpleTokenizer;

impl SimpleTokenizer {
    /// Create a new simple tokenizer.
    pub fn new() -> Self {
        SimpleTokenizer
    }
}

impl Tokenizer for SimpleTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        let mut tokens: Vec<String> = text
            .split(|c: char| c.is_whitespace() || DELIMITERS.contains(&c))
            .filter(|token| !token.is_empty())
            .map(|token| token.to_string())
            .collect();

        tokens.extend(
            text.chars()
                .filter(|c| c.is_alphanumeric() && !c.is_ascii())
                .map(|c| c.to_string()),
        );
        tokens
    }

    fn name(&self) -> &'static str {
        "simple"
    }
}
