//! Phonetic transliteration for cross-script matching.
//!
//! A latin-script or phonetically-spelled query should be able to match a
//! document written in a non-latin script. The [`Phoneticizer`] seam maps
//! text to a latin phonetic reading; the ranker then compares readings
//! with ordinary string similarity.

use pinyin::ToPinyin;

/// Trait for deterministic, total phonetic transliteration.
///
/// Implementations never fail on arbitrary input: characters without a
/// phonetic reading are passed through or dropped, consistently.
pub trait Phoneticizer: Send + Sync {
    /// Convert text to its concatenated phonetic latin form.
    fn phoneticize(&self, text: &str) -> String;

    /// Get the name of this phoneticizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

/// Phoneticizer mapping Han characters to toneless pinyin readings.
///
/// Readings are concatenated with no separators. Characters without a
/// pinyin reading pass through lowercased, so a latin query phoneticizes
/// to itself and stays comparable against transliterated titles.
///
/// # Examples
///
/// ```
/// use kensaku::analysis::phonetic::{Phoneticizer, PinyinPhoneticizer};
///
/// let phoneticizer = PinyinPhoneticizer::new();
/// assert_eq!(phoneticizer.phoneticize("学习"), "xuexi");
/// assert_eq!(phoneticizer.phoneticize("Rust"), "rust");
/// ```
#[derive(Clone, Debug, Default)]
pub struct PinyinPhoneticizer;

impl PinyinPhoneticizer {
    /// Create a new pinyin phoneticizer.
    pub fn new() -> Self {
        PinyinPhoneticizer
    }
}

impl Phoneticizer for PinyinPhoneticizer {
    fn phoneticize(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        for (c, reading) in text.chars().zip(text.to_pinyin()) {
            match reading {
                Some(p) => out.push_str(p.plain()),
                None => out.extend(c.to_lowercase()),
            }
        }
        out
    }

    fn name(&self) -> &'static str {
        "pinyin"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_han_to_pinyin() {
        let phoneticizer = PinyinPhoneticizer::new();
        assert_eq!(phoneticizer.phoneticize("前端"), "qianduan");
        assert_eq!(phoneticizer.phoneticize("美食"), "meishi");
    }

    #[test]
    fn test_latin_passes_through_lowercased() {
        let phoneticizer = PinyinPhoneticizer::new();
        assert_eq!(phoneticizer.phoneticize("React Hooks"), "react hooks");
    }

    #[test]
    fn test_mixed_script() {
        let phoneticizer = PinyinPhoneticizer::new();
        assert_eq!(phoneticizer.phoneticize("学Rust"), "xuerust");
    }

    #[test]
    fn test_empty_input() {
        let phoneticizer = PinyinPhoneticizer::new();
        assert_eq!(phoneticizer.phoneticize(""), "");
    }

    #[test]
    fn test_deterministic() {
        let phoneticizer = PinyinPhoneticizer::new();
        let a = phoneticizer.phoneticize("中文搜索");
        let b = phoneticizer.phoneticize("中文搜索");
        assert_eq!(a, b);
    }
}
