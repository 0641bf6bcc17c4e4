//! Text normalization shared by the similarity estimators.

use once_cell::sync::Lazy;
use rust_stemmers::{Algorithm, Stemmer};
use std::collections::HashSet;
use unicode_segmentation::UnicodeSegmentation;

/// Common English words filtered out before any frequency analysis.
const ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "but", "by", "for", "if", "in", "into", "is", "it",
    "no", "not", "of", "on", "or", "such", "that", "the", "their", "then", "there", "these",
    "they", "this", "to", "was", "will", "with",
];

static STOP_WORDS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| ENGLISH_STOP_WORDS.iter().copied().collect());

static STEMMER: Lazy<Stemmer> = Lazy::new(|| Stemmer::create(Algorithm::English));

/// Reduces raw text to a lowercase, stopword-free, stemmed term stream
/// joined by single spaces.
///
/// Tokenization follows Unicode word boundaries (UAX #29), which drops
/// punctuation and whitespace segments on its own. Tokens of length <= 2
/// are discarded; the survivors are reduced to their Snowball stem.
/// Pure function of its input.
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    lowered
        .unicode_words()
        .filter(|word| word.chars().count() > 2 && !STOP_WORDS.contains(word))
        .map(|word| STEMMER.stem(word).into_owned())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_and_stems() {
        assert_eq!(normalize("Running Tests"), "run test");
    }

    #[test]
    fn test_drops_stop_words() {
        let normalized = normalize("the quick brown fox and the lazy dog");
        assert!(!normalized.contains("the"), "got: {normalized}");
        assert!(!normalized.contains("and"), "got: {normalized}");
        assert!(normalized.contains("quick"));
    }

    #[test]
    fn test_drops_short_tokens() {
        // "go", "is", "ok" are all <= 2 characters (or stop words)
        assert_eq!(normalize("go is ok"), "");
    }

    #[test]
    fn test_strips_punctuation_via_word_boundaries() {
        assert_eq!(normalize("python, react!"), "python react");
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   \t\n"), "");
    }

    #[test]
    fn test_non_ascii_tokens_survive() {
        let normalized = normalize("café experience");
        assert!(normalized.contains("café"), "got: {normalized}");
    }

    #[test]
    fn test_is_deterministic() {
        let text = "Senior engineer building distributed systems in Rust";
        assert_eq!(normalize(text), normalize(text));
    }
}
