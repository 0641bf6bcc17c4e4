//! Lexical similarity: TF-IDF cosine over the two input documents.

use anyhow::{bail, Result};
use std::collections::HashMap;

use crate::matching::normalize::normalize;

/// Joint vocabulary cap across both documents.
const MAX_FEATURES: usize = 500;

/// TF-IDF cosine similarity between the two normalized texts.
///
/// The vectorizer is fit on exactly this two-document corpus: unigrams and
/// bigrams, at most [`MAX_FEATURES`] terms selected by total frequency with
/// lexicographic tie-breaking so the result is deterministic. Any
/// degenerate case (nothing survives normalization, a zero-norm vector)
/// scores 0.0 instead of propagating an error.
pub fn lexical_similarity(resume_text: &str, job_text: &str) -> f64 {
    match try_lexical_similarity(resume_text, job_text) {
        Ok(score) => score,
        Err(e) => {
            tracing::warn!("lexical similarity degraded to 0.0: {e}");
            0.0
        }
    }
}

fn try_lexical_similarity(resume_text: &str, job_text: &str) -> Result<f64> {
    let resume_counts = term_counts(&normalize(resume_text));
    let job_counts = term_counts(&normalize(job_text));

    let vocabulary = select_vocabulary(&resume_counts, &job_counts);
    if vocabulary.is_empty() {
        bail!("empty vocabulary after normalization");
    }

    let resume_vector = tfidf_vector(&vocabulary, &resume_counts, &job_counts, &resume_counts);
    let job_vector = tfidf_vector(&vocabulary, &resume_counts, &job_counts, &job_counts);

    Ok(cosine(&resume_vector, &job_vector).clamp(0.0, 1.0))
}

/// Unigram and bigram counts for one normalized document.
fn term_counts(normalized: &str) -> HashMap<String, usize> {
    let words: Vec<&str> = normalized.split_whitespace().collect();
    let mut counts: HashMap<String, usize> = HashMap::new();
    for word in &words {
        *counts.entry((*word).to_string()).or_insert(0) += 1;
    }
    for pair in words.windows(2) {
        *counts.entry(format!("{} {}", pair[0], pair[1])).or_insert(0) += 1;
    }
    counts
}

/// Top terms by combined frequency across both documents.
///
/// Ties break by term order so repeated calls always pick the same
/// vocabulary.
fn select_vocabulary(
    resume_counts: &HashMap<String, usize>,
    job_counts: &HashMap<String, usize>,
) -> Vec<String> {
    let mut totals: HashMap<&str, usize> = HashMap::new();
    for (term, count) in resume_counts.iter().chain(job_counts.iter()) {
        *totals.entry(term.as_str()).or_insert(0) += count;
    }

    let mut terms: Vec<(&str, usize)> = totals.into_iter().collect();
    terms.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    terms.truncate(MAX_FEATURES);
    terms.into_iter().map(|(term, _)| term.to_string()).collect()
}

/// Smoothed TF-IDF weights for one document over the joint vocabulary.
fn tfidf_vector(
    vocabulary: &[String],
    resume_counts: &HashMap<String, usize>,
    job_counts: &HashMap<String, usize>,
    document: &HashMap<String, usize>,
) -> Vec<f64> {
    const N_DOCS: f64 = 2.0;
    vocabulary
        .iter()
        .map(|term| {
            let tf = document.get(term).copied().unwrap_or(0) as f64;
            let df = resume_counts.contains_key(term) as usize as f64
                + job_counts.contains_key(term) as usize as f64;
            let idf = ((1.0 + N_DOCS) / (1.0 + df)).ln() + 1.0;
            tf * idf
        })
        .collect()
}

fn cosine(a: &[f64], b: &[f64]) -> f64 {
    let mut dot = 0.0;
    let mut norm_a = 0.0;
    let mut norm_b = 0.0;
    for (x, y) in a.iter().zip(b.iter()) {
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }
    let denominator = (norm_a * norm_b).sqrt();
    if denominator == 0.0 {
        0.0
    } else {
        dot / denominator
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_texts_score_near_one() {
        let text = "Senior Rust engineer building distributed storage systems";
        let score = lexical_similarity(text, text);
        assert!(score > 0.99, "got {score}");
        assert!(score <= 1.0);
    }

    #[test]
    fn test_disjoint_texts_score_zero() {
        let score = lexical_similarity(
            "watercolor painting techniques",
            "kubernetes cluster administration",
        );
        assert_eq!(score, 0.0);
    }

    #[test]
    fn test_empty_inputs_score_zero() {
        assert_eq!(lexical_similarity("", ""), 0.0);
        assert_eq!(lexical_similarity("rust services", ""), 0.0);
        assert_eq!(lexical_similarity("", "rust services"), 0.0);
    }

    #[test]
    fn test_stop_words_only_score_zero() {
        // nothing survives normalization, so the vocabulary is empty
        assert_eq!(lexical_similarity("the and of", "to be or not to be"), 0.0);
    }

    #[test]
    fn test_word_order_matters_through_bigrams() {
        let score = lexical_similarity(
            "machine learning models deployed",
            "learning machine models deployed",
        );
        assert!(score > 0.0, "shared unigrams should contribute");
        assert!(score < 1.0, "bigram mismatch should lower the score, got {score}");
    }

    #[test]
    fn test_partial_overlap_scores_between_bounds() {
        let score = lexical_similarity(
            "python developer with kubernetes experience",
            "python developer with terraform experience",
        );
        assert!(score > 0.0 && score < 1.0, "got {score}");
    }

    #[test]
    fn test_is_deterministic() {
        let resume = "rust tokio axum services in production";
        let job = "rust services running tokio in production clusters";
        let first = lexical_similarity(resume, job);
        let second = lexical_similarity(resume, job);
        assert_eq!(first.to_bits(), second.to_bits());
    }

    #[test]
    fn test_vocabulary_is_capped_and_deterministic() {
        let many: String = (0..1200).map(|i| format!("term{i} ")).collect();
        let vocabulary = select_vocabulary(&term_counts(&many), &term_counts(&many));
        assert_eq!(vocabulary.len(), MAX_FEATURES);
        let again = select_vocabulary(&term_counts(&many), &term_counts(&many));
        assert_eq!(vocabulary, again);
    }
}
