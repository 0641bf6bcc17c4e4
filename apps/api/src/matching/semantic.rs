//! Semantic similarity via sentence embeddings.
//!
//! The embedding model is loaded once at process start and shared read-only
//! by every scoring call. A failed load is not an error: the estimator
//! degrades to a deterministic 0.0 contribution, mirroring the lexical-only
//! quality fallback.

use std::path::PathBuf;

use fastembed::{EmbeddingModel, InitOptions, TextEmbedding};
use parking_lot::Mutex;

/// Inputs are truncated to this many characters before embedding, bounding
/// latency and memory on pathological uploads.
pub const MAX_EMBED_CHARS: usize = 1_000_000;

/// Process-wide handle to the sentence embedding model.
pub struct SemanticModel {
    // The ONNX session is the engine's only shared mutable resource; the
    // mutex serializes inference calls on it.
    session: Option<Mutex<TextEmbedding>>,
}

impl SemanticModel {
    /// Attempts to load the MiniLM sentence model. On failure the handle is
    /// constructed in the disabled state and a warning is logged.
    pub fn load(cache_dir: Option<&str>) -> Self {
        let mut options =
            InitOptions::new(EmbeddingModel::AllMiniLML6V2).with_show_download_progress(false);
        if let Some(dir) = cache_dir {
            options = options.with_cache_dir(PathBuf::from(dir));
        }

        match TextEmbedding::try_new(options) {
            Ok(session) => {
                tracing::info!("embedding model loaded");
                Self {
                    session: Some(Mutex::new(session)),
                }
            }
            Err(e) => {
                tracing::warn!("embedding model unavailable, semantic similarity disabled: {e}");
                Self { session: None }
            }
        }
    }

    /// A handle that never embeds; semantic similarity scores 0.0.
    pub fn disabled() -> Self {
        Self { session: None }
    }

    pub fn is_loaded(&self) -> bool {
        self.session.is_some()
    }

    /// Cosine similarity of the two texts' embeddings, or 0.0 when the
    /// model is unavailable or inference fails. The raw value can be
    /// slightly negative; the score combiner's clamp is the only guard.
    pub fn similarity(&self, resume_text: &str, job_text: &str) -> f64 {
        let Some(session) = &self.session else {
            return 0.0;
        };

        let resume_text = truncate_chars(resume_text, MAX_EMBED_CHARS);
        let job_text = truncate_chars(job_text, MAX_EMBED_CHARS);

        let embedded = session.lock().embed(vec![resume_text, job_text], None);
        match embedded {
            Ok(vectors) if vectors.len() == 2 => cosine(&vectors[0], &vectors[1]),
            Ok(vectors) => {
                tracing::warn!(
                    "expected 2 embeddings, got {}; semantic similarity degraded to 0.0",
                    vectors.len()
                );
                0.0
            }
            Err(e) => {
                tracing::warn!("embedding failed, semantic similarity degraded to 0.0: {e}");
                0.0
            }
        }
    }
}

fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((index, _)) => &text[..index],
        None => text,
    }
}

fn cosine(a: &[f32], b: &[f32]) -> f64 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }
    let mut dot = 0.0f64;
    let mut norm_a = 0.0f64;
    let mut norm_b = 0.0f64;
    for (x, y) in a.iter().zip(b.iter()) {
        dot += f64::from(*x) * f64::from(*y);
        norm_a += f64::from(*x) * f64::from(*x);
        norm_b += f64::from(*y) * f64::from(*y);
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
    fn test_disabled_model_scores_zero() {
        let model = SemanticModel::disabled();
        assert!(!model.is_loaded());
        assert_eq!(model.similarity("rust engineer", "rust engineer"), 0.0);
    }

    #[test]
    fn test_truncate_short_text_is_untouched() {
        assert_eq!(truncate_chars("hello", 10), "hello");
        assert_eq!(truncate_chars("hello", 5), "hello");
    }

    #[test]
    fn test_truncate_respects_char_boundaries() {
        // four 3-byte characters; a byte-based cut would split one of them
        let text = "日本語話";
        assert_eq!(truncate_chars(text, 2), "日本");
    }

    #[test]
    fn test_cosine_of_identical_vectors_is_one() {
        let v = [0.5f32, 0.25, 0.75];
        assert!((cosine(&v, &v) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_cosine_of_orthogonal_vectors_is_zero() {
        assert_eq!(cosine(&[1.0, 0.0], &[0.0, 1.0]), 0.0);
    }

    #[test]
    fn test_cosine_handles_degenerate_vectors() {
        assert_eq!(cosine(&[0.0, 0.0], &[1.0, 1.0]), 0.0);
        assert_eq!(cosine(&[1.0], &[1.0, 2.0]), 0.0);
        assert_eq!(cosine(&[], &[]), 0.0);
    }

    #[test]
    fn test_cosine_can_be_negative() {
        assert!(cosine(&[1.0, 0.0], &[-1.0, 0.0]) < 0.0);
    }
}
