//! Score combination: four independent estimators behind one trait,
//! weighted into a single 0-100 compatibility score.

use std::sync::Arc;

use serde::Serialize;

use crate::matching::keywords::keyword_coverage;
use crate::matching::lexical::lexical_similarity;
use crate::matching::semantic::SemanticModel;
use crate::matching::skills::skill_overlap;
use crate::matching::weights::MATCH_WEIGHTS;

/// A similarity estimator: a pure function of the two texts (and the
/// process-wide read-only model state) returning a raw score, nominally in
/// [0,1]. The combiner is agnostic to which estimators are model-backed,
/// so estimators can be added or removed without touching it.
pub trait Estimator: Send + Sync {
    fn name(&self) -> &'static str;
    fn estimate(&self, resume_text: &str, job_text: &str) -> f64;
}

struct LexicalEstimator;

impl Estimator for LexicalEstimator {
    fn name(&self) -> &'static str {
        "lexical"
    }

    fn estimate(&self, resume_text: &str, job_text: &str) -> f64 {
        lexical_similarity(resume_text, job_text)
    }
}

struct SemanticEstimator {
    model: Arc<SemanticModel>,
}

impl Estimator for SemanticEstimator {
    fn name(&self) -> &'static str {
        "semantic"
    }

    fn estimate(&self, resume_text: &str, job_text: &str) -> f64 {
        self.model.similarity(resume_text, job_text)
    }
}

struct SkillOverlapEstimator;

impl Estimator for SkillOverlapEstimator {
    fn name(&self) -> &'static str {
        "skills"
    }

    fn estimate(&self, resume_text: &str, job_text: &str) -> f64 {
        skill_overlap(resume_text, job_text)
    }
}

struct KeywordCoverageEstimator;

impl Estimator for KeywordCoverageEstimator {
    fn name(&self) -> &'static str {
        "keywords"
    }

    fn estimate(&self, resume_text: &str, job_text: &str) -> f64 {
        keyword_coverage(resume_text, job_text)
    }
}

/// One estimator's contribution to a match score.
#[derive(Debug, Clone, Serialize)]
pub struct ComponentScore {
    pub metric: &'static str,
    pub raw: f64,
    pub weight: f64,
}

/// Result of one scoring call: the final 0-100 score plus the raw
/// per-estimator breakdown. Returned once, never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct MatchScore {
    pub total: f64,
    pub components: Vec<ComponentScore>,
}

/// The scoring engine. Construction wires the four estimators to the fixed
/// weight table; after that the engine is read-only and safe to share
/// across concurrent requests.
pub struct MatchEngine {
    estimators: Vec<(f64, Box<dyn Estimator>)>,
    model: Arc<SemanticModel>,
}

impl MatchEngine {
    pub fn new(model: SemanticModel) -> Self {
        let model = Arc::new(model);
        let estimators: Vec<(f64, Box<dyn Estimator>)> = vec![
            (MATCH_WEIGHTS.lexical, Box::new(LexicalEstimator)),
            (
                MATCH_WEIGHTS.semantic,
                Box::new(SemanticEstimator {
                    model: model.clone(),
                }),
            ),
            (MATCH_WEIGHTS.skills, Box::new(SkillOverlapEstimator)),
            (MATCH_WEIGHTS.keywords, Box::new(KeywordCoverageEstimator)),
        ];
        Self { estimators, model }
    }

    pub fn model_loaded(&self) -> bool {
        self.model.is_loaded()
    }

    /// Weighted compatibility score in [0,100], rounded to 2 decimals.
    ///
    /// Empty resume or job text short-circuits to 0 without invoking any
    /// estimator. Estimator-internal failures have already been absorbed
    /// as 0.0 by the time values arrive here; the final clamp guards
    /// against negative embedding similarity and float rounding.
    pub fn match_score(&self, resume_text: &str, job_text: &str) -> MatchScore {
        if resume_text.is_empty() || job_text.is_empty() {
            return MatchScore {
                total: 0.0,
                components: Vec::new(),
            };
        }

        let mut components = Vec::with_capacity(self.estimators.len());
        let mut weighted_sum = 0.0;
        for (weight, estimator) in &self.estimators {
            let raw = estimator.estimate(resume_text, job_text);
            weighted_sum += raw * weight;
            components.push(ComponentScore {
                metric: estimator.name(),
                raw,
                weight: *weight,
            });
        }

        let total = ((weighted_sum * 100.0 * 100.0).round() / 100.0).clamp(0.0, 100.0);
        MatchScore { total, components }
    }

    #[cfg(test)]
    fn with_estimators(estimators: Vec<(f64, Box<dyn Estimator>)>) -> Self {
        Self {
            estimators,
            model: Arc::new(SemanticModel::disabled()),
        }
    }
}
