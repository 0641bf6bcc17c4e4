#![allow(dead_code)]

//! Fixed combination weights for the similarity estimators.

/// Weights applied by the score combiner.
///
/// Constant for the lifetime of the process and required to sum to 1.0 so
/// the combined score stays within [0,100] for estimator outputs in [0,1].
pub const MATCH_WEIGHTS: EstimatorWeights = EstimatorWeights {
    lexical: 0.30,
    semantic: 0.25,
    skills: 0.30,
    keywords: 0.15,
};

#[derive(Debug, Clone, Copy)]
pub struct EstimatorWeights {
    pub lexical: f64,
    pub semantic: f64,
    pub skills: f64,
    pub keywords: f64,
}

impl EstimatorWeights {
    pub fn sum(&self) -> f64 {
        self.lexical + self.semantic + self.skills + self.keywords
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weights_sum_to_one() {
        assert!((MATCH_WEIGHTS.sum() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_weights_are_non_negative() {
        assert!(MATCH_WEIGHTS.lexical >= 0.0);
        assert!(MATCH_WEIGHTS.semantic >= 0.0);
        assert!(MATCH_WEIGHTS.skills >= 0.0);
        assert!(MATCH_WEIGHTS.keywords >= 0.0);
    }
}
