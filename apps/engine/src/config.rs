use serde::{Deserialize, Serialize};

/// Fixed weights for the four scoring dimensions. These are
/// configuration, not learned parameters; they sum to 1.0 so the
/// weighted total stays on the same 0–100 scale as the sub-scores.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub skills_match: f64,
    pub experience: f64,
    pub education: f64,
    pub profile_completeness: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            skills_match: 0.4,
            experience: 0.3,
            education: 0.2,
            profile_completeness: 0.1,
        }
    }
}

impl ScoringWeights {
    pub fn sum(&self) -> f64 {
        self.skills_match + self.experience + self.education + self.profile_completeness
    }
}

/// Blend factor between similarity and requirements fit when ranking
/// against a specific job description.
pub const SIMILARITY_BLEND: f64 = 0.5;

/// Vocabulary cap for the tf-idf vector space.
pub const MAX_VOCABULARY: usize = 100;

/// Rounds to two decimal places; scores and rates at the boundary are
/// reported at this precision.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights_sum_to_one() {
        let w = ScoringWeights::default();
        assert!((w.sum() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(66.666), 66.67);
        assert_eq!(round2(50.0), 50.0);
        assert_eq!(round2(0.004), 0.0);
    }
}
