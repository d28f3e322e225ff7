//! Ranking engine: orchestrates scoring and matching into ordered
//! candidate lists.

pub mod matcher;
pub mod scorer;
mod tfidf;

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::config::{round2, ScoringWeights, SIMILARITY_BLEND};
use crate::errors::EngineError;
use crate::profile::CandidateProfile;

pub use matcher::MatchedCandidate;
pub use scorer::{Grade, ScoreBreakdown, ScoreResult, EDUCATION_KEYWORDS, EXPERIENCE_KEYWORDS};

/// What a job asks for. `min_experience` is carried and validated but
/// not yet consulted by the scorer (reserved).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobRequirements {
    pub required_skills: BTreeSet<String>,
    pub min_experience: f64,
}

/// One ranked candidate, projected for the serving boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedCandidate {
    pub id: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub total_score: f64,
    pub grade: Grade,
    pub breakdown: ScoreBreakdown,
    pub skills: Vec<String>,
    pub candidate: CandidateProfile,
}

/// A candidate ranked against a specific job description.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobMatchRecord {
    pub id: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub combined_score: f64,
    pub similarity_score: f64,
    pub requirements_score: f64,
    pub grade: Grade,
    pub skills: Vec<String>,
}

/// Stateless orchestrator over scorer and matcher. Holds only the
/// fixed scoring weights.
#[derive(Debug, Clone, Default)]
pub struct RankingEngine {
    weights: ScoringWeights,
}

impl RankingEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_weights(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    /// Ranks candidates by requirements fit alone: every candidate is
    /// scored independently, then sorted descending by total score.
    /// Ties keep input order.
    pub fn rank(
        &self,
        candidates: &[CandidateProfile],
        requirements: &JobRequirements,
    ) -> Result<Vec<RankedCandidate>, EngineError> {
        validate_requirements(requirements)?;

        let mut ranked: Vec<RankedCandidate> = candidates
            .iter()
            .map(|candidate| {
                let result = scorer::score(candidate, requirements, &self.weights);
                RankedCandidate {
                    id: candidate.source_path.clone(),
                    name: candidate.entities.name.clone(),
                    email: candidate.entities.email.clone(),
                    total_score: result.total_score,
                    grade: result.grade,
                    breakdown: result.breakdown,
                    skills: top_skills(candidate),
                    candidate: candidate.clone(),
                }
            })
            .collect();

        ranked.sort_by(|a, b| b.total_score.total_cmp(&a.total_score));
        Ok(ranked)
    }

    /// Ranks candidates for a specific job: similarity from the
    /// matcher blended 50/50 with the requirements score. The final
    /// list is ordered by the blended score, descending, stable on
    /// ties.
    pub fn match_to_job(
        &self,
        candidates: &[CandidateProfile],
        job_description: &str,
        requirements: &JobRequirements,
    ) -> Result<Vec<JobMatchRecord>, EngineError> {
        validate_requirements(requirements)?;
        if job_description.trim().is_empty() {
            return Err(EngineError::Validation(
                "job_description must not be empty".to_string(),
            ));
        }

        let matched = matcher::match_candidates(candidates, job_description);

        let mut records: Vec<JobMatchRecord> = matched
            .iter()
            .map(|m| {
                let result = scorer::score(m.candidate, requirements, &self.weights);
                JobMatchRecord {
                    id: m.candidate.source_path.clone(),
                    name: m.candidate.entities.name.clone(),
                    email: m.candidate.entities.email.clone(),
                    combined_score: round2(
                        m.similarity_score * SIMILARITY_BLEND
                            + result.total_score * (1.0 - SIMILARITY_BLEND),
                    ),
                    similarity_score: m.similarity_score,
                    requirements_score: result.total_score,
                    grade: result.grade,
                    skills: top_skills(m.candidate),
                }
            })
            .collect();

        records.sort_by(|a, b| b.combined_score.total_cmp(&a.combined_score));
        Ok(records)
    }
}

/// The first 10 technical skills in taxonomy category order.
fn top_skills(candidate: &CandidateProfile) -> Vec<String> {
    candidate
        .skills
        .technical_in_category_order()
        .take(10)
        .cloned()
        .collect()
}

fn validate_requirements(requirements: &JobRequirements) -> Result<(), EngineError> {
    if !requirements.min_experience.is_finite() || requirements.min_experience < 0.0 {
        return Err(EngineError::Validation(
            "min_experience must be a non-negative number".to_string(),
        ));
    }
    Ok(())
}
