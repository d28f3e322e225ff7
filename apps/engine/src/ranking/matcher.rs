//! Job matching: text similarity between a job description and each
//! candidate's combined text.
//!
//! The primary path is tf-idf cosine similarity; when the vector space
//! cannot be built the matcher recovers with plain token-set overlap.
//! The fallback is internal and never surfaces to the caller.

use serde::Serialize;
use std::collections::HashSet;
use tracing::debug;

use crate::config::round2;
use crate::profile::CandidateProfile;
use crate::ranking::tfidf;

/// One candidate with its similarity to the job description, 0 to 100.
#[derive(Debug, Clone, Serialize)]
pub struct MatchedCandidate<'a> {
    pub candidate: &'a CandidateProfile,
    pub similarity_score: f64,
}

/// Matches candidates against a job description, sorted descending by
/// similarity, stable on ties. An empty candidate list yields an empty
/// result.
pub fn match_candidates<'a>(
    candidates: &'a [CandidateProfile],
    job_description: &str,
) -> Vec<MatchedCandidate<'a>> {
    if candidates.is_empty() {
        return Vec::new();
    }

    let job_text = job_description.to_lowercase();
    let candidate_texts: Vec<String> = candidates.iter().map(combined_text).collect();

    let fractions = match tfidf::similarities(&job_text, &candidate_texts) {
        Some(sims) => sims,
        None => {
            debug!("tf-idf vectorization infeasible, using token overlap");
            token_overlap(&job_text, &candidate_texts)
        }
    };

    let mut matched: Vec<MatchedCandidate<'a>> = candidates
        .iter()
        .zip(fractions)
        .map(|(candidate, fraction)| MatchedCandidate {
            candidate,
            similarity_score: round2(fraction * 100.0),
        })
        .collect();

    matched.sort_by(|a, b| b.similarity_score.total_cmp(&a.similarity_score));
    matched
}

/// Raw text plus flattened technical skills, the text each candidate
/// is matched on.
fn combined_text(candidate: &CandidateProfile) -> String {
    let skills = candidate.skills.all_technical().join(" ");
    format!("{} {}", candidate.raw_text, skills)
}

/// Whitespace token-set overlap with the job text, in [0, 1]. Zero for
/// every candidate when the job text has no tokens.
pub(crate) fn token_overlap(job_text: &str, candidate_texts: &[String]) -> Vec<f64> {
    let job_tokens: HashSet<&str> = job_text.split_whitespace().collect();

    candidate_texts
        .iter()
        .map(|text| {
            if job_tokens.is_empty() {
                return 0.0;
            }
            let lower = text.to_lowercase();
            let candidate_tokens: HashSet<&str> = lower.split_whitespace().collect();
            let overlap = job_tokens.intersection(&candidate_tokens).count();
            overlap as f64 / job_tokens.len() as f64
        })
        .collect()
}
