//! Candidate scoring: four weighted dimensions and a letter grade.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::{round2, ScoringWeights};
use crate::profile::CandidateProfile;
use crate::ranking::JobRequirements;

/// Experience indicators: each word present anywhere in the text adds
/// 10 points, once per keyword, capped at 100.
pub const EXPERIENCE_KEYWORDS: &[&str] =
    &["years", "experience", "worked", "developed", "led", "managed"];

/// Education indicators, 15 points each, capped at 100.
pub const EDUCATION_KEYWORDS: &[&str] =
    &["bachelor", "master", "phd", "degree", "university", "college"];

/// Letter grade over the total score. Thresholds are inclusive lower
/// bounds: A at 80, B at 60, C at 40, D below.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
}

impl Grade {
    pub fn from_score(score: f64) -> Self {
        if score >= 80.0 {
            Grade::A
        } else if score >= 60.0 {
            Grade::B
        } else if score >= 40.0 {
            Grade::C
        } else {
            Grade::D
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
        };
        f.write_str(letter)
    }
}

/// The four named sub-scores, each in [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub skills_match: f64,
    pub experience: f64,
    pub education: f64,
    pub profile_completeness: f64,
}

/// A scored candidate: weighted total, the breakdown behind it, and
/// the derived grade. Recomputed on every scoring call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub total_score: f64,
    pub breakdown: ScoreBreakdown,
    pub grade: Grade,
}

/// Scores one candidate against the job requirements.
pub fn score(
    candidate: &CandidateProfile,
    requirements: &JobRequirements,
    weights: &ScoringWeights,
) -> ScoreResult {
    let breakdown = ScoreBreakdown {
        skills_match: score_skills(candidate, requirements),
        experience: score_keywords(&candidate.raw_text, EXPERIENCE_KEYWORDS, 10.0),
        education: score_keywords(&candidate.raw_text, EDUCATION_KEYWORDS, 15.0),
        profile_completeness: score_completeness(candidate),
    };

    let total_score = round2(
        breakdown.skills_match * weights.skills_match
            + breakdown.experience * weights.experience
            + breakdown.education * weights.education
            + breakdown.profile_completeness * weights.profile_completeness,
    );

    ScoreResult {
        total_score,
        breakdown,
        grade: Grade::from_score(total_score),
    }
}

/// Fraction of required skills the candidate covers, on a 0 to 100
/// scale. An empty requirement set scores a fixed neutral 50.
fn score_skills(candidate: &CandidateProfile, requirements: &JobRequirements) -> f64 {
    if requirements.required_skills.is_empty() {
        return 50.0;
    }

    let candidate_skills: BTreeSet<String> =
        candidate.skills.all_technical().into_iter().collect();
    let matched = requirements
        .required_skills
        .iter()
        .filter(|s| candidate_skills.contains(*s))
        .count();

    let score = matched as f64 / requirements.required_skills.len() as f64 * 100.0;
    score.min(100.0)
}

/// Keyword-presence heuristic: each distinct keyword found anywhere in
/// the text contributes `points` once, regardless of repetition.
fn score_keywords(raw_text: &str, keywords: &[&str], points: f64) -> f64 {
    let text = raw_text.to_lowercase();
    let score = keywords.iter().filter(|kw| text.contains(*kw)).count() as f64 * points;
    score.min(100.0)
}

/// 25 points per present contact channel.
fn score_completeness(candidate: &CandidateProfile) -> f64 {
    let entities = &candidate.entities;
    [
        entities.email.is_some(),
        entities.phone.is_some(),
        entities.linkedin.is_some(),
        entities.github.is_some(),
    ]
    .iter()
    .filter(|present| **present)
    .count() as f64
        * 25.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{entities, sections, skills, CandidateProfile, CandidateSummary};
    use std::collections::BTreeSet;

    fn make_candidate(text: &str) -> CandidateProfile {
        CandidateProfile {
            source_path: "test.txt".to_string(),
            raw_text: text.to_string(),
            entities: entities::extract(text),
            skills: skills::extract(text),
            sections: sections::locate(text),
            summary: CandidateSummary::default(),
        }
    }

    fn requirements(skills: &[&str]) -> JobRequirements {
        JobRequirements {
            required_skills: skills.iter().map(|s| s.to_string()).collect::<BTreeSet<_>>(),
            min_experience: 0.0,
        }
    }

    #[test]
    fn test_empty_requirements_is_neutral_50() {
        let candidate = make_candidate("python developer");
        let result = score(&candidate, &requirements(&[]), &ScoringWeights::default());
        assert_eq!(result.breakdown.skills_match, 50.0);
    }

    #[test]
    fn test_skills_match_fraction_of_required() {
        let candidate = make_candidate("python and docker daily");
        let result = score(
            &candidate,
            &requirements(&["Python", "Docker", "Kubernetes", "Terraform"]),
            &ScoringWeights::default(),
        );
        assert_eq!(result.breakdown.skills_match, 50.0); // 2 of 4
    }

    #[test]
    fn test_full_skill_coverage_scores_100() {
        let candidate = make_candidate("python docker");
        let result = score(
            &candidate,
            &requirements(&["Python", "Docker"]),
            &ScoringWeights::default(),
        );
        assert_eq!(result.breakdown.skills_match, 100.0);
    }

    #[test]
    fn test_experience_keywords_count_once_each() {
        let candidate = make_candidate("experience experience experience");
        let result = score(&candidate, &requirements(&[]), &ScoringWeights::default());
        assert_eq!(result.breakdown.experience, 10.0);
    }

    #[test]
    fn test_experience_all_keywords() {
        let candidate =
            make_candidate("10 years experience, worked and developed, led and managed teams");
        let result = score(&candidate, &requirements(&[]), &ScoringWeights::default());
        assert_eq!(result.breakdown.experience, 60.0);
    }

    #[test]
    fn test_education_keywords_15_each() {
        let candidate = make_candidate("Bachelor degree from State University");
        let result = score(&candidate, &requirements(&[]), &ScoringWeights::default());
        assert_eq!(result.breakdown.education, 45.0);
    }

    #[test]
    fn test_completeness_25_per_channel() {
        let candidate = make_candidate(
            "Jane Doe\njane@x.com\n(555) 123-4567\nlinkedin.com/in/jane\ngithub.com/jane",
        );
        let result = score(&candidate, &requirements(&[]), &ScoringWeights::default());
        assert_eq!(result.breakdown.profile_completeness, 100.0);
    }

    #[test]
    fn test_completeness_partial() {
        let candidate = make_candidate("Jane Doe\njane@x.com");
        let result = score(&candidate, &requirements(&[]), &ScoringWeights::default());
        assert_eq!(result.breakdown.profile_completeness, 25.0);
    }

    #[test]
    fn test_total_is_weighted_sum_rounded() {
        // skills 50, experience 10, education 0, completeness 25
        // -> 0.4*50 + 0.3*10 + 0.2*0 + 0.1*25 = 25.5
        let candidate = make_candidate("jane@x.com experience");
        let result = score(&candidate, &requirements(&[]), &ScoringWeights::default());
        assert_eq!(result.total_score, 25.5);
        assert_eq!(result.grade, Grade::D);
    }

    #[test]
    fn test_total_stays_in_bounds_over_subscore_grid() {
        let weights = ScoringWeights::default();
        let steps = [0.0, 12.5, 25.0, 40.0, 50.0, 66.7, 75.0, 99.99, 100.0];
        for &s in &steps {
            for &e in &steps {
                for &d in &steps {
                    for &c in &steps {
                        let total = round2(
                            s * weights.skills_match
                                + e * weights.experience
                                + d * weights.education
                                + c * weights.profile_completeness,
                        );
                        assert!(
                            (0.0..=100.0).contains(&total),
                            "total {total} out of bounds for ({s},{e},{d},{c})"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_grade_boundaries_are_exact() {
        assert_eq!(Grade::from_score(80.0), Grade::A);
        assert_eq!(Grade::from_score(79.99), Grade::B);
        assert_eq!(Grade::from_score(60.0), Grade::B);
        assert_eq!(Grade::from_score(59.99), Grade::C);
        assert_eq!(Grade::from_score(40.0), Grade::C);
        assert_eq!(Grade::from_score(39.99), Grade::D);
        assert_eq!(Grade::from_score(0.0), Grade::D);
        assert_eq!(Grade::from_score(100.0), Grade::A);
    }

    #[test]
    fn test_grade_serializes_as_letter() {
        assert_eq!(serde_json::to_string(&Grade::A).unwrap(), "\"A\"");
        assert_eq!(Grade::B.to_string(), "B");
    }
}
