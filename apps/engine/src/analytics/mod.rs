//! Corpus-level analytics: a read-only reducer over ranked candidates.
//!
//! The snapshot schema is fixed and identical for empty and non-empty
//! corpora; an empty input yields zeroed values, never an error.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::config::round2;
use crate::profile::SkillCategory;
use crate::ranking::{Grade, RankedCandidate};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsSnapshot {
    pub overview: Overview,
    pub skills_distribution: SkillsDistribution,
    pub score_distribution: ScoreDistribution,
    pub profile_completeness: CompletenessStats,
    pub top_candidates: Vec<TopCandidate>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Overview {
    pub total_candidates: usize,
    pub avg_score: f64,
    pub max_score: f64,
    pub min_score: f64,
    pub candidates_with_email: usize,
    pub candidates_with_linkedin: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillCount {
    pub skill: String,
    pub count: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillsDistribution {
    pub total_unique_skills: usize,
    /// Top 10 by count, descending; ties keep first-seen order.
    pub top_skills: Vec<SkillCount>,
    /// Candidates with at least one skill in the category.
    pub skill_categories: BTreeMap<SkillCategory, usize>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreDistribution {
    pub a_grade_count: usize,
    pub b_grade_count: usize,
    pub c_grade_count: usize,
    pub d_grade_count: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompletenessStats {
    pub complete_profiles: usize,
    pub incomplete_profiles: usize,
    pub completeness_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopCandidate {
    pub name: String,
    pub score: f64,
    pub grade: Grade,
    pub email: Option<String>,
}

/// Derives the full analytics snapshot from a set of ranked candidates.
pub fn aggregate(candidates: &[RankedCandidate]) -> AnalyticsSnapshot {
    if candidates.is_empty() {
        return AnalyticsSnapshot::default();
    }

    AnalyticsSnapshot {
        overview: overview(candidates),
        skills_distribution: skills_distribution(candidates),
        score_distribution: score_distribution(candidates),
        profile_completeness: completeness(candidates),
        top_candidates: top_candidates(candidates, 5),
    }
}

fn overview(candidates: &[RankedCandidate]) -> Overview {
    let scores: Vec<f64> = candidates.iter().map(|c| c.total_score).collect();
    let sum: f64 = scores.iter().sum();

    Overview {
        total_candidates: candidates.len(),
        avg_score: round2(sum / scores.len() as f64),
        max_score: scores.iter().copied().fold(f64::MIN, f64::max),
        min_score: scores.iter().copied().fold(f64::MAX, f64::min),
        candidates_with_email: candidates
            .iter()
            .filter(|c| c.candidate.entities.email.is_some())
            .count(),
        candidates_with_linkedin: candidates
            .iter()
            .filter(|c| c.candidate.entities.linkedin.is_some())
            .count(),
    }
}

fn skills_distribution(candidates: &[RankedCandidate]) -> SkillsDistribution {
    // First-seen order is the tie-break for the top list, so counting
    // happens in an insertion-ordered vector rather than a map.
    let mut counts: Vec<SkillCount> = Vec::new();
    for candidate in candidates {
        for skill in candidate.candidate.skills.technical_in_category_order() {
            match counts.iter_mut().find(|entry| &entry.skill == skill) {
                Some(entry) => entry.count += 1,
                None => counts.push(SkillCount {
                    skill: skill.clone(),
                    count: 1,
                }),
            }
        }
    }

    let total_unique_skills = counts.len();

    let mut top_skills = counts;
    top_skills.sort_by(|a, b| b.count.cmp(&a.count));
    top_skills.truncate(10);

    let mut skill_categories: BTreeMap<SkillCategory, usize> = BTreeMap::new();
    for candidate in candidates {
        for category in candidate.candidate.skills.technical.keys() {
            *skill_categories.entry(*category).or_insert(0) += 1;
        }
    }

    SkillsDistribution {
        total_unique_skills,
        top_skills,
        skill_categories,
    }
}

fn score_distribution(candidates: &[RankedCandidate]) -> ScoreDistribution {
    let mut distribution = ScoreDistribution::default();
    for candidate in candidates {
        match candidate.grade {
            Grade::A => distribution.a_grade_count += 1,
            Grade::B => distribution.b_grade_count += 1,
            Grade::C => distribution.c_grade_count += 1,
            Grade::D => distribution.d_grade_count += 1,
        }
    }
    distribution
}

/// A profile is complete iff both email and phone are present.
fn completeness(candidates: &[RankedCandidate]) -> CompletenessStats {
    let complete_profiles = candidates
        .iter()
        .filter(|c| {
            c.candidate.entities.email.is_some() && c.candidate.entities.phone.is_some()
        })
        .count();

    CompletenessStats {
        complete_profiles,
        incomplete_profiles: candidates.len() - complete_profiles,
        completeness_rate: round2(complete_profiles as f64 / candidates.len() as f64 * 100.0),
    }
}

fn top_candidates(candidates: &[RankedCandidate], n: usize) -> Vec<TopCandidate> {
    let mut sorted: Vec<&RankedCandidate> = candidates.iter().collect();
    sorted.sort_by(|a, b| b.total_score.total_cmp(&a.total_score));

    sorted
        .into_iter()
        .take(n)
        .map(|c| TopCandidate {
            name: c.name.clone().unwrap_or_else(|| "Unknown".to_string()),
            score: c.total_score,
            grade: c.grade,
            email: c.email.clone(),
        })
        .collect()
}
