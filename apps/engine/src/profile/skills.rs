//! Skill extraction against a fixed taxonomy.
//!
//! Matching is dictionary presence with word boundaries, not NLP. The
//! taxonomy tables are process-wide constants; the compiled matchers
//! are built once and shared read-only.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::profile::title_case;

/// Technical skill categories. `Ord` follows declaration order, which
/// keeps flattened skill lists in taxonomy order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum SkillCategory {
    Programming,
    Web,
    Database,
    Cloud,
    MlAi,
    Tools,
}

pub const TECHNICAL_TAXONOMY: &[(SkillCategory, &[&str])] = &[
    (
        SkillCategory::Programming,
        &[
            "python", "java", "javascript", "c++", "c#", "ruby", "php", "go", "rust", "swift",
            "kotlin", "typescript", "scala", "r", "matlab", "perl",
        ],
    ),
    (
        SkillCategory::Web,
        &[
            "html", "css", "react", "angular", "vue", "nodejs", "django", "flask", "fastapi",
            "express", "nextjs", "nuxt", "svelte", "bootstrap", "tailwind",
        ],
    ),
    (
        SkillCategory::Database,
        &[
            "sql", "mysql", "postgresql", "mongodb", "redis", "oracle", "sqlite", "dynamodb",
            "cassandra", "elasticsearch", "mariadb",
        ],
    ),
    (
        SkillCategory::Cloud,
        &[
            "aws", "azure", "gcp", "docker", "kubernetes", "terraform", "jenkins", "ansible",
            "cloudformation", "lambda", "ec2", "s3",
        ],
    ),
    (
        SkillCategory::MlAi,
        &[
            "machine learning", "deep learning", "tensorflow", "pytorch", "keras",
            "scikit-learn", "nlp", "computer vision", "opencv", "pandas", "numpy",
        ],
    ),
    (
        SkillCategory::Tools,
        &[
            "git", "github", "gitlab", "jira", "confluence", "slack", "vscode", "jupyter",
            "postman", "swagger", "linux", "bash",
        ],
    ),
];

pub const SOFT_SKILLS: &[&str] = &[
    "leadership", "communication", "teamwork", "problem solving", "analytical",
    "critical thinking", "time management", "adaptability", "creativity", "collaboration",
    "presentation", "negotiation", "project management",
];

/// Per-term matchers: the term escaped with boundaries on both ends, so
/// multi-word and symbol terms must appear exactly as a phrase.
static TECHNICAL_MATCHERS: Lazy<Vec<(SkillCategory, Vec<(&'static str, Regex)>)>> =
    Lazy::new(|| {
        TECHNICAL_TAXONOMY
            .iter()
            .map(|(category, terms)| {
                (
                    *category,
                    terms.iter().map(|t| (*t, boundary_regex(t))).collect(),
                )
            })
            .collect()
    });

static SOFT_MATCHERS: Lazy<Vec<(&'static str, Regex)>> =
    Lazy::new(|| SOFT_SKILLS.iter().map(|t| (*t, boundary_regex(t))).collect());

fn boundary_regex(term: &str) -> Regex {
    Regex::new(&format!(r"\b{}\b", regex::escape(term))).unwrap()
}

/// Skills found in one resume: technical matches grouped by category
/// (categories present only when non-empty) plus a flat soft list.
/// Labels are title-cased, deduplicated, and sorted within each bucket.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillProfile {
    pub technical: BTreeMap<SkillCategory, Vec<String>>,
    pub soft: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillCounts {
    pub technical: usize,
    pub soft: usize,
    pub total: usize,
}

impl SkillProfile {
    /// All technical skills flattened into one deduplicated sorted list.
    pub fn all_technical(&self) -> Vec<String> {
        let mut skills: Vec<String> = self.technical.values().flatten().cloned().collect();
        skills.sort();
        skills.dedup();
        skills
    }

    /// Technical skills in taxonomy category order, without resorting.
    pub fn technical_in_category_order(&self) -> impl Iterator<Item = &String> {
        self.technical.values().flatten()
    }

    pub fn counts(&self) -> SkillCounts {
        let technical = self.technical.values().map(Vec::len).sum();
        let soft = self.soft.len();
        SkillCounts {
            technical,
            soft,
            total: technical + soft,
        }
    }
}

/// Extracts all skills from resume text.
pub fn extract(text: &str) -> SkillProfile {
    let lower = text.to_lowercase();

    let mut technical = BTreeMap::new();
    for (category, matchers) in TECHNICAL_MATCHERS.iter() {
        let mut found: Vec<String> = matchers
            .iter()
            .filter(|(_, pattern)| pattern.is_match(&lower))
            .map(|(term, _)| title_case(term))
            .collect();
        found.sort();
        found.dedup();
        if !found.is_empty() {
            technical.insert(*category, found);
        }
    }

    let mut soft: Vec<String> = SOFT_MATCHERS
        .iter()
        .filter(|(_, pattern)| pattern.is_match(&lower))
        .map(|(term, _)| title_case(term))
        .collect();
    soft.sort();
    soft.dedup();

    SkillProfile { technical, soft }
}
