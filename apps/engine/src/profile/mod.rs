//! Resume intelligence facade: one structured candidate record per
//! document, plus batch processing with partial-failure tolerance.

pub mod entities;
pub mod sections;
pub mod skills;

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::errors::EngineError;
use crate::extract;

pub use entities::ContactDetails;
pub use skills::{SkillCategory, SkillCounts, SkillProfile};

/// The structured output of parsing one resume document. Created once
/// per parse call and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub source_path: String,
    pub raw_text: String,
    pub entities: ContactDetails,
    pub skills: SkillProfile,
    pub sections: BTreeMap<String, usize>,
    pub summary: CandidateSummary,
}

/// Compact projection of a candidate, derived at parse time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CandidateSummary {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub total_technical_skills: usize,
    pub total_soft_skills: usize,
    pub has_linkedin: bool,
    pub has_github: bool,
}

impl CandidateSummary {
    fn derive(entities: &ContactDetails, skills: &SkillProfile) -> Self {
        let counts = skills.counts();
        Self {
            name: entities.name.clone(),
            email: entities.email.clone(),
            phone: entities.phone.clone(),
            total_technical_skills: counts.technical,
            total_soft_skills: counts.soft,
            has_linkedin: entities.linkedin.is_some(),
            has_github: entities.github.is_some(),
        }
    }
}

/// A document dropped from a batch, with the recorded reason.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParseFailure {
    pub source_path: String,
    pub reason: String,
}

/// Result of a batch run: the profiles that parsed plus the documents
/// that were dropped.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BatchOutcome {
    pub profiles: Vec<CandidateProfile>,
    pub failures: Vec<ParseFailure>,
}

/// Runs the complete pipeline for one document: extract, then entity,
/// skill, and section extraction.
pub fn process_resume(path: &Path) -> Result<CandidateProfile, EngineError> {
    let raw_text = extract::parse(path)?;
    let entities = entities::extract(&raw_text);
    let skills = skills::extract(&raw_text);
    let sections = sections::locate(&raw_text);
    let summary = CandidateSummary::derive(&entities, &skills);

    Ok(CandidateProfile {
        source_path: path.display().to_string(),
        raw_text,
        entities,
        skills,
        sections,
        summary,
    })
}

/// Processes a set of documents in order. A document that fails is
/// excluded with a recorded reason; it never aborts the batch. Input
/// order is preserved for the surviving profiles (ranking tie-breaks
/// depend on it).
pub fn process_batch<P: AsRef<Path>>(paths: &[P]) -> BatchOutcome {
    let mut outcome = BatchOutcome::default();

    for path in paths {
        let path = path.as_ref();
        match process_resume(path) {
            Ok(profile) => outcome.profiles.push(profile),
            Err(err) => {
                warn!(path = %path.display(), error = %err, "dropping document from batch");
                outcome.failures.push(ParseFailure {
                    source_path: path.display().to_string(),
                    reason: err.to_string(),
                });
            }
        }
    }

    outcome
}

/// Title-cases a phrase: every alphabetic character that follows a
/// non-alphabetic one is upper-cased, the rest lower-cased.
pub(crate) fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_alphabetic = false;
    for ch in text.chars() {
        if ch.is_alphabetic() {
            if prev_alphabetic {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            prev_alphabetic = true;
        } else {
            out.push(ch);
            prev_alphabetic = false;
        }
    }
    out
}
