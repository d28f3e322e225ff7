//! Candidate ranking and resume intelligence pipeline.
//!
//! Raw documents flow one direction: file -> text extraction ->
//! entity/skill/section extraction -> candidate profile -> scoring and
//! matching -> ranked lists -> analytics. Every stage after extraction
//! is a pure function of its inputs; callers own persistence, serving,
//! and caching.

pub mod analytics;
pub mod config;
pub mod errors;
pub mod extract;
pub mod profile;
pub mod ranking;

pub use analytics::{aggregate, AnalyticsSnapshot};
pub use config::ScoringWeights;
pub use errors::EngineError;
pub use profile::{
    process_batch, process_resume, BatchOutcome, CandidateProfile, ContactDetails, ParseFailure,
    SkillCategory, SkillProfile,
};
pub use ranking::{
    Grade, JobMatchRecord, JobRequirements, RankedCandidate, RankingEngine, ScoreBreakdown,
    ScoreResult,
};
