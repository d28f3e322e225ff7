//! Batch screening tool: walks a directory of resumes, runs the
//! pipeline, ranks the candidates, and writes a JSON report.

use std::collections::BTreeSet;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::Parser;
use serde::Serialize;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use walkdir::WalkDir;

use engine::analytics::AnalyticsSnapshot;
use engine::extract::SUPPORTED_EXTENSIONS;
use engine::profile::ParseFailure;
use engine::ranking::{JobMatchRecord, JobRequirements, RankedCandidate, RankingEngine};

#[derive(Debug, Parser)]
#[command(name = "screener", about = "Batch resume screening")]
struct Args {
    /// Directory searched recursively for resume files.
    #[arg(long)]
    resumes: PathBuf,

    /// Optional file holding the job description to match against.
    #[arg(long)]
    job_description: Option<PathBuf>,

    /// Required skill, repeatable (e.g. --required-skill Python).
    #[arg(long = "required-skill")]
    required_skills: Vec<String>,

    /// Minimum years of experience to record with the requirements.
    #[arg(long, default_value_t = 0.0)]
    min_experience: f64,

    /// Process at most this many documents.
    #[arg(long)]
    limit: Option<usize>,

    /// Report destination; stdout when omitted.
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct Report {
    generated_at: DateTime<Utc>,
    processed: usize,
    dropped: Vec<ParseFailure>,
    ranked: Vec<RankedCandidate>,
    matched: Option<Vec<JobMatchRecord>>,
    analytics: AnalyticsSnapshot,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    let mut paths: Vec<PathBuf> = WalkDir::new(&args.resumes)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| {
            path.extension()
                .map(|e| format!(".{}", e.to_string_lossy().to_lowercase()))
                .is_some_and(|ext| SUPPORTED_EXTENSIONS.contains(&ext.as_str()))
        })
        .collect();

    if let Some(limit) = args.limit {
        paths.truncate(limit);
    }

    if paths.is_empty() {
        warn!(dir = %args.resumes.display(), "no resume files found");
    } else {
        info!(count = paths.len(), "processing resumes");
    }

    let outcome = engine::process_batch(&paths);
    info!(
        parsed = outcome.profiles.len(),
        dropped = outcome.failures.len(),
        "batch complete"
    );

    let requirements = JobRequirements {
        required_skills: args.required_skills.iter().cloned().collect::<BTreeSet<_>>(),
        min_experience: args.min_experience,
    };

    let ranking = RankingEngine::new();
    let ranked = ranking.rank(&outcome.profiles, &requirements)?;

    let matched = match &args.job_description {
        Some(path) => {
            let description = std::fs::read_to_string(path)
                .with_context(|| format!("reading job description {}", path.display()))?;
            Some(ranking.match_to_job(&outcome.profiles, &description, &requirements)?)
        }
        None => None,
    };

    let analytics = engine::aggregate(&ranked);

    let report = Report {
        generated_at: Utc::now(),
        processed: outcome.profiles.len(),
        dropped: outcome.failures,
        ranked,
        matched,
        analytics,
    };

    let json = serde_json::to_string_pretty(&report)?;
    match &args.output {
        Some(path) => {
            std::fs::write(path, json)
                .with_context(|| format!("writing report to {}", path.display()))?;
            info!(path = %path.display(), "report written");
        }
        None => println!("{json}"),
    }

    Ok(())
}
