//! End-to-end pipeline tests over real files on disk.

use std::io::Write;
use std::path::PathBuf;

use engine::profile::SkillCategory;
use engine::ranking::Grade;
use engine::{EngineError, JobRequirements, RankingEngine};

fn write_resume(dir: &tempfile::TempDir, name: &str, body: &str) -> PathBuf {
    let path = dir.path().join(name);
    let mut f = std::fs::File::create(&path).unwrap();
    f.write_all(body.as_bytes()).unwrap();
    path
}

const JOHN: &str = "John Smith\njohn.smith@email.com\n+1-555-123-4567\nPython, Java, AWS, Docker\n";

#[test]
fn parse_extracts_entities_skills_and_sections() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_resume(&dir, "john.txt", JOHN);

    let profile = engine::process_resume(&path).unwrap();

    assert_eq!(profile.entities.name.as_deref(), Some("John Smith"));
    assert_eq!(profile.entities.email.as_deref(), Some("john.smith@email.com"));
    assert_eq!(profile.entities.phone.as_deref(), Some("15551234567"));
    assert_eq!(profile.entities.linkedin, None);
    assert_eq!(profile.entities.github, None);

    assert_eq!(
        profile.skills.technical.get(&SkillCategory::Programming),
        Some(&vec!["Java".to_string(), "Python".to_string()])
    );
    assert_eq!(
        profile.skills.technical.get(&SkillCategory::Cloud),
        Some(&vec!["Aws".to_string(), "Docker".to_string()])
    );
    assert!(profile.skills.soft.is_empty());
}

#[test]
fn unsupported_extension_fails_with_typed_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_resume(&dir, "data.csv", "a,b,c");

    let err = engine::process_resume(&path).unwrap_err();
    match err {
        EngineError::UnsupportedFormat {
            extension,
            supported,
        } => {
            assert_eq!(extension, ".csv");
            assert_eq!(supported, &[".pdf", ".docx", ".txt"]);
        }
        other => panic!("expected UnsupportedFormat, got {other:?}"),
    }
}

#[test]
fn batch_then_rank_then_aggregate() {
    let dir = tempfile::tempdir().unwrap();
    let strong = write_resume(
        &dir,
        "strong.txt",
        "Jane Doe\njane.doe@corp.io\n(555) 987-6543\nlinkedin.com/in/janedoe\n\n\
         EXPERIENCE\n8 years experience, led and managed teams, developed services in \
         Python and Docker on AWS.\n\nEDUCATION\nMaster degree, State University\n",
    );
    let weak = write_resume(&dir, "weak.txt", "short note, no details\n");
    let broken = dir.path().join("missing.txt");

    let outcome = engine::process_batch(&[strong, weak, broken]);
    assert_eq!(outcome.profiles.len(), 2);
    assert_eq!(outcome.failures.len(), 1);

    let requirements = JobRequirements {
        required_skills: ["Python", "Docker"].iter().map(|s| s.to_string()).collect(),
        min_experience: 2.0,
    };
    let ranked = RankingEngine::new()
        .rank(&outcome.profiles, &requirements)
        .unwrap();

    assert_eq!(ranked.len(), 2);
    assert!(ranked[0].id.ends_with("strong.txt"));
    assert!(ranked[0].total_score > ranked[1].total_score);
    assert_eq!(ranked[0].breakdown.skills_match, 100.0);

    let snapshot = engine::aggregate(&ranked);
    assert_eq!(snapshot.overview.total_candidates, 2);
    assert_eq!(snapshot.overview.candidates_with_email, 1);
    assert_eq!(snapshot.overview.candidates_with_linkedin, 1);
    assert_eq!(snapshot.profile_completeness.complete_profiles, 1);
    assert_eq!(snapshot.profile_completeness.completeness_rate, 50.0);
    assert_eq!(snapshot.top_candidates[0].name, "Jane Doe");
}

#[test]
fn empty_corpus_ranks_and_aggregates_to_zero() {
    let ranked = RankingEngine::new()
        .rank(&[], &JobRequirements::default())
        .unwrap();
    assert!(ranked.is_empty());

    let snapshot = engine::aggregate(&ranked);
    assert_eq!(snapshot.overview.total_candidates, 0);
    assert_eq!(snapshot.overview.avg_score, 0.0);
    assert!(snapshot.top_candidates.is_empty());
}

#[test]
fn match_to_job_prefers_description_overlap() {
    let dir = tempfile::tempdir().unwrap();
    let pythonista = write_resume(
        &dir,
        "pythonista.txt",
        "python python python python python python python python python python\n",
    );
    let other = write_resume(&dir, "other.txt", "florist with retail background\n");

    let outcome = engine::process_batch(&[other, pythonista]);
    let records = RankingEngine::new()
        .match_to_job(
            &outcome.profiles,
            "python developer",
            &JobRequirements::default(),
        )
        .unwrap();

    assert_eq!(records.len(), 2);
    assert!(records[0].id.ends_with("pythonista.txt"));
    assert!(records[0].similarity_score > records[1].similarity_score);
    for record in &records {
        // combined_score is the rounded 50/50 blend.
        let expected = ((record.similarity_score * 0.5 + record.requirements_score * 0.5)
            * 100.0)
            .round()
            / 100.0;
        assert_eq!(record.combined_score, expected);
    }
}

#[test]
fn docx_roundtrip_through_full_pipeline() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("jane.docx");

    let xml = concat!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
        r#"<w:document><w:body>"#,
        r#"<w:p><w:r><w:t>Jane Doe</w:t></w:r></w:p>"#,
        r#"<w:p><w:r><w:t>jane.doe@corp.io</w:t></w:r></w:p>"#,
        r#"<w:tbl><w:tr>"#,
        r#"<w:tc><w:p><w:r><w:t>Python</w:t></w:r></w:p></w:tc>"#,
        r#"<w:tc><w:p><w:r><w:t>Docker</w:t></w:r></w:p></w:tc>"#,
        r#"</w:tr></w:tbl>"#,
        r#"</w:body></w:document>"#,
    );

    let file = std::fs::File::create(&path).unwrap();
    let mut writer = zip::ZipWriter::new(file);
    writer
        .start_file("word/document.xml", zip::write::FileOptions::default())
        .unwrap();
    writer.write_all(xml.as_bytes()).unwrap();
    writer.finish().unwrap();

    let profile = engine::process_resume(&path).unwrap();
    assert!(!profile.raw_text.is_empty());
    assert_eq!(profile.entities.name.as_deref(), Some("Jane Doe"));
    assert_eq!(profile.entities.email.as_deref(), Some("jane.doe@corp.io"));
    // Table cells land after the paragraphs, space-joined per row.
    assert!(profile.raw_text.ends_with("Python Docker"));
    assert!(profile
        .skills
        .technical
        .values()
        .flatten()
        .any(|s| s == "Python"));
}

#[test]
fn grades_cover_score_bands() {
    assert_eq!(Grade::from_score(80.0), Grade::A);
    assert_eq!(Grade::from_score(79.99), Grade::B);
    assert_eq!(Grade::from_score(59.99), Grade::C);
    assert_eq!(Grade::from_score(39.99), Grade::D);
}
