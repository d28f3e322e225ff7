//! Section locator: approximate character offsets of standard resume
//! sections, for consumers that want to slice the raw text.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;

pub const SECTION_PATTERNS: &[(&str, &str)] = &[
    ("education", r"education|academic|qualification"),
    ("experience", r"experience|employment|work history"),
    ("skills", r"skills|technical skills|competencies"),
    ("projects", r"projects|portfolio"),
    ("certifications", r"certifications|certificates|licenses"),
];

static MATCHERS: Lazy<Vec<(&'static str, Regex)>> = Lazy::new(|| {
    SECTION_PATTERNS
        .iter()
        .map(|(name, pattern)| (*name, Regex::new(&format!("(?i){pattern}")).unwrap()))
        .collect()
});

/// Returns the offset of the first header match per section. Sections
/// without a match are absent from the map.
pub fn locate(text: &str) -> BTreeMap<String, usize> {
    let mut sections = BTreeMap::new();
    for (name, pattern) in MATCHERS.iter() {
        if let Some(m) = pattern.find(text) {
            sections.insert(name.to_string(), m.start());
        }
    }
    sections
}
