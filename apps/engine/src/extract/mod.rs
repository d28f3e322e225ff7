//! Document extraction: turns resume files into normalized plain text.
//!
//! Dispatch is by file extension over a closed set of formats. Each
//! strategy degrades rather than aborts where the source allows it
//! (see `pdf`); normalization is applied uniformly afterwards.

mod docx;
mod pdf;
mod text;

use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::EngineError;

pub use text::ENCODING_ATTEMPTS;

/// The closed set of supported resume file extensions.
pub const SUPPORTED_EXTENSIONS: &[&str] = &[".pdf", ".docx", ".txt"];

/// Extraction strategy, selected by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DocumentFormat {
    Pdf,
    Docx,
    Txt,
}

impl DocumentFormat {
    fn from_extension(ext: &str) -> Option<Self> {
        match ext {
            ".pdf" => Some(Self::Pdf),
            ".docx" => Some(Self::Docx),
            ".txt" => Some(Self::Txt),
            _ => None,
        }
    }
}

/// Parses a resume file and returns cleaned, normalized text.
///
/// Fails with `NotFound` for a missing file and `UnsupportedFormat`
/// for an extension outside [`SUPPORTED_EXTENSIONS`].
pub fn parse(path: &Path) -> Result<String, EngineError> {
    if !path.exists() {
        return Err(EngineError::NotFound(path.display().to_string()));
    }

    let extension = path
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy().to_lowercase()))
        .unwrap_or_default();

    let format = DocumentFormat::from_extension(&extension).ok_or(
        EngineError::UnsupportedFormat {
            extension,
            supported: SUPPORTED_EXTENSIONS,
        },
    )?;

    let raw = match format {
        DocumentFormat::Pdf => pdf::extract(path)?,
        DocumentFormat::Docx => docx::extract(path)?,
        DocumentFormat::Txt => text::extract(path)?,
    };

    Ok(normalize(&raw))
}

static MULTI_SPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r" {2,}").unwrap());
static MULTI_NEWLINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{3,}").unwrap());
// Word characters, whitespace, and the resume punctuation set survive;
// everything else is stripped.
static DISALLOWED: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s@.,+()#:/-]").unwrap());

/// Normalizes extracted text: unified line breaks, collapsed runs of
/// spaces and newlines, stripped control/noise characters, trimmed.
pub fn normalize(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let text = text.replace("\r\n", "\n").replace('\r', "\n");
    let text = MULTI_SPACE.replace_all(&text, " ");
    let text = MULTI_NEWLINE.replace_all(&text, "\n\n");
    let text = DISALLOWED.replace_all(&text, "");

    text.trim().to_string()
}
