//! PDF extraction with a two-stage fallback chain.
//!
//! Primary: whole-document text via `pdf-extract`. Fallback: page by
//! page via `lopdf`, skipping pages that fail individually. If both
//! stages produce nothing the document degrades to an empty string
//! with a warning; extraction never aborts the pipeline.

use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::errors::EngineError;

pub fn extract(path: &Path) -> Result<String, EngineError> {
    let bytes = fs::read(path)?;

    let text = match primary(&bytes) {
        Ok(text) => text,
        Err(err) => {
            debug!(path = %path.display(), error = %err, "primary PDF extraction failed, trying page-by-page fallback");
            fallback(&bytes)
        }
    };

    if text.trim().is_empty() {
        warn!(path = %path.display(), "PDF extraction produced no text");
    }

    Ok(text)
}

fn primary(bytes: &[u8]) -> Result<String, pdf_extract::OutputError> {
    pdf_extract::extract_text_from_mem(bytes)
}

/// Accumulates whatever pages decode; a page that errors contributes
/// nothing instead of failing the document.
fn fallback(bytes: &[u8]) -> String {
    let doc = match lopdf::Document::load_mem(bytes) {
        Ok(doc) => doc,
        Err(_) => return String::new(),
    };

    let mut text = String::new();
    for page_number in doc.get_pages().keys() {
        if let Ok(page_text) = doc.extract_text(&[*page_number]) {
            if !page_text.trim().is_empty() {
                text.push_str(&page_text);
                text.push('\n');
            }
        }
    }
    text
}
