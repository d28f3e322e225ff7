//! Plain-text extraction with an ordered encoding fallback chain.

use std::fs;
use std::path::Path;

use encoding_rs::Encoding;

use crate::errors::EngineError;

/// Encodings attempted in order; the first strict decode wins.
pub static ENCODING_ATTEMPTS: &[(&str, &Encoding)] = &[
    ("utf-8", encoding_rs::UTF_8),
    ("windows-1252", encoding_rs::WINDOWS_1252),
];

pub fn extract(path: &Path) -> Result<String, EngineError> {
    let bytes = fs::read(path)?;
    decode(&bytes)
}

pub(crate) fn decode(bytes: &[u8]) -> Result<String, EngineError> {
    for (_, encoding) in ENCODING_ATTEMPTS {
        if let Some(text) = encoding.decode_without_bom_handling_and_without_replacement(bytes) {
            return Ok(text.into_owned());
        }
    }

    Err(EngineError::Decode {
        attempted: ENCODING_ATTEMPTS.iter().map(|(name, _)| *name).collect(),
    })
}
