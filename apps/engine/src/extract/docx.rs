//! DOCX extraction: body paragraphs in document order, then table
//! contents flattened row by row after all paragraphs.
//!
//! A .docx file is a zip archive; the text lives in
//! `word/document.xml`. The markup is thin enough that regex capture
//! of `w:t` runs covers it; nested tables are not supported.

use std::fs;
use std::io::Read;
use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::EngineError;

static TABLE_BLOCK: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<w:tbl[ >].*?</w:tbl>").unwrap());
static TEXT_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"<w:t[^>]*>([^<]*)</w:t>").unwrap());

pub fn extract(path: &Path) -> Result<String, EngineError> {
    let file = fs::File::open(path)?;
    let mut archive = zip::ZipArchive::new(file).map_err(invalid_archive)?;

    let mut xml = String::new();
    archive
        .by_name("word/document.xml")
        .map_err(invalid_archive)?
        .read_to_string(&mut xml)?;

    Ok(document_text(&xml))
}

fn invalid_archive(err: zip::result::ZipError) -> EngineError {
    EngineError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, err))
}

fn document_text(xml: &str) -> String {
    let table_blocks: Vec<&str> = TABLE_BLOCK.find_iter(xml).map(|m| m.as_str()).collect();
    let body = TABLE_BLOCK.replace_all(xml, "");

    let mut parts: Vec<String> = Vec::new();

    // Body-level paragraphs, in document order.
    for paragraph in body.split("</w:p>") {
        let text = runs_text(paragraph);
        let text = text.trim();
        if !text.is_empty() {
            parts.push(text.to_string());
        }
    }

    // Tables afterwards: each row's non-empty cells space-joined.
    for block in table_blocks {
        for row in block.split("</w:tr>") {
            let cells: Vec<String> = row
                .split("</w:tc>")
                .map(runs_text)
                .map(|cell| cell.trim().to_string())
                .filter(|cell| !cell.is_empty())
                .collect();
            if !cells.is_empty() {
                parts.push(cells.join(" "));
            }
        }
    }

    parts.join("\n")
}

fn runs_text(fragment: &str) -> String {
    TEXT_RUN
        .captures_iter(fragment)
        .map(|caps| unescape(&caps[1]))
        .collect::<Vec<_>>()
        .join("")
}

fn unescape(text: &str) -> String {
    text.replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
}
