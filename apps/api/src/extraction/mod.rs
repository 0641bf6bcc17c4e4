//! Best-effort plain-text extraction from uploaded resume files.
//!
//! This layer never fails: a corrupt, unsupported or unreadable file comes
//! back as an empty string, which downstream scoring treats as valid
//! zero-length input.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use once_cell::sync::Lazy;
use quick_xml::events::Event;
use quick_xml::Reader;
use regex::Regex;

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid regex"));
static DISALLOWED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\w\s.,\-()@#+]").expect("valid regex"));

/// Extracts cleaned text from the file at `path`, dispatching on its
/// extension. Unsupported extensions and all failure paths yield "".
pub fn extract_text(path: &Path) -> String {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default();

    let raw = match extension.as_str() {
        "pdf" => extract_pdf(path),
        // legacy binary .doc is not a zip container; it degrades to ""
        "docx" | "doc" => extract_docx(path),
        _ => String::new(),
    };

    clean_text(&raw)
}

fn extract_pdf(path: &Path) -> String {
    match pdf_extract::extract_text(path) {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!("pdf extraction failed for {}: {e}", path.display());
            String::new()
        }
    }
}

fn extract_docx(path: &Path) -> String {
    match try_extract_docx(path) {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!("docx extraction failed for {}: {e}", path.display());
            String::new()
        }
    }
}

/// Reads `word/document.xml` out of the OOXML container and collects its
/// text nodes, with a newline at each paragraph end.
fn try_extract_docx(path: &Path) -> anyhow::Result<String> {
    let file = File::open(path)?;
    let mut archive = zip::ZipArchive::new(BufReader::new(file))?;
    let mut document = archive.by_name("word/document.xml")?;
    let mut xml = String::new();
    document.read_to_string(&mut xml)?;
    Ok(document_xml_text(&xml))
}

fn document_xml_text(xml: &str) -> String {
    let mut reader = Reader::from_reader(xml.as_bytes());
    let mut text = String::new();
    let mut buf = Vec::new();
    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Text(fragment)) => {
                if let Ok(value) = fragment.unescape() {
                    text.push_str(&value);
                }
            }
            Ok(Event::End(element)) if element.name().as_ref() == b"w:p" => text.push('\n'),
            Ok(Event::Eof) => break,
            // a malformed document still yields whatever was collected
            Err(_) => break,
            _ => {}
        }
        buf.clear();
    }
    text
}

/// Collapses whitespace runs, drops characters outside the retained set
/// (word characters plus `.,-()@#+`), and trims the ends.
pub fn clean_text(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    let collapsed = WHITESPACE_RUN.replace_all(text, " ");
    let cleaned = DISALLOWED.replace_all(&collapsed, "");
    cleaned.trim().to_string()
}
