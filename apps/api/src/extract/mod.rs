//! Document Text Extractor — converts an uploaded PDF or DOCX payload into
//! plain text.
//!
//! Parser failures are swallowed at this layer: logged and returned as an
//! empty string, never raised. The scan pipeline treats empty text as a
//! client error before any model call is made.

use std::io::{Cursor, Read};

use regex::Regex;
use tracing::error;

/// Supported upload formats, keyed by filename suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Docx,
}

impl DocumentKind {
    /// Case-insensitive suffix dispatch. Anything but `.pdf` / `.docx` is
    /// unsupported and must be rejected by the caller.
    pub fn from_filename(filename: &str) -> Option<Self> {
        let lower = filename.to_lowercase();
        if lower.ends_with(".pdf") {
            Some(DocumentKind::Pdf)
        } else if lower.ends_with(".docx") {
            Some(DocumentKind::Docx)
        } else {
            None
        }
    }
}

/// Extracts plain text from the payload with the parser matching `kind`.
pub fn extract_text(kind: DocumentKind, payload: &[u8]) -> String {
    match kind {
        DocumentKind::Pdf => extract_pdf(payload),
        DocumentKind::Docx => extract_docx(payload),
    }
}

fn extract_pdf(payload: &[u8]) -> String {
    match pdf_extract::extract_text_from_mem(payload) {
        Ok(text) => text,
        Err(e) => {
            error!("Error reading PDF: {e}");
            String::new()
        }
    }
}

fn extract_docx(payload: &[u8]) -> String {
    match read_document_xml(payload) {
        Ok(xml) => document_xml_to_text(&xml),
        Err(e) => {
            error!("Error reading DOCX: {e}");
            String::new()
        }
    }
}

/// A DOCX file is a ZIP container; the document body lives in
/// `word/document.xml`.
fn read_document_xml(payload: &[u8]) -> Result<String, String> {
    let cursor = Cursor::new(payload);
    let mut archive =
        zip::ZipArchive::new(cursor).map_err(|e| format!("Failed to open container: {e}"))?;
    let mut entry = archive
        .by_name("word/document.xml")
        .map_err(|e| format!("Missing document body: {e}"))?;

    let mut xml = String::new();
    entry
        .read_to_string(&mut xml)
        .map_err(|e| format!("Failed to read document body: {e}"))?;
    Ok(xml)
}

/// Flattens WordprocessingML into plain text: paragraph and break tags become
/// newlines, tab marks become tabs, remaining tags are stripped, and the
/// basic XML entities are decoded. Blank lines are dropped.
fn document_xml_to_text(xml: &str) -> String {
    let text = xml
        .replace("</w:p>", "\n")
        .replace("<w:br/>", "\n")
        .replace("<w:tab/>", "\t");

    let tag = Regex::new(r"<[^>]*>").expect("tag pattern is valid");
    let stripped = tag.replace_all(&text, "");

    let decoded = stripped
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&");

    let lines: Vec<&str> = decoded
        .lines()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .collect();

    lines.join("\n")
}

/// Builds a minimal in-memory DOCX payload, one `<w:p>` per paragraph.
#[cfg(test)]
pub(crate) fn docx_fixture(paragraphs: &[&str]) -> Vec<u8> {
    use std::io::Write;

    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    writer
        .start_file("word/document.xml", zip::write::SimpleFileOptions::default())
        .unwrap();

    let body: String = paragraphs
        .iter()
        .map(|p| format!("<w:p><w:r><w:t>{p}</w:t></w:r></w:p>"))
        .collect();
    write!(
        writer,
        r#"<?xml version="1.0" encoding="UTF-8"?><w:document><w:body>{body}</w:body></w:document>"#
    )
    .unwrap();

    writer.finish().unwrap().into_inner()
}
