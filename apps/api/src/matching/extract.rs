//! Document text extraction for uploaded PDF and DOCX resumes.

use std::fmt;
use std::str::FromStr;

use bytes::Bytes;
use docx_rs::{DocumentChild, InsertChild, ParagraphChild, Run, RunChild};
use lopdf::Document;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("unsupported document format '{0}'")]
    UnsupportedFormat(String),

    #[error("document could not be read: {0}")]
    Malformed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    Docx,
}

impl DocumentFormat {
    /// Maps a filename to a format by the text after its last dot.
    pub fn from_filename(filename: &str) -> Result<Self, ExtractError> {
        match filename.rsplit_once('.') {
            Some((_, extension)) => extension.parse(),
            None => Err(ExtractError::UnsupportedFormat(filename.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentFormat::Pdf => "pdf",
            DocumentFormat::Docx => "docx",
        }
    }
}

impl FromStr for DocumentFormat {
    type Err = ExtractError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag.to_ascii_lowercase().as_str() {
            "pdf" => Ok(DocumentFormat::Pdf),
            "docx" => Ok(DocumentFormat::Docx),
            _ => Err(ExtractError::UnsupportedFormat(tag.to_string())),
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw upload plus its declared format. Lives for a single request.
#[derive(Debug, Clone)]
pub struct UploadedDocument {
    pub bytes: Bytes,
    pub format: DocumentFormat,
}

impl UploadedDocument {
    pub fn new(bytes: impl Into<Bytes>, format: DocumentFormat) -> Self {
        Self {
            bytes: bytes.into(),
            format,
        }
    }

    /// Builds a document from a free-form format tag such as `"pdf"`.
    #[cfg(test)]
    pub fn from_tag(bytes: impl Into<Bytes>, tag: &str) -> Result<Self, ExtractError> {
        Ok(Self::new(bytes, tag.parse()?))
    }
}

/// Extracts plain text. An empty string is a valid result (e.g. a scanned PDF).
pub fn extract(document: &UploadedDocument) -> Result<String, ExtractError> {
    match document.format {
        DocumentFormat::Pdf => extract_pdf(&document.bytes),
        DocumentFormat::Docx => extract_docx(&document.bytes),
    }
}

/// Page-by-page extraction. A page that fails contributes an empty string.
fn extract_pdf(data: &[u8]) -> Result<String, ExtractError> {
    let doc = Document::load_mem(data)
        .map_err(|e| ExtractError::Malformed(format!("invalid PDF: {e}")))?;

    let pages: Vec<String> = doc
        .get_pages()
        .keys()
        .map(|&page_number| match doc.extract_text(&[page_number]) {
            Ok(text) => text,
            Err(e) => {
                warn!(page = page_number, "PDF page text extraction failed: {e}");
                String::new()
            }
        })
        .collect();

    debug!(pages = pages.len(), "PDF pages extracted");

    if !pages.is_empty() && pages.iter().all(|page| page.trim().is_empty()) {
        return Ok(extract_pdf_whole(data));
    }

    Ok(pages.join("\n"))
}

/// Whole-document pass with pdf-extract, used when per-page extraction found
/// nothing. Its font handling recovers text from some encodings lopdf cannot.
fn extract_pdf_whole(data: &[u8]) -> String {
    match pdf_extract::extract_text_from_mem(data) {
        Ok(text) => text,
        Err(e) => {
            debug!("pdf-extract found no text either: {e}");
            String::new()
        }
    }
}

/// Paragraph texts in document order, joined by newline.
fn extract_docx(data: &[u8]) -> Result<String, ExtractError> {
    let docx = docx_rs::read_docx(data)
        .map_err(|e| ExtractError::Malformed(format!("invalid DOCX: {e}")))?;

    let paragraphs: Vec<String> = docx
        .document
        .children
        .iter()
        .filter_map(|child| match child {
            DocumentChild::Paragraph(paragraph) => {
                let mut text = String::new();
                push_paragraph_text(&mut text, &paragraph.children);
                Some(text)
            }
            _ => None,
        })
        .collect();

    debug!(paragraphs = paragraphs.len(), "DOCX paragraphs extracted");
    Ok(paragraphs.join("\n"))
}

/// Visible text of a paragraph, including hyperlinked and tracked-inserted runs.
fn push_paragraph_text(text: &mut String, children: &[ParagraphChild]) {
    for child in children {
        match child {
            ParagraphChild::Run(run) => push_run_text(text, run),
            ParagraphChild::Hyperlink(link) => push_paragraph_text(text, &link.children),
            ParagraphChild::Insert(insert) => {
                for insert_child in &insert.children {
                    if let InsertChild::Run(run) = insert_child {
                        push_run_text(text, run);
                    }
                }
            }
            _ => {}
        }
    }
}

fn push_run_text(text: &mut String, run: &Run) {
    for run_child in &run.children {
        match run_child {
            RunChild::Text(t) => text.push_str(&t.text),
            RunChild::Tab(_) => text.push('\t'),
            _ => {}
        }
    }
}
