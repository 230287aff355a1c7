//! Document text extraction for supported formats.

use std::path::Path;

use vitascan_core::{Error, Result};

/// Supported document types for text extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    Pdf,
    PlainText,
    Unknown,
}

impl FileType {
    /// Detect file type from extension.
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "pdf" => Self::Pdf,
            "txt" | "md" | "text" => Self::PlainText,
            _ => Self::Unknown,
        }
    }
}

/// External document-decoding capability: given a path, produce the flat
/// extracted text. Page concatenation and byte decoding happen behind this
/// seam; callers never see page structure.
pub trait TextExtractor: Send + Sync {
    fn extract(&self, path: &Path) -> Result<String>;
}

/// Extension-dispatching extractor: PDFs through `pdf-extract`, text files
/// through a plain read.
pub struct FileExtractor;

impl TextExtractor for FileExtractor {
    fn extract(&self, path: &Path) -> Result<String> {
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");

        match FileType::from_extension(ext) {
            FileType::Pdf => {
                tracing::debug!("extracting PDF text from {}", path.display());
                pdf_extract::extract_text(path).map_err(|e| Error::Extraction(e.to_string()))
            }
            FileType::PlainText => {
                std::fs::read_to_string(path).map_err(|e| Error::Extraction(e.to_string()))
            }
            FileType::Unknown => {
                // Try reading as text, but refuse content that looks binary
                let content = std::fs::read_to_string(path)
                    .map_err(|e| Error::Extraction(e.to_string()))?;
                let control_chars = content
                    .chars()
                    .filter(|c| c.is_control() && *c != '\n' && *c != '\r' && *c != '\t')
                    .count();
                if !content.is_empty() && control_chars > content.len() / 10 {
                    return Err(Error::Extraction(format!(
                        "unsupported binary document: {}",
                        path.display()
                    )));
                }
                Ok(content)
            }
        }
    }
}
