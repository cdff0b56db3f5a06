//! PDF text extraction using lopdf and pdf-extract.

use lopdf::Document;
use tracing::debug;

use super::{PdfProcessor, Result};
use crate::error::PdfError;

/// PDF text extractor using lopdf for document handling and pdf-extract for text.
pub struct PdfExtractor {
    document: Option<Document>,
    raw_data: Vec<u8>,
}

impl PdfExtractor {
    /// Create a new PDF extractor.
    pub fn new() -> Self {
        Self {
            document: None,
            raw_data: Vec::new(),
        }
    }

    /// Extract text from at most `max_pages` pages (0 = unlimited).
    pub fn extract_text_limited(&self, max_pages: usize) -> Result<String> {
        let full_text = self.extract_text()?;
        let page_count = self.page_count() as usize;

        if max_pages == 0 || page_count <= max_pages {
            return Ok(full_text);
        }

        // pdf-extract gives us the whole document; approximate the page cut
        // by splitting lines evenly across pages.
        let lines: Vec<&str> = full_text.lines().collect();
        let lines_per_page = lines.len() / page_count;
        if lines_per_page == 0 {
            // Fewer lines than pages; a zero estimate would truncate to
            // nothing, so keep everything
            return Ok(full_text);
        }
        let end = (max_pages * lines_per_page).min(lines.len());

        debug!(
            "Limiting PDF text to {} of {} pages ({} of {} lines)",
            max_pages,
            page_count,
            end,
            lines.len()
        );

        Ok(lines[..end].join("\n"))
    }
}

impl Default for PdfExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfProcessor for PdfExtractor {
    fn load(&mut self, data: &[u8]) -> Result<()> {
        let mut doc = Document::load_mem(data).map_err(|e| PdfError::Parse(e.to_string()))?;

        // Handle PDFs with empty password encryption
        if doc.is_encrypted() {
            if doc.decrypt("").is_err() {
                return Err(PdfError::Encrypted);
            }
            debug!("Decrypted PDF with empty password");

            // Save decrypted document to raw_data for pdf-extract
            let mut decrypted_data = Vec::new();
            doc.save_to(&mut decrypted_data)
                .map_err(|e| PdfError::Parse(format!("Failed to save decrypted PDF: {}", e)))?;
            self.raw_data = decrypted_data;
        } else {
            self.raw_data = data.to_vec();
        }

        let page_count = doc.get_pages().len();
        if page_count == 0 {
            return Err(PdfError::NoPages);
        }

        debug!("Loaded PDF with {} pages", page_count);
        self.document = Some(doc);
        Ok(())
    }

    fn page_count(&self) -> u32 {
        self.document
            .as_ref()
            .map(|doc| doc.get_pages().len() as u32)
            .unwrap_or(0)
    }

    fn extract_text(&self) -> Result<String> {
        if self.document.is_none() {
            return Err(PdfError::Parse("No document loaded".to_string()));
        }

        let text = pdf_extract::extract_text_from_mem(&self.raw_data)
            .map_err(|e| PdfError::TextExtraction(e.to_string()))?;

        // Image-only/scanned PDFs come back as pure whitespace
        if text.trim().is_empty() {
            return Err(PdfError::NoText);
        }

        Ok(text)
    }
}
