//! Document loading: turn an uploaded file into text for extraction.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{ExtractionError, Result, TraveldocError};
use crate::models::config::TraveldocConfig;
use crate::pdf::{PdfExtractor, PdfProcessor};

/// Load the text content of a travel document file.
///
/// PDFs go through the PDF extractor; plain text files are read as UTF-8.
/// Files yielding less than the configured minimum of usable text are
/// rejected.
pub fn load_document_text(path: &Path, config: &TraveldocConfig) -> Result<String> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    let text = match extension.as_str() {
        "pdf" => {
            let data = fs::read(path)?;
            let mut extractor = PdfExtractor::new();
            extractor.load(&data)?;

            debug!("PDF has {} pages", extractor.page_count());
            extractor.extract_text_limited(config.pdf.max_pages)?
        }
        "txt" | "text" => fs::read_to_string(path)?,
        _ => return Err(TraveldocError::UnsupportedFormat(extension)),
    };

    if text.trim().len() < config.pdf.min_text_length {
        return Err(ExtractionError::Failed(format!(
            "no usable text in {}",
            path.display()
        ))
        .into());
    }

    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_text_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("ticket.txt");
        fs::write(&file, "Flight to Bangkok on 02/06/2025").unwrap();

        let text = load_document_text(&file, &TraveldocConfig::default()).unwrap();
        assert!(text.contains("Bangkok"));
    }

    #[test]
    fn test_unsupported_extension() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("photo.png");
        fs::write(&file, b"binary").unwrap();

        let err = load_document_text(&file, &TraveldocConfig::default()).unwrap_err();
        assert!(matches!(err, TraveldocError::UnsupportedFormat(ref ext) if ext == "png"));
    }

    #[test]
    fn test_too_little_text() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("note.txt");
        fs::write(&file, "hi").unwrap();

        let err = load_document_text(&file, &TraveldocConfig::default()).unwrap_err();
        assert!(matches!(err, TraveldocError::Extraction(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_document_text(
            Path::new("does-not-exist.txt"),
            &TraveldocConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(err, TraveldocError::Io(_)));
    }
}
