//! Error types for the traveldoc-core library.

use thiserror::Error;

/// Main error type for the traveldoc library.
#[derive(Error, Debug)]
pub enum TraveldocError {
    /// PDF processing error.
    #[error("PDF error: {0}")]
    Pdf(#[from] PdfError),

    /// Travel info extraction error.
    #[error("extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The input file has an unsupported extension.
    #[error("unsupported file format: {0}")]
    UnsupportedFormat(String),
}

/// Errors related to PDF processing.
#[derive(Error, Debug)]
pub enum PdfError {
    /// Failed to open/parse the PDF file.
    #[error("failed to parse PDF: {0}")]
    Parse(String),

    /// Failed to extract text from PDF.
    #[error("failed to extract text: {0}")]
    TextExtraction(String),

    /// The PDF is encrypted and cannot be processed.
    #[error("PDF is encrypted")]
    Encrypted,

    /// The PDF is empty or has no pages.
    #[error("PDF has no pages")]
    NoPages,

    /// The PDF contains no extractable text (likely a scanned document).
    #[error("PDF contains no extractable text")]
    NoText,
}

/// Errors related to travel info extraction.
///
/// The extraction step deliberately keeps a single opaque failure variant:
/// the upstream implementation collapsed every extraction failure into one
/// error message, and callers only ever display it.
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// Extraction failed.
    #[error("failed to extract travel information: {0}")]
    Failed(String),
}

/// Result type for the traveldoc library.
pub type Result<T> = std::result::Result<T, TraveldocError>;
