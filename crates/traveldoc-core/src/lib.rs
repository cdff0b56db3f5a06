//! Core library for travel document processing.
//!
//! This crate provides:
//! - PDF text extraction for uploaded travel documents
//! - Rule-based classification of document text (flight / hotel / other)
//! - Extraction of trip dates, destination, airline, flight number, hotel
//!   name and booking reference
//! - Destination group keys for destination-based chat membership

pub mod document;
pub mod error;
pub mod models;
pub mod pdf;
pub mod travel;

pub use document::load_document_text;
pub use error::{Result, TraveldocError};
pub use models::{
    DocumentStatus, DocumentType, TravelDetails, TravelDocument, TravelInfo, TraveldocConfig,
};
pub use pdf::{PdfExtractor, PdfProcessor};
pub use travel::{DestinationGroupKey, ExtractionResult, TravelInfoParser, TravelParser};
