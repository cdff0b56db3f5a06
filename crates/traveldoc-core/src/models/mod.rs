//! Data models for travel documents and configuration.

pub mod config;
pub mod document;

pub use config::TraveldocConfig;
pub use document::{
    DocumentStatus, DocumentType, TravelDetails, TravelDocument, TravelInfo,
};
