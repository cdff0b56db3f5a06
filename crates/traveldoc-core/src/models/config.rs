//! Configuration structures for the traveldoc pipeline.

use serde::{Deserialize, Serialize};

/// Main configuration for the traveldoc pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TraveldocConfig {
    /// PDF processing configuration.
    pub pdf: PdfConfig,

    /// Travel info extraction configuration.
    pub extraction: ExtractionConfig,
}

/// PDF processing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfConfig {
    /// Maximum pages to extract text from (0 = unlimited).
    pub max_pages: usize,

    /// Minimum text length to consider extraction successful.
    pub min_text_length: usize,
}

impl Default for PdfConfig {
    fn default() -> Self {
        Self {
            max_pages: 10,
            min_text_length: 10,
        }
    }
}

/// Travel info extraction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Trip length in days assumed when no end date is found.
    pub fallback_trip_days: i64,

    /// Destination reported when no gazetteer entry matches.
    pub default_destination: String,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            fallback_trip_days: 7,
            default_destination: "Unknown".to_string(),
        }
    }
}

impl TraveldocConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))?;
        std::fs::write(path, content)
    }
}
