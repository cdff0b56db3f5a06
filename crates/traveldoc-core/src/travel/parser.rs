//! Rule-based travel document parser.

use std::time::Instant;

use chrono::{Local, NaiveDate};
use tracing::{debug, info};

use crate::models::config::ExtractionConfig;
use crate::models::{DocumentType, TravelDetails, TravelInfo};

use super::rules::{
    classify_document_type, extract_booking_reference, extract_flight_number, extract_hotel_name,
    resolve_travel_dates, AirlineExtractor, DestinationExtractor, FieldExtractor,
};
use super::Result;

/// Result of travel info extraction.
#[derive(Debug, Clone)]
pub struct ExtractionResult {
    /// Extracted travel information.
    pub info: TravelInfo,
    /// Raw input text.
    pub raw_text: String,
    /// Extraction warnings.
    pub warnings: Vec<String>,
    /// Processing time in milliseconds.
    pub processing_time_ms: u64,
}

/// Trait for travel document parsing.
pub trait TravelParser {
    /// Parse travel info from document text.
    fn parse(&self, text: &str) -> Result<ExtractionResult>;
}

/// Rule-based travel info parser.
pub struct TravelInfoParser {
    /// Reference date for fallbacks; `None` means the local current date.
    reference_date: Option<NaiveDate>,
    /// Trip length assumed when no end date is found.
    fallback_trip_days: i64,
    /// Destination reported when no gazetteer entry matches.
    default_destination: String,
}

impl TravelInfoParser {
    /// Create a new parser with default settings.
    pub fn new() -> Self {
        Self {
            reference_date: None,
            fallback_trip_days: 7,
            default_destination: "Unknown".to_string(),
        }
    }

    /// Create a parser from extraction configuration.
    pub fn from_config(config: &ExtractionConfig) -> Self {
        Self {
            reference_date: None,
            fallback_trip_days: config.fallback_trip_days,
            default_destination: config.default_destination.clone(),
        }
    }

    /// Pin the reference date used for date fallbacks.
    pub fn with_reference_date(mut self, date: NaiveDate) -> Self {
        self.reference_date = Some(date);
        self
    }

    /// Set the fallback trip length in days.
    pub fn with_fallback_trip_days(mut self, days: i64) -> Self {
        self.fallback_trip_days = days;
        self
    }

    fn reference_date(&self) -> NaiveDate {
        self.reference_date
            .unwrap_or_else(|| Local::now().date_naive())
    }

    fn extract_details(&self, doc_type: DocumentType, text: &str) -> TravelDetails {
        let mut details = TravelDetails::default();

        match doc_type {
            DocumentType::Flight => {
                details.airline = AirlineExtractor::new().extract(text).map(|m| m.value);
                details.flight_number = extract_flight_number(text);
            }
            DocumentType::Hotel => {
                details.hotel_name = extract_hotel_name(text);
                details.booking_reference = extract_booking_reference(text);
            }
            DocumentType::Other => {}
        }

        details
    }

    fn synthesize_title(
        &self,
        doc_type: DocumentType,
        destination: &str,
        details: &TravelDetails,
    ) -> String {
        match (doc_type, &details.airline, &details.hotel_name) {
            (DocumentType::Flight, Some(airline), _) => {
                format!("{} to {}", airline, destination)
            }
            (DocumentType::Hotel, _, Some(hotel_name)) => hotel_name.clone(),
            _ => format!("{} - {}", doc_type.label(), destination),
        }
    }
}

impl Default for TravelInfoParser {
    fn default() -> Self {
        Self::new()
    }
}

impl TravelParser for TravelInfoParser {
    fn parse(&self, text: &str) -> Result<ExtractionResult> {
        let start = Instant::now();
        let mut warnings = Vec::new();

        info!("Parsing travel document from {} characters of text", text.len());

        // All matching happens on the lowercased text
        let normalized = text.to_lowercase();

        let doc_type = classify_document_type(&normalized);
        debug!("Classified document as {:?}", doc_type);

        let dates = resolve_travel_dates(&normalized, self.reference_date(), self.fallback_trip_days);
        if dates.found == 0 {
            warnings.push("Could not extract dates, using fallback range".to_string());
        }

        let destination = DestinationExtractor::new()
            .extract(&normalized)
            .map(|m| m.value)
            .unwrap_or_else(|| {
                warnings.push("Could not match a known destination".to_string());
                self.default_destination.clone()
            });

        let details = self.extract_details(doc_type, &normalized);
        if doc_type == DocumentType::Flight && details.airline.is_none() {
            warnings.push("Could not identify airline".to_string());
        }

        let title = self.synthesize_title(doc_type, &destination, &details);

        let info = TravelInfo {
            doc_type,
            title,
            destination,
            start_date: dates.start,
            end_date: dates.end,
            details,
        };

        debug!(
            "Extracted {:?} document \"{}\" ({} - {})",
            info.doc_type, info.title, info.start_date, info.end_date
        );

        Ok(ExtractionResult {
            info,
            raw_text: text.to_string(),
            warnings,
            processing_time_ms: start.elapsed().as_millis() as u64,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    // Sample boarding pass text from the original upload flow
    const BOARDING_PASS: &str = r#"
        BOARDING PASS
        THAI AIRWAYS TG315
        Bangkok to Phuket
        Passenger: John Smith
        Date: 02/06/2025
        Return: 10/06/2025
        Confirmation: ABC123
    "#;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn parser() -> TravelInfoParser {
        TravelInfoParser::new().with_reference_date(d(2025, 1, 1))
    }

    #[test]
    fn test_parse_boarding_pass() {
        let result = parser().parse(BOARDING_PASS).unwrap();
        let info = result.info;

        assert_eq!(info.doc_type, DocumentType::Flight);
        assert_eq!(info.destination, "Bangkok");
        assert_eq!(info.start_date, d(2025, 6, 2));
        assert_eq!(info.end_date, d(2025, 6, 10));
        assert_eq!(info.details.airline.as_deref(), Some("Thai Airways"));
        assert_eq!(info.details.flight_number.as_deref(), Some("TG315"));
        assert_eq!(info.title, "Thai Airways to Bangkok");
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_parse_hotel_booking() {
        let text = "Grand Hyatt Bangkok\nYour stay: 05.07.2025 - 12.07.2025\nBooking: XYZ9876";
        let result = parser().parse(text).unwrap();
        let info = result.info;

        assert_eq!(info.doc_type, DocumentType::Hotel);
        assert_eq!(info.destination, "Bangkok");
        assert_eq!(info.start_date, d(2025, 7, 5));
        assert_eq!(info.end_date, d(2025, 7, 12));
        assert_eq!(info.details.hotel_name.as_deref(), Some("Grand Hyatt"));
        assert_eq!(info.details.booking_reference.as_deref(), Some("XYZ9876"));
        assert_eq!(info.title, "Grand Hyatt");
    }

    #[test]
    fn test_flight_beats_hotel_on_shared_keywords() {
        // "confirmation" is a flight keyword, so hotel text containing it
        // still classifies as flight
        let result = parser().parse("hotel confirmation for tokyo").unwrap();
        assert_eq!(result.info.doc_type, DocumentType::Flight);
        assert_eq!(result.info.destination, "Tokyo");
    }

    #[test]
    fn test_empty_input_yields_fallbacks() {
        let result = parser().parse("").unwrap();
        let info = result.info;

        assert_eq!(info.doc_type, DocumentType::Other);
        assert_eq!(info.destination, "Unknown");
        assert_eq!(info.start_date, d(2025, 1, 1));
        assert_eq!(info.end_date, d(2025, 1, 8));
        assert_eq!(info.title, "Other - Unknown");
        assert_eq!(result.warnings.len(), 2);
    }

    #[test]
    fn test_single_date_end_falls_back_to_reference_window() {
        let result = parser().parse("flight to bali on 20/03/2025").unwrap();
        let info = result.info;

        assert_eq!(info.start_date, d(2025, 3, 20));
        // End date falls back to reference + 7 days, not start + 7 days
        assert_eq!(info.end_date, d(2025, 1, 8));
    }

    #[test]
    fn test_destination_case_insensitive() {
        let result = parser().parse("FLIGHT TO BANGKOK").unwrap();
        assert_eq!(result.info.destination, "Bangkok");
    }

    #[test]
    fn test_unmatched_flight_title() {
        let result = parser().parse("flight itinerary for paris").unwrap();
        let info = result.info;

        assert_eq!(info.doc_type, DocumentType::Flight);
        assert_eq!(info.details.airline, None);
        assert_eq!(info.title, "Flight - Paris");
    }
}
