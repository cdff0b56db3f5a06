//! Document type classification by keyword sets.

use crate::models::DocumentType;

use super::patterns::{FLIGHT_KEYWORDS, HOTEL_KEYWORDS};

/// Classify lowercased document text as flight, hotel or other.
///
/// The flight set is checked first, so on keyword overlap ("reservation" is
/// in both sets) flight wins.
pub fn classify_document_type(text: &str) -> DocumentType {
    if FLIGHT_KEYWORDS.iter().any(|kw| text.contains(kw)) {
        DocumentType::Flight
    } else if HOTEL_KEYWORDS.iter().any(|kw| text.contains(kw)) {
        DocumentType::Hotel
    } else {
        DocumentType::Other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flight_keywords() {
        assert_eq!(classify_document_type("your flight to bangkok"), DocumentType::Flight);
        assert_eq!(classify_document_type("boarding pass"), DocumentType::Flight);
    }

    #[test]
    fn test_hotel_keywords() {
        assert_eq!(classify_document_type("hotel stay"), DocumentType::Hotel);
        assert_eq!(classify_document_type("your accommodation"), DocumentType::Hotel);
    }

    #[test]
    fn test_flight_wins_on_overlap() {
        // "confirmation" is a flight keyword even in hotel-looking text
        assert_eq!(
            classify_document_type("hotel confirmation"),
            DocumentType::Flight
        );
        // "reservation" appears in both sets; the flight branch runs first
        assert_eq!(
            classify_document_type("hotel reservation"),
            DocumentType::Flight
        );
    }

    #[test]
    fn test_hotel_without_flight_keywords() {
        assert_eq!(
            classify_document_type("hotel booking for two nights"),
            DocumentType::Hotel
        );
    }

    #[test]
    fn test_other() {
        assert_eq!(classify_document_type("shopping list"), DocumentType::Other);
        assert_eq!(classify_document_type(""), DocumentType::Other);
    }
}
