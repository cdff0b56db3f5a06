//! Hotel detail extraction: hotel name and booking reference.

use super::patterns::{BOOKING_REFERENCE, HOTEL_NAME_PATTERNS};
use super::places::title_case;

/// Extract a hotel name from lowercased text.
///
/// Each hotel keyword gets a pattern matching a word adjacent to it; the
/// patterns are tried in keyword list order and the first match wins.
pub fn extract_hotel_name(text: &str) -> Option<String> {
    HOTEL_NAME_PATTERNS
        .iter()
        .find_map(|pattern| pattern.find(text))
        .map(|m| title_case(m.as_str()))
}

/// Extract a labeled booking reference code, uppercased.
pub fn extract_booking_reference(text: &str) -> Option<String> {
    BOOKING_REFERENCE
        .captures(text)
        .map(|caps| caps[1].to_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_hotel_name_keyword_first() {
        assert_eq!(
            extract_hotel_name("welcome to sunset hotel bangkok"),
            Some("Sunset Hotel".to_string())
        );
    }

    #[test]
    fn test_hotel_name_keyword_leading() {
        assert_eq!(
            extract_hotel_name("hotel california"),
            Some("Hotel California".to_string())
        );
    }

    #[test]
    fn test_hotel_name_brand_keyword() {
        // "grand" precedes "hyatt" in the keyword list, so the "grand"
        // pattern matches first
        assert_eq!(
            extract_hotel_name("grand hyatt bangkok"),
            Some("Grand Hyatt".to_string())
        );
    }

    #[test]
    fn test_hotel_name_none() {
        assert_eq!(extract_hotel_name("a lovely apartment"), None);
    }

    #[test]
    fn test_booking_reference() {
        assert_eq!(
            extract_booking_reference("booking: abc123"),
            Some("ABC123".to_string())
        );
        assert_eq!(
            extract_booking_reference("ref xy99z88"),
            Some("XY99Z88".to_string())
        );
    }

    #[test]
    fn test_booking_reference_none() {
        assert_eq!(extract_booking_reference("no code in this text"), None);
    }
}
