//! Flight detail extraction: airline name and flight number.

use super::patterns::{AIRLINES, FLIGHT_NUMBER};
use super::places::title_case;
use super::{ExtractionMatch, FieldExtractor};

/// Airline extractor scanning the fixed airline list in declaration order.
pub struct AirlineExtractor;

impl AirlineExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for AirlineExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for AirlineExtractor {
    type Output = ExtractionMatch<String>;

    /// First list entry found as a substring wins (list order, like the
    /// destination gazetteer).
    fn extract(&self, text: &str) -> Option<Self::Output> {
        AIRLINES.iter().find_map(|airline| {
            text.find(airline).map(|pos| {
                ExtractionMatch::new(title_case(airline), *airline)
                    .with_position(pos, pos + airline.len())
            })
        })
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        AIRLINES
            .iter()
            .filter_map(|airline| {
                text.find(airline).map(|pos| {
                    ExtractionMatch::new(title_case(airline), *airline)
                        .with_position(pos, pos + airline.len())
                })
            })
            .collect()
    }
}

/// Extract a flight number like "TG315" from lowercased text.
///
/// First match by text position; the letters and digits are uppercased and
/// joined without the optional whitespace.
pub fn extract_flight_number(text: &str) -> Option<String> {
    FLIGHT_NUMBER
        .captures(text)
        .map(|caps| format!("{}{}", caps[1].to_uppercase(), &caps[2]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_extract_airline() {
        let extractor = AirlineExtractor::new();

        let result = extractor.extract("flying with thai airways tomorrow").unwrap();
        assert_eq!(result.value, "Thai Airways");
    }

    #[test]
    fn test_airline_list_order() {
        let extractor = AirlineExtractor::new();

        // "delta" precedes "emirates" in the list even though "emirates"
        // appears first in the text
        let result = extractor.extract("emirates codeshare with delta").unwrap();
        assert_eq!(result.value, "Delta");
    }

    #[test]
    fn test_flight_number_with_space() {
        assert_eq!(extract_flight_number("tg 315"), Some("TG315".to_string()));
        assert_eq!(extract_flight_number("tg315"), Some("TG315".to_string()));
    }

    #[test]
    fn test_flight_number_none() {
        assert_eq!(extract_flight_number("no numbers here"), None);
    }
}
