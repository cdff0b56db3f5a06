//! Destination extraction against the fixed gazetteer.

use super::patterns::DESTINATIONS;
use super::{ExtractionMatch, FieldExtractor};

/// Capitalize the first letter of each whitespace-separated word.
///
/// Input is expected to be lowercased; the remainder of each word is kept
/// as-is ("new york" -> "New York", "klm" -> "Klm").
pub fn title_case(s: &str) -> String {
    s.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Destination extractor scanning the gazetteer in declaration order.
pub struct DestinationExtractor;

impl DestinationExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DestinationExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for DestinationExtractor {
    type Output = ExtractionMatch<String>;

    /// First gazetteer entry found as a substring wins. The tie-break is
    /// list order, not position in the text.
    fn extract(&self, text: &str) -> Option<Self::Output> {
        DESTINATIONS.iter().find_map(|place| {
            text.find(place).map(|pos| {
                ExtractionMatch::new(title_case(place), *place)
                    .with_position(pos, pos + place.len())
            })
        })
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        DESTINATIONS
            .iter()
            .filter_map(|place| {
                text.find(place).map(|pos| {
                    ExtractionMatch::new(title_case(place), *place)
                        .with_position(pos, pos + place.len())
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("bangkok"), "Bangkok");
        assert_eq!(title_case("rio de janeiro"), "Rio De Janeiro");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_extract_destination() {
        let extractor = DestinationExtractor::new();

        let result = extractor.extract("welcome to bangkok!").unwrap();
        assert_eq!(result.value, "Bangkok");
        assert_eq!(result.source, "bangkok");
    }

    #[test]
    fn test_list_order_wins_over_text_order() {
        let extractor = DestinationExtractor::new();

        // "phuket" appears first in the text, but "bangkok" comes first in
        // the gazetteer
        let result = extractor.extract("phuket and then bangkok").unwrap();
        assert_eq!(result.value, "Bangkok");
    }

    #[test]
    fn test_no_match() {
        let extractor = DestinationExtractor::new();
        assert!(extractor.extract("somewhere nice").is_none());
    }

    #[test]
    fn test_extract_all() {
        let extractor = DestinationExtractor::new();

        let all = extractor.extract_all("bangkok to phuket");
        let values: Vec<&str> = all.iter().map(|m| m.value.as_str()).collect();
        assert_eq!(values, vec!["Bangkok", "Phuket"]);
    }
}
