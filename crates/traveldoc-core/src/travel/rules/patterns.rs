//! Regex patterns and lookup tables for travel document extraction.
//!
//! The keyword sets and gazetteers are fixed, ordered lists. Matching is a
//! linear scan in declaration order: the first list entry found anywhere in
//! the text wins, regardless of where it appears. That list-order tie-break
//! is intentional and callers rely on it.

use lazy_static::lazy_static;
use regex::Regex;

/// Keywords indicating a flight document. Checked before the hotel set, so
/// the shared "reservation" keyword always classifies as flight.
pub const FLIGHT_KEYWORDS: &[&str] = &[
    "flight",
    "airline",
    "boarding",
    "reservation",
    "confirmation",
];

/// Keywords indicating a hotel document.
pub const HOTEL_KEYWORDS: &[&str] = &[
    "hotel",
    "reservation",
    "booking",
    "stay",
    "accommodation",
];

/// Known destination names, matched as substrings of the lowercased text.
pub const DESTINATIONS: &[&str] = &[
    "bangkok", "tokyo", "new york", "paris", "london", "rome", "sydney",
    "hong kong", "singapore", "dubai", "los angeles", "bali", "phuket",
    "seoul", "barcelona", "istanbul", "amsterdam", "miami", "shanghai",
    "las vegas", "milan", "madrid", "berlin", "vienna", "prague", "moscow",
    "athens", "cairo", "marrakesh", "johannesburg", "rio de janeiro",
    "toronto", "vancouver", "san francisco", "chicago", "boston", "orlando",
    "kyoto", "osaka", "taipei", "kuala lumpur", "delhi", "mumbai",
    "melbourne", "auckland", "fiji", "hawaii", "cancun", "mexico city",
    "chiang mai", "pattaya", "thailand", "japan",
];

/// Known airline names.
pub const AIRLINES: &[&str] = &[
    "thai airways", "japan airlines", "ana", "delta", "united",
    "american airlines", "british airways", "air france", "lufthansa",
    "emirates", "qatar airways", "singapore airlines", "cathay pacific",
    "air canada", "turkish airlines", "etihad airways", "klm",
    "air china", "korean air", "southwest", "jetblue", "virgin atlantic",
];

/// Words that anchor a hotel name ("Grand Hyatt", "Sunset Resort").
pub const HOTEL_NAME_KEYWORDS: &[&str] = &[
    "hotel", "resort", "inn", "suites", "plaza", "palace",
    "grand", "hyatt", "hilton", "marriott", "sheraton", "westin",
    "intercontinental", "radisson", "novotel",
];

lazy_static! {
    /// D/M/Y dates with `/`, `-` or `.` separators and 2- or 4-digit years.
    pub static ref DATE_DMY: Regex = Regex::new(
        r"\b(\d{1,2})[/\-.](\d{1,2})[/\-.](\d{2,4})\b"
    ).unwrap();

    /// Flight numbers like "TG315" or "TG 315" (on lowercased text).
    pub static ref FLIGHT_NUMBER: Regex = Regex::new(
        r"\b([a-z]{2,3})\s*(\d{1,4})\b"
    ).unwrap();

    /// Labeled booking reference codes (on lowercased text).
    pub static ref BOOKING_REFERENCE: Regex = Regex::new(
        r"\b(?:confirmation|booking|reservation|ref|reference|number):?\s*([a-z0-9]{5,10})\b"
    ).unwrap();

    /// Per-keyword hotel name patterns: a word adjacent to a hotel keyword,
    /// scanned in `HOTEL_NAME_KEYWORDS` order.
    pub static ref HOTEL_NAME_PATTERNS: Vec<Regex> = HOTEL_NAME_KEYWORDS
        .iter()
        .map(|kw| Regex::new(&format!(r"(\w+\s+{kw}|{kw}\s+\w+)")).unwrap())
        .collect();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_pattern_separators() {
        for text in ["02/06/2025", "02-06-2025", "02.06.25"] {
            assert!(DATE_DMY.is_match(text), "no match for {}", text);
        }
        assert!(!DATE_DMY.is_match("20250602"));
    }

    #[test]
    fn test_flight_number_pattern() {
        let caps = FLIGHT_NUMBER.captures("thai airways tg315 to phuket").unwrap();
        assert_eq!(&caps[1], "tg");
        assert_eq!(&caps[2], "315");
    }

    #[test]
    fn test_booking_reference_pattern() {
        let caps = BOOKING_REFERENCE.captures("booking: abc123x").unwrap();
        assert_eq!(&caps[1], "abc123x");
        // Codes shorter than 5 characters are not references
        assert!(BOOKING_REFERENCE.captures("booking: ab1").is_none());
    }

    #[test]
    fn test_hotel_name_patterns_compile() {
        assert_eq!(HOTEL_NAME_PATTERNS.len(), HOTEL_NAME_KEYWORDS.len());
        assert!(HOTEL_NAME_PATTERNS[0].is_match("sunset hotel bangkok"));
    }
}
