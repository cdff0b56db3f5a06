//! Date extraction for travel documents.

use chrono::{Duration, NaiveDate};

use super::patterns::DATE_DMY;
use super::{ExtractionMatch, FieldExtractor};

/// Date field extractor for D/M/Y-style dates.
pub struct DateExtractor;

impl DateExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DateExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for DateExtractor {
    type Output = ExtractionMatch<NaiveDate>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    /// Extract every date-like substring, normalized and sorted ascending.
    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        let mut results = Vec::new();

        for caps in DATE_DMY.captures_iter(text) {
            let mut day: u32 = caps[1].parse().unwrap_or(0);
            let mut month: u32 = caps[2].parse().unwrap_or(0);
            let mut year: i32 = caps[3].parse().unwrap_or(0);

            // Two-digit years are assumed to be 20xx
            if year < 100 {
                year += 2000;
            }

            // Documents mix D/M/Y and M/D/Y; when the month slot exceeds 12
            // the fields are swapped
            if month > 12 {
                std::mem::swap(&mut day, &mut month);
            }

            // Candidates that still don't form a calendar date are dropped
            if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
                let full_match = caps.get(0).unwrap();
                results.push(
                    ExtractionMatch::new(date, full_match.as_str())
                        .with_position(full_match.start(), full_match.end()),
                );
            }
        }

        results.sort_by_key(|m| m.value);
        results
    }
}

/// Trip dates resolved from a document, with fallbacks applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TravelDates {
    /// Trip start date.
    pub start: NaiveDate,
    /// Trip end date.
    pub end: NaiveDate,
    /// How many dates were actually found in the text.
    pub found: usize,
}

/// Resolve trip start and end dates from document text.
///
/// The earliest extracted date is the start and the second-earliest the end.
/// With no dates the trip starts on `reference` date; with fewer than two it
/// ends `fallback_days` after `reference`.
pub fn resolve_travel_dates(text: &str, reference: NaiveDate, fallback_days: i64) -> TravelDates {
    let dates = DateExtractor::new().extract_all(text);
    let found = dates.len();

    let start = dates.first().map(|m| m.value).unwrap_or(reference);
    let end = dates
        .get(1)
        .map(|m| m.value)
        .unwrap_or(reference + Duration::days(fallback_days));

    TravelDates { start, end, found }
}
