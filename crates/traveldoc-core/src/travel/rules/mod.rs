//! Rule-based field extractors for travel documents.
//!
//! All extractors operate on text that has already been lowercased by the
//! parser; matching is case-insensitive by construction.

pub mod dates;
pub mod flights;
pub mod hotels;
pub mod keywords;
pub mod patterns;
pub mod places;

pub use dates::{resolve_travel_dates, DateExtractor, TravelDates};
pub use flights::{extract_flight_number, AirlineExtractor};
pub use hotels::{extract_booking_reference, extract_hotel_name};
pub use keywords::classify_document_type;
pub use places::{title_case, DestinationExtractor};

/// Trait for field extractors.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the field from text.
    fn extract(&self, text: &str) -> Option<Self::Output>;

    /// Extract all occurrences of the field.
    fn extract_all(&self, text: &str) -> Vec<Self::Output>;
}

/// An extracted value together with where it came from.
#[derive(Debug, Clone)]
pub struct ExtractionMatch<T> {
    /// Extracted value.
    pub value: T,
    /// Position in source text.
    pub position: Option<(usize, usize)>,
    /// Source text that was matched.
    pub source: String,
}

impl<T> ExtractionMatch<T> {
    pub fn new(value: T, source: impl Into<String>) -> Self {
        Self {
            value,
            position: None,
            source: source.into(),
        }
    }

    pub fn with_position(mut self, start: usize, end: usize) -> Self {
        self.position = Some((start, end));
        self
    }
}
