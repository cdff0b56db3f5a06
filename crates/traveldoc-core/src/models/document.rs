//! Travel document data models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Category of a travel document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    /// Flight ticket or boarding pass.
    Flight,
    /// Hotel booking confirmation.
    Hotel,
    /// Anything else.
    Other,
}

impl Default for DocumentType {
    fn default() -> Self {
        Self::Other
    }
}

impl DocumentType {
    /// Display label with the first letter capitalized ("Flight", "Hotel", "Other").
    pub fn label(&self) -> &'static str {
        match self {
            Self::Flight => "Flight",
            Self::Hotel => "Hotel",
            Self::Other => "Other",
        }
    }
}

/// Type-specific details extracted from a document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TravelDetails {
    /// Flight number, e.g. "TG315".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flight_number: Option<String>,

    /// Airline name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub airline: Option<String>,

    /// Hotel name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hotel_name: Option<String>,

    /// Booking reference code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub booking_reference: Option<String>,
}

impl TravelDetails {
    /// Check whether any detail field was extracted.
    pub fn is_empty(&self) -> bool {
        self.flight_number.is_none()
            && self.airline.is_none()
            && self.hotel_name.is_none()
            && self.booking_reference.is_none()
    }
}

/// Travel information extracted from document text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TravelInfo {
    /// Document category.
    #[serde(rename = "type")]
    pub doc_type: DocumentType,

    /// Human-readable title synthesized from the extracted fields.
    pub title: String,

    /// Destination name, title-cased; "Unknown" when no gazetteer entry matched.
    pub destination: String,

    /// Trip start date.
    pub start_date: NaiveDate,

    /// Trip end date.
    pub end_date: NaiveDate,

    /// Type-specific details.
    #[serde(default, skip_serializing_if = "TravelDetails::is_empty")]
    pub details: TravelDetails,
}

/// Verification status of an uploaded document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentStatus {
    /// Awaiting verification.
    Pending,
    /// Verified as a genuine travel document.
    Verified,
    /// Rejected during verification.
    Rejected,
}

impl Default for DocumentStatus {
    fn default() -> Self {
        Self::Pending
    }
}

/// An uploaded travel document record: extracted travel info plus file metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TravelDocument {
    /// Document identifier (typically the source file stem).
    pub id: String,

    /// Extracted travel information.
    #[serde(flatten)]
    pub info: TravelInfo,

    /// Location of the source file.
    pub file_url: String,

    /// Date the document was uploaded/processed.
    pub upload_date: NaiveDate,

    /// Verification status. New documents start as pending.
    #[serde(default)]
    pub status: DocumentStatus,
}

impl TravelDocument {
    /// Build a new pending document record from extracted info.
    pub fn new(
        id: impl Into<String>,
        info: TravelInfo,
        file_url: impl Into<String>,
        upload_date: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            info,
            file_url: file_url.into(),
            upload_date,
            status: DocumentStatus::Pending,
        }
    }
}
