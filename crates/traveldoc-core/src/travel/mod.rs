//! Travel info extraction module.

mod parser;

pub mod group;
pub mod rules;

pub use group::DestinationGroupKey;
pub use parser::{ExtractionResult, TravelInfoParser, TravelParser};

use crate::error::ExtractionError;

/// Result type for extraction operations.
pub type Result<T> = std::result::Result<T, ExtractionError>;
