//! Destination group keys.
//!
//! Users are grouped into chats keyed by destination, with finer-grained
//! sub-destination groups for cities within a known region (a Phuket trip
//! joins both the Thailand group and its Phuket sub-group).

use serde::{Deserialize, Serialize};

use crate::models::TravelInfo;

/// Cities that roll up into a broader destination group.
/// Names match the title-cased output of the destination gazetteer.
const SUB_DESTINATIONS: &[(&str, &str)] = &[
    ("Bangkok", "Thailand"),
    ("Phuket", "Thailand"),
    ("Chiang Mai", "Thailand"),
    ("Pattaya", "Thailand"),
    ("Tokyo", "Japan"),
    ("Kyoto", "Japan"),
    ("Osaka", "Japan"),
];

/// Key identifying a destination-based group chat.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DestinationGroupKey {
    /// Top-level destination group.
    pub destination: String,

    /// Sub-destination group within the destination, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_destination: Option<String>,
}

impl DestinationGroupKey {
    /// Derive a group key from extracted travel info.
    ///
    /// Returns `None` when no destination was recognized, since an "Unknown"
    /// group would lump unrelated travelers together.
    pub fn from_info(info: &TravelInfo) -> Option<Self> {
        Self::from_destination(&info.destination)
    }

    /// Derive a group key from a destination name.
    pub fn from_destination(destination: &str) -> Option<Self> {
        if destination.is_empty() || destination == "Unknown" {
            return None;
        }

        let parent = SUB_DESTINATIONS
            .iter()
            .find(|(city, _)| *city == destination)
            .map(|(_, region)| *region);

        match parent {
            Some(region) => Some(Self {
                destination: region.to_string(),
                sub_destination: Some(destination.to_string()),
            }),
            None => Some(Self {
                destination: destination.to_string(),
                sub_destination: None,
            }),
        }
    }

    /// Stable path identifier for the group, e.g. `thailand/phuket`.
    pub fn path(&self) -> String {
        let slug = |s: &str| s.to_lowercase().replace(' ', "-");
        match &self.sub_destination {
            Some(sub) => format!("{}/{}", slug(&self.destination), slug(sub)),
            None => slug(&self.destination),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_city_with_region() {
        let key = DestinationGroupKey::from_destination("Phuket").unwrap();
        assert_eq!(key.destination, "Thailand");
        assert_eq!(key.sub_destination.as_deref(), Some("Phuket"));
        assert_eq!(key.path(), "thailand/phuket");
    }

    #[test]
    fn test_standalone_destination() {
        let key = DestinationGroupKey::from_destination("Paris").unwrap();
        assert_eq!(key.destination, "Paris");
        assert_eq!(key.sub_destination, None);
        assert_eq!(key.path(), "paris");
    }

    #[test]
    fn test_multi_word_slug() {
        let key = DestinationGroupKey::from_destination("New York").unwrap();
        assert_eq!(key.path(), "new-york");
    }

    #[test]
    fn test_unknown_destination() {
        assert_eq!(DestinationGroupKey::from_destination("Unknown"), None);
        assert_eq!(DestinationGroupKey::from_destination(""), None);
    }
}
