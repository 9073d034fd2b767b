//! Common data types
//!
//! The brewery entity shared by the catalog, favorites, and views.

use serde::{Deserialize, Serialize};

/// A single brewery record
///
/// Identity is the `id` field; everything else is descriptive and not
/// validated. A favorited brewery is a full copy of this record, so the
/// favorites list renders without the catalog being loaded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Brewery {
    /// Opaque unique identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Category (e.g., "micro", "brewpub")
    #[serde(default)]
    pub brewery_type: String,
    /// City name
    #[serde(default)]
    pub city: String,
    /// State / province name
    #[serde(default)]
    pub state: String,
    /// Website URL; absent or null for many entries
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website_url: Option<String>,
}

impl Brewery {
    /// Create a brewery with minimal info
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            brewery_type: String::new(),
            city: String::new(),
            state: String::new(),
            website_url: None,
        }
    }

    /// Set the category
    pub fn with_type(mut self, brewery_type: impl Into<String>) -> Self {
        self.brewery_type = brewery_type.into();
        self
    }

    /// Set the location fields
    pub fn with_location(mut self, city: impl Into<String>, state: impl Into<String>) -> Self {
        self.city = city.into();
        self.state = state.into();
        self
    }

    /// Set the website URL from an Option (no-op if None)
    pub fn with_website_opt(mut self, website_url: Option<String>) -> Self {
        self.website_url = website_url;
        self
    }

    /// "city, state" display line
    pub fn location(&self) -> String {
        format!("{}, {}", self.city, self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_line() {
        let b = Brewery::new("1", "Alpha").with_location("Portland", "Oregon");
        assert_eq!(b.location(), "Portland, Oregon");
    }

    #[test]
    fn test_serialize_skips_absent_website() {
        let b = Brewery::new("1", "Alpha");
        let json = serde_json::to_string(&b).unwrap();
        assert!(!json.contains("website_url"));
    }

    #[test]
    fn test_deserialize_null_website() {
        let json = r#"{"id":"1","name":"Alpha","website_url":null}"#;
        let b: Brewery = serde_json::from_str(json).unwrap();
        assert_eq!(b.website_url, None);
        assert_eq!(b.brewery_type, "");
    }
}
