//! Open Brewery DB provider
//!
//! Implementation of `CatalogProvider` for the Open Brewery DB directory
//! (<https://www.openbrewerydb.org/>).

use crate::config::catalog::OPEN_BREWERY_DEFAULT_SERVER;
use crate::data::types::Brewery;
use crate::error::Result;
use crate::network::HttpClient;

use super::traits::CatalogProvider;

use serde::Deserialize;

// =============================================================================
// Internal API response types (serde)
// =============================================================================

#[derive(Debug, Deserialize)]
struct ObBrewery {
    id: String,
    name: String,
    #[serde(default)]
    brewery_type: String,
    #[serde(default)]
    city: String,
    #[serde(default)]
    state: String,
    #[serde(default)]
    website_url: Option<String>,
}

/// Convert an empty string to None
fn non_empty(s: Option<String>) -> Option<String> {
    s.filter(|s| !s.trim().is_empty())
}

impl From<ObBrewery> for Brewery {
    fn from(ob: ObBrewery) -> Self {
        Brewery::new(ob.id, ob.name)
            .with_type(ob.brewery_type)
            .with_location(ob.city, ob.state)
            .with_website_opt(non_empty(ob.website_url))
    }
}

// =============================================================================
// OpenBreweryProvider
// =============================================================================

/// Open Brewery DB catalog provider
///
/// Fetches the listing with a single unparameterized GET; the API's response
/// order is kept as display order.
pub struct OpenBreweryProvider {
    client: HttpClient,
    base_url: String,
}

impl OpenBreweryProvider {
    /// Create a provider using the default server
    pub fn new() -> Result<Self> {
        Ok(Self {
            client: HttpClient::new()?,
            base_url: OPEN_BREWERY_DEFAULT_SERVER.to_string(),
        })
    }

    /// Create a provider with a custom base URL (for testing or mirrors)
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        Ok(Self {
            client: HttpClient::new()?,
            base_url: base_url.into(),
        })
    }

    /// Build a full API URL from an endpoint path
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl CatalogProvider for OpenBreweryProvider {
    fn name(&self) -> &'static str {
        "Open Brewery DB"
    }

    fn id(&self) -> &'static str {
        "open-brewery-db"
    }

    fn list(&self) -> Result<Vec<Brewery>> {
        let records: Vec<ObBrewery> = self.client.get_json(&self.url("/v1/breweries"))?;
        Ok(records.into_iter().map(Brewery::from).collect())
    }
}

// =============================================================================
// Tests
// =============================================================================
