//! Catalog provider trait
//!
//! Defines the interface that all brewery catalog sources must implement.

use crate::data::types::Brewery;
use crate::error::Result;

/// A source of brewery catalog listings
pub trait CatalogProvider: Send + Sync {
    /// Display name for the provider (e.g., "Open Brewery DB")
    fn name(&self) -> &'static str;

    /// Machine-readable identifier (e.g., "open-brewery-db")
    fn id(&self) -> &'static str;

    /// Fetch the full catalog listing, in the provider's display order
    fn list(&self) -> Result<Vec<Brewery>>;
}
