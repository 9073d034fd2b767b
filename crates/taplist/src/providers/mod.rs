//! Catalog providers
//!
//! Sources of brewery listings.

pub mod open_brewery;
pub mod traits;

pub use open_brewery::OpenBreweryProvider;
pub use traits::CatalogProvider;
