//! Configuration constants for taplist

/// Application metadata
pub mod app {
    /// Application name (used for config directory, etc.)
    pub const NAME: &str = "taplist";
}

/// Catalog-related configuration
pub mod catalog {
    /// Default Open Brewery DB API server
    pub const OPEN_BREWERY_DEFAULT_SERVER: &str = "https://api.openbrewerydb.org";
}

/// Network configuration
pub mod network {
    /// User agent sent with catalog requests
    pub const USER_AGENT: &str = concat!("taplist/", env!("CARGO_PKG_VERSION"));

    /// TCP connect timeout in seconds
    pub const CONNECT_TIMEOUT_SECS: u64 = 10;

    /// Full-request read timeout in seconds
    pub const READ_TIMEOUT_SECS: u64 = 30;
}

/// UI strings shared between the view layer and frontends
pub mod ui {
    /// Favorite-control label when the entity is already a favorite
    pub const REMOVE_FAVORITE: &str = "Remove Favorite";

    /// Favorite-control label when the entity is not yet a favorite
    pub const ADD_FAVORITE: &str = "Add to Favorites";
}
