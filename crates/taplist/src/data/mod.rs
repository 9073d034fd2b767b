//! Data persistence
//!
//! Handles the brewery entity type, favorites, and JSON storage.

pub mod favorites;
pub mod storage;
pub mod types;

// Re-export common types
pub use favorites::Favorites;
pub use storage::{config_dir, data_path};
pub use types::Brewery;
