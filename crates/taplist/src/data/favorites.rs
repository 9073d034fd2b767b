//! Favorites management
//!
//! In-memory set of favorite breweries, unique by id, kept in insertion
//! order. Persisted as a plain JSON array of full brewery records so the
//! favorites list renders without the catalog being loaded.

use crate::data::storage;
use crate::data::types::Brewery;
use crate::error::Result;
use std::path::Path;
use tracing::warn;

/// Favorites data file name
pub const FAVORITES_FILE: &str = "favorites.json";

/// The user-curated favorites set
///
/// Membership is by `id` equality, never by reference. Insertion order is
/// preserved (most-recently-added last) and used as display order.
#[derive(Debug, Default)]
pub struct Favorites {
    entries: Vec<Brewery>,
}

impl Favorites {
    /// Create an empty set
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Load favorites from a specific path
    ///
    /// A missing file yields an empty set. An unreadable or unparsable file
    /// also yields an empty set — availability over strictness — with a
    /// logged warning.
    pub fn load_from(path: &Path) -> Self {
        let entries = match storage::load_from::<Vec<Brewery>>(path) {
            Ok(Some(entries)) => entries,
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!("ignoring unreadable favorites file: {e}");
                Vec::new()
            }
        };
        Self { entries }
    }

    /// Save favorites to a specific path
    ///
    /// Rewrites the whole record; callers invoke this synchronously after
    /// every mutation so the persisted record never trails memory.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        storage::save_to(path, &self.entries)
    }

    /// True iff some favorite has the given id
    pub fn contains(&self, id: &str) -> bool {
        self.entries.iter().any(|b| b.id == id)
    }

    /// Toggle favorite status for a brewery
    ///
    /// Removes the member with a matching id if present, otherwise appends
    /// a copy. Returns true if the brewery was added.
    pub fn toggle(&mut self, brewery: &Brewery) -> bool {
        if self.contains(&brewery.id) {
            self.entries.retain(|b| b.id != brewery.id);
            false
        } else {
            self.entries.push(brewery.clone());
            true
        }
    }

    /// Look up a favorite by id
    pub fn get(&self, id: &str) -> Option<&Brewery> {
        self.entries.iter().find(|b| b.id == id)
    }

    /// All favorites in insertion order
    pub fn all(&self) -> &[Brewery] {
        &self.entries
    }

    /// Number of favorites
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env::temp_dir;
    use std::fs;
    use std::sync::atomic::{AtomicU32, Ordering};

    static TEST_COUNTER: AtomicU32 = AtomicU32::new(0);

    fn temp_path() -> std::path::PathBuf {
        let id = TEST_COUNTER.fetch_add(1, Ordering::SeqCst);
        temp_dir().join(format!(
            "taplist_fav_test_{}_{}.json",
            std::process::id(),
            id
        ))
    }

    fn brewery(id: &str, name: &str) -> Brewery {
        Brewery::new(id, name)
    }

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut favorites = Favorites::new();
        let b = brewery("1", "Alpha");

        assert!(favorites.toggle(&b));
        assert!(favorites.contains("1"));

        assert!(!favorites.toggle(&b));
        assert!(!favorites.contains("1"));
        assert!(favorites.is_empty());
    }

    #[test]
    fn test_toggle_pairing_restores_membership() {
        let mut favorites = Favorites::new();
        favorites.toggle(&brewery("1", "Alpha"));
        favorites.toggle(&brewery("2", "Beta"));

        let before: Vec<String> = favorites.all().iter().map(|b| b.id.clone()).collect();

        favorites.toggle(&brewery("3", "Gamma"));
        favorites.toggle(&brewery("3", "Gamma"));

        let after: Vec<String> = favorites.all().iter().map(|b| b.id.clone()).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_uniqueness_by_id_not_reference() {
        let mut favorites = Favorites::new();
        favorites.toggle(&brewery("1", "Alpha"));

        // Same id, different instance (even a different name): still a removal.
        favorites.toggle(&brewery("1", "Alpha Renamed"));
        assert!(favorites.is_empty());
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut favorites = Favorites::new();
        favorites.toggle(&brewery("2", "Beta"));
        favorites.toggle(&brewery("1", "Alpha"));
        favorites.toggle(&brewery("3", "Gamma"));

        let names: Vec<&str> = favorites.all().iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec!["Beta", "Alpha", "Gamma"]);
    }

    #[test]
    fn test_get_by_id() {
        let mut favorites = Favorites::new();
        favorites.toggle(&brewery("1", "Alpha"));

        assert_eq!(favorites.get("1").unwrap().name, "Alpha");
        assert!(favorites.get("2").is_none());
    }

    // =========================================================================
    // Persistence tests
    // =========================================================================

    #[test]
    fn test_save_and_load_roundtrip() {
        let path = temp_path();

        {
            let mut favorites = Favorites::new();
            favorites.toggle(&brewery("1", "Alpha").with_location("Portland", "Oregon"));
            favorites.toggle(&brewery("2", "Beta"));
            favorites.save_to(&path).unwrap();
        }

        {
            let favorites = Favorites::load_from(&path);
            assert_eq!(favorites.len(), 2);
            assert!(favorites.contains("1"));
            assert!(favorites.contains("2"));
            assert_eq!(favorites.get("1").unwrap().city, "Portland");
            // Insertion order survives the restart
            assert_eq!(favorites.all()[0].id, "1");
        }

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_persisted_record_is_plain_array() {
        let path = temp_path();

        let mut favorites = Favorites::new();
        favorites.toggle(&brewery("1", "Alpha"));
        favorites.save_to(&path).unwrap();

        let raw: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert!(raw.is_array());
        assert_eq!(raw.as_array().unwrap().len(), 1);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_nonexistent_file() {
        let path = temp_path();
        let favorites = Favorites::load_from(&path);
        assert!(favorites.is_empty());
    }

    #[test]
    fn test_load_malformed_json_fails_soft() {
        let path = temp_path();
        fs::write(&path, "{ this is not json").unwrap();

        let favorites = Favorites::load_from(&path);
        assert!(favorites.is_empty());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_remove_and_save() {
        let path = temp_path();

        {
            let mut favorites = Favorites::new();
            favorites.toggle(&brewery("1", "Keep"));
            favorites.toggle(&brewery("2", "Remove"));
            favorites.save_to(&path).unwrap();
        }

        {
            let mut favorites = Favorites::load_from(&path);
            favorites.toggle(&brewery("2", "Remove"));
            favorites.save_to(&path).unwrap();
        }

        {
            let favorites = Favorites::load_from(&path);
            assert_eq!(favorites.len(), 1);
            assert!(favorites.contains("1"));
            assert!(!favorites.contains("2"));
        }

        let _ = fs::remove_file(&path);
    }
}
