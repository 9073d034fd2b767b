//! Catalog state
//!
//! Owns the fetched catalog, the current main-list projection, the favorites
//! set, and the transient per-row control visibility. All mutation goes
//! through the controller; views are pure projections of this state.

use std::collections::HashSet;
use std::path::PathBuf;

use tracing::{error, warn};

use crate::data::favorites::Favorites;
use crate::data::types::Brewery;
use crate::providers::CatalogProvider;

/// Holder of the full catalog and the favorites collection
pub struct CatalogState {
    /// Full, most-recently-fetched catalog (API response order)
    catalog: Vec<Brewery>,
    /// Current main-list projection (filtered or full)
    visible: Vec<Brewery>,
    /// Raw filter input text, as typed
    filter: String,
    /// Entity currently shown in the details panel
    details: Option<Brewery>,
    /// Ids of rows whose favorite control is currently shown.
    /// Cleared whenever `visible` is rebuilt — the show/hide state is
    /// transient and never survives a re-render.
    shown_controls: HashSet<String>,
    favorites: Favorites,
    favorites_path: PathBuf,
}

impl CatalogState {
    /// Create state with favorites loaded from the given path
    ///
    /// A missing or unparsable favorites record yields an empty set.
    pub fn new(favorites_path: PathBuf) -> Self {
        let favorites = Favorites::load_from(&favorites_path);
        Self {
            catalog: Vec::new(),
            visible: Vec::new(),
            filter: String::new(),
            details: None,
            shown_controls: HashSet::new(),
            favorites,
            favorites_path,
        }
    }

    /// Fetch the catalog from a provider, replacing it wholesale on success
    ///
    /// On failure the catalog is left unchanged (empty at startup) and the
    /// failure goes to the log only; there is no retry and no user-visible
    /// error surface.
    pub fn load_catalog(&mut self, provider: &dyn CatalogProvider) {
        match provider.list() {
            Ok(breweries) => {
                self.catalog = breweries;
                self.visible = self.catalog.clone();
                self.shown_controls.clear();
            }
            Err(e) => {
                error!(provider = provider.id(), "failed to fetch catalog: {e}");
            }
        }
    }

    /// Recompute the main-list projection from the full catalog
    ///
    /// Case-insensitive, unanchored substring match over names. Always
    /// computed from the full catalog, so clearing the filter restores the
    /// complete list.
    pub fn apply_filter(&mut self, query: &str) {
        self.filter = query.to_string();
        let needle = query.to_lowercase();
        self.visible = self
            .catalog
            .iter()
            .filter(|b| b.name.to_lowercase().contains(&needle))
            .cloned()
            .collect();
        self.shown_controls.clear();
    }

    /// Rebuild the main list from the unfiltered catalog
    ///
    /// Used after a favorite toggle: the source re-renders with the full
    /// catalog while leaving the filter text in the input untouched.
    pub fn reset_visible_unfiltered(&mut self) {
        self.visible = self.catalog.clone();
        self.shown_controls.clear();
    }

    /// True iff some favorite has the same id
    pub fn is_favorite(&self, id: &str) -> bool {
        self.favorites.contains(id)
    }

    /// Toggle favorite status and synchronously persist the new set
    ///
    /// Persistence failure is logged, never propagated.
    pub fn toggle_favorite(&mut self, brewery: &Brewery) {
        self.favorites.toggle(brewery);
        if let Err(e) = self.favorites.save_to(&self.favorites_path) {
            warn!("failed to persist favorites: {e}");
        }
    }

    /// Show an entity in the details panel
    pub fn show_details(&mut self, brewery: Brewery) {
        self.details = Some(brewery);
    }

    /// Flip a row's control between hidden and shown
    pub fn toggle_control(&mut self, id: &str) {
        if !self.shown_controls.remove(id) {
            self.shown_controls.insert(id.to_string());
        }
    }

    /// Whether a row's control is currently shown
    pub fn control_shown(&self, id: &str) -> bool {
        self.shown_controls.contains(id)
    }

    /// Look up an entity in the current main-list projection
    pub fn find_visible(&self, id: &str) -> Option<&Brewery> {
        self.visible.iter().find(|b| b.id == id)
    }

    // Accessors for the view layer

    pub fn visible(&self) -> &[Brewery] {
        &self.visible
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn details(&self) -> Option<&Brewery> {
        self.details.as_ref()
    }

    pub fn favorites(&self) -> &Favorites {
        &self.favorites
    }

    pub fn catalog_len(&self) -> usize {
        self.catalog.len()
    }
}
