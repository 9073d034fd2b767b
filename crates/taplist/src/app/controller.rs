//! Interaction controller
//!
//! A single dispatcher maps (region, id, action) to state mutations. The
//! frontend translates its input events into `UiAction`s and renders from
//! the view projections afterwards; no handler closures are wired into
//! rendered rows.

use crate::app::state::CatalogState;
use crate::providers::CatalogProvider;
use std::path::PathBuf;

/// The interactive region an action originated from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    /// The main catalog list
    Catalog,
    /// The favorites list
    Favorites,
}

/// User interactions, as data
#[derive(Debug, Clone)]
pub enum UiAction {
    /// The filter field changed; carries the raw input text
    FilterChanged(String),
    /// A row body was activated (the row, not its control)
    RowActivated { region: Region, id: String },
    /// A row's favorite control was activated. Row and control are disjoint
    /// targets: activating the control never also activates the row.
    ControlActivated { region: Region, id: String },
}

/// Owns the catalog state and applies actions to it
pub struct Controller {
    state: CatalogState,
}

impl Controller {
    /// Create a controller with favorites loaded from the given path
    pub fn new(favorites_path: PathBuf) -> Self {
        Self {
            state: CatalogState::new(favorites_path),
        }
    }

    /// Perform the startup catalog fetch (exactly one, before interaction)
    pub fn load_catalog(&mut self, provider: &dyn CatalogProvider) {
        self.state.load_catalog(provider);
    }

    /// Read access for view projections
    pub fn state(&self) -> &CatalogState {
        &self.state
    }

    /// Apply one user action. Unknown ids are ignored.
    pub fn dispatch(&mut self, action: UiAction) {
        match action {
            UiAction::FilterChanged(query) => {
                self.state.apply_filter(&query);
            }

            UiAction::RowActivated {
                region: Region::Catalog,
                id,
            } => {
                if let Some(brewery) = self.state.find_visible(&id).cloned() {
                    self.state.show_details(brewery);
                    self.state.toggle_control(&id);
                }
            }

            UiAction::RowActivated {
                region: Region::Favorites,
                id,
            } => {
                if let Some(brewery) = self.state.favorites().get(&id).cloned() {
                    self.state.show_details(brewery);
                }
            }

            UiAction::ControlActivated {
                region: Region::Catalog,
                id,
            } => {
                // A hidden control has no activation target.
                if !self.state.control_shown(&id) {
                    return;
                }
                if let Some(brewery) = self.state.find_visible(&id).cloned() {
                    self.state.toggle_favorite(&brewery);
                    // The source re-renders from the full catalog here, so an
                    // active filter's effect on the visible list is discarded
                    // while the filter text itself stays put.
                    self.state.reset_visible_unfiltered();
                }
            }

            UiAction::ControlActivated {
                region: Region::Favorites,
                id,
            } => {
                if let Some(brewery) = self.state.favorites().get(&id).cloned() {
                    self.state.toggle_favorite(&brewery);
                    self.state.reset_visible_unfiltered();
                }
            }
        }
    }
}
