//! Application state, action dispatch, and view projections

pub mod controller;
pub mod state;
pub mod view;

pub use controller::{Controller, Region, UiAction};
pub use state::CatalogState;
pub use view::{details_view, favorites_view, list_view, DetailsView, FavoriteRow, ListRow};
