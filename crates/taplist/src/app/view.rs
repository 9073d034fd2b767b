//! View projections
//!
//! Pure functions from state to displayable data. Frontends rebuild each
//! region wholesale from these on every render — no incremental diffing —
//! so displayed state never silently diverges from the catalog or the
//! favorites set. Equal state always projects to equal views.

use crate::app::state::CatalogState;
use crate::config::ui::{ADD_FAVORITE, REMOVE_FAVORITE};
use crate::data::types::Brewery;

/// One row of the main catalog list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRow {
    pub id: String,
    pub name: String,
    /// Favorite-control label; `None` while the control is hidden
    pub control: Option<&'static str>,
}

/// The details panel content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailsView {
    pub name: String,
    pub brewery_type: String,
    /// "city, state"
    pub location: String,
    /// Link target, rendered as-is; empty when the entity has none
    pub website_url: String,
}

/// One row of the favorites list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FavoriteRow {
    pub id: String,
    pub name: String,
    /// Always visible, always a removal
    pub control: &'static str,
}

fn control_label(state: &CatalogState, id: &str) -> &'static str {
    if state.is_favorite(id) {
        REMOVE_FAVORITE
    } else {
        ADD_FAVORITE
    }
}

/// Project the main list: one row per visible entity, in catalog order
pub fn list_view(state: &CatalogState) -> Vec<ListRow> {
    state
        .visible()
        .iter()
        .map(|b| ListRow {
            id: b.id.clone(),
            name: b.name.clone(),
            control: state
                .control_shown(&b.id)
                .then(|| control_label(state, &b.id)),
        })
        .collect()
}

/// Project the details panel from the selected entity, if any
pub fn details_view(state: &CatalogState) -> Option<DetailsView> {
    state.details().map(details_of)
}

fn details_of(b: &Brewery) -> DetailsView {
    DetailsView {
        name: b.name.clone(),
        brewery_type: b.brewery_type.clone(),
        location: b.location(),
        website_url: b.website_url.clone().unwrap_or_default(),
    }
}

/// Project the favorites list, in insertion order
pub fn favorites_view(state: &CatalogState) -> Vec<FavoriteRow> {
    state
        .favorites()
        .all()
        .iter()
        .map(|b| FavoriteRow {
            id: b.id.clone(),
            name: b.name.clone(),
            control: REMOVE_FAVORITE,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::CatalogProvider;
    use std::env::temp_dir;
    use std::sync::atomic::{AtomicU32, Ordering};

    static TEST_COUNTER: AtomicU32 = AtomicU32::new(0);

    struct StaticProvider(Vec<Brewery>);

    impl CatalogProvider for StaticProvider {
        fn name(&self) -> &'static str {
            "Static"
        }
        fn id(&self) -> &'static str {
            "static"
        }
        fn list(&self) -> crate::error::Result<Vec<Brewery>> {
            Ok(self.0.clone())
        }
    }

    fn sample_state() -> CatalogState {
        let id = TEST_COUNTER.fetch_add(1, Ordering::SeqCst);
        let path = temp_dir().join(format!(
            "taplist_view_test_{}_{}.json",
            std::process::id(),
            id
        ));
        let mut state = CatalogState::new(path);
        state.load_catalog(&StaticProvider(vec![
            Brewery::new("1", "Alpha").with_type("micro"),
            Brewery::new("2", "Beta"),
        ]));
        state
    }

    #[test]
    fn test_list_view_order_and_hidden_controls() {
        let state = sample_state();
        let rows = list_view(&state);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].name, "Alpha");
        assert!(rows.iter().all(|r| r.control.is_none()));
    }

    #[test]
    fn test_list_view_control_label_tracks_favorite_status() {
        let mut state = sample_state();
        state.toggle_control("1");
        assert_eq!(list_view(&state)[0].control, Some(ADD_FAVORITE));

        let alpha = state.find_visible("1").cloned().unwrap();
        state.toggle_favorite(&alpha);
        assert_eq!(list_view(&state)[0].control, Some(REMOVE_FAVORITE));
    }

    #[test]
    fn test_details_view_none_until_selection() {
        let state = sample_state();
        assert!(details_view(&state).is_none());
    }

    #[test]
    fn test_details_view_fields() {
        let mut state = sample_state();
        state.show_details(
            Brewery::new("1", "Alpha")
                .with_type("micro")
                .with_location("Portland", "Oregon")
                .with_website_opt(Some("http://alpha.example".to_string())),
        );

        let details = details_view(&state).unwrap();
        assert_eq!(details.name, "Alpha");
        assert_eq!(details.brewery_type, "micro");
        assert_eq!(details.location, "Portland, Oregon");
        assert_eq!(details.website_url, "http://alpha.example");
    }

    #[test]
    fn test_favorites_view_always_shows_remove_control() {
        let mut state = sample_state();
        let alpha = state.find_visible("1").cloned().unwrap();
        state.toggle_favorite(&alpha);

        let rows = favorites_view(&state);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].control, REMOVE_FAVORITE);
    }

    #[test]
    fn test_projections_are_idempotent() {
        let mut state = sample_state();
        state.toggle_control("2");
        state.show_details(Brewery::new("2", "Beta"));

        assert_eq!(list_view(&state), list_view(&state));
        assert_eq!(details_view(&state), details_view(&state));
        assert_eq!(favorites_view(&state), favorites_view(&state));
    }
}
