//! Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. All state
//! transitions go through the `store_*` helpers so the pending-marker
//! invariants live in one place.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{LatLng, Marker};

/// Application state: the saved markers plus the single pending slot.
#[derive(Clone, Debug, Store)]
pub struct AppState {
    /// Committed markers, in creation order
    pub saved_markers: Vec<Marker>,
    /// Marker being edited; None = editor hidden
    pub pending_marker: Option<Marker>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            saved_markers: vec![Marker::default_location()],
            pending_marker: None,
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Start editing a marker at `position`, discarding any previous pending one.
pub fn store_begin_pending(store: &AppStore, position: LatLng) {
    store.pending_marker().set(Some(Marker::draft(position)));
}

/// Replace the pending marker's title. No-op when nothing is pending.
pub fn store_update_pending_title(store: &AppStore, title: String) {
    store.pending_marker().update(|slot| {
        if let Some(marker) = slot.take() {
            *slot = Some(Marker { title, ..marker });
        }
    });
}

/// Replace the pending marker's description. No-op when nothing is pending.
pub fn store_update_pending_description(store: &AppStore, description: String) {
    store.pending_marker().update(|slot| {
        if let Some(marker) = slot.take() {
            *slot = Some(Marker {
                description,
                ..marker
            });
        }
    });
}

/// Move the pending marker into the saved list and clear the slot.
///
/// Refuses markers with an empty title or description and leaves the
/// pending slot untouched in that case. Returns whether a commit happened.
pub fn store_commit_pending(store: &AppStore) -> bool {
    let Some(marker) = store.pending_marker().get_untracked() else {
        return false;
    };
    if !marker.is_complete() {
        return false;
    }
    store.saved_markers().write().push(marker);
    store.pending_marker().set(None);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DEFAULT_POSITION;

    fn test_store() -> AppStore {
        Store::new(AppState::new())
    }

    fn at(lat: f64, lng: f64) -> LatLng {
        LatLng { lat, lng }
    }

    #[test]
    fn test_initial_state_has_default_marker() {
        let store = test_store();
        let saved = store.saved_markers().get_untracked();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].position, DEFAULT_POSITION);
        assert_eq!(saved[0].title, "Default Location");
        assert!(store.pending_marker().get_untracked().is_none());
    }

    #[test]
    fn test_begin_pending_opens_empty_draft() {
        let store = test_store();
        store_begin_pending(&store, at(10.0, 20.0));

        let pending = store.pending_marker().get_untracked().unwrap();
        assert_eq!(pending.position, at(10.0, 20.0));
        assert_eq!(pending.title, "");
        assert_eq!(pending.description, "");
    }

    #[test]
    fn test_second_click_overwrites_pending() {
        let store = test_store();
        store_begin_pending(&store, at(10.0, 20.0));
        store_update_pending_title(&store, "half-typed".to_string());

        store_begin_pending(&store, at(-3.0, 4.0));

        let pending = store.pending_marker().get_untracked().unwrap();
        assert_eq!(pending.position, at(-3.0, 4.0));
        assert_eq!(pending.title, "");
        assert_eq!(store.saved_markers().get_untracked().len(), 1);
    }

    #[test]
    fn test_updates_replace_one_field_at_a_time() {
        let store = test_store();
        store_begin_pending(&store, at(1.0, 2.0));
        store_update_pending_title(&store, "A".to_string());
        store_update_pending_description(&store, "B".to_string());

        let pending = store.pending_marker().get_untracked().unwrap();
        assert_eq!(pending.title, "A");
        assert_eq!(pending.description, "B");
        assert_eq!(pending.position, at(1.0, 2.0));
    }

    #[test]
    fn test_updates_without_pending_are_noops() {
        let store = test_store();
        store_update_pending_title(&store, "A".to_string());
        store_update_pending_description(&store, "B".to_string());
        assert!(store.pending_marker().get_untracked().is_none());
    }

    #[test]
    fn test_commit_appends_and_clears() {
        let store = test_store();
        store_begin_pending(&store, at(5.0, 6.0));
        store_update_pending_title(&store, "A".to_string());
        store_update_pending_description(&store, "B".to_string());

        assert!(store_commit_pending(&store));

        let saved = store.saved_markers().get_untracked();
        assert_eq!(saved.len(), 2);
        assert_eq!(saved[1].position, at(5.0, 6.0));
        assert_eq!(saved[1].title, "A");
        assert_eq!(saved[1].description, "B");
        assert!(store.pending_marker().get_untracked().is_none());
    }

    #[test]
    fn test_commit_rejects_incomplete_marker() {
        let store = test_store();
        store_begin_pending(&store, at(5.0, 6.0));
        store_update_pending_title(&store, "A".to_string());

        assert!(!store_commit_pending(&store));
        assert_eq!(store.saved_markers().get_untracked().len(), 1);
        // Editor stays open on the same draft
        let pending = store.pending_marker().get_untracked().unwrap();
        assert_eq!(pending.title, "A");

        store_update_pending_title(&store, String::new());
        store_update_pending_description(&store, "B".to_string());
        assert!(!store_commit_pending(&store));
        assert_eq!(store.saved_markers().get_untracked().len(), 1);
    }

    #[test]
    fn test_commit_without_pending_is_rejected() {
        let store = test_store();
        assert!(!store_commit_pending(&store));
        assert_eq!(store.saved_markers().get_untracked().len(), 1);
    }

    #[test]
    fn test_commits_preserve_submission_order() {
        let store = test_store();
        for i in 0..4 {
            store_begin_pending(&store, at(f64::from(i), 0.0));
            store_update_pending_title(&store, format!("Marker {}", i));
            store_update_pending_description(&store, format!("Description {}", i));
            assert!(store_commit_pending(&store));
        }

        let saved = store.saved_markers().get_untracked();
        assert_eq!(saved.len(), 5);
        assert_eq!(saved[0].title, "Default Location");
        for i in 0..4 {
            assert_eq!(saved[i + 1].title, format!("Marker {}", i));
        }
    }
}
