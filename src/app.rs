//! mmaps App
//!
//! Root component: owns the store, wires map clicks to the pending slot.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{MapSurface, MarkerEditor};
use crate::models::LatLng;
use crate::store::{store_begin_pending, AppState, AppStateStoreFields, AppStore};

#[component]
pub fn App() -> impl IntoView {
    let store: AppStore = Store::new(AppState::new());

    // Provide context to all children
    provide_context(store);

    // Each click replaces whatever draft was in progress.
    let on_pick = Callback::new(move |position: LatLng| {
        web_sys::console::log_1(
            &format!("[APP] map click at {:.5}, {:.5}", position.lat, position.lng).into(),
        );
        store_begin_pending(&store, position);
    });

    let saved_markers = Signal::derive(move || store.saved_markers().get());

    view! {
        <div class="app-shell">
            <div class="card">
                <h1>"mmaps"</h1>
                <MapSurface markers=saved_markers on_pick=on_pick />
                <MarkerEditor />
            </div>
        </div>
    }
}
