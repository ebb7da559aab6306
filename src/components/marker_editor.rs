//! Marker Editor Component
//!
//! Form bound to the pending marker. Visible only while one exists; there is
//! no cancel action, the only way to discard a draft is to click elsewhere
//! on the map.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::store::{
    store_commit_pending, store_update_pending_description, store_update_pending_title,
    use_app_store, AppStateStoreFields,
};

/// Form for titling and describing the pending marker
#[component]
pub fn MarkerEditor() -> impl IntoView {
    let store = use_app_store();

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        // The required attributes keep empty fields from reaching here, but
        // the commit helper enforces the same rule.
        if !store_commit_pending(&store) {
            web_sys::console::log_1(&"[EDITOR] rejected incomplete marker".into());
        }
    };

    view! {
        <Show when=move || store.pending_marker().get().is_some()>
            <form class="marker-editor" on:submit=submit>
                <h2>"Add New Marker"</h2>
                <div class="field">
                    <label for="title">"Title"</label>
                    <input
                        type="text"
                        id="title"
                        required
                        prop:value=move || {
                            store.pending_marker().get().map(|m| m.title).unwrap_or_default()
                        }
                        on:input=move |ev| {
                            let target = ev.target().unwrap();
                            let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                            store_update_pending_title(&store, input.value());
                        }
                    />
                </div>
                <div class="field">
                    <label for="description">"Description"</label>
                    <textarea
                        id="description"
                        rows="3"
                        required
                        prop:value=move || {
                            store.pending_marker().get().map(|m| m.description).unwrap_or_default()
                        }
                        on:input=move |ev| {
                            let target = ev.target().unwrap();
                            let textarea = target.dyn_ref::<web_sys::HtmlTextAreaElement>().unwrap();
                            store_update_pending_description(&store, textarea.value());
                        }
                    ></textarea>
                </div>
                <button type="submit">"Add Marker"</button>
            </form>
        </Show>
    }
}
