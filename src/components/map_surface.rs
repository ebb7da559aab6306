//! Map Surface Component
//!
//! Hosts the Leaflet map: fixed initial viewport, one pin per saved marker,
//! and a click listener that reports the clicked coordinate upward. Holds no
//! application state of its own.

use leptos::html;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;

use crate::leaflet;
use crate::models::{LatLng, Marker, DEFAULT_POSITION, DEFAULT_ZOOM};

/// OpenStreetMap raster tile endpoint.
const TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";

/// Attribution required by the tile provider.
const TILE_ATTRIBUTION: &str =
    r#"&copy; <a href="https://www.openstreetmap.org/copyright">OpenStreetMap</a> contributors"#;

// Leaflet's bundled icon paths break under wasm packaging, so the stock pin
// graphics are pinned to CDN URLs.
const ICON_URL: &str = "https://cdnjs.cloudflare.com/ajax/libs/leaflet/1.3.1/images/marker-icon.png";
const ICON_RETINA_URL: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/leaflet/1.3.1/images/marker-icon-2x.png";
const SHADOW_URL: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/leaflet/1.3.1/images/marker-shadow.png";

/// Interactive map with pins for every saved marker
#[component]
pub fn MapSurface(
    /// Saved markers to render, in order
    #[prop(into)]
    markers: Signal<Vec<Marker>>,
    /// Called with the geographic coordinate of each map click
    #[prop(into)]
    on_pick: Callback<LatLng>,
) -> impl IntoView {
    let map_node = NodeRef::<html::Div>::new();
    let pins = RwSignal::new_local(None::<leaflet::LayerGroup>);

    // Create the map once the container div is mounted.
    Effect::new(move |_| {
        let Some(node) = map_node.get() else { return };
        if pins.with_untracked(|group| group.is_some()) {
            return;
        }

        leaflet::merge_default_icon_options(
            &serde_wasm_bindgen::to_value(&leaflet::IconDefaultOptions {
                icon_retina_url: ICON_RETINA_URL,
                icon_url: ICON_URL,
                shadow_url: SHADOW_URL,
            })
            .unwrap(),
        );

        let options = serde_wasm_bindgen::to_value(&leaflet::MapOptions {
            center: DEFAULT_POSITION,
            zoom: DEFAULT_ZOOM,
            scroll_wheel_zoom: false,
        })
        .unwrap();
        let map = leaflet::new_map(&node, &options);

        let tile_options = serde_wasm_bindgen::to_value(&leaflet::TileLayerOptions {
            attribution: TILE_ATTRIBUTION,
        })
        .unwrap();
        leaflet::new_tile_layer(TILE_URL, &tile_options).add_to(&map);

        // Pin clicks open their popup and do not reach this handler; Leaflet
        // keeps marker clicks from bubbling to the map.
        let on_click =
            Closure::<dyn FnMut(leaflet::MapMouseEvent)>::new(move |ev: leaflet::MapMouseEvent| {
                let at = ev.latlng();
                on_pick.run(LatLng {
                    lat: at.lat(),
                    lng: at.lng(),
                });
            });
        map.on("click", on_click.as_ref());
        on_click.forget();

        pins.set(Some(leaflet::new_layer_group().add_to(&map)));
        web_sys::console::log_1(&"[MAP] initialized".into());
    });

    // Rebuild the pin layer whenever the saved list changes.
    Effect::new(move |_| {
        let markers = markers.get();
        pins.with(|group| {
            let Some(group) = group else { return };
            group.clear_layers();
            for marker in &markers {
                let latlng = serde_wasm_bindgen::to_value(&marker.position).unwrap();
                let pin = leaflet::new_pin(&latlng);
                pin.bind_popup(&popup_html(marker));
                group.add_layer(&pin);
            }
        });
    });

    view! { <div class="map-surface" node_ref=map_node></div> }
}

/// Popup body: emphasized title over the description.
///
/// Marker text is user input, so both fields are escaped before being handed
/// to Leaflet as HTML.
fn popup_html(marker: &Marker) -> String {
    format!(
        "<strong>{}</strong><br>{}",
        escape_html(&marker.title),
        escape_html(&marker.description)
    )
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_popup_emphasizes_title() {
        let marker = Marker {
            position: DEFAULT_POSITION,
            title: "Cafe".to_string(),
            description: "Good coffee".to_string(),
        };
        assert_eq!(popup_html(&marker), "<strong>Cafe</strong><br>Good coffee");
    }

    #[test]
    fn test_popup_escapes_user_text() {
        let marker = Marker {
            position: DEFAULT_POSITION,
            title: "<script>alert(1)</script>".to_string(),
            description: r#"a & b "quoted""#.to_string(),
        };
        assert_eq!(
            popup_html(&marker),
            "<strong>&lt;script&gt;alert(1)&lt;/script&gt;</strong><br>a &amp; b &quot;quoted&quot;"
        );
    }
}
