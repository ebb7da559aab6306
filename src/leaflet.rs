//! Leaflet Bindings
//!
//! wasm-bindgen imports for the slice of the Leaflet API the map surface
//! uses. Leaflet is loaded from a CDN in index.html and reached through the
//! `L` global. Tile fetching, projection, pin rendering, and the guarantee
//! that clicking a pin opens its popup instead of bubbling a map click are
//! all the widget's responsibility.

use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// A Leaflet map bound to a DOM container.
    pub type Map;

    #[wasm_bindgen(js_namespace = L, js_name = map)]
    pub fn new_map(container: &web_sys::HtmlElement, options: &JsValue) -> Map;

    /// Registers `handler` for a map event such as `"click"`.
    #[wasm_bindgen(method)]
    pub fn on(this: &Map, event: &str, handler: &JsValue);

    pub type TileLayer;

    #[wasm_bindgen(js_namespace = L, js_name = tileLayer)]
    pub fn new_tile_layer(url: &str, options: &JsValue) -> TileLayer;

    #[wasm_bindgen(method, js_name = addTo)]
    pub fn add_to(this: &TileLayer, map: &Map) -> TileLayer;

    /// Container for pins, cleared and rebuilt as a unit.
    pub type LayerGroup;

    #[wasm_bindgen(js_namespace = L, js_name = layerGroup)]
    pub fn new_layer_group() -> LayerGroup;

    #[wasm_bindgen(method, js_name = addTo)]
    pub fn add_to(this: &LayerGroup, map: &Map) -> LayerGroup;

    #[wasm_bindgen(method, js_name = clearLayers)]
    pub fn clear_layers(this: &LayerGroup);

    #[wasm_bindgen(method, js_name = addLayer)]
    pub fn add_layer(this: &LayerGroup, layer: &Pin);

    /// A marker pin (`L.Marker`).
    pub type Pin;

    #[wasm_bindgen(js_namespace = L, js_name = marker)]
    pub fn new_pin(latlng: &JsValue) -> Pin;

    #[wasm_bindgen(method, js_name = bindPopup)]
    pub fn bind_popup(this: &Pin, html: &str) -> Pin;

    /// Leaflet mouse event carrying the geographic coordinate clicked.
    pub type MapMouseEvent;

    #[wasm_bindgen(method, getter)]
    pub fn latlng(this: &MapMouseEvent) -> LatLng;

    pub type LatLng;

    #[wasm_bindgen(method, getter)]
    pub fn lat(this: &LatLng) -> f64;

    #[wasm_bindgen(method, getter)]
    pub fn lng(this: &LatLng) -> f64;

    /// `L.Icon.Default.mergeOptions`, used to repoint the stock pin images.
    #[wasm_bindgen(js_namespace = ["L", "Icon", "Default"], js_name = mergeOptions)]
    pub fn merge_default_icon_options(options: &JsValue);
}

/// Options for `L.map`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapOptions {
    pub center: crate::models::LatLng,
    pub zoom: u8,
    pub scroll_wheel_zoom: bool,
}

/// Options for `L.tileLayer`.
#[derive(Debug, Serialize)]
pub struct TileLayerOptions<'a> {
    pub attribution: &'a str,
}

/// Replacement URLs for the default pin graphics.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IconDefaultOptions<'a> {
    pub icon_retina_url: &'a str,
    pub icon_url: &'a str,
    pub shadow_url: &'a str,
}
