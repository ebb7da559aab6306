//! UI Components
//!
//! Leptos components for the map and the marker editor.

mod map_surface;
mod marker_editor;

pub use map_surface::MapSurface;
pub use marker_editor::MarkerEditor;
