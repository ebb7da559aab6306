//! Marker Models
//!
//! Data structures for saved and pending map markers.

use serde::{Deserialize, Serialize};

/// Initial map center.
pub const DEFAULT_POSITION: LatLng = LatLng {
    lat: -26.18489,
    lng: -58.17313,
};

/// Initial map zoom level.
pub const DEFAULT_ZOOM: u8 = 13;

/// Geographic coordinate in degrees.
///
/// Serializes to `{ lat, lng }`, which Leaflet accepts directly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

/// A map marker with a position and user-entered text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub position: LatLng,
    pub title: String,
    pub description: String,
}

impl Marker {
    /// A fresh pending marker at `position` with empty text fields.
    pub fn draft(position: LatLng) -> Self {
        Self {
            position,
            title: String::new(),
            description: String::new(),
        }
    }

    /// The marker every session starts with.
    pub fn default_location() -> Self {
        Self {
            position: DEFAULT_POSITION,
            title: "Default Location".to_string(),
            description: "This is the default location".to_string(),
        }
    }

    /// A marker may only be saved once both text fields are filled in.
    pub fn is_complete(&self) -> bool {
        !self.title.is_empty() && !self.description.is_empty()
    }
}
