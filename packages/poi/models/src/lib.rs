#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Point-of-interest record types.
//!
//! A [`Poi`] is what the map-rendering widget consumes: a marker icon, a
//! title, a coordinate pair and an HTML info-window fragment, plus the
//! original entity as a back-reference. These types are serialized to JSON
//! for the widget, so every wire name is camelCase.

use ngsi_poi_entity_models::Entity;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum_macros::{AsRefStr, Display, EnumString};

/// Coordinate reference system used for all derived coordinates.
pub const COORDINATE_SYSTEM: &str = "WGS84";

/// A WGS84 coordinate pair in the widget's representation.
///
/// GeoJSON orders coordinates longitude-first; the widget wants named
/// fields. Malformed coordinate entries become `NaN` rather than an error —
/// the widget tolerates (and drops) NaN markers on its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Always [`COORDINATE_SYSTEM`].
    pub system: String,
    /// Longitude in degrees.
    pub lng: f64,
    /// Latitude in degrees.
    pub lat: f64,
}

impl Coordinates {
    /// Builds a coordinate pair directly.
    #[must_use]
    pub fn new(lng: f64, lat: f64) -> Self {
        Self {
            system: COORDINATE_SYSTEM.to_string(),
            lng,
            lat,
        }
    }

    /// Extracts coordinates from a GeoJSON-style location object.
    ///
    /// Reads `location.coordinates[0]` (longitude) and `[1]` (latitude),
    /// accepting numbers and numeric strings. Anything missing or
    /// non-numeric yields `NaN` for that axis.
    #[must_use]
    pub fn from_location(location: &Value) -> Self {
        let axis = |index: usize| {
            location
                .get("coordinates")
                .and_then(|coords| coords.get(index))
                .map_or(f64::NAN, coordinate_value)
        };
        Self::new(axis(0), axis(1))
    }
}

fn coordinate_value(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        Value::String(s) => s.trim().parse().unwrap_or(f64::NAN),
        _ => f64::NAN,
    }
}

/// Marker icon descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Icon {
    /// Anchor point within the image, as fractions of width/height.
    pub anchor: [f64; 2],
    /// Display scale factor.
    pub scale: f64,
    /// Resolved image URL.
    pub src: String,
}

impl Icon {
    /// A pin-style marker anchored at its bottom center.
    #[must_use]
    pub fn marker(src: String) -> Self {
        Self {
            anchor: [0.5, 1.0],
            scale: 0.4,
            src,
        }
    }

    /// A symbol centered on the coordinate (weather icons).
    #[must_use]
    pub fn centered(src: String) -> Self {
        Self {
            anchor: [0.5, 0.5],
            scale: 0.5,
            src,
        }
    }
}

/// Fill and stroke colors for classification-based marker styling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkerStyle {
    /// CSS fill color.
    pub fill: String,
    /// CSS stroke color.
    pub stroke: String,
}

impl MarkerStyle {
    fn new(fill: &str, stroke: &str) -> Self {
        Self {
            fill: fill.to_string(),
            stroke: stroke.to_string(),
        }
    }
}

/// Classification level shared by the threshold-based entity types.
///
/// The lowercase form is also the icon file name, so the wire names carry
/// no separators (`"verylow"`, not `"very-low"`).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SeverityLevel {
    /// The classifying measurement is missing.
    Unknown,
    VeryLow,
    Low,
    Moderate,
    High,
    VeryHigh,
}

impl SeverityLevel {
    /// The fixed fill/stroke pair for this level.
    ///
    /// These values are part of the widget contract and must not drift.
    #[must_use]
    pub fn marker_style(self) -> MarkerStyle {
        match self {
            Self::Unknown => MarkerStyle::new("rgba(51, 51, 51, 0.1)", "#333333"),
            Self::VeryLow => MarkerStyle::new("rgba(121, 188, 106, 0.3)", "rgb(99, 112, 30)"),
            Self::Low => MarkerStyle::new("rgba(187, 207, 76, 0.3)", "rgba(187, 207, 76, 0.9)"),
            Self::Moderate => MarkerStyle::new("rgba(238, 194, 11, 0.3)", "rgba(238, 194, 11, 0.9)"),
            Self::High => MarkerStyle::new("rgba(242, 147, 5, 0.3)", "rgba(242, 147, 5, 0.9)"),
            Self::VeryHigh => MarkerStyle::new("rgba(150, 0, 24, 0.3)", "rgba(150, 0, 24, 0.9)"),
        }
    }
}

/// A point-of-interest record, created fresh per entity and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Poi {
    /// Copied from the entity `id`.
    pub id: String,
    /// Marker icon.
    pub icon: Icon,
    /// Hover tooltip — always the entity `id`.
    pub tooltip: String,
    /// The original entity, unmodified.
    pub data: Entity,
    /// Human-readable label. Falls back to the entity `id` when the
    /// type-specific naming fields are absent, never blank.
    pub title: String,
    /// HTML fragment for the map popup. Built only from present fields —
    /// must never contain the substring `"undefined"`.
    pub info_window: String,
    /// Derived coordinates.
    pub current_location: Coordinates,
    /// The raw GeoJSON location, duplicated for consumer convenience.
    pub location: Value,
    /// Classification styling; only the threshold-based types set this.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<MarkerStyle>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn coordinates_from_geojson_point() {
        let location = json!({"type": "Point", "coordinates": [-8.6096, 41.1507]});
        let coords = Coordinates::from_location(&location);
        assert_eq!(coords.system, "WGS84");
        assert!((coords.lng - -8.6096).abs() < f64::EPSILON);
        assert!((coords.lat - 41.1507).abs() < f64::EPSILON);
    }

    #[test]
    fn coordinates_accept_numeric_strings() {
        let location = json!({"coordinates": ["-8.6", "41.15"]});
        let coords = Coordinates::from_location(&location);
        assert!((coords.lng - -8.6).abs() < f64::EPSILON);
        assert!((coords.lat - 41.15).abs() < f64::EPSILON);
    }

    #[test]
    fn malformed_coordinates_become_nan() {
        let coords = Coordinates::from_location(&json!({"coordinates": ["north", true]}));
        assert!(coords.lng.is_nan());
        assert!(coords.lat.is_nan());

        let empty = Coordinates::from_location(&json!({"type": "Point"}));
        assert!(empty.lng.is_nan());
        assert!(empty.lat.is_nan());
    }

    #[test]
    fn severity_levels_name_icon_files() {
        assert_eq!(SeverityLevel::VeryLow.to_string(), "verylow");
        assert_eq!(SeverityLevel::Moderate.to_string(), "moderate");
        assert_eq!(SeverityLevel::VeryHigh.to_string(), "veryhigh");
    }

    #[test]
    fn marker_styles_match_the_widget_contract() {
        let unknown = SeverityLevel::Unknown.marker_style();
        assert_eq!(unknown.fill, "rgba(51, 51, 51, 0.1)");
        assert_eq!(unknown.stroke, "#333333");

        let very_high = SeverityLevel::VeryHigh.marker_style();
        assert_eq!(very_high.fill, "rgba(150, 0, 24, 0.3)");
        assert_eq!(very_high.stroke, "rgba(150, 0, 24, 0.9)");
    }

    #[test]
    fn poi_serialization_skips_absent_style() {
        let entity: Entity =
            serde_json::from_value(json!({"id": "1", "type": "Beach"})).unwrap();
        let poi = Poi {
            id: entity.id.clone(),
            icon: Icon::marker("images/beach/unknown.png".to_string()),
            tooltip: entity.id.clone(),
            data: entity,
            title: "1".to_string(),
            info_window: "<div></div>".to_string(),
            current_location: Coordinates::new(-8.6, 41.15),
            location: json!({"type": "Point", "coordinates": [-8.6, 41.15]}),
            style: None,
        };
        let value = serde_json::to_value(&poi).unwrap();
        assert!(value.get("style").is_none());
        assert_eq!(value["infoWindow"], "<div></div>");
        assert_eq!(value["currentLocation"]["system"], "WGS84");
    }
}
