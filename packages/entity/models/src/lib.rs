#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! NGSI (FIWARE) context entity types.
//!
//! Context brokers deliver entities as open-schema JSON objects: `id` and
//! `type` are always present, everything else depends on the data model the
//! producer follows (and on how much of it the producer bothered to fill in).
//! The accessors here encode that looseness once so the per-type renderers
//! don't have to re-check shapes on every read.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single NGSI context entity.
///
/// All attributes besides `id`, `type` and `location` are kept in an open
/// map so the original payload round-trips unchanged — downstream consumers
/// receive the entity back verbatim inside each POI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    /// Entity identifier, unique within the context broker.
    pub id: String,
    /// NGSI entity type, the dispatch key (e.g. `"AirQualityObserved"`).
    #[serde(rename = "type")]
    pub entity_type: String,
    /// GeoJSON location, kept as a raw value. Producers occasionally send
    /// strings or other malformed shapes here; those entities are skipped
    /// rather than rejected, so the field must stay permissive.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Value>,
    /// Every other attribute, untouched.
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl Entity {
    /// Returns the raw attribute value. JSON `null` reads as absent, matching
    /// the producer convention of nulling out expired measurements.
    #[must_use]
    pub fn attr(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name).filter(|value| !value.is_null())
    }

    /// Whether the attribute is present (and not `null`).
    #[must_use]
    pub fn has_attr(&self, name: &str) -> bool {
        self.attr(name).is_some()
    }

    /// String attribute, `None` for any other JSON type.
    #[must_use]
    pub fn text(&self, name: &str) -> Option<&str> {
        self.attr(name).and_then(Value::as_str)
    }

    /// Numeric attribute. Accepts JSON numbers and numeric strings — brokers
    /// fed from CSV pipelines routinely quote their measurements.
    #[must_use]
    pub fn number(&self, name: &str) -> Option<f64> {
        match self.attr(name)? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// List attribute. A JSON array yields its displayable items; a bare
    /// string is promoted to a one-element list.
    #[must_use]
    pub fn text_list(&self, name: &str) -> Option<Vec<String>> {
        match self.attr(name)? {
            Value::Array(items) => Some(items.iter().filter_map(display_value).collect()),
            Value::String(s) => Some(vec![s.clone()]),
            _ => None,
        }
    }

    /// Attribute rendered for human display: strings verbatim, numbers and
    /// booleans via `Display`, arrays joined with `", "`. Objects and absent
    /// attributes yield `None` so callers can skip the surrounding markup.
    #[must_use]
    pub fn display(&self, name: &str) -> Option<String> {
        self.attr(name).and_then(display_value)
    }

    /// The entity's postal address, when the `address` attribute is a
    /// well-formed object. Malformed addresses read as absent.
    #[must_use]
    pub fn address(&self) -> Option<PostalAddress> {
        let value = self.attr("address")?;
        if !value.is_object() {
            return None;
        }
        serde_json::from_value(value.clone()).ok()
    }
}

/// Display form of one JSON value, following the same rules as
/// [`Entity::display`].
#[must_use]
pub fn display_value(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Array(items) => Some(
            items
                .iter()
                .filter_map(display_value)
                .collect::<Vec<_>>()
                .join(", "),
        ),
        Value::Null | Value::Object(_) => None,
    }
}

/// A schema.org-style postal address, as used across the FIWARE data models.
///
/// Every component is optional; producers fill in whatever they have.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PostalAddress {
    /// Street name and number (e.g. "Rua de Fernandes Tomás").
    pub street_address: Option<String>,
    /// Locality / city.
    pub address_locality: Option<String>,
    /// Region or province.
    pub address_region: Option<String>,
    /// Postal code.
    pub postal_code: Option<String>,
    /// Country name.
    pub address_country: Option<String>,
}
