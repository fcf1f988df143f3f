//! Per-type entity renderers.
//!
//! Every renderer has the same shape: pick an icon by a type-specific rule,
//! compute a title with a fallback chain ending at the entity id, and build
//! an info window from the fields that are actually present.

pub mod civic;
pub mod devices;
pub mod environment;
pub mod fleet;
pub mod parking;
pub mod places;
pub mod streetlight;
pub mod waste;
pub mod weather;

use ngsi_poi_entity_models::Entity;
use ngsi_poi_models::{Coordinates, Icon, MarkerStyle, Poi};
use serde_json::Value;

/// Assembles the POI record shared by every renderer.
fn assemble(
    entity: &Entity,
    coordinates: &Coordinates,
    icon: Icon,
    title: Option<String>,
    info_window: String,
    style: Option<MarkerStyle>,
) -> Poi {
    Poi {
        id: entity.id.clone(),
        icon,
        tooltip: entity.id.clone(),
        data: entity.clone(),
        title: title.unwrap_or_else(|| entity.id.clone()),
        info_window,
        current_location: coordinates.clone(),
        location: entity.location.clone().unwrap_or(Value::Null),
        style,
    }
}

/// `"primary (secondary)"` when both parts exist, the primary alone
/// otherwise. Used by the compound title chains (station name + code,
/// name + alternate name, ...).
fn compound(primary: Option<String>, secondary: Option<String>) -> Option<String> {
    let primary = primary?;
    Some(match secondary {
        Some(secondary) => format!("{primary} ({secondary})"),
        None => primary,
    })
}
