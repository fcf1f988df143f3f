//! Device and KPI renderers.

use ngsi_poi_entity_models::Entity;
use ngsi_poi_models::{Coordinates, Icon, Poi};

use super::assemble;
use crate::context::RenderContext;
use crate::format::{format_address, format_date};
use crate::html::{InfoWindow, icons};
use crate::parsing::parse_device_values;

/// `Device`: a single category names the icon, anything else falls back
/// to the generic device marker.
pub fn device(entity: &Entity, coordinates: &Coordinates, ctx: &RenderContext) -> Poi {
    let categories = entity.text_list("category").unwrap_or_default();
    let icon_name = match categories.as_slice() {
        [only] => only.as_str(),
        _ => "generic",
    };
    let icon = Icon::marker(ctx.icon_url(&format!("images/devices/{icon_name}.png")));

    let mut window = InfoWindow::new();
    if let Some(description) = entity.display("description") {
        window.paragraph(&description);
    }
    window.raw(&format_address(entity.address().as_ref()));
    if let Some(date) = entity.text("dateModified") {
        window.labeled(icons::CLOCK, "Date", &format_date(date, ctx.locale()));
    }
    // Readings come packed as "key=value;key=value"; the matching label for
    // each position lives in controlledProperty.
    if let Some(packed) = entity.text("value") {
        let properties = entity.text_list("controlledProperty").unwrap_or_default();
        let values: Vec<(String, String)> = parse_device_values(packed)
            .into_iter()
            .map(|(index, key, value)| {
                let label = properties.get(index).cloned().unwrap_or(key);
                (label, value)
            })
            .collect();
        window.keyed_list("Values", &values);
    }

    assemble(
        entity,
        coordinates,
        icon,
        entity.display("name"),
        window.finish(),
        None,
    )
}

/// `KeyPerformanceIndicator`: the current standing names the icon.
pub fn key_performance_indicator(
    entity: &Entity,
    coordinates: &Coordinates,
    ctx: &RenderContext,
) -> Poi {
    // The icon set ships an "undefined.png" for indicators without a
    // standing, so the literal name is kept here.
    let standing = entity
        .text("currentStanding")
        .map_or_else(|| "undefined".to_string(), |s| s.split_whitespace().collect());
    let icon = Icon::marker(ctx.icon_url(&format!("images/kpi/{standing}.png")));

    let mut window = InfoWindow::new();
    if let Some(description) = entity.display("description") {
        window.paragraph(&description);
    }
    window.raw(&format_address(entity.address().as_ref()));
    if let Some(standing) = entity.display("currentStanding") {
        window.field(icons::INFO, "Current standing", &standing);
    }
    if let Some(process) = entity.display("process") {
        window.field(icons::INFO, "Process", &process);
    } else if let Some(product) = entity.display("product") {
        window.field(icons::INFO, "Product", &product);
    }
    if let Some(value) = entity.display("kpiValue") {
        window.field(icons::INFO, "Value", &value);
    }
    if let Some(date) = entity.text("dateModified") {
        window.labeled(icons::CLOCK, "Date", &format_date(date, ctx.locale()));
    }
    if let Some(frequency) = entity.display("calculationFrequency") {
        window.field(icons::INFO, "Calculation frequency", &frequency);
    }

    assemble(
        entity,
        coordinates,
        icon,
        entity.display("name"),
        window.finish(),
        None,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::BaseUrl;
    use serde_json::json;

    fn entity(value: serde_json::Value) -> Entity {
        serde_json::from_value(value).unwrap()
    }

    fn coords() -> Coordinates {
        Coordinates::new(2.1734, 41.3851)
    }

    #[test]
    fn device_pairs_values_with_controlled_properties() {
        let resolver = BaseUrl::default();
        let ctx = RenderContext::new("en", &resolver);
        let poi = device(
            &entity(json!({
                "id": "d1",
                "type": "Device",
                "name": "Sensor 1",
                "category": ["sensor"],
                "controlledProperty": ["temperature", "humidity"],
                "value": "t=21.2;h=0.4"
            })),
            &coords(),
            &ctx,
        );
        assert_eq!(poi.title, "Sensor 1");
        assert_eq!(poi.icon.src, "images/devices/sensor.png");
        assert!(poi.info_window.contains("<li><b>temperature</b>: 21.2</li>"));
        assert!(poi.info_window.contains("<li><b>humidity</b>: 0.4</li>"));
    }

    #[test]
    fn device_falls_back_to_packed_keys_and_generic_icon() {
        let resolver = BaseUrl::default();
        let ctx = RenderContext::new("en", &resolver);
        let poi = device(
            &entity(json!({
                "id": "d2",
                "type": "Device",
                "category": ["sensor", "actuator"],
                "value": "t=21.2;broken;h=0.4"
            })),
            &coords(),
            &ctx,
        );
        assert_eq!(poi.icon.src, "images/devices/generic.png");
        assert!(poi.info_window.contains("<li><b>t</b>: 21.2</li>"));
        assert!(poi.info_window.contains("<li><b>h</b>: 0.4</li>"));
        assert!(!poi.info_window.contains("broken"));
    }

    #[test]
    fn kpi_strips_whitespace_from_the_standing() {
        let resolver = BaseUrl::default();
        let ctx = RenderContext::new("en", &resolver);
        let poi = key_performance_indicator(
            &entity(json!({
                "id": "k1",
                "type": "KeyPerformanceIndicator",
                "name": "Waste collection coverage",
                "currentStanding": "Very good",
                "kpiValue": 0.93,
                "process": "waste collection"
            })),
            &coords(),
            &ctx,
        );
        assert_eq!(poi.icon.src, "images/kpi/Verygood.png");
        assert!(poi.info_window.contains("<b>Current standing:</b> Very good"));
        assert!(poi.info_window.contains("<b>Process:</b> waste collection"));
        assert!(poi.info_window.contains("<b>Value:</b> 0.93"));
    }

    #[test]
    fn kpi_without_standing_uses_the_fallback_icon() {
        let resolver = BaseUrl::default();
        let ctx = RenderContext::new("en", &resolver);
        let poi = key_performance_indicator(
            &entity(json!({"id": "k2", "type": "KeyPerformanceIndicator"})),
            &coords(),
            &ctx,
        );
        assert_eq!(poi.icon.src, "images/kpi/undefined.png");
        assert_eq!(poi.title, "k2");
        assert!(!poi.info_window.contains("undefined"));
    }
}
