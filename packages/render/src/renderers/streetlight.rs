//! Streetlight renderers: individual lights, groups and control cabinets.

use ngsi_poi_entity_models::{Entity, display_value};
use ngsi_poi_models::{Coordinates, Icon, Poi};
use serde_json::Value;

use super::assemble;
use crate::context::RenderContext;
use crate::format::format_address;
use crate::html::{InfoWindow, icons};

/// `Streetlight`: any status other than `ok` wins over the power state.
pub fn streetlight(entity: &Entity, coordinates: &Coordinates, ctx: &RenderContext) -> Poi {
    let status = entity.text("status");
    let name = if status == Some("ok") {
        if entity.text("powerState") == Some("off") {
            "off"
        } else {
            "on"
        }
    } else {
        "notworking"
    };
    let icon = Icon::marker(ctx.icon_url(&format!("images/streetlight/{name}.png")));

    let mut window = InfoWindow::new();
    if let Some(description) = entity.display("description") {
        window.paragraph(&description);
    }
    window.raw(&format_address(entity.address().as_ref()));
    let status_text = if status == Some("ok") {
        entity.display("powerState")
    } else {
        entity.display("status")
    };
    if let Some(status_text) = status_text {
        window.note(icons::INFO, &format!("Street light status: {status_text}"));
    }
    if let Some(category) = entity.display("locationCategory") {
        window.note(icons::INFO, &format!("Location: {category}"));
    }
    if let Some(height) = entity.display("lanternHeight") {
        window.note(icons::INFO, &format!("Height: {height}m"));
    }
    if let Some(level) = entity.display("illuminanceLevel") {
        window.note(icons::INFO, &format!("Illuminance level: {level}/1"));
    }

    assemble(
        entity,
        coordinates,
        icon,
        entity.display("areaServed"),
        window.finish(),
        None,
    )
}

/// `StreetlightGroup`: on/off icon from the group power state.
pub fn streetlight_group(entity: &Entity, coordinates: &Coordinates, ctx: &RenderContext) -> Poi {
    let name = if entity.text("powerState") == Some("on") {
        "on"
    } else {
        "off"
    };
    let icon = Icon::marker(ctx.icon_url(&format!("images/streetlight/{name}.png")));

    let mut window = InfoWindow::new();
    if let Some(description) = entity.display("description") {
        window.paragraph(&description);
    }
    window.raw(&format_address(entity.address().as_ref()));
    let status = entity
        .display("powerState")
        .unwrap_or_else(|| "Unknown".to_string());
    window.note(icons::INFO, &format!("Street light status: {status}"));
    if let Some(modes) = entity.display("switchingMode") {
        window.note(icons::INFO, &format!("Switching mode: {modes}"));
    }
    if let Some(level) = entity.display("illuminanceLevel") {
        window.note(icons::INFO, &format!("Illuminance level: {level}/1"));
    }

    assemble(
        entity,
        coordinates,
        icon,
        entity.display("areaServed"),
        window.finish(),
        None,
    )
}

/// `StreetlightControlCabinet`: fixed icon plus per-phase measurement
/// dumps.
pub fn streetlight_control_cabinet(
    entity: &Entity,
    coordinates: &Coordinates,
    ctx: &RenderContext,
) -> Poi {
    let icon = Icon::marker(ctx.icon_url("images/streetlight/cabinet.png"));

    let mut window = InfoWindow::new();
    if let Some(description) = entity.display("description") {
        window.paragraph(&description);
    }
    window.raw(&format_address(entity.address().as_ref()));
    let energy = entity
        .display("energyConsumed")
        .or_else(|| entity.display("lastMeterReading"));
    if let Some(energy) = energy {
        window.note(icons::INFO, &format!("Energy consumed: {energy} kW"));
    }
    window.keyed_list("Intensity", &object_entries(entity, "intensity"));
    window.keyed_list("Reactive power", &object_entries(entity, "reactivePower"));

    assemble(
        entity,
        coordinates,
        icon,
        entity.display("areaServed"),
        window.finish(),
        None,
    )
}

/// Key/value pairs of an object attribute (per-phase readings such as
/// `{"L1": 9.4, "L2": 8.7}`). Non-displayable members are dropped.
fn object_entries(entity: &Entity, name: &str) -> Vec<(String, String)> {
    entity
        .attr(name)
        .and_then(Value::as_object)
        .map(|object| {
            object
                .iter()
                .filter_map(|(key, value)| Some((key.clone(), display_value(value)?)))
                .collect()
        })
        .unwrap_or_default()
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
        Coordinates::new(-5.9845, 37.3891)
    }

    #[test]
    fn broken_light_overrides_power_state() {
        let resolver = BaseUrl::default();
        let ctx = RenderContext::new("en", &resolver);
        let poi = streetlight(
            &entity(json!({
                "id": "l1",
                "type": "Streetlight",
                "status": "defectiveLamp",
                "powerState": "on",
                "areaServed": "Calle Sierpes"
            })),
            &coords(),
            &ctx,
        );
        assert_eq!(poi.title, "Calle Sierpes");
        assert_eq!(poi.icon.src, "images/streetlight/notworking.png");
        assert!(poi
            .info_window
            .contains("Street light status: defectiveLamp"));
    }

    #[test]
    fn working_light_uses_power_state() {
        let resolver = BaseUrl::default();
        let ctx = RenderContext::new("en", &resolver);
        let poi = streetlight(
            &entity(json!({
                "id": "l2",
                "type": "Streetlight",
                "status": "ok",
                "powerState": "off",
                "lanternHeight": 6
            })),
            &coords(),
            &ctx,
        );
        assert_eq!(poi.icon.src, "images/streetlight/off.png");
        assert!(poi.info_window.contains("Street light status: off"));
        assert!(poi.info_window.contains("Height: 6m"));
    }

    #[test]
    fn group_defaults_to_off_and_unknown_status() {
        let resolver = BaseUrl::default();
        let ctx = RenderContext::new("en", &resolver);
        let poi = streetlight_group(
            &entity(json!({"id": "g1", "type": "StreetlightGroup"})),
            &coords(),
            &ctx,
        );
        assert_eq!(poi.icon.src, "images/streetlight/off.png");
        assert!(poi.info_window.contains("Street light status: Unknown"));
    }

    #[test]
    fn cabinet_dumps_per_phase_readings() {
        let resolver = BaseUrl::default();
        let ctx = RenderContext::new("en", &resolver);
        let poi = streetlight_control_cabinet(
            &entity(json!({
                "id": "c1",
                "type": "StreetlightControlCabinet",
                "areaServed": "Distrito Centro",
                "energyConsumed": 162.5,
                "intensity": {"L1": 9.4, "L2": 8.7},
                "reactivePower": {"L1": 43.5}
            })),
            &coords(),
            &ctx,
        );
        assert_eq!(poi.icon.src, "images/streetlight/cabinet.png");
        assert!(poi.info_window.contains("Energy consumed: 162.5 kW"));
        assert!(poi.info_window.contains("Intensity</b>:"));
        assert!(poi.info_window.contains("<li><b>L1</b>: 9.4</li>"));
        assert!(poi.info_window.contains("Reactive power</b>:"));
        assert!(poi.info_window.contains("<li><b>L1</b>: 43.5</li>"));
    }
}
