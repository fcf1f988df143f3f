//! Waste collection renderers: single containers and container isles.

use ngsi_poi_entity_models::Entity;
use ngsi_poi_models::{Coordinates, Icon, Poi};
use serde_json::Value;

use super::assemble;
use crate::context::RenderContext;
use crate::format::format_address;
use crate::html::{InfoWindow, icons};

/// `WasteContainer`: ok/bad icon from the container status, titled by the
/// serial number.
pub fn waste_container(entity: &Entity, coordinates: &Coordinates, ctx: &RenderContext) -> Poi {
    let name = if entity.text("status") == Some("ok") {
        "ok"
    } else {
        "bad"
    };
    let icon = Icon::marker(ctx.icon_url(&format!("images/waste/{name}.png")));

    let mut window = InfoWindow::new();
    if let Some(description) = entity.display("description") {
        window.paragraph(&description);
    }
    window.raw(&format_address(entity.address().as_ref()));
    if let Some(category) = entity.display("category") {
        window.note(icons::INFO, &format!("Container type: {category}"));
    }
    if let Some(status) = entity.display("status") {
        window.note(icons::INFO, &format!("Container status: {status}"));
    }
    if let Some(level) = entity.number("fillingLevel") {
        window.note(icons::INFO, &format!("Filling level: {}%", level * 100.0));
    }

    assemble(
        entity,
        coordinates,
        icon,
        entity.display("serialNumber"),
        window.finish(),
        None,
    )
}

/// `WasteContainerIsle`: fixed icon plus the isle features and the number
/// of containers placed on it.
pub fn waste_container_isle(
    entity: &Entity,
    coordinates: &Coordinates,
    ctx: &RenderContext,
) -> Poi {
    let icon = Icon::marker(ctx.icon_url("images/waste/ok.png"));

    let mut window = InfoWindow::new();
    if let Some(description) = entity.display("description") {
        window.paragraph(&description);
    }
    window.raw(&format_address(entity.address().as_ref()));
    if let Some(features) = entity.display("features") {
        window.note(icons::INFO, &format!("Isle features: {features}"));
    }
    let containers = entity.attr("containers").and_then(Value::as_array);
    if let Some(containers) = containers {
        window.note(
            icons::INFO,
            &format!("Number of containers: {}", containers.len()),
        );
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
