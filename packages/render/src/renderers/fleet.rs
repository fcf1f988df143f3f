//! Fleet renderers: municipal vehicles and bike hire docking stations.

use ngsi_poi_entity_models::Entity;
use ngsi_poi_models::{Coordinates, Icon, Poi};

use super::{assemble, compound};
use crate::context::RenderContext;
use crate::format::format_address;
use crate::html::{InfoWindow, icons};
use crate::tables;

/// `Vehicle`: the icon combines the vehicle type with the first service
/// status token (`garbageCollection-onRoute.png`).
pub fn vehicle(entity: &Entity, coordinates: &Coordinates, ctx: &RenderContext) -> Poi {
    let kind = entity.text("vehicleType").unwrap_or("vehicle");
    let status_token = entity
        .text("serviceStatus")
        .and_then(|status| status.split(',').next())
        .map_or("default", str::trim);
    let icon = Icon::marker(ctx.icon_url(&format!("images/vehicle/{kind}-{status_token}.png")));

    let plate = entity
        .display("vehiclePlateIdentifier")
        .or_else(|| entity.display("vehicleIdentificationNumber"));
    let title = compound(entity.display("name"), plate.clone()).or(plate);

    let mut window = InfoWindow::new();
    if let Some(description) = entity.display("description") {
        window.paragraph(&description);
    }
    window.raw(&format_address(entity.address().as_ref()));
    if let Some(kind) = entity.display("vehicleType") {
        window.field(icons::INFO, "Type", &kind);
    }
    if let Some(category) = entity.display("category") {
        window.field(icons::INFO, "Category", &category);
    }
    window.plain_list(
        "Services provided",
        &entity.text_list("serviceProvided").unwrap_or_default(),
    );
    if let Some(status) = entity.display("serviceStatus") {
        window.field(icons::INFO, "Service status", &status);
    }
    if let Some(usage) = entity.display("vehicleSpecialUsage") {
        window.field(icons::INFO, "Special usage", &usage);
    }
    if let Some(speed) = entity.display("speed") {
        window.field(icons::INFO, "Speed", &speed);
    }
    if let Some(weight) = entity.display("cargoWeight") {
        window.field(icons::INFO, "Cargo weight", &weight);
    }

    assemble(entity, coordinates, icon, title, window.finish(), None)
}

/// `BikeHireDockingStation`: the first matching status in the priority
/// list wins; a station with none of them is `working`.
pub fn bike_hire_docking_station(
    entity: &Entity,
    coordinates: &Coordinates,
    ctx: &RenderContext,
) -> Poi {
    let statuses = entity.text_list("status").unwrap_or_default();
    let status = tables::BIKE_STATUS_PRIORITY
        .iter()
        .find(|token| statuses.iter().any(|status| status.contains(*token)))
        .copied()
        .unwrap_or("working");
    let icon = Icon::marker(ctx.icon_url(&format!("images/bikestation/{status}.png")));

    let mut window = InfoWindow::new();
    if let Some(description) = entity.display("description") {
        window.paragraph(&description);
    }
    window.raw(&format_address(entity.address().as_ref()));
    if let Some(status) = entity.display("status") {
        window.field(icons::INFO, "Status", &status);
    }
    if let Some(bikes) = entity.display("availableBikeNumber") {
        window.field(icons::INFO, "Available bikes", &bikes);
    }
    if let Some(free) = entity.display("freeSlotNumber") {
        let total = entity
            .display("totalSlotNumber")
            .map(|total| format!("/{total}"))
            .unwrap_or_default();
        window.field(icons::INFO, "Free slots", &format!("{free}{total}"));
    }
    if let Some(out_of_service) = entity.display("outOfServiceSlotNumber") {
        window.field(icons::INFO, "Out of service slots", &out_of_service);
    }
    if let Some(hours) = entity.display("openingHours") {
        window.field(icons::INFO, "Open hours", &hours);
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
