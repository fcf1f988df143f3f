//! Parking renderers. Both variants share the info-window shape and only
//! differ in the availability ladder.

use ngsi_poi_entity_models::Entity;
use ngsi_poi_models::{Coordinates, Icon, Poi, SeverityLevel};

use super::assemble;
use crate::classify;
use crate::context::RenderContext;
use crate::format::{format_address, format_date};
use crate::html::{InfoWindow, icons};

/// `OffStreetParking`: severity grows as free spots run out, with wider
/// bands than the on-street variant.
pub fn off_street_parking(entity: &Entity, coordinates: &Coordinates, ctx: &RenderContext) -> Poi {
    let level = classify::off_street_parking_level(entity.number("availableSpotNumber"));
    parking_poi(entity, coordinates, ctx, level)
}

/// `OnStreetParking`: zero free spots is already the worst level.
pub fn on_street_parking(entity: &Entity, coordinates: &Coordinates, ctx: &RenderContext) -> Poi {
    let level = classify::on_street_parking_level(entity.number("availableSpotNumber"));
    parking_poi(entity, coordinates, ctx, level)
}

fn parking_poi(
    entity: &Entity,
    coordinates: &Coordinates,
    ctx: &RenderContext,
    level: SeverityLevel,
) -> Poi {
    let icon = Icon::marker(ctx.icon_url(&format!("images/parking/{level}.png")));

    let mut window = InfoWindow::new();
    if let Some(description) = entity.display("description") {
        window.paragraph(&description);
    }
    window.raw(&format_address(entity.address().as_ref()));
    if let Some(date) = entity.text("dateModified") {
        window.labeled(icons::CLOCK, "Date", &format_date(date, ctx.locale()));
    }
    match (
        entity.display("availableSpotNumber"),
        entity.display("totalSpotNumber"),
    ) {
        (Some(available), Some(total)) => {
            window.note(
                icons::INFO,
                &format!("{available} available parking spots out of {total}"),
            );
        }
        // A lone count of zero is not worth a line of its own.
        (Some(available), None)
            if entity
                .number("availableSpotNumber")
                .is_some_and(|v| v.abs() > f64::EPSILON) =>
        {
            window.note(icons::INFO, &format!("{available} available parking spots"));
        }
        _ => {}
    }

    assemble(
        entity,
        coordinates,
        icon,
        entity.display("name"),
        window.finish(),
        Some(level.marker_style()),
    )
}
