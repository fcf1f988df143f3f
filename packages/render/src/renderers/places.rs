//! Place renderers: generic points of interest, beaches, museums and
//! gardens.

use ngsi_poi_entity_models::Entity;
use ngsi_poi_models::{Coordinates, Icon, Poi};
use serde_json::Value;

use super::{assemble, compound};
use crate::context::RenderContext;
use crate::format::{format_address, format_date};
use crate::html::{InfoWindow, icons};

/// `PointOfInterest`: the icon is named after the first category.
pub fn point_of_interest(entity: &Entity, coordinates: &Coordinates, ctx: &RenderContext) -> Poi {
    let category = entity
        .text_list("category")
        .and_then(|mut list| (!list.is_empty()).then(|| list.remove(0)))
        .unwrap_or_else(|| "poi".to_string());
    let icon = Icon::marker(ctx.icon_url(&format!("images/poi/{category}.png")));

    let mut window = InfoWindow::new();
    if let Some(description) = entity.display("description") {
        window.paragraph(&description);
    }
    window.raw(&format_address(entity.address().as_ref()));
    if let Some(date) = entity.text("dateModified") {
        window.labeled(icons::CLOCK, "Date", &format_date(date, ctx.locale()));
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

/// `Beach`: the icon is named after the occupation rate.
pub fn beach(entity: &Entity, coordinates: &Coordinates, ctx: &RenderContext) -> Poi {
    let rate = entity.text("occupationRate").unwrap_or("unknown");
    let icon = Icon::marker(ctx.icon_url(&format!("images/beach/{rate}.png")));
    let title = compound(entity.display("name"), entity.display("alternateName"));

    let mut window = InfoWindow::new();
    if let Some(description) = entity.display("description") {
        window.paragraph(&description);
    }
    window.raw(&format_address(entity.address().as_ref()));
    if let Some(rate) = entity.display("occupationRate") {
        window.note(icons::INFO, &format!("Occupation rate: {rate}"));
    }
    window.plain_list(
        "Beach characteristics",
        &entity.text_list("beachType").unwrap_or_default(),
    );
    window.plain_list(
        "Beach facilities",
        &entity.text_list("facilities").unwrap_or_default(),
    );
    window.plain_list(
        "Beach access",
        &entity.text_list("accessType").unwrap_or_default(),
    );
    if let Some(length) = entity.display("length") {
        window.note(icons::INFO, &format!("Length: {length}m"));
    }
    if let Some(width) = entity.display("width") {
        window.note(icons::INFO, &format!("Width: {width}m"));
    }

    assemble(entity, coordinates, icon, title, window.finish(), None)
}

/// `Museum`: fixed icon, period/type metadata and an opening-hours table.
pub fn museum(entity: &Entity, coordinates: &Coordinates, ctx: &RenderContext) -> Poi {
    let icon = Icon::marker(ctx.icon_url("images/museum/museum.png"));
    let title = compound(entity.display("name"), entity.display("alternateName"));

    let mut window = InfoWindow::new();
    if let Some(description) = entity.display("description") {
        window.paragraph(&description);
    }
    window.raw(&format_address(entity.address().as_ref()));
    if let Some(art) = entity.display("artPeriod") {
        window.field(icons::INFO, "Art period", &art);
    } else if let Some(historical) = entity.display("historicalPeriod") {
        window.field(icons::INFO, "Historical period", &historical);
    }
    if let Some(museum_type) = entity.display("museumType") {
        window.labeled(icons::LIST, "Museum type", &museum_type);
    }
    if let Some(building) = entity.display("buildingType") {
        window.labeled(icons::LIST, "Building type", &building);
    }
    window.keyed_list("Opening hours", &opening_hours(entity));
    window.plain_list(
        "Museum facilities",
        &entity.text_list("facilities").unwrap_or_default(),
    );

    assemble(entity, coordinates, icon, title, window.finish(), None)
}

/// Day/hours pairs from the `openingHoursSpecification` attribute.
/// Entries missing any of the three parts are dropped.
fn opening_hours(entity: &Entity) -> Vec<(String, String)> {
    entity
        .attr("openingHoursSpecification")
        .and_then(Value::as_array)
        .map(|specs| {
            specs
                .iter()
                .filter_map(|entry| {
                    let day = entry.get("dayOfWeek")?.as_str()?;
                    let opens = entry.get("opens")?.as_str()?;
                    let closes = entry.get("closes")?.as_str()?;
                    Some((day.to_string(), format!("{opens} - {closes}")))
                })
                .collect()
        })
        .unwrap_or_default()
}

/// `Garden`: fixed icon and a short metadata block.
pub fn garden(entity: &Entity, coordinates: &Coordinates, ctx: &RenderContext) -> Poi {
    let icon = Icon::marker(ctx.icon_url("images/garden/garden.png"));
    let title = compound(entity.display("name"), entity.display("alternateName"));

    let mut window = InfoWindow::new();
    if let Some(description) = entity.display("description") {
        window.paragraph(&description);
    }
    window.raw(&format_address(entity.address().as_ref()));
    if let Some(category) = entity.display("category") {
        window.field(icons::INFO, "Category", &category);
    }
    if let Some(style) = entity.display("style") {
        window.field(icons::INFO, "Garden style", &style);
    }
    if let Some(hours) = entity.display("openingHours") {
        window.field(icons::INFO, "Open hours", &hours);
    }

    assemble(entity, coordinates, icon, title, window.finish(), None)
}
