//! Civic issue renderers: Open311 service requests and alerts.

use ngsi_poi_entity_models::Entity;
use ngsi_poi_models::{Coordinates, Icon, Poi};

use super::assemble;
use crate::context::RenderContext;
use crate::format::{format_address, format_date};
use crate::html::{InfoWindow, icons};
use crate::parsing::decamelize;
use crate::tables::remap_alert_subcategory;

/// `Open311:ServiceRequest`: open/closed icon, any other status gets the
/// generic civic-issue marker.
pub fn service_request(entity: &Entity, coordinates: &Coordinates, ctx: &RenderContext) -> Poi {
    let name = match entity.text("status") {
        Some("open") => "open",
        Some("closed") => "closed",
        _ => "civicissues",
    };
    let icon = Icon::marker(ctx.icon_url(&format!("images/civicissues/{name}.png")));

    let mut window = InfoWindow::new();
    if let Some(description) = entity.display("description") {
        window.paragraph(&description);
    }
    window.raw(&format_address(entity.address().as_ref()));
    if let Some(status) = entity.display("status") {
        let text = match entity.display("status_notes") {
            Some(notes) => format!("{status}: {notes}"),
            None => status,
        };
        window.field(icons::INFO, "Request status", &text);
    }
    if let Some(agency) = entity.display("agency_responsible") {
        window.field(icons::INFO, "Responsible", &agency);
    }

    assemble(
        entity,
        coordinates,
        icon,
        entity.display("service_name"),
        window.finish(),
        None,
    )
}

/// `Alert`: the icon combines the (remapped) subcategory with a coarse
/// severity bucket.
pub fn alert(entity: &Entity, coordinates: &Coordinates, ctx: &RenderContext) -> Poi {
    let category = entity.text("category").unwrap_or("alert");
    let name = entity
        .text("subCategory")
        .map_or(category, |sub| remap_alert_subcategory(category, sub));
    let severity = if entity.text("severity") == Some("critical") {
        "high"
    } else {
        "informational"
    };
    let icon = Icon::marker(ctx.icon_url(&format!("images/alerts/{name}-{severity}.png")));
    let title = entity
        .display("category")
        .map(|category| format!("Alert - {category}"));

    let mut window = InfoWindow::new();
    window.raw(&format_address(entity.address().as_ref()));
    if let Some(sub) = entity.text("subCategory") {
        window.field(icons::INFO, "Subcategory", &decamelize(sub));
    }
    if let Some(severity) = entity.display("severity") {
        window.field(icons::INFO, "Severity", &severity);
    }
    if let Some(description) = entity.display("description") {
        window.paragraph(&description);
    }
    if let Some(date) = entity.text("dateObserved") {
        window.labeled(icons::CLOCK, "Date", &format_date(date, ctx.locale()));
    }
    if let Some(source) = entity.display("alertSource") {
        window.labeled(icons::FEED, "Source", &source);
    }

    assemble(entity, coordinates, icon, title, window.finish(), None)
}
