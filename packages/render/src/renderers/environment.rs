//! Environmental observation renderers: air quality, water quality and
//! noise level.

use ngsi_poi_entity_models::Entity;
use ngsi_poi_models::{Coordinates, Icon, Poi};

use super::{assemble, compound};
use crate::classify;
use crate::context::RenderContext;
use crate::format::{format_address, format_date, round_to};
use crate::html::{InfoWindow, icons};
use crate::parsing::{parse_acoustic_parameter, parse_measurand};
use crate::tables;

/// `AirQualityObserved`: NO2-classified marker plus the fixed pollutant
/// catalog.
pub fn air_quality(entity: &Entity, coordinates: &Coordinates, ctx: &RenderContext) -> Poi {
    let level = classify::air_quality_level(entity.number("NO2"));
    let icon = Icon::marker(ctx.icon_url(&format!("images/airquality/{level}.png")));
    let title = compound(entity.display("stationName"), entity.display("stationCode"));

    let mut window = InfoWindow::new();
    window.raw(&format_address(entity.address().as_ref()));
    if let Some(date) = entity.text("dateObserved") {
        window.labeled(icons::CLOCK, "Date", &format_date(date, ctx.locale()));
    }
    if let Some(source) = entity.display("source") {
        window.labeled(icons::FEED, "Source", &source);
    }
    let measures: Vec<(String, String)> = tables::AIR_QUALITY_MEASURES
        .iter()
        .filter_map(|measure| {
            let value = entity.number(measure.attribute)?;
            Some((
                measure.title.to_string(),
                format!("{} {}", round_to(value, 2), measure.unit),
            ))
        })
        .collect();
    window.keyed_list("Measures", &measures);

    assemble(
        entity,
        coordinates,
        icon,
        title,
        window.finish(),
        Some(level.marker_style()),
    )
}

/// `WaterQualityObserved`: good/bad marker from oxygen and pH ranges, the
/// fixed water-measure catalog and packed chemical agents.
pub fn water_quality(entity: &Entity, coordinates: &Coordinates, ctx: &RenderContext) -> Poi {
    let o2_bad = entity
        .number("O2")
        .is_some_and(|v| !(4.0..=12.0).contains(&v));
    let ph_bad = entity
        .number("pH")
        .is_some_and(|v| !(6.5..=9.0).contains(&v));
    let status = if o2_bad || ph_bad { "bad" } else { "good" };
    let icon = Icon::marker(ctx.icon_url(&format!("images/waterquality/{status}.png")));

    let mut window = InfoWindow::new();
    window.raw(&format_address(entity.address().as_ref()));
    if let Some(date) = observation_date(entity) {
        window.labeled(icons::CLOCK, "Date", &format_date(&date, ctx.locale()));
    }
    if let Some(source) = entity.display("source") {
        window.labeled(icons::FEED, "Source", &source);
    }
    let measures: Vec<(String, String)> = tables::WATER_QUALITY_MEASURES
        .iter()
        .filter_map(|measure| {
            let value = round_to(entity.number(measure.attribute)?, 4);
            let text = if measure.unit.is_empty() {
                value.to_string()
            } else {
                format!("{value} {}", measure.unit)
            };
            Some((measure.title.to_string(), text))
        })
        .collect();
    window.keyed_list("Measures", &measures);

    let agents: Vec<(String, String)> = entity
        .text_list("measurand")
        .unwrap_or_default()
        .iter()
        .filter_map(|packed| parse_measurand(packed))
        .map(|m| {
            let unit = tables::unit_symbol(&m.unit_code).unwrap_or("");
            let text = format!("{} {unit}", round_to(m.value, 3));
            (m.name, text.trim_end().to_string())
        })
        .collect();
    window.keyed_list("Chemical agents", &agents);

    // FIWARE has no usable display name here; the address attribute is a
    // nested object, so in practice the title falls back to the id.
    let title = entity.text("address").map(str::to_string);
    assemble(entity, coordinates, icon, title, window.finish(), None)
}

/// The observation timestamp, or a compound range assembled from the
/// from/to pair some producers send instead.
fn observation_date(entity: &Entity) -> Option<String> {
    if let Some(date) = entity.text("dateObserved") {
        return Some(date.to_string());
    }
    match (
        entity.text("dateObservedFrom"),
        entity.text("dateObservedTo"),
    ) {
        (Some(from), Some(to)) => Some(format!("{from}/{to}")),
        _ => None,
    }
}

/// `NoiseLevelObserved`: fixed icon plus packed acoustic parameters.
pub fn noise_level(entity: &Entity, coordinates: &Coordinates, ctx: &RenderContext) -> Poi {
    let icon = Icon::marker(ctx.icon_url("images/noiselevel/noise.png"));
    let title = entity.display("name");

    let mut window = InfoWindow::new();
    if let Some(description) = entity.display("description") {
        window.paragraph(&description);
    }
    if let Some(date) = entity.text("dateObserved") {
        window.labeled(icons::CLOCK, "Date", &format_date(date, ctx.locale()));
    }
    if let Some(class) = entity.display("sonometerClass") {
        window.labeled(icons::INFO, "Sonometer class", &class);
    }
    let parameters: Vec<(String, String)> = entity
        .text_list("measurand")
        .unwrap_or_default()
        .iter()
        .filter_map(|packed| parse_acoustic_parameter(packed))
        .map(|p| (p.name, round_to(p.value, 2).to_string()))
        .collect();
    window.keyed_list("Acoustic parameters", &parameters);

    assemble(entity, coordinates, icon, title, window.finish(), None)
}
