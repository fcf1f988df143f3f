//! Weather renderers. Both pick a centered icon named after the weather
//! type, with spaces stripped (`"light rain"` → `lightrain.png`).

use ngsi_poi_entity_models::Entity;
use ngsi_poi_models::{Coordinates, Icon, Poi};

use super::{assemble, compound};
use crate::context::RenderContext;
use crate::format::{format_address, format_date};
use crate::html::{InfoWindow, icons};

fn weather_icon(entity: &Entity, ctx: &RenderContext) -> Icon {
    let kind = entity
        .text("weatherType")
        .map_or_else(|| "weather".to_string(), |t| t.replace(' ', ""));
    Icon::centered(ctx.icon_url(&format!("images/weather/{kind}.png")))
}

/// `WeatherForecast`: titled by the forecast locality.
pub fn weather_forecast(entity: &Entity, coordinates: &Coordinates, ctx: &RenderContext) -> Poi {
    let title = entity.address().and_then(|address| {
        compound(address.address_locality.clone(), address.address_region.clone())
    });

    let mut window = InfoWindow::new();
    window.raw(&format_address(entity.address().as_ref()));
    if let Some(date) = entity.text("dateObserved") {
        window.labeled(icons::CLOCK, "Date", &format_date(date, ctx.locale()));
    }
    if let Some(temperature) = entity.display("temperature") {
        window.field(icons::THERMOMETER, "Temperature", &format!("{temperature}ºC"));
    }
    if let Some(feels_like) = entity.display("feelsLikeTemperature") {
        window.field(icons::THERMOMETER, "Feels Like", &format!("{feels_like}ºC"));
    }
    if let Some(humidity) = entity.number("relativeHumidity") {
        window.field(icons::TINT, "Humidity", &format!("{}%", humidity * 100.0));
    }
    if let Some(speed) = entity.display("windSpeed") {
        window.field(icons::INFO, "Wind speed", &format!("{speed}m/s"));
    }
    if let Some(direction) = entity.display("windDirection") {
        window.field(icons::INFO, "Wind direction", &format!("{direction}º"));
    }
    if let Some(probability) = entity.number("precipitationProbability") {
        window.field(
            icons::INFO,
            "Precipitation probability",
            &format!("{}%", probability * 100.0),
        );
    }

    assemble(
        entity,
        coordinates,
        weather_icon(entity, ctx),
        title,
        window.finish(),
        None,
    )
}

/// `WeatherObserved`: titled by the station name.
pub fn weather_observed(entity: &Entity, coordinates: &Coordinates, ctx: &RenderContext) -> Poi {
    let title = entity.display("name").or_else(|| entity.display("stationName"));

    let mut window = InfoWindow::new();
    window.raw(&format_address(entity.address().as_ref()));
    if let Some(date) = entity.text("dateObserved") {
        window.labeled(icons::CLOCK, "Date", &format_date(date, ctx.locale()));
    }
    if let Some(pressure) = entity.display("barometricPressure") {
        window.field(icons::INFO, "Pressure", &format!("{pressure}hPa"));
    }
    if let Some(tendency) = entity.display("pressureTendency") {
        window.field(icons::INFO, "Pressure tendency", &tendency);
    }
    if let Some(temperature) = entity.display("temperature") {
        window.field(icons::THERMOMETER, "Temperature", &format!("{temperature}ºC"));
    }
    if let Some(precipitation) = entity.display("precipitation") {
        window.field(
            icons::INFO,
            "Precipitation",
            &format!("{precipitation}l/m<sup>2</sup>"),
        );
    }
    if let Some(humidity) = entity.number("relativeHumidity") {
        window.field(icons::INFO, "Humidity", &format!("{}%", humidity * 100.0));
    }
    if let Some(speed) = entity.display("windSpeed") {
        window.field(icons::INFO, "Wind speed", &format!("{speed}m/s"));
    }
    if let Some(direction) = entity.display("windDirection") {
        window.field(icons::INFO, "Wind direction", &format!("{direction}º"));
    }

    assemble(
        entity,
        coordinates,
        weather_icon(entity, ctx),
        title,
        window.finish(),
        None,
    )
}
