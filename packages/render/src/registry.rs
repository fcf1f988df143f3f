//! Entity-type registry and dispatch.

use std::str::FromStr;

use ngsi_poi_entity_models::Entity;
use ngsi_poi_models::{Coordinates, Poi};
use strum_macros::{Display, EnumString};

use crate::context::RenderContext;
use crate::renderers::{
    civic, devices, environment, fleet, parking, places, streetlight, waste, weather,
};

/// Entity types with a renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
pub enum EntityType {
    AirQualityObserved,
    WaterQualityObserved,
    NoiseLevelObserved,
    OffStreetParking,
    OnStreetParking,
    WeatherForecast,
    WeatherObserved,
    PointOfInterest,
    Beach,
    Museum,
    Garden,
    Device,
    Streetlight,
    StreetlightGroup,
    StreetlightControlCabinet,
    WasteContainer,
    WasteContainerIsle,
    #[strum(serialize = "Open311:ServiceRequest")]
    ServiceRequest,
    Vehicle,
    BikeHireDockingStation,
    KeyPerformanceIndicator,
    Alert,
}

/// Renders one entity, or skips it.
///
/// An unsupported type is logged and skipped; an entity without an object
/// location is skipped silently, since producers routinely send
/// location-less entities that simply cannot be placed on a map.
#[must_use]
pub fn entity_to_poi(entity: &Entity, ctx: &RenderContext) -> Option<Poi> {
    let Ok(entity_type) = EntityType::from_str(&entity.entity_type) else {
        log::warn!("Entity type is not supported: {}", entity.entity_type);
        return None;
    };
    let location = entity.location.as_ref().filter(|value| value.is_object())?;
    let coordinates = Coordinates::from_location(location);

    let poi = match entity_type {
        EntityType::AirQualityObserved => environment::air_quality(entity, &coordinates, ctx),
        EntityType::WaterQualityObserved => environment::water_quality(entity, &coordinates, ctx),
        EntityType::NoiseLevelObserved => environment::noise_level(entity, &coordinates, ctx),
        EntityType::OffStreetParking => parking::off_street_parking(entity, &coordinates, ctx),
        EntityType::OnStreetParking => parking::on_street_parking(entity, &coordinates, ctx),
        EntityType::WeatherForecast => weather::weather_forecast(entity, &coordinates, ctx),
        EntityType::WeatherObserved => weather::weather_observed(entity, &coordinates, ctx),
        EntityType::PointOfInterest => places::point_of_interest(entity, &coordinates, ctx),
        EntityType::Beach => places::beach(entity, &coordinates, ctx),
        EntityType::Museum => places::museum(entity, &coordinates, ctx),
        EntityType::Garden => places::garden(entity, &coordinates, ctx),
        EntityType::Device => devices::device(entity, &coordinates, ctx),
        EntityType::Streetlight => streetlight::streetlight(entity, &coordinates, ctx),
        EntityType::StreetlightGroup => streetlight::streetlight_group(entity, &coordinates, ctx),
        EntityType::StreetlightControlCabinet => {
            streetlight::streetlight_control_cabinet(entity, &coordinates, ctx)
        }
        EntityType::WasteContainer => waste::waste_container(entity, &coordinates, ctx),
        EntityType::WasteContainerIsle => waste::waste_container_isle(entity, &coordinates, ctx),
        EntityType::ServiceRequest => civic::service_request(entity, &coordinates, ctx),
        EntityType::Vehicle => fleet::vehicle(entity, &coordinates, ctx),
        EntityType::BikeHireDockingStation => {
            fleet::bike_hire_docking_station(entity, &coordinates, ctx)
        }
        EntityType::KeyPerformanceIndicator => {
            devices::key_performance_indicator(entity, &coordinates, ctx)
        }
        EntityType::Alert => civic::alert(entity, &coordinates, ctx),
    };
    Some(poi)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::BaseUrl;
    use serde_json::json;

    fn entity(value: serde_json::Value) -> Entity {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn parses_the_namespaced_service_request_type() {
        assert_eq!(
            EntityType::from_str("Open311:ServiceRequest").unwrap(),
            EntityType::ServiceRequest
        );
        assert_eq!(
            EntityType::ServiceRequest.to_string(),
            "Open311:ServiceRequest"
        );
        assert!(EntityType::from_str("TrafficFlowObserved").is_err());
    }

    #[test]
    fn renders_supported_entities() {
        let resolver = BaseUrl::default();
        let ctx = RenderContext::new("en", &resolver);
        let poi = entity_to_poi(
            &entity(json!({
                "id": "b1",
                "type": "Beach",
                "name": "La Concha",
                "location": {"type": "Point", "coordinates": [-1.9812, 43.3183]}
            })),
            &ctx,
        )
        .unwrap();
        assert_eq!(poi.id, "b1");
        assert_eq!(poi.title, "La Concha");
        assert!((poi.current_location.lng - -1.9812).abs() < f64::EPSILON);
        assert!((poi.current_location.lat - 43.3183).abs() < f64::EPSILON);
    }

    #[test]
    fn skips_unsupported_types() {
        let resolver = BaseUrl::default();
        let ctx = RenderContext::new("en", &resolver);
        let skipped = entity_to_poi(
            &entity(json!({
                "id": "t1",
                "type": "TrafficFlowObserved",
                "location": {"type": "Point", "coordinates": [0.0, 0.0]}
            })),
            &ctx,
        );
        assert!(skipped.is_none());
    }

    #[test]
    fn skips_entities_without_a_placeable_location() {
        let resolver = BaseUrl::default();
        let ctx = RenderContext::new("en", &resolver);
        let missing = entity_to_poi(&entity(json!({"id": "b2", "type": "Beach"})), &ctx);
        assert!(missing.is_none());

        let not_an_object = entity_to_poi(
            &entity(json!({"id": "b3", "type": "Beach", "location": "Madrid"})),
            &ctx,
        );
        assert!(not_an_object.is_none());
    }
}
