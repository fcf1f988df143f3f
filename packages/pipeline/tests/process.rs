use ngsi_poi_models::Poi;
use ngsi_poi_pipeline::{InputError, Payload, PoiSink, process, process_into};
use ngsi_poi_render::context::{BaseUrl, RenderContext};
use serde_json::json;

#[derive(Default)]
struct CollectingSink {
    batches: Vec<Vec<Poi>>,
}

impl PoiSink for CollectingSink {
    fn emit(&mut self, pois: &[Poi]) {
        self.batches.push(pois.to_vec());
    }
}

fn ctx(resolver: &BaseUrl) -> RenderContext<'_> {
    RenderContext::new("en", resolver)
}

#[test]
fn empty_batch_emits_an_empty_list() {
    let resolver = BaseUrl::default();
    let mut sink = CollectingSink::default();
    process_into(Payload::from("[]"), &ctx(&resolver), &mut sink).unwrap();
    assert_eq!(sink.batches, vec![Vec::new()]);
}

#[test]
fn location_less_entities_are_dropped_silently() {
    let resolver = BaseUrl::default();
    let pois = process(
        Payload::from(json!([{"id": "1", "type": "OffStreetParking"}])),
        &ctx(&resolver),
    )
    .unwrap();
    assert!(pois.is_empty());
}

#[test]
fn unsupported_types_are_dropped() {
    let resolver = BaseUrl::default();
    let pois = process(
        Payload::from(json!([{
            "id": "1",
            "type": "MyType",
            "location": {"coordinates": [-8.61, 41.15], "type": "Point"}
        }])),
        &ctx(&resolver),
    )
    .unwrap();
    assert!(pois.is_empty());
}

#[test]
fn air_quality_without_no2_keeps_the_unknown_style_and_id_title() {
    let resolver = BaseUrl::default();
    let pois = process(
        Payload::from(json!([{
            "id": "station-7",
            "type": "AirQualityObserved",
            "location": {"coordinates": [-3.70, 40.42], "type": "Point"}
        }])),
        &ctx(&resolver),
    )
    .unwrap();
    assert_eq!(pois.len(), 1);
    assert_eq!(pois[0].title, "station-7");
    let style = pois[0].style.as_ref().unwrap();
    assert_eq!(style.fill, "rgba(51, 51, 51, 0.1)");
    assert_eq!(style.stroke, "#333333");
}

#[test]
fn vehicle_title_prefers_name_with_plate() {
    let resolver = BaseUrl::default();
    let location = json!({"coordinates": [-0.88, 41.65], "type": "Point"});

    let without_name = process(
        Payload::from(json!([{
            "id": "v1",
            "type": "Vehicle",
            "vehiclePlateIdentifier": "3456ABC",
            "location": location.clone()
        }])),
        &ctx(&resolver),
    )
    .unwrap();
    assert_eq!(without_name[0].title, "3456ABC");

    let with_name = process(
        Payload::from(json!([{
            "id": "v1",
            "type": "Vehicle",
            "name": "C Recogida 1",
            "vehiclePlateIdentifier": "3456ABC",
            "location": location
        }])),
        &ctx(&resolver),
    )
    .unwrap();
    assert_eq!(with_name[0].title, "C Recogida 1 (3456ABC)");
}

#[test]
fn bike_station_priority_picks_the_earlier_status() {
    let resolver = BaseUrl::default();
    let pois = process(
        Payload::from(json!([{
            "id": "bs1",
            "type": "BikeHireDockingStation",
            "status": ["full", "withIncidence"],
            "location": {"coordinates": [-0.88, 41.65], "type": "Point"}
        }])),
        &ctx(&resolver),
    )
    .unwrap();
    assert_eq!(pois[0].icon.src, "images/bikestation/withIncidence.png");
}

#[test]
fn order_is_preserved_across_drops() {
    let resolver = BaseUrl::default();
    let location = json!({"coordinates": [0.0, 0.0], "type": "Point"});
    let pois = process(
        Payload::from(json!([
            {"id": "first", "type": "Garden", "location": location.clone()},
            {"id": "skipped", "type": "Garden"},
            {"id": "second", "type": "Museum", "location": location}
        ])),
        &ctx(&resolver),
    )
    .unwrap();
    let ids: Vec<&str> = pois.iter().map(|poi| poi.id.as_str()).collect();
    assert_eq!(ids, ["first", "second"]);
}

#[test]
fn processing_is_idempotent() {
    let resolver = BaseUrl::default();
    let payload = json!([{
        "id": "b1",
        "type": "Beach",
        "name": "La Concha",
        "occupationRate": "low",
        "location": {"coordinates": [-1.98, 43.32], "type": "Point"}
    }]);
    let first = process(Payload::from(payload.clone()), &ctx(&resolver)).unwrap();
    let second = process(Payload::from(payload), &ctx(&resolver)).unwrap();
    assert_eq!(
        serde_json::to_value(&first).unwrap(),
        serde_json::to_value(&second).unwrap()
    );
}

#[test]
fn info_windows_never_contain_undefined() {
    let resolver = BaseUrl::default();
    let location = json!({"coordinates": [0.0, 0.0], "type": "Point"});
    let bare: Vec<serde_json::Value> = [
        "AirQualityObserved",
        "WaterQualityObserved",
        "NoiseLevelObserved",
        "OffStreetParking",
        "OnStreetParking",
        "WeatherForecast",
        "WeatherObserved",
        "PointOfInterest",
        "Beach",
        "Museum",
        "Garden",
        "Device",
        "Streetlight",
        "StreetlightGroup",
        "StreetlightControlCabinet",
        "WasteContainer",
        "WasteContainerIsle",
        "Open311:ServiceRequest",
        "Vehicle",
        "BikeHireDockingStation",
        "KeyPerformanceIndicator",
        "Alert",
    ]
    .iter()
    .enumerate()
    .map(|(i, kind)| json!({"id": format!("e{i}"), "type": kind, "location": location.clone()}))
    .collect();

    let pois = process(Payload::from(json!(bare)), &ctx(&resolver)).unwrap();
    assert_eq!(pois.len(), 22);
    for poi in &pois {
        assert!(
            !poi.info_window.contains("undefined"),
            "{} info window leaked a placeholder: {}",
            poi.data.entity_type,
            poi.info_window
        );
        assert!(!poi.title.is_empty());
    }
}

#[test]
fn faults_abort_before_emitting() {
    let resolver = BaseUrl::default();
    let mut sink = CollectingSink::default();
    let result = process_into(Payload::from("not json"), &ctx(&resolver), &mut sink);
    assert!(matches!(result, Err(InputError::MalformedJson(_))));
    assert!(sink.batches.is_empty());

    let result = process_into(Payload::from("5"), &ctx(&resolver), &mut sink);
    assert!(matches!(result, Err(InputError::UnexpectedShape)));
    assert!(sink.batches.is_empty());
}
