//! Static reference data consulted during formatting.
//!
//! These tables mirror the FIWARE data-model conventions: UN/CEFACT unit
//! codes, the pollutant and water-measure catalogs, the bike-station status
//! priority, and the alert subcategory remaps.

/// UN/CEFACT unit codes appearing in `measurand` strings.
const UNIT_SYMBOLS: &[(&str, &str)] = &[("GP", "µg/m³"), ("GQ", "mg/m³"), ("M1", "mg/l")];

/// Resolves a UN/CEFACT unit code to its display symbol.
#[must_use]
pub fn unit_symbol(code: &str) -> Option<&'static str> {
    UNIT_SYMBOLS
        .iter()
        .find(|(candidate, _)| *candidate == code)
        .map(|(_, symbol)| *symbol)
}

/// One entry of a fixed measurement catalog.
#[derive(Debug, Clone, Copy)]
pub struct MeasureDef {
    /// Entity attribute holding the value.
    pub attribute: &'static str,
    /// Row label in the info window.
    pub title: &'static str,
    /// Display unit, empty for dimensionless measures.
    pub unit: &'static str,
}

/// Pollutants tracked for `AirQualityObserved`, in display order.
pub const AIR_QUALITY_MEASURES: &[MeasureDef] = &[
    MeasureDef { attribute: "CO", title: "CO", unit: "mg/m³" },
    MeasureDef { attribute: "NO", title: "NO", unit: "µg/m³" },
    MeasureDef { attribute: "NO2", title: "NO2", unit: "µg/m³" },
    MeasureDef { attribute: "NOx", title: "NOx", unit: "µg/m³" },
    MeasureDef { attribute: "O3", title: "O3", unit: "µg/m³" },
    MeasureDef { attribute: "PM10", title: "PM10", unit: "µg/m³" },
    MeasureDef { attribute: "PM2.5", title: "PM2.5", unit: "µg/m³" },
    MeasureDef { attribute: "SO2", title: "SO2", unit: "µg/m³" },
];

/// Measures tracked for `WaterQualityObserved`, in display order.
pub const WATER_QUALITY_MEASURES: &[MeasureDef] = &[
    MeasureDef { attribute: "temperature", title: "Temperature", unit: "ºC" },
    MeasureDef { attribute: "conductivity", title: "Conductivity", unit: "S/m" },
    MeasureDef { attribute: "conductance", title: "Conductance", unit: "S/m" },
    MeasureDef { attribute: "tss", title: "Total suspended solids", unit: "mg/L" },
    MeasureDef { attribute: "tds", title: "Total dissolved solids", unit: "mg/L" },
    MeasureDef { attribute: "turbidity", title: "Turbidity", unit: "FTU" },
    MeasureDef { attribute: "salinity", title: "Salinity", unit: "ppt" },
    MeasureDef { attribute: "pH", title: "pH", unit: "" },
    MeasureDef { attribute: "orp", title: "Oxidation-Reduction potential", unit: "mV" },
];

/// Bike-station statuses in icon priority order; the first one present in
/// the entity's status wins. "working" is the implicit default.
pub const BIKE_STATUS_PRIORITY: &[&str] = &["outOfService", "withIncidence", "full", "almostFull"];

/// Remaps an alert subcategory to the icon catalog name.
///
/// Several data-model subcategories share one icon; everything not listed
/// passes through unchanged.
#[must_use]
pub fn remap_alert_subcategory<'a>(category: &str, subcategory: &'a str) -> &'a str {
    match (category, subcategory) {
        ("traffic", "carWrongDirection" | "carStopped" | "injuredBiker") => "carAccident",
        ("weather", "heatWave") => "highTemperature",
        ("health", "bumpedPatient") => "fallenPatient",
        ("health", "tropicalCyclone" | "hurricane") => "tornado",
        _ => subcategory,
    }
}
