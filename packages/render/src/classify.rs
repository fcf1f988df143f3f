//! Threshold-based classification ladders.
//!
//! Air quality follows the European NO2 index bands. The parking ladders
//! are deliberately inverted with respect to intuition: fewer free spots
//! means a *higher* severity name, because the level names double as icon
//! and color keys for "how hard is it to park here".

use ngsi_poi_models::SeverityLevel;

/// Classifies an NO2 concentration (µg/m³) into an air quality level.
#[must_use]
pub fn air_quality_level(no2: Option<f64>) -> SeverityLevel {
    match no2 {
        None => SeverityLevel::Unknown,
        Some(v) if v <= 50.0 => SeverityLevel::VeryLow,
        Some(v) if v <= 100.0 => SeverityLevel::Low,
        Some(v) if v <= 200.0 => SeverityLevel::Moderate,
        Some(v) if v <= 400.0 => SeverityLevel::High,
        Some(_) => SeverityLevel::VeryHigh,
    }
}

/// Classifies the free spot count of an off-street parking site.
#[must_use]
pub fn off_street_parking_level(available_spots: Option<f64>) -> SeverityLevel {
    match available_spots {
        None => SeverityLevel::Unknown,
        Some(v) if v <= 5.0 => SeverityLevel::VeryHigh,
        Some(v) if v <= 10.0 => SeverityLevel::High,
        Some(v) if v <= 20.0 => SeverityLevel::Moderate,
        Some(v) if v <= 40.0 => SeverityLevel::Low,
        Some(_) => SeverityLevel::VeryLow,
    }
}

/// Classifies the free spot count of an on-street parking zone.
///
/// On-street zones are much smaller than car parks, so the breakpoints sit
/// far lower than the off-street ladder.
#[must_use]
#[allow(clippy::float_cmp)] // spot counts are whole numbers, zero is an exact breakpoint
pub fn on_street_parking_level(available_spots: Option<f64>) -> SeverityLevel {
    match available_spots {
        None => SeverityLevel::Unknown,
        Some(v) if v == 0.0 => SeverityLevel::VeryHigh,
        Some(v) if v < 2.0 => SeverityLevel::High,
        Some(v) if v <= 5.0 => SeverityLevel::Moderate,
        Some(v) if v <= 10.0 => SeverityLevel::Low,
        Some(_) => SeverityLevel::VeryLow,
    }
}
