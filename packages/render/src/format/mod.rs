//! Shared formatting helpers used by every renderer.

mod address;
mod date;

pub use address::format_address;
pub use date::{INVALID_DATE, format_date};

/// Rounds a value to the given number of decimal places, half away from
/// zero, matching the display rounding of the measurement rows.
#[must_use]
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
