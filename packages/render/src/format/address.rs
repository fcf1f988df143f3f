//! Postal address rendering, shared by every entity renderer.

use ngsi_poi_entity_models::PostalAddress;

use crate::html::icons;

/// Renders an address into one info-window block.
///
/// Layout: street line, then a comma-joined locality/region/postal-code
/// line, then the country — each only when present, with no dangling
/// separators. Returns an empty string when there is nothing to show, so
/// callers can append unconditionally.
#[must_use]
pub fn format_address(address: Option<&PostalAddress>) -> String {
    let Some(address) = address else {
        return String::new();
    };

    let mut lines: Vec<String> = Vec::new();
    if let Some(street) = &address.street_address {
        lines.push(street.clone());
    }
    let locality_line: Vec<&str> = [
        address.address_locality.as_deref(),
        address.address_region.as_deref(),
        address.postal_code.as_deref(),
    ]
    .into_iter()
    .flatten()
    .collect();
    if !locality_line.is_empty() {
        lines.push(locality_line.join(", "));
    }
    if let Some(country) = &address.address_country {
        lines.push(country.clone());
    }

    if lines.is_empty() {
        return String::new();
    }
    format!(
        "<p><b><i class=\"{}\"/> Address: </b>{}</p>",
        icons::MAP_MARKER,
        lines.join("<br/>")
    )
}
