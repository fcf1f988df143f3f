//! Parsers for the string-packed sub-records NGSI producers emit.
//!
//! Several data models pack structured data into delimited strings
//! (`"NO2,52,GP"`, `"LAeq|65.4"`, `"temperature=21;humidity=0.4"`). They
//! are parsed into small structs at this boundary; malformed items are
//! skipped one by one without aborting the renderer.

/// A `"name,value,unitcode"` measurement (air pollutants, chemical agents).
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    pub name: String,
    pub value: f64,
    /// UN/CEFACT unit code, trimmed.
    pub unit_code: String,
}

/// Parses one measurand entry. Returns `None` when the entry does not have
/// exactly three comma-separated parts or the value is not numeric.
#[must_use]
pub fn parse_measurand(text: &str) -> Option<Measurement> {
    let mut parts = text.split(',');
    let name = parts.next()?.trim();
    let value: f64 = parts.next()?.trim().parse().ok()?;
    let unit_code = parts.next()?.trim();
    if parts.next().is_some() || name.is_empty() {
        return None;
    }
    Some(Measurement {
        name: name.to_string(),
        value,
        unit_code: unit_code.to_string(),
    })
}

/// A `"name|value"` acoustic parameter (NoiseLevelObserved).
#[derive(Debug, Clone, PartialEq)]
pub struct AcousticParameter {
    pub name: String,
    pub value: f64,
}

/// Parses one acoustic parameter entry; `None` for malformed entries.
#[must_use]
pub fn parse_acoustic_parameter(text: &str) -> Option<AcousticParameter> {
    let (name, value) = text.split_once('|')?;
    let name = name.trim();
    if name.is_empty() {
        return None;
    }
    Some(AcousticParameter {
        name: name.to_string(),
        value: value.trim().parse().ok()?,
    })
}

/// Splits a Device `value` string (`"key=value;key=value"`) into pairs.
///
/// Items without exactly one `=` are dropped, but their position is kept by
/// the caller's index pairing with `controlledProperty` — hence the
/// `(index, key, value)` shape.
#[must_use]
pub fn parse_device_values(text: &str) -> Vec<(usize, String, String)> {
    text.split(';')
        .enumerate()
        .filter_map(|(index, item)| {
            let (key, value) = item.split_once('=')?;
            if value.contains('=') {
                return None;
            }
            Some((index, key.trim().to_string(), value.trim().to_string()))
        })
        .collect()
}

/// Turns a camelCase data-model token into a display label
/// (`"carWrongDirection"` → `"Car wrong direction"`).
#[must_use]
pub fn decamelize(token: &str) -> String {
    let mut label = String::with_capacity(token.len() + 4);
    for (i, c) in token.chars().enumerate() {
        if i == 0 {
            label.extend(c.to_uppercase());
        } else if c.is_uppercase() {
            label.push(' ');
            label.extend(c.to_lowercase());
        } else {
            label.push(c);
        }
    }
    label
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_measurand_entries() {
        let m = parse_measurand("NO2, 52.125, GP").unwrap();
        assert_eq!(m.name, "NO2");
        assert!((m.value - 52.125).abs() < f64::EPSILON);
        assert_eq!(m.unit_code, "GP");
    }

    #[test]
    fn rejects_malformed_measurands() {
        assert_eq!(parse_measurand("NO2"), None);
        assert_eq!(parse_measurand("NO2,high,GP"), None);
        assert_eq!(parse_measurand("NO2,52,GP,extra"), None);
        assert_eq!(parse_measurand(",52,GP"), None);
    }

    #[test]
    fn parses_acoustic_parameters() {
        let p = parse_acoustic_parameter("LAeq|65.41").unwrap();
        assert_eq!(p.name, "LAeq");
        assert!((p.value - 65.41).abs() < f64::EPSILON);
        assert_eq!(parse_acoustic_parameter("LAeq"), None);
        assert_eq!(parse_acoustic_parameter("LAeq|loud"), None);
    }

    #[test]
    fn device_values_keep_positions_through_malformed_items() {
        let pairs = parse_device_values("t=21;broken;h=0.4");
        assert_eq!(
            pairs,
            vec![
                (0, "t".to_string(), "21".to_string()),
                (2, "h".to_string(), "0.4".to_string()),
            ]
        );
        assert!(parse_device_values("a=b=c").is_empty());
    }

    #[test]
    fn decamelizes_tokens() {
        assert_eq!(decamelize("carWrongDirection"), "Car wrong direction");
        assert_eq!(decamelize("heatWave"), "Heat wave");
        assert_eq!(decamelize("robbery"), "Robbery");
        assert_eq!(decamelize(""), "");
    }
}
