//! WGS84 coordinate parsing.

use mh_model::Coordinates;

/// Parses a string as a finite f64, returning None for invalid or empty strings.
pub fn parse_f64(value: &str) -> Option<f64> {
    if value.trim().is_empty() {
        return None;
    }
    value.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parses `"lat, lon"`.
///
/// Anything other than exactly two comma-separated numbers gives `None`.
pub fn parse_coordinates(raw: &str) -> Option<Coordinates> {
    let text = raw.trim();
    if text.is_empty() {
        return None;
    }
    let mut parts = text.split(',');
    let (Some(lat), Some(lon), None) = (parts.next(), parts.next(), parts.next()) else {
        return None;
    };
    Some(Coordinates {
        lat: parse_f64(lat)?,
        lon: parse_f64(lon)?,
    })
}
