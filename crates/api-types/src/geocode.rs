//! Nominatim-style geocoder responses.
//!
//! Both the reverse lookup (device location to address) and the forward
//! lookup (typed address to coordinate) return this shape. Nominatim
//! serializes `lat`/`lon` as strings, so turning them into degrees is a
//! fallible step, not a deserialization concern.

use serde::Deserialize;

/// Label used when the geocoder gives us nothing displayable.
pub const UNKNOWN_LOCATION: &str = "Nieznana lokalizacja";

/// One result entry from the geocoder.
#[derive(Clone, Debug, Deserialize)]
pub struct GeocodeResult {
    pub lat: String,
    pub lon: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub address: Option<GeocodeAddress>,
}

/// Structured address parts; the geocoder fills whichever apply.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct GeocodeAddress {
    #[serde(default)]
    pub road: Option<String>,
    #[serde(default)]
    pub pedestrian: Option<String>,
    #[serde(default)]
    pub suburb: Option<String>,
    #[serde(default)]
    pub house_number: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub town: Option<String>,
    #[serde(default)]
    pub village: Option<String>,
}

impl GeocodeResult {
    /// The result's coordinate as `(latitude, longitude)` decimal degrees.
    pub fn location(&self) -> crate::Result<(f64, f64)> {
        let lat: f64 = self.lat.trim().parse()?;
        let lon: f64 = self.lon.trim().parse()?;
        Ok((lat, lon))
    }
}

/// Human-readable "City, Road No" line for a geocode result.
///
/// Road falls back to pedestrian way, then suburb; city falls back to
/// town, then village. With no structured parts at all, the raw
/// `display_name` is used, and failing that [`UNKNOWN_LOCATION`].
pub fn format_address(result: &GeocodeResult) -> String {
    let fallback = || {
        result
            .display_name
            .clone()
            .unwrap_or_else(|| UNKNOWN_LOCATION.to_string())
    };

    let Some(address) = &result.address else {
        return fallback();
    };

    let road = address
        .road
        .as_deref()
        .or(address.pedestrian.as_deref())
        .or(address.suburb.as_deref())
        .unwrap_or("");
    let city = address
        .city
        .as_deref()
        .or(address.town.as_deref())
        .or(address.village.as_deref())
        .unwrap_or("");

    let mut street = road.to_string();
    if !street.is_empty() {
        if let Some(number) = address.house_number.as_deref() {
            street.push(' ');
            street.push_str(number);
        }
    }

    match (city.is_empty(), street.is_empty()) {
        (true, true) => fallback(),
        (true, false) => street,
        (false, true) => city.to_string(),
        (false, false) => format!("{city}, {street}"),
    }
}
