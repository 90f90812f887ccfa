//! Bus stop records as served by the backend.
//!
//! Shape matches `GET /api/v1/busstops` (and `/busstops/nearby`, which
//! additionally attaches `distance`). Coordinates are optional on the
//! wire: stops entered without GPS data carry nulls.

use serde::{Deserialize, Serialize};

/// One stop record from the backend's JSON.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct BusStopDto {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    /// Single direction label set by an administrator, if any.
    #[serde(default)]
    pub direction: Option<String>,
    /// Direction labels derived from the routes serving this stop.
    #[serde(default)]
    pub directions: Option<Vec<String>>,
    /// Distance from the queried point; only present on `/nearby` responses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
}

impl BusStopDto {
    /// Decode a stop-list payload (a JSON array of records).
    pub fn list_from_slice(payload: &[u8]) -> crate::Result<Vec<Self>> {
        Ok(serde_json::from_slice(payload)?)
    }
}
