//! Pluggable stop-list fetching.
//!
//! The backend owns the stop data; this crate only needs the bytes of
//! `GET /api/v1/busstops`. Applications implement [`StopSource`] with
//! whatever HTTP client they already use and this module turns the
//! payload into domain stops.

use std::future::Future;
use std::pin::Pin;

use tracing::debug;

use bus_api_types::BusStopDto;

use crate::models::{Result, Stop};

/// Fetch the raw stop-list payload from wherever it lives.
pub trait StopSource: Send + Sync {
    fn fetch_stops<'a>(
        &'a self,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<u8>>> + Send + 'a>>;
}

/// Decode the backend's stop-list JSON into domain stops.
///
/// Records with half-filled coordinates survive with `location: None`:
/// still searchable by name, never returned by proximity resolution.
pub fn parse_stops(payload: &[u8]) -> Result<Vec<Stop>> {
    let dtos: Vec<BusStopDto> = serde_json::from_slice(payload)?;
    debug!(count = dtos.len(), "decoded stop list");
    Ok(dtos.into_iter().map(Stop::from).collect())
}

/// Fetch and decode in one step.
pub async fn load_stops(source: &dyn StopSource) -> Result<Vec<Stop>> {
    let payload = source.fetch_stops().await?;
    parse_stops(&payload)
}
