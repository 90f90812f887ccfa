//! Wire types shared with the bus-scheduler backend and the geocoder.
//!
//! The backend REST API and the third-party geocoding service both speak
//! JSON; this crate owns the serde shapes of those payloads plus the pure
//! formatting helpers over them. It deliberately knows nothing about HTTP
//! or about the domain model built on top of it.

pub mod geocode;
pub mod stop;

pub use geocode::{format_address, GeocodeAddress, GeocodeResult};
pub use stop::BusStopDto;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("malformed payload: {0}")]
    Json(#[from] serde_json::Error),

    #[error("geocoder returned an unparseable coordinate: {0}")]
    Coordinate(#[from] std::num::ParseFloatError),
}

pub type Result<T> = std::result::Result<T, ApiError>;
