//! Spatial queries and indexing over stops.

pub mod index;
pub mod queries;

pub use index::{RankedStop, StopIndex, DEFAULT_NEARBY_LIMIT};
pub use queries::{haversine_km, EARTH_RADIUS_KM};
