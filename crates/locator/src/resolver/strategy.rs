//! Two-tier resolution policy.

use geo::Point;
use tracing::debug;

use bus_api_types::GeocodeResult;

use crate::models::{Result, Stop};
use crate::resolver::candidates::candidates_within;
use crate::spatial::queries::haversine_km;

/// Radius inside which every stop counts as a pickable alternative.
///
/// Stops on opposite sides of a street legitimately sit within a few
/// hundred meters of each other, so everything this close is offered as a
/// list rather than a single guess.
pub const NEARBY_RADIUS_KM: f64 = 0.5;

/// Widest distance at which a lone best-effort guess is still offered.
pub const FALLBACK_RADIUS_KM: f64 = 15.0;

/// Outcome of a resolution: stops ranked nearest first, possibly empty.
#[derive(Clone, Debug, Default)]
pub struct Resolution {
    alternatives: Vec<Stop>,
}

impl Resolution {
    /// Seed from an externally ranked list, e.g. the backend's own
    /// `/busstops/nearby` response when it is available.
    pub fn from_stops(alternatives: Vec<Stop>) -> Self {
        Self { alternatives }
    }

    /// Whether any stop was close enough to be a reasonable guess.
    pub fn matched(&self) -> bool {
        !self.alternatives.is_empty()
    }

    /// All alternatives, nearest first.
    pub fn alternatives(&self) -> &[Stop] {
        &self.alternatives
    }

    /// The nearest alternative, if any.
    pub fn best(&self) -> Option<&Stop> {
        self.alternatives.first()
    }

    pub fn len(&self) -> usize {
        self.alternatives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alternatives.is_empty()
    }

    pub fn into_alternatives(self) -> Vec<Stop> {
        self.alternatives
    }
}

/// Resolve which stops a user at `reference` most plausibly means.
///
/// Two tiers:
/// 1. every coordinate-bearing stop strictly within [`NEARBY_RADIUS_KM`],
///    nearest first, ties in input order; the user picks among real
///    alternatives (e.g. the correct direction of travel);
/// 2. otherwise the single globally nearest stop, if strictly under
///    [`FALLBACK_RADIUS_KM`]: a best-effort guess, never a list.
///
/// Anything farther yields an empty, unmatched resolution; the caller
/// falls back to asking for an address. Stops without coordinates are
/// never returned. Out-of-range latitude/longitude anywhere is a caller
/// precondition violation with unspecified results.
pub fn resolve(reference: Point, stops: &[Stop]) -> Resolution {
    let nearby = candidates_within(reference, stops, NEARBY_RADIUS_KM);
    if !nearby.is_empty() {
        debug!(count = nearby.len(), "resolved nearby alternatives");
        return Resolution {
            alternatives: nearby.into_iter().map(|c| c.stop.clone()).collect(),
        };
    }

    // Strict `<` keeps the earliest stop on exact distance ties.
    let mut nearest: Option<(&Stop, f64)> = None;
    for stop in stops {
        let Some(location) = stop.location else {
            continue;
        };
        let distance_km = haversine_km(reference, location);
        if nearest.map_or(true, |(_, best)| distance_km < best) {
            nearest = Some((stop, distance_km));
        }
    }

    match nearest {
        Some((stop, distance_km)) if distance_km < FALLBACK_RADIUS_KM => {
            debug!(stop_id = %stop.id, distance_km, "resolved single fallback stop");
            Resolution {
                alternatives: vec![stop.clone()],
            }
        }
        _ => {
            debug!("no stop close enough to resolve");
            Resolution::default()
        }
    }
}

/// Resolve from a geocoder hit, e.g. a typed address the forward geocoder
/// turned into a result entry.
///
/// Fails only when the geocoder's stringly-typed coordinate does not
/// parse; "no stop near that address" is still an unmatched resolution,
/// not an error.
pub fn resolve_geocoded(result: &GeocodeResult, stops: &[Stop]) -> Result<Resolution> {
    let (lat, lon) = result.location()?;
    Ok(resolve(Point::new(lon, lat), stops))
}
