//! Proximity filtering of the stop list.

use geo::Point;

use crate::models::Stop;
use crate::spatial::queries::haversine_km;

/// A stop paired with its computed distance from the reference point.
///
/// Ephemeral: built fresh on every resolution call, never stored.
#[derive(Clone, Debug)]
pub struct Candidate<'a> {
    pub stop: &'a Stop,
    pub distance_km: f64,
}

/// Coordinate-bearing stops strictly inside `radius_km`, nearest first.
///
/// Stops without a location are skipped, not errors. The sort is stable:
/// equidistant stops keep their input order. An empty result just means
/// nothing was close enough.
pub fn candidates_within(reference: Point, stops: &[Stop], radius_km: f64) -> Vec<Candidate<'_>> {
    let mut candidates: Vec<Candidate<'_>> = stops
        .iter()
        .filter_map(|stop| {
            let location = stop.location?;
            let distance_km = haversine_km(reference, location);
            (distance_km < radius_km).then_some(Candidate { stop, distance_km })
        })
        .collect();

    candidates.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
    candidates
}
