//! R-tree index over coordinate-bearing stops.
//!
//! Built once per stop-list fetch and queried repeatedly. Queries run in
//! two stages: a fast Euclidean pre-filter in degree space inside the
//! R-tree, then an exact haversine pass over the survivors. Euclidean
//! degrees drift from true distance away from the equator, so the
//! pre-filter radius is widened by the local longitude compression before
//! the precise pass decides.

use geo::Point;
use rstar::{PointDistance, RTree, RTreeObject, AABB};

use crate::models::Stop;
use crate::spatial::queries::{haversine_km, km_to_degrees_approx};

/// How many ranked stops a nearby lookup returns by default.
pub const DEFAULT_NEARBY_LIMIT: usize = 4;

/// A stop paired with its distance from the queried point, in kilometers.
#[derive(Clone, Debug)]
pub struct RankedStop {
    pub stop: Stop,
    pub distance_km: f64,
}

#[derive(Clone)]
struct StopNode {
    stop: Stop,
    point: [f64; 2],
    /// Position in the source collection; breaks distance ties.
    ordinal: usize,
}

impl RTreeObject for StopNode {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for StopNode {
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dx = self.point[0] - point[0];
        let dy = self.point[1] - point[1];
        dx * dx + dy * dy
    }
}

/// Spatial index over every stop that has a location.
///
/// Stops without coordinates are skipped at construction and can never be
/// returned by any query, matching the resolver's invariant.
pub struct StopIndex {
    tree: RTree<StopNode>,
}

impl StopIndex {
    pub fn new(stops: &[Stop]) -> Self {
        let nodes: Vec<StopNode> = stops
            .iter()
            .enumerate()
            .filter_map(|(ordinal, stop)| {
                let location = stop.location?;
                Some(StopNode {
                    stop: stop.clone(),
                    point: [location.x(), location.y()],
                    ordinal,
                })
            })
            .collect();

        Self {
            tree: RTree::bulk_load(nodes),
        }
    }

    /// Number of indexed (coordinate-bearing) stops.
    pub fn len(&self) -> usize {
        self.tree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }

    /// Stops strictly within `radius_km` of `point`, nearest first.
    pub fn within_km(&self, point: Point, radius_km: f64) -> Vec<RankedStop> {
        if radius_km <= 0.0 || !radius_km.is_finite() {
            return Vec::new();
        }

        // Longitude degrees shrink by cos(latitude), so an equator-scaled
        // degree box could miss in-range stops at this latitude. Widen
        // accordingly; the haversine pass below is what actually decides.
        let lat_cos = point.y().to_radians().cos().abs().max(1e-3);
        let degree_radius = km_to_degrees_approx(radius_km) / lat_cos;

        let mut hits: Vec<(usize, RankedStop)> = self
            .tree
            .locate_within_distance([point.x(), point.y()], degree_radius * degree_radius)
            .filter_map(|node| {
                let distance_km = haversine_km(point, Point::new(node.point[0], node.point[1]));
                (distance_km < radius_km).then(|| {
                    (
                        node.ordinal,
                        RankedStop {
                            stop: node.stop.clone(),
                            distance_km,
                        },
                    )
                })
            })
            .collect();

        hits.sort_by(|(ord_a, a), (ord_b, b)| {
            a.distance_km.total_cmp(&b.distance_km).then(ord_a.cmp(ord_b))
        });
        hits.into_iter().map(|(_, ranked)| ranked).collect()
    }

    /// The `limit` nearest stops, ranked by haversine distance.
    ///
    /// This is the backend's `/busstops/nearby` behavior: a short ranked
    /// list with the distance attached so the UI can show "N m from here".
    pub fn nearest(&self, point: Point, limit: usize) -> Vec<RankedStop> {
        let mut hits: Vec<(usize, RankedStop)> = self
            .tree
            .nearest_neighbor_iter(&[point.x(), point.y()])
            .take(limit)
            .map(|node| {
                let distance_km = haversine_km(point, Point::new(node.point[0], node.point[1]));
                (
                    node.ordinal,
                    RankedStop {
                        stop: node.stop.clone(),
                        distance_km,
                    },
                )
            })
            .collect();

        // The tree ranks in Euclidean degree space; re-rank the short list
        // by true distance.
        hits.sort_by(|(ord_a, a), (ord_b, b)| {
            a.distance_km.total_cmp(&b.distance_km).then(ord_a.cmp(ord_b))
        });
        hits.into_iter().map(|(_, ranked)| ranked).collect()
    }
}
