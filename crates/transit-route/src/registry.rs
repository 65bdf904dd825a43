//! Stop set with a spatial index.
//!
//! The registry owns the canonical stop list, assigns sequential `StopId`s,
//! and answers the point queries a host needs when wiring stops to routes or
//! resolving a user's map pick: by name, nearest to a point, within a radius.
//!
//! An R-tree (via `rstar`) in lat/lon degree space backs the point queries.
//! Degree-space distance is fine here: the queries compare candidates around
//! one city, where the lon/lat scale distortion is uniform across candidates.

use rstar::{PointDistance, RTree, RTreeObject, AABB};

use transit_core::{GeoPoint, Stop, StopId};

// ── R-tree entry ──────────────────────────────────────────────────────────────

/// Entry stored in the R-tree: a 2-D `[lat, lon]` point plus the `StopId`.
#[derive(Clone)]
struct StopEntry {
    point: [f64; 2], // [lat, lon]
    id: StopId,
}

impl RTreeObject for StopEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for StopEntry {
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dlat = self.point[0] - point[0];
        let dlon = self.point[1] - point[1];
        dlat * dlat + dlon * dlon
    }
}

// ── StopRegistry ──────────────────────────────────────────────────────────────

/// The canonical stop set for one loaded network.
pub struct StopRegistry {
    stops: Vec<Stop>,
    spatial_idx: RTree<StopEntry>,
}

impl StopRegistry {
    /// Build from `(name, position)` pairs; ids are assigned sequentially in
    /// input order.  The R-tree is bulk-loaded (O(n log n), faster than n
    /// inserts).
    pub fn build(defs: impl IntoIterator<Item = (String, GeoPoint)>) -> Self {
        let stops: Vec<Stop> = defs
            .into_iter()
            .enumerate()
            .map(|(i, (name, position))| Stop::new(StopId(i as u32), name, position))
            .collect();

        let entries: Vec<StopEntry> = stops
            .iter()
            .map(|s| StopEntry {
                point: [s.position.lat, s.position.lon],
                id: s.id,
            })
            .collect();

        Self {
            stops,
            spatial_idx: RTree::bulk_load(entries),
        }
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    pub fn get(&self, id: StopId) -> Option<&Stop> {
        self.stops.get(id.index())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Stop> {
        self.stops.iter()
    }

    /// First stop whose name matches exactly.
    pub fn find_by_name(&self, name: &str) -> Option<&Stop> {
        self.stops.iter().find(|s| s.name == name)
    }

    /// The stop closest to `pos`.  `None` only when the registry is empty.
    pub fn nearest_stop(&self, pos: GeoPoint) -> Option<&Stop> {
        self.spatial_idx
            .nearest_neighbor(&[pos.lat, pos.lon])
            .and_then(|e| self.get(e.id))
    }

    /// All stops within `radius_deg` degrees of `pos`, unordered.
    pub fn stops_within(&self, pos: GeoPoint, radius_deg: f64) -> Vec<&Stop> {
        self.spatial_idx
            .locate_within_distance([pos.lat, pos.lon], radius_deg * radius_deg)
            .filter_map(|e| self.get(e.id))
            .collect()
    }
}
