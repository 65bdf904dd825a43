//! Stops projected onto a route, ordered by distance-on-route.
//!
//! Built once per route from a geometry + stop-set snapshot; immutable until
//! the owning [`Route`](crate::Route) rebuilds it.  The projected stop
//! positions arrive from the host already in world pixels — the geographic
//! projection is not this crate's concern.

use transit_core::{Stop, StopId, WorldPoint};

use crate::PathGeometry;

/// One stop's place along a route.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StopOnRoute {
    pub stop: Stop,
    /// Distance-on-route of the stop's closest point on the polyline.
    pub distance: f64,
}

/// Ordered-by-distance index of a route's stops.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StopProjectionIndex {
    entries: Vec<StopOnRoute>,
}

impl StopProjectionIndex {
    /// An index with no entries — what degenerate geometry produces, and
    /// what `next_stop_distance` treats as "no stops, distance 0".
    pub fn empty() -> Self {
        Self::default()
    }

    /// Project every stop onto `geometry` and sort by distance-on-route.
    ///
    /// `positions[i]` is the projected world position of `stops[i]`.  For
    /// each stop the closest point on every segment is considered; the first
    /// segment achieving the minimum squared distance wins, and the recorded
    /// distance is that segment's prefix length plus the in-segment offset.
    ///
    /// A polyline with fewer than 2 points has no valid projections, so no
    /// stop is added at all (rather than recorded at a meaningless
    /// distance).  Ties in distance keep stop insertion order — the sort is
    /// stable.
    pub fn build(geometry: &PathGeometry, stops: &[Stop], positions: &[WorldPoint]) -> Self {
        let pts = geometry.points();
        if pts.len() < 2 {
            return Self::empty();
        }

        debug_assert_eq!(stops.len(), positions.len());

        let mut entries = Vec::with_capacity(stops.len());
        for (stop, &pos) in stops.iter().zip(positions) {
            let mut best_d2 = f64::MAX;
            let mut best_distance = 0.0;

            for i in 0..pts.len() - 1 {
                let a = pts[i];
                let b = pts[i + 1];
                let t = pos.project_onto_segment(a, b);
                let projected = a.lerp(b, t);
                let d2 = pos.distance_sq(projected);
                if d2 < best_d2 {
                    best_d2 = d2;
                    best_distance = geometry.prefix_length(i) + a.distance(projected);
                }
            }

            entries.push(StopOnRoute { stop: stop.clone(), distance: best_distance });
        }

        entries.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        Self { entries }
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// The first stop at or after `distance`; past the last stop the answer
    /// wraps to the **last** entry (looping routes treat it as the gateway
    /// back to the first) — an explicit policy, not a fallback failure.
    /// `None` only when the index is empty.
    pub fn next_stop(&self, distance: f64) -> Option<&Stop> {
        self.next_entry(distance).map(|e| &e.stop)
    }

    /// Distance-on-route of [`next_stop`](Self::next_stop); 0 when the index
    /// is empty (a defined default, not an error).
    pub fn next_stop_distance(&self, distance: f64) -> f64 {
        self.next_entry(distance).map_or(0.0, |e| e.distance)
    }

    /// The distance-on-route at which this route serves `stop`, or `None`
    /// if the route does not pass it.
    pub fn distance_for_stop(&self, stop: StopId) -> Option<f64> {
        self.entries
            .iter()
            .find(|e| e.stop.id == stop)
            .map(|e| e.distance)
    }

    pub fn entries(&self) -> &[StopOnRoute] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn next_entry(&self, distance: f64) -> Option<&StopOnRoute> {
        self.entries
            .iter()
            .find(|e| e.distance >= distance)
            .or_else(|| self.entries.last())
    }
}
