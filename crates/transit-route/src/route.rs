//! A route: geometry, stop snapshot, and projection index as one value.

use transit_core::{RouteId, Stop, WorldPoint};

use crate::{PathGeometry, StopProjectionIndex};

/// A transit line bound to one traversable path.
///
/// The geometry and the stop index are a matched pair: both are replaced
/// together by [`rebuild`](Self::rebuild), so a stale index projected onto an
/// old polyline is never reachable.  Keeping the pair inside one value (as
/// opposed to a side table keyed by route identity) makes that invariant
/// structural rather than a bookkeeping convention.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    pub id: RouteId,
    /// Short line code, e.g. `"L1"`.
    pub code: String,
    pub name: String,
    geometry: PathGeometry,
    stops: Vec<Stop>,
    stop_index: StopProjectionIndex,
}

impl Route {
    /// A route with no geometry yet.  Position queries return the origin and
    /// vehicles bound to it stay parked until the first [`rebuild`](Self::rebuild).
    pub fn new(
        id: RouteId,
        code: impl Into<String>,
        name: impl Into<String>,
        stops: Vec<Stop>,
    ) -> Self {
        Self {
            id,
            code: code.into(),
            name: name.into(),
            geometry: PathGeometry::new(),
            stops,
            stop_index: StopProjectionIndex::empty(),
        }
    }

    /// Replace the projected polyline and re-project the stop set onto it.
    ///
    /// `stop_positions[i]` is the projected world position of `stops()[i]`.
    /// Both derived structures are swapped in together; a tick that runs
    /// after this call observes the new geometry and the new index, never a
    /// mix.
    pub fn rebuild(&mut self, path: Vec<WorldPoint>, stop_positions: &[WorldPoint]) {
        self.geometry.rebuild(path);
        self.stop_index = StopProjectionIndex::build(&self.geometry, &self.stops, stop_positions);
    }

    /// Replace the stop snapshot and re-project it onto the current geometry.
    pub fn replace_stops(&mut self, stops: Vec<Stop>, stop_positions: &[WorldPoint]) {
        self.stops = stops;
        self.stop_index = StopProjectionIndex::build(&self.geometry, &self.stops, stop_positions);
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn geometry(&self) -> &PathGeometry {
        &self.geometry
    }

    #[inline]
    pub fn stop_index(&self) -> &StopProjectionIndex {
        &self.stop_index
    }

    #[inline]
    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    #[inline]
    pub fn total_length(&self) -> f64 {
        self.geometry.total_length()
    }

    /// Position at `distance` along this route's path.
    #[inline]
    pub fn position_at(&self, distance: f64) -> WorldPoint {
        self.geometry.position_at(distance)
    }

    /// `true` if this route serves `stop` (by id).
    pub fn serves(&self, stop: transit_core::StopId) -> bool {
        self.stop_index.distance_for_stop(stop).is_some()
    }
}
