//! Distance-parameterized polyline geometry.
//!
//! # Data layout
//!
//! The polyline is stored as its projected points plus two derived arrays:
//!
//! ```text
//! points:          p0 ──── p1 ──── p2 ──── p3
//! segment_lengths:    l0      l1      l2          (len = points − 1)
//! prefix_lengths:  0     l0   l0+l1  l0+l1+l2     (len = points)
//! ```
//!
//! `total_length` is the last prefix entry.  All four fields are replaced
//! together by [`rebuild`](PathGeometry::rebuild); no partially-updated state
//! is ever observable.
//!
//! # Degenerate polylines
//!
//! Zero or one point is a normal case, not an error: `total_length` is 0 and
//! every position query returns the origin (0 points) or the single point.

use transit_core::WorldPoint;

/// Segments at or below this length are treated as zero-length: the
/// interpolation parameter is pinned to 0 instead of dividing by them.
const NEAR_ZERO_LEN: f64 = 1e-9;

/// An immutable-between-rebuilds polyline that answers "position at distance
/// d" and "total length".
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathGeometry {
    points: Vec<WorldPoint>,
    segment_lengths: Vec<f64>,
    prefix_lengths: Vec<f64>,
    total_length: f64,
}

impl PathGeometry {
    /// An empty polyline (no points, zero length).
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_points(points: Vec<WorldPoint>) -> Self {
        let mut geometry = Self::new();
        geometry.rebuild(points);
        geometry
    }

    /// Replace the polyline and recompute every derived field in one step.
    pub fn rebuild(&mut self, points: Vec<WorldPoint>) {
        let n = points.len();
        let mut segment_lengths = Vec::with_capacity(n.saturating_sub(1));
        let mut prefix_lengths = Vec::with_capacity(n);
        let mut total = 0.0;

        if n > 0 {
            prefix_lengths.push(0.0);
        }
        for pair in points.windows(2) {
            let len = pair[0].distance(pair[1]);
            segment_lengths.push(len);
            total += len;
            prefix_lengths.push(total);
        }

        self.points = points;
        self.segment_lengths = segment_lengths;
        self.prefix_lengths = prefix_lengths;
        self.total_length = total;
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    #[inline]
    pub fn total_length(&self) -> f64 {
        self.total_length
    }

    #[inline]
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn segment_count(&self) -> usize {
        self.segment_lengths.len()
    }

    /// `true` when the polyline cannot carry motion (fewer than 2 points or
    /// zero total length).
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.points.len() < 2 || self.total_length <= 0.0
    }

    #[inline]
    pub fn points(&self) -> &[WorldPoint] {
        &self.points
    }

    #[inline]
    pub fn segment_lengths(&self) -> &[f64] {
        &self.segment_lengths
    }

    /// Distance along the polyline from the first point to vertex `i`.
    #[inline]
    pub fn prefix_length(&self, i: usize) -> f64 {
        self.prefix_lengths[i]
    }

    // ── Position queries ──────────────────────────────────────────────────

    /// The point at `distance` along the polyline.
    ///
    /// The input is reduced with a non-negative modulo of `total_length`, so
    /// negative distances (loop wraparound subtraction) and distances past
    /// the end both land back on the path.  One-shot callers clamp their
    /// cursor to `[0, total_length]` before querying; the wrap here is a
    /// defensive guarantee, not a travel-mode decision.
    pub fn position_at(&self, distance: f64) -> WorldPoint {
        match self.points.len() {
            0 => WorldPoint::ORIGIN,
            1 => self.points[0],
            _ => {
                if self.total_length <= 0.0 {
                    return self.points[0];
                }
                let mut d = distance.rem_euclid(self.total_length);
                for (i, &seg_len) in self.segment_lengths.iter().enumerate() {
                    if d <= seg_len {
                        let t = if seg_len <= NEAR_ZERO_LEN { 0.0 } else { d / seg_len };
                        return self.points[i].lerp(self.points[i + 1], t);
                    }
                    d -= seg_len;
                }
                // Accumulated floating error walked past the final segment.
                self.points[self.points.len() - 1]
            }
        }
    }
}
