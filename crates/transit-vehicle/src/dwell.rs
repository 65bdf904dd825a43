//! Randomized dwell durations.
//!
//! The dwell length a vehicle picks when it reaches a stop is the one place
//! randomness enters the motion engine, so it sits behind a trait: the fleet
//! plugs in a per-vehicle [`VehicleRng`], tests plug in a fixed value and
//! assert exact timings.

use transit_core::VehicleRng;

/// Inclusive bounds for a sampled dwell, in seconds.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DwellRange {
    pub min_secs: f64,
    pub max_secs: f64,
}

impl DwellRange {
    /// Normalizing constructor: negative inputs are floored at 0 and swapped
    /// bounds are reordered, so the range is always well-formed.
    pub fn new(min_secs: f64, max_secs: f64) -> Self {
        let lo = min_secs.min(max_secs).max(0.0);
        let hi = min_secs.max(max_secs).max(lo);
        Self { min_secs: lo, max_secs: hi }
    }
}

impl Default for DwellRange {
    /// The stock tuning: 1.0 s to 2.4 s at a stop.
    fn default() -> Self {
        Self { min_secs: 1.0, max_secs: 2.4 }
    }
}

/// Source of dwell durations.
///
/// Implementations must return a value within the given range.  The engine
/// never calls this on the hot path except at the moment a dwell begins.
pub trait DwellSampler {
    fn sample_dwell(&mut self, range: DwellRange) -> f64;
}

impl DwellSampler for VehicleRng {
    fn sample_dwell(&mut self, range: DwellRange) -> f64 {
        if range.max_secs > range.min_secs {
            self.gen_range(range.min_secs..=range.max_secs)
        } else {
            range.min_secs
        }
    }
}
