//! Deterministic per-vehicle RNG wrapper.
//!
//! # Determinism strategy
//!
//! Each vehicle gets its own independent `SmallRng` seeded by:
//!
//!   seed = global_seed XOR (vehicle_id * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive vehicle IDs uniformly across the seed space.
//! This means:
//!
//! - Vehicles never share RNG state (no ordering dependency between them).
//! - Adding a vehicle to the end of the fleet does not disturb the dwell
//!   sequences of existing vehicles — runs are reproducible as fleets grow.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::VehicleId;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Per-vehicle deterministic RNG.
///
/// Create one per vehicle when it joins the fleet; store in a parallel
/// `Vec<VehicleRng>` alongside the vehicle list.
pub struct VehicleRng(SmallRng);

impl VehicleRng {
    /// Seed deterministically from the run's global seed and a vehicle ID.
    pub fn new(global_seed: u64, vehicle: VehicleId) -> Self {
        let seed = global_seed ^ (vehicle.0 as u64).wrapping_mul(MIXING_CONSTANT);
        VehicleRng(SmallRng::seed_from_u64(seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }
}
