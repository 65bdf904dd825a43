//! Per-vehicle movement state.
//!
//! A vehicle is a cursor along one route's polyline: a distance, a speed,
//! a travel mode, and a dwell state machine.
//!
//! # State machine
//!
//! ```text
//!              advance: remaining ≤ 0
//!        ┌──────────────────────────────────┐
//!        ▼                                  │
//!     Moving ──── check_stop: within ───▶ Waiting(remaining)
//!        │        stop radius               ▲
//!        └──── advance: reached one-shot ───┘
//!              target
//! ```
//!
//! Leaving `Waiting` after a one-shot target dwell additionally resets the
//! cursor to the trip's start distance, producing the shuttle cycle:
//! start → target → dwell → start → …
//!
//! A route with `total_length ≤ 0` freezes the vehicle: both `advance` and
//! `check_stop` are no-ops on it, and nothing here divides by the length.

use transit_route::Route;
use transit_core::RouteId;

use crate::dwell::{DwellRange, DwellSampler};

/// Speeds below this are clamped up; a vehicle never stands still by speed.
pub const MIN_SPEED_PX_PER_S: f64 = 1.0;

/// Distance-on-route proximity within which a vehicle dwells at a stop.
pub const DEFAULT_STOP_RADIUS_PX: f64 = 10.0;

/// A candidate stop must differ from the last-triggered stop distance by
/// more than this fraction of the stop radius to trigger a new dwell.
/// Without it, a vehicle crawling through the radius would re-trigger a
/// fresh wait every tick as soon as the previous one ended.
const HYSTERESIS_FACTOR: f64 = 0.75;

/// "No stop triggered yet" sentinel: infinitely far from every real
/// distance, so the first trigger always passes the hysteresis check.
const LAST_STOP_NONE: f64 = f64::NEG_INFINITY;

// ── Modes and states ──────────────────────────────────────────────────────────

/// How the vehicle treats the end of its journey.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum TravelMode {
    /// Wrap around the route indefinitely.
    Loop,
    /// Shuttle one designated trip: run to `target_distance`, dwell, reset
    /// to `trip_start_distance`, repeat.
    OneShot {
        target_distance: f64,
        trip_start_distance: f64,
        /// Set when the current dwell was caused by reaching the target;
        /// tells the wake-up transition to reset the cursor.
        at_target: bool,
    },
}

/// Whether the vehicle is rolling or sitting at a stop.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum DwellState {
    Moving,
    Waiting { remaining_secs: f64 },
}

// ── Vehicle ───────────────────────────────────────────────────────────────────

/// A simulated vehicle bound to one route.
#[derive(Clone, Debug)]
pub struct Vehicle {
    /// The route this vehicle travels; resolved by the fleet each tick.
    pub route: RouteId,
    speed_px_per_s: f64,
    distance: f64,
    mode: TravelMode,
    dwell: DwellState,
    /// Distance of the stop that caused the most recent dwell.
    last_stop_distance: f64,
    stop_radius_px: f64,
    dwell_range: DwellRange,
}

impl Vehicle {
    pub fn new(route: RouteId, speed_px_per_s: f64, start_distance: f64) -> Self {
        Self {
            route,
            speed_px_per_s: speed_px_per_s.max(MIN_SPEED_PX_PER_S),
            distance: start_distance.max(0.0),
            mode: TravelMode::Loop,
            dwell: DwellState::Moving,
            last_stop_distance: LAST_STOP_NONE,
            stop_radius_px: DEFAULT_STOP_RADIUS_PX,
            dwell_range: DwellRange::default(),
        }
    }

    // ── Tuning ────────────────────────────────────────────────────────────

    pub fn set_speed(&mut self, speed_px_per_s: f64) {
        self.speed_px_per_s = speed_px_per_s.max(MIN_SPEED_PX_PER_S);
    }

    pub fn speed(&self) -> f64 {
        self.speed_px_per_s
    }

    pub fn set_stop_radius(&mut self, radius_px: f64) {
        self.stop_radius_px = radius_px.max(0.0);
    }

    pub fn set_dwell_range(&mut self, range: DwellRange) {
        self.dwell_range = range;
    }

    // ── Mode switches ─────────────────────────────────────────────────────

    /// Switch to a one-shot shuttle trip from the current distance to
    /// `target_distance`.
    pub fn set_target_distance(&mut self, target_distance: f64) {
        self.mode = TravelMode::OneShot {
            target_distance: target_distance.max(0.0),
            trip_start_distance: self.distance,
            at_target: false,
        };
    }

    /// Return to indefinite looping.
    pub fn set_loop(&mut self) {
        self.mode = TravelMode::Loop;
    }

    // ── Observers ─────────────────────────────────────────────────────────

    #[inline]
    pub fn distance_on_route(&self) -> f64 {
        self.distance
    }

    #[inline]
    pub fn mode(&self) -> TravelMode {
        self.mode
    }

    #[inline]
    pub fn dwell_state(&self) -> DwellState {
        self.dwell
    }

    #[inline]
    pub fn is_waiting(&self) -> bool {
        matches!(self.dwell, DwellState::Waiting { .. })
    }

    /// Seconds of dwell left; 0 while moving.
    pub fn wait_remaining(&self) -> f64 {
        match self.dwell {
            DwellState::Moving => 0.0,
            DwellState::Waiting { remaining_secs } => remaining_secs.max(0.0),
        }
    }

    /// Current world position on `route`.
    #[inline]
    pub fn position(&self, route: &Route) -> transit_core::WorldPoint {
        route.position_at(self.distance)
    }

    // ── Simulation ────────────────────────────────────────────────────────

    /// Advance by `dt` seconds of travel along `route`.
    ///
    /// Dwelling consumes the whole tick, including the tick on which the
    /// wait runs out — motion resumes on the next call.
    pub fn advance(&mut self, dt: f64, route: &Route, sampler: &mut impl DwellSampler) {
        let total = route.total_length();
        if total <= 0.0 {
            return;
        }

        if let DwellState::Waiting { remaining_secs } = &mut self.dwell {
            *remaining_secs -= dt;
            if *remaining_secs <= 0.0 {
                self.dwell = DwellState::Moving;
                if let TravelMode::OneShot { trip_start_distance, at_target, .. } = &mut self.mode
                {
                    if *at_target {
                        self.distance = *trip_start_distance;
                        *at_target = false;
                    }
                }
            }
            return;
        }

        self.distance += self.speed_px_per_s * dt;

        match &mut self.mode {
            TravelMode::Loop => {
                self.distance = self.distance.rem_euclid(total);
            }
            TravelMode::OneShot { target_distance, at_target, .. } => {
                let target = target_distance.min(total);
                if self.distance >= target {
                    self.distance = target;
                    *at_target = true;
                    self.dwell = DwellState::Waiting {
                        remaining_secs: sampler.sample_dwell(self.dwell_range),
                    };
                } else if self.distance > total {
                    self.distance = total;
                }
            }
        }
    }

    /// Dwell at the next stop if the cursor is within the stop radius.
    ///
    /// Called once per tick after [`advance`](Self::advance).  No-op while
    /// already waiting, on degenerate routes, and on routes with no stops.
    pub fn check_stop(&mut self, route: &Route, sampler: &mut impl DwellSampler) {
        if self.is_waiting() {
            return;
        }
        let total = route.total_length();
        if total <= 0.0 {
            return;
        }
        let index = route.stop_index();
        if index.is_empty() {
            return;
        }

        let next = index.next_stop_distance(self.distance);
        let mut gap = next - self.distance;

        match self.mode {
            TravelMode::Loop => {
                if gap < 0.0 {
                    gap += total;
                }
            }
            TravelMode::OneShot { target_distance, .. } => {
                // Behind the cursor: never revisited this trip.
                if gap < 0.0 {
                    return;
                }
                // Past the destination: the vehicle dwells at the target
                // instead, not at stops it will never roll through.
                if next > target_distance.min(total) + self.stop_radius_px {
                    return;
                }
            }
        }

        if gap <= self.stop_radius_px
            && (next - self.last_stop_distance).abs() > self.stop_radius_px * HYSTERESIS_FACTOR
        {
            self.dwell = DwellState::Waiting {
                remaining_secs: sampler.sample_dwell(self.dwell_range),
            };
            self.last_stop_distance = next;
        }
    }
}
