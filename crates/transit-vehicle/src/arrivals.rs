//! ETA board for a single stop.
//!
//! Answers "when does the next vehicle reach this stop?" across the whole
//! fleet, for every route that serves the stop.  This is a read-only query
//! over the tick's consistent state; it allocates and therefore belongs on
//! the UI path, not inside the tick.

use transit_core::{RouteId, StopId, VehicleId};

use crate::{Fleet, TravelMode, Vehicle};

/// Speeds and lengths at or below this are treated as "not travelling".
const EPS: f64 = 1e-3;

/// One predicted arrival.
#[derive(Clone, Debug)]
pub struct Arrival {
    pub route: RouteId,
    pub vehicle: VehicleId,
    pub stop: StopId,
    pub eta_secs: f64,
}

/// Predicted arrivals at `stop`, ascending by ETA, with at most
/// `max_per_route` entries per route (0 = unlimited).
///
/// A vehicle contributes an arrival when its route serves the stop and the
/// stop is still ahead of it: in loop mode a stop "behind" wraps around the
/// route, in one-shot mode it is skipped (never revisited this trip).  A
/// currently dwelling vehicle's remaining wait is added to its ETA.
pub fn arrivals_for_stop(fleet: &Fleet, stop: StopId, max_per_route: usize) -> Vec<Arrival> {
    let mut out = Vec::new();

    for (i, vehicle) in fleet.vehicles().iter().enumerate() {
        let Some(route) = fleet.route(vehicle.route) else {
            continue;
        };
        let Some(stop_distance) = route.stop_index().distance_for_stop(stop) else {
            continue; // this line does not pass the stop
        };
        if let Some(eta_secs) = estimate_eta_secs(vehicle, route.total_length(), stop_distance) {
            out.push(Arrival {
                route: route.id,
                vehicle: VehicleId(i as u32),
                stop,
                eta_secs,
            });
        }
    }

    out.sort_by(|a, b| a.eta_secs.total_cmp(&b.eta_secs));

    if max_per_route > 0 {
        let mut per_route_count = std::collections::HashMap::new();
        out.retain(|a| {
            let count = per_route_count.entry(a.route).or_insert(0usize);
            *count += 1;
            *count <= max_per_route
        });
    }

    out
}

fn estimate_eta_secs(vehicle: &Vehicle, total_length: f64, stop_distance: f64) -> Option<f64> {
    if total_length <= EPS {
        return None;
    }

    let mut remain = stop_distance - vehicle.distance_on_route();
    match vehicle.mode() {
        TravelMode::Loop => {
            if remain < 0.0 {
                remain += total_length;
            }
        }
        TravelMode::OneShot { .. } => {
            if remain < 0.0 {
                return None;
            }
        }
    }

    let speed = vehicle.speed();
    if speed <= EPS {
        return None;
    }

    let mut eta = remain / speed;
    if vehicle.is_waiting() {
        eta += vehicle.wait_remaining();
    }
    Some(eta)
}
