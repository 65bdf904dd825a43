//! Unit tests for transit-vehicle.

use transit_core::{GeoPoint, RouteId, Stop, StopId, WorldPoint};
use transit_route::Route;

use crate::{arrivals_for_stop, DwellRange, DwellSampler, Fleet, TravelMode, Vehicle};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Sampler returning a fixed dwell — lets tests assert exact timings.
struct FixedDwell(f64);

impl DwellSampler for FixedDwell {
    fn sample_dwell(&mut self, _range: DwellRange) -> f64 {
        self.0
    }
}

/// A straight east-west route of `len` px with stops at the given distances.
fn straight_route(len: f64, stop_distances: &[f64]) -> Route {
    let stops: Vec<Stop> = stop_distances
        .iter()
        .enumerate()
        .map(|(i, _)| Stop::new(StopId(i as u32), format!("s{i}"), GeoPoint::new(0.0, 0.0)))
        .collect();
    let positions: Vec<WorldPoint> = stop_distances
        .iter()
        .map(|&d| WorldPoint::new(d, 0.0))
        .collect();

    let mut route = Route::new(RouteId(0), "T", "test line", stops);
    route.rebuild(
        vec![WorldPoint::new(0.0, 0.0), WorldPoint::new(len, 0.0)],
        &positions,
    );
    route
}

/// A route that never got geometry.
fn degenerate_route() -> Route {
    Route::new(RouteId(0), "X", "disconnected", vec![])
}

// ── DwellRange ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod dwell {
    use super::*;
    use transit_core::{VehicleId, VehicleRng};

    #[test]
    fn range_normalizes() {
        let r = DwellRange::new(3.0, 1.0);
        assert_eq!(r.min_secs, 1.0);
        assert_eq!(r.max_secs, 3.0);

        let r = DwellRange::new(-2.0, 1.5);
        assert_eq!(r.min_secs, 0.0);
        assert_eq!(r.max_secs, 1.5);
    }

    #[test]
    fn rng_sampler_stays_in_bounds() {
        let mut rng = VehicleRng::new(7, VehicleId(0));
        let range = DwellRange::new(1.0, 2.4);
        for _ in 0..200 {
            let d = rng.sample_dwell(range);
            assert!((1.0..=2.4).contains(&d), "out of bounds: {d}");
        }
    }

    #[test]
    fn collapsed_range_returns_min() {
        let mut rng = VehicleRng::new(7, VehicleId(0));
        assert_eq!(rng.sample_dwell(DwellRange::new(1.5, 1.5)), 1.5);
    }
}

// ── Vehicle: loop mode ────────────────────────────────────────────────────────

#[cfg(test)]
mod loop_mode {
    use super::*;

    #[test]
    fn speed_is_clamped_to_minimum() {
        let mut v = Vehicle::new(RouteId(0), 0.1, 0.0);
        assert_eq!(v.speed(), 1.0);
        v.set_speed(-5.0);
        assert_eq!(v.speed(), 1.0);
        v.set_speed(12.5);
        assert_eq!(v.speed(), 12.5);
    }

    #[test]
    fn negative_start_distance_floors_at_zero() {
        let v = Vehicle::new(RouteId(0), 5.0, -10.0);
        assert_eq!(v.distance_on_route(), 0.0);
    }

    #[test]
    fn returns_to_start_after_whole_loops() {
        let route = straight_route(20.0, &[]);
        let mut sampler = FixedDwell(1.0);
        let mut v = Vehicle::new(route.id, 2.0, 3.0);

        // 10 s at 2 px/s = exactly one loop of 20 px.
        for _ in 0..10 {
            v.advance(1.0, &route, &mut sampler);
        }
        assert!((v.distance_on_route() - 3.0).abs() < 1e-9);

        // Two more loops.
        for _ in 0..20 {
            v.advance(1.0, &route, &mut sampler);
        }
        assert!((v.distance_on_route() - 3.0).abs() < 1e-9);
    }

    #[test]
    fn wraps_mid_tick() {
        let route = straight_route(20.0, &[]);
        let mut sampler = FixedDwell(1.0);
        let mut v = Vehicle::new(route.id, 10.0, 15.0);
        v.advance(1.0, &route, &mut sampler);
        assert!((v.distance_on_route() - 5.0).abs() < 1e-9);
    }

    #[test]
    fn degenerate_route_freezes_vehicle() {
        let route = degenerate_route();
        let mut sampler = FixedDwell(1.0);
        let mut v = Vehicle::new(route.id, 50.0, 5.0);
        v.advance(1.0, &route, &mut sampler);
        v.check_stop(&route, &mut sampler);
        assert_eq!(v.distance_on_route(), 5.0);
        assert!(!v.is_waiting());
    }

    #[test]
    fn position_follows_cursor() {
        let route = straight_route(100.0, &[]);
        let mut sampler = FixedDwell(1.0);
        let mut v = Vehicle::new(route.id, 4.0, 0.0);
        v.advance(2.5, &route, &mut sampler);
        assert_eq!(v.position(&route), WorldPoint::new(10.0, 0.0));
    }
}

// ── Vehicle: one-shot mode ────────────────────────────────────────────────────

#[cfg(test)]
mod one_shot {
    use super::*;

    #[test]
    fn full_shuttle_cycle() {
        let route = straight_route(200.0, &[]);
        let mut sampler = FixedDwell(2.0);
        let mut v = Vehicle::new(route.id, 10.0, 0.0);
        v.set_target_distance(100.0);

        // 10 s at 10 px/s reaches the target exactly.
        for _ in 0..10 {
            v.advance(1.0, &route, &mut sampler);
        }
        assert_eq!(v.distance_on_route(), 100.0);
        assert!(v.is_waiting());
        assert_eq!(v.wait_remaining(), 2.0);

        // Dwelling consumes whole ticks; the cursor stays put.
        v.advance(1.0, &route, &mut sampler);
        assert!(v.is_waiting());
        assert_eq!(v.distance_on_route(), 100.0);

        // Wait expires: cursor resets to the trip start, still this tick.
        v.advance(1.0, &route, &mut sampler);
        assert!(!v.is_waiting());
        assert_eq!(v.distance_on_route(), 0.0);

        // Motion resumes next tick — the cycle repeats.
        v.advance(1.0, &route, &mut sampler);
        assert_eq!(v.distance_on_route(), 10.0);
    }

    #[test]
    fn overshoot_clamps_to_target() {
        let route = straight_route(200.0, &[]);
        let mut sampler = FixedDwell(1.0);
        let mut v = Vehicle::new(route.id, 10.0, 95.0);
        v.set_target_distance(100.0);

        v.advance(3.0, &route, &mut sampler); // would reach 125
        assert_eq!(v.distance_on_route(), 100.0);
        assert!(v.is_waiting());
    }

    #[test]
    fn trip_start_is_distance_at_switch() {
        let route = straight_route(200.0, &[]);
        let mut sampler = FixedDwell(1.0);
        let mut v = Vehicle::new(route.id, 10.0, 40.0);
        v.set_target_distance(60.0);
        match v.mode() {
            TravelMode::OneShot { trip_start_distance, target_distance, .. } => {
                assert_eq!(trip_start_distance, 40.0);
                assert_eq!(target_distance, 60.0);
            }
            TravelMode::Loop => panic!("expected one-shot mode"),
        }

        // Reach target, dwell, reset: back to 40, not 0.
        v.advance(2.0, &route, &mut sampler);
        assert!(v.is_waiting());
        v.advance(1.0, &route, &mut sampler);
        assert_eq!(v.distance_on_route(), 40.0);
    }

    #[test]
    fn set_loop_returns_to_looping() {
        let route = straight_route(20.0, &[]);
        let mut sampler = FixedDwell(1.0);
        let mut v = Vehicle::new(route.id, 10.0, 0.0);
        v.set_target_distance(15.0);
        v.set_loop();
        v.advance(3.0, &route, &mut sampler); // 30 px wraps to 10
        assert!((v.distance_on_route() - 10.0).abs() < 1e-9);
        assert!(!v.is_waiting());
    }
}

// ── Vehicle: stop checks ──────────────────────────────────────────────────────

#[cfg(test)]
mod stop_checks {
    use super::*;

    /// Run `ticks` ticks and count Moving → Waiting transitions.
    fn count_dwell_triggers(
        v: &mut Vehicle,
        route: &Route,
        sampler: &mut FixedDwell,
        ticks: usize,
        dt: f64,
    ) -> usize {
        let mut triggers = 0;
        let mut was_waiting = v.is_waiting();
        for _ in 0..ticks {
            v.advance(dt, route, sampler);
            v.check_stop(route, sampler);
            if v.is_waiting() && !was_waiting {
                triggers += 1;
            }
            was_waiting = v.is_waiting();
        }
        triggers
    }

    #[test]
    fn dwells_when_reaching_a_stop() {
        let route = straight_route(200.0, &[100.0]);
        let mut sampler = FixedDwell(1.5);
        let mut v = Vehicle::new(route.id, 10.0, 80.0);

        v.advance(1.0, &route, &mut sampler); // 90: gap 10, inside the radius
        v.check_stop(&route, &mut sampler);
        assert!(v.is_waiting());
        assert_eq!(v.wait_remaining(), 1.5);
    }

    #[test]
    fn slow_pass_triggers_exactly_once() {
        let route = straight_route(200.0, &[100.0]);
        let mut sampler = FixedDwell(1.0);
        // 2 px/s: many consecutive ticks inside the 10 px radius.
        let mut v = Vehicle::new(route.id, 2.0, 80.0);

        let triggers = count_dwell_triggers(&mut v, &route, &mut sampler, 40, 1.0);
        assert_eq!(triggers, 1, "hysteresis must suppress re-triggers");
        // The pass is over: the vehicle is well beyond the stop.
        assert!(v.distance_on_route() > 110.0);
    }

    #[test]
    fn separate_stops_both_trigger() {
        let route = straight_route(400.0, &[100.0, 300.0]);
        let mut sampler = FixedDwell(1.0);
        let mut v = Vehicle::new(route.id, 10.0, 0.0);

        let triggers = count_dwell_triggers(&mut v, &route, &mut sampler, 45, 1.0);
        assert_eq!(triggers, 2);
    }

    #[test]
    fn loop_wraparound_gap_triggers() {
        let route = straight_route(200.0, &[5.0]);
        let mut sampler = FixedDwell(1.0);
        // Near the end of the loop; the only stop is just past the wrap.
        let mut v = Vehicle::new(route.id, 1.0, 197.0);

        v.advance(1.0, &route, &mut sampler); // 198: wrapped gap = 7
        v.check_stop(&route, &mut sampler);
        assert!(v.is_waiting());
    }

    #[test]
    fn one_shot_ignores_stop_behind() {
        let route = straight_route(200.0, &[50.0]);
        let mut sampler = FixedDwell(1.0);
        let mut v = Vehicle::new(route.id, 10.0, 55.0);
        v.set_target_distance(150.0);

        v.check_stop(&route, &mut sampler);
        assert!(!v.is_waiting(), "a stop behind a one-shot trip is dead");
    }

    #[test]
    fn one_shot_ignores_stop_beyond_target() {
        let route = straight_route(200.0, &[112.0]);
        let mut sampler = FixedDwell(1.0);
        // Cursor past the (small) target, stop within raw proximity but past
        // target + radius: the vehicle will never roll through it.
        let mut v = Vehicle::new(route.id, 10.0, 105.0);
        v.set_target_distance(90.0);

        v.check_stop(&route, &mut sampler);
        assert!(!v.is_waiting());
    }

    #[test]
    fn waiting_vehicle_skips_stop_checks() {
        let route = straight_route(200.0, &[100.0]);
        let mut sampler = FixedDwell(5.0);
        let mut v = Vehicle::new(route.id, 10.0, 95.0);
        v.check_stop(&route, &mut sampler);
        assert!(v.is_waiting());
        let before = v.wait_remaining();

        v.check_stop(&route, &mut sampler);
        assert_eq!(v.wait_remaining(), before, "no re-trigger while waiting");
    }

    #[test]
    fn stopless_route_never_dwells() {
        let route = straight_route(200.0, &[]);
        let mut sampler = FixedDwell(1.0);
        let mut v = Vehicle::new(route.id, 10.0, 190.0);
        for _ in 0..10 {
            v.advance(1.0, &route, &mut sampler);
            v.check_stop(&route, &mut sampler);
        }
        assert!(!v.is_waiting());
    }
}

// ── Fleet ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod fleet {
    use super::*;
    use crate::VehicleError;
    use transit_core::VehicleId;

    fn fleet_with_line(seed: u64) -> (Fleet, RouteId) {
        let mut fleet = Fleet::new(seed);
        let stops = vec![Stop::new(StopId(0), "mid", GeoPoint::new(0.0, 0.0))];
        let route = fleet.add_route("L1", "Test Line", stops);
        fleet
            .rebuild_route(
                route,
                vec![WorldPoint::new(0.0, 0.0), WorldPoint::new(200.0, 0.0)],
                &[WorldPoint::new(100.0, 0.0)],
            )
            .unwrap();
        (fleet, route)
    }

    #[test]
    fn add_vehicle_to_unknown_route_errors() {
        let mut fleet = Fleet::new(0);
        let result = fleet.add_vehicle(RouteId(3), 10.0, 0.0);
        assert!(matches!(result, Err(VehicleError::UnknownRoute(_))));
    }

    #[test]
    fn rebuild_unknown_route_errors() {
        let mut fleet = Fleet::new(0);
        let result = fleet.rebuild_route(RouteId(0), vec![], &[]);
        assert!(matches!(result, Err(VehicleError::UnknownRoute(_))));
    }

    #[test]
    fn tick_advances_every_vehicle() {
        let (mut fleet, route) = fleet_with_line(42);
        let a = fleet.add_vehicle(route, 10.0, 0.0).unwrap();
        let b = fleet.add_vehicle(route, 20.0, 0.0).unwrap();

        fleet.tick(1.0);
        assert_eq!(fleet.vehicle(a).unwrap().distance_on_route(), 10.0);
        assert_eq!(fleet.vehicle(b).unwrap().distance_on_route(), 20.0);
    }

    #[test]
    fn same_seed_reproduces_run() {
        let run = |seed: u64| {
            let (mut fleet, route) = fleet_with_line(seed);
            for _ in 0..3 {
                fleet.add_vehicle(route, 15.0, 0.0).unwrap();
            }
            for _ in 0..60 {
                fleet.tick(0.5);
            }
            fleet
                .vehicles()
                .iter()
                .map(|v| (v.distance_on_route(), v.is_waiting()))
                .collect::<Vec<_>>()
        };

        assert_eq!(run(7), run(7));
    }

    #[test]
    fn rebuild_all_reprojects_every_route() {
        let (mut fleet, route) = fleet_with_line(0);
        fleet.rebuild_all(|_route| {
            (
                vec![WorldPoint::new(0.0, 0.0), WorldPoint::new(400.0, 0.0)],
                vec![WorldPoint::new(200.0, 0.0)],
            )
        });
        let rebuilt = fleet.route(route).unwrap();
        assert_eq!(rebuilt.total_length(), 400.0);
        assert_eq!(rebuilt.stop_index().next_stop_distance(0.0), 200.0);
    }

    #[test]
    fn position_query() {
        let (mut fleet, route) = fleet_with_line(0);
        let v = fleet.add_vehicle(route, 10.0, 30.0).unwrap();
        assert_eq!(fleet.position(v), Some(WorldPoint::new(30.0, 0.0)));
        assert_eq!(fleet.position(VehicleId(99)), None);
    }
}

// ── Arrivals ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod arrivals {
    use super::*;

    fn board_fleet() -> (Fleet, RouteId, StopId) {
        let mut fleet = Fleet::new(1);
        let stop_id = StopId(0);
        let stops = vec![Stop::new(stop_id, "Center", GeoPoint::new(0.0, 0.0))];
        let route = fleet.add_route("L1", "Line", stops);
        fleet
            .rebuild_route(
                route,
                vec![WorldPoint::new(0.0, 0.0), WorldPoint::new(200.0, 0.0)],
                &[WorldPoint::new(100.0, 0.0)],
            )
            .unwrap();
        (fleet, route, stop_id)
    }

    #[test]
    fn sorted_by_eta() {
        let (mut fleet, route, stop) = board_fleet();
        let far = fleet.add_vehicle(route, 10.0, 0.0).unwrap(); // 10 s out
        let near = fleet.add_vehicle(route, 10.0, 60.0).unwrap(); // 4 s out

        let board = arrivals_for_stop(&fleet, stop, 0);
        assert_eq!(board.len(), 2);
        assert_eq!(board[0].vehicle, near);
        assert_eq!(board[1].vehicle, far);
        assert!((board[0].eta_secs - 4.0).abs() < 1e-9);
        assert!((board[1].eta_secs - 10.0).abs() < 1e-9);
    }

    #[test]
    fn loop_vehicle_past_stop_wraps() {
        let (mut fleet, route, stop) = board_fleet();
        // 150 px past start, stop at 100: 150 px to go around the 200 loop.
        fleet.add_vehicle(route, 10.0, 150.0).unwrap();

        let board = arrivals_for_stop(&fleet, stop, 0);
        assert_eq!(board.len(), 1);
        assert!((board[0].eta_secs - 15.0).abs() < 1e-9);
    }

    #[test]
    fn one_shot_vehicle_past_stop_is_excluded() {
        let (mut fleet, route, stop) = board_fleet();
        let v = fleet.add_vehicle(route, 10.0, 150.0).unwrap();
        fleet
            .vehicle_mut(v)
            .unwrap()
            .set_target_distance(190.0);

        assert!(arrivals_for_stop(&fleet, stop, 0).is_empty());
    }

    #[test]
    fn dwelling_vehicle_adds_remaining_wait() {
        let (mut fleet, route, stop) = board_fleet();
        let v = fleet.add_vehicle(route, 10.0, 40.0).unwrap();
        let fleet_route = fleet.route(route).unwrap().clone();
        let mut sampler = FixedDwell(3.0);
        let vehicle = fleet.vehicle_mut(v).unwrap();

        // 60 px short of the stop: no trigger yet.
        vehicle.check_stop(&fleet_route, &mut sampler);
        assert!(!vehicle.is_waiting());

        // Move within the radius and park it in a dwell of known length.
        vehicle.advance(5.5, &fleet_route, &mut sampler); // 95: gap 5
        vehicle.check_stop(&fleet_route, &mut sampler);
        assert!(vehicle.is_waiting());

        let board = arrivals_for_stop(&fleet, stop, 0);
        assert_eq!(board.len(), 1);
        // 5 px / 10 px·s⁻¹ = 0.5 s travel + 3 s dwell.
        assert!((board[0].eta_secs - 3.5).abs() < 1e-9);
    }

    #[test]
    fn per_route_cap() {
        let (mut fleet, route, stop) = board_fleet();
        for d in [0.0, 20.0, 40.0] {
            fleet.add_vehicle(route, 10.0, d).unwrap();
        }
        assert_eq!(arrivals_for_stop(&fleet, stop, 0).len(), 3);
        assert_eq!(arrivals_for_stop(&fleet, stop, 2).len(), 2);
        assert_eq!(arrivals_for_stop(&fleet, stop, 1).len(), 1);
    }

    #[test]
    fn unserved_stop_is_empty() {
        let (mut fleet, route, _stop) = board_fleet();
        fleet.add_vehicle(route, 10.0, 0.0).unwrap();
        assert!(arrivals_for_stop(&fleet, StopId(99), 0).is_empty());
    }
}
