//! The fleet: routes, vehicles, and the per-tick update loop.

use transit_core::{RouteId, Stop, VehicleId, VehicleRng, WorldPoint};
use transit_route::Route;

use crate::{Vehicle, VehicleError, VehicleResult};

/// Owns every route and vehicle of one loaded network, plus one
/// deterministic RNG per vehicle for dwell sampling.
///
/// # Ordering guarantee
///
/// [`tick`](Self::tick) is the only per-frame mutator and runs vehicles
/// strictly in `VehicleId` order against immutable route state; geometry
/// rebuilds go through [`rebuild_route`](Self::rebuild_route) /
/// [`rebuild_all`](Self::rebuild_all), which take `&mut self` and therefore
/// can never interleave with a tick.
pub struct Fleet {
    routes: Vec<Route>,
    vehicles: Vec<Vehicle>,
    rngs: Vec<VehicleRng>,
    seed: u64,
}

impl Fleet {
    /// An empty fleet.  `seed` drives every vehicle's dwell randomness; the
    /// same seed reproduces the same run.
    pub fn new(seed: u64) -> Self {
        Self {
            routes: Vec::new(),
            vehicles: Vec::new(),
            rngs: Vec::new(),
            seed,
        }
    }

    // ── Routes ────────────────────────────────────────────────────────────

    /// Register a route (no geometry yet) and return its id.
    pub fn add_route(
        &mut self,
        code: impl Into<String>,
        name: impl Into<String>,
        stops: Vec<Stop>,
    ) -> RouteId {
        let id = RouteId(self.routes.len() as u32);
        self.routes.push(Route::new(id, code, name, stops));
        id
    }

    pub fn route(&self, id: RouteId) -> Option<&Route> {
        self.routes.get(id.index())
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Replace one route's projected polyline and stop projections.
    pub fn rebuild_route(
        &mut self,
        id: RouteId,
        path: Vec<WorldPoint>,
        stop_positions: &[WorldPoint],
    ) -> VehicleResult<()> {
        let route = self
            .routes
            .get_mut(id.index())
            .ok_or(VehicleError::UnknownRoute(id))?;
        route.rebuild(path, stop_positions);
        Ok(())
    }

    /// Re-project every route via `project`, which maps a route to its new
    /// polyline and per-stop world positions (in `Route::stops` order).
    ///
    /// With the `parallel` feature the projection fan-outs across Rayon's
    /// pool; rebuilds are the one boundary where that is safe, since no
    /// tick can run concurrently with `&mut self`.
    #[cfg(feature = "parallel")]
    pub fn rebuild_all<F>(&mut self, project: F)
    where
        F: Fn(&Route) -> (Vec<WorldPoint>, Vec<WorldPoint>) + Sync,
    {
        use rayon::prelude::*;
        self.routes.par_iter_mut().for_each(|route| {
            let (path, stop_positions) = project(route);
            route.rebuild(path, &stop_positions);
        });
    }

    #[cfg(not(feature = "parallel"))]
    pub fn rebuild_all<F>(&mut self, project: F)
    where
        F: Fn(&Route) -> (Vec<WorldPoint>, Vec<WorldPoint>) + Sync,
    {
        for route in &mut self.routes {
            let (path, stop_positions) = project(route);
            route.rebuild(path, &stop_positions);
        }
    }

    // ── Vehicles ──────────────────────────────────────────────────────────

    /// Put a vehicle on `route` at `start_distance`, travelling
    /// `speed_px_per_s`.  Fails if the route does not exist.
    pub fn add_vehicle(
        &mut self,
        route: RouteId,
        speed_px_per_s: f64,
        start_distance: f64,
    ) -> VehicleResult<VehicleId> {
        if route.index() >= self.routes.len() {
            return Err(VehicleError::UnknownRoute(route));
        }
        let id = VehicleId(self.vehicles.len() as u32);
        self.vehicles.push(Vehicle::new(route, speed_px_per_s, start_distance));
        self.rngs.push(VehicleRng::new(self.seed, id));
        Ok(id)
    }

    pub fn vehicle(&self, id: VehicleId) -> Option<&Vehicle> {
        self.vehicles.get(id.index())
    }

    pub fn vehicle_mut(&mut self, id: VehicleId) -> Option<&mut Vehicle> {
        self.vehicles.get_mut(id.index())
    }

    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    pub fn vehicle_count(&self) -> usize {
        self.vehicles.len()
    }

    // ── Simulation ────────────────────────────────────────────────────────

    /// Advance every vehicle by `dt` seconds, then run its stop check.
    ///
    /// Runs on the frame path: no allocation, no locking, vehicles in id
    /// order against route state that cannot change mid-pass.
    pub fn tick(&mut self, dt: f64) {
        let routes = &self.routes;
        for (vehicle, rng) in self.vehicles.iter_mut().zip(self.rngs.iter_mut()) {
            let Some(route) = routes.get(vehicle.route.index()) else {
                continue;
            };
            vehicle.advance(dt, route, rng);
            vehicle.check_stop(route, rng);
        }
    }

    /// Current world position of `id`, if it and its route exist.
    pub fn position(&self, id: VehicleId) -> Option<WorldPoint> {
        let vehicle = self.vehicles.get(id.index())?;
        let route = self.routes.get(vehicle.route.index())?;
        Some(vehicle.position(route))
    }
}
