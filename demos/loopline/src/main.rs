//! loopline — smallest runnable host for the rust_transit engine.
//!
//! Loads the built-in Ljubljana sample network, projects it to world pixels
//! (the projection is the host's job — the engine only sees planar points),
//! runs a three-vehicle fleet for a simulated minute, and prints positions,
//! an arrivals board, and tile-cache statistics.  Headless: rendering would
//! consume the same queries this demo prints.

use std::f64::consts::PI;

use anyhow::{Context, Result};

use transit_core::{GeoPoint, SimClock, Stop, WorldPoint};
use transit_data::{SampleDataSource, TransitDataSource};
use transit_route::StopRegistry;
use transit_tiles::{
    tile_indices, CompletionSender, TileCache, TileFetcher, TileImage, TileKey, TILE_SIZE,
};
use transit_vehicle::{arrivals_for_stop, Fleet};

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED: u64 = 42;
const ZOOM: u8 = 13;
const TICK_SECS: f64 = 0.5;
const TICKS: usize = 240; // 2 simulated minutes
const REPORT_EVERY: usize = 60;

const LOOP_SPEED_PX: f64 = 40.0;
const CROSSTOWN_SPEED_PX: f64 = 60.0;
const EXPRESS_SPEED_PX: f64 = 90.0;

// ── Projection (the "external collaborator") ──────────────────────────────────

/// Web-Mercator world pixels at a fixed zoom.
fn project(p: GeoPoint, zoom: u8) -> WorldPoint {
    let world_px = TILE_SIZE as f64 * (1u64 << zoom) as f64;
    let x = (p.lon + 180.0) / 360.0 * world_px;
    let lat_rad = p.lat.to_radians();
    let y = (1.0 - (lat_rad.tan() + 1.0 / lat_rad.cos()).ln() / PI) / 2.0 * world_px;
    WorldPoint::new(x, y)
}

// ── Offline tile fetcher ──────────────────────────────────────────────────────

/// Completes every fetch immediately with a solid tile — the demo stays
/// offline.  A real host would download and decode here, off-thread.
struct SolidFetcher;

impl TileFetcher for SolidFetcher {
    fn fetch(&self, key: TileKey, completions: CompletionSender) {
        completions.complete(key, TileImage::solid(TILE_SIZE, TILE_SIZE, [230, 228, 224, 255]));
    }
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    // ── Load and index the network ────────────────────────────────────────
    let snapshot = SampleDataSource.load().context("loading sample network")?;
    let registry = StopRegistry::build(snapshot.stops.clone());
    println!(
        "loaded {} stops, {} routes",
        registry.len(),
        snapshot.routes.len()
    );

    // ── Build the fleet ───────────────────────────────────────────────────
    let mut fleet = Fleet::new(SEED);
    for seed in &snapshot.routes {
        let stops: Vec<Stop> = seed
            .stop_names
            .iter()
            .filter_map(|name| registry.find_by_name(name).cloned())
            .collect();
        let stop_positions: Vec<WorldPoint> =
            stops.iter().map(|s| project(s.position, ZOOM)).collect();
        let path: Vec<WorldPoint> = seed.path.iter().map(|&p| project(p, ZOOM)).collect();

        let id = fleet.add_route(seed.code.clone(), seed.name.clone(), stops);
        fleet
            .rebuild_route(id, path, &stop_positions)
            .context("rebuilding route")?;
        let route = fleet.route(id).context("route just added")?;
        println!("  {} {:<18} {:>8.1} px", seed.code, seed.name, route.total_length());
    }

    let l1 = fleet.routes()[0].id;
    let l2 = fleet.routes()[1].id;
    let l3 = fleet.routes()[2].id;

    fleet.add_vehicle(l1, LOOP_SPEED_PX, 0.0)?;
    fleet.add_vehicle(l2, CROSSTOWN_SPEED_PX, 0.0)?;
    let express = fleet.add_vehicle(l3, EXPRESS_SPEED_PX, 0.0)?;

    // The express shuttles to its terminus and back instead of looping.
    let terminus = registry
        .find_by_name("BTC City")
        .context("terminus stop missing")?;
    let target = fleet
        .route(l3)
        .and_then(|r| r.stop_index().distance_for_stop(terminus.id))
        .context("terminus not on the express line")?;
    fleet
        .vehicle_mut(express)
        .context("express vehicle missing")?
        .set_target_distance(target);

    // ── Run ───────────────────────────────────────────────────────────────
    let mut clock = SimClock::new();
    for tick in 1..=TICKS {
        fleet.tick(TICK_SECS);
        clock.advance(TICK_SECS);

        if tick % REPORT_EVERY == 0 {
            println!("t = {clock}");
            for (i, vehicle) in fleet.vehicles().iter().enumerate() {
                let Some(route) = fleet.route(vehicle.route) else {
                    continue;
                };
                let pos = vehicle.position(route);
                let state = if vehicle.is_waiting() {
                    format!("waiting {:.1}s", vehicle.wait_remaining())
                } else {
                    "moving".to_string()
                };
                println!(
                    "  bus {i} [{}] d={:>7.1} at {pos} {state}",
                    route.code,
                    vehicle.distance_on_route(),
                );
            }
        }
    }

    // ── Arrivals board ────────────────────────────────────────────────────
    let station = registry
        .find_by_name("Zelezniska postaja")
        .context("station stop missing")?;
    println!("arrivals at {:?}:", station.name);
    for arrival in arrivals_for_stop(&fleet, station.id, 2) {
        let Some(route) = fleet.route(arrival.route) else {
            continue;
        };
        println!("  {} in {:>5.1} s", route.code, arrival.eta_secs);
    }

    // ── Background tiles ──────────────────────────────────────────────────
    let mut tiles = TileCache::new(SolidFetcher);
    let center = GeoPoint::new(46.0569, 14.5058); // central Ljubljana
    let (cx, cy) = tile_indices(center, ZOOM);
    for dy in -1..=1 {
        for dx in -1..=1 {
            tiles.get(ZOOM, cx + dx, cy + dy);
        }
    }
    // Second pass hits the now-completed fetches.
    let mut hits = 0;
    for dy in -1..=1 {
        for dx in -1..=1 {
            if tiles.get(ZOOM, cx + dx, cy + dy).width == TILE_SIZE {
                hits += 1;
            }
        }
    }
    println!(
        "tile cache: {} cached, {} in flight, {hits}/9 hits on second pass",
        tiles.len(),
        tiles.in_flight_count()
    );

    Ok(())
}
