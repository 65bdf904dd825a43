//! CSV network loader.
//!
//! # CSV formats
//!
//! Three files describe a network.  Stops:
//!
//! ```csv
//! name,lat,lon
//! Kongresni trg,46.05123,14.50330
//! Tivoli,46.05830,14.49490
//! ```
//!
//! Shape points, ordered by `seq` within a route (routes appear in order of
//! first occurrence):
//!
//! ```csv
//! route_code,route_name,seq,lat,lon
//! L1,Center Loop,0,46.05123,14.50330
//! L1,Center Loop,1,46.05627,14.50735
//! ```
//!
//! Route-stop links, in travel order:
//!
//! ```csv
//! route_code,stop_name
//! L1,Kongresni trg
//! ```
//!
//! Links are validated eagerly: a link naming an unknown stop or route is a
//! load error, not a silently dropped row.  (This is deliberately simpler
//! than GTFS — the engine only needs shapes, stops, and their wiring.)

use std::io::Read;
use std::path::PathBuf;

use serde::Deserialize;

use transit_core::GeoPoint;

use crate::{DataError, DataResult, NetworkSnapshot, RouteSeed, TransitDataSource};

// ── CSV records ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct StopRecord {
    name: String,
    lat: f64,
    lon: f64,
}

#[derive(Deserialize)]
struct ShapeRecord {
    route_code: String,
    route_name: String,
    seq: u32,
    lat: f64,
    lon: f64,
}

#[derive(Deserialize)]
struct RouteStopRecord {
    route_code: String,
    stop_name: String,
}

// ── File-based source ─────────────────────────────────────────────────────────

/// Loads a network from three CSV files on disk.
pub struct CsvDataSource {
    pub stops_path: PathBuf,
    pub shapes_path: PathBuf,
    pub route_stops_path: PathBuf,
}

impl TransitDataSource for CsvDataSource {
    fn load(&self) -> DataResult<NetworkSnapshot> {
        load_network_readers(
            std::fs::File::open(&self.stops_path)?,
            std::fs::File::open(&self.shapes_path)?,
            std::fs::File::open(&self.route_stops_path)?,
        )
    }
}

// ── Reader-based loader ───────────────────────────────────────────────────────

/// Like [`CsvDataSource`] but over any `Read` sources.
///
/// Useful for testing (pass `std::io::Cursor`s) or loading from network
/// streams.
pub fn load_network_readers<S: Read, H: Read, L: Read>(
    stops: S,
    shapes: H,
    route_stops: L,
) -> DataResult<NetworkSnapshot> {
    // ── Stops ─────────────────────────────────────────────────────────────
    let mut stop_defs: Vec<(String, GeoPoint)> = Vec::new();
    for result in ::csv::Reader::from_reader(stops).deserialize::<StopRecord>() {
        let row = result.map_err(|e| DataError::Parse(e.to_string()))?;
        stop_defs.push((row.name, GeoPoint::new(row.lat, row.lon)));
    }

    // ── Shapes, grouped by route in order of first occurrence ─────────────
    let mut routes: Vec<RouteSeed> = Vec::new();
    let mut pending: Vec<Vec<(u32, GeoPoint)>> = Vec::new();
    for result in ::csv::Reader::from_reader(shapes).deserialize::<ShapeRecord>() {
        let row = result.map_err(|e| DataError::Parse(e.to_string()))?;
        let idx = match routes.iter().position(|r| r.code == row.route_code) {
            Some(idx) => idx,
            None => {
                routes.push(RouteSeed {
                    code: row.route_code.clone(),
                    name: row.route_name.clone(),
                    path: Vec::new(),
                    stop_names: Vec::new(),
                });
                pending.push(Vec::new());
                routes.len() - 1
            }
        };
        pending[idx].push((row.seq, GeoPoint::new(row.lat, row.lon)));
    }
    for (seed, mut points) in routes.iter_mut().zip(pending) {
        points.sort_by_key(|(seq, _)| *seq);
        seed.path = points.into_iter().map(|(_, p)| p).collect();
    }

    // ── Route-stop links, validated against both sets ─────────────────────
    for result in ::csv::Reader::from_reader(route_stops).deserialize::<RouteStopRecord>() {
        let row = result.map_err(|e| DataError::Parse(e.to_string()))?;
        if !stop_defs.iter().any(|(name, _)| *name == row.stop_name) {
            return Err(DataError::UnknownStop(row.stop_name));
        }
        let seed = routes
            .iter_mut()
            .find(|r| r.code == row.route_code)
            .ok_or(DataError::UnknownRoute(row.route_code))?;
        seed.stop_names.push(row.stop_name);
    }

    Ok(NetworkSnapshot { stops: stop_defs, routes })
}
