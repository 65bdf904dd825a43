//! Built-in sample network: central Ljubljana.
//!
//! Three lines over six stops — enough to exercise looping, shared stops,
//! and an express pattern without any external data.

use transit_core::GeoPoint;

use crate::{DataResult, NetworkSnapshot, RouteSeed, TransitDataSource};

/// Always-available sample data source.
pub struct SampleDataSource;

impl TransitDataSource for SampleDataSource {
    fn load(&self) -> DataResult<NetworkSnapshot> {
        Ok(ljubljana())
    }
}

fn stop(name: &str, lat: f64, lon: f64) -> (String, GeoPoint) {
    (name.to_string(), GeoPoint::new(lat, lon))
}

fn ljubljana() -> NetworkSnapshot {
    let stops = vec![
        // Center
        stop("Kongresni trg", 46.05123, 14.50330),
        stop("Bavarski dvor", 46.05627, 14.50735),
        stop("Zelezniska postaja", 46.05897, 14.51062),
        // West
        stop("Tivoli", 46.05830, 14.49490),
        // East
        stop("UKC Ljubljana", 46.05640, 14.52330),
        // Far east
        stop("BTC City", 46.06560, 14.54620),
    ];

    let routes = vec![
        // L1: circle around the center; the shape closes on itself.
        RouteSeed {
            code: "L1".to_string(),
            name: "Center Loop".to_string(),
            path: vec![
                GeoPoint::new(46.05123, 14.50330), // Kongresni trg
                GeoPoint::new(46.05627, 14.50735), // Bavarski dvor
                GeoPoint::new(46.05897, 14.51062), // railway station
                GeoPoint::new(46.05640, 14.52330), // UKC
                GeoPoint::new(46.05123, 14.50330), // back to start
            ],
            stop_names: vec![
                "Kongresni trg".to_string(),
                "Bavarski dvor".to_string(),
                "Zelezniska postaja".to_string(),
                "UKC Ljubljana".to_string(),
            ],
        },
        // L2: west to east across the center.
        RouteSeed {
            code: "L2".to_string(),
            name: "West-East".to_string(),
            path: vec![
                GeoPoint::new(46.05830, 14.49490), // Tivoli
                GeoPoint::new(46.05627, 14.50735),
                GeoPoint::new(46.05897, 14.51062),
                GeoPoint::new(46.05640, 14.52330),
                GeoPoint::new(46.06560, 14.54620), // BTC
            ],
            stop_names: vec![
                "Tivoli".to_string(),
                "Bavarski dvor".to_string(),
                "Zelezniska postaja".to_string(),
                "UKC Ljubljana".to_string(),
                "BTC City".to_string(),
            ],
        },
        // L3: express with fewer stops.
        RouteSeed {
            code: "L3".to_string(),
            name: "Center-BTC Express".to_string(),
            path: vec![
                GeoPoint::new(46.05123, 14.50330),
                GeoPoint::new(46.05897, 14.51062),
                GeoPoint::new(46.06560, 14.54620),
            ],
            stop_names: vec![
                "Kongresni trg".to_string(),
                "Zelezniska postaja".to_string(),
                "BTC City".to_string(),
            ],
        },
    ];

    NetworkSnapshot { stops, routes }
}
