//! Unit tests for transit-data.

use std::io::Cursor;

use crate::csv::load_network_readers;
use crate::{DataError, SampleDataSource, TransitDataSource};

// ── Sample data ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod sample {
    use super::*;

    #[test]
    fn loads_three_routes_over_six_stops() {
        let net = SampleDataSource.load().unwrap();
        assert_eq!(net.stops.len(), 6);
        assert_eq!(net.routes.len(), 3);

        let codes: Vec<&str> = net.routes.iter().map(|r| r.code.as_str()).collect();
        assert_eq!(codes, vec!["L1", "L2", "L3"]);
    }

    #[test]
    fn center_loop_shape_closes() {
        let net = SampleDataSource.load().unwrap();
        let l1 = &net.routes[0];
        assert_eq!(l1.path.first(), l1.path.last());
        assert_eq!(l1.stop_names.len(), 4);
    }

    #[test]
    fn every_link_resolves_to_a_stop() {
        let net = SampleDataSource.load().unwrap();
        for route in &net.routes {
            for name in &route.stop_names {
                assert!(
                    net.stops.iter().any(|(n, _)| n == name),
                    "{} names unknown stop {name:?}",
                    route.code
                );
            }
        }
    }
}

// ── CSV loader ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod csv_loader {
    use super::*;

    const STOPS: &str = "\
name,lat,lon
Kongresni trg,46.05123,14.50330
Tivoli,46.05830,14.49490
";

    const SHAPES: &str = "\
route_code,route_name,seq,lat,lon
L1,Center Loop,0,46.05123,14.50330
L1,Center Loop,1,46.05627,14.50735
L2,West Line,0,46.05830,14.49490
L1,Center Loop,2,46.05123,14.50330
";

    const LINKS: &str = "\
route_code,stop_name
L1,Kongresni trg
L2,Tivoli
";

    fn load(stops: &str, shapes: &str, links: &str) -> crate::DataResult<crate::NetworkSnapshot> {
        load_network_readers(Cursor::new(stops), Cursor::new(shapes), Cursor::new(links))
    }

    #[test]
    fn loads_and_groups_shapes_by_route() {
        let net = load(STOPS, SHAPES, LINKS).unwrap();
        assert_eq!(net.stops.len(), 2);
        assert_eq!(net.routes.len(), 2);

        // L1's rows were interleaved with L2's but stay one route,
        // ordered by seq.
        let l1 = &net.routes[0];
        assert_eq!(l1.code, "L1");
        assert_eq!(l1.path.len(), 3);
        assert_eq!(l1.path.first(), l1.path.last());
        assert_eq!(l1.stop_names, vec!["Kongresni trg"]);

        let l2 = &net.routes[1];
        assert_eq!(l2.code, "L2");
        assert_eq!(l2.path.len(), 1);
    }

    #[test]
    fn out_of_order_seq_is_sorted() {
        let shapes = "\
route_code,route_name,seq,lat,lon
L1,Line,2,0.0,2.0
L1,Line,0,0.0,0.0
L1,Line,1,0.0,1.0
";
        let net = load(STOPS, shapes, "route_code,stop_name\n").unwrap();
        let lons: Vec<f64> = net.routes[0].path.iter().map(|p| p.lon).collect();
        assert_eq!(lons, vec![0.0, 1.0, 2.0]);
    }

    #[test]
    fn unknown_stop_link_errors() {
        let links = "route_code,stop_name\nL1,Nowhere\n";
        let result = load(STOPS, SHAPES, links);
        assert!(matches!(result, Err(DataError::UnknownStop(name)) if name == "Nowhere"));
    }

    #[test]
    fn unknown_route_link_errors() {
        let links = "route_code,stop_name\nL9,Tivoli\n";
        let result = load(STOPS, SHAPES, links);
        assert!(matches!(result, Err(DataError::UnknownRoute(code)) if code == "L9"));
    }

    #[test]
    fn malformed_number_is_a_parse_error() {
        let stops = "name,lat,lon\nBroken,forty-six,14.5\n";
        let result = load(stops, SHAPES, LINKS);
        assert!(matches!(result, Err(DataError::Parse(_))));
    }

    #[test]
    fn empty_inputs_load_empty_snapshot() {
        let net = load(
            "name,lat,lon\n",
            "route_code,route_name,seq,lat,lon\n",
            "route_code,stop_name\n",
        )
        .unwrap();
        assert!(net.stops.is_empty());
        assert!(net.routes.is_empty());
    }
}
