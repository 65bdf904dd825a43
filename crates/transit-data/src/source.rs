//! The data-source seam between stored network definitions and the engine.

use transit_core::GeoPoint;

use crate::DataResult;

/// One route as a data source describes it: a geographic shape plus the
/// names of the stops it serves, in travel order.
#[derive(Clone, Debug)]
pub struct RouteSeed {
    /// Short line code, e.g. `"L1"`.
    pub code: String,
    pub name: String,
    /// Geographic polyline, first to last point of travel.
    pub path: Vec<GeoPoint>,
    /// Names into the snapshot's stop list.
    pub stop_names: Vec<String>,
}

/// Everything a data source yields in one load: the stop set and the route
/// seeds referencing it by name.
///
/// The host turns this into live engine state: build a `StopRegistry` from
/// `stops`, project each seed's path, and rebuild the fleet's routes.
#[derive(Clone, Debug, Default)]
pub struct NetworkSnapshot {
    /// `(name, position)` pairs; registries assign ids in this order.
    pub stops: Vec<(String, GeoPoint)>,
    pub routes: Vec<RouteSeed>,
}

/// Loads a complete network snapshot.
///
/// Implementations are free to read files, talk to services, or return
/// built-in data; the engine only ever sees the snapshot.
pub trait TransitDataSource {
    fn load(&self) -> DataResult<NetworkSnapshot>;
}
