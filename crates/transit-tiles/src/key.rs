//! Normalized tile addressing.
//!
//! Slippy-map tile grids wrap horizontally (crossing the antimeridian walks
//! back into the grid) but not vertically (there is nothing above y = 0).
//! Every key entering the cache is normalized accordingly first, so two
//! requests for the same logical tile — say x = −1 and x = 2^zoom − 1 — hit
//! the same cache slot and the same in-flight marker.

use transit_core::GeoPoint;

/// Tile edge length in pixels.
pub const TILE_SIZE: u32 = 256;

/// Zoom levels above this are clamped; 2^30 tiles per axis is already far
/// beyond any slippy-map tile server.
pub const MAX_ZOOM: u8 = 30;

/// A normalized tile address.  Construct via [`TileKey::normalized`].
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct TileKey {
    pub zoom: u8,
    pub x: u32,
    pub y: u32,
}

impl TileKey {
    /// Wrap `x` into the grid and clamp `y` onto it.
    pub fn normalized(zoom: u8, x: i64, y: i64) -> TileKey {
        let zoom = zoom.min(MAX_ZOOM);
        let n = 1i64 << zoom;
        TileKey {
            zoom,
            x: x.rem_euclid(n) as u32,
            y: y.clamp(0, n - 1) as u32,
        }
    }

    /// Number of tiles along one axis at `zoom`.
    #[inline]
    pub fn tiles_per_axis(zoom: u8) -> u32 {
        1u32 << zoom.min(MAX_ZOOM)
    }
}

impl std::fmt::Display for TileKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}/{}", self.zoom, self.x, self.y)
    }
}

// ── Geographic → tile-grid helpers ────────────────────────────────────────────

/// Tile column containing `lon` at `zoom`.  May fall outside the grid for
/// out-of-range longitudes; pass the result through [`TileKey::normalized`].
pub fn lon_to_tile_x(lon: f64, zoom: u8) -> i64 {
    let n = (1u64 << zoom.min(MAX_ZOOM)) as f64;
    ((lon + 180.0) / 360.0 * n).floor() as i64
}

/// Tile row containing `lat` at `zoom` (Web-Mercator).
pub fn lat_to_tile_y(lat: f64, zoom: u8) -> i64 {
    let n = (1u64 << zoom.min(MAX_ZOOM)) as f64;
    let lat_rad = lat.to_radians();
    ((1.0 - (lat_rad.tan() + 1.0 / lat_rad.cos()).ln() / std::f64::consts::PI) / 2.0 * n).floor()
        as i64
}

/// Raw (column, row) of the tile containing `pos` at `zoom`.
pub fn tile_indices(pos: GeoPoint, zoom: u8) -> (i64, i64) {
    (lon_to_tile_x(pos.lon, zoom), lat_to_tile_y(pos.lat, zoom))
}
