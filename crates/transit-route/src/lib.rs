//! `transit-route` — route geometry, stop projection, and the stop registry.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`geometry`]  | `PathGeometry` — distance-parameterized polyline          |
//! | [`stop_index`]| `StopProjectionIndex` — stops ordered by distance-on-route|
//! | [`route`]     | `Route` — geometry + stop snapshot + index as one value   |
//! | [`registry`]  | `StopRegistry` — stop set with an R-tree spatial index    |
//!
//! # Rebuild discipline
//!
//! A route's geometry and its stop index are only ever replaced together,
//! through [`Route::rebuild`] — an index can never outlive the polyline it
//! was projected onto.  Rebuilds are O(stops × segments) and belong at data
//! reload boundaries, never inside the per-tick path.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod geometry;
pub mod registry;
pub mod route;
pub mod stop_index;


pub use geometry::PathGeometry;
pub use registry::StopRegistry;
pub use route::Route;
pub use stop_index::{StopOnRoute, StopProjectionIndex};
