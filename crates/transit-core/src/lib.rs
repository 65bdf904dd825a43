//! `transit-core` — foundational types for the `rust_transit` engine.
//!
//! This crate is a dependency of every other `transit-*` crate.  It
//! intentionally has no `transit-*` dependencies and minimal external ones
//! (only `rand` and `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `RouteId`, `StopId`, `VehicleId`                      |
//! | [`geo`]         | `GeoPoint` (lat/lon), `WorldPoint` (projected px)     |
//! | [`stop`]        | `Stop` — a named point of interest                    |
//! | [`clock`]       | `SimClock` — elapsed-seconds simulation clock         |
//! | [`rng`]         | `VehicleRng` (per-vehicle deterministic RNG)          |
//! | [`error`]       | `TransitError`, `TransitResult`                       |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod clock;
pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod stop;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use clock::SimClock;
pub use error::{TransitError, TransitResult};
pub use geo::{GeoPoint, WorldPoint};
pub use ids::{RouteId, StopId, VehicleId};
pub use rng::VehicleRng;
pub use stop::Stop;
