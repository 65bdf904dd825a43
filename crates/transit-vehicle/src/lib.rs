//! `transit-vehicle` — vehicle motion, dwelling, and the fleet tick loop.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                      |
//! |--------------|---------------------------------------------------------------|
//! | [`vehicle`]  | `Vehicle` — distance cursor, travel mode, dwell state machine |
//! | [`dwell`]    | `DwellRange`, `DwellSampler` — randomized dwell durations     |
//! | [`fleet`]    | `Fleet` — routes + vehicles + per-vehicle RNGs, `tick(dt)`    |
//! | [`arrivals`] | `Arrival`, `arrivals_for_stop` — ETA board for one stop       |
//! | [`error`]    | `VehicleError`, `VehicleResult<T>`                            |
//!
//! # Tick model
//!
//! The host calls [`Fleet::tick`] once per frame with the elapsed seconds.
//! Each vehicle advances its distance cursor, then checks the route's stop
//! index for a dwell trigger.  The whole pass is synchronous and
//! allocation-free; route geometry never changes under it (rebuilds go
//! through `&mut Fleet` at data-reload boundaries only).
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                     |
//! |------------|------------------------------------------------------------|
//! | `parallel` | `Fleet::rebuild_all` re-projects routes on Rayon's pool.   |

pub mod arrivals;
pub mod dwell;
pub mod error;
pub mod fleet;
pub mod vehicle;

#[cfg(test)]
mod tests;

pub use arrivals::{arrivals_for_stop, Arrival};
pub use dwell::{DwellRange, DwellSampler};
pub use error::{VehicleError, VehicleResult};
pub use fleet::Fleet;
pub use vehicle::{DwellState, TravelMode, Vehicle};
