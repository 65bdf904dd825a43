//! `transit-data` — where route and stop definitions come from.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                     |
//! |------------|--------------------------------------------------------------|
//! | [`source`] | `TransitDataSource` trait, `NetworkSnapshot`, `RouteSeed`    |
//! | [`sample`] | `SampleDataSource` — built-in Ljubljana network              |
//! | [`csv`]    | `CsvDataSource` + `Read`-generic loaders                     |
//! | [`error`]  | `DataError`, `DataResult<T>`                                 |
//!
//! Everything here speaks geographic coordinates.  Projecting a snapshot
//! into world pixels (and rebuilding routes from it) is the host's job, at
//! its data-reload boundary.

pub mod csv;
pub mod error;
pub mod sample;
pub mod source;

#[cfg(test)]
mod tests;

pub use csv::CsvDataSource;
pub use error::{DataError, DataResult};
pub use sample::SampleDataSource;
pub use source::{NetworkSnapshot, RouteSeed, TransitDataSource};
