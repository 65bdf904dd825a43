//! Engine error type.
//!
//! Sub-crates may define their own error enums and convert them into
//! `TransitError` via `From` impls, or keep them separate and wrap
//! `TransitError` as one variant.  Both patterns are acceptable; prefer
//! whichever keeps error sites clean.

use thiserror::Error;

use crate::{RouteId, StopId};

/// The top-level error type for `transit-core` and a common base for
/// sub-crates.
#[derive(Debug, Error)]
pub enum TransitError {
    #[error("route {0} not found")]
    RouteNotFound(RouteId),

    #[error("stop {0} not found")]
    StopNotFound(StopId),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `transit-*` crates.
pub type TransitResult<T> = Result<T, TransitError>;
