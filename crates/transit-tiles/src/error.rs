//! Tile-fetch error type.

use thiserror::Error;

/// Why a tile fetch produced no image.
///
/// Every variant is recovered locally by the cache: the key's in-flight
/// marker is released and the next `get` retries.  Nothing here reaches the
/// simulation layer.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP status {0}")]
    Status(u16),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("decode error: {0}")]
    Decode(String),

    /// The fetcher abandoned the request (shutdown, timeout it imposed
    /// itself, …).  Posting this releases the key for future retries.
    #[error("fetch cancelled")]
    Cancelled,
}
