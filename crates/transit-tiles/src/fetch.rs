//! The asynchronous fetch contract.
//!
//! Transport (URL template, headers, HTTP client) and image decoding are the
//! host's business; the cache only needs three promises from a fetcher:
//!
//! 1. `fetch` returns promptly — real I/O happens elsewhere (a thread, an
//!    async task, a job queue).
//! 2. Every fetch eventually posts exactly one [`FetchCompletion`] for its
//!    key — success or failure — or the key stays in flight forever.
//!    A fetcher that gives up posts [`FetchError::Cancelled`].
//! 3. Completions may be posted from any thread; the sender is `Send`.

use std::sync::mpsc;

use crate::{FetchError, TileImage, TileKey};

/// The terminal message of one fetch.
#[derive(Debug)]
pub struct FetchCompletion {
    pub key: TileKey,
    pub result: Result<TileImage, FetchError>,
}

/// Posts completions back to the owning cache.
///
/// Cloneable and `Send`; a dropped cache makes sends silently no-ops (the
/// fetch outlived its cache — nothing left to update).
#[derive(Clone)]
pub struct CompletionSender(mpsc::Sender<FetchCompletion>);

impl CompletionSender {
    pub(crate) fn new(tx: mpsc::Sender<FetchCompletion>) -> Self {
        Self(tx)
    }

    /// Post a successfully fetched and decoded tile.
    pub fn complete(&self, key: TileKey, image: TileImage) {
        let _ = self.0.send(FetchCompletion { key, result: Ok(image) });
    }

    /// Post a failure; the cache releases the key for retry.
    pub fn fail(&self, key: TileKey, error: FetchError) {
        let _ = self.0.send(FetchCompletion { key, result: Err(error) });
    }
}

/// Issues tile fetches.
///
/// Called by the cache with an already-normalized key, at most once per key
/// while that key is in flight.
pub trait TileFetcher {
    fn fetch(&self, key: TileKey, completions: CompletionSender);
}
