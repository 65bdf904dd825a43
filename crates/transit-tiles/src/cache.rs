//! The tile cache: dedup'd asynchronous fetch + bounded LRU.

use std::sync::mpsc;
use std::sync::Arc;

use crate::fetch::{CompletionSender, FetchCompletion};
use crate::{TileFetcher, TileHandle, TileImage, TileKey};

#[cfg(feature = "fx-hash")]
use rustc_hash::{FxHashMap as HashMap, FxHashSet as HashSet};
#[cfg(not(feature = "fx-hash"))]
use std::collections::{HashMap, HashSet};

/// Default entry bound.  At 256×256 RGBA that is ~64 MiB of pixels — plenty
/// for a couple of screens of slack at any zoom.
pub const DEFAULT_MAX_ENTRIES: usize = 256;

/// Key-value cache from normalized [`TileKey`]s to decoded tiles.
///
/// # Contract
///
/// [`get`](Self::get) is synchronous and never blocks: a hit refreshes the
/// key's LRU position and returns the tile; a miss issues at most one fetch
/// (the in-flight marker is the sole dedup mechanism) and returns the
/// placeholder.  Fetch completions are applied in
/// [`drain_completions`](Self::drain_completions), which `get` calls first —
/// all mutation happens under `&mut self`, never on a fetcher's thread.
///
/// # Invariants
///
/// - `len() <= max_entries` after any completed insertion.
/// - A key is in the access-order list iff it is in the mapping, exactly
///   once.
/// - An in-flight key is never fetched again until its completion arrives;
///   a failed completion releases it (no negative caching — every later
///   `get` is a retry).
///
/// The access-order list is scanned linearly on touch.  At the bounded
/// sizes used here that beats the bookkeeping of an intrusive list; swap in
/// one if `max_entries` ever grows by orders of magnitude.
pub struct TileCache<F: TileFetcher> {
    fetcher: F,
    entries: HashMap<TileKey, TileHandle>,
    /// LRU order: index 0 is the oldest, the back is the most recent.
    access_order: Vec<TileKey>,
    in_flight: HashSet<TileKey>,
    completions_tx: mpsc::Sender<FetchCompletion>,
    completions_rx: mpsc::Receiver<FetchCompletion>,
    placeholder: TileHandle,
    max_entries: usize,
}

impl<F: TileFetcher> TileCache<F> {
    pub fn new(fetcher: F) -> Self {
        Self::with_max_entries(fetcher, DEFAULT_MAX_ENTRIES)
    }

    /// `max_entries` is floored at 1 — a cache that can hold nothing would
    /// evict every tile the moment it landed.
    pub fn with_max_entries(fetcher: F, max_entries: usize) -> Self {
        let (completions_tx, completions_rx) = mpsc::channel();
        Self {
            fetcher,
            entries: HashMap::default(),
            access_order: Vec::new(),
            in_flight: HashSet::default(),
            completions_tx,
            completions_rx,
            placeholder: Arc::new(TileImage::placeholder()),
            max_entries: max_entries.max(1),
        }
    }

    // ── Lookup ────────────────────────────────────────────────────────────

    /// The tile at (zoom, x, y), or the placeholder while it loads.
    ///
    /// `x` wraps around the grid, `y` clamps onto it; the normalized key is
    /// what is cached, marked in flight, and fetched.
    pub fn get(&mut self, zoom: u8, x: i64, y: i64) -> TileHandle {
        let key = TileKey::normalized(zoom, x, y);
        self.drain_completions();

        if let Some(handle) = self.entries.get(&key).cloned() {
            self.touch(key);
            return handle;
        }

        if self.in_flight.insert(key) {
            self.fetcher
                .fetch(key, CompletionSender::new(self.completions_tx.clone()));
        }

        self.placeholder.clone()
    }

    /// Apply every completion that has arrived since the last drain.
    ///
    /// Returns the number of tiles inserted.  `get` calls this implicitly;
    /// hosts that render from cached state only may also call it once per
    /// frame to pick up finished fetches without a lookup.
    pub fn drain_completions(&mut self) -> usize {
        let mut inserted = 0;
        while let Ok(FetchCompletion { key, result }) = self.completions_rx.try_recv() {
            match result {
                Ok(image) => {
                    self.entries.insert(key, Arc::new(image));
                    self.touch(key);
                    self.evict_oldest();
                    inserted += 1;
                }
                Err(error) => {
                    log::warn!("tile fetch failed for {key}: {error}");
                }
            }
            // Released only now, after the mapping is settled: clearing
            // earlier would let a concurrent get duplicate the fetch.
            self.in_flight.remove(&key);
        }
        inserted
    }

    // ── Introspection ─────────────────────────────────────────────────────

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    /// Is the normalized (zoom, x, y) currently cached?
    pub fn contains(&self, zoom: u8, x: i64, y: i64) -> bool {
        self.entries.contains_key(&TileKey::normalized(zoom, x, y))
    }

    pub fn in_flight_count(&self) -> usize {
        self.in_flight.len()
    }

    /// The tile returned for not-yet-loaded keys.
    pub fn placeholder(&self) -> TileHandle {
        self.placeholder.clone()
    }

    /// Drop every cached tile and forget all LRU state.  In-flight fetches
    /// keep their markers; their completions will repopulate the cache.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.access_order.clear();
    }

    #[cfg(test)]
    pub(crate) fn access_order(&self) -> &[TileKey] {
        &self.access_order
    }

    // ── LRU bookkeeping ───────────────────────────────────────────────────

    /// Move `key` to the most-recently-used position, removing any prior
    /// occurrence first so each key appears at most once.
    fn touch(&mut self, key: TileKey) {
        if let Some(pos) = self.access_order.iter().position(|k| *k == key) {
            self.access_order.remove(pos);
        }
        self.access_order.push(key);
    }

    /// Evict least-recently-used entries until the bound holds again.
    fn evict_oldest(&mut self) {
        while self.entries.len() > self.max_entries && !self.access_order.is_empty() {
            let oldest = self.access_order.remove(0);
            self.entries.remove(&oldest);
            log::debug!("evicted tile {oldest}");
        }
    }
}
