//! `transit-tiles` — remote map-tile cache.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                     |
//! |------------|--------------------------------------------------------------|
//! | [`key`]    | `TileKey` — normalized (zoom, x, y) + tile-grid helpers      |
//! | [`image`]  | `TileImage`, `TileHandle` — decoded RGBA tiles               |
//! | [`fetch`]  | `TileFetcher` trait, completion channel plumbing             |
//! | [`cache`]  | `TileCache` — dedup'd async fetch + bounded LRU              |
//! | [`error`]  | `FetchError`                                                 |
//!
//! # Ownership model
//!
//! `TileCache::get` never blocks: it returns the cached tile or a
//! placeholder, and at most one fetch is ever outstanding per normalized
//! key.  Fetchers may complete from any thread; completions travel over a
//! channel that only the cache's owner drains (`&mut self`), so the mapping
//! and the LRU order have exactly one legal mutator context.
//!
//! # Feature flags
//!
//! | Flag      | Effect                                                      |
//! |-----------|-------------------------------------------------------------|
//! | `fx-hash` | FxHash maps for the tile mapping and in-flight set.         |

pub mod cache;
pub mod error;
pub mod fetch;
pub mod image;
pub mod key;


pub use cache::{TileCache, DEFAULT_MAX_ENTRIES};
pub use error::FetchError;
pub use fetch::{CompletionSender, FetchCompletion, TileFetcher};
pub use image::{TileHandle, TileImage};
pub use key::{lat_to_tile_y, lon_to_tile_x, tile_indices, TileKey, MAX_ZOOM, TILE_SIZE};
