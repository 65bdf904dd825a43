//! Decoded tile images and the shared handles the cache hands out.

use std::sync::Arc;

/// A decoded RGBA8 tile.
///
/// `pixels.len() == width * height * 4`.  Decoding happens behind the
/// [`TileFetcher`](crate::TileFetcher) boundary — by the time an image
/// reaches the cache it is ready to upload or blit.
#[derive(Clone, Debug, PartialEq)]
pub struct TileImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl TileImage {
    /// A solid-color image.
    pub fn solid(width: u32, height: u32, rgba: [u8; 4]) -> Self {
        let count = (width as usize) * (height as usize);
        let mut pixels = Vec::with_capacity(count * 4);
        for _ in 0..count {
            pixels.extend_from_slice(&rgba);
        }
        Self { width, height, pixels }
    }

    /// The 1×1 light-gray tile shown while the real one is loading.
    pub fn placeholder() -> Self {
        Self::solid(1, 1, [217, 217, 217, 255])
    }

    /// Size of the pixel buffer in bytes.
    #[inline]
    pub fn byte_len(&self) -> usize {
        self.pixels.len()
    }
}

/// Shared handle to a decoded tile.
///
/// The cache and every caller hold the same `Arc`; evicting a tile drops the
/// cache's reference, and the pixel memory is released as soon as the last
/// renderer handle goes away.
pub type TileHandle = Arc<TileImage>;
