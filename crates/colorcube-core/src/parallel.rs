//! Parallel LUT application over large buffers
//!
//! Every pixel is independent, so buffers are split into fixed-size chunks
//! and handed to the rayon pool. Output is identical to the sequential
//! batch functions regardless of chunking.

use rayon::prelude::*;
use tracing::trace;

use crate::color::Rgb;
use crate::simd::{self, RGBA8_CHANNELS};
use crate::transform::Lut3dTransform;
use crate::{Error, Result};

/// Default colors per parallel task (17³ / 17)
pub const DEFAULT_PARALLEL_CHUNK: usize = 17 * 17;

/// Transform float colors on the rayon pool
///
/// A `chunk` of 0 is treated as 1.
pub fn par_transform_rgb(lut: &Lut3dTransform, colors: &[Rgb], chunk: usize) -> Vec<Rgb> {
    let chunk = chunk.max(1);
    trace!(len = colors.len(), chunk, "parallel rgb transform");
    let mut out = colors.to_vec();
    out.par_chunks_mut(chunk)
        .for_each(|part| simd::transform_rgb_in_place(lut, part));
    out
}

/// Transform packed RGBA8888 pixels on the rayon pool
pub fn par_transform_rgba8(lut: &Lut3dTransform, src: &[u8], dst: &mut [u8]) -> Result<()> {
    // validate the whole buffer once, then split on pixel boundaries
    if src.len() % RGBA8_CHANNELS != 0 {
        return Err(Error::BufferSize {
            expected: src.len() - src.len() % RGBA8_CHANNELS,
            actual: src.len(),
        });
    }
    if dst.len() < src.len() {
        return Err(Error::BufferSize {
            expected: src.len(),
            actual: dst.len(),
        });
    }
    let bytes = DEFAULT_PARALLEL_CHUNK * RGBA8_CHANNELS;
    trace!(pixels = src.len() / RGBA8_CHANNELS, "parallel rgba8 transform");
    src.par_chunks(bytes)
        .zip(dst[..src.len()].par_chunks_mut(bytes))
        .try_for_each(|(s, d)| simd::transform_rgba8_batch(lut, s, d))
}
