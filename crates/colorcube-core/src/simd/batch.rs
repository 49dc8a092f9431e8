//! SIMD-dispatched batch LUT application
//!
//! These functions process entire buffers of pixels. Buffer sizes are
//! checked up front; the kernels themselves never fail.

use multiversion::multiversion;

use crate::color::Rgb;
use crate::transform::Lut3dTransform;
use crate::{Error, Result};

/// Bytes per packed RGBA8888 pixel
pub const RGBA8_CHANNELS: usize = 4;

/// Transform a buffer of float colors
///
/// `dst` must be at least as long as `src`.
pub fn transform_rgb_batch(lut: &Lut3dTransform, src: &[Rgb], dst: &mut [Rgb]) -> Result<()> {
    if dst.len() < src.len() {
        return Err(Error::BufferSize {
            expected: src.len(),
            actual: dst.len(),
        });
    }
    transform_rgb_kernel(lut, src, dst);
    Ok(())
}

/// Transform a buffer of packed RGBA8888 pixels
///
/// Alpha is written as opaque. `src` must be a whole number of pixels and
/// `dst` at least as long as `src`.
pub fn transform_rgba8_batch(lut: &Lut3dTransform, src: &[u8], dst: &mut [u8]) -> Result<()> {
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
    transform_rgba8_kernel(lut, src, dst);
    Ok(())
}

/// Transform float colors in place
pub fn transform_rgb_in_place(lut: &Lut3dTransform, colors: &mut [Rgb]) {
    transform_rgb_in_place_kernel(lut, colors);
}

#[multiversion(targets("x86_64+avx2", "x86_64+sse4.1", "aarch64+neon",))]
fn transform_rgb_kernel(lut: &Lut3dTransform, src: &[Rgb], dst: &mut [Rgb]) {
    for (inp, out) in src.iter().zip(dst.iter_mut()) {
        *out = lut.transform(*inp);
    }
}

#[multiversion(targets("x86_64+avx2", "x86_64+sse4.1", "aarch64+neon",))]
fn transform_rgb_in_place_kernel(lut: &Lut3dTransform, colors: &mut [Rgb]) {
    for c in colors.iter_mut() {
        *c = lut.transform(*c);
    }
}

#[multiversion(targets("x86_64+avx2", "x86_64+sse4.1", "aarch64+neon",))]
fn transform_rgba8_kernel(lut: &Lut3dTransform, src: &[u8], dst: &mut [u8]) {
    for (src_px, dst_px) in src
        .chunks_exact(RGBA8_CHANNELS)
        .zip(dst.chunks_exact_mut(RGBA8_CHANNELS))
    {
        let px = [src_px[0], src_px[1], src_px[2], src_px[3]];
        dst_px.copy_from_slice(&lut.transform_rgba8888(px));
    }
}

/// Decode packed RGBA8888 pixels to float colors
pub fn rgba8_to_rgb_batch(src: &[u8], dst: &mut [Rgb]) -> Result<()> {
    if src.len() % RGBA8_CHANNELS != 0 {
        return Err(Error::BufferSize {
            expected: src.len() - src.len() % RGBA8_CHANNELS,
            actual: src.len(),
        });
    }
    let pixels = src.len() / RGBA8_CHANNELS;
    if dst.len() < pixels {
        return Err(Error::BufferSize {
            expected: pixels,
            actual: dst.len(),
        });
    }
    for (px, out) in src.chunks_exact(RGBA8_CHANNELS).zip(dst.iter_mut()) {
        *out = Rgb::from_u8(px[0], px[1], px[2]);
    }
    Ok(())
}

/// Encode float colors to packed RGBA8888 with opaque alpha
pub fn rgb_to_rgba8_batch(src: &[Rgb], dst: &mut [u8]) -> Result<()> {
    let expected = src.len() * RGBA8_CHANNELS;
    if dst.len() < expected {
        return Err(Error::BufferSize {
            expected,
            actual: dst.len(),
        });
    }
    for (c, px) in src.iter().zip(dst.chunks_exact_mut(RGBA8_CHANNELS)) {
        px.copy_from_slice(&c.to_rgba8888());
    }
    Ok(())
}
