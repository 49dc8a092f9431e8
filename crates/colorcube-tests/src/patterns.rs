//! Test pattern generation
//!
//! Deterministic colors and lattices for property tests. Every random
//! generator takes a seed so failures can be replayed.

use colorcube_core::{Lattice, Rgb};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Test pattern types
#[derive(Debug, Clone, Copy)]
pub enum ColorPattern {
    /// Gray ramp from black to white
    Grayscale,
    /// The 8 corners of the unit cube
    CubeCorners,
    /// Uniform random colors inside the unit cube
    Random(u64),
    /// Random colors reaching up to 0.5 outside the unit cube
    OutOfRange(u64),
    /// Skin tone samples
    SkinTones,
}

/// Generate `count` float colors
pub fn generate_colors(pattern: ColorPattern, count: usize) -> Vec<Rgb> {
    match pattern {
        ColorPattern::Grayscale => {
            let last = count.saturating_sub(1).max(1) as f32;
            (0..count).map(|i| Rgb::splat(i as f32 / last)).collect()
        }
        ColorPattern::CubeCorners => (0..count)
            .map(|i| {
                let bits = i % 8;
                Rgb::new(
                    (bits & 1) as f32,
                    ((bits >> 1) & 1) as f32,
                    ((bits >> 2) & 1) as f32,
                )
            })
            .collect(),
        ColorPattern::Random(seed) => random_colors(seed, count, 0.0..=1.0),
        ColorPattern::OutOfRange(seed) => random_colors(seed, count, -0.5..=1.5),
        ColorPattern::SkinTones => {
            let tones: [[u8; 3]; 6] = [
                [255, 224, 189],
                [241, 194, 125],
                [224, 172, 105],
                [198, 134, 66],
                [141, 85, 36],
                [89, 47, 42],
            ];
            (0..count).map(|i| Rgb::from(tones[i % 6])).collect()
        }
    }
}

fn random_colors(seed: u64, count: usize, range: std::ops::RangeInclusive<f32>) -> Vec<Rgb> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            Rgb::new(
                rng.gen_range(range.clone()),
                rng.gen_range(range.clone()),
                rng.gen_range(range.clone()),
            )
        })
        .collect()
}

/// Generate `count` random RGBA8888 pixels with random alpha
pub fn generate_rgba8(seed: u64, count: usize) -> Vec<u8> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut data = vec![0u8; count * 4];
    rng.fill_bytes(&mut data);
    data
}

/// A lattice with independent random samples in [0, 1]
///
/// Far from smooth, which makes it a good stress case for exact
/// algebraic laws.
pub fn random_lattice(seed: u64, size: usize) -> Lattice {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    Lattice::from_fn(size, |_, _, _| {
        Rgb::new(
            rng.gen_range(0.0..=1.0),
            rng.gen_range(0.0..=1.0),
            rng.gen_range(0.0..=1.0),
        )
    })
    .expect("test lattice size must be at least 2")
}

/// A smooth grading lattice: per-channel gain and gamma, then a channel swap
///
/// `seed` picks the gains, gammas and permutation. These are the kind of
/// looks a photo pipeline stacks.
pub fn graded_lattice(seed: u64, size: usize) -> Lattice {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let gain = [
        rng.gen_range(0.7..=1.0f32),
        rng.gen_range(0.7..=1.0f32),
        rng.gen_range(0.7..=1.0f32),
    ];
    let gamma = [
        rng.gen_range(0.8..=1.25f32),
        rng.gen_range(0.8..=1.25f32),
        rng.gen_range(0.8..=1.25f32),
    ];
    let mut order = [0usize, 1, 2];
    order.shuffle(&mut rng);

    Lattice::identity(size)
        .expect("test lattice size must be at least 2")
        .map(|c| {
            let ch = c.to_array();
            Rgb::from_array([0, 1, 2].map(|i| gain[i] * ch[order[i]].powf(gamma[i])))
        })
}

/// An affine lattice: channel swap, then per-channel gain and offset
///
/// Trilinear interpolation reproduces affine maps exactly, so chains of
/// these must compose without any interpolation error. Samples stay inside
/// the unit cube.
pub fn affine_lattice(seed: u64, size: usize) -> Lattice {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut order = [0usize, 1, 2];
    order.shuffle(&mut rng);
    let gain: [f32; 3] = [0, 1, 2].map(|_| {
        let g = rng.gen_range(0.5..=1.0f32);
        if rng.gen_bool(0.5) { -g } else { g }
    });
    let offset: [f32; 3] = [0, 1, 2].map(|i| {
        if gain[i] < 0.0 {
            rng.gen_range(-gain[i]..=1.0)
        } else {
            rng.gen_range(0.0..=1.0 - gain[i])
        }
    });

    Lattice::identity(size)
        .expect("test lattice size must be at least 2")
        .map(|c| {
            let ch = c.to_array();
            Rgb::from_array([0, 1, 2].map(|i| gain[i] * ch[order[i]] + offset[i]))
        })
}

/// Standard lattice sizes
pub mod sizes {
    pub const MINIMAL: usize = 2;
    pub const SMALL: usize = 9;
    pub const DEFAULT: usize = colorcube_core::DEFAULT_LATTICE_SIZE;
    pub const LARGE: usize = 33;
}
