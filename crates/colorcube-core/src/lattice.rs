//! Lattice storage for 3D LUTs
//!
//! A lattice is an `N x N x N` grid of [`Rgb`] samples stored with x (red)
//! varying fastest, then y (green), then z (blue). This is the same order
//! `.cube` files list their samples in.

use tracing::debug;

use crate::color::Rgb;
use crate::{Error, Result};

/// Default resolution per axis
pub const DEFAULT_LATTICE_SIZE: usize = 17;

/// Smallest resolution that still has an interior cell
pub const MIN_LATTICE_SIZE: usize = 2;

/// Immutable 3D grid of color samples
#[derive(Debug, Clone, PartialEq)]
pub struct Lattice {
    size: usize,
    samples: Vec<Rgb>,
}

impl Lattice {
    /// Create a lattice from samples in x-fastest order
    ///
    /// Fails if `size < 2` or `samples.len() != size³`.
    pub fn new(size: usize, samples: Vec<Rgb>) -> Result<Self> {
        let expected = sample_count(size)?;
        if samples.len() != expected {
            return Err(Error::SampleCount {
                expected,
                actual: samples.len(),
            });
        }
        debug!(size, "lattice created");
        Ok(Self { size, samples })
    }

    /// Build a lattice by evaluating `f` at every integer coordinate
    pub fn from_fn<F>(size: usize, mut f: F) -> Result<Self>
    where
        F: FnMut(usize, usize, usize) -> Rgb,
    {
        let mut samples = Vec::with_capacity(sample_count(size)?);
        for z in 0..size {
            for y in 0..size {
                for x in 0..size {
                    samples.push(f(x, y, z));
                }
            }
        }
        Self::new(size, samples)
    }

    /// The lattice that maps every color to itself
    pub fn identity(size: usize) -> Result<Self> {
        let step = step(size)?;
        Self::from_fn(size, |x, y, z| {
            Rgb::new(x as f32 * step, y as f32 * step, z as f32 * step)
        })
    }

    /// A lattice holding the same color everywhere
    pub fn constant(size: usize, color: Rgb) -> Result<Self> {
        Self::new(size, vec![color; sample_count(size)?])
    }

    /// Create a lattice from flat `r, g, b` triples in x-fastest order
    pub fn from_flat(size: usize, values: &[f32]) -> Result<Self> {
        let expected = sample_count(size)? * 3;
        if values.len() != expected {
            return Err(Error::BufferSize {
                expected,
                actual: values.len(),
            });
        }
        Self::new(size, bytemuck::cast_slice::<f32, Rgb>(values).to_vec())
    }

    /// Flat `r, g, b` view of the samples
    pub fn as_flat(&self) -> &[f32] {
        bytemuck::cast_slice(&self.samples)
    }

    /// Points per axis
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Samples in x-fastest order
    #[inline]
    pub fn samples(&self) -> &[Rgb] {
        &self.samples
    }

    /// Linear index of `(x, y, z)`
    #[inline]
    pub fn index(&self, x: usize, y: usize, z: usize) -> usize {
        x + self.size * (y + self.size * z)
    }

    /// Sample at `(x, y, z)`
    ///
    /// Coordinates must be `< size`; debug builds assert it, release builds
    /// only panic if the linear index runs past the end.
    #[inline]
    pub fn get(&self, x: usize, y: usize, z: usize) -> Rgb {
        debug_assert!(x < self.size && y < self.size && z < self.size);
        self.samples[self.index(x, y, z)]
    }

    /// The input color that lands exactly on `(x, y, z)`
    #[inline]
    pub fn lattice_point(&self, x: usize, y: usize, z: usize) -> Rgb {
        let step = 1.0 / (self.size - 1) as f32;
        Rgb::new(x as f32 * step, y as f32 * step, z as f32 * step)
    }

    /// True if every sample equals its own lattice point
    pub fn is_identity(&self) -> bool {
        let step = 1.0 / (self.size - 1) as f32;
        self.samples.iter().enumerate().all(|(i, s)| {
            let x = i % self.size;
            let y = (i / self.size) % self.size;
            let z = i / (self.size * self.size);
            *s == Rgb::new(x as f32 * step, y as f32 * step, z as f32 * step)
        })
    }

    /// Blend two lattices sample by sample
    pub fn mix(a: &Self, b: &Self, t: f32) -> Result<Self> {
        if a.size != b.size {
            return Err(Error::LatticeSizeMismatch {
                left: a.size,
                right: b.size,
            });
        }
        let samples = a
            .samples
            .iter()
            .zip(&b.samples)
            .map(|(&x, &y)| Rgb::mix(x, y, t))
            .collect();
        Ok(Self {
            size: a.size,
            samples,
        })
    }

    /// Replace every sample with `f(sample)`
    pub fn map<F>(&self, f: F) -> Self
    where
        F: Fn(Rgb) -> Rgb,
    {
        Self {
            size: self.size,
            samples: self.samples.iter().map(|&s| f(s)).collect(),
        }
    }
}

fn sample_count(size: usize) -> Result<usize> {
    if size < MIN_LATTICE_SIZE {
        return Err(Error::DegenerateLattice { size });
    }
    size.checked_mul(size)
        .and_then(|sq| sq.checked_mul(size))
        .ok_or(Error::DegenerateLattice { size })
}

fn step(size: usize) -> Result<f32> {
    if size < MIN_LATTICE_SIZE {
        return Err(Error::DegenerateLattice { size });
    }
    Ok(1.0 / (size - 1) as f32)
}
