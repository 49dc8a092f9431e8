//! 3D LUT transform
//!
//! [`Lut3dTransform`] owns a shared, immutable [`Lattice`] and applies it to
//! single colors. It holds no mutable state, so one instance can be used from
//! any number of threads at once.

use std::sync::Arc;

use tracing::debug;

use crate::color::Rgb;
use crate::lattice::Lattice;
use crate::math::{DomainPolicy, LocalPosition, locate, trilinear};

/// Options for transform creation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransformOptions {
    /// Handling of colors outside [0, 1]
    #[cfg_attr(feature = "serde", serde(default))]
    pub domain: DomainPolicy,
}

/// A color transform backed by a 3D lattice
#[derive(Debug, Clone)]
pub struct Lut3dTransform {
    lattice: Arc<Lattice>,
    options: TransformOptions,
}

impl Lut3dTransform {
    /// Create a transform with default options
    pub fn new(lattice: impl Into<Arc<Lattice>>) -> Self {
        Self::with_options(lattice, TransformOptions::default())
    }

    /// Create a transform with explicit options
    pub fn with_options(lattice: impl Into<Arc<Lattice>>, options: TransformOptions) -> Self {
        let lattice = lattice.into();
        debug!(
            size = lattice.size(),
            domain = ?options.domain,
            "lut3d transform created"
        );
        Self { lattice, options }
    }

    /// The backing lattice
    #[inline]
    pub fn lattice(&self) -> &Lattice {
        &self.lattice
    }

    /// Shared handle to the backing lattice
    #[inline]
    pub fn shared_lattice(&self) -> Arc<Lattice> {
        Arc::clone(&self.lattice)
    }

    /// Options this transform was created with
    #[inline]
    pub fn options(&self) -> TransformOptions {
        self.options
    }

    /// Cell and offset a color maps to
    #[inline]
    pub fn locate(&self, color: Rgb) -> LocalPosition {
        locate(color, self.lattice.size(), self.options.domain)
    }

    /// Transform a single color at full precision
    #[inline]
    pub fn transform(&self, color: Rgb) -> Rgb {
        trilinear(&self.lattice, color, self.options.domain)
    }

    /// Transform a packed RGBA8888 pixel
    ///
    /// Decoding and encoding happen only at the boundary; the lookup itself
    /// runs in `f32`. Output alpha is always opaque.
    #[inline]
    pub fn transform_rgba8888(&self, px: [u8; 4]) -> [u8; 4] {
        self.transform(Rgb::from_rgba8888(px)).to_rgba8888()
    }
}
