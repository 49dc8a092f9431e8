//! # colorcube - full-precision 3D LUT color transforms
//!
//! Applies a 3D lookup table to colors with trilinear interpolation, entirely
//! in `f32`. Typical 8-bit LUT appliers quantize both the table and the image;
//! here only the optional packed RGBA8888 boundary is 8-bit, so lattices can be
//! composed repeatedly (treating each as a function on colors) without the
//! error piling up.
//!
//! ## Quick Start
//!
//! ```
//! use colorcube_core::{Lattice, Lut3dTransform, Rgb};
//!
//! // 17³ lattice that inverts every channel
//! let lattice = Lattice::identity(17).unwrap().map(|c| Rgb::WHITE - c);
//! let lut = Lut3dTransform::new(lattice);
//!
//! let out = lut.transform(Rgb::new(0.25, 0.5, 1.0));
//! assert!(out.approx_eq(&Rgb::new(0.75, 0.5, 0.0), 1e-6));
//!
//! // Packed pixels round-trip through the float path
//! assert_eq!(lut.transform_rgba8888([0, 0, 255, 0]), [255, 255, 0, 255]);
//! ```
//!
//! ## Layout
//!
//! - [`math`]: locate / gather / interpolate
//! - [`transform`]: [`Lut3dTransform`] and its options
//! - [`algebra`]: composing lattices as functions
//! - [`cube`]: `.cube` file I/O
//! - [`simd`], [`parallel`]: whole-buffer application

pub mod algebra;
pub mod color;
pub mod cube;
pub mod error;
pub mod lattice;
pub mod math;
pub mod parallel;
pub mod simd;
pub mod transform;

pub use algebra::{ColorFunc, FnColorFunc, Identity, compose, compose_all, compose_lattices};
pub use color::Rgb;
pub use cube::{CubeFile, load_cube, parse_cube, parse_cube_str, save_cube, write_cube};
pub use error::{Error, Result};
pub use lattice::{DEFAULT_LATTICE_SIZE, Lattice};
pub use math::{DomainPolicy, LocalPosition};
pub use transform::{Lut3dTransform, TransformOptions};

/// Version of colorcube
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_matches_manifest() {
        assert_eq!(VERSION, env!("CARGO_PKG_VERSION"));
        assert!(VERSION.split('.').all(|part| part.parse::<u32>().is_ok()));
    }
}
