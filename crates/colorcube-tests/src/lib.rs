//! # colorcube-tests
//!
//! Property and integration testing for colorcube.
//!
//! This crate provides:
//! - Seeded color and lattice generators
//! - Error statistics for comparing color buffers
//!
//! ## Test Categories
//!
//! 1. **Algebra**: associativity and unit laws of lattice composition
//! 2. **Cube Files**: `.cube` write / parse round-trips
//! 3. **Batch**: parallel and sequential application agree
//! 4. **Options**: serialized transform options

pub mod accuracy;
pub mod patterns;

pub use accuracy::{ErrorStats, compare_colors};
pub use patterns::{
    ColorPattern, affine_lattice, generate_colors, generate_rgba8, graded_lattice, random_lattice,
};
