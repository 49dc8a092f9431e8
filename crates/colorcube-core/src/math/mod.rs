//! Lattice math
//!
//! Trilinear interpolation split into its locate, gather and interpolate
//! steps so each can be tested and reused on its own.

pub mod interpolation;

pub use interpolation::{
    Corners, DomainPolicy, LocalPosition, gather, interpolate, locate, trilinear,
};
