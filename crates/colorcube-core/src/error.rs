//! Error types for colorcube

use thiserror::Error;

/// Result type for colorcube operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in colorcube operations
///
/// Only construction, parsing and buffer validation fail. Applying a
/// transform to a color is total.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Lattice has no interior cell to interpolate in
    #[error("Degenerate lattice: size {size} (need at least 2 points per axis)")]
    DegenerateLattice { size: usize },

    /// Sample count does not match size³
    #[error("Sample count mismatch: expected {expected}, got {actual}")]
    SampleCount { expected: usize, actual: usize },

    /// Two lattices that must share a size do not
    #[error("Lattice size mismatch: {left} vs {right}")]
    LatticeSizeMismatch { left: usize, right: usize },

    /// Buffer size mismatch
    #[error("Buffer size mismatch: expected {expected}, got {actual}")]
    BufferSize { expected: usize, actual: usize },

    /// Malformed `.cube` content
    #[error("Cube parse error at line {line}: {message}")]
    CubeParse { line: usize, message: String },

    /// Sample with no finite `.cube` representation
    #[error("Non-finite sample at index {index}")]
    NonFiniteSample { index: usize },

    /// Valid `.cube` content this crate does not handle
    #[error("Unsupported cube file: {0}")]
    UnsupportedCube(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
