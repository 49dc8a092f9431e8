//! Color types
//!
//! Linear RGB only. The packed RGBA8888 boundary encoding lives on [`Rgb`].

pub mod rgb;

pub use rgb::{OPAQUE_ALPHA, Rgb};
