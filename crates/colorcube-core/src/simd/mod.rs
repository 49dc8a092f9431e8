//! SIMD-Dispatched Batch Operations
//!
//! Batch kernels are compiled for several instruction sets with the
//! `multiversion` crate and dispatched at runtime.
//!
//! Supported instruction sets:
//! - x86-64: SSE4.1, AVX2
//! - ARM64: NEON
//!
//! The scalar fallback is always available.

mod batch;

pub use batch::{
    RGBA8_CHANNELS, rgb_to_rgba8_batch, rgba8_to_rgb_batch, transform_rgb_batch,
    transform_rgb_in_place, transform_rgba8_batch,
};

/// Get a description of the active SIMD features
pub fn active_features() -> &'static str {
    #[cfg(target_arch = "x86_64")]
    {
        if is_x86_feature_detected!("avx2") {
            "AVX2"
        } else if is_x86_feature_detected!("sse4.1") {
            "SSE4.1"
        } else {
            "scalar"
        }
    }
    #[cfg(target_arch = "aarch64")]
    {
        "NEON"
    }
    #[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
    {
        "scalar"
    }
}
