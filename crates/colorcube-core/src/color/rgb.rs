//! RGB Color Primitives
//!
//! `Rgb` is both the transform's input/output and the lattice sample type.
//! Components are unconstrained `f32`; nothing here clamps unless asked to.

use std::ops::{Add, Mul, Sub};

use bytemuck::{Pod, Zeroable};

/// Alpha written into every packed RGBA8888 output
pub const OPAQUE_ALPHA: u8 = u8::MAX;

/// Linear RGB color in floating point
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Rgb {
    /// Red component
    pub r: f32,
    /// Green component
    pub g: f32,
    /// Blue component
    pub b: f32,
}

impl Rgb {
    /// Create a new RGB color
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Same value in all three channels
    #[inline]
    pub const fn splat(v: f32) -> Self {
        Self { r: v, g: v, b: v }
    }

    /// Create RGB from an array
    #[inline]
    pub const fn from_array(arr: [f32; 3]) -> Self {
        Self {
            r: arr[0],
            g: arr[1],
            b: arr[2],
        }
    }

    /// Convert to array
    #[inline]
    pub const fn to_array(&self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }

    /// Create from 8-bit values (0-255)
    #[inline]
    pub fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: u8_to_unit(r),
            g: u8_to_unit(g),
            b: u8_to_unit(b),
        }
    }

    /// Convert to 8-bit values (0-255), rounding and clamping each channel
    #[inline]
    pub fn to_u8(&self) -> [u8; 3] {
        [unit_to_u8(self.r), unit_to_u8(self.g), unit_to_u8(self.b)]
    }

    /// Decode a packed RGBA8888 pixel. Alpha is ignored.
    #[inline]
    pub fn from_rgba8888(px: [u8; 4]) -> Self {
        Self::from_u8(px[0], px[1], px[2])
    }

    /// Encode as a packed RGBA8888 pixel with alpha forced opaque
    #[inline]
    pub fn to_rgba8888(&self) -> [u8; 4] {
        let [r, g, b] = self.to_u8();
        [r, g, b, OPAQUE_ALPHA]
    }

    /// Clamp all components to [0, 1]
    #[inline]
    pub fn clamp(&self) -> Self {
        Self {
            r: self.r.clamp(0.0, 1.0),
            g: self.g.clamp(0.0, 1.0),
            b: self.b.clamp(0.0, 1.0),
        }
    }

    /// Check if all components are in [0, 1]
    #[inline]
    pub fn is_in_gamut(&self) -> bool {
        (0.0..=1.0).contains(&self.r)
            && (0.0..=1.0).contains(&self.g)
            && (0.0..=1.0).contains(&self.b)
    }

    /// Scale all components by a factor
    #[inline]
    pub fn scale(&self, factor: f32) -> Self {
        Self {
            r: self.r * factor,
            g: self.g * factor,
            b: self.b * factor,
        }
    }

    /// Component-wise product
    #[inline]
    pub fn modulate(&self, other: Self) -> Self {
        Self {
            r: self.r * other.r,
            g: self.g * other.g,
            b: self.b * other.b,
        }
    }

    /// Linear blend `a * (1 - t) + b * t`
    ///
    /// `t` outside [0, 1] extrapolates.
    #[inline]
    pub fn mix(a: Self, b: Self, t: f32) -> Self {
        let s = 1.0 - t;
        Self {
            r: a.r * s + b.r * t,
            g: a.g * s + b.g * t,
            b: a.b * s + b.b * t,
        }
    }

    /// Largest per-channel absolute difference
    #[inline]
    pub fn max_abs_diff(&self, other: &Self) -> f32 {
        (self.r - other.r)
            .abs()
            .max((self.g - other.g).abs())
            .max((self.b - other.b).abs())
    }

    /// Check if approximately equal to another RGB color
    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        (self.r - other.r).abs() < epsilon
            && (self.g - other.g).abs() < epsilon
            && (self.b - other.b).abs() < epsilon
    }

    /// Black color
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);

    /// White color
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);

    /// Red primary
    pub const RED: Self = Self::new(1.0, 0.0, 0.0);

    /// Green primary
    pub const GREEN: Self = Self::new(0.0, 1.0, 0.0);

    /// Blue primary
    pub const BLUE: Self = Self::new(0.0, 0.0, 1.0);
}

#[inline]
fn u8_to_unit(v: u8) -> f32 {
    v as f32 / 255.0
}

#[inline]
fn unit_to_u8(v: f32) -> u8 {
    // NaN saturates to 0 in the cast
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

impl From<[f32; 3]> for Rgb {
    fn from(arr: [f32; 3]) -> Self {
        Self::from_array(arr)
    }
}

impl From<Rgb> for [f32; 3] {
    fn from(rgb: Rgb) -> Self {
        rgb.to_array()
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(arr: [u8; 3]) -> Self {
        Self::from_u8(arr[0], arr[1], arr[2])
    }
}

impl Add for Rgb {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            r: self.r + rhs.r,
            g: self.g + rhs.g,
            b: self.b + rhs.b,
        }
    }
}

impl Sub for Rgb {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            r: self.r - rhs.r,
            g: self.g - rhs.g,
            b: self.b - rhs.b,
        }
    }
}

impl Mul<f32> for Rgb {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self::Output {
        self.scale(rhs)
    }
}
