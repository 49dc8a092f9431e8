//! Trilinear interpolation on a color lattice
//!
//! The transform is split into three steps:
//! - [`locate`]: map a color onto a lattice cell and an offset inside it
//! - [`gather`]: fetch the 8 corners of that cell
//! - [`interpolate`]: collapse the cell blue first, then green, then red
//!
//! The collapse order is fixed so results are bit-reproducible.

use crate::color::Rgb;
use crate::lattice::Lattice;

/// How colors outside the unit cube are handled before lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DomainPolicy {
    /// Clamp the input color to [0, 1] first. Offsets stay in [0, 1].
    #[default]
    ClampInput,
    /// Leave the color alone and only clamp the cell origin.
    ///
    /// Offsets may leave [0, 1], extrapolating linearly from the border cell.
    ClampIndex,
}

/// Cell origin and fractional offset of a color inside the lattice
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalPosition {
    /// Lower corner of the cell, each axis in [0, size - 2]
    pub origin: [usize; 3],
    /// Position inside the cell per axis (r, g, b)
    pub offset: [f32; 3],
}

/// The 8 samples bounding a cell, named `cXYZ` by per-axis offset bit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Corners {
    pub c000: Rgb,
    pub c001: Rgb,
    pub c010: Rgb,
    pub c011: Rgb,
    pub c100: Rgb,
    pub c101: Rgb,
    pub c110: Rgb,
    pub c111: Rgb,
}

/// Map a color to its lattice cell
///
/// A channel landing exactly on the last lattice plane is moved into the
/// last cell with offset 1.0 so `origin + 1` is always a valid index.
/// The origin is clamped to `[0, size - 2]` under either policy, so no input
/// (including NaN) can index outside the lattice.
///
/// `size` must be at least 2; [`Lattice`] guarantees this.
#[inline]
pub fn locate(color: Rgb, size: usize, policy: DomainPolicy) -> LocalPosition {
    let color = match policy {
        DomainPolicy::ClampInput => color.clamp(),
        DomainPolicy::ClampIndex => color,
    };
    let last = (size - 1) as f32;
    let max_origin = size - 2;

    let mut origin = [0usize; 3];
    let mut offset = [0.0f32; 3];
    for (axis, value) in color.to_array().into_iter().enumerate() {
        let scaled = value * last;
        let floor = scaled.floor();
        let edge = if floor >= last { 1.0 } else { 0.0 };

        let cell = floor - edge;
        // `as` saturates: negatives and NaN become 0
        let clamped = (cell as usize).min(max_origin);
        origin[axis] = clamped;
        offset[axis] = if clamped as f32 == cell {
            (scaled - floor) + edge
        } else {
            scaled - clamped as f32
        };
    }

    LocalPosition { origin, offset }
}

/// Fetch the 8 corners of the cell whose lower corner is `origin`
///
/// `origin` must satisfy `origin[axis] + 1 < size`, which [`locate`] ensures.
#[inline]
pub fn gather(lattice: &Lattice, origin: [usize; 3]) -> Corners {
    let [x, y, z] = origin;
    let samples = lattice.samples();
    let dy = lattice.size();
    let dz = dy * dy;
    let base = lattice.index(x, y, z);

    Corners {
        c000: samples[base],
        c001: samples[base + dz],
        c010: samples[base + dy],
        c011: samples[base + dy + dz],
        c100: samples[base + 1],
        c101: samples[base + 1 + dz],
        c110: samples[base + 1 + dy],
        c111: samples[base + 1 + dy + dz],
    }
}

/// Trilinear blend of the corners at `offset`
#[inline]
pub fn interpolate(c: &Corners, offset: [f32; 3]) -> Rgb {
    let [tr, tg, tb] = offset;

    // Collapse blue: cube -> red/green plane
    let c00 = Rgb::mix(c.c000, c.c001, tb);
    let c01 = Rgb::mix(c.c010, c.c011, tb);
    let c10 = Rgb::mix(c.c100, c.c101, tb);
    let c11 = Rgb::mix(c.c110, c.c111, tb);

    // Collapse green: plane -> line along red
    let c0 = Rgb::mix(c00, c01, tg);
    let c1 = Rgb::mix(c10, c11, tg);

    // Collapse red: line -> point
    Rgb::mix(c0, c1, tr)
}

/// `locate`, `gather` and `interpolate` in one call
#[inline]
pub fn trilinear(lattice: &Lattice, color: Rgb, policy: DomainPolicy) -> Rgb {
    let position = locate(color, lattice.size(), policy);
    let corners = gather(lattice, position.origin);
    interpolate(&corners, position.offset)
}
