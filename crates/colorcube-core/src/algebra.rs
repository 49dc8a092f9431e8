//! Composition of color functions
//!
//! Any color-to-color function can be sampled onto a lattice, and a lattice
//! can be applied back as a function through [`Lut3dTransform`]. Composing
//! two lattices applies the outer one to every sample of the inner one, so
//! the result first does `inner`, then `outer`.
//!
//! Lattice composition is associative and has [`Lattice::identity`] as a unit
//! on both sides. Those laws only hold in practice because the lookup runs at
//! full float precision instead of round-tripping through 8 bits.

use tracing::trace;

use crate::color::Rgb;
use crate::lattice::Lattice;
use crate::math::DomainPolicy;
use crate::transform::Lut3dTransform;
use crate::{Error, Result};

/// Something that maps colors to colors
pub trait ColorFunc {
    /// Map one color
    fn map_color(&self, color: Rgb) -> Rgb;

    /// Map a slice of colors
    fn map_colors(&self, colors: &[Rgb]) -> Vec<Rgb> {
        colors.iter().map(|&c| self.map_color(c)).collect()
    }

    /// Whether this function is known to leave every color unchanged
    fn is_identity(&self) -> bool {
        false
    }

    /// Sample this function at every point of a `size³` lattice
    fn to_lattice(&self, size: usize) -> Result<Lattice> {
        let identity = Lattice::identity(size)?;
        if self.is_identity() {
            return Ok(identity);
        }
        Ok(identity.map(|c| self.map_color(c)))
    }
}

/// The function that returns its input
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

impl ColorFunc for Identity {
    #[inline]
    fn map_color(&self, color: Rgb) -> Rgb {
        color
    }

    fn map_colors(&self, colors: &[Rgb]) -> Vec<Rgb> {
        colors.to_vec()
    }

    fn is_identity(&self) -> bool {
        true
    }
}

/// Adapter turning a closure into a [`ColorFunc`]
#[derive(Debug, Clone, Copy)]
pub struct FnColorFunc<F>(pub F);

impl<F> ColorFunc for FnColorFunc<F>
where
    F: Fn(Rgb) -> Rgb,
{
    #[inline]
    fn map_color(&self, color: Rgb) -> Rgb {
        (self.0)(color)
    }
}

impl ColorFunc for Lut3dTransform {
    #[inline]
    fn map_color(&self, color: Rgb) -> Rgb {
        self.transform(color)
    }

    /// An identity lattice under [`DomainPolicy::ClampInput`] still clamps,
    /// so only the extrapolating policy is the identity function.
    fn is_identity(&self) -> bool {
        self.options().domain == DomainPolicy::ClampIndex && self.lattice().is_identity()
    }

    fn to_lattice(&self, size: usize) -> Result<Lattice> {
        if size == self.lattice().size() {
            return Ok(self.lattice().clone());
        }
        let identity = Lattice::identity(size)?;
        Ok(identity.map(|c| self.transform(c)))
    }
}

/// `outer ∘ inner`: apply `outer` to every sample of `inner`
///
/// The result has `inner`'s size. Identity lattices on either side are
/// skipped without resampling, unless `outer` would clamp samples of
/// `inner` that leave the unit cube.
pub fn compose(outer: &Lut3dTransform, inner: &Lattice) -> Lattice {
    trace!(
        outer_size = outer.lattice().size(),
        inner_size = inner.size(),
        "composing lattices"
    );
    if inner.is_identity() && inner.size() == outer.lattice().size() {
        return outer.lattice().clone();
    }
    if outer.lattice().is_identity()
        && (outer.options().domain == DomainPolicy::ClampIndex
            || inner.samples().iter().all(Rgb::is_in_gamut))
    {
        return inner.clone();
    }
    inner.map(|c| outer.transform(c))
}

/// Compose two lattices with default transform options
pub fn compose_lattices(outer: &Lattice, inner: &Lattice) -> Lattice {
    compose(&Lut3dTransform::new(outer.clone()), inner)
}

/// Fold a chain of lattices into one, applying the last one first
///
/// `[a, b, c]` yields `a ∘ b ∘ c`. An empty chain is the identity.
pub fn compose_all<'a, I>(chain: I, size: usize) -> Result<Lattice>
where
    I: IntoIterator<Item = &'a Lattice>,
    I::IntoIter: DoubleEndedIterator,
{
    let mut acc = Lattice::identity(size)?;
    for lattice in chain.into_iter().rev() {
        if lattice.size() != size {
            return Err(Error::LatticeSizeMismatch {
                left: size,
                right: lattice.size(),
            });
        }
        acc = compose_lattices(lattice, &acc);
    }
    Ok(acc)
}
