//! `.cube` writer

use std::io::Write;

use crate::lattice::Lattice;
use crate::{Error, Result};

/// Write a lattice as a `.cube` file
///
/// Values use the shortest decimal form that parses back to the same `f32`,
/// so a written file reads back bit-identical. NaN and infinite samples
/// have no `.cube` spelling and are rejected before anything is written.
pub fn write_cube<W: Write>(out: &mut W, title: Option<&str>, lattice: &Lattice) -> Result<()> {
    if let Some(index) = lattice
        .samples()
        .iter()
        .position(|s| !s.to_array().iter().all(|v| v.is_finite()))
    {
        return Err(Error::NonFiniteSample { index });
    }
    if let Some(title) = title {
        let title: String = title
            .chars()
            .map(|c| if matches!(c, '"' | '\n' | '\r') { ' ' } else { c })
            .collect();
        writeln!(out, "TITLE \"{}\"", title)?;
    }
    writeln!(out, "LUT_3D_SIZE {}", lattice.size())?;
    writeln!(out, "DOMAIN_MIN 0.0 0.0 0.0")?;
    writeln!(out, "DOMAIN_MAX 1.0 1.0 1.0")?;
    for s in lattice.samples() {
        writeln!(out, "{} {} {}", s.r, s.g, s.b)?;
    }
    Ok(())
}
