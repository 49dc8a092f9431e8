//! `.cube` 3D LUT files
//!
//! Reads and writes the text format used by most grading tools:
//!
//! ```text
//! # comment
//! TITLE "warm"
//! LUT_3D_SIZE 17
//! DOMAIN_MIN 0 0 0
//! DOMAIN_MAX 1 1 1
//! 0.0 0.0 0.0
//! ...
//! ```
//!
//! Samples are listed red fastest, which matches [`Lattice`] storage order,
//! so no reordering is needed in either direction. Only 3D tables over the
//! unit domain are supported.

mod parser;
mod writer;

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use tracing::debug;

use crate::Result;
use crate::lattice::Lattice;
use crate::transform::{Lut3dTransform, TransformOptions};

pub use parser::{parse_cube, parse_cube_str};
pub use writer::write_cube;

/// A parsed `.cube` file
#[derive(Debug, Clone, PartialEq)]
pub struct CubeFile {
    /// Value of the `TITLE` line, without quotes
    pub title: Option<String>,
    /// The table itself
    pub lattice: Lattice,
}

impl CubeFile {
    /// Wrap a lattice with an optional title
    pub fn new(title: Option<String>, lattice: Lattice) -> Self {
        Self { title, lattice }
    }

    /// Turn the file into a transform
    pub fn into_transform(self, options: TransformOptions) -> Lut3dTransform {
        Lut3dTransform::with_options(self.lattice, options)
    }
}

/// Load a `.cube` file from disk
pub fn load_cube(path: impl AsRef<Path>) -> Result<CubeFile> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let cube = parse_cube(BufReader::new(file))?;
    debug!(
        path = %path.display(),
        size = cube.lattice.size(),
        title = cube.title.as_deref().unwrap_or(""),
        "loaded cube file"
    );
    Ok(cube)
}

/// Write a `.cube` file to disk
pub fn save_cube(path: impl AsRef<Path>, cube: &CubeFile) -> Result<()> {
    let path = path.as_ref();
    let mut out = BufWriter::new(File::create(path)?);
    write_cube(&mut out, cube.title.as_deref(), &cube.lattice)?;
    out.flush()?;
    debug!(path = %path.display(), size = cube.lattice.size(), "saved cube file");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;

    #[test]
    fn test_save_and_load() {
        let lattice = Lattice::from_fn(3, |x, y, z| {
            Rgb::new(x as f32 / 3.0, (y * y) as f32 / 7.0, 1.0 - z as f32 * 0.1)
        })
        .unwrap();
        let cube = CubeFile::new(Some("roundtrip".to_string()), lattice);

        let path = std::env::temp_dir().join(format!("colorcube-{}.cube", std::process::id()));
        save_cube(&path, &cube).unwrap();
        let loaded = load_cube(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(loaded, cube);
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_cube("/nonexistent/colorcube/missing.cube").unwrap_err();
        assert!(matches!(err, crate::Error::Io(_)));
    }
}
