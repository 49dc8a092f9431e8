//! `.cube` reader

use std::io::{BufRead, Cursor};

use tracing::{trace, warn};

use super::CubeFile;
use crate::color::Rgb;
use crate::lattice::Lattice;
use crate::{Error, Result};

/// Upper bound on the up-front sample reservation
const MAX_RESERVE: usize = 1 << 20;

/// Parse a `.cube` file from a string
pub fn parse_cube_str(text: &str) -> Result<CubeFile> {
    parse_cube(Cursor::new(text))
}

/// Parse a `.cube` file from any buffered reader
pub fn parse_cube<R: BufRead>(reader: R) -> Result<CubeFile> {
    let mut title = None;
    let mut size: Option<usize> = None;
    let mut samples: Vec<Rgb> = Vec::new();
    let mut line_no = 0;

    for line in reader.lines() {
        line_no += 1;
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let mut parts = line.split_whitespace();
        let Some(keyword) = parts.next() else {
            continue;
        };

        if starts_number(keyword) {
            if size.is_none() {
                return Err(parse_error(line_no, "sample before LUT_3D_SIZE"));
            }
            let rgb = parse_floats::<3>(line.split_whitespace(), line_no)?;
            samples.push(Rgb::from_array(rgb));
            continue;
        }

        match keyword.to_ascii_uppercase().as_str() {
            "TITLE" => {
                let rest = line[keyword.len()..].trim();
                title = Some(rest.trim_matches('"').to_string());
            }
            "LUT_3D_SIZE" => {
                if size.is_some() {
                    return Err(parse_error(line_no, "duplicate LUT_3D_SIZE"));
                }
                let [n] = parse_args::<usize, 1>(parts, line_no)?;
                size = Some(n);
                samples.reserve(n.saturating_mul(n).saturating_mul(n).min(MAX_RESERVE));
                trace!(size = n, "cube size");
            }
            "LUT_1D_SIZE" | "LUT_2D_SIZE" => {
                return Err(Error::UnsupportedCube(format!(
                    "{} tables are not 3D LUTs",
                    keyword
                )));
            }
            "DOMAIN_MIN" => check_domain(parts, line_no, 0.0, keyword)?,
            "DOMAIN_MAX" => check_domain(parts, line_no, 1.0, keyword)?,
            _ => warn!(line = line_no, keyword, "ignoring unknown cube keyword"),
        }
    }

    let size = size.ok_or_else(|| parse_error(line_no, "missing LUT_3D_SIZE"))?;
    let lattice = Lattice::new(size, samples)?;
    Ok(CubeFile { title, lattice })
}

fn starts_number(token: &str) -> bool {
    token
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_digit() || matches!(c, '-' | '+' | '.'))
}

fn check_domain<'a>(
    parts: impl Iterator<Item = &'a str>,
    line: usize,
    expected: f32,
    keyword: &str,
) -> Result<()> {
    let values = parse_floats::<3>(parts, line)?;
    if values.iter().any(|&v| v != expected) {
        return Err(Error::UnsupportedCube(format!(
            "{} {:?} (only the unit domain is supported)",
            keyword, values
        )));
    }
    Ok(())
}

fn parse_floats<'a, const N: usize>(
    parts: impl Iterator<Item = &'a str>,
    line: usize,
) -> Result<[f32; N]> {
    parse_args::<f32, N>(parts, line)
}

fn parse_args<'a, T, const N: usize>(
    parts: impl Iterator<Item = &'a str>,
    line: usize,
) -> Result<[T; N]>
where
    T: std::str::FromStr + Copy + Default,
{
    let mut out = [T::default(); N];
    let mut count = 0;
    for part in parts {
        if count == N {
            return Err(parse_error(line, format!("expected {} values", N)));
        }
        out[count] = part
            .parse()
            .map_err(|_| parse_error(line, format!("invalid number '{}'", part)))?;
        count += 1;
    }
    if count != N {
        return Err(parse_error(
            line,
            format!("expected {} values, got {}", N, count),
        ));
    }
    Ok(out)
}

fn parse_error(line: usize, message: impl Into<String>) -> Error {
    Error::CubeParse {
        line,
        message: message.into(),
    }
}
