//! Accuracy measurement for float color buffers
//!
//! Differences are measured per channel as absolute error in [0, 1] units.
//! One 8-bit code value is `1 / 255`, which gives the thresholds below a
//! concrete meaning.

/// One 8-bit code value in float units
pub const ONE_CODE_VALUE: f64 = 1.0 / 255.0;

/// Statistics from comparing two color buffers
#[derive(Debug, Clone)]
pub struct ErrorStats {
    /// Mean of the per-color max channel error
    pub mean: f64,
    /// Maximum channel error
    pub max: f64,
    /// 95th percentile of the per-color max channel error
    pub p95: f64,
    /// Number of samples
    pub count: usize,
}

impl ErrorStats {
    /// Check if the buffers agree to float rounding (< 1e-5)
    pub fn is_exact(&self) -> bool {
        self.max < 1e-5
    }

    /// Check if no color moved by a tenth of a code value
    pub fn is_excellent(&self) -> bool {
        self.max < ONE_CODE_VALUE / 10.0
    }

    /// Check if every color would quantize within one code value
    pub fn is_good(&self) -> bool {
        self.max < ONE_CODE_VALUE
    }
}

/// Compare two float color buffers and compute error statistics
pub fn compare_colors(
    reference: &[colorcube_core::Rgb],
    result: &[colorcube_core::Rgb],
) -> ErrorStats {
    assert_eq!(reference.len(), result.len());

    let mut errors: Vec<f64> = reference
        .iter()
        .zip(result)
        .map(|(a, b)| a.max_abs_diff(b) as f64)
        .collect();

    errors.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let mean = if errors.is_empty() {
        0.0
    } else {
        errors.iter().sum::<f64>() / errors.len() as f64
    };
    let max = *errors.last().unwrap_or(&0.0);
    let p95_idx = (errors.len() as f64 * 0.95) as usize;
    let p95 = errors.get(p95_idx).copied().unwrap_or(max);

    ErrorStats {
        mean,
        max,
        p95,
        count: reference.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use colorcube_core::Rgb;

    #[test]
    fn test_identical_buffers() {
        let buf = [Rgb::new(1.0, 0.5, 0.25), Rgb::new(0.125, 0.0625, 0.0)];
        let stats = compare_colors(&buf, &buf);
        assert!(stats.is_exact());
        assert_eq!(stats.count, 2);
    }

    #[test]
    fn test_two_code_values_is_not_good() {
        let a = [Rgb::BLACK];
        let b = [Rgb::new(0.0, 2.0 / 255.0, 0.0)];
        let stats = compare_colors(&a, &b);
        assert!(!stats.is_good());
        assert!((stats.max - 2.0 * ONE_CODE_VALUE).abs() < 1e-6);
    }

    #[test]
    fn test_empty() {
        let stats = compare_colors(&[], &[]);
        assert_eq!(stats.count, 0);
        assert_eq!(stats.max, 0.0);
    }
}
