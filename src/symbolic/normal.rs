//! Normal (Gaussian) distribution.

use statrs::distribution::{Continuous, ContinuousCDF};

use crate::error::{Error, Result};

/// A normal distribution with mean `mean` and standard deviation `std_dev`.
///
/// The standard deviation must be strictly positive; a zero-spread normal
/// is represented as a [`PointMass`](crate::symbolic::PointMass) instead
/// (see [`SymbolicDist::normal`](crate::symbolic::SymbolicDist::normal)).
#[derive(Clone, Copy, Debug)]
pub struct Normal {
    mean: f64,
    std_dev: f64,
    inner: statrs::distribution::Normal,
}

impl Normal {
    /// Creates a normal distribution.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidParameters` if `mean` is not finite or
    /// `std_dev` is not finite and strictly positive.
    pub fn new(mean: f64, std_dev: f64) -> Result<Self> {
        if !mean.is_finite() {
            return Err(Error::InvalidParameters {
                what: "normal distribution",
                reason: format!("mean must be finite, got {mean}"),
            });
        }
        if !std_dev.is_finite() || std_dev <= 0.0 {
            return Err(Error::InvalidParameters {
                what: "normal distribution",
                reason: format!("standard deviation must be positive, got {std_dev}"),
            });
        }
        let inner = statrs::distribution::Normal::new(mean, std_dev).map_err(|e| {
            Error::InvalidParameters {
                what: "normal distribution",
                reason: e.to_string(),
            }
        })?;
        Ok(Self {
            mean,
            std_dev,
            inner,
        })
    }

    /// The mean.
    #[must_use]
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// The standard deviation.
    #[must_use]
    pub fn std_dev(&self) -> f64 {
        self.std_dev
    }

    /// Density at `x`.
    #[must_use]
    pub fn pdf(&self, x: f64) -> f64 {
        self.inner.pdf(x)
    }

    /// Cumulative probability at `x`.
    #[must_use]
    pub fn cdf(&self, x: f64) -> f64 {
        self.inner.cdf(x)
    }

    /// Value at cumulative probability `p`.
    #[must_use]
    pub fn quantile(&self, p: f64) -> f64 {
        self.inner.inverse_cdf(p)
    }

    /// Analytic variance.
    #[must_use]
    pub fn variance(&self) -> f64 {
        self.std_dev * self.std_dev
    }
}

impl PartialEq for Normal {
    #[allow(clippy::float_cmp)]
    fn eq(&self, other: &Self) -> bool {
        self.mean == other.mean && self.std_dev == other.std_dev
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_normal_rejects_bad_params() {
        assert!(Normal::new(f64::NAN, 1.0).is_err());
        assert!(Normal::new(0.0, 0.0).is_err());
        assert!(Normal::new(0.0, -1.0).is_err());
        assert!(Normal::new(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_standard_normal_values() {
        let d = Normal::new(0.0, 1.0).unwrap();
        // Peak density of the standard normal is 1 / sqrt(2 pi).
        assert_relative_eq!(d.pdf(0.0), 0.398_942_280_401_432_7, epsilon = 1e-12);
        assert_relative_eq!(d.cdf(0.0), 0.5, epsilon = 1e-12);
        assert_relative_eq!(d.quantile(0.5), 0.0, epsilon = 1e-9);
        // 97.5th percentile of the standard normal.
        assert_relative_eq!(d.quantile(0.975), 1.959_963_984_540_054, epsilon = 1e-6);
    }

    #[test]
    fn test_normal_shift_and_scale() {
        let d = Normal::new(10.0, 2.0).unwrap();
        assert_relative_eq!(d.cdf(10.0), 0.5, epsilon = 1e-12);
        assert_relative_eq!(d.variance(), 4.0);
        // Symmetry of the density around the mean.
        assert_relative_eq!(d.pdf(8.0), d.pdf(12.0), epsilon = 1e-12);
    }
}
