//! Cauchy distribution.

use statrs::distribution::{Continuous, ContinuousCDF};

use crate::error::{Error, Result};

/// A Cauchy distribution with location `location` and scale `scale`.
///
/// The Cauchy family has no finite mean or variance; asking for either
/// through the moment accessors fails with a domain error rather than
/// returning NaN.
#[derive(Clone, Copy, Debug)]
pub struct Cauchy {
    location: f64,
    scale: f64,
    inner: statrs::distribution::Cauchy,
}

impl Cauchy {
    /// Creates a Cauchy distribution.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidParameters` if `location` is not finite or
    /// `scale` is not finite and strictly positive.
    pub fn new(location: f64, scale: f64) -> Result<Self> {
        if !location.is_finite() {
            return Err(Error::InvalidParameters {
                what: "cauchy distribution",
                reason: format!("location must be finite, got {location}"),
            });
        }
        if !scale.is_finite() || scale <= 0.0 {
            return Err(Error::InvalidParameters {
                what: "cauchy distribution",
                reason: format!("scale must be positive, got {scale}"),
            });
        }
        let inner = statrs::distribution::Cauchy::new(location, scale).map_err(|e| {
            Error::InvalidParameters {
                what: "cauchy distribution",
                reason: e.to_string(),
            }
        })?;
        Ok(Self {
            location,
            scale,
            inner,
        })
    }

    /// The location parameter (median).
    #[must_use]
    pub fn location(&self) -> f64 {
        self.location
    }

    /// The scale parameter.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
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
}

impl PartialEq for Cauchy {
    #[allow(clippy::float_cmp)]
    fn eq(&self, other: &Self) -> bool {
        self.location == other.location && self.scale == other.scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_cauchy_rejects_bad_params() {
        assert!(Cauchy::new(0.0, 0.0).is_err());
        assert!(Cauchy::new(0.0, -1.0).is_err());
        assert!(Cauchy::new(f64::INFINITY, 1.0).is_err());
    }

    #[test]
    fn test_cauchy_density_and_median() {
        let d = Cauchy::new(0.0, 1.0).unwrap();
        // Peak density of the standard Cauchy is 1 / pi.
        assert_relative_eq!(d.pdf(0.0), core::f64::consts::FRAC_1_PI, epsilon = 1e-12);
        assert_relative_eq!(d.cdf(0.0), 0.5, epsilon = 1e-12);
        assert_relative_eq!(d.quantile(0.5), 0.0, epsilon = 1e-9);
        // Quartiles of the standard Cauchy sit at the scale.
        assert_relative_eq!(d.quantile(0.75), 1.0, epsilon = 1e-6);
    }
}
