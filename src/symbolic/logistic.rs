//! Logistic distribution.
//!
//! Not covered by the statistics backend, so density, CDF, and quantile
//! are computed from their closed forms directly.

use crate::error::{Error, Result};

/// A logistic distribution with location `location` and scale `scale`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Logistic {
    location: f64,
    scale: f64,
}

impl Logistic {
    /// Creates a logistic distribution.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidParameters` if `location` is not finite or
    /// `scale` is not finite and strictly positive.
    pub fn new(location: f64, scale: f64) -> Result<Self> {
        if !location.is_finite() {
            return Err(Error::InvalidParameters {
                what: "logistic distribution",
                reason: format!("location must be finite, got {location}"),
            });
        }
        if !scale.is_finite() || scale <= 0.0 {
            return Err(Error::InvalidParameters {
                what: "logistic distribution",
                reason: format!("scale must be positive, got {scale}"),
            });
        }
        Ok(Self { location, scale })
    }

    /// The location parameter (mean and median).
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
    ///
    /// Evaluated as `t / (s (1 + t)^2)` with `t = exp(-|z|)`, which stays
    /// finite for large `|z|` where the naive form overflows.
    #[must_use]
    pub fn pdf(&self, x: f64) -> f64 {
        let z = (x - self.location) / self.scale;
        let t = (-z.abs()).exp();
        let denom = 1.0 + t;
        t / (self.scale * denom * denom)
    }

    /// Cumulative probability at `x`.
    #[must_use]
    pub fn cdf(&self, x: f64) -> f64 {
        let z = (x - self.location) / self.scale;
        if z >= 0.0 {
            1.0 / (1.0 + (-z).exp())
        } else {
            let e = z.exp();
            e / (1.0 + e)
        }
    }

    /// Value at cumulative probability `p`.
    #[must_use]
    pub fn quantile(&self, p: f64) -> f64 {
        if p <= 0.0 {
            return f64::NEG_INFINITY;
        }
        if p >= 1.0 {
            return f64::INFINITY;
        }
        self.location + self.scale * (p / (1.0 - p)).ln()
    }

    /// Analytic mean (the location).
    #[must_use]
    pub fn mean(&self) -> f64 {
        self.location
    }

    /// Analytic variance `(pi * scale)^2 / 3`.
    #[must_use]
    pub fn variance(&self) -> f64 {
        let pi_s = core::f64::consts::PI * self.scale;
        pi_s * pi_s / 3.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_logistic_rejects_bad_params() {
        assert!(Logistic::new(0.0, 0.0).is_err());
        assert!(Logistic::new(0.0, -1.0).is_err());
        assert!(Logistic::new(f64::NAN, 1.0).is_err());
    }

    #[test]
    fn test_logistic_density_peak() {
        let d = Logistic::new(0.0, 1.0).unwrap();
        // Peak density of the standard logistic is 1/4.
        assert_relative_eq!(d.pdf(0.0), 0.25, epsilon = 1e-12);
        assert_relative_eq!(d.pdf(-3.0), d.pdf(3.0), epsilon = 1e-12);
    }

    #[test]
    fn test_logistic_cdf_quantile_inverse() {
        let d = Logistic::new(2.0, 0.5).unwrap();
        assert_relative_eq!(d.cdf(2.0), 0.5, epsilon = 1e-12);
        for p in [0.1, 0.25, 0.5, 0.9] {
            assert_relative_eq!(d.cdf(d.quantile(p)), p, epsilon = 1e-10);
        }
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn test_logistic_extreme_tails_stay_finite() {
        let d = Logistic::new(0.0, 1.0).unwrap();
        assert_eq!(d.pdf(1000.0), 0.0);
        assert_eq!(d.pdf(-1000.0), 0.0);
        assert_relative_eq!(d.cdf(1000.0), 1.0);
        assert_relative_eq!(d.cdf(-1000.0), 0.0);
    }

    #[test]
    fn test_logistic_moments() {
        let d = Logistic::new(3.0, 2.0).unwrap();
        assert_relative_eq!(d.mean(), 3.0);
        let pi = core::f64::consts::PI;
        assert_relative_eq!(d.variance(), 4.0 * pi * pi / 3.0);
    }
}
