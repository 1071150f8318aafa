//! Beta distribution.

use statrs::distribution::{Continuous, ContinuousCDF};

use crate::error::{Error, Result};

/// A beta distribution over `[0, 1]` with shape parameters `alpha` and `beta`.
#[derive(Clone, Copy, Debug)]
pub struct Beta {
    alpha: f64,
    beta: f64,
    inner: statrs::distribution::Beta,
}

impl Beta {
    /// Creates a beta distribution.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidParameters` unless both shape parameters are
    /// finite and strictly positive.
    pub fn new(alpha: f64, beta: f64) -> Result<Self> {
        if !alpha.is_finite() || alpha <= 0.0 || !beta.is_finite() || beta <= 0.0 {
            return Err(Error::InvalidParameters {
                what: "beta distribution",
                reason: format!("shape parameters must be positive, got ({alpha}, {beta})"),
            });
        }
        let inner =
            statrs::distribution::Beta::new(alpha, beta).map_err(|e| Error::InvalidParameters {
                what: "beta distribution",
                reason: e.to_string(),
            })?;
        Ok(Self { alpha, beta, inner })
    }

    /// First shape parameter.
    #[must_use]
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Second shape parameter.
    #[must_use]
    pub fn beta(&self) -> f64 {
        self.beta
    }

    /// Density at `x` (0 outside `[0, 1]`).
    ///
    /// For shape parameters below 1 the density diverges at the matching
    /// endpoint; discretization avoids evaluating there by using quantile
    /// bounds.
    #[must_use]
    pub fn pdf(&self, x: f64) -> f64 {
        if !(0.0..=1.0).contains(&x) {
            return 0.0;
        }
        self.inner.pdf(x)
    }

    /// Cumulative probability at `x`.
    #[must_use]
    pub fn cdf(&self, x: f64) -> f64 {
        if x <= 0.0 {
            0.0
        } else if x >= 1.0 {
            1.0
        } else {
            self.inner.cdf(x)
        }
    }

    /// Value at cumulative probability `p`.
    #[must_use]
    pub fn quantile(&self, p: f64) -> f64 {
        self.inner.inverse_cdf(p)
    }

    /// Analytic mean `alpha / (alpha + beta)`.
    #[must_use]
    pub fn mean(&self) -> f64 {
        self.alpha / (self.alpha + self.beta)
    }

    /// Analytic variance.
    #[must_use]
    pub fn variance(&self) -> f64 {
        let s = self.alpha + self.beta;
        self.alpha * self.beta / (s * s * (s + 1.0))
    }
}

impl PartialEq for Beta {
    #[allow(clippy::float_cmp)]
    fn eq(&self, other: &Self) -> bool {
        self.alpha == other.alpha && self.beta == other.beta
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_beta_rejects_bad_shapes() {
        assert!(Beta::new(0.0, 1.0).is_err());
        assert!(Beta::new(1.0, -1.0).is_err());
        assert!(Beta::new(f64::NAN, 1.0).is_err());
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn test_beta_uniform_special_case() {
        // Beta(1, 1) is the uniform distribution on [0, 1].
        let d = Beta::new(1.0, 1.0).unwrap();
        assert_relative_eq!(d.pdf(0.3), 1.0, epsilon = 1e-12);
        assert_relative_eq!(d.cdf(0.3), 0.3, epsilon = 1e-12);
        assert_eq!(d.pdf(1.5), 0.0);
        assert_eq!(d.pdf(-0.5), 0.0);
    }

    #[test]
    fn test_beta_moments() {
        let d = Beta::new(2.0, 6.0).unwrap();
        assert_relative_eq!(d.mean(), 0.25);
        assert_relative_eq!(d.variance(), 12.0 / (64.0 * 9.0));
    }

    #[test]
    fn test_beta_quantile_symmetric() {
        let d = Beta::new(3.0, 3.0).unwrap();
        assert_relative_eq!(d.quantile(0.5), 0.5, epsilon = 1e-6);
    }
}
