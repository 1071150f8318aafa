//! Log-normal distribution.

use statrs::distribution::{Continuous, ContinuousCDF};

use crate::error::{Error, Result};

/// A log-normal distribution: `exp(N(location, scale^2))`.
///
/// `location` and `scale` are the mean and standard deviation of the
/// underlying normal in log space, not of the distribution itself.
#[derive(Clone, Copy, Debug)]
pub struct LogNormal {
    location: f64,
    scale: f64,
    inner: statrs::distribution::LogNormal,
}

impl LogNormal {
    /// Creates a log-normal distribution.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidParameters` if `location` is not finite or
    /// `scale` is not finite and strictly positive.
    pub fn new(location: f64, scale: f64) -> Result<Self> {
        if !location.is_finite() {
            return Err(Error::InvalidParameters {
                what: "log-normal distribution",
                reason: format!("location must be finite, got {location}"),
            });
        }
        if !scale.is_finite() || scale <= 0.0 {
            return Err(Error::InvalidParameters {
                what: "log-normal distribution",
                reason: format!("scale must be positive, got {scale}"),
            });
        }
        let inner = statrs::distribution::LogNormal::new(location, scale).map_err(|e| {
            Error::InvalidParameters {
                what: "log-normal distribution",
                reason: e.to_string(),
            }
        })?;
        Ok(Self {
            location,
            scale,
            inner,
        })
    }

    /// Mean of the underlying normal in log space.
    #[must_use]
    pub fn location(&self) -> f64 {
        self.location
    }

    /// Standard deviation of the underlying normal in log space.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Density at `x` (0 for `x <= 0`).
    #[must_use]
    pub fn pdf(&self, x: f64) -> f64 {
        if x <= 0.0 { 0.0 } else { self.inner.pdf(x) }
    }

    /// Cumulative probability at `x`.
    #[must_use]
    pub fn cdf(&self, x: f64) -> f64 {
        if x <= 0.0 { 0.0 } else { self.inner.cdf(x) }
    }

    /// Value at cumulative probability `p`.
    #[must_use]
    pub fn quantile(&self, p: f64) -> f64 {
        self.inner.inverse_cdf(p)
    }

    /// Analytic mean `exp(location + scale^2 / 2)`.
    #[must_use]
    pub fn mean(&self) -> f64 {
        (self.location + self.scale * self.scale / 2.0).exp()
    }

    /// Analytic variance `(exp(scale^2) - 1) * exp(2 location + scale^2)`.
    #[must_use]
    pub fn variance(&self) -> f64 {
        let s2 = self.scale * self.scale;
        (s2.exp() - 1.0) * (2.0 * self.location + s2).exp()
    }
}

impl PartialEq for LogNormal {
    #[allow(clippy::float_cmp)]
    fn eq(&self, other: &Self) -> bool {
        self.location == other.location && self.scale == other.scale
    }
}
