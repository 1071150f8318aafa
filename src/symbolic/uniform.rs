//! Continuous uniform distribution.

use statrs::distribution::{Continuous, ContinuousCDF};

use crate::error::{Error, Result};

/// A uniform distribution over `[low, high]`.
#[derive(Clone, Copy, Debug)]
pub struct Uniform {
    low: f64,
    high: f64,
    inner: statrs::distribution::Uniform,
}

impl Uniform {
    /// Creates a uniform distribution over `[low, high]`.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidParameters` if either bound is non-finite or
    /// `low >= high`.
    pub fn new(low: f64, high: f64) -> Result<Self> {
        if !low.is_finite() || !high.is_finite() {
            return Err(Error::InvalidParameters {
                what: "uniform distribution",
                reason: format!("bounds must be finite, got [{low}, {high}]"),
            });
        }
        if low >= high {
            return Err(Error::InvalidParameters {
                what: "uniform distribution",
                reason: format!("low must be less than high, got [{low}, {high}]"),
            });
        }
        let inner = statrs::distribution::Uniform::new(low, high).map_err(|e| {
            Error::InvalidParameters {
                what: "uniform distribution",
                reason: e.to_string(),
            }
        })?;
        Ok(Self { low, high, inner })
    }

    /// Lower bound (inclusive).
    #[must_use]
    pub fn low(&self) -> f64 {
        self.low
    }

    /// Upper bound (inclusive).
    #[must_use]
    pub fn high(&self) -> f64 {
        self.high
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

    /// Analytic mean `(low + high) / 2`.
    #[must_use]
    pub fn mean(&self) -> f64 {
        (self.low + self.high) / 2.0
    }

    /// Analytic variance `(high - low)^2 / 12`.
    #[must_use]
    pub fn variance(&self) -> f64 {
        let width = self.high - self.low;
        width * width / 12.0
    }
}

impl PartialEq for Uniform {
    #[allow(clippy::float_cmp)]
    fn eq(&self, other: &Self) -> bool {
        self.low == other.low && self.high == other.high
    }
}
