//! Triangular distribution.

use statrs::distribution::{Continuous, ContinuousCDF};

use crate::error::{Error, Result};

/// A triangular distribution over `[low, high]` peaking at `mode`.
#[derive(Clone, Copy, Debug)]
pub struct Triangular {
    low: f64,
    mode: f64,
    high: f64,
    inner: statrs::distribution::Triangular,
}

impl Triangular {
    /// Creates a triangular distribution.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidParameters` unless all parameters are finite,
    /// `low < high`, and `mode` lies within `[low, high]`.
    pub fn new(low: f64, mode: f64, high: f64) -> Result<Self> {
        if !low.is_finite() || !mode.is_finite() || !high.is_finite() {
            return Err(Error::InvalidParameters {
                what: "triangular distribution",
                reason: format!("parameters must be finite, got ({low}, {mode}, {high})"),
            });
        }
        if low >= high {
            return Err(Error::InvalidParameters {
                what: "triangular distribution",
                reason: format!("low must be less than high, got [{low}, {high}]"),
            });
        }
        if mode < low || mode > high {
            return Err(Error::InvalidParameters {
                what: "triangular distribution",
                reason: format!("mode {mode} outside [{low}, {high}]"),
            });
        }
        let inner = statrs::distribution::Triangular::new(low, high, mode).map_err(|e| {
            Error::InvalidParameters {
                what: "triangular distribution",
                reason: e.to_string(),
            }
        })?;
        Ok(Self {
            low,
            mode,
            high,
            inner,
        })
    }

    /// Lower bound.
    #[must_use]
    pub fn low(&self) -> f64 {
        self.low
    }

    /// The mode (peak location).
    #[must_use]
    pub fn mode(&self) -> f64 {
        self.mode
    }

    /// Upper bound.
    #[must_use]
    pub fn high(&self) -> f64 {
        self.high
    }

    /// Density at `x`.
    #[must_use]
    pub fn pdf(&self, x: f64) -> f64 {
        if x < self.low || x > self.high {
            0.0
        } else {
            self.inner.pdf(x)
        }
    }

    /// Cumulative probability at `x`.
    #[must_use]
    pub fn cdf(&self, x: f64) -> f64 {
        if x <= self.low {
            0.0
        } else if x >= self.high {
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

    /// Analytic mean `(low + mode + high) / 3`.
    #[must_use]
    pub fn mean(&self) -> f64 {
        (self.low + self.mode + self.high) / 3.0
    }

    /// Analytic variance.
    #[must_use]
    pub fn variance(&self) -> f64 {
        let (a, c, b) = (self.low, self.mode, self.high);
        (a * a + b * b + c * c - a * b - a * c - b * c) / 18.0
    }
}

impl PartialEq for Triangular {
    #[allow(clippy::float_cmp)]
    fn eq(&self, other: &Self) -> bool {
        self.low == other.low && self.mode == other.mode && self.high == other.high
    }
}
