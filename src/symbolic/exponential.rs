//! Exponential distribution.

use statrs::distribution::{Continuous, ContinuousCDF};

use crate::error::{Error, Result};

/// An exponential distribution with rate `rate`.
#[derive(Clone, Copy, Debug)]
pub struct Exponential {
    rate: f64,
    inner: statrs::distribution::Exp,
}

impl Exponential {
    /// Creates an exponential distribution.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidParameters` if `rate` is not finite and
    /// strictly positive.
    pub fn new(rate: f64) -> Result<Self> {
        if !rate.is_finite() || rate <= 0.0 {
            return Err(Error::InvalidParameters {
                what: "exponential distribution",
                reason: format!("rate must be positive, got {rate}"),
            });
        }
        let inner =
            statrs::distribution::Exp::new(rate).map_err(|e| Error::InvalidParameters {
                what: "exponential distribution",
                reason: e.to_string(),
            })?;
        Ok(Self { rate, inner })
    }

    /// The rate parameter.
    #[must_use]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Density at `x` (0 for `x < 0`).
    #[must_use]
    pub fn pdf(&self, x: f64) -> f64 {
        if x < 0.0 { 0.0 } else { self.inner.pdf(x) }
    }

    /// Cumulative probability at `x`.
    #[must_use]
    pub fn cdf(&self, x: f64) -> f64 {
        if x < 0.0 { 0.0 } else { self.inner.cdf(x) }
    }

    /// Value at cumulative probability `p`.
    #[must_use]
    pub fn quantile(&self, p: f64) -> f64 {
        self.inner.inverse_cdf(p)
    }

    /// Analytic mean `1 / rate`.
    #[must_use]
    pub fn mean(&self) -> f64 {
        1.0 / self.rate
    }

    /// Analytic variance `1 / rate^2`.
    #[must_use]
    pub fn variance(&self) -> f64 {
        1.0 / (self.rate * self.rate)
    }
}

impl PartialEq for Exponential {
    #[allow(clippy::float_cmp)]
    fn eq(&self, other: &Self) -> bool {
        self.rate == other.rate
    }
}
