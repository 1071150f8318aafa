//! Bernoulli distribution.

use crate::error::{Error, Result};

/// A Bernoulli distribution: mass `p` at 1 and `1 - p` at 0.
///
/// Purely discrete; its point-set form has two spikes and no continuous
/// curve (one spike when `p` is exactly 0 or 1).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bernoulli {
    p: f64,
}

impl Bernoulli {
    /// Creates a Bernoulli distribution with success probability `p`.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidParameters` unless `p` is within `[0, 1]`.
    pub fn new(p: f64) -> Result<Self> {
        if !p.is_finite() || !(0.0..=1.0).contains(&p) {
            return Err(Error::InvalidParameters {
                what: "bernoulli distribution",
                reason: format!("probability must be within [0, 1], got {p}"),
            });
        }
        Ok(Self { p })
    }

    /// The success probability.
    #[must_use]
    pub fn p(&self) -> f64 {
        self.p
    }

    /// Probability mass at `x`: defined only at exactly 0 and 1.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn mass(&self, x: f64) -> f64 {
        if x == 0.0 {
            1.0 - self.p
        } else if x == 1.0 {
            self.p
        } else {
            0.0
        }
    }

    /// Cumulative probability at `x`.
    #[must_use]
    pub fn cdf(&self, x: f64) -> f64 {
        if x < 0.0 {
            0.0
        } else if x < 1.0 {
            1.0 - self.p
        } else {
            1.0
        }
    }

    /// Value at cumulative probability `q`: 0 below `1 - p`, else 1.
    #[must_use]
    pub fn quantile(&self, q: f64) -> f64 {
        if q <= 1.0 - self.p { 0.0 } else { 1.0 }
    }

    /// Analytic mean `p`.
    #[must_use]
    pub fn mean(&self) -> f64 {
        self.p
    }

    /// Analytic variance `p (1 - p)`.
    #[must_use]
    pub fn variance(&self) -> f64 {
        self.p * (1.0 - self.p)
    }
}
