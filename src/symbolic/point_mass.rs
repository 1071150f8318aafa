//! Degenerate distribution with all mass at a single value.

use crate::error::{Error, Result};

/// A point mass (Dirac delta): probability 1 at exactly one value.
///
/// Point masses are the degenerate end of several families (a normal with
/// zero standard deviation collapses to one) and the building block of
/// delta mixtures used to express discrete beliefs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointMass {
    value: f64,
}

impl PointMass {
    /// Creates a point mass at `value`.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidParameters` if `value` is not finite.
    pub fn new(value: f64) -> Result<Self> {
        if !value.is_finite() {
            return Err(Error::InvalidParameters {
                what: "point mass",
                reason: format!("value must be finite, got {value}"),
            });
        }
        Ok(Self { value })
    }

    /// The location carrying all probability mass.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Probability mass at `x`: 1 at the point, 0 elsewhere.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn mass(&self, x: f64) -> f64 {
        if x == self.value { 1.0 } else { 0.0 }
    }

    /// Cumulative distribution: a step from 0 to 1 at the point.
    #[must_use]
    pub fn cdf(&self, x: f64) -> f64 {
        if x >= self.value { 1.0 } else { 0.0 }
    }

    /// Every quantile is the point itself.
    #[must_use]
    pub fn quantile(&self, _p: f64) -> f64 {
        self.value
    }
}
