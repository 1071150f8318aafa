//! Evaluation environment: the numeric budgets every operation runs under.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default number of samples drawn when simulating a distribution.
pub const DEFAULT_SAMPLE_COUNT: usize = 10_000;

/// Default number of `(x, density)` pairs produced when discretizing a
/// continuous curve.
pub const DEFAULT_POINT_COUNT: usize = 1_000;

/// Default numeric tolerance for mass and comparison checks.
pub const DEFAULT_TOLERANCE: f64 = 1e-7;

/// Immutable evaluation environment.
///
/// Every operation that samples or discretizes takes an `Env` by reference;
/// an operation's numeric output is a pure function of its inputs and the
/// environment. There is no process-wide configuration.
///
/// # Examples
///
/// ```
/// use distops::Env;
///
/// let env = Env::default();
/// assert_eq!(env.sample_count(), 10_000);
///
/// let small = Env::new(500, 100).unwrap().with_tolerance(1e-6).unwrap();
/// assert_eq!(small.point_count(), 100);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Env {
    sample_count: usize,
    point_count: usize,
    tolerance: f64,
}

impl Env {
    /// Creates an environment with the given budgets and the default
    /// tolerance.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidParameters` if `sample_count` is zero or
    /// `point_count` is below 4 (two points per part is not a curve).
    pub fn new(sample_count: usize, point_count: usize) -> Result<Self> {
        if sample_count == 0 {
            return Err(Error::InvalidParameters {
                what: "environment",
                reason: "sample_count must be positive".into(),
            });
        }
        if point_count < 4 {
            return Err(Error::InvalidParameters {
                what: "environment",
                reason: format!("point_count must be at least 4, got {point_count}"),
            });
        }
        Ok(Self {
            sample_count,
            point_count,
            tolerance: DEFAULT_TOLERANCE,
        })
    }

    /// Returns a copy with a different sample budget.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidParameters` if `sample_count` is zero.
    pub fn with_sample_count(mut self, sample_count: usize) -> Result<Self> {
        if sample_count == 0 {
            return Err(Error::InvalidParameters {
                what: "environment",
                reason: "sample_count must be positive".into(),
            });
        }
        self.sample_count = sample_count;
        Ok(self)
    }

    /// Returns a copy with a different discretization budget.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidParameters` if `point_count` is below 4.
    pub fn with_point_count(mut self, point_count: usize) -> Result<Self> {
        if point_count < 4 {
            return Err(Error::InvalidParameters {
                what: "environment",
                reason: format!("point_count must be at least 4, got {point_count}"),
            });
        }
        self.point_count = point_count;
        Ok(self)
    }

    /// Returns a copy with a different comparison tolerance.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidParameters` if `tolerance` is not finite and
    /// strictly positive.
    pub fn with_tolerance(mut self, tolerance: f64) -> Result<Self> {
        if !tolerance.is_finite() || tolerance <= 0.0 {
            return Err(Error::InvalidParameters {
                what: "environment",
                reason: format!("tolerance must be finite and > 0, got {tolerance}"),
            });
        }
        self.tolerance = tolerance;
        Ok(self)
    }

    /// Number of samples drawn when simulating.
    #[must_use]
    pub fn sample_count(&self) -> usize {
        self.sample_count
    }

    /// Number of grid points produced when discretizing a curve.
    #[must_use]
    pub fn point_count(&self) -> usize {
        self.point_count
    }

    /// Numeric tolerance for mass and comparison checks.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }
}

impl Default for Env {
    fn default() -> Self {
        Self {
            sample_count: DEFAULT_SAMPLE_COUNT,
            point_count: DEFAULT_POINT_COUNT,
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}
