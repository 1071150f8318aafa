//! The distribution value algebra.
//!
//! [`Distribution`] is the closed sum over the three interchangeable
//! representations. Every operation is defined for all three, directly or
//! through the conversion layer, and no variant is privileged: an
//! interpreter can hand any of them to [`mixture`], the arithmetic
//! combinators, or [`log_score_scalar_answer`] and get the same contract.

mod arithmetic;
mod mixture;
mod score;

pub use arithmetic::{BinaryOp, UnaryOp, binary_op, unary_op};
pub use mixture::mixture;
pub use score::{log_score_dist_answer, log_score_scalar_answer};

use rand::Rng;

use crate::env::Env;
use crate::error::{Error, Result};
use crate::point_set::PointSetDist;
use crate::sample_set::SampleSetDist;
use crate::symbolic::SymbolicDist;

/// A probability distribution in one of three representations.
///
/// Values are immutable; operations return new values or a typed error.
#[derive(Clone, Debug, PartialEq)]
pub enum Distribution {
    /// Closed-form family with parameters.
    Symbolic(SymbolicDist),
    /// Monte Carlo draws.
    SampleSet(SampleSetDist),
    /// Discretized spikes plus density curve.
    PointSet(PointSetDist),
}

impl From<SymbolicDist> for Distribution {
    fn from(dist: SymbolicDist) -> Self {
        Self::Symbolic(dist)
    }
}

impl From<SampleSetDist> for Distribution {
    fn from(dist: SampleSetDist) -> Self {
        Self::SampleSet(dist)
    }
}

impl From<PointSetDist> for Distribution {
    fn from(dist: PointSetDist) -> Self {
        Self::PointSet(dist)
    }
}

impl Distribution {
    /// Converts to the point-set representation.
    ///
    /// Symbolic input discretizes onto `env.point_count()` grid points;
    /// sample sets go through density estimation; point sets pass through
    /// unchanged unless their grid exceeds the budget, in which case the
    /// curve is resampled down onto `env.point_count()` points. The result
    /// always satisfies the total-mass invariant.
    ///
    /// # Errors
    ///
    /// Returns `Error::InsufficientSamples` for a sample set below the
    /// density-estimation minimum, or `Error::Unrepresentable` for a
    /// symbolic family without a finite grid.
    pub fn to_point_set(&self, env: &Env) -> Result<PointSetDist> {
        match self {
            Self::Symbolic(d) => d.to_point_set(env),
            Self::SampleSet(d) => d.to_point_set(env),
            Self::PointSet(d) => d.regrid(env.point_count()),
        }
    }

    /// Converts to the sample-set representation by drawing
    /// `env.sample_count()` values. Sample sets pass through unchanged.
    ///
    /// # Errors
    ///
    /// Currently infallible for valid inputs but typed for parity with
    /// the other conversions.
    pub fn to_sample_set<R: Rng + ?Sized>(&self, env: &Env, rng: &mut R) -> Result<SampleSetDist> {
        match self {
            Self::SampleSet(d) => Ok(d.clone()),
            _ => SampleSetDist::new(self.sample_n(env.sample_count(), rng)),
        }
    }

    /// Draws `n` values from any representation: symbolically via the
    /// inverse CDF, from a sample set by bootstrap, from a point set by
    /// inverse-transform over the discretized CDF.
    pub fn sample_n<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> Vec<f64> {
        match self {
            Self::Symbolic(d) => d.sample_n(n, rng),
            Self::SampleSet(d) => d.resample(n, rng),
            Self::PointSet(d) => d.sample_n(n, rng),
        }
    }

    /// Density at `x` for continuous parts, probability mass for exact
    /// discrete matches. Sample sets are converted first, which is where
    /// the environment's grid budget applies.
    ///
    /// # Errors
    ///
    /// Propagates a failed sample-set conversion.
    pub fn density_or_mass_at(&self, x: f64, env: &Env) -> Result<f64> {
        match self {
            Self::Symbolic(d) => Ok(d.density_or_mass_at(x)),
            Self::SampleSet(d) => Ok(d.to_point_set(env)?.density_or_mass_at(x)),
            Self::PointSet(d) => Ok(d.density_or_mass_at(x)),
        }
    }

    /// Cumulative probability at `x`: analytic for symbolic forms,
    /// empirical for sample sets, integrated for point sets.
    #[must_use]
    pub fn cdf(&self, x: f64) -> f64 {
        match self {
            Self::Symbolic(d) => d.cdf(x),
            Self::SampleSet(d) => d.cdf(x),
            Self::PointSet(d) => d.cdf(x),
        }
    }

    /// Value at cumulative probability `p`.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidParameters` unless `p` is within `[0, 1]`.
    pub fn quantile(&self, p: f64) -> Result<f64> {
        if !p.is_finite() || !(0.0..=1.0).contains(&p) {
            return Err(Error::InvalidParameters {
                what: "quantile",
                reason: format!("probability must be within [0, 1], got {p}"),
            });
        }
        Ok(match self {
            Self::Symbolic(d) => d.quantile(p),
            Self::SampleSet(d) => d.quantile(p),
            Self::PointSet(d) => d.quantile(p),
        })
    }

    /// Mean of the distribution.
    ///
    /// # Errors
    ///
    /// Returns `Error::Domain` for families without a finite mean.
    pub fn mean(&self) -> Result<f64> {
        match self {
            Self::Symbolic(d) => d.mean(),
            Self::SampleSet(d) => Ok(d.mean()),
            Self::PointSet(d) => Ok(d.mean()),
        }
    }

    /// Variance of the distribution.
    ///
    /// # Errors
    ///
    /// Returns `Error::Domain` for families without a finite variance.
    pub fn variance(&self) -> Result<f64> {
        match self {
            Self::Symbolic(d) => d.variance(),
            Self::SampleSet(d) => Ok(d.variance()),
            Self::PointSet(d) => Ok(d.variance()),
        }
    }

    /// Standard deviation of the distribution.
    ///
    /// # Errors
    ///
    /// Returns `Error::Domain` for families without a finite variance.
    pub fn std_dev(&self) -> Result<f64> {
        self.variance().map(f64::sqrt)
    }

    /// Closure of the support as `(min, max)`; unbounded sides are
    /// infinite.
    #[must_use]
    pub fn support(&self) -> (f64, f64) {
        match self {
            Self::Symbolic(d) => d.support(),
            Self::SampleSet(d) => (d.min(), d.max()),
            Self::PointSet(d) => (d.x_min(), d.x_max()),
        }
    }

    /// Restricts the distribution to `[lo, hi]` and renormalizes.
    /// Unbounded sides may be left open with `None`.
    ///
    /// Uniform and point-mass forms truncate analytically; other symbolic
    /// families are discretized first. Sample sets keep only the samples
    /// inside the window.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidParameters` for an empty window and
    /// `Error::Domain` when no probability mass lies inside it.
    pub fn truncate(&self, lo: Option<f64>, hi: Option<f64>, env: &Env) -> Result<Self> {
        let left = lo.unwrap_or(f64::NEG_INFINITY);
        let right = hi.unwrap_or(f64::INFINITY);
        if left >= right || left.is_nan() || right.is_nan() {
            return Err(Error::InvalidParameters {
                what: "truncation window",
                reason: format!("window [{left}, {right}] is empty"),
            });
        }
        match self {
            Self::Symbolic(SymbolicDist::PointMass(d)) => {
                if d.value() >= left && d.value() <= right {
                    Ok(self.clone())
                } else {
                    Err(Error::Domain(format!(
                        "no probability mass within [{left}, {right}]"
                    )))
                }
            }
            Self::Symbolic(SymbolicDist::Uniform(d)) => {
                let new_low = d.low().max(left);
                let new_high = d.high().min(right);
                if new_low >= new_high {
                    return Err(Error::Domain(format!(
                        "no probability mass within [{left}, {right}]"
                    )));
                }
                SymbolicDist::uniform(new_low, new_high).map(Self::Symbolic)
            }
            Self::Symbolic(d) => d
                .to_point_set(env)?
                .truncate(lo, hi)
                .map(Self::PointSet),
            Self::SampleSet(d) => {
                let kept: Vec<f64> = d
                    .samples()
                    .iter()
                    .copied()
                    .filter(|&s| s >= left && s <= right)
                    .collect();
                if kept.is_empty() {
                    return Err(Error::Domain(format!(
                        "no samples within [{left}, {right}]"
                    )));
                }
                SampleSetDist::new(kept).map(Self::SampleSet)
            }
            Self::PointSet(d) => d.truncate(lo, hi).map(Self::PointSet),
        }
    }

    /// Renders the density as an eight-level Unicode sparkline with
    /// `buckets` characters, a quick textual look at where the mass sits.
    ///
    /// # Errors
    ///
    /// Propagates a failed point-set conversion.
    pub fn to_sparkline(&self, buckets: usize, env: &Env) -> Result<String> {
        Ok(self.to_point_set(env)?.as_shape().sparkline(buckets))
    }
}
