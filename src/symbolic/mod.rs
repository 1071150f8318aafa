//! Closed-form parametric distribution families.
//!
//! [`SymbolicDist`] wraps one struct per family and dispatches density,
//! CDF, quantile, moment, and sampling queries to it. Families with an
//! analytic form stay symbolic for as long as possible; discretization
//! onto a point-set grid happens only when an operation demands an
//! explicit density curve.

mod bernoulli;
mod beta;
mod cauchy;
mod exponential;
mod gamma;
mod log_normal;
mod logistic;
mod normal;
mod point_mass;
mod triangular;
mod uniform;

pub use bernoulli::Bernoulli;
pub use beta::Beta;
pub use cauchy::Cauchy;
pub use exponential::Exponential;
pub use gamma::Gamma;
pub use log_normal::LogNormal;
pub use logistic::Logistic;
pub use normal::Normal;
pub use point_mass::PointMass;
pub use triangular::Triangular;
pub use uniform::Uniform;

use rand::Rng;

use crate::env::Env;
use crate::error::{Error, Result};
use crate::point_set::{PointSetDist, Spike};
use crate::rng_util::unit_open;
use crate::xy::{XyCurve, XyPoint, linspace};

/// Tail probability clipped from each side when an unbounded family is
/// discretized onto a finite grid. The clipped mass is restored by the
/// point set's normalization.
const DISCRETIZE_TAIL: f64 = 1e-4;

/// A closed-form distribution: a family tag plus validated parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SymbolicDist {
    /// All mass at a single value.
    PointMass(PointMass),
    /// Uniform over a bounded interval.
    Uniform(Uniform),
    /// Triangular over a bounded interval.
    Triangular(Triangular),
    /// Normal (Gaussian).
    Normal(Normal),
    /// Log-normal.
    LogNormal(LogNormal),
    /// Exponential.
    Exponential(Exponential),
    /// Beta on `[0, 1]`.
    Beta(Beta),
    /// Gamma on `[0, inf)`.
    Gamma(Gamma),
    /// Cauchy (no finite moments).
    Cauchy(Cauchy),
    /// Logistic.
    Logistic(Logistic),
    /// Bernoulli over `{0, 1}`.
    Bernoulli(Bernoulli),
}

impl SymbolicDist {
    /// A point mass at `value`.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidParameters` if `value` is not finite.
    pub fn point_mass(value: f64) -> Result<Self> {
        PointMass::new(value).map(Self::PointMass)
    }

    /// A uniform distribution over `[low, high]`.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidParameters` for non-finite bounds or
    /// `low >= high`.
    pub fn uniform(low: f64, high: f64) -> Result<Self> {
        Uniform::new(low, high).map(Self::Uniform)
    }

    /// A triangular distribution over `[low, high]` peaking at `mode`.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidParameters` unless `low < high` and `mode`
    /// lies within the interval.
    pub fn triangular(low: f64, mode: f64, high: f64) -> Result<Self> {
        Triangular::new(low, mode, high).map(Self::Triangular)
    }

    /// A normal distribution. A zero standard deviation folds to a point
    /// mass at the mean.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidParameters` if `mean` is not finite or
    /// `std_dev` is negative or not finite.
    #[allow(clippy::float_cmp)]
    pub fn normal(mean: f64, std_dev: f64) -> Result<Self> {
        if std_dev == 0.0 {
            return Self::point_mass(mean);
        }
        Normal::new(mean, std_dev).map(Self::Normal)
    }

    /// A log-normal distribution parameterized in log space.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidParameters` for a non-finite location or a
    /// non-positive scale.
    pub fn log_normal(location: f64, scale: f64) -> Result<Self> {
        LogNormal::new(location, scale).map(Self::LogNormal)
    }

    /// An exponential distribution with the given rate.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidParameters` for a non-positive rate.
    pub fn exponential(rate: f64) -> Result<Self> {
        Exponential::new(rate).map(Self::Exponential)
    }

    /// A beta distribution with the given shape parameters.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidParameters` unless both shapes are positive.
    pub fn beta(alpha: f64, beta: f64) -> Result<Self> {
        Beta::new(alpha, beta).map(Self::Beta)
    }

    /// A gamma distribution with the given shape and scale.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidParameters` unless both parameters are
    /// positive.
    pub fn gamma(shape: f64, scale: f64) -> Result<Self> {
        Gamma::new(shape, scale).map(Self::Gamma)
    }

    /// A Cauchy distribution with the given location and scale.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidParameters` for a non-finite location or a
    /// non-positive scale.
    pub fn cauchy(location: f64, scale: f64) -> Result<Self> {
        Cauchy::new(location, scale).map(Self::Cauchy)
    }

    /// A logistic distribution with the given location and scale.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidParameters` for a non-finite location or a
    /// non-positive scale.
    pub fn logistic(location: f64, scale: f64) -> Result<Self> {
        Logistic::new(location, scale).map(Self::Logistic)
    }

    /// A Bernoulli distribution with success probability `p`.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidParameters` unless `p` is within `[0, 1]`.
    pub fn bernoulli(p: f64) -> Result<Self> {
        Bernoulli::new(p).map(Self::Bernoulli)
    }

    /// The family name, used in error messages.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::PointMass(_) => "point mass",
            Self::Uniform(_) => "uniform",
            Self::Triangular(_) => "triangular",
            Self::Normal(_) => "normal",
            Self::LogNormal(_) => "log-normal",
            Self::Exponential(_) => "exponential",
            Self::Beta(_) => "beta",
            Self::Gamma(_) => "gamma",
            Self::Cauchy(_) => "cauchy",
            Self::Logistic(_) => "logistic",
            Self::Bernoulli(_) => "bernoulli",
        }
    }

    /// Whether the family is purely discrete (its point-set form has no
    /// continuous curve).
    #[must_use]
    pub fn is_discrete(&self) -> bool {
        matches!(self, Self::PointMass(_) | Self::Bernoulli(_))
    }

    /// Density at `x` for continuous families, probability mass at `x`
    /// for discrete ones.
    #[must_use]
    pub fn density_or_mass_at(&self, x: f64) -> f64 {
        match self {
            Self::PointMass(d) => d.mass(x),
            Self::Uniform(d) => d.pdf(x),
            Self::Triangular(d) => d.pdf(x),
            Self::Normal(d) => d.pdf(x),
            Self::LogNormal(d) => d.pdf(x),
            Self::Exponential(d) => d.pdf(x),
            Self::Beta(d) => d.pdf(x),
            Self::Gamma(d) => d.pdf(x),
            Self::Cauchy(d) => d.pdf(x),
            Self::Logistic(d) => d.pdf(x),
            Self::Bernoulli(d) => d.mass(x),
        }
    }

    /// Cumulative probability at `x`.
    #[must_use]
    pub fn cdf(&self, x: f64) -> f64 {
        match self {
            Self::PointMass(d) => d.cdf(x),
            Self::Uniform(d) => d.cdf(x),
            Self::Triangular(d) => d.cdf(x),
            Self::Normal(d) => d.cdf(x),
            Self::LogNormal(d) => d.cdf(x),
            Self::Exponential(d) => d.cdf(x),
            Self::Beta(d) => d.cdf(x),
            Self::Gamma(d) => d.cdf(x),
            Self::Cauchy(d) => d.cdf(x),
            Self::Logistic(d) => d.cdf(x),
            Self::Bernoulli(d) => d.cdf(x),
        }
    }

    /// Value at cumulative probability `p`. The caller guarantees `p` is
    /// within `[0, 1]`.
    #[must_use]
    pub fn quantile(&self, p: f64) -> f64 {
        match self {
            Self::PointMass(d) => d.quantile(p),
            Self::Uniform(d) => d.quantile(p),
            Self::Triangular(d) => d.quantile(p),
            Self::Normal(d) => d.quantile(p),
            Self::LogNormal(d) => d.quantile(p),
            Self::Exponential(d) => d.quantile(p),
            Self::Beta(d) => d.quantile(p),
            Self::Gamma(d) => d.quantile(p),
            Self::Cauchy(d) => d.quantile(p),
            Self::Logistic(d) => d.quantile(p),
            Self::Bernoulli(d) => d.quantile(p),
        }
    }

    /// Analytic mean.
    ///
    /// # Errors
    ///
    /// Returns `Error::Domain` for families without a finite mean
    /// (Cauchy).
    pub fn mean(&self) -> Result<f64> {
        match self {
            Self::PointMass(d) => Ok(d.value()),
            Self::Uniform(d) => Ok(d.mean()),
            Self::Triangular(d) => Ok(d.mean()),
            Self::Normal(d) => Ok(d.mean()),
            Self::LogNormal(d) => Ok(d.mean()),
            Self::Exponential(d) => Ok(d.mean()),
            Self::Beta(d) => Ok(d.mean()),
            Self::Gamma(d) => Ok(d.mean()),
            Self::Cauchy(_) => Err(Error::Domain(
                "the cauchy family has no finite mean".into(),
            )),
            Self::Logistic(d) => Ok(d.mean()),
            Self::Bernoulli(d) => Ok(d.mean()),
        }
    }

    /// Analytic variance.
    ///
    /// # Errors
    ///
    /// Returns `Error::Domain` for families without a finite variance
    /// (Cauchy).
    pub fn variance(&self) -> Result<f64> {
        match self {
            Self::PointMass(_) => Ok(0.0),
            Self::Uniform(d) => Ok(d.variance()),
            Self::Triangular(d) => Ok(d.variance()),
            Self::Normal(d) => Ok(d.variance()),
            Self::LogNormal(d) => Ok(d.variance()),
            Self::Exponential(d) => Ok(d.variance()),
            Self::Beta(d) => Ok(d.variance()),
            Self::Gamma(d) => Ok(d.variance()),
            Self::Cauchy(_) => Err(Error::Domain(
                "the cauchy family has no finite variance".into(),
            )),
            Self::Logistic(d) => Ok(d.variance()),
            Self::Bernoulli(d) => Ok(d.variance()),
        }
    }

    /// Closure of the support as `(min, max)` bounds; unbounded sides are
    /// infinite.
    #[must_use]
    pub fn support(&self) -> (f64, f64) {
        match self {
            Self::PointMass(d) => (d.value(), d.value()),
            Self::Uniform(d) => (d.low(), d.high()),
            Self::Triangular(d) => (d.low(), d.high()),
            Self::Normal(_) | Self::Cauchy(_) | Self::Logistic(_) => {
                (f64::NEG_INFINITY, f64::INFINITY)
            }
            Self::LogNormal(_) | Self::Exponential(_) | Self::Gamma(_) => (0.0, f64::INFINITY),
            Self::Beta(_) | Self::Bernoulli(_) => (0.0, 1.0),
        }
    }

    /// Draws one sample via the inverse CDF.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        match self {
            Self::PointMass(d) => d.value(),
            _ => self.quantile(unit_open(rng)),
        }
    }

    /// Draws `n` independent samples.
    pub fn sample_n<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> Vec<f64> {
        (0..n).map(|_| self.sample(rng)).collect()
    }

    /// Discretizes the family onto a point-set grid of
    /// `env.point_count()` points.
    ///
    /// Discrete families become pure spikes. Bounded continuous families
    /// use their exact support; unbounded ones clip a `1e-4` tail on each
    /// side and renormalize.
    ///
    /// # Errors
    ///
    /// Returns `Error::Unrepresentable` if the family has no finite grid
    /// range under the budget.
    pub fn to_point_set(&self, env: &Env) -> Result<PointSetDist> {
        match self {
            Self::PointMass(d) => {
                PointSetDist::new(vec![Spike::new(d.value(), 1.0)], XyCurve::empty())
            }
            Self::Bernoulli(d) => PointSetDist::new(
                vec![Spike::new(0.0, 1.0 - d.p()), Spike::new(1.0, d.p())],
                XyCurve::empty(),
            ),
            Self::Uniform(d) => self.grid_on(d.low(), d.high(), None, env),
            Self::Triangular(d) => self.grid_on(d.low(), d.high(), Some(d.mode()), env),
            _ => {
                let lo = self.quantile(DISCRETIZE_TAIL);
                let hi = self.quantile(1.0 - DISCRETIZE_TAIL);
                if !lo.is_finite() || !hi.is_finite() || lo >= hi {
                    return Err(Error::Unrepresentable(format!(
                        "{} distribution has no finite discretization range",
                        self.name()
                    )));
                }
                self.grid_on(lo, hi, None, env)
            }
        }
    }

    /// Evaluates the density on a regular grid over `[lo, hi]`, inserting
    /// `extra` as an exact grid point when given (so piecewise-linear
    /// peaks are represented exactly), and normalizes the result.
    #[allow(clippy::float_cmp)]
    fn grid_on(&self, lo: f64, hi: f64, extra: Option<f64>, env: &Env) -> Result<PointSetDist> {
        let mut grid = linspace(lo, hi, env.point_count());
        if let Some(extra) = extra
            && grid.iter().all(|&x| x != extra)
        {
            grid.push(extra);
            grid.sort_by(f64::total_cmp);
        }
        let points: Vec<XyPoint> = grid
            .into_iter()
            .map(|x| XyPoint::new(x, self.density_or_mass_at(x)))
            .collect();
        trace_debug!(
            family = self.name(),
            points = points.len(),
            "discretized symbolic distribution"
        );
        PointSetDist::new(Vec::new(), XyCurve::new(points)?)
    }
}
