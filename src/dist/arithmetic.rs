//! Arithmetic combinators over distributions.
//!
//! Pairs with a known closed form (point masses, sums of normals, products
//! of log-normals, scalar shifts and scales) stay symbolic. Everything else
//! falls back to a sampling convolution: draw `env.sample_count()` values
//! from each operand, combine them pointwise, and return the result as a
//! sample set.

use rand::Rng;

use crate::dist::Distribution;
use crate::env::Env;
use crate::error::{Error, Result};
use crate::point_set::{PointSetDist, Spike};
use crate::sample_set::SampleSetDist;
use crate::symbolic::SymbolicDist;
use crate::xy::{XyCurve, XyPoint};

/// A binary operation on two distributions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinaryOp {
    /// Sum of independent draws.
    Add,
    /// Difference of independent draws.
    Subtract,
    /// Product of independent draws.
    Multiply,
    /// Quotient of independent draws.
    Divide,
    /// Left operand raised to the right operand.
    Power,
    /// Logarithm of the left operand in the base of the right operand.
    LogBase,
}

impl BinaryOp {
    /// Applies the operation to a pair of scalar draws.
    #[must_use]
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Subtract => lhs - rhs,
            Self::Multiply => lhs * rhs,
            Self::Divide => lhs / rhs,
            Self::Power => lhs.powf(rhs),
            Self::LogBase => lhs.log(rhs),
        }
    }

    /// Human-readable operation name for error messages.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Add => "addition",
            Self::Subtract => "subtraction",
            Self::Multiply => "multiplication",
            Self::Divide => "division",
            Self::Power => "power",
            Self::LogBase => "logarithm",
        }
    }
}

/// A unary operation on a distribution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnaryOp {
    /// Mirror around zero.
    Negate,
    /// Natural exponential of each draw.
    Exp,
    /// Natural logarithm of each draw.
    Ln,
}

impl UnaryOp {
    /// Applies the operation to a scalar draw.
    #[must_use]
    pub fn apply(self, value: f64) -> f64 {
        match self {
            Self::Negate => -value,
            Self::Exp => value.exp(),
            Self::Ln => value.ln(),
        }
    }

    /// Human-readable operation name for error messages.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Negate => "negation",
            Self::Exp => "exponential",
            Self::Ln => "logarithm",
        }
    }
}

/// Combines two distributions under `op`, treating their draws as
/// independent.
///
/// Symbolic operands are combined in closed form when one exists; the
/// result then stays symbolic and costs no sampling. All other pairs use a
/// sampling convolution under the environment's sample budget, so the
/// result is seed-dependent.
///
/// # Errors
///
/// Returns `Error::Domain` when the divisor has probability mass at zero,
/// when a logarithm sees support at or below zero, or when the combination
/// produces non-finite values (overflow, fractional powers of negatives).
pub fn binary_op<R: Rng + ?Sized>(
    op: BinaryOp,
    lhs: &Distribution,
    rhs: &Distribution,
    env: &Env,
    rng: &mut R,
) -> Result<Distribution> {
    if let (Distribution::Symbolic(a), Distribution::Symbolic(b)) = (lhs, rhs)
        && let Some(closed) = closed_form(op, *a, *b)?
    {
        trace_debug!(
            op = op.name(),
            family = closed.name(),
            "combined distributions in closed form"
        );
        return Ok(Distribution::Symbolic(closed));
    }

    match op {
        BinaryOp::Divide if spans_zero(rhs) => {
            return Err(Error::Domain(
                "division by a distribution with probability mass at zero".into(),
            ));
        }
        BinaryOp::LogBase
            if has_mass_at_or_below_zero(lhs) || has_mass_at_or_below_zero(rhs) =>
        {
            return Err(Error::Domain(
                "logarithm requires strictly positive support".into(),
            ));
        }
        _ => {}
    }

    let n = env.sample_count();
    let xs = lhs.sample_n(n, rng);
    let ys = rhs.sample_n(n, rng);
    let combined: Vec<f64> = xs
        .iter()
        .zip(&ys)
        .map(|(&a, &b)| op.apply(a, b))
        .collect();
    if combined.iter().any(|v| !v.is_finite()) {
        return Err(Error::Domain(format!(
            "{} produced non-finite samples",
            op.name()
        )));
    }
    trace_debug!(op = op.name(), samples = n, "combined distributions by convolution");
    SampleSetDist::new(combined).map(Distribution::SampleSet)
}

/// Applies a unary operation to a distribution.
///
/// Negation is exact for the symmetric and bounded symbolic families and
/// for point sets; `exp` of a normal and `ln` of a log-normal move between
/// those two families in closed form. Sample sets are transformed in
/// place. Everything else samples under the environment's budget.
///
/// # Errors
///
/// Returns `Error::Domain` when `ln` sees support at or below zero or the
/// transform produces non-finite values.
pub fn unary_op<R: Rng + ?Sized>(
    op: UnaryOp,
    dist: &Distribution,
    env: &Env,
    rng: &mut R,
) -> Result<Distribution> {
    use SymbolicDist as S;
    match (op, dist) {
        (UnaryOp::Negate, Distribution::Symbolic(s)) => match s {
            S::PointMass(p) => SymbolicDist::point_mass(-p.value()).map(Distribution::Symbolic),
            S::Normal(n) => {
                SymbolicDist::normal(-n.mean(), n.std_dev()).map(Distribution::Symbolic)
            }
            S::Uniform(u) => {
                SymbolicDist::uniform(-u.high(), -u.low()).map(Distribution::Symbolic)
            }
            S::Triangular(t) => SymbolicDist::triangular(-t.high(), -t.mode(), -t.low())
                .map(Distribution::Symbolic),
            S::Cauchy(c) => {
                SymbolicDist::cauchy(-c.location(), c.scale()).map(Distribution::Symbolic)
            }
            S::Logistic(l) => {
                SymbolicDist::logistic(-l.location(), l.scale()).map(Distribution::Symbolic)
            }
            _ => sample_unary(op, dist, env, rng),
        },
        (UnaryOp::Exp, Distribution::Symbolic(S::Normal(n))) => {
            SymbolicDist::log_normal(n.mean(), n.std_dev()).map(Distribution::Symbolic)
        }
        (UnaryOp::Ln, Distribution::Symbolic(S::LogNormal(l))) => {
            SymbolicDist::normal(l.location(), l.scale()).map(Distribution::Symbolic)
        }
        (_, Distribution::Symbolic(S::PointMass(p))) => {
            unary_scalar(op, p.value()).map(Distribution::Symbolic)
        }
        (UnaryOp::Negate, Distribution::PointSet(ps)) => {
            negate_point_set(ps).map(Distribution::PointSet)
        }
        (_, Distribution::SampleSet(ss)) => {
            if op == UnaryOp::Ln && has_mass_at_or_below_zero(dist) {
                return Err(Error::Domain(
                    "logarithm requires strictly positive support".into(),
                ));
            }
            ss.map(|v| op.apply(v)).map(Distribution::SampleSet)
        }
        _ => {
            if op == UnaryOp::Ln && has_mass_at_or_below_zero(dist) {
                return Err(Error::Domain(
                    "logarithm requires strictly positive support".into(),
                ));
            }
            sample_unary(op, dist, env, rng)
        }
    }
}

fn closed_form(op: BinaryOp, a: SymbolicDist, b: SymbolicDist) -> Result<Option<SymbolicDist>> {
    use SymbolicDist as S;
    #[allow(clippy::float_cmp)]
    let dist = match (op, a, b) {
        (_, S::PointMass(x), S::PointMass(y)) => point_scalar(op, x.value(), y.value())?,
        (BinaryOp::Add, S::Normal(x), S::Normal(y)) => {
            SymbolicDist::normal(x.mean() + y.mean(), x.std_dev().hypot(y.std_dev()))?
        }
        (BinaryOp::Subtract, S::Normal(x), S::Normal(y)) => {
            SymbolicDist::normal(x.mean() - y.mean(), x.std_dev().hypot(y.std_dev()))?
        }
        (BinaryOp::Add, S::Normal(n), S::PointMass(c))
        | (BinaryOp::Add, S::PointMass(c), S::Normal(n)) => {
            SymbolicDist::normal(n.mean() + c.value(), n.std_dev())?
        }
        (BinaryOp::Subtract, S::Normal(n), S::PointMass(c)) => {
            SymbolicDist::normal(n.mean() - c.value(), n.std_dev())?
        }
        (BinaryOp::Subtract, S::PointMass(c), S::Normal(n)) => {
            SymbolicDist::normal(c.value() - n.mean(), n.std_dev())?
        }
        (BinaryOp::Multiply, S::Normal(n), S::PointMass(c))
        | (BinaryOp::Multiply, S::PointMass(c), S::Normal(n)) => {
            if c.value() == 0.0 {
                SymbolicDist::point_mass(0.0)?
            } else {
                SymbolicDist::normal(n.mean() * c.value(), n.std_dev() * c.value().abs())?
            }
        }
        (BinaryOp::Divide, S::Normal(n), S::PointMass(c)) => {
            if c.value() == 0.0 {
                return Err(division_by_zero());
            }
            SymbolicDist::normal(n.mean() / c.value(), n.std_dev() / c.value().abs())?
        }
        (BinaryOp::Multiply, S::LogNormal(x), S::LogNormal(y)) => {
            SymbolicDist::log_normal(x.location() + y.location(), x.scale().hypot(y.scale()))?
        }
        (BinaryOp::Divide, S::LogNormal(x), S::LogNormal(y)) => {
            SymbolicDist::log_normal(x.location() - y.location(), x.scale().hypot(y.scale()))?
        }
        (BinaryOp::Multiply, S::LogNormal(l), S::PointMass(c))
        | (BinaryOp::Multiply, S::PointMass(c), S::LogNormal(l))
            if c.value() > 0.0 =>
        {
            SymbolicDist::log_normal(l.location() + c.value().ln(), l.scale())?
        }
        (BinaryOp::Divide, S::LogNormal(l), S::PointMass(c)) if c.value() > 0.0 => {
            SymbolicDist::log_normal(l.location() - c.value().ln(), l.scale())?
        }
        (BinaryOp::Divide, S::PointMass(c), S::LogNormal(l)) if c.value() > 0.0 => {
            SymbolicDist::log_normal(c.value().ln() - l.location(), l.scale())?
        }
        (BinaryOp::Power, S::LogNormal(l), S::PointMass(c)) => {
            if c.value() == 0.0 {
                SymbolicDist::point_mass(1.0)?
            } else {
                SymbolicDist::log_normal(l.location() * c.value(), l.scale() * c.value().abs())?
            }
        }
        _ => return Ok(None),
    };
    Ok(Some(dist))
}

#[allow(clippy::float_cmp)]
fn point_scalar(op: BinaryOp, lhs: f64, rhs: f64) -> Result<SymbolicDist> {
    if op == BinaryOp::Divide && rhs == 0.0 {
        return Err(division_by_zero());
    }
    let value = op.apply(lhs, rhs);
    if !value.is_finite() {
        return Err(Error::Domain(format!(
            "{} of point masses {lhs} and {rhs} has no finite value",
            op.name()
        )));
    }
    SymbolicDist::point_mass(value)
}

fn unary_scalar(op: UnaryOp, value: f64) -> Result<SymbolicDist> {
    let out = op.apply(value);
    if !out.is_finite() {
        return Err(Error::Domain(format!(
            "{} of a point mass at {value} has no finite value",
            op.name()
        )));
    }
    SymbolicDist::point_mass(out)
}

fn division_by_zero() -> Error {
    Error::Domain("division by a point mass at zero".into())
}

/// Whether dividing by this distribution hits zero: either the support
/// strictly spans it, or the support touches it with positive density or
/// mass at the boundary.
#[allow(clippy::float_cmp)]
fn spans_zero(divisor: &Distribution) -> bool {
    let (lo, hi) = divisor.support();
    if lo > 0.0 || hi < 0.0 {
        return false;
    }
    if lo < 0.0 && hi > 0.0 {
        return true;
    }
    match divisor {
        Distribution::Symbolic(d) => d.density_or_mass_at(0.0) > 0.0,
        Distribution::SampleSet(d) => d.samples().iter().any(|&v| v == 0.0),
        Distribution::PointSet(d) => d.density_or_mass_at(0.0) > 0.0,
    }
}

/// Whether a logarithm of this distribution can see a non-positive draw:
/// support below zero, or an actual probability spike at zero. A
/// continuous density touching zero at the boundary is fine since draws
/// stay strictly inside the support.
#[allow(clippy::float_cmp)]
fn has_mass_at_or_below_zero(dist: &Distribution) -> bool {
    let (lo, _) = dist.support();
    if lo < 0.0 {
        return true;
    }
    if lo > 0.0 {
        return false;
    }
    match dist {
        Distribution::Symbolic(d) => d.is_discrete() && d.density_or_mass_at(0.0) > 0.0,
        Distribution::SampleSet(d) => d.samples().iter().any(|&v| v == 0.0),
        Distribution::PointSet(d) => d.discrete().iter().any(|s| s.x == 0.0),
    }
}

fn sample_unary<R: Rng + ?Sized>(
    op: UnaryOp,
    dist: &Distribution,
    env: &Env,
    rng: &mut R,
) -> Result<Distribution> {
    let samples: Vec<f64> = dist
        .sample_n(env.sample_count(), rng)
        .into_iter()
        .map(|v| op.apply(v))
        .collect();
    if samples.iter().any(|v| !v.is_finite()) {
        return Err(Error::Domain(format!(
            "{} produced non-finite samples",
            op.name()
        )));
    }
    SampleSetDist::new(samples).map(Distribution::SampleSet)
}

fn negate_point_set(ps: &PointSetDist) -> Result<PointSetDist> {
    let spikes = ps
        .discrete()
        .iter()
        .map(|s| Spike::new(-s.x, s.mass))
        .collect();
    let continuous = if ps.continuous().is_empty() {
        XyCurve::empty()
    } else {
        let points = ps
            .continuous()
            .points()
            .iter()
            .rev()
            .map(|p| XyPoint::new(-p.x, p.y))
            .collect();
        XyCurve::new(points)?
    };
    PointSetDist::new(spikes, continuous)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn env() -> Env {
        Env::new(4_000, 100).unwrap()
    }

    fn sym(d: SymbolicDist) -> Distribution {
        Distribution::Symbolic(d)
    }

    fn pm(v: f64) -> Distribution {
        sym(SymbolicDist::point_mass(v).unwrap())
    }

    fn unwrap_point_mass(d: &Distribution) -> f64 {
        match d {
            Distribution::Symbolic(SymbolicDist::PointMass(p)) => p.value(),
            other => panic!("expected point mass, got {other:?}"),
        }
    }

    #[test]
    fn test_point_mass_closed_arithmetic() {
        let mut rng = StdRng::seed_from_u64(0);
        let cases = [
            (BinaryOp::Add, 2.0, 3.0, 5.0),
            (BinaryOp::Subtract, 2.0, 3.0, -1.0),
            (BinaryOp::Multiply, 2.0, 3.0, 6.0),
            (BinaryOp::Divide, 3.0, 2.0, 1.5),
            (BinaryOp::Power, 2.0, 10.0, 1024.0),
            (BinaryOp::LogBase, 8.0, 2.0, 3.0),
        ];
        for (op, a, b, expected) in cases {
            let out = binary_op(op, &pm(a), &pm(b), &env(), &mut rng).unwrap();
            assert_relative_eq!(unwrap_point_mass(&out), expected, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_point_mass_division_by_zero() {
        let mut rng = StdRng::seed_from_u64(0);
        let err = binary_op(BinaryOp::Divide, &pm(1.0), &pm(0.0), &env(), &mut rng).unwrap_err();
        assert!(matches!(err, Error::Domain(_)));
    }

    #[test]
    fn test_point_mass_non_finite_result_is_domain_error() {
        let mut rng = StdRng::seed_from_u64(0);
        // Fractional power of a negative base has no real value.
        let err =
            binary_op(BinaryOp::Power, &pm(-8.0), &pm(0.5), &env(), &mut rng).unwrap_err();
        assert!(matches!(err, Error::Domain(_)));
        let err =
            binary_op(BinaryOp::LogBase, &pm(-1.0), &pm(2.0), &env(), &mut rng).unwrap_err();
        assert!(matches!(err, Error::Domain(_)));
    }

    #[test]
    fn test_normal_sum_stays_symbolic() {
        let mut rng = StdRng::seed_from_u64(0);
        let a = sym(SymbolicDist::normal(1.0, 3.0).unwrap());
        let b = sym(SymbolicDist::normal(2.0, 4.0).unwrap());
        let out = binary_op(BinaryOp::Add, &a, &b, &env(), &mut rng).unwrap();
        match out {
            Distribution::Symbolic(SymbolicDist::Normal(n)) => {
                assert_relative_eq!(n.mean(), 3.0, epsilon = 1e-12);
                assert_relative_eq!(n.std_dev(), 5.0, epsilon = 1e-12);
            }
            other => panic!("expected normal, got {other:?}"),
        }
    }

    #[test]
    fn test_normal_scalar_shift_and_scale() {
        let mut rng = StdRng::seed_from_u64(0);
        let n = sym(SymbolicDist::normal(1.0, 2.0).unwrap());

        let shifted = binary_op(BinaryOp::Add, &n, &pm(5.0), &env(), &mut rng).unwrap();
        match shifted {
            Distribution::Symbolic(SymbolicDist::Normal(d)) => {
                assert_relative_eq!(d.mean(), 6.0);
                assert_relative_eq!(d.std_dev(), 2.0);
            }
            other => panic!("expected normal, got {other:?}"),
        }

        let scaled = binary_op(BinaryOp::Multiply, &pm(-3.0), &n, &env(), &mut rng).unwrap();
        match scaled {
            Distribution::Symbolic(SymbolicDist::Normal(d)) => {
                assert_relative_eq!(d.mean(), -3.0);
                assert_relative_eq!(d.std_dev(), 6.0);
            }
            other => panic!("expected normal, got {other:?}"),
        }

        let collapsed = binary_op(BinaryOp::Multiply, &n, &pm(0.0), &env(), &mut rng).unwrap();
        assert_relative_eq!(unwrap_point_mass(&collapsed), 0.0);
    }

    #[test]
    fn test_log_normal_product_and_quotient() {
        let mut rng = StdRng::seed_from_u64(0);
        let a = sym(SymbolicDist::log_normal(0.0, 1.0).unwrap());
        let b = sym(SymbolicDist::log_normal(1.0, 1.0).unwrap());
        let out = binary_op(BinaryOp::Multiply, &a, &b, &env(), &mut rng).unwrap();
        match out {
            Distribution::Symbolic(SymbolicDist::LogNormal(l)) => {
                assert_relative_eq!(l.location(), 1.0);
                assert_relative_eq!(l.scale(), core::f64::consts::SQRT_2, epsilon = 1e-12);
            }
            other => panic!("expected log-normal, got {other:?}"),
        }
        let out = binary_op(BinaryOp::Divide, &a, &b, &env(), &mut rng).unwrap();
        match out {
            Distribution::Symbolic(SymbolicDist::LogNormal(l)) => {
                assert_relative_eq!(l.location(), -1.0);
            }
            other => panic!("expected log-normal, got {other:?}"),
        }
    }

    #[test]
    fn test_log_normal_power() {
        let mut rng = StdRng::seed_from_u64(0);
        let l = sym(SymbolicDist::log_normal(1.0, 0.5).unwrap());
        let squared = binary_op(BinaryOp::Power, &l, &pm(2.0), &env(), &mut rng).unwrap();
        match squared {
            Distribution::Symbolic(SymbolicDist::LogNormal(d)) => {
                assert_relative_eq!(d.location(), 2.0);
                assert_relative_eq!(d.scale(), 1.0);
            }
            other => panic!("expected log-normal, got {other:?}"),
        }
        let unit = binary_op(BinaryOp::Power, &l, &pm(0.0), &env(), &mut rng).unwrap();
        assert_relative_eq!(unwrap_point_mass(&unit), 1.0);
    }

    #[test]
    fn test_exp_and_ln_move_between_normal_and_log_normal() {
        let mut rng = StdRng::seed_from_u64(0);
        let n = sym(SymbolicDist::normal(2.0, 3.0).unwrap());
        let exp = unary_op(UnaryOp::Exp, &n, &env(), &mut rng).unwrap();
        match &exp {
            Distribution::Symbolic(SymbolicDist::LogNormal(l)) => {
                assert_relative_eq!(l.location(), 2.0);
                assert_relative_eq!(l.scale(), 3.0);
            }
            other => panic!("expected log-normal, got {other:?}"),
        }
        let back = unary_op(UnaryOp::Ln, &exp, &env(), &mut rng).unwrap();
        match back {
            Distribution::Symbolic(SymbolicDist::Normal(d)) => {
                assert_relative_eq!(d.mean(), 2.0);
                assert_relative_eq!(d.std_dev(), 3.0);
            }
            other => panic!("expected normal, got {other:?}"),
        }
    }

    #[test]
    fn test_convolution_fallback_moments() {
        let mut rng = StdRng::seed_from_u64(42);
        let a = sym(SymbolicDist::uniform(0.0, 1.0).unwrap());
        let b = sym(SymbolicDist::uniform(0.0, 1.0).unwrap());
        let out = binary_op(BinaryOp::Add, &a, &b, &env(), &mut rng).unwrap();
        match out {
            Distribution::SampleSet(ss) => {
                assert_eq!(ss.len(), 4_000);
                assert!(ss.min() >= 0.0 && ss.max() <= 2.0);
                assert_relative_eq!(ss.mean(), 1.0, epsilon = 0.05);
            }
            other => panic!("expected sample set, got {other:?}"),
        }
    }

    #[test]
    fn test_division_domain_checks() {
        let mut rng = StdRng::seed_from_u64(0);
        let numerator = sym(SymbolicDist::normal(5.0, 1.0).unwrap());

        let spanning = sym(SymbolicDist::normal(0.0, 1.0).unwrap());
        assert!(matches!(
            binary_op(BinaryOp::Divide, &numerator, &spanning, &env(), &mut rng),
            Err(Error::Domain(_))
        ));

        // Density touches zero at the boundary with positive height.
        let touching = sym(SymbolicDist::uniform(0.0, 1.0).unwrap());
        assert!(matches!(
            binary_op(BinaryOp::Divide, &numerator, &touching, &env(), &mut rng),
            Err(Error::Domain(_))
        ));

        // Log-normal density vanishes at zero, so the quotient is fine.
        let positive = sym(SymbolicDist::log_normal(0.0, 0.5).unwrap());
        assert!(
            binary_op(BinaryOp::Divide, &numerator, &positive, &env(), &mut rng).is_ok()
        );
    }

    #[test]
    fn test_logarithm_domain_checks() {
        let mut rng = StdRng::seed_from_u64(0);
        let negative = sym(SymbolicDist::uniform(-1.0, 1.0).unwrap());
        assert!(matches!(
            unary_op(UnaryOp::Ln, &negative, &env(), &mut rng),
            Err(Error::Domain(_))
        ));

        let positive = sym(SymbolicDist::uniform(1.0, 2.0).unwrap());
        let out = unary_op(UnaryOp::Ln, &positive, &env(), &mut rng).unwrap();
        match out {
            Distribution::SampleSet(ss) => {
                assert!(ss.min() >= 0.0);
                assert!(ss.max() <= core::f64::consts::LN_2);
            }
            other => panic!("expected sample set, got {other:?}"),
        }

        // A spike exactly at zero is rejected even though nothing sits below.
        let spiked = Distribution::SampleSet(
            SampleSetDist::new(vec![0.0, 1.0, 2.0, 3.0]).unwrap(),
        );
        assert!(matches!(
            unary_op(UnaryOp::Ln, &spiked, &env(), &mut rng),
            Err(Error::Domain(_))
        ));
    }

    #[test]
    fn test_negate_symbolic_families() {
        let mut rng = StdRng::seed_from_u64(0);
        let u = sym(SymbolicDist::uniform(1.0, 4.0).unwrap());
        match unary_op(UnaryOp::Negate, &u, &env(), &mut rng).unwrap() {
            Distribution::Symbolic(SymbolicDist::Uniform(d)) => {
                assert_relative_eq!(d.low(), -4.0);
                assert_relative_eq!(d.high(), -1.0);
            }
            other => panic!("expected uniform, got {other:?}"),
        }

        let t = sym(SymbolicDist::triangular(0.0, 1.0, 5.0).unwrap());
        match unary_op(UnaryOp::Negate, &t, &env(), &mut rng).unwrap() {
            Distribution::Symbolic(SymbolicDist::Triangular(d)) => {
                assert_relative_eq!(d.low(), -5.0);
                assert_relative_eq!(d.mode(), -1.0);
                assert_relative_eq!(d.high(), 0.0);
            }
            other => panic!("expected triangular, got {other:?}"),
        }
    }

    #[test]
    fn test_negate_point_set_mirrors_exactly() {
        let mut rng = StdRng::seed_from_u64(0);
        let ps = PointSetDist::new(
            vec![Spike::new(1.0, 0.25), Spike::new(3.0, 0.75)],
            XyCurve::empty(),
        )
        .unwrap();
        let out = unary_op(
            UnaryOp::Negate,
            &Distribution::PointSet(ps),
            &env(),
            &mut rng,
        )
        .unwrap();
        match out {
            Distribution::PointSet(neg) => {
                assert_relative_eq!(neg.discrete()[0].x, -3.0);
                assert_relative_eq!(neg.discrete()[0].mass, 0.75);
                assert_relative_eq!(neg.discrete()[1].x, -1.0);
                assert_relative_eq!(neg.discrete()[1].mass, 0.25);
            }
            other => panic!("expected point set, got {other:?}"),
        }
    }

    #[test]
    fn test_sample_set_transforms_in_place() {
        let mut rng = StdRng::seed_from_u64(0);
        let ss = Distribution::SampleSet(SampleSetDist::new(vec![1.0, 2.0, 3.0]).unwrap());
        let out = unary_op(UnaryOp::Negate, &ss, &env(), &mut rng).unwrap();
        match out {
            Distribution::SampleSet(neg) => assert_eq!(neg.samples(), &[-1.0, -2.0, -3.0]),
            other => panic!("expected sample set, got {other:?}"),
        }
    }

    #[test]
    fn test_exp_point_mass() {
        let mut rng = StdRng::seed_from_u64(0);
        let out = unary_op(UnaryOp::Exp, &pm(0.0), &env(), &mut rng).unwrap();
        assert_relative_eq!(unwrap_point_mass(&out), 1.0);
        // Overflowing exponent has no finite value.
        assert!(matches!(
            unary_op(UnaryOp::Exp, &pm(1.0e4), &env(), &mut rng),
            Err(Error::Domain(_))
        ));
    }
}
