use rand::Rng;
use rand::distr::Open01;

/// Generate a uniform `f64` in the open interval `(0, 1)`.
///
/// Inverse-CDF sampling depends on excluding both endpoints: quantile
/// functions are unbounded (or undefined) there.
#[inline]
pub(crate) fn unit_open<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    rng.sample(Open01)
}
