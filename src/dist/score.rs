//! Log scoring of probabilistic estimates against observed outcomes.

use crate::dist::Distribution;
use crate::env::Env;
use crate::error::{Error, Result};
use crate::point_set::PointSetDist;

/// Scores an estimate against an observed scalar outcome by negative log
/// density: `-ln(p)` where `p` is the estimate's density or probability
/// mass at `answer`. Lower is better; an estimate concentrated near the
/// answer scores low, one that ruled the answer out scores positive
/// infinity.
///
/// With a `prior`, the result is the relative score `base - prior_base`,
/// negative when the estimate beats the prior at the answer. An answer
/// impossible under the estimate stays `+inf` regardless of prior; an
/// answer possible under the estimate but impossible under the prior is
/// `-inf`. A non-finite answer carries no density and scores `+inf`
/// without being an error.
///
/// # Errors
///
/// Returns `Error::Conversion` around the underlying failure when the
/// estimate or the prior cannot be converted to point-set form.
pub fn log_score_scalar_answer(
    estimate: &Distribution,
    answer: f64,
    prior: Option<&Distribution>,
    env: &Env,
) -> Result<f64> {
    let base = score_at(estimate, answer, env)?;
    let Some(prior) = prior else {
        return Ok(base);
    };
    let prior_base = score_at(prior, answer, env)?;
    if base.is_infinite() {
        return Ok(f64::INFINITY);
    }
    if prior_base.is_infinite() {
        return Ok(f64::NEG_INFINITY);
    }
    Ok(base - prior_base)
}

/// Scores an estimate against a full answer distribution by
/// Kullback-Leibler divergence in point-set form: the expected extra
/// surprisal of the estimate where the answer actually puts its mass.
/// Zero when the two agree, `+inf` when the answer has mass where the
/// estimate has none.
///
/// With a `prior`, the result is the relative divergence `base -
/// prior_base`, negative when the estimate sits closer to the answer
/// than the prior does. Answer mass the estimate rules out keeps the
/// score at `+inf` regardless of prior; answer mass only the prior
/// rules out scores `-inf`.
///
/// Discrete mass is compared spike against spike, continuous density is
/// integrated over the answer's grid.
///
/// # Errors
///
/// Returns `Error::Conversion` around the underlying failure when any
/// operand cannot be converted to point-set form.
pub fn log_score_dist_answer(
    estimate: &Distribution,
    answer: &Distribution,
    prior: Option<&Distribution>,
    env: &Env,
) -> Result<f64> {
    let q = answer.to_point_set(env).map_err(Error::into_conversion)?;
    let base = kl_against(estimate, &q, env)?;
    let Some(prior) = prior else {
        return Ok(base);
    };
    let prior_base = kl_against(prior, &q, env)?;
    if base.is_infinite() {
        return Ok(f64::INFINITY);
    }
    if prior_base.is_infinite() {
        return Ok(f64::NEG_INFINITY);
    }
    Ok(base - prior_base)
}

fn kl_against(estimate: &Distribution, q: &PointSetDist, env: &Env) -> Result<f64> {
    let p = estimate.to_point_set(env).map_err(Error::into_conversion)?;

    let mut total = 0.0;
    for spike in q.discrete() {
        let mass = spike_mass_at(&p, spike.x);
        if mass <= 0.0 {
            return Ok(f64::INFINITY);
        }
        total += spike.mass * (spike.mass / mass).ln();
    }

    let mut previous: Option<(f64, f64)> = None;
    for point in q.continuous().points() {
        let integrand = if point.y <= 0.0 {
            0.0
        } else {
            let density = p.continuous().y_at(point.x);
            if density <= 0.0 {
                return Ok(f64::INFINITY);
            }
            point.y * (point.y / density).ln()
        };
        if let Some((x0, g0)) = previous {
            total += (point.x - x0) * (g0 + integrand) / 2.0;
        }
        previous = Some((point.x, integrand));
    }
    Ok(total)
}

fn score_at(dist: &Distribution, answer: f64, env: &Env) -> Result<f64> {
    if !answer.is_finite() {
        return Ok(f64::INFINITY);
    }
    let ps = dist.to_point_set(env).map_err(Error::into_conversion)?;
    let p = ps.density_or_mass_at(answer);
    if p <= 0.0 {
        Ok(f64::INFINITY)
    } else {
        Ok(-p.ln())
    }
}

#[allow(clippy::float_cmp)]
fn spike_mass_at(ps: &PointSetDist, x: f64) -> f64 {
    ps.discrete()
        .iter()
        .find(|s| s.x == x)
        .map_or(0.0, |s| s.mass)
}
