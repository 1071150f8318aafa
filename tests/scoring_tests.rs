//! End-to-end log scoring. Mixtures of point masses make the expected
//! scores exactly computable by hand.

use distops::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn delta_mixture(parts: &[(f64, f64)], env: &Env) -> Distribution {
    let components: Vec<(Distribution, f64)> = parts
        .iter()
        .map(|&(value, weight)| {
            (
                Distribution::Symbolic(SymbolicDist::point_mass(value).unwrap()),
                weight,
            )
        })
        .collect();
    let mut rng = StdRng::seed_from_u64(0);
    mixture(&components, env, &mut rng).expect("point-mass mixture should build")
}

#[test]
fn test_answer_matching_quarter_weight_scores_ln_4() {
    let env = Env::default();
    let estimate = delta_mixture(
        &[(3.0, 0.25), (2.0, 0.25), (1.0, 0.25), (0.0, 0.25)],
        &env,
    );
    let score = log_score_scalar_answer(&estimate, 2.0, None, &env).unwrap();
    let expected = -(0.25_f64.ln());
    assert!(
        (score - expected).abs() < 1e-12,
        "score {score} should equal -ln(0.25) = {expected}"
    );
}

#[test]
fn test_answer_matching_dominant_weight() {
    let env = Env::default();
    let estimate = delta_mixture(&[(3.0, 0.75), (2.0, 0.25)], &env);
    let score = log_score_scalar_answer(&estimate, 3.0, None, &env).unwrap();
    let expected = -(0.75_f64.ln());
    assert!(
        (score - expected).abs() < 1e-12,
        "score {score} should equal -ln(0.75) = {expected}"
    );
}

#[test]
fn test_prior_subtracts_its_own_surprisal() {
    let env = Env::default();
    let estimate = delta_mixture(&[(3.0, 0.75), (2.0, 0.25)], &env);
    let prior = delta_mixture(&[(3.0, 0.5), (2.0, 0.5)], &env);
    let score = log_score_scalar_answer(&estimate, 3.0, Some(&prior), &env).unwrap();
    let expected = -(0.75_f64.ln()) - (-(0.5_f64.ln()));
    assert!(
        (score - expected).abs() < 1e-12,
        "relative score {score} should equal {expected}"
    );
    // The estimate put more weight on what happened, so it beats the prior.
    assert!(score < 0.0);
}

#[test]
fn test_answer_with_no_mass_scores_positive_infinity() {
    let env = Env::default();
    let estimate = delta_mixture(&[(3.0, 0.5), (2.0, 0.5)], &env);
    let score = log_score_scalar_answer(&estimate, 7.0, None, &env).unwrap();
    assert!(score.is_infinite() && score > 0.0);
}

#[test]
fn test_non_finite_answer_is_not_an_error() {
    let env = Env::default();
    let estimate = Distribution::Symbolic(SymbolicDist::normal(0.0, 1.0).unwrap());
    for answer in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let score = log_score_scalar_answer(&estimate, answer, None, &env).unwrap();
        assert!(score.is_infinite() && score > 0.0);
    }
}

#[test]
fn test_continuous_mixture_density_score() {
    let env = Env::default();
    let mut rng = StdRng::seed_from_u64(1);
    let estimate = mixture(
        &[
            (
                Distribution::Symbolic(SymbolicDist::uniform(0.0, 1.0).unwrap()),
                0.5,
            ),
            (
                Distribution::Symbolic(SymbolicDist::uniform(0.0, 2.0).unwrap()),
                0.5,
            ),
        ],
        &env,
        &mut rng,
    )
    .unwrap();
    // Density at 0.5 is 0.5 * 1 + 0.5 * 0.5 = 0.75.
    let score = log_score_scalar_answer(&estimate, 0.5, None, &env).unwrap();
    let expected = -(0.75_f64.ln());
    assert!(
        (score - expected).abs() < 0.01,
        "score {score} should be near {expected}"
    );
}

#[test]
fn test_scoring_a_sample_set_estimate() {
    let env = Env::default();
    let mut rng = StdRng::seed_from_u64(2);
    let normal = Distribution::Symbolic(SymbolicDist::normal(5.0, 1.0).unwrap());
    let estimate = Distribution::SampleSet(normal.to_sample_set(&env, &mut rng).unwrap());
    let score = log_score_scalar_answer(&estimate, 5.0, None, &env).unwrap();
    // Density near the mode of a unit normal is about 0.4.
    assert!(score.is_finite());
    assert!((score - 0.92).abs() < 0.25, "score {score} should be near -ln(0.4)");
}

#[test]
fn test_underfilled_estimate_fails_with_conversion_error() {
    let env = Env::default();
    let estimate =
        Distribution::SampleSet(SampleSetDist::new(vec![1.0, 2.0, 3.0]).unwrap());
    let err = log_score_scalar_answer(&estimate, 2.0, None, &env).unwrap_err();
    assert!(matches!(err, Error::Conversion(_)));
}

#[test]
fn test_underfilled_prior_fails_with_conversion_error() {
    let env = Env::default();
    let estimate = Distribution::Symbolic(SymbolicDist::uniform(0.0, 1.0).unwrap());
    let prior = Distribution::SampleSet(SampleSetDist::new(vec![1.0, 2.0]).unwrap());
    let err = log_score_scalar_answer(&estimate, 0.5, Some(&prior), &env).unwrap_err();
    assert!(matches!(err, Error::Conversion(_)));
}

#[test]
fn test_distribution_answer_scores() {
    let env = Env::default();
    let tight = Distribution::Symbolic(SymbolicDist::normal(0.0, 1.0).unwrap());
    let wide = Distribution::Symbolic(SymbolicDist::normal(0.0, 2.0).unwrap());

    let self_score = log_score_dist_answer(&tight, &tight, None, &env).unwrap();
    assert!(self_score.abs() < 1e-9, "self-score {self_score} should be 0");

    let cross = log_score_dist_answer(&wide, &tight, None, &env).unwrap();
    assert!(cross > 0.0, "diverging estimate should score positive, got {cross}");

    // Relative to an even wider prior, the wide estimate comes out ahead.
    let wider = Distribution::Symbolic(SymbolicDist::normal(0.0, 4.0).unwrap());
    let relative = log_score_dist_answer(&wide, &tight, Some(&wider), &env).unwrap();
    assert!(relative < 0.0, "beating the prior should score negative, got {relative}");
}
