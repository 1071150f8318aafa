//! Weighted combination of distributions.

use rand::Rng;

use crate::dist::Distribution;
use crate::env::Env;
use crate::error::{Error, Result};
use crate::point_set::{PointSetDist, Spike};
use crate::sample_set::SampleSetDist;
use crate::xy::{XyCurve, XyPoint, linspace};

/// Combines distributions into a single one where each component
/// contributes probability mass in proportion to its weight.
///
/// Weights are normalized by their sum, so `[(a, 1.0), (b, 3.0)]` and
/// `[(a, 0.25), (b, 0.75)]` describe the same mixture. The result's
/// representation follows the components: sample sets mix by stratified
/// resampling (weights decide how many of the `env.sample_count()` draws
/// each component contributes), anything else mixes deterministically in
/// point-set form. A sample set mixed with a point set is lifted to the
/// point-set path.
///
/// # Errors
///
/// Returns `Error::InvalidWeights` when `components` is empty, a weight is
/// negative or non-finite, or the weights sum to zero. A component that
/// cannot be converted to the chosen representation fails the whole
/// mixture with `Error::Conversion` around the component's own error.
pub fn mixture<R: Rng + ?Sized>(
    components: &[(Distribution, f64)],
    env: &Env,
    rng: &mut R,
) -> Result<Distribution> {
    if components.is_empty() {
        return Err(Error::InvalidWeights(
            "mixture requires at least one component".into(),
        ));
    }
    let mut sum = 0.0;
    for (_, weight) in components {
        if !weight.is_finite() || *weight < 0.0 {
            return Err(Error::InvalidWeights(format!(
                "weights must be finite and non-negative, got {weight}"
            )));
        }
        sum += weight;
    }
    if sum <= 0.0 {
        return Err(Error::InvalidWeights(format!(
            "weights must sum to a positive value, got {sum}"
        )));
    }
    let normalized: Vec<f64> = components.iter().map(|(_, w)| w / sum).collect();

    let any_sample = components
        .iter()
        .any(|(d, _)| matches!(d, Distribution::SampleSet(_)));
    let any_point = components
        .iter()
        .any(|(d, _)| matches!(d, Distribution::PointSet(_)));

    if any_sample && !any_point {
        mix_as_samples(components, &normalized, env, rng)
    } else {
        mix_as_point_set(components, &normalized, env)
    }
}

/// Deterministic path: convert every component to a point set and take the
/// weighted union of spikes plus the weighted sum of density curves on a
/// shared grid.
fn mix_as_point_set(
    components: &[(Distribution, f64)],
    weights: &[f64],
    env: &Env,
) -> Result<Distribution> {
    let mut spikes = Vec::new();
    let mut curves: Vec<(XyCurve, f64)> = Vec::new();
    for ((dist, _), &weight) in components.iter().zip(weights) {
        let ps = dist.to_point_set(env).map_err(Error::into_conversion)?;
        for spike in ps.discrete() {
            spikes.push(Spike::new(spike.x, spike.mass * weight));
        }
        if !ps.continuous().is_empty() {
            curves.push((ps.continuous().clone(), weight));
        }
    }

    let continuous = if curves.is_empty() {
        XyCurve::empty()
    } else {
        let lo = curves
            .iter()
            .filter_map(|(c, _)| c.x_min())
            .fold(f64::INFINITY, f64::min);
        let hi = curves
            .iter()
            .filter_map(|(c, _)| c.x_max())
            .fold(f64::NEG_INFINITY, f64::max);
        let points = linspace(lo, hi, env.point_count())
            .into_iter()
            .map(|x| {
                let y = curves.iter().map(|(c, w)| c.y_at(x) * w).sum();
                XyPoint::new(x, y)
            })
            .collect();
        XyCurve::new(points)?
    };

    trace_info!(
        components = components.len(),
        spikes = spikes.len(),
        "mixed distributions in point-set form"
    );
    PointSetDist::new(spikes, continuous).map(Distribution::PointSet)
}

/// Sampling path: split the sample budget across components by weight and
/// concatenate the draws.
fn mix_as_samples<R: Rng + ?Sized>(
    components: &[(Distribution, f64)],
    weights: &[f64],
    env: &Env,
    rng: &mut R,
) -> Result<Distribution> {
    let counts = allocate_counts(env.sample_count(), weights);
    let mut samples = Vec::with_capacity(env.sample_count());
    for ((dist, _), count) in components.iter().zip(counts) {
        if count == 0 {
            continue;
        }
        samples.extend(dist.sample_n(count, rng));
    }
    trace_info!(
        components = components.len(),
        samples = samples.len(),
        "mixed distributions by resampling"
    );
    SampleSetDist::new(samples)
        .map_err(Error::into_conversion)
        .map(Distribution::SampleSet)
}

/// Splits `total` draws across normalized `weights` by largest remainder,
/// so the counts are deterministic and sum exactly to `total`. Remainder
/// ties go to the lower index.
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
fn allocate_counts(total: usize, weights: &[f64]) -> Vec<usize> {
    let shares: Vec<f64> = weights.iter().map(|w| w * total as f64).collect();
    let mut counts: Vec<usize> = shares.iter().map(|s| s.floor() as usize).collect();
    let assigned: usize = counts.iter().sum();
    let mut order: Vec<usize> = (0..weights.len()).collect();
    order.sort_by(|&a, &b| {
        (shares[b] - shares[b].floor()).total_cmp(&(shares[a] - shares[a].floor()))
    });
    for slot in 0..total.saturating_sub(assigned) {
        counts[order[slot % order.len()]] += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbolic::SymbolicDist;
    use approx::assert_relative_eq;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn env() -> Env {
        Env::default()
    }

    fn sym(d: SymbolicDist) -> Distribution {
        Distribution::Symbolic(d)
    }

    #[test]
    fn test_rejects_empty_components() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(matches!(
            mixture(&[], &env(), &mut rng),
            Err(Error::InvalidWeights(_))
        ));
    }

    #[test]
    fn test_rejects_bad_weights() {
        let mut rng = StdRng::seed_from_u64(0);
        let d = sym(SymbolicDist::normal(0.0, 1.0).unwrap());
        for bad in [-1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                mixture(&[(d.clone(), bad)], &env(), &mut rng),
                Err(Error::InvalidWeights(_))
            ));
        }
        assert!(matches!(
            mixture(&[(d.clone(), 0.0), (d, 0.0)], &env(), &mut rng),
            Err(Error::InvalidWeights(_))
        ));
    }

    #[test]
    fn test_point_mass_components_keep_exact_masses() {
        let mut rng = StdRng::seed_from_u64(0);
        let components: Vec<(Distribution, f64)> = [3.0, 2.0, 1.0, 0.0]
            .iter()
            .map(|&v| (sym(SymbolicDist::point_mass(v).unwrap()), 0.25))
            .collect();
        let mixed = mixture(&components, &env(), &mut rng).unwrap();
        match &mixed {
            Distribution::PointSet(ps) => {
                assert_eq!(ps.discrete().len(), 4);
                for spike in ps.discrete() {
                    assert_relative_eq!(spike.mass, 0.25);
                }
            }
            other => panic!("expected point set, got {other:?}"),
        }
        assert_relative_eq!(
            mixed.density_or_mass_at(2.0, &env()).unwrap(),
            0.25
        );
    }

    #[test]
    fn test_weight_scale_invariance() {
        let mut rng = StdRng::seed_from_u64(0);
        let parts = |w: [f64; 2]| {
            vec![
                (sym(SymbolicDist::uniform(0.0, 1.0).unwrap()), w[0]),
                (sym(SymbolicDist::uniform(2.0, 3.0).unwrap()), w[1]),
            ]
        };
        let a = mixture(&parts([1.0, 3.0]), &env(), &mut rng).unwrap();
        let b = mixture(&parts([0.25, 0.75]), &env(), &mut rng).unwrap();
        for x in [0.5, 2.5] {
            assert_relative_eq!(
                a.density_or_mass_at(x, &env()).unwrap(),
                b.density_or_mass_at(x, &env()).unwrap(),
                epsilon = 1e-9
            );
        }
    }

    #[test]
    fn test_continuous_mixture_density_ratio() {
        let mut rng = StdRng::seed_from_u64(0);
        let components = vec![
            (sym(SymbolicDist::uniform(0.0, 1.0).unwrap()), 0.75),
            (sym(SymbolicDist::uniform(2.0, 3.0).unwrap()), 0.25),
        ];
        let mixed = mixture(&components, &env(), &mut rng).unwrap();
        let left = mixed.density_or_mass_at(0.5, &env()).unwrap();
        let right = mixed.density_or_mass_at(2.5, &env()).unwrap();
        assert_relative_eq!(left, 0.75, epsilon = 0.02);
        assert_relative_eq!(right, 0.25, epsilon = 0.02);
    }

    #[test]
    fn test_mixture_mass_is_normalized() {
        let mut rng = StdRng::seed_from_u64(0);
        let components = vec![
            (sym(SymbolicDist::normal(0.0, 1.0).unwrap()), 2.0),
            (sym(SymbolicDist::point_mass(5.0).unwrap()), 1.0),
        ];
        let mixed = mixture(&components, &env(), &mut rng).unwrap();
        let ps = mixed.to_point_set(&env()).unwrap();
        assert_relative_eq!(ps.total_mass(), 1.0, epsilon = 1e-9);
        assert_relative_eq!(ps.discrete_mass(), 1.0 / 3.0, epsilon = 1e-9);
    }

    #[test]
    fn test_sample_components_mix_by_resampling() {
        let mut rng = StdRng::seed_from_u64(7);
        let env = Env::new(1_000, 100).unwrap();
        let low = SampleSetDist::new(vec![0.0; 30]).unwrap();
        let high = SampleSetDist::new(vec![10.0; 30]).unwrap();
        let mixed = mixture(
            &[
                (Distribution::SampleSet(low), 0.9),
                (Distribution::SampleSet(high), 0.1),
            ],
            &env,
            &mut rng,
        )
        .unwrap();
        match &mixed {
            Distribution::SampleSet(ss) => {
                assert_eq!(ss.len(), 1_000);
                #[allow(clippy::cast_precision_loss)]
                let share =
                    ss.samples().iter().filter(|&&s| s < 5.0).count() as f64 / 1_000.0;
                assert_relative_eq!(share, 0.9, epsilon = 1e-9);
            }
            other => panic!("expected sample set, got {other:?}"),
        }
    }

    #[test]
    fn test_symbolic_and_sample_components_stay_samples() {
        let mut rng = StdRng::seed_from_u64(3);
        let env = Env::new(2_000, 100).unwrap();
        let samples = SampleSetDist::new((0..100).map(f64::from).collect()).unwrap();
        let mixed = mixture(
            &[
                (Distribution::SampleSet(samples), 0.5),
                (sym(SymbolicDist::normal(200.0, 1.0).unwrap()), 0.5),
            ],
            &env,
            &mut rng,
        )
        .unwrap();
        assert!(matches!(mixed, Distribution::SampleSet(_)));
    }

    #[test]
    fn test_small_sample_set_with_point_set_fails_as_conversion() {
        let mut rng = StdRng::seed_from_u64(0);
        let tiny = SampleSetDist::new(vec![1.0, 2.0, 3.0]).unwrap();
        let ps = SymbolicDist::uniform(0.0, 1.0)
            .unwrap()
            .to_point_set(&env())
            .unwrap();
        let err = mixture(
            &[
                (Distribution::SampleSet(tiny), 0.5),
                (Distribution::PointSet(ps), 0.5),
            ],
            &env(),
            &mut rng,
        )
        .unwrap_err();
        match err {
            Error::Conversion(inner) => {
                assert!(matches!(*inner, Error::InsufficientSamples { got: 3, .. }));
            }
            other => panic!("expected Conversion, got {other:?}"),
        }
    }

    #[test]
    fn test_mixture_is_deterministic_under_seed() {
        let components = vec![
            (sym(SymbolicDist::normal(0.0, 1.0).unwrap()), 0.5),
            (
                Distribution::SampleSet(
                    SampleSetDist::new((0..50).map(f64::from).collect()).unwrap(),
                ),
                0.5,
            ),
        ];
        let env = Env::new(500, 100).unwrap();
        let a = mixture(&components, &env, &mut StdRng::seed_from_u64(11)).unwrap();
        let b = mixture(&components, &env, &mut StdRng::seed_from_u64(11)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_allocate_counts_sums_to_total() {
        let counts = allocate_counts(10, &[1.0 / 3.0, 1.0 / 3.0, 1.0 / 3.0]);
        assert_eq!(counts.iter().sum::<usize>(), 10);
        // The extra draw from the rounding remainder goes to the first
        // component on a tie.
        assert_eq!(counts, vec![4, 3, 3]);

        let counts = allocate_counts(7, &[0.5, 0.5]);
        assert_eq!(counts, vec![4, 3]);

        let counts = allocate_counts(5, &[1.0, 0.0]);
        assert_eq!(counts, vec![5, 0]);
    }
}
