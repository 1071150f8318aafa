//! Monte Carlo distributions backed by drawn samples.

use std::collections::HashMap;

use rand::Rng;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::env::Env;
use crate::error::{Error, Result};
use crate::kde::GaussianKde;
use crate::point_set::{PointSetDist, Spike};
use crate::xy::{XyCurve, XyPoint, linspace};

/// Minimum number of samples required before density estimation is
/// considered meaningful. Smaller sample sets can still be constructed,
/// resampled, and combined, but converting them to a point set fails.
pub const MIN_SAMPLES_FOR_DENSITY: usize = 25;

/// A distribution represented by a finite collection of drawn samples.
///
/// Samples keep their draw order; no other ordering is implied. All
/// samples are finite by construction.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SampleSetDist {
    samples: Vec<f64>,
}

impl SampleSetDist {
    /// Creates a sample set from raw draws.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidParameters` if `samples` is empty or contains
    /// a non-finite value.
    pub fn new(samples: Vec<f64>) -> Result<Self> {
        if samples.is_empty() {
            return Err(Error::InvalidParameters {
                what: "sample set",
                reason: "at least one sample is required".into(),
            });
        }
        if let Some(bad) = samples.iter().find(|s| !s.is_finite()) {
            return Err(Error::InvalidParameters {
                what: "sample set",
                reason: format!("samples must be finite, got {bad}"),
            });
        }
        Ok(Self { samples })
    }

    /// The samples in draw order.
    #[must_use]
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// Number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Always `false`; construction rejects empty sample sets. Present for
    /// API completeness.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Smallest sample.
    #[must_use]
    pub fn min(&self) -> f64 {
        self.samples.iter().copied().fold(f64::INFINITY, f64::min)
    }

    /// Largest sample.
    #[must_use]
    pub fn max(&self) -> f64 {
        self.samples
            .iter()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max)
    }

    /// Sample mean.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn mean(&self) -> f64 {
        self.samples.iter().sum::<f64>() / self.samples.len() as f64
    }

    /// Population variance of the samples.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn variance(&self) -> f64 {
        let mean = self.mean();
        self.samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / self.samples.len() as f64
    }

    /// Population standard deviation of the samples.
    #[must_use]
    pub fn std_dev(&self) -> f64 {
        self.variance().sqrt()
    }

    /// Empirical cumulative probability: the fraction of samples at or
    /// below `x`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn cdf(&self, x: f64) -> f64 {
        self.samples.iter().filter(|&&s| s <= x).count() as f64 / self.samples.len() as f64
    }

    /// Empirical quantile with linear interpolation between order
    /// statistics. `p` is clamped to `[0, 1]`.
    #[must_use]
    pub fn quantile(&self, p: f64) -> f64 {
        let mut sorted = self.samples.clone();
        sorted.sort_unstable_by(f64::total_cmp);
        let p = p.clamp(0.0, 1.0);
        #[allow(clippy::cast_precision_loss)]
        let h = (sorted.len() - 1) as f64 * p;
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let lo = h.floor() as usize;
        let hi = (lo + 1).min(sorted.len() - 1);
        #[allow(clippy::cast_precision_loss)]
        let frac = h - lo as f64;
        sorted[lo] + frac * (sorted[hi] - sorted[lo])
    }

    /// Applies `f` to every sample, producing a new sample set.
    ///
    /// # Errors
    ///
    /// Returns `Error::Domain` if the transform produces a non-finite
    /// value for any sample.
    pub fn map<F: Fn(f64) -> f64>(&self, f: F) -> Result<Self> {
        let mapped: Vec<f64> = self.samples.iter().map(|&x| f(x)).collect();
        if mapped.iter().any(|v| !v.is_finite()) {
            return Err(Error::Domain(
                "transform produced non-finite samples".into(),
            ));
        }
        Ok(Self { samples: mapped })
    }

    /// Combines two sample sets pairwise with `f`, zipping up to the
    /// shorter length.
    ///
    /// # Errors
    ///
    /// Returns `Error::Domain` if the combination produces a non-finite
    /// value for any pair.
    pub fn map2<F: Fn(f64, f64) -> f64>(&self, other: &Self, f: F) -> Result<Self> {
        let combined: Vec<f64> = self
            .samples
            .iter()
            .zip(other.samples.iter())
            .map(|(&a, &b)| f(a, b))
            .collect();
        if combined.iter().any(|v| !v.is_finite()) {
            return Err(Error::Domain(
                "combination produced non-finite samples".into(),
            ));
        }
        Ok(Self { samples: combined })
    }

    /// Draws `n` samples with replacement (a bootstrap resample).
    #[must_use]
    pub fn resample<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> Vec<f64> {
        let mut out = Vec::with_capacity(n);
        for _ in 0..n {
            let idx = rng.random_range(0..self.samples.len());
            out.push(self.samples[idx]);
        }
        out
    }

    /// Exact-repeat values frequent enough to be treated as discrete
    /// spikes rather than density noise. The threshold scales with the
    /// sample count: `max(5, len / 50)`.
    fn spike_threshold(&self) -> usize {
        (self.samples.len() / 50).max(5)
    }

    /// Estimates a point-set form: repeated values above the spike
    /// threshold become discrete spikes, the rest feed a Gaussian kernel
    /// density estimate evaluated on a grid of `env.point_count()` points
    /// spanning three bandwidths beyond the sample range.
    ///
    /// # Errors
    ///
    /// Returns `Error::InsufficientSamples` if the set is smaller than
    /// [`MIN_SAMPLES_FOR_DENSITY`].
    pub fn to_point_set(&self, env: &Env) -> Result<PointSetDist> {
        if self.samples.len() < MIN_SAMPLES_FOR_DENSITY {
            return Err(Error::InsufficientSamples {
                got: self.samples.len(),
                required: MIN_SAMPLES_FOR_DENSITY,
            });
        }

        let mut counts: HashMap<u64, usize> = HashMap::new();
        for s in &self.samples {
            *counts.entry(s.to_bits()).or_insert(0) += 1;
        }
        let threshold = self.spike_threshold();
        let spike_values: HashMap<u64, usize> = counts
            .into_iter()
            .filter(|&(_, count)| count >= threshold)
            .collect();

        #[allow(clippy::cast_precision_loss)]
        let total = self.samples.len() as f64;
        let spikes: Vec<Spike> = spike_values
            .iter()
            .map(|(&bits, &count)| {
                #[allow(clippy::cast_precision_loss)]
                Spike::new(f64::from_bits(bits), count as f64 / total)
            })
            .collect();

        let rest: Vec<f64> = self
            .samples
            .iter()
            .copied()
            .filter(|s| !spike_values.contains_key(&s.to_bits()))
            .collect();
        if rest.is_empty() {
            return PointSetDist::new(spikes, XyCurve::empty());
        }

        #[allow(clippy::cast_precision_loss)]
        let continuous_weight = rest.len() as f64 / total;
        let lo = rest.iter().copied().fold(f64::INFINITY, f64::min);
        let hi = rest.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let kde = GaussianKde::new(rest)?;
        let pad = 3.0 * kde.bandwidth();

        let grid = linspace(lo - pad, hi + pad, env.point_count());
        let points: Vec<XyPoint> = grid
            .into_iter()
            .map(|x| XyPoint::new(x, kde.pdf(x) * continuous_weight))
            .collect();
        let curve = XyCurve::new(points)?;

        trace_debug!(
            samples = self.samples.len(),
            spikes = spikes.len(),
            bandwidth = kde.bandwidth(),
            "estimated point set from samples"
        );
        PointSetDist::new(spikes, curve)
    }
}
