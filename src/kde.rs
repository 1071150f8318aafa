//! Kernel density estimation for sample sets.
//!
//! Converting a sample set into a point-set density curve places a
//! Gaussian kernel at every sample and evaluates the sum on a regular
//! grid. Only the non-spike remainder of a sample set is fed through
//! here; exact repeats are split off as discrete spikes first.

use crate::error::{Error, Result};

/// A Gaussian kernel density estimate over a set of samples.
#[derive(Clone, Debug)]
pub(crate) struct GaussianKde {
    samples: Vec<f64>,
    bandwidth: f64,
}

impl GaussianKde {
    /// Creates an estimate with a rule-of-thumb bandwidth.
    ///
    /// # Errors
    ///
    /// Returns `Error::InsufficientSamples` if `samples` is empty.
    pub(crate) fn new(samples: Vec<f64>) -> Result<Self> {
        if samples.is_empty() {
            return Err(Error::InsufficientSamples { got: 0, required: 1 });
        }
        let bandwidth = rule_of_thumb(&samples);
        Ok(Self { samples, bandwidth })
    }

    /// Creates an estimate with an explicit bandwidth.
    ///
    /// # Errors
    ///
    /// Returns `Error::InsufficientSamples` if `samples` is empty and
    /// `Error::InvalidParameters` if `bandwidth` is not positive.
    #[cfg(test)]
    pub(crate) fn with_bandwidth(samples: Vec<f64>, bandwidth: f64) -> Result<Self> {
        if samples.is_empty() {
            return Err(Error::InsufficientSamples { got: 0, required: 1 });
        }
        if !bandwidth.is_finite() || bandwidth <= 0.0 {
            return Err(Error::InvalidParameters {
                what: "kde bandwidth",
                reason: format!("bandwidth must be positive, got {bandwidth}"),
            });
        }
        Ok(Self { samples, bandwidth })
    }

    /// Estimated density at `x`: the average of the kernels evaluated
    /// there, each a Gaussian of width [`bandwidth`](Self::bandwidth)
    /// centered on one sample.
    #[allow(clippy::cast_precision_loss)]
    pub(crate) fn pdf(&self, x: f64) -> f64 {
        let sum: f64 = self
            .samples
            .iter()
            .map(|&center| {
                let z = (x - center) / self.bandwidth;
                (-0.5 * z * z).exp()
            })
            .sum();
        let scale =
            self.samples.len() as f64 * self.bandwidth * (2.0 * core::f64::consts::PI).sqrt();
        sum / scale
    }

    /// The kernel width. Grid construction pads the sample range by a few
    /// of these so the density tails are not cut off.
    pub(crate) fn bandwidth(&self) -> f64 {
        self.bandwidth
    }
}

/// Rule-of-thumb bandwidth: `0.9 min(sigma, iqr / 1.34) n^(-1/5)`.
///
/// The interquartile guard keeps heavy tails from inflating the kernel
/// width on skewed data. When the spread degenerates to zero the
/// bandwidth falls back to 1 so the estimate stays well defined.
#[allow(clippy::cast_precision_loss)]
fn rule_of_thumb(samples: &[f64]) -> f64 {
    let n = samples.len() as f64;
    let mean = samples.iter().sum::<f64>() / n;
    let std_dev = (samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n).sqrt();

    let mut sorted = samples.to_vec();
    sorted.sort_unstable_by(f64::total_cmp);
    let iqr = quartile(&sorted, 0.75) - quartile(&sorted, 0.25);

    let spread = if iqr > 0.0 {
        std_dev.min(iqr / 1.34)
    } else {
        std_dev
    };
    if spread < f64::EPSILON {
        return 1.0;
    }
    0.9 * spread * n.powf(-0.2)
}

/// Order statistic at fraction `p` of a sorted slice, interpolating
/// between neighbors.
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
fn quartile(sorted: &[f64], p: f64) -> f64 {
    let h = (sorted.len() - 1) as f64 * p;
    let lo = h.floor() as usize;
    let hi = (lo + 1).min(sorted.len() - 1);
    sorted[lo] + (h - lo as f64) * (sorted[hi] - sorted[lo])
}
