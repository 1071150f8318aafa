//! Read-only rendering projection of a point set.
//!
//! A [`Shape`] is what chart layers consume: the discrete spikes as
//! `(value, mass)` marks and the continuous curve as `(x, density)`
//! points, plus the domain helpers renderers need to size axes. The
//! engine reports the true domain even when it would be invalid on a
//! logarithmic axis; refusing or clamping is the renderer's concern.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::xy::XyPoint;

const SPARKLINE_GLYPHS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// The renderable view of a distribution: discrete `(value, mass)` marks
/// and a continuous `(x, density)` curve.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Shape {
    discrete: Vec<XyPoint>,
    continuous: Vec<XyPoint>,
}

impl Shape {
    pub(crate) fn new(discrete: Vec<XyPoint>, continuous: Vec<XyPoint>) -> Self {
        Self {
            discrete,
            continuous,
        }
    }

    /// Discrete `(value, mass)` marks, sorted by value.
    #[must_use]
    pub fn discrete(&self) -> &[XyPoint] {
        &self.discrete
    }

    /// Continuous `(x, density)` points, sorted by x.
    #[must_use]
    pub fn continuous(&self) -> &[XyPoint] {
        &self.continuous
    }

    fn xs(&self) -> impl Iterator<Item = f64> + '_ {
        self.discrete
            .iter()
            .chain(self.continuous.iter())
            .map(|p| p.x)
    }

    /// Smallest x across both parts, if the shape is non-empty.
    #[must_use]
    pub fn x_min(&self) -> Option<f64> {
        self.xs().reduce(f64::min)
    }

    /// Largest x across both parts, if the shape is non-empty.
    #[must_use]
    pub fn x_max(&self) -> Option<f64> {
        self.xs().reduce(f64::max)
    }

    /// Largest y across both parts, if the shape is non-empty. Note the
    /// two parts carry different units (mass vs density); this is an axis
    /// bound, not a probability.
    #[must_use]
    pub fn y_max(&self) -> Option<f64> {
        self.discrete
            .iter()
            .chain(self.continuous.iter())
            .map(|p| p.y)
            .reduce(f64::max)
    }

    /// Whether any part of the shape sits at or below zero, which makes
    /// it ineligible for a logarithmic x axis.
    #[must_use]
    pub fn has_mass_at_or_below_zero(&self) -> bool {
        self.xs().any(|x| x <= 0.0)
    }

    /// A one-line unicode rendering of the probability profile.
    ///
    /// Buckets the combined mass of both parts into `buckets` equal-width
    /// bins over the shape's x range and maps each bin to one of eight
    /// block glyphs scaled by the fullest bin. Returns an empty string for
    /// an empty shape or `buckets == 0`.
    #[must_use]
    pub fn sparkline(&self, buckets: usize) -> String {
        let (Some(x_min), Some(x_max)) = (self.x_min(), self.x_max()) else {
            return String::new();
        };
        if buckets == 0 {
            return String::new();
        }
        let width = if x_max > x_min { x_max - x_min } else { 1.0 };
        let mut bins = vec![0.0_f64; buckets];
        #[allow(clippy::cast_precision_loss)]
        let bucket_of = |x: f64| -> usize {
            let t = (x - x_min) / width * buckets as f64;
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let idx = t.floor() as usize;
            idx.min(buckets - 1)
        };
        for p in &self.discrete {
            bins[bucket_of(p.x)] += p.y;
        }
        // Approximate each curve segment's area into the bin of its midpoint.
        for w in self.continuous.windows(2) {
            let area = (w[1].x - w[0].x) * (w[0].y + w[1].y) * 0.5;
            bins[bucket_of(0.5 * (w[0].x + w[1].x))] += area;
        }
        let peak = bins.iter().copied().fold(0.0_f64, f64::max);
        if peak <= 0.0 {
            return SPARKLINE_GLYPHS[0].to_string().repeat(buckets);
        }
        bins.iter()
            .map(|&b| {
                #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                let level = ((b / peak) * 7.0).round() as usize;
                SPARKLINE_GLYPHS[level.min(7)]
            })
            .collect()
    }
}
