//! Ordered `(x, y)` curves: the continuous half of a point set.
//!
//! An [`XyCurve`] is a piecewise-linear density approximation over a
//! strictly increasing grid. All interpolation, integration, and
//! resampling used by the conversion layer lives here.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A single `(x, y)` pair of a curve or shape.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct XyPoint {
    /// Position on the value axis.
    pub x: f64,
    /// Density (curves) or probability mass (discrete shape points).
    pub y: f64,
}

impl XyPoint {
    /// Creates a new point.
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An ordered sequence of `(x, density)` pairs with strictly increasing x
/// and non-negative finite densities. May be empty (a point set with no
/// continuous part); a non-empty curve has at least two points.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct XyCurve {
    points: Vec<XyPoint>,
}

impl XyCurve {
    /// Creates a curve from points, validating the ordering invariant.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidParameters` if any coordinate is non-finite,
    /// any density is negative, x values are not strictly increasing, or
    /// exactly one point is supplied.
    pub fn new(points: Vec<XyPoint>) -> Result<Self> {
        if points.len() == 1 {
            return Err(Error::InvalidParameters {
                what: "xy curve",
                reason: "a curve needs at least two points (or none)".into(),
            });
        }
        for (i, p) in points.iter().enumerate() {
            if !p.x.is_finite() || !p.y.is_finite() {
                return Err(Error::InvalidParameters {
                    what: "xy curve",
                    reason: format!("point {i} is not finite: ({}, {})", p.x, p.y),
                });
            }
            if p.y < 0.0 {
                return Err(Error::InvalidParameters {
                    what: "xy curve",
                    reason: format!("density at x={} is negative: {}", p.x, p.y),
                });
            }
            if i > 0 && points[i - 1].x >= p.x {
                return Err(Error::InvalidParameters {
                    what: "xy curve",
                    reason: format!(
                        "x values must be strictly increasing, got {} then {}",
                        points[i - 1].x,
                        p.x
                    ),
                });
            }
        }
        Ok(Self { points })
    }

    /// An empty curve (no continuous part).
    #[must_use]
    pub fn empty() -> Self {
        Self { points: Vec::new() }
    }

    /// Returns `true` if the curve has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of grid points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// The grid points in x order.
    #[must_use]
    pub fn points(&self) -> &[XyPoint] {
        &self.points
    }

    /// Smallest x on the grid, if any.
    #[must_use]
    pub fn x_min(&self) -> Option<f64> {
        self.points.first().map(|p| p.x)
    }

    /// Largest x on the grid, if any.
    #[must_use]
    pub fn x_max(&self) -> Option<f64> {
        self.points.last().map(|p| p.x)
    }

    /// Density at `x` by linear interpolation; 0 outside the grid range.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn y_at(&self, x: f64) -> f64 {
        if self.points.is_empty() || !x.is_finite() {
            return 0.0;
        }
        let first = self.points[0];
        let last = self.points[self.points.len() - 1];
        if x < first.x || x > last.x {
            return 0.0;
        }
        // Index of the first grid point at or after x.
        let idx = self.points.partition_point(|p| p.x < x);
        if idx == 0 {
            return first.y;
        }
        let hi = self.points[idx.min(self.points.len() - 1)];
        if hi.x == x {
            return hi.y;
        }
        let lo = self.points[idx - 1];
        let t = (x - lo.x) / (hi.x - lo.x);
        lo.y + t * (hi.y - lo.y)
    }

    /// Total area under the curve by the trapezoid rule.
    #[must_use]
    pub fn integral(&self) -> f64 {
        self.points
            .windows(2)
            .map(|w| (w[1].x - w[0].x) * (w[0].y + w[1].y) * 0.5)
            .sum()
    }

    /// Cumulative trapezoid integral at every grid point.
    ///
    /// Returns one value per point; the first is 0 and the last equals
    /// [`integral`](Self::integral) up to rounding.
    #[must_use]
    pub(crate) fn cumulative(&self) -> Vec<f64> {
        let mut out = Vec::with_capacity(self.points.len());
        let mut acc = 0.0;
        for (i, p) in self.points.iter().enumerate() {
            if i > 0 {
                let prev = self.points[i - 1];
                acc += (p.x - prev.x) * (prev.y + p.y) * 0.5;
            }
            out.push(acc);
        }
        out
    }

    /// Area under the curve from its start up to `x`.
    #[must_use]
    pub fn integral_to(&self, x: f64) -> f64 {
        if self.points.is_empty() {
            return 0.0;
        }
        if x <= self.points[0].x {
            return 0.0;
        }
        if x >= self.points[self.points.len() - 1].x {
            return self.integral();
        }
        let mut acc = 0.0;
        for w in self.points.windows(2) {
            if x >= w[1].x {
                acc += (w[1].x - w[0].x) * (w[0].y + w[1].y) * 0.5;
            } else {
                let y = self.y_at(x);
                acc += (x - w[0].x) * (w[0].y + y) * 0.5;
                break;
            }
        }
        acc
    }

    /// Multiplies every density by `factor` (must be finite and >= 0).
    #[must_use]
    pub fn scale_y(&self, factor: f64) -> Self {
        let points = self
            .points
            .iter()
            .map(|p| XyPoint::new(p.x, p.y * factor))
            .collect();
        Self { points }
    }

    /// Re-evaluates the curve on a new strictly increasing grid by linear
    /// interpolation.
    #[must_use]
    pub fn resample(&self, grid: &[f64]) -> Self {
        let points = grid.iter().map(|&x| XyPoint::new(x, self.y_at(x))).collect();
        Self { points }
    }

    /// Restricts the curve to `[lo, hi]`, inserting exact interpolated
    /// boundary points. Returns an empty curve if the window misses the
    /// grid entirely.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn restrict(&self, lo: f64, hi: f64) -> Self {
        let (Some(x_min), Some(x_max)) = (self.x_min(), self.x_max()) else {
            return Self::empty();
        };
        if hi <= x_min || lo >= x_max {
            return Self::empty();
        }
        let lo = lo.max(x_min);
        let hi = hi.min(x_max);
        let mut points = Vec::new();
        if self.points.iter().all(|p| p.x != lo) {
            points.push(XyPoint::new(lo, self.y_at(lo)));
        }
        points.extend(self.points.iter().filter(|p| p.x >= lo && p.x <= hi));
        if self.points.iter().all(|p| p.x != hi) {
            points.push(XyPoint::new(hi, self.y_at(hi)));
        }
        points.sort_by(|a, b| a.x.total_cmp(&b.x));
        if points.len() < 2 {
            return Self::empty();
        }
        Self { points }
    }

    /// Inverts the cumulative integral: the x where the area from the
    /// start first reaches `target`. `cum` must be this curve's
    /// [`cumulative`](Self::cumulative) output. The cumulative is treated
    /// as piecewise linear, matching how the rest of the engine
    /// interpolates.
    #[must_use]
    pub(crate) fn x_for_cumulative(&self, cum: &[f64], target: f64) -> f64 {
        debug_assert_eq!(cum.len(), self.points.len());
        if self.points.is_empty() {
            return f64::NAN;
        }
        let total = cum[cum.len() - 1];
        if target <= 0.0 {
            return self.points[0].x;
        }
        if target >= total {
            return self.points[self.points.len() - 1].x;
        }
        let idx = cum.partition_point(|&c| c < target).max(1);
        let (c0, c1) = (cum[idx - 1], cum[idx]);
        let (x0, x1) = (self.points[idx - 1].x, self.points[idx].x);
        if c1 <= c0 {
            return x0;
        }
        x0 + (target - c0) / (c1 - c0) * (x1 - x0)
    }
}

/// A strictly increasing grid of `n` values from `lo` to `hi` inclusive.
///
/// `n` must be at least 2 and `lo < hi`; the caller guarantees both (grid
/// sizes come from a validated [`Env`](crate::Env), bounds from validated
/// distributions).
#[must_use]
pub(crate) fn linspace(lo: f64, hi: f64, n: usize) -> Vec<f64> {
    debug_assert!(n >= 2);
    debug_assert!(lo < hi);
    #[allow(clippy::cast_precision_loss)]
    let step = (hi - lo) / (n - 1) as f64;
    let mut out = Vec::with_capacity(n);
    for i in 0..n {
        #[allow(clippy::cast_precision_loss)]
        let x = lo + step * i as f64;
        out.push(x);
    }
    // Land exactly on hi regardless of rounding.
    out[n - 1] = hi;
    out
}
