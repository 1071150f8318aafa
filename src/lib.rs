#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![deny(unreachable_pub)]
#![deny(clippy::correctness)]
#![deny(clippy::suspicious)]
#![deny(clippy::style)]
#![deny(clippy::complexity)]
#![deny(clippy::perf)]
#![deny(clippy::pedantic)]
#![deny(clippy::std_instead_of_core)]

//! Distribution operations engine for probabilistic estimation. One value
//! type covers three interchangeable representations (closed-form symbolic
//! families, Monte Carlo sample sets, discretized point sets) with
//! budgeted conversions between them, weighted mixtures, arithmetic that
//! stays symbolic wherever a closed form exists, and log scoring of
//! estimates against observed outcomes. No feature flags are required for
//! the common case.
//!
//! # Getting Started
//!
//! Combine two forecasts and score the blend against what actually
//! happened:
//!
//! ```
//! use distops::prelude::*;
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let env = Env::default();
//! let mut rng = StdRng::seed_from_u64(7);
//!
//! let optimistic = Distribution::from(SymbolicDist::normal(12.0, 2.0)?);
//! let pessimistic = Distribution::from(SymbolicDist::normal(5.0, 3.0)?);
//! let estimate = mixture(
//!     &[(optimistic, 0.6), (pessimistic, 0.4)],
//!     &env,
//!     &mut rng,
//! )?;
//!
//! let score = log_score_scalar_answer(&estimate, 9.0, None, &env)?;
//! assert!(score.is_finite());
//! # Ok::<(), distops::Error>(())
//! ```
//!
//! # Core Concepts
//!
//! | Type | Role |
//! |------|------|
//! | [`Distribution`] | A probability distribution in one of three forms, closed under every operation. |
//! | [`SymbolicDist`] | Closed-form families: normal, log-normal, beta, gamma, triangular, and friends. |
//! | [`SampleSetDist`] | Monte Carlo draws; the fallback representation for arbitrary arithmetic. |
//! | [`PointSetDist`] | Discrete spikes plus a density curve; the normal form for scoring and rendering. |
//! | [`Env`] | Evaluation budgets: sample count, discretization grid size, numeric tolerance. |
//! | [`Shape`] | Render-ready projection of a point set for plotting front ends. |
//!
//! # Operations
//!
//! | Operation | Effect |
//! |-----------|--------|
//! | [`mixture`] | Weighted combination; weights normalize by their sum. |
//! | [`binary_op`] / [`unary_op`] | Arithmetic on distributions, symbolic where a closed form exists. |
//! | [`log_score_scalar_answer`] | Negative log density at an observed value, optionally relative to a prior. |
//! | [`log_score_dist_answer`] | Divergence of the estimate from a full answer distribution. |
//! | [`Distribution::truncate`] | Restrict to a window and renormalize. |
//! | [`Distribution::to_point_set`] / [`Distribution::to_sample_set`] | Explicit representation changes under the environment's budgets. |
//!
//! # Feature Flags
//!
//! | Flag | What it enables | Default |
//! |------|----------------|---------|
//! | `serde` | `Serialize`/`Deserialize` on [`Env`], sample and point-set forms, and [`Shape`] | off |
//! | `tracing` | Structured log events via [`tracing`](https://docs.rs/tracing) at conversion and combination points | off |

/// Emit a `tracing::info!` event when the `tracing` feature is enabled.
/// No-op otherwise.
#[cfg(feature = "tracing")]
macro_rules! trace_info {
    ($($arg:tt)*) => { tracing::info!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_info {
    ($($arg:tt)*) => {};
}

/// Emit a `tracing::debug!` event when the `tracing` feature is enabled.
/// No-op otherwise.
#[cfg(feature = "tracing")]
macro_rules! trace_debug {
    ($($arg:tt)*) => { tracing::debug!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_debug {
    ($($arg:tt)*) => {};
}

mod dist;
mod env;
mod error;
mod kde;
mod point_set;
mod rng_util;
mod sample_set;
mod shape;
pub mod symbolic;
mod xy;

pub use dist::{
    BinaryOp, Distribution, UnaryOp, binary_op, log_score_dist_answer,
    log_score_scalar_answer, mixture, unary_op,
};
pub use env::{DEFAULT_POINT_COUNT, DEFAULT_SAMPLE_COUNT, DEFAULT_TOLERANCE, Env};
pub use error::{Error, Result};
pub use point_set::{PointSetDist, Spike};
pub use sample_set::{MIN_SAMPLES_FOR_DENSITY, SampleSetDist};
pub use shape::Shape;
pub use symbolic::SymbolicDist;
pub use xy::{XyCurve, XyPoint};

/// Convenient wildcard import for the most common types.
///
/// ```
/// use distops::prelude::*;
/// ```
pub mod prelude {
    pub use crate::dist::{
        BinaryOp, Distribution, UnaryOp, binary_op, log_score_dist_answer,
        log_score_scalar_answer, mixture, unary_op,
    };
    pub use crate::env::Env;
    pub use crate::error::{Error, Result};
    pub use crate::point_set::{PointSetDist, Spike};
    pub use crate::sample_set::SampleSetDist;
    pub use crate::shape::Shape;
    pub use crate::symbolic::SymbolicDist;
    pub use crate::xy::{XyCurve, XyPoint};
}
