//! Continuous resampling of structured scalar fields.
//!
//! [`resample`] maps a [`ScalarField`](regrid_core::ScalarField) sampled
//! on one node lattice onto a different per-axis node count over the same
//! domain, using tensor-product natural cubic spline interpolation. The
//! field stays flat in node ordering throughout; each axis is traversed
//! with stride arithmetic rather than materializing an N-d array.
//!
//! # Sample mapping
//!
//! Output node `k` along an axis evaluates the source-axis spline at
//! `t = k · (n_old − 1)/(n_new − 1)`. Endpoints map to endpoints, so
//! corner samples survive any resolution change exactly and resampling to
//! the current counts reproduces the input to floating-point precision.
//! Evaluation is clamped to the sampled parameter range; the mapping
//! never requests extrapolation.
//!
//! Cubic interpolation can overshoot near sharp gradients when
//! downsampling. That behavior is inherited from the interpolant and left
//! as-is; callers needing monotone downsampling must filter beforehand.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod spline;
pub mod zoom;

pub use error::ResampleError;
pub use spline::CubicSpline;
pub use zoom::resample;
