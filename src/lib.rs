//! Interpolation of 2π-periodic functions of one variable, no-std compatible,
//! prioritizing correctness and throughput on large batches of observation points.
//!
//! Two interpolants are provided, both fitted once from an odd number of samples
//! at strictly ascending positions in `[0, 2π)` and then evaluated any number of times:
//!
//! * [`TrigonometricInterpolant`] fits a truncated Fourier series through the samples
//!   with a dense solve. Evaluation needs no interval search.
//! * [`CubicPeriodicSplineInterpolant`] fits a twice continuously differentiable
//!   periodic cubic spline with a cyclic tridiagonal solve, and supports
//!   non-equidistant samples. Evaluation performs a bisection search for the
//!   containing segment.
//!
//! | Method                          | RAM   | Fit      | Eval. Cost per point |
//! |---------------------------------|-------|----------|----------------------|
//! | TrigonometricInterpolant        | O(n)  | O(n^3)   | O(n)                 |
//! | CubicPeriodicSplineInterpolant  | O(n)  | O(n)     | O(1) + log2(n)       |
//!
//! Fitted interpolants are immutable, so a single instance can be shared
//! between threads and evaluated concurrently. With the `rayon` feature,
//! [`PeriodicInterp1D::par_evaluate`] splits one large batch across threads.
//!
//! # Example: Closed Planar Curve
//! Each coordinate of a parametric curve `(x(t), y(t))` is interpolated independently.
//! ```rust
//! use periodic_interp::{utils, CubicPeriodicSplineInterpolant, PeriodicInterp1D, TrigonometricInterpolant};
//!
//! // Samples of a closed curve at equidistant parameter values
//! let t = utils::periodic_linspace::<f64>(9);
//! let x: Vec<f64> = t.iter().map(|&t| 0.3 * t.cos() + 0.15 * (2.0 * t).cos()).collect();
//! let y: Vec<f64> = t.iter().map(|&t| 0.3 * t.sin()).collect();
//!
//! // Observation points
//! let obs = utils::linspace(0.0, std::f64::consts::TAU, 1000);
//!
//! // Trigonometric interpolation
//! let qx = TrigonometricInterpolant::new(&t, &x).unwrap().evaluate(&obs).unwrap();
//! let qy = TrigonometricInterpolant::new(&t, &y).unwrap().evaluate(&obs).unwrap();
//!
//! // Spline interpolation, with samples spaced by chord length instead
//! let tneq = utils::chord_length_positions(&x, &y).unwrap();
//! let sx = CubicPeriodicSplineInterpolant::new(&tneq, &x).unwrap();
//! let sy = CubicPeriodicSplineInterpolant::new(&tneq, &y).unwrap();
//!
//! // Storage for output
//! let mut out = vec![0.0; obs.len()];
//! sx.eval(&obs, &mut out).unwrap();
//! sy.eval(&obs, &mut out).unwrap();
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
// These "needless" range loops are a significant speedup
#![allow(clippy::needless_range_loop)]

extern crate alloc;

mod error;
pub use error::Error;

pub mod linalg;

pub mod one_dim;
pub use one_dim::{
    spline::CubicPeriodicSplineInterpolant, trigonometric::TrigonometricInterpolant,
    PeriodicInterp1D,
};

#[cfg(feature = "std")]
pub mod utils;

#[cfg(all(test, feature = "std"))]
pub(crate) mod testing;
