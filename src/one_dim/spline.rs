//! Cubic periodic spline interpolation.
//!
//! The spline is twice continuously differentiable everywhere, including
//! across the closing segment from the last sample back to the first sample
//! of the next period. Samples may be placed non-equidistantly.
//!
//! Fitting solves a cyclic tridiagonal system for the second derivative
//! ("moment") `m_j` at each knot. At each knot `j`, with `h` the segment lengths,
//!
//! ```text
//! mu_j m_{j-1} + 2 m_j + lambda_j m_{j+1} = d_j
//! mu_j = h_{j-1} / (h_{j-1} + h_j),  lambda_j = 1 - mu_j
//! ```
//!
//! where indices wrap around the period and `d_j` is six times the
//! second divided difference of the samples.
//!
//! On segment `i`, the spline is then written in centered form
//!
//! ```text
//! s(t) = C_i + D_i (t - mid_i) + (m_{i+1} (t - t_i)^3 - m_i (t - t_{i+1})^3) / (6 h_i)
//! ```
//!
//! ```rust
//! use periodic_interp::{CubicPeriodicSplineInterpolant, PeriodicInterp1D};
//! use std::f64::consts::TAU;
//!
//! // Non-equidistant samples of a periodic function
//! let t = [0.0, 0.4, 1.9, 3.0, 5.5];
//! let f: Vec<f64> = t.iter().map(|x: &f64| x.sin()).collect();
//!
//! let s = CubicPeriodicSplineInterpolant::new(&t, &f).unwrap();
//!
//! // Observation points may be anywhere on the real line
//! let y = s.evaluate(&[1.9, 1.9 + TAU, 1.9 - TAU]).unwrap();
//! assert!(y.iter().all(|v| (v - f[2]).abs() < 1e-12));
//! ```
use alloc::vec;
use alloc::vec::Vec;

use num_traits::{Float, FloatConst};

use super::{period, validate_samples, PeriodicInterp1D};
use crate::linalg::solve_cyclic_tridiagonal;
use crate::Error;

/// Cubic periodic spline through an odd number of samples in `[0, 2π)`.
///
/// Operation Complexity
/// * O(n) to fit, from the cyclic tridiagonal solve.
/// * O(log2(n)) per observation point, from a bisection search for the segment.
///
/// Memory Complexity
/// * O(n); five arrays of about n entries each.
#[derive(Debug, Clone, PartialEq)]
pub struct CubicPeriodicSplineInterpolant<T> {
    /// Knots, including the closing knot `t[n] = t[0] + 2π`
    t: Vec<T>,

    /// Segment lengths `h[i] = t[i + 1] - t[i]`, size n
    h: Vec<T>,

    /// Moments, including the closing moment `m[n] = m[0]`
    m: Vec<T>,

    /// Centered constant term of each segment, size n
    c: Vec<T>,

    /// Centered linear term of each segment, size n
    d: Vec<T>,

    /// Length of one period
    period: T,
}

impl<T: Float + FloatConst> CubicPeriodicSplineInterpolant<T> {
    /// Fit the spline to samples `values` taken at `positions`.
    ///
    /// # Errors
    /// * If there are fewer than 3 or an even number of samples
    /// * If `positions` and `values` have different lengths
    /// * If the positions are not strictly ascending inside `[0, 2π)`
    /// * If the moment system is numerically singular
    pub fn new(positions: &[T], values: &[T]) -> Result<Self, Error> {
        validate_samples(positions, values)?;

        let n = positions.len();
        let period = period::<T>();
        let one = T::one();
        let two = one + one;
        let six = two + two + two;
        let twelve = six + six;

        // Close the period with a synthetic final knot
        let mut t = Vec::with_capacity(n + 1);
        t.extend_from_slice(positions);
        t.push(positions[0] + period);

        let mut f = Vec::with_capacity(n + 1);
        f.extend_from_slice(values);
        f.push(values[0]);

        let h: Vec<T> = t.windows(2).map(|w| w[1] - w[0]).collect();

        // Row j of the moment system couples knot j to its neighbors,
        // wrapping from knot 0 back to knot n - 1
        let mut lower = vec![T::zero(); n];
        let mut upper = vec![T::zero(); n];
        let mut rhs = vec![T::zero(); n];
        let diag = vec![two; n];
        for j in 0..n {
            let prev = (j + n - 1) % n;
            let (hl, hr) = (h[prev], h[j]);
            let span = hl + hr;

            let mu = hl / span;
            lower[j] = mu;
            upper[j] = one - mu;

            let slope_right = (f[j + 1] - f[j]) / hr;
            let slope_left = (f[j] - f[prev]) / hl;
            rhs[j] = (slope_right - slope_left) / span * six;
        }

        let mut m = solve_cyclic_tridiagonal(&lower, &diag, &upper, &rhs)?;
        m.push(m[0]);
        tracing::trace!(segments = n, "solved periodic moment system");

        let mut c = Vec::with_capacity(n);
        let mut d = Vec::with_capacity(n);
        for i in 0..n {
            let hi = h[i];
            c.push((f[i + 1] + f[i]) / two - hi * hi / twelve * (m[i + 1] + m[i]));
            d.push((f[i + 1] - f[i]) / hi - hi / six * (m[i + 1] - m[i]));
        }

        tracing::debug!(samples = n, "fitted cubic periodic spline");

        Ok(Self {
            t,
            h,
            m,
            c,
            d,
            period,
        })
    }

    /// Number of cubic segments, equal to the number of samples
    pub fn segment_count(&self) -> usize {
        self.h.len()
    }

    /// Knots, including the closing knot one period after the first
    pub fn knots(&self) -> &[T] {
        &self.t
    }

    /// Second derivative of the spline at each knot,
    /// including the closing knot
    pub fn moments(&self) -> &[T] {
        &self.m
    }

    /// Map an observation point into the fitted period `[t[0], t[0] + 2π)`.
    ///
    /// Points already inside the period are returned unchanged.
    #[inline]
    fn wrap(&self, loc: T) -> T {
        let turns = ((loc - self.t[0]) / self.period).floor();
        loc - turns * self.period
    }

    /// Get the index of the segment containing `loc`,
    /// saturating to the first or last segment at the edges.
    ///
    /// Rounding in `wrap` can land a point exactly on the closing knot;
    /// that saturates to the last segment, where the spline takes the
    /// same value as at the first knot.
    #[inline]
    fn index(&self, loc: T) -> usize {
        // Bisection search to find location on the grid.
        //
        // Returns the number of knots at or below `loc`.
        let iloc = self.t.partition_point(|&x| x <= loc);

        iloc.saturating_sub(1).min(self.h.len() - 1)
    }
}

impl<T: Float + FloatConst> PeriodicInterp1D<T> for CubicPeriodicSplineInterpolant<T> {
    #[inline]
    fn eval_finite(&self, loc: T) -> T {
        let two = T::one() + T::one();
        let six = two + two + two;

        let loc = self.wrap(loc);
        let i = self.index(loc);

        let (t0, t1) = (self.t[i], self.t[i + 1]);
        let mid = (t0 + t1) / two;
        let dl = loc - t0;
        let dr = loc - t1;

        let cubic = self.m[i + 1] * dl * dl * dl - self.m[i] * dr * dr * dr;

        self.c[i] + self.d[i] * (loc - mid) + cubic / (six * self.h[i])
    }
}
