//! Interpolation by a truncated real Fourier series.
//!
//! For `n = 2N + 1` samples of a 2π-periodic function, the interpolant is
//!
//! ```text
//! q(t) = a0 / 2 + sum_{k=1..N} ( a_k cos(k t) + b_k sin(k t) )
//! ```
//!
//! with the `n` coefficients chosen so that `q` passes through every sample.
//! The coefficients come from a dense solve of the design matrix, so the
//! samples do not need to be equidistant.
//!
//! ```rust
//! use periodic_interp::{PeriodicInterp1D, TrigonometricInterpolant};
//! use std::f64::consts::PI;
//!
//! // Samples of cos(t)
//! let t = [0.0, 2.0 * PI / 3.0, 4.0 * PI / 3.0];
//! let f = [1.0, -0.5, -0.5];
//!
//! let q = TrigonometricInterpolant::new(&t, &f).unwrap();
//! let y = q.evaluate(&[PI / 3.0]).unwrap();
//! assert!((y[0] - 0.5).abs() < 1e-12);
//! ```
use alloc::vec::Vec;

use num_traits::{Float, FloatConst};

use super::{validate_samples, PeriodicInterp1D};
use crate::linalg::solve_dense;
use crate::Error;

/// Trigonometric polynomial through an odd number of periodic samples.
///
/// Operation Complexity
/// * O(n^3) to fit, from the dense solve.
/// * O(n) per observation point, with no interval search.
#[derive(Debug, Clone, PartialEq)]
pub struct TrigonometricInterpolant<T> {
    /// Constant term followed by the cosine coefficients, length N + 1
    a: Vec<T>,

    /// Sine coefficients, length N
    b: Vec<T>,
}

impl<T: Float + FloatConst> TrigonometricInterpolant<T> {
    /// Fit the interpolant to samples `values` taken at `positions`.
    ///
    /// # Errors
    /// * If there are fewer than 3 or an even number of samples
    /// * If `positions` and `values` have different lengths
    /// * If the positions are not strictly ascending inside `[0, 2π)`
    /// * If the design matrix is numerically singular
    pub fn new(positions: &[T], values: &[T]) -> Result<Self, Error> {
        validate_samples(positions, values)?;

        let n = positions.len();
        let degree = (n - 1) / 2;
        let half = T::one() / (T::one() + T::one());

        // Row i is [1/2, cos(t_i), ..., cos(N t_i), sin(t_i), ..., sin(N t_i)]
        let mut design = Vec::with_capacity(n * n);
        for &t in positions {
            design.push(half);
            let mut sines = Vec::with_capacity(degree);
            for k in 1..=degree {
                let k = T::from(k).ok_or(Error::InvalidInput("Unrepresentable number"))?;
                let (s, c) = (k * t).sin_cos();
                design.push(c);
                sines.push(s);
            }
            design.extend(sines);
        }

        let mut coeffs = solve_dense(design, values.to_vec())?;
        let b = coeffs.split_off(degree + 1);
        let a = coeffs;

        tracing::debug!(samples = n, degree, "fitted trigonometric interpolant");

        Ok(Self { a, b })
    }

    /// Degree `N` of the polynomial, where `n = 2N + 1` samples were fitted
    pub fn degree(&self) -> usize {
        self.b.len()
    }

    /// Coefficients `a_0, ..., a_N`; `a_0 / 2` is the mean of the interpolant
    pub fn cos_coefficients(&self) -> &[T] {
        &self.a
    }

    /// Coefficients `b_1, ..., b_N`
    pub fn sin_coefficients(&self) -> &[T] {
        &self.b
    }
}

impl<T: Float + FloatConst> PeriodicInterp1D<T> for TrigonometricInterpolant<T> {
    #[inline]
    fn eval_finite(&self, loc: T) -> T {
        let two = T::one() + T::one();
        let (s1, c1) = loc.sin_cos();

        // Step cos(k t) and sin(k t) forward with the angle-addition
        // identities rather than one sin_cos per harmonic
        let (mut ck, mut sk) = (c1, s1);
        let mut acc = self.a[0] / two;
        for k in 1..self.a.len() {
            acc = acc + self.a[k] * ck + self.b[k - 1] * sk;
            let c_next = ck * c1 - sk * s1;
            sk = sk * c1 + ck * s1;
            ck = c_next;
        }

        acc
    }
}

#[cfg(test)]
mod test {
    use super::TrigonometricInterpolant;
    use crate::one_dim::PeriodicInterp1D;
    use crate::testing::{jittered_positions, randn, rng_fixed_seed};
    use crate::utils::{linspace, periodic_linspace};
    use crate::Error;
    use core::f64::consts::{PI, TAU};

    #[test]
    fn test_recovers_cosine() {
        let t = [0.0, 2.0 * PI / 3.0, 4.0 * PI / 3.0];
        let f = [1.0, -0.5, -0.5];

        let q = TrigonometricInterpolant::new(&t, &f).unwrap();

        assert_eq!(q.degree(), 1);
        let (a, b) = (q.cos_coefficients(), q.sin_coefficients());
        assert!(a[0].abs() < 1e-9);
        assert!((a[1] - 1.0).abs() < 1e-9);
        assert!(b[0].abs() < 1e-9);

        let y = q.evaluate(&[PI / 3.0]).unwrap();
        assert!((y[0] - 0.5).abs() < 1e-9);
    }

    /// A band-limited function is reproduced everywhere, not just at the samples
    #[test]
    fn test_band_limited_exact() {
        let fx = |t: f64| 0.3 * t.cos() + 0.15 * (2.0 * t).cos();
        let fy = |t: f64| 0.3 * t.sin();

        let t = periodic_linspace(9);
        let obs = linspace(0.0, TAU, 1000);

        for func in [&fx as &dyn Fn(f64) -> f64, &fy] {
            let f: Vec<f64> = t.iter().map(|&x| func(x)).collect();
            let q = TrigonometricInterpolant::new(&t, &f).unwrap();
            let out = q.evaluate(&obs).unwrap();

            (0..obs.len()).for_each(|i| assert!((out[i] - func(obs[i])).abs() < 1e-12));
        }
    }

    /// Exact at the samples, and periodic, for non-equidistant positions
    #[test]
    fn test_interp_random_positions() {
        let mut rng = rng_fixed_seed();

        for n in [3, 5, 7, 11] {
            let t = jittered_positions(&mut rng, n, 0.8);
            let f = randn::<f64>(&mut rng, n);

            let q = TrigonometricInterpolant::new(&t, &f).unwrap();

            let out = q.evaluate(&t).unwrap();
            (0..n).for_each(|i| assert!((out[i] - f[i]).abs() < 1e-9));

            let shifted: Vec<f64> = t.iter().map(|x| x + TAU).collect();
            let out_shifted = q.evaluate(&shifted).unwrap();
            (0..n).for_each(|i| assert!((out_shifted[i] - out[i]).abs() < 1e-9));
        }
    }

    #[test]
    fn test_rejects_invalid_samples() {
        let even = TrigonometricInterpolant::new(&[0.0, 1.0, 2.0, 3.0], &[0.0; 4]);
        assert!(matches!(even, Err(Error::InvalidInput(_))));

        let unordered = TrigonometricInterpolant::new(&[1.0, 0.5, 2.0], &[0.0; 3]);
        assert!(matches!(unordered, Err(Error::InvalidInput(_))));

        let out_of_range = TrigonometricInterpolant::new(&[0.0, 1.0, 6.3], &[0.0; 3]);
        assert!(matches!(out_of_range, Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_rejects_malformed_query() {
        let t = periodic_linspace(5);
        let q = TrigonometricInterpolant::new(&t, &[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();

        assert_eq!(
            q.evaluate(&[0.0, f64::INFINITY, 1.0]),
            Err(Error::MalformedQuery { index: 1 })
        );
        assert_eq!(q.eval_one(f64::NAN), Err(Error::MalformedQuery { index: 0 }));

        let mut out = [0.0; 2];
        assert!(matches!(
            q.eval(&[0.0, 1.0, 2.0], &mut out),
            Err(Error::InvalidInput(_))
        ));
    }

    /// Two positions a subnormal apart give two identical design rows
    #[test]
    fn test_singular_samples() {
        let t = [0.0, 5e-324, 1.0];
        let f = [0.0, 1.0, 0.0];

        assert_eq!(
            TrigonometricInterpolant::new(&t, &f),
            Err(Error::SingularSystem)
        );
    }

    #[test]
    fn test_batch_matches_single() {
        let t = periodic_linspace(7);
        let f = [0.5, -1.0, 2.0, 0.0, 1.5, -0.3, 0.9];
        let q = TrigonometricInterpolant::new(&t, &f).unwrap();

        let obs = [0.1, 3.0, 6.2];
        let batch = q.evaluate(&obs).unwrap();
        for i in 0..obs.len() {
            assert_eq!(batch[i], q.eval_one(obs[i]).unwrap());
        }

        // Bit-identical on repeat
        assert_eq!(batch, q.evaluate(&obs).unwrap());
    }

    #[test]
    fn test_f32() {
        let t: Vec<f32> = periodic_linspace(5);
        let f: Vec<f32> = t.iter().map(|x| x.sin() + 1.0).collect();
        let q = TrigonometricInterpolant::new(&t, &f).unwrap();

        let out = q.evaluate(&t).unwrap();
        (0..t.len()).for_each(|i| assert!((out[i] - f[i]).abs() < 1e-5));
    }
}
