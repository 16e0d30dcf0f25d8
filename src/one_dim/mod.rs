//! One-dimensional interpolation of 2π-periodic functions.
//!
//! Both interpolants here are fitted once from a set of samples and then
//! evaluated any number of times, so they own a small amount of solved
//! coefficient data rather than borrowing the samples.

pub mod spline;
pub mod trigonometric;

#[cfg(feature = "std")]
use alloc::vec;
#[cfg(feature = "std")]
use alloc::vec::Vec;

use num_traits::{Float, FloatConst};

use crate::Error;

/// Length of one period, 2π, in the working float type
#[inline]
pub(crate) fn period<T: Float + FloatConst>() -> T {
    T::PI() + T::PI()
}

/// Check a sample set before fitting.
///
/// Positions must be finite, strictly ascending, and inside `[0, 2π)`;
/// there must be an odd number (at least 3) of them, with one value each.
pub(crate) fn validate_samples<T: Float + FloatConst>(
    positions: &[T],
    values: &[T],
) -> Result<(), Error> {
    let n = positions.len();
    if n < 3 {
        return Err(Error::InvalidInput("At least 3 samples are required"));
    }
    if n % 2 == 0 {
        return Err(Error::InvalidInput("Even number of samples"));
    }
    if values.len() != n {
        return Err(Error::InvalidInput("Length mismatch"));
    }
    if !positions.iter().chain(values.iter()).all(|v| v.is_finite()) {
        return Err(Error::InvalidInput("Samples must be finite"));
    }
    // Each consecutive pair, so a single out-of-order entry is caught
    if positions.windows(2).any(|w| w[1] <= w[0]) {
        return Err(Error::InvalidInput("Positions must be strictly ascending"));
    }
    if positions[0] < T::zero() || positions[n - 1] >= period() {
        return Err(Error::InvalidInput("Positions must be inside [0, 2pi)"));
    }

    Ok(())
}

/// Index of the first non-finite observation point, if any
#[inline]
fn first_malformed<T: Float>(locs: &[T]) -> Option<usize> {
    locs.iter().position(|x| !x.is_finite())
}

/// A fitted interpolant of a 2π-periodic function of one variable.
pub trait PeriodicInterp1D<T: Float> {
    /// Evaluate the interpolant at an observation point
    /// that is already known to be finite.
    ///
    /// It is highly recommended to inline implementations of this function.
    fn eval_finite(&self, loc: T) -> T;

    /// Evaluate the interpolant at an observation point.
    ///
    /// # Errors
    /// * If the observation point is NaN or infinite
    #[inline]
    fn eval_one(&self, loc: T) -> Result<T, Error> {
        match loc.is_finite() {
            true => Ok(self.eval_finite(loc)),
            false => Err(Error::MalformedQuery { index: 0 }),
        }
    }

    /// Evaluate the interpolant at a set of observation points.
    ///
    /// The whole batch is checked before any output is written.
    ///
    /// # Errors
    /// * If `locs` and `out` have different lengths
    /// * If any observation point is NaN or infinite
    #[inline]
    fn eval(&self, locs: &[T], out: &mut [T]) -> Result<(), Error> {
        if locs.len() != out.len() {
            return Err(Error::InvalidInput("Length mismatch"));
        }
        if let Some(index) = first_malformed(locs) {
            return Err(Error::MalformedQuery { index });
        }

        for i in 0..locs.len() {
            out[i] = self.eval_finite(locs[i]);
        }

        Ok(())
    }

    /// Evaluate the interpolant at a set of observation points, allocating
    /// for the output values for convenience.
    #[cfg(feature = "std")]
    #[inline]
    fn evaluate(&self, locs: &[T]) -> Result<Vec<T>, Error> {
        let mut out = vec![T::zero(); locs.len()];
        self.eval(locs, &mut out)?;
        Ok(out)
    }

    /// Evaluate the interpolant at a set of observation points,
    /// splitting the batch across the rayon thread pool.
    ///
    /// Gives the same values as [`PeriodicInterp1D::evaluate`].
    #[cfg(feature = "rayon")]
    fn par_evaluate(&self, locs: &[T]) -> Result<Vec<T>, Error>
    where
        Self: Sync,
        T: Send + Sync,
    {
        use rayon::prelude::*;

        if let Some(index) = first_malformed(locs) {
            return Err(Error::MalformedQuery { index });
        }

        Ok(locs.par_iter().map(|&x| self.eval_finite(x)).collect())
    }
}
