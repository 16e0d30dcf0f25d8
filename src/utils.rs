//! Convenience methods for laying out samples in a way that echoes,
//! but does not exactly match, methods common in scripting languages.
use itertools::Itertools;
use num_traits::{Float, FloatConst};

use crate::one_dim::period;
use crate::Error;

/// Generates evenly spaced values from start to stop,
/// including the endpoint.
///
/// With `n == 1` the result is just `start`.
pub fn linspace<T>(start: T, stop: T, n: usize) -> Vec<T>
where
    T: Float,
{
    match n {
        0 => return Vec::new(),
        1 => return vec![start],
        _ => {}
    }

    let dx: T = (stop - start) / T::from(n - 1).unwrap();
    (0..n).map(|i| start + T::from(i).unwrap() * dx).collect()
}

/// Generates `n` evenly spaced sample positions covering one period,
/// starting at zero and excluding 2π.
pub fn periodic_linspace<T>(n: usize) -> Vec<T>
where
    T: Float + FloatConst,
{
    if n == 0 {
        return Vec::new();
    }

    let dx: T = period::<T>() / T::from(n).unwrap();
    (0..n).map(|i| T::from(i).unwrap() * dx).collect()
}

/// Sample positions for a closed planar polygon `(x[i], y[i])`, spaced by
/// the length of the chord between consecutive vertices.
///
/// The cumulative chord length, including the chord that closes the polygon
/// back to its first vertex, is scaled to one period; the first position is
/// zero and the closing position (2π) is left out, so the result is ready to
/// use with either interpolant.
///
/// # Errors
/// * If `x` and `y` have different lengths or are empty
/// * If the polygon has zero perimeter or contains non-finite coordinates
pub fn chord_length_positions<T>(x: &[T], y: &[T]) -> Result<Vec<T>, Error>
where
    T: Float + FloatConst,
{
    if x.len() != y.len() || x.is_empty() {
        return Err(Error::InvalidInput("Length mismatch"));
    }

    let chords: Vec<T> = x
        .iter()
        .zip(y.iter())
        .circular_tuple_windows()
        .map(|((&x0, &y0), (&x1, &y1))| (x1 - x0).hypot(y1 - y0))
        .collect();

    let perimeter = chords.iter().fold(T::zero(), |acc, &c| acc + c);
    if !(perimeter.is_finite() && perimeter > T::zero()) {
        return Err(Error::InvalidInput("Polygon must have a finite, nonzero perimeter"));
    }

    let scale = period::<T>() / perimeter;
    let positions = core::iter::once(T::zero())
        .chain(chords[..chords.len() - 1].iter().scan(T::zero(), |acc, &c| {
            *acc = *acc + c;
            Some(*acc * scale)
        }))
        .collect();

    Ok(positions)
}
