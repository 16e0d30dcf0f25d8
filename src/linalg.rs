//! Small direct linear solvers used while fitting the interpolants.
//!
//! Both systems solved here are sized by the number of samples,
//! not by the number of observation points, so these favor
//! robustness and clarity over asymptotic speed.
use alloc::vec;
use alloc::vec::Vec;

use num_traits::Float;

use crate::Error;

/// Pivot magnitude below which a system is treated as singular,
/// relative to the largest entry of the matrix.
#[inline]
fn pivot_floor<T: Float>(scale: T, n: usize) -> Result<T, Error> {
    let n = T::from(n).ok_or(Error::InvalidInput("Unrepresentable number"))?;
    Ok(T::epsilon() * n * scale)
}

/// Solve a dense `n`x`n` system `a * x = b` by Gaussian elimination
/// with partial pivoting.
///
/// `a` is row-major and consumed as scratch space.
///
/// # Errors
/// * If `a` is not `n`x`n` or `b` is not length `n`
/// * If any pivot is negligible relative to the matrix scale,
///   or the solution is not finite
pub fn solve_dense<T: Float>(mut a: Vec<T>, mut b: Vec<T>) -> Result<Vec<T>, Error> {
    let n = b.len();
    if a.len() != n * n || n == 0 {
        return Err(Error::InvalidInput("Dimension mismatch"));
    }

    let scale = a.iter().fold(T::zero(), |acc, v| acc.max(v.abs()));
    let floor = pivot_floor(scale, n)?;
    if !(scale > T::zero()) {
        return Err(Error::SingularSystem);
    }

    // Forward elimination
    for col in 0..n {
        let mut pivot_row = col;
        let mut pivot_mag = a[col * n + col].abs();
        for row in col + 1..n {
            let mag = a[row * n + col].abs();
            if mag > pivot_mag {
                pivot_mag = mag;
                pivot_row = row;
            }
        }

        if !(pivot_mag > floor) {
            return Err(Error::SingularSystem);
        }

        if pivot_row != col {
            for j in 0..n {
                a.swap(col * n + j, pivot_row * n + j);
            }
            b.swap(col, pivot_row);
        }

        let pivot = a[col * n + col];
        for row in col + 1..n {
            let factor = a[row * n + col] / pivot;
            if factor == T::zero() {
                continue;
            }
            for j in col..n {
                a[row * n + j] = a[row * n + j] - factor * a[col * n + j];
            }
            b[row] = b[row] - factor * b[col];
        }
    }

    // Back substitution
    let mut x = vec![T::zero(); n];
    for i in (0..n).rev() {
        let mut acc = b[i];
        for j in i + 1..n {
            acc = acc - a[i * n + j] * x[j];
        }
        x[i] = acc / a[i * n + i];
    }

    if x.iter().all(|v| v.is_finite()) {
        Ok(x)
    } else {
        Err(Error::SingularSystem)
    }
}

/// Solve a tridiagonal system with the Thomas algorithm.
///
/// Row `i` reads `lower[i] * x[i-1] + diag[i] * x[i] + upper[i] * x[i+1] = rhs[i]`;
/// `lower[0]` and `upper[n-1]` are ignored.
///
/// # Errors
/// * If the input lengths do not match
/// * If elimination hits a negligible pivot
pub fn solve_tridiagonal<T: Float>(
    lower: &[T],
    diag: &[T],
    upper: &[T],
    rhs: &[T],
) -> Result<Vec<T>, Error> {
    let n = diag.len();
    if !(lower.len() == n && upper.len() == n && rhs.len() == n && n > 0) {
        return Err(Error::InvalidInput("Dimension mismatch"));
    }

    let scale = diag
        .iter()
        .chain(lower[1..].iter())
        .chain(upper[..n - 1].iter())
        .fold(T::zero(), |acc, v| acc.max(v.abs()));
    let floor = pivot_floor(scale, n)?;

    let mut c = vec![T::zero(); n];
    let mut d = vec![T::zero(); n];

    // Forward sweep
    let mut denom = diag[0];
    if !(denom.abs() > floor) {
        return Err(Error::SingularSystem);
    }
    c[0] = upper[0] / denom;
    d[0] = rhs[0] / denom;
    for i in 1..n {
        denom = diag[i] - lower[i] * c[i - 1];
        if !(denom.abs() > floor) {
            return Err(Error::SingularSystem);
        }
        if i < n - 1 {
            c[i] = upper[i] / denom;
        }
        d[i] = (rhs[i] - lower[i] * d[i - 1]) / denom;
    }

    // Back substitution
    let mut x = d;
    for i in (0..n - 1).rev() {
        x[i] = x[i] - c[i] * x[i + 1];
    }

    Ok(x)
}

/// Solve a cyclic tridiagonal system, where the first and last rows
/// also couple to each other through the corner entries.
///
/// Row `i` reads
/// `lower[i] * x[(i-1) mod n] + diag[i] * x[i] + upper[i] * x[(i+1) mod n] = rhs[i]`,
/// so `lower[0]` is the top-right corner and `upper[n-1]` the bottom-left corner.
///
/// The corners are folded into a rank-one update of a plain tridiagonal
/// system (Sherman-Morrison), which costs two Thomas solves.
///
/// # Errors
/// * If the input lengths do not match or there are fewer than 3 rows
/// * If either of the underlying solves is singular
pub fn solve_cyclic_tridiagonal<T: Float>(
    lower: &[T],
    diag: &[T],
    upper: &[T],
    rhs: &[T],
) -> Result<Vec<T>, Error> {
    let n = diag.len();
    if !(lower.len() == n && upper.len() == n && rhs.len() == n) {
        return Err(Error::InvalidInput("Dimension mismatch"));
    }
    if n < 3 {
        return Err(Error::InvalidInput("Cyclic system needs at least 3 rows"));
    }

    let top_right = lower[0];
    let bottom_left = upper[n - 1];
    let gamma = -diag[0];

    // Modified diagonal of the plain tridiagonal part
    let mut bb = diag.to_vec();
    bb[0] = diag[0] - gamma;
    bb[n - 1] = diag[n - 1] - bottom_left * top_right / gamma;

    let x = solve_tridiagonal(lower, &bb, upper, rhs)?;

    let mut u = vec![T::zero(); n];
    u[0] = gamma;
    u[n - 1] = bottom_left;
    let z = solve_tridiagonal(lower, &bb, upper, &u)?;

    // The correction factor is O(1) for a well-posed system
    let denom = T::one() + z[0] + top_right * z[n - 1] / gamma;
    if !(denom.abs() > pivot_floor(T::one(), n)?) {
        return Err(Error::SingularSystem);
    }
    let fact = (x[0] + top_right * x[n - 1] / gamma) / denom;

    let out: Vec<T> = x.iter().zip(z.iter()).map(|(&xi, &zi)| xi - fact * zi).collect();

    if out.iter().all(|v| v.is_finite()) {
        Ok(out)
    } else {
        Err(Error::SingularSystem)
    }
}
