//! Repeatable random sample sets for unit tests.
use rand::distr::StandardUniform;
use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

/// Fixed random seed to support repeatable testing
const SEED: [u8; 32] = [
    3, 1, 4, 1, 5, 9, 2, 6, 5, 3, 5, 8, 9, 7, 9, 3, 2, 3, 8, 4, 6, 2, 6, 4, 3, 3, 8, 3, 2, 7,
    9, 5,
];

/// Get a random number generator with a const seed for repeatable testing
pub fn rng_fixed_seed() -> StdRng {
    StdRng::from_seed(SEED)
}

/// Generate `n` random numbers using provided generator
pub fn randn<T>(rng: &mut StdRng, n: usize) -> Vec<T>
where
    StandardUniform: rand::distr::Distribution<T>,
{
    std::iter::repeat_with(|| rng.random::<T>())
        .take(n)
        .collect()
}

/// Sample positions jittered off the equidistant layout of `n` points.
///
/// Each point moves forward by up to `amount` of a spacing, so for
/// `amount < 1` the result stays strictly ascending inside `[0, 2π)`.
pub fn jittered_positions(rng: &mut StdRng, n: usize, amount: f64) -> Vec<f64> {
    let spacing = core::f64::consts::TAU / n as f64;
    randn::<f64>(rng, n)
        .iter()
        .enumerate()
        .map(|(i, dx)| (i as f64 + amount * dx) * spacing)
        .collect()
}

/// Jittered positions and values in `[-2, 2)` for `n` samples
pub fn random_samples(n: usize) -> (Vec<f64>, Vec<f64>) {
    let mut rng = rng_fixed_seed();
    let t = jittered_positions(&mut rng, n, 0.9);
    let f = randn::<f64>(&mut rng, n).iter().map(|x| 4.0 * x - 2.0).collect();
    (t, f)
}
