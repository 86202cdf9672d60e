use rand::{Rng, seq::SliceRandom};

use crate::models::Recommendation;

pub const RECOMMENDATION_POOL: [&str; 6] = [
    "600000.SS",
    "600036.SS",
    "000002.SZ",
    "000651.SZ",
    "601318.SS",
    "300750.SZ",
];

pub const RECOMMENDATION_COUNT: usize = 3;

/// Uniform draw without replacement. Returns fewer than `count` only when the
/// pool is smaller than that.
pub fn sample_recommendations<R>(rng: &mut R, pool: &[&str], count: usize) -> Vec<Recommendation>
where
    R: Rng + ?Sized,
{
    pool.choose_multiple(rng, count)
        .map(|symbol| Recommendation::new(symbol))
        .collect()
}
