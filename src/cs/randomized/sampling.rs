use rand::seq::index;
use rand::Rng;

use crate::error::{Error, Result};

/// Draws `n` distinct values uniformly without replacement from `1..=population`,
/// returned in uniformly random order.
///
/// Cost depends on `n`, not on `population`.
///
/// # Errors
///
/// [`Error::SampleTooLarge`] when `n > population`, [`Error::InvalidInput`] when `n == 0`.
pub fn sample_without_replacement<R>(population: usize, n: usize, rng: &mut R) -> Result<Vec<u64>>
where
    R: Rng + ?Sized,
{
    if n == 0 {
        return Err(Error::invalid("sample size must be positive"));
    }
    if n > population {
        return Err(Error::SampleTooLarge {
            sample: n,
            population,
        });
    }
    Ok(index::sample(rng, population, n)
        .into_iter()
        .map(|i| i as u64 + 1)
        .collect())
}
