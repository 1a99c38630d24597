use log::debug;
use rand::Rng;

use super::config::ExperimentConfig;
use super::timing::{mean_seconds, time, Trial};
use crate::cs::randomized::sample_without_replacement;
use crate::cs::sort::randomized_quickselect;
use crate::error::{Error, Result};

/// Runs `config.trials` timed selections on fresh samples of `sample_size`
/// distinct values from `1..=population_size`.
///
/// Each trial draws its own sample and a rank uniform in `0..sample_size`;
/// only the selection call itself is timed.
pub fn run_trials<R>(
    population_size: usize,
    sample_size: usize,
    config: &ExperimentConfig,
    rng: &mut R,
) -> Result<Vec<Trial>>
where
    R: Rng + ?Sized,
{
    config.validate()?;
    if population_size == 0 {
        return Err(Error::invalid("population size must be positive"));
    }
    if sample_size > population_size {
        return Err(Error::SampleTooLarge {
            sample: sample_size,
            population: population_size,
        });
    }

    let mut trials = Vec::with_capacity(config.trials);
    for _ in 0..config.trials {
        let mut sample = sample_without_replacement(population_size, sample_size, rng)?;
        let rank = rng.gen_range(0..sample_size);
        let (value, elapsed) = time(|| randomized_quickselect(&mut sample, rank, &mut *rng));
        let value = value?;
        debug!(
            "N={population_size} n={sample_size} rank={rank} value={value} took {:.6}s",
            elapsed.as_secs_f64()
        );
        trials.push(Trial {
            rank,
            value,
            elapsed,
        });
    }
    Ok(trials)
}

/// Average selection time in seconds over `config.trials` trials.
///
/// # Errors
///
/// [`Error::SampleTooLarge`] when `sample_size > population_size`, raised
/// before any sampling happens.
pub fn run_experiment<R>(
    population_size: usize,
    sample_size: usize,
    config: &ExperimentConfig,
    rng: &mut R,
) -> Result<f64>
where
    R: Rng + ?Sized,
{
    let trials = run_trials(population_size, sample_size, config, rng)?;
    let elapsed: Vec<_> = trials.iter().map(|t| t.elapsed).collect();
    mean_seconds(&elapsed)
}

/// [`run_experiment`] with the default trial count and an entropy-seeded source.
pub fn run_experiment_default(population_size: usize, sample_size: usize) -> Result<f64> {
    let config = ExperimentConfig::default();
    run_experiment(population_size, sample_size, &config, &mut config.rng())
}
