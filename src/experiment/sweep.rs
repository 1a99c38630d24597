use log::info;
use rand::Rng;

use super::config::{ExperimentConfig, SweepConfig};
use super::record::TimingRecord;
use super::runner::run_experiment;
use crate::error::{Error, Result};

/// Times selection for every (N, n) pair, populations outer and samples inner,
/// both in the order given. The first failing pair aborts the sweep.
///
/// # Errors
///
/// [`Error::InvalidInput`] if either axis is empty.
pub fn run_sweep<R>(
    population_sizes: &[usize],
    sample_sizes: &[usize],
    config: &ExperimentConfig,
    rng: &mut R,
) -> Result<Vec<TimingRecord>>
where
    R: Rng + ?Sized,
{
    if population_sizes.is_empty() {
        return Err(Error::invalid("no population sizes given"));
    }
    if sample_sizes.is_empty() {
        return Err(Error::invalid("no sample sizes given"));
    }
    let mut records = Vec::with_capacity(population_sizes.len() * sample_sizes.len());
    for &population_size in population_sizes {
        for &sample_size in sample_sizes {
            let average = run_experiment(population_size, sample_size, config, rng)?;
            info!("N={population_size} n={sample_size} average {average:.6}s");
            records.push(TimingRecord::new(population_size, sample_size, average));
        }
    }
    Ok(records)
}

/// Runs the sweep a [`SweepConfig`] describes, with the random source it names.
pub fn run_sweep_with_config(config: &SweepConfig) -> Result<Vec<TimingRecord>> {
    config.validate()?;
    let mut rng = config.experiment.rng();
    run_sweep(
        &config.population_sizes,
        &config.sample_sizes,
        &config.experiment,
        &mut rng,
    )
}
