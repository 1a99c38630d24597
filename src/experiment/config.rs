use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::error::{Error, Result};

/// Repetitions averaged per (N, n) combination unless overridden.
pub const DEFAULT_TRIALS: usize = 5;

/// Population sizes swept by default.
pub const DEFAULT_POPULATION_SIZES: [usize; 3] = [5000, 8000, 10000];

/// Sample sizes swept by default.
pub const DEFAULT_SAMPLE_SIZES: [usize; 6] = [100, 300, 500, 1000, 2000, 4000];

/// Parameters for a single timing experiment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExperimentConfig {
    /// Number of timed selections averaged into one result
    pub trials: usize,
    /// Seed for the random source; `None` draws one from the OS
    pub seed: Option<u64>,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            trials: DEFAULT_TRIALS,
            seed: None,
        }
    }
}

impl ExperimentConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_trials(mut self, trials: usize) -> Self {
        self.trials = trials;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.trials == 0 {
            return Err(Error::invalid("trials must be positive"));
        }
        Ok(())
    }

    /// Random source described by this configuration.
    pub fn rng(&self) -> ChaCha20Rng {
        match self.seed {
            Some(seed) => ChaCha20Rng::seed_from_u64(seed),
            None => ChaCha20Rng::from_entropy(),
        }
    }
}

/// Parameters for a full sweep over population and sample sizes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweepConfig {
    /// Outer loop, iterated in the given order
    pub population_sizes: Vec<usize>,
    /// Inner loop, iterated in the given order
    pub sample_sizes: Vec<usize>,
    pub experiment: ExperimentConfig,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            population_sizes: DEFAULT_POPULATION_SIZES.to_vec(),
            sample_sizes: DEFAULT_SAMPLE_SIZES.to_vec(),
            experiment: ExperimentConfig::default(),
        }
    }
}

impl SweepConfig {
    pub fn new(population_sizes: Vec<usize>, sample_sizes: Vec<usize>) -> Self {
        Self {
            population_sizes,
            sample_sizes,
            experiment: ExperimentConfig::default(),
        }
    }

    pub fn with_experiment(mut self, experiment: ExperimentConfig) -> Self {
        self.experiment = experiment;
        self
    }

    /// Checks the axes and trial count. Individual (N, n) pairs are checked
    /// when they are run, so a sweep still aborts at the first bad pair.
    pub fn validate(&self) -> Result<()> {
        if self.population_sizes.is_empty() {
            return Err(Error::invalid("no population sizes given"));
        }
        if self.sample_sizes.is_empty() {
            return Err(Error::invalid("no sample sizes given"));
        }
        self.experiment.validate()
    }
}
