//! Times randomized selection over a grid of population and sample sizes and
//! prints the averaged results as a table.

use std::process::ExitCode;

use clap::Parser;
use orderstat::experiment::{
    config::{DEFAULT_POPULATION_SIZES, DEFAULT_SAMPLE_SIZES},
    render_table, run_sweep_with_config, ExperimentConfig, SweepConfig, DEFAULT_TRIALS,
};

#[derive(Parser)]
#[command(name = "quickselect_sweep")]
#[command(about = "Time randomized quickselect across population and sample sizes", long_about = None)]
struct Cli {
    /// Population sizes N, iterated as the outer loop
    #[arg(short, long, value_delimiter = ',', default_values_t = DEFAULT_POPULATION_SIZES.to_vec())]
    populations: Vec<usize>,

    /// Sample sizes n, iterated as the inner loop
    #[arg(short, long, value_delimiter = ',', default_values_t = DEFAULT_SAMPLE_SIZES.to_vec())]
    samples: Vec<usize>,

    /// Timed selections averaged per (N, n) pair
    #[arg(short, long, default_value_t = DEFAULT_TRIALS)]
    trials: usize,

    /// Seed for reproducible samples and pivots
    #[arg(long)]
    seed: Option<u64>,
}

impl Cli {
    fn sweep_config(&self) -> SweepConfig {
        let mut experiment = ExperimentConfig::new().with_trials(self.trials);
        if let Some(seed) = self.seed {
            experiment = experiment.with_seed(seed);
        }
        SweepConfig::new(self.populations.clone(), self.samples.clone()).with_experiment(experiment)
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.sweep_config();
    tracing::info!(
        populations = ?config.population_sizes,
        samples = ?config.sample_sizes,
        trials = config.experiment.trials,
        "starting sweep"
    );

    match run_sweep_with_config(&config) {
        Ok(records) => {
            println!("Results from randomized quickselect");
            print!("{}", render_table(&records));
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("sweep failed: {e}");
            ExitCode::FAILURE
        }
    }
}
