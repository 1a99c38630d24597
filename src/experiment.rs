//! Timing experiments for randomized selection.
//!
//! An experiment draws `n` distinct values from `1..=N`, picks a rank uniformly
//! at random, and times a single [`randomized_quickselect`] call on that sample.
//! A sweep repeats this over every (N, n) pair and yields one [`TimingRecord`]
//! per pair.
//!
//! # Examples
//!
//! ```rust
//! use orderstat::experiment::{run_sweep, ExperimentConfig};
//!
//! let config = ExperimentConfig::new().with_trials(3).with_seed(42);
//! let records = run_sweep(&[1000], &[100, 500], &config, &mut config.rng()).unwrap();
//! assert_eq!(records.len(), 2);
//! assert_eq!(records[1].sample_size(), 500);
//! ```
//!
//! [`randomized_quickselect`]: crate::cs::sort::randomized_quickselect

pub mod config;
pub mod record;
pub mod report;
pub mod runner;
pub mod sweep;
pub mod timing;

pub use config::{ExperimentConfig, SweepConfig, DEFAULT_TRIALS};
pub use record::TimingRecord;
pub use report::{group_by_population, render_table, Series};
pub use runner::{run_experiment, run_experiment_default, run_trials};
pub use sweep::{run_sweep, run_sweep_with_config};
pub use timing::{mean_seconds, Trial};
