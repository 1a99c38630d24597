use std::time::{Duration, Instant};

use crate::error::{Error, Result};

/// Outcome of one timed selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Trial {
    /// Zero-based rank that was selected
    pub rank: usize,
    /// Value found at that rank
    pub value: u64,
    /// Wall-clock time spent in the selection call only
    pub elapsed: Duration,
}

/// Runs `f` and returns its output with the monotonic time it took.
pub fn time<T>(f: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let out = f();
    (out, start.elapsed())
}

/// Arithmetic mean of `durations`, in seconds.
pub fn mean_seconds(durations: &[Duration]) -> Result<f64> {
    if durations.is_empty() {
        return Err(Error::invalid("cannot average zero durations"));
    }
    let total: f64 = durations.iter().map(Duration::as_secs_f64).sum();
    Ok(total / durations.len() as f64)
}
