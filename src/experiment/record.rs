use std::fmt;

/// Averaged running time of selection for one (N, n) combination.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimingRecord {
    population_size: usize,
    sample_size: usize,
    average_seconds: f64,
}

impl TimingRecord {
    pub fn new(population_size: usize, sample_size: usize, average_seconds: f64) -> Self {
        Self {
            population_size,
            sample_size,
            average_seconds,
        }
    }

    pub fn population_size(&self) -> usize {
        self.population_size
    }

    pub fn sample_size(&self) -> usize {
        self.sample_size
    }

    pub fn average_seconds(&self) -> f64 {
        self.average_seconds
    }
}

impl From<TimingRecord> for (usize, usize, f64) {
    fn from(r: TimingRecord) -> Self {
        (r.population_size, r.sample_size, r.average_seconds)
    }
}

impl fmt::Display for TimingRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "N={} n={} avg={:.6}s",
            self.population_size, self.sample_size, self.average_seconds
        )
    }
}
