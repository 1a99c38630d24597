use thiserror::Error;

/// Errors raised by selection and by the timing experiments built on it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Cannot draw `sample` distinct values from a population of `population`.
    #[error("sample size {sample} exceeds population size {population}")]
    SampleTooLarge { sample: usize, population: usize },

    /// The requested rank does not index the sequence.
    #[error("rank {rank} is out of bounds for a sequence of length {len}")]
    RankOutOfBounds { rank: usize, len: usize },

    /// Any other argument that breaks a documented precondition.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The selection loop ran out of bounds without locating the rank.
    /// This is a logic defect, never an expected outcome.
    #[error("selection exhausted bounds [{left}, {right}] without locating rank {rank}")]
    ExhaustedBounds {
        rank: usize,
        left: usize,
        right: usize,
    },
}

impl Error {
    pub fn invalid(msg: impl Into<String>) -> Self {
        Error::InvalidInput(msg.into())
    }

    /// True for errors caused by bad arguments rather than internal defects.
    pub fn is_precondition_violation(&self) -> bool {
        !matches!(self, Error::ExhaustedBounds { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;
