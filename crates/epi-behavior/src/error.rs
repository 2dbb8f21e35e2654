use thiserror::Error;

#[derive(Debug, Error)]
pub enum BehaviorError {
    #[error("behavior configuration error: {0}")]
    Config(String),

    #[error("probabilities must be non-negative and sum to 1 (got sum {sum})")]
    InvalidDistribution { sum: f64 },

    #[error("{conditions} conditions but {distributions} distributions")]
    LengthMismatch {
        conditions:    usize,
        distributions: usize,
    },

    #[error("behavior parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type BehaviorResult<T> = Result<T, BehaviorError>;
