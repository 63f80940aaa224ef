/// error.rs — crate-wide error type
///
/// Spans two layers: precondition violations from the decomposer core
/// (construction only — query paths are total) and I/O/parsing errors
/// from the alphabet loader and CLI.
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("alphabet must contain at least one weight")]
    EmptyAlphabet,

    #[error("weight at index {index} is not positive: {value}")]
    NonPositiveWeight { index: usize, value: i64 },

    #[error("weights must be strictly ascending: weight at index {index} does not exceed its predecessor")]
    UnsortedWeights { index: usize },

    #[error("smallest and largest weight product overflows the mass type")]
    WeightOverflow,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("alphabet file line {line}: {reason}")]
    AlphabetParse { line: usize, reason: String },

    #[error("no element named '{name}' in alphabet")]
    UnknownElement { name: String },
}

pub type Result<T> = std::result::Result<T, Error>;
