use thiserror::Error;

/// Errors returned by the neighbourhood and clustering routines in this crate.
#[derive(Debug, Error)]
pub enum Error {
    /// Input point set is empty.
    #[error("empty input")]
    EmptyInput,

    /// Invalid parameter value.
    #[error("invalid parameter {name}: {message}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Human-readable explanation.
        message: &'static str,
    },

    /// Requested neighbour count is incompatible with the dataset.
    #[error("invalid neighbour count: requested k = {requested}, but dataset has {n_items} items")]
    InvalidNeighbourCount {
        /// Requested number of neighbours.
        requested: usize,
        /// Number of items in the dataset.
        n_items: usize,
    },

    /// Points (or the reference point) have inconsistent dimensionality.
    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch {
        /// Expected dimensionality.
        expected: usize,
        /// Found dimensionality.
        found: usize,
    },

    /// A density factor was requested for a point with no forward neighbours.
    #[error("division by zero: point {point} has an empty neighbourhood")]
    DivisionByZero {
        /// The offending point.
        point: usize,
    },

    /// Reading or writing a dataset failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A dataset row could not be parsed.
    #[error("parse error on line {line}: {message}")]
    Parse {
        /// 1-based line number.
        line: usize,
        /// Human-readable explanation.
        message: String,
    },
}

/// Result type used by this crate.
pub type Result<T> = std::result::Result<T, Error>;
