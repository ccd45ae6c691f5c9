//! Defines the error taxonomy of this crate.
//! All failures are detected eagerly at the start of the offending
//! operation and reported to the caller; nothing retries.
use thiserror::Error;

use std::io;


/// Errors raised by the core operations.
#[derive(Error, Debug)]
pub enum Error {
    /// A malformed argument, e.g., a non-positive count
    /// or a non-binary feature value.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Feature/label/parameter shapes disagree.
    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch {
        /// The length/dimension the operation requires.
        expected: usize,
        /// The length/dimension it got.
        found: usize,
    },

    /// A class has no examples, so prior/likelihood estimation
    /// is undefined.
    #[error("insufficient data: {0}")]
    InsufficientData(String),

    /// Failed to read/write a model or a result file.
    #[error("io error: {0}")]
    Io(#[from] io::Error),

    /// Failed to serialize or deserialize a model.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}


/// A specialized `Result` type for this crate.
pub type Result<T> = std::result::Result<T, Error>;
