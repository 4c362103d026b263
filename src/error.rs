use thiserror::Error;

/// Errors surfaced by the frequency counter.
#[derive(Debug, Error)]
pub enum Error {
    /// Reading the input or writing the counts failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A configuration value was out of range.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
