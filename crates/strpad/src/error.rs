//! Error types for padding.

use strpad_builder::BuilderError;
use thiserror::Error;

/// Reasons a padding request is rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PadError {
    /// Target width of zero.
    #[error("target width must be greater than zero")]
    ZeroWidth,

    /// No input string was given.
    #[error("no input string to pad")]
    MissingInput,

    /// The builder configuration was invalid.
    #[error(transparent)]
    Builder(#[from] BuilderError),
}

/// Result type for padding operations.
pub type Result<T> = std::result::Result<T, PadError>;
