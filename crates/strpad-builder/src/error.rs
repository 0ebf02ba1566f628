//! Error types for the builder crate.

use thiserror::Error;

/// Errors raised while configuring or finalizing a [`StringBuilder`](crate::StringBuilder).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BuilderError {
    /// Growth factor must be finite and strictly greater than 1.0.
    #[error("invalid growth factor {0}: must be finite and greater than 1.0")]
    InvalidGrowthFactor(f64),

    /// Content holds a NUL byte, so it cannot become a C string.
    #[error("content has an interior nul byte at position {0}")]
    InteriorNul(usize),
}

/// Result type for builder operations.
pub type Result<T> = std::result::Result<T, BuilderError>;
