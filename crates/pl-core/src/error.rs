//! Core error type.
//!
//! Downstream crates wrap `CoreError` as one variant of their own enums via
//! `#[from]`, so `?` works across crate boundaries.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// `peek` or `dequeue` on an empty [`FifoQueue`][crate::FifoQueue].
    /// Callers are expected to check `is_empty()` first.
    #[error("queue is empty")]
    EmptyQueue,

    #[error("rational with zero denominator")]
    ZeroDenominator,

    #[error("invalid distribution: {0}")]
    InvalidDistribution(String),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `pl-core`.
pub type CoreResult<T> = Result<T, CoreError>;
