//! Error types for the reveal engine.

use thiserror::Error;

/// Result type for reveal operations.
pub type Result<T> = std::result::Result<T, RevealError>;

/// Errors that can occur when registering reveal sequences.
///
/// Registration errors are returned synchronously to the caller and are
/// scoped to the failed registration: other registrations keep running.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RevealError {
    /// A target or anchor element is not tracked by the controller.
    #[error("no tracked element matches `{id}`")]
    InvalidTarget { id: String },

    /// Timing parameters are out of range (non-positive duration,
    /// negative stagger or delay, or a non-finite value).
    #[error("invalid timing: {0}")]
    InvalidTiming(String),

    /// A sequence or timeline declares no targets.
    #[error("sequence declares no targets")]
    EmptyTargets,
}
