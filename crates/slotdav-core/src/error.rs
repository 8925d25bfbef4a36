use thiserror::Error;

/// Errors of the shared building blocks.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Request state a hoop should have injected is missing.
    #[error("Invariant violation: {0}")]
    InvariantViolation(&'static str),
}
