use thiserror::Error;

/// Errors from one classification attempt.
///
/// Malformed or partial response bodies are not represented here: they are
/// absorbed by the per-field defaults in [`crate::service::Outcome`].
#[derive(Debug, Error)]
pub enum ClassifyError {
    /// Request could not be sent, timed out, or returned a non-success
    /// status.
    #[error("classification request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service actively refused the code.
    #[error("{message}")]
    Rejected { message: String },
}
