//! Error types for the converter module.

use std::path::PathBuf;
use thiserror::Error;

/// Generic user-facing message for unexpected conversion failures.
pub(crate) const GENERIC_CONVERT_USER_MESSAGE: &str =
    "An error occurred during conversion. Please try again.";

/// Errors that can occur during conversion.
///
/// These never cross the façade boundary; they are translated into an
/// [`OperationOutcome`](crate::OperationOutcome) before returning.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Input file not found (precondition).
    #[error("Input file does not exist: {path}")]
    InputNotFound { path: PathBuf },

    /// Output file already present; there is no implicit overwrite (precondition).
    #[error("Output file already exists: {path}")]
    OutputExists { path: PathBuf },

    /// Engine returned success but produced no output (postcondition).
    #[error("Output file was not created: {path}")]
    OutputMissing { path: PathBuf },

    /// Engine binary not found at the configured path.
    #[error("Conversion engine not found at path: {path}")]
    EngineNotFound { path: PathBuf },

    /// Engine process exited with a failure status.
    #[error("Conversion engine failed: {reason}")]
    EngineFailed {
        reason: String,
        stderr: Option<String>,
    },

    /// Engine run exceeded the configured timeout.
    #[error("Conversion timed out after {timeout_secs} seconds")]
    Timeout { timeout_secs: u64 },

    /// The cancellation signal fired before the conversion completed.
    #[error("Conversion was canceled: {path}")]
    Canceled { path: PathBuf },

    /// I/O error while driving the engine process.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ConvertError {
    /// The message presented to end users for this error.
    ///
    /// Precondition, postcondition, and cancellation messages only reference
    /// caller-supplied paths and are safe to show verbatim; everything else
    /// falls back to a generic message so engine internals never leak.
    pub fn user_message(&self) -> String {
        match self {
            Self::InputNotFound { .. }
            | Self::OutputExists { .. }
            | Self::OutputMissing { .. }
            | Self::Canceled { .. } => self.to_string(),
            _ => GENERIC_CONVERT_USER_MESSAGE.to_string(),
        }
    }
}

impl From<ConvertError> for crate::OperationOutcome {
    fn from(err: ConvertError) -> Self {
        let user_message = err.user_message();
        Self::failure(err.to_string(), user_message)
    }
}
