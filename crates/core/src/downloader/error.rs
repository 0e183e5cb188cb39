//! Error types for the downloader module.

use std::path::PathBuf;
use thiserror::Error;

/// Generic user-facing message for unexpected download failures.
pub(crate) const GENERIC_DOWNLOAD_USER_MESSAGE: &str = "An error occurred during the download.";

/// Errors that can occur during a download.
///
/// These never cross the façade boundary; they are translated into an
/// [`OperationOutcome`](crate::OperationOutcome) before returning.
#[derive(Debug, Error)]
pub enum DownloadError {
    /// Output file already present; there is no implicit overwrite (precondition).
    #[error("Output file already exists: {path}")]
    OutputExists { path: PathBuf },

    /// The URL could not be parsed; no network traffic was attempted.
    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// The request timed out.
    #[error("Download timed out")]
    Timeout,

    /// Could not connect to the remote host.
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// The server answered with a non-success status.
    #[error("Server responded with status {status}")]
    HttpStatus { status: u16 },

    /// Transport-level failure while streaming the body.
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Fetch client returned success but the output is absent (postcondition).
    #[error("Output file was not created: {path}")]
    OutputMissing { path: PathBuf },

    /// The cancellation signal fired before the download completed.
    #[error("Download was canceled: {path}")]
    Canceled { path: PathBuf },

    /// I/O error while writing the output file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl DownloadError {
    /// Maps a transport error from the fetch client.
    pub(crate) fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if err.is_connect() {
            Self::ConnectionFailed(err.to_string())
        } else {
            Self::RequestFailed(err.to_string())
        }
    }

    /// The message presented to end users for this error.
    ///
    /// Precondition, postcondition, and cancellation messages only reference
    /// caller-supplied paths and are safe to show verbatim; everything else
    /// (malformed URLs included, since they may embed arbitrary input) falls
    /// back to a generic message.
    pub fn user_message(&self) -> String {
        match self {
            Self::OutputExists { .. } | Self::OutputMissing { .. } | Self::Canceled { .. } => {
                self.to_string()
            }
            _ => GENERIC_DOWNLOAD_USER_MESSAGE.to_string(),
        }
    }
}

impl From<DownloadError> for crate::OperationOutcome {
    fn from(err: DownloadError) -> Self {
        let user_message = err.user_message();
        Self::failure(err.to_string(), user_message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cancellation_message_names_output_path() {
        let err = DownloadError::Canceled {
            path: PathBuf::from("/videos/output.mp4"),
        };
        assert_eq!(
            err.user_message(),
            "Download was canceled: /videos/output.mp4"
        );
    }

    #[test]
    fn test_invalid_url_gets_generic_user_message() {
        let err = DownloadError::InvalidUrl {
            url: "invalid_url".to_string(),
            reason: "relative URL without a base".to_string(),
        };
        assert!(err.to_string().contains("invalid_url"));
        assert_eq!(err.user_message(), GENERIC_DOWNLOAD_USER_MESSAGE);
    }

    #[test]
    fn test_output_exists_is_user_safe() {
        let err = DownloadError::OutputExists {
            path: PathBuf::from("/videos/output.mp4"),
        };
        assert_eq!(
            err.user_message(),
            "Output file already exists: /videos/output.mp4"
        );
    }
}
