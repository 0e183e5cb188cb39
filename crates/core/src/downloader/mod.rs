//! Download façade over an external fetch client.
//!
//! This module provides the `VideoDownloader` trait and an
//! `HttpVideoDownloader` implementation that streams a remote video resource
//! to a local file. Stream and format selection are the remote server's
//! concern; nothing protocol-level is implemented here.
//!
//! Like the converter, every operation returns an
//! [`OperationOutcome`](crate::OperationOutcome): the no-overwrite
//! precondition, URL validation, cancellation, and transport errors are all
//! folded into the outcome, and a failed or canceled download never leaves a
//! partial file behind.

mod config;
mod error;
mod http;
mod traits;

pub use config::DownloaderConfig;
pub use error::DownloadError;
pub use http::HttpVideoDownloader;
pub use traits::VideoDownloader;
