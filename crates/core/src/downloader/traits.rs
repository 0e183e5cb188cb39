//! Trait definitions for the downloader module.

use async_trait::async_trait;
use std::path::Path;
use tokio_util::sync::CancellationToken;

use crate::OperationOutcome;

/// A downloader that can fetch a remote video resource to a local file.
#[async_trait]
pub trait VideoDownloader: Send + Sync {
    /// Downloads the video at `url` and persists it at `output`.
    ///
    /// Never returns an error: the no-overwrite precondition, URL validation,
    /// transport failures, and cancellation are all reported through the
    /// outcome. Cancellation gets an explicit message naming the output path.
    async fn download_video(
        &self,
        url: &str,
        output: &Path,
        cancel: CancellationToken,
    ) -> OperationOutcome;
}
