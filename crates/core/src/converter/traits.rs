//! Trait definitions for the converter module.
//!
//! Video and audio conversion are separate capability traits so call sites
//! can express intent, but implementations are expected to share one engine
//! invocation for both (see [`FfmpegConverter`](super::FfmpegConverter)).

use async_trait::async_trait;
use std::path::Path;
use tokio_util::sync::CancellationToken;

use crate::OperationOutcome;

/// A converter that can transcode video files.
#[async_trait]
pub trait VideoConverter: Send + Sync {
    /// Converts a video file from one format to another, writing the result
    /// to `output`. The target format is inferred from the output extension.
    ///
    /// Never returns an error: preconditions, engine failures, and
    /// cancellation are all reported through the outcome.
    async fn convert(
        &self,
        input: &Path,
        output: &Path,
        cancel: CancellationToken,
    ) -> OperationOutcome;
}

/// A converter that can transcode audio files.
#[async_trait]
pub trait AudioConverter: Send + Sync {
    /// Converts an audio file from one format to another, writing the result
    /// to `output`. Same contract as [`VideoConverter::convert`].
    async fn convert(
        &self,
        input: &Path,
        output: &Path,
        cancel: CancellationToken,
    ) -> OperationOutcome;
}
