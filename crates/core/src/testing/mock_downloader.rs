//! Mock downloader for testing.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::RwLock;
use tokio_util::sync::CancellationToken;

use crate::downloader::VideoDownloader;
use crate::OperationOutcome;

/// A recorded download call for test assertions.
#[derive(Debug, Clone)]
pub struct RecordedDownload {
    pub url: String,
    pub output: PathBuf,
}

/// Mock implementation of the [`VideoDownloader`] trait.
///
/// Records every call and returns a configurable outcome. On a success
/// outcome it writes the configured bytes to the output path.
#[derive(Debug, Clone)]
pub struct MockDownloader {
    calls: Arc<RwLock<Vec<RecordedDownload>>>,
    next_outcome: Arc<RwLock<Option<OperationOutcome>>>,
    body: Arc<RwLock<Vec<u8>>>,
}

impl Default for MockDownloader {
    fn default() -> Self {
        Self::new()
    }
}

impl MockDownloader {
    /// Create a new mock downloader that succeeds by default.
    pub fn new() -> Self {
        Self {
            calls: Arc::new(RwLock::new(Vec::new())),
            next_outcome: Arc::new(RwLock::new(None)),
            body: Arc::new(RwLock::new(b"downloaded".to_vec())),
        }
    }

    /// Sets the outcome returned by the next downloads.
    pub async fn set_next_outcome(&self, outcome: OperationOutcome) {
        *self.next_outcome.write().await = Some(outcome);
    }

    /// Sets the bytes written on a successful download.
    pub async fn set_body(&self, body: Vec<u8>) {
        *self.body.write().await = body;
    }

    /// Get all recorded downloads.
    pub async fn recorded_downloads(&self) -> Vec<RecordedDownload> {
        self.calls.read().await.clone()
    }

    /// Get the number of downloads performed.
    pub async fn call_count(&self) -> usize {
        self.calls.read().await.len()
    }
}

#[async_trait]
impl VideoDownloader for MockDownloader {
    async fn download_video(
        &self,
        url: &str,
        output: &Path,
        _cancel: CancellationToken,
    ) -> OperationOutcome {
        self.calls.write().await.push(RecordedDownload {
            url: url.to_string(),
            output: output.to_path_buf(),
        });

        let outcome = match self.next_outcome.read().await.clone() {
            Some(outcome) => outcome,
            None => OperationOutcome::success(
                "Download completed successfully.",
                "Download completed successfully.",
            ),
        };

        if !outcome.has_failed {
            let _ = std::fs::write(output, self.body.read().await.as_slice());
        }

        outcome
    }
}
