//! HTTP video downloader implementation.

use async_trait::async_trait;
use futures::StreamExt;
use reqwest::{Client, Url};
use std::path::Path;
use std::time::Duration;
use tokio::io::AsyncWriteExt;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use super::config::DownloaderConfig;
use super::error::DownloadError;
use super::traits::VideoDownloader;
use crate::OperationOutcome;

const SUCCESS_MESSAGE: &str = "Download completed successfully.";

/// Download façade streaming a video resource to a local file.
///
/// `file://` URLs are served by local copy, which keeps tests hermetic and
/// covers library-style media sources; everything else goes through the HTTP
/// client.
pub struct HttpVideoDownloader {
    client: Client,
    config: DownloaderConfig,
}

impl HttpVideoDownloader {
    /// Creates a new downloader with the given configuration.
    pub fn new(config: DownloaderConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()
            .expect("Failed to create HTTP client");

        Self { client, config }
    }

    /// Creates a downloader with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(DownloaderConfig::default())
    }

    /// Streams the resource at `url` into `output`, observing cancellation
    /// between chunks.
    async fn fetch(
        &self,
        url: &Url,
        output: &Path,
        cancel: &CancellationToken,
    ) -> Result<(), DownloadError> {
        if url.scheme() == "file" {
            let source = url.to_file_path().map_err(|_| DownloadError::InvalidUrl {
                url: url.to_string(),
                reason: "not a local file path".to_string(),
            })?;
            tokio::fs::copy(&source, output).await?;
            return Ok(());
        }

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(DownloadError::from_reqwest)?;

        let status = response.status();
        if !status.is_success() {
            return Err(DownloadError::HttpStatus {
                status: status.as_u16(),
            });
        }

        let mut stream = response.bytes_stream();
        let mut file = tokio::fs::File::create(output).await?;

        loop {
            tokio::select! {
                chunk = stream.next() => match chunk {
                    Some(Ok(data)) => file.write_all(&data).await?,
                    Some(Err(e)) => return Err(DownloadError::from_reqwest(e)),
                    None => break,
                },
                _ = cancel.cancelled() => {
                    return Err(DownloadError::Canceled {
                        path: output.to_path_buf(),
                    });
                }
            }
        }

        file.flush().await?;
        Ok(())
    }

    /// Full download pipeline: precondition, fetch, postcondition. Removes
    /// any partial artifact on failure so a failed download leaves nothing
    /// behind.
    async fn download_file(
        &self,
        url: &str,
        output: &Path,
        cancel: &CancellationToken,
    ) -> Result<(), DownloadError> {
        if output.exists() {
            return Err(DownloadError::OutputExists {
                path: output.to_path_buf(),
            });
        }

        let parsed = Url::parse(url).map_err(|e| DownloadError::InvalidUrl {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

        if cancel.is_cancelled() {
            return Err(DownloadError::Canceled {
                path: output.to_path_buf(),
            });
        }

        debug!(
            url = %parsed,
            output = %output.display(),
            timeout_secs = self.config.timeout_secs,
            "starting download"
        );

        match self.fetch(&parsed, output, cancel).await {
            Ok(()) => {
                // Same policy as the converter: a successful delegate return
                // is not trusted without the artifact actually existing.
                if !output.exists() {
                    return Err(DownloadError::OutputMissing {
                        path: output.to_path_buf(),
                    });
                }
                Ok(())
            }
            Err(err) => {
                let _ = tokio::fs::remove_file(output).await;
                Err(err)
            }
        }
    }
}

#[async_trait]
impl VideoDownloader for HttpVideoDownloader {
    async fn download_video(
        &self,
        url: &str,
        output: &Path,
        cancel: CancellationToken,
    ) -> OperationOutcome {
        match self.download_file(url, output, &cancel).await {
            Ok(()) => OperationOutcome::success(SUCCESS_MESSAGE, SUCCESS_MESSAGE),
            Err(err) => {
                warn!(error = %err, url, "download failed");
                err.into()
            }
        }
    }
}
