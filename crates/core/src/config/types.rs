use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::converter::ConverterConfig;
use crate::downloader::DownloaderConfig;

/// Root configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub converter: ConverterConfig,
    #[serde(default)]
    pub downloader: DownloaderConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

/// Storage configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Directory where converted and downloaded media files are placed.
    #[serde(default = "default_media_dir")]
    pub media_dir: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            media_dir: default_media_dir(),
        }
    }
}

fn default_media_dir() -> PathBuf {
    PathBuf::from("media")
}
