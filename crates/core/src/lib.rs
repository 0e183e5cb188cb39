pub mod config;
pub mod converter;
pub mod downloader;
pub mod outcome;
pub mod testing;

pub use config::{load_config, load_config_from_str, validate_config, Config, ConfigError};
pub use converter::{
    AudioConverter, ConvertError, ConverterConfig, FfmpegConverter, VideoConverter,
};
pub use downloader::{DownloadError, DownloaderConfig, HttpVideoDownloader, VideoDownloader};
pub use outcome::OperationOutcome;
