use super::{types::Config, ConfigError};

/// Validates a loaded configuration before any façade is constructed.
///
/// Validation happens once at startup; the façades assume their config is
/// already well-formed.
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.converter.ffmpeg_path.as_os_str().is_empty() {
        return Err(ConfigError::Invalid(
            "converter.ffmpeg_path must not be empty".to_string(),
        ));
    }

    if config.converter.timeout_secs == 0 {
        return Err(ConfigError::Invalid(
            "converter.timeout_secs must be greater than zero".to_string(),
        ));
    }

    if config.downloader.timeout_secs == 0 {
        return Err(ConfigError::Invalid(
            "downloader.timeout_secs must be greater than zero".to_string(),
        ));
    }

    if config.storage.media_dir.as_os_str().is_empty() {
        return Err(ConfigError::Invalid(
            "storage.media_dir must not be empty".to_string(),
        ));
    }

    Ok(())
}
