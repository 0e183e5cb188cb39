//! FFmpeg-based converter implementation.

use async_trait::async_trait;
use std::path::Path;
use std::process::Stdio;
use std::time::Duration;
use tokio::io::AsyncReadExt;
use tokio::process::Command;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use super::config::ConverterConfig;
use super::error::ConvertError;
use super::traits::{AudioConverter, VideoConverter};
use crate::OperationOutcome;

const SUCCESS_INTERNAL_MESSAGE: &str = "Conversion successful";
const SUCCESS_USER_MESSAGE: &str = "Conversion completed successfully.";

/// Conversion façade delegating to an external ffmpeg executable.
///
/// Implements both [`VideoConverter`] and [`AudioConverter`]; the audio entry
/// point is a pure call-through to the video one, so the two capabilities can
/// never drift apart.
pub struct FfmpegConverter {
    config: ConverterConfig,
}

impl FfmpegConverter {
    /// Creates a new converter with the given configuration. The engine path
    /// is fixed for the lifetime of the instance.
    pub fn new(config: ConverterConfig) -> Self {
        Self { config }
    }

    /// Creates a converter with default configuration (`ffmpeg` on PATH).
    pub fn with_defaults() -> Self {
        Self::new(ConverterConfig::default())
    }

    /// Checks that the engine binary responds to `-version`.
    pub async fn validate(&self) -> Result<(), ConvertError> {
        let result = Command::new(&self.config.ffmpeg_path)
            .arg("-version")
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await;

        match result {
            Ok(_) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(ConvertError::EngineNotFound {
                    path: self.config.ffmpeg_path.clone(),
                })
            }
            Err(e) => Err(ConvertError::Io(e)),
        }
    }

    /// Builds the engine argument list. Format selection is left to the
    /// engine, which infers it from the output extension. No `-y`: the
    /// no-overwrite precondition is enforced before the engine runs.
    fn build_args(&self, input: &Path, output: &Path) -> Vec<String> {
        let mut args = vec![
            "-nostdin".to_string(),
            "-loglevel".to_string(),
            self.config.log_level.clone(),
            "-i".to_string(),
            input.to_string_lossy().to_string(),
        ];
        args.extend(self.config.extra_args.iter().cloned());
        args.push(output.to_string_lossy().to_string());
        args
    }

    /// Spawns the engine and waits for it, observing cancellation and the
    /// configured timeout. The child is killed on either.
    async fn run_engine(
        &self,
        input: &Path,
        output: &Path,
        cancel: &CancellationToken,
    ) -> Result<(), ConvertError> {
        let args = self.build_args(input, output);

        let mut child = Command::new(&self.config.ffmpeg_path)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    ConvertError::EngineNotFound {
                        path: self.config.ffmpeg_path.clone(),
                    }
                } else {
                    ConvertError::Io(e)
                }
            })?;

        // Drain stderr concurrently so the engine never blocks on a full pipe.
        let stderr_pipe = child.stderr.take();
        let stderr_task = tokio::spawn(async move {
            let mut buf = String::new();
            if let Some(mut pipe) = stderr_pipe {
                let _ = pipe.read_to_string(&mut buf).await;
            }
            buf
        });

        let timeout = Duration::from_secs(self.config.timeout_secs);
        let status = tokio::select! {
            result = child.wait() => result?,
            _ = cancel.cancelled() => {
                let _ = child.kill().await;
                stderr_task.abort();
                return Err(ConvertError::Canceled {
                    path: output.to_path_buf(),
                });
            }
            _ = tokio::time::sleep(timeout) => {
                let _ = child.kill().await;
                stderr_task.abort();
                return Err(ConvertError::Timeout {
                    timeout_secs: self.config.timeout_secs,
                });
            }
        };

        let stderr_output = stderr_task.await.unwrap_or_default();
        if !status.success() {
            return Err(ConvertError::EngineFailed {
                reason: format!("engine exited with code: {:?}", status.code()),
                stderr: if stderr_output.is_empty() {
                    None
                } else {
                    Some(stderr_output)
                },
            });
        }

        Ok(())
    }

    /// Full conversion pipeline: preconditions, engine run, postcondition.
    async fn convert_file(
        &self,
        input: &Path,
        output: &Path,
        cancel: &CancellationToken,
    ) -> Result<(), ConvertError> {
        if !input.exists() {
            return Err(ConvertError::InputNotFound {
                path: input.to_path_buf(),
            });
        }

        if output.exists() {
            return Err(ConvertError::OutputExists {
                path: output.to_path_buf(),
            });
        }

        if cancel.is_cancelled() {
            return Err(ConvertError::Canceled {
                path: output.to_path_buf(),
            });
        }

        debug!(
            input = %input.display(),
            output = %output.display(),
            engine = %self.config.ffmpeg_path.display(),
            "starting conversion"
        );

        self.run_engine(input, output, cancel).await?;

        // The engine's own exit status is not trusted as the success signal;
        // the output artifact has to actually be there.
        if !output.exists() {
            return Err(ConvertError::OutputMissing {
                path: output.to_path_buf(),
            });
        }

        Ok(())
    }
}

#[async_trait]
impl VideoConverter for FfmpegConverter {
    async fn convert(
        &self,
        input: &Path,
        output: &Path,
        cancel: CancellationToken,
    ) -> OperationOutcome {
        match self.convert_file(input, output, &cancel).await {
            Ok(()) => OperationOutcome::success(SUCCESS_INTERNAL_MESSAGE, SUCCESS_USER_MESSAGE),
            Err(err) => {
                warn!(error = %err, input = %input.display(), "conversion failed");
                err.into()
            }
        }
    }
}

#[async_trait]
impl AudioConverter for FfmpegConverter {
    async fn convert(
        &self,
        input: &Path,
        output: &Path,
        cancel: CancellationToken,
    ) -> OperationOutcome {
        // Same engine invocation for audio and video.
        VideoConverter::convert(self, input, output, cancel).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_args_shape() {
        let converter = FfmpegConverter::with_defaults();
        let args = converter.build_args(Path::new("/in.mp3"), Path::new("/out.wav"));

        assert_eq!(args.first().map(String::as_str), Some("-nostdin"));
        assert!(args.contains(&"-i".to_string()));
        assert!(args.contains(&"/in.mp3".to_string()));
        // Output path is always last so the engine infers the format from it.
        assert_eq!(args.last().map(String::as_str), Some("/out.wav"));
        // No implicit overwrite.
        assert!(!args.contains(&"-y".to_string()));
    }

    #[test]
    fn test_build_args_includes_extra_args_before_output() {
        let config = ConverterConfig {
            extra_args: vec!["-map_metadata".to_string(), "0".to_string()],
            ..Default::default()
        };
        let converter = FfmpegConverter::new(config);
        let args = converter.build_args(Path::new("/in.mkv"), Path::new("/out.mp4"));

        let extra_pos = args.iter().position(|a| a == "-map_metadata").unwrap();
        assert!(extra_pos < args.len() - 1);
        assert_eq!(args.last().map(String::as_str), Some("/out.mp4"));
    }

    #[tokio::test]
    async fn test_convert_missing_input_is_precondition_failure() {
        let converter = FfmpegConverter::with_defaults();
        let outcome = VideoConverter::convert(
            &converter,
            Path::new("/definitely/not/here.mp4"),
            Path::new("/tmp/clipkit-never-created.avi"),
            CancellationToken::new(),
        )
        .await;

        assert!(outcome.has_failed);
        assert!(outcome.internal_message.contains("does not exist"));
        assert_eq!(outcome.internal_message, outcome.user_message);
    }
}
