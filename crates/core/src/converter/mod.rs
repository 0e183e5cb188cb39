//! Conversion façade over an external transcoding engine.
//!
//! This module provides the `VideoConverter` and `AudioConverter` capability
//! traits and an `FfmpegConverter` implementation that delegates the actual
//! transcoding to an ffmpeg executable. Output format selection is inferred
//! by the engine from the output file extension; nothing codec-related is
//! reimplemented here.
//!
//! Every operation returns an [`OperationOutcome`](crate::OperationOutcome)
//! rather than an error: preconditions (input exists, output absent) and the
//! output postcondition are checked around the engine call, and any engine
//! failure is folded into the outcome.
//!
//! # Example
//!
//! ```ignore
//! use clipkit_core::converter::{ConverterConfig, FfmpegConverter, VideoConverter};
//! use tokio_util::sync::CancellationToken;
//!
//! let converter = FfmpegConverter::new(ConverterConfig::default());
//! let outcome = converter
//!     .convert(Path::new("in.mp3"), Path::new("out.wav"), CancellationToken::new())
//!     .await;
//! assert!(!outcome.has_failed);
//! ```

mod config;
mod error;
mod ffmpeg;
mod traits;

pub use config::ConverterConfig;
pub use error::ConvertError;
pub use ffmpeg::FfmpegConverter;
pub use traits::{AudioConverter, VideoConverter};
