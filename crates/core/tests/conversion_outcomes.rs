//! Conversion façade integration tests.
//!
//! These tests exercise the full outcome contract of `FfmpegConverter`
//! without requiring a real ffmpeg binary: precondition failures never reach
//! the engine, and the engine-path tests use stub executables.

use std::path::PathBuf;

use tempfile::TempDir;
use tokio_util::sync::CancellationToken;

use clipkit_core::{
    converter::{AudioConverter, ConverterConfig, FfmpegConverter, VideoConverter},
    testing::fixtures,
};

struct TestHarness {
    temp_dir: TempDir,
}

impl TestHarness {
    fn new() -> Self {
        Self {
            temp_dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    fn path(&self, name: &str) -> PathBuf {
        self.temp_dir.path().join(name)
    }

    fn seed_input(&self, name: &str) -> PathBuf {
        let path = self.path(name);
        std::fs::write(&path, b"media bytes").expect("Failed to write input fixture");
        path
    }

    fn converter(&self) -> FfmpegConverter {
        FfmpegConverter::with_defaults()
    }

    #[cfg(unix)]
    fn converter_with_engine(&self, script_body: &str) -> FfmpegConverter {
        let engine = fixtures::stub_engine(self.temp_dir.path(), "engine.sh", script_body)
            .expect("Failed to write stub engine");
        FfmpegConverter::new(ConverterConfig::with_engine_path(engine))
    }
}

#[tokio::test]
async fn missing_input_returns_failure_and_creates_no_output() {
    let harness = TestHarness::new();
    let input = harness.path("nonExistentFile.mp4");
    let output = harness.path("output.avi");

    let outcome = VideoConverter::convert(
        &harness.converter(),
        &input,
        &output,
        CancellationToken::new(),
    )
    .await;

    assert!(outcome.has_failed);
    assert!(outcome.internal_message.contains("does not exist"));
    // Precondition messages are already user-safe.
    assert_eq!(outcome.internal_message, outcome.user_message);
    assert!(!output.exists());
}

#[tokio::test]
async fn existing_output_returns_failure_and_is_left_unmodified() {
    let harness = TestHarness::new();
    let input = harness.seed_input("test.mp3");
    let output = harness.path("output.wav");
    std::fs::write(&output, b"precious data").unwrap();

    let outcome = VideoConverter::convert(
        &harness.converter(),
        &input,
        &output,
        CancellationToken::new(),
    )
    .await;

    assert!(outcome.has_failed);
    assert!(outcome.internal_message.contains("already exists"));
    assert_eq!(std::fs::read(&output).unwrap(), b"precious data");
}

#[tokio::test]
async fn precondition_failure_is_idempotent() {
    let harness = TestHarness::new();
    let input = harness.path("nonExistentFile.mp4");
    let output = harness.path("output.avi");
    let converter = harness.converter();

    let first =
        VideoConverter::convert(&converter, &input, &output, CancellationToken::new()).await;
    let second =
        VideoConverter::convert(&converter, &input, &output, CancellationToken::new()).await;

    assert!(first.has_failed);
    assert_eq!(first, second);
    assert!(!output.exists());
}

#[tokio::test]
async fn already_cancelled_token_yields_cancellation_outcome() {
    let harness = TestHarness::new();
    let input = harness.seed_input("test.mp3");
    let output = harness.path("output.wav");

    let cancel = CancellationToken::new();
    cancel.cancel();

    let outcome = VideoConverter::convert(&harness.converter(), &input, &output, cancel).await;

    assert!(outcome.has_failed);
    assert!(outcome.internal_message.contains("canceled"));
    assert!(outcome.user_message.contains("canceled"));
    assert!(!output.exists());
}

#[tokio::test]
async fn missing_engine_binary_fails_without_panicking() {
    let harness = TestHarness::new();
    let input = harness.seed_input("test.mp3");
    let output = harness.path("output.wav");

    let converter = FfmpegConverter::new(ConverterConfig::with_engine_path(
        harness.path("no-such-engine"),
    ));
    let outcome =
        VideoConverter::convert(&converter, &input, &output, CancellationToken::new()).await;

    assert!(outcome.has_failed);
    assert!(outcome.internal_message.contains("not found"));
    // Engine problems are not exposed to users verbatim.
    assert_eq!(
        outcome.user_message,
        "An error occurred during conversion. Please try again."
    );
    assert!(!output.exists());
}

#[cfg(unix)]
#[tokio::test]
async fn successful_conversion_creates_output_file() {
    let harness = TestHarness::new();
    let input = harness.seed_input("test.mp3");
    let output = harness.path("output.wav");

    // Stub engine writes the output path it is given, like ffmpeg would.
    let converter = harness.converter_with_engine(
        r#"for arg in "$@"; do last="$arg"; done
printf 'converted' > "$last""#,
    );

    let outcome =
        VideoConverter::convert(&converter, &input, &output, CancellationToken::new()).await;

    assert!(!outcome.has_failed, "{outcome:?}");
    assert_eq!(outcome.internal_message, "Conversion successful");
    assert_eq!(outcome.user_message, "Conversion completed successfully.");
    assert!(output.exists());
}

#[cfg(unix)]
#[tokio::test]
async fn engine_success_without_output_is_a_postcondition_failure() {
    let harness = TestHarness::new();
    let input = harness.seed_input("test.mp3");
    let output = harness.path("output.wav");

    // Engine claims success but produces nothing.
    let converter = harness.converter_with_engine("exit 0");

    let outcome =
        VideoConverter::convert(&converter, &input, &output, CancellationToken::new()).await;

    assert!(outcome.has_failed);
    assert!(outcome.internal_message.contains("was not created"));
    assert!(!output.exists());
}

#[cfg(unix)]
#[tokio::test]
async fn failing_engine_yields_generic_user_message() {
    let harness = TestHarness::new();
    let input = harness.seed_input("test.mp4");
    let output = harness.path("output.avi");

    let converter = harness.converter_with_engine(
        r#"echo "Unsupported output format" >&2
exit 1"#,
    );

    let outcome =
        VideoConverter::convert(&converter, &input, &output, CancellationToken::new()).await;

    assert!(outcome.has_failed);
    assert!(outcome.internal_message.contains("engine"));
    assert_eq!(
        outcome.user_message,
        "An error occurred during conversion. Please try again."
    );
}

#[cfg(unix)]
#[tokio::test]
async fn audio_and_video_capabilities_behave_identically() {
    let harness = TestHarness::new();
    let script = r#"for arg in "$@"; do last="$arg"; done
printf 'converted' > "$last""#;
    let converter = harness.converter_with_engine(script);

    let video_input = harness.seed_input("clip.mp4");
    let video_output = harness.path("clip.mkv");
    let audio_input = harness.seed_input("song.mp3");
    let audio_output = harness.path("song.wav");

    let video = VideoConverter::convert(
        &converter,
        &video_input,
        &video_output,
        CancellationToken::new(),
    )
    .await;
    let audio = AudioConverter::convert(
        &converter,
        &audio_input,
        &audio_output,
        CancellationToken::new(),
    )
    .await;

    assert!(!video.has_failed);
    assert!(!audio.has_failed);
    assert_eq!(video.internal_message, audio.internal_message);
    assert_eq!(video.user_message, audio.user_message);
    assert!(video_output.exists());
    assert!(audio_output.exists());
}
