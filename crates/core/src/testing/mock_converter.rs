//! Mock converter for testing.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::RwLock;
use tokio_util::sync::CancellationToken;

use crate::converter::{AudioConverter, VideoConverter};
use crate::OperationOutcome;

/// A recorded conversion call for test assertions.
#[derive(Debug, Clone)]
pub struct RecordedConversion {
    pub input: PathBuf,
    pub output: PathBuf,
}

/// Mock implementation of the converter capability traits.
///
/// Records every call and returns a configurable outcome. On a success
/// outcome it creates the output file, matching the converter postcondition
/// real callers rely on.
#[derive(Debug, Clone)]
pub struct MockConverter {
    calls: Arc<RwLock<Vec<RecordedConversion>>>,
    next_outcome: Arc<RwLock<Option<OperationOutcome>>>,
}

impl Default for MockConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl MockConverter {
    /// Create a new mock converter that succeeds by default.
    pub fn new() -> Self {
        Self {
            calls: Arc::new(RwLock::new(Vec::new())),
            next_outcome: Arc::new(RwLock::new(None)),
        }
    }

    /// Sets the outcome returned by the next conversions.
    pub async fn set_next_outcome(&self, outcome: OperationOutcome) {
        *self.next_outcome.write().await = Some(outcome);
    }

    /// Get all recorded conversions.
    pub async fn recorded_conversions(&self) -> Vec<RecordedConversion> {
        self.calls.read().await.clone()
    }

    /// Get the number of conversions performed.
    pub async fn call_count(&self) -> usize {
        self.calls.read().await.len()
    }

    async fn run(&self, input: &Path, output: &Path) -> OperationOutcome {
        self.calls.write().await.push(RecordedConversion {
            input: input.to_path_buf(),
            output: output.to_path_buf(),
        });

        let outcome = match self.next_outcome.read().await.clone() {
            Some(outcome) => outcome,
            None => OperationOutcome::success(
                "Conversion successful",
                "Conversion completed successfully.",
            ),
        };

        if !outcome.has_failed {
            let _ = std::fs::write(output, b"converted");
        }

        outcome
    }
}

#[async_trait]
impl VideoConverter for MockConverter {
    async fn convert(
        &self,
        input: &Path,
        output: &Path,
        _cancel: CancellationToken,
    ) -> OperationOutcome {
        self.run(input, output).await
    }
}

#[async_trait]
impl AudioConverter for MockConverter {
    async fn convert(
        &self,
        input: &Path,
        output: &Path,
        cancel: CancellationToken,
    ) -> OperationOutcome {
        VideoConverter::convert(self, input, output, cancel).await
    }
}
