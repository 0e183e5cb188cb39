//! Testing utilities and mock implementations.
//!
//! This module provides mock implementations of the façade traits plus
//! fixture helpers, so downstream code and the integration suites can run
//! without a real ffmpeg binary or network access.
//!
//! # Example
//!
//! ```rust,ignore
//! use clipkit_core::testing::{MockConverter, MockDownloader};
//!
//! let converter = MockConverter::new();
//! converter.set_next_outcome(OperationOutcome::failure_from("boom")).await;
//!
//! let outcome = VideoConverter::convert(&converter, input, output, cancel).await;
//! assert_eq!(converter.call_count().await, 1);
//! ```

mod mock_converter;
mod mock_downloader;

pub use mock_converter::{MockConverter, RecordedConversion};
pub use mock_downloader::{MockDownloader, RecordedDownload};

/// Test fixtures and helper functions.
pub mod fixtures {
    use std::io;
    use std::path::{Path, PathBuf};

    /// Copies every regular file in `base` into `dest`, creating `dest` if
    /// needed. Mirrors the base-to-temp staging a media test run starts with.
    pub fn stage_media_files(base: &Path, dest: &Path) -> io::Result<()> {
        if !base.is_dir() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("fixture base directory not found: {}", base.display()),
            ));
        }
        std::fs::create_dir_all(dest)?;

        for entry in std::fs::read_dir(base)? {
            let entry = entry?;
            let path = entry.path();
            if path.is_file() {
                std::fs::copy(&path, dest.join(entry.file_name()))?;
            }
        }
        Ok(())
    }

    /// Writes an executable shell script standing in for the conversion
    /// engine. The script receives the same argument list ffmpeg would, with
    /// the output path last.
    #[cfg(unix)]
    pub fn stub_engine(dir: &Path, name: &str, body: &str) -> io::Result<PathBuf> {
        use std::os::unix::fs::PermissionsExt;

        let path = dir.join(name);
        std::fs::write(&path, format!("#!/bin/sh\n{body}\n"))?;
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))?;
        Ok(path)
    }
}
