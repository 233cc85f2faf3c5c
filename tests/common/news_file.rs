//! NewsFile helper for integration tests.
//!
//! Writes NEWS content into a temporary directory.

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// A NEWS file inside a temporary directory.
///
/// The directory is automatically cleaned up when the NewsFile is dropped.
pub struct NewsFile {
    dir: TempDir,
    path: PathBuf,
}

impl NewsFile {
    /// Write `content` to `NEWS.md` in a new temporary directory.
    pub fn new(content: &str) -> Self {
        Self::with_bytes(content.as_bytes())
    }

    /// Write raw bytes, for testing non-UTF-8 input.
    pub fn with_bytes(bytes: &[u8]) -> Self {
        let dir = TempDir::new().expect("Failed to create temp directory");
        let path = dir.path().join("NEWS.md");
        fs::write(&path, bytes).expect("Failed to write NEWS file");
        Self { dir, path }
    }

    /// Get the path to the NEWS file.
    pub fn path(&self) -> PathBuf {
        self.path.clone()
    }

    /// Get a path inside the temp directory that does not exist.
    pub fn missing_path(&self) -> PathBuf {
        self.dir.path().join("does-not-exist.md")
    }
}
