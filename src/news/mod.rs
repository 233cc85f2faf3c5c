//! NEWS file loading and parsing
//!
//! This module reads changelog text and turns it into versioned chunks.

pub mod constants;
/// Parser module (public for integration testing)
pub mod parser;

pub use parser::Parser;

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::model::News;

/// Errors that can occur when loading a NEWS file
///
/// Parsing itself is lenient and never fails; only reading the input can.
#[derive(Error, Debug)]
pub enum NewsError {
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to read NEWS input: {0}")]
    Read(#[from] io::Error),
}

/// Read and parse a NEWS file
pub fn parse_news_file(path: impl AsRef<Path>) -> Result<News, NewsError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| NewsError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(path = %path.display(), bytes = text.len(), "read NEWS file");

    Ok(Parser::parse(&text))
}
