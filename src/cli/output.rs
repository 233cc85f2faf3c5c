//! Output formatting for parsed chunks
//!
//! Text output is a plain structural dump meant for humans checking what
//! the parser saw; it is not a release-notes renderer.

use color_eyre::eyre::Result;

use crate::model::Chunk;
use crate::news::constants::UNKNOWN_DATE;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Renders chunks in the selected format
pub struct Output {
    format: OutputFormat,
}

impl Output {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Render chunks to a string ending with a newline (empty for no chunks in text mode)
    pub fn render(&self, chunks: &[&Chunk]) -> Result<String> {
        match self.format {
            OutputFormat::Text => Ok(render_text(chunks)),
            OutputFormat::Json => {
                let mut json = serde_json::to_string_pretty(chunks)?;
                json.push('\n');
                Ok(json)
            }
        }
    }
}

/// Render chunks as an indented outline
///
/// ```text
/// Version 9.7.1 "Pandemonium" (2016-12-27)
///   Bug fixes:
///     * Fixed a crash
///       with more detail
/// ```
pub fn render_text(chunks: &[&Chunk]) -> String {
    let mut out = String::new();

    for (i, chunk) in chunks.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }

        out.push_str(&format!("Version {}", chunk.version()));
        if let Some(codename) = chunk.codename() {
            out.push_str(&format!(" \"{}\"", codename));
        }
        out.push_str(&format!(" ({})\n", chunk.date().unwrap_or(UNKNOWN_DATE)));

        for (kind, entries) in chunk.by_type() {
            out.push_str(&format!("  {}:\n", kind));
            for entry in entries {
                out.push_str(&format!("    * {}\n", entry.summary()));
                for line in entry.content.lines().skip(1) {
                    if line.is_empty() {
                        out.push('\n');
                    } else {
                        out.push_str(&format!("      {}\n", line));
                    }
                }
            }
        }
    }

    out
}
