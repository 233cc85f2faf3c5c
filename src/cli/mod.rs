//! Command-line interface
//!
//! `news-parser [FILE]` parses a NEWS file and prints its release chunks.
//!
//! Output formats (`--format`):
//! - `text` (default) - indented outline per version and category
//! - `json` - array of `{ "version", "entries" }` objects
//!
//! Logging goes to stderr and is controlled by `RUST_LOG` or `--verbose`.

mod app;
mod output;

pub use app::{Cli, run};
pub use output::{Output, OutputFormat, render_text};
