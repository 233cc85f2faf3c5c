//! NEWS text parser
//!
//! Turns free-form changelog text into entries grouped by version.
//!
//! Recognized structure:
//! ```text
//! # Version ?                                  <- unreleased, skipped
//! # Version 9.7.1 "Pandemonium" 2016-12-27     <- release header
//! ## Bug fixes                                 <- category header
//! * Fixed a crash when muxing empty files.     <- bullet
//!   Continuation of the bullet above.          <- continuation line
//! ```

mod chunk;
mod state;


use std::io::Read;
use std::sync::LazyLock;

use regex::Regex;

use super::NewsError;
use crate::model::News;
use state::ParserState;

/// Regex for HTML comments, which may span several lines
static COMMENT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->").expect("Invalid comment regex"));

/// Regex for release headers
///
/// Examples:
/// - `# Version 9.7.1 "Pandemonium" 2016-12-27`
/// - `# Version 0.6.4 2003-08-27`
///
/// Groups: version, codename (optional), year, month, day
static VERSION_HEADER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"^#\s+Version\s+(?<version>[0-9.-]+)(?:\s+"(?<codename>.+)")?\s+(?<year>[0-9]+)-(?<month>[0-9]+)-(?<day>[0-9]+)"#,
    )
    .expect("Invalid version header regex")
});

/// Regex for the unreleased section header: `# Version ?`
static PLACEHOLDER_HEADER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#\s+Version\s+\?").expect("Invalid placeholder header regex")
});

/// Regex for category headers: `## <category>`
static CATEGORY_HEADER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^##\s+(.+)").expect("Invalid category header regex"));

/// Parser for NEWS text
pub struct Parser;

impl Parser {
    /// Parse NEWS text into version chunks
    ///
    /// Never fails: lines that match no known structure are kept as
    /// content or skipped, depending on whether a release is open.
    pub fn parse(text: &str) -> News {
        let text = COMMENT_REGEX.replace_all(text, "");

        let mut state = ParserState::new();
        for line in text.lines() {
            state.scan_line(line);
        }
        let entries = state.finish();
        let entry_count = entries.len();

        let news = News::new(Self::chunk_by_version(entries));
        tracing::debug!(
            chunks = news.len(),
            entries = entry_count,
            "parsed NEWS text"
        );

        news
    }

    /// Read all of `reader` and parse it
    pub fn parse_reader(mut reader: impl Read) -> Result<News, NewsError> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Ok(Self::parse(&text))
    }
}
