//! Line scanner state

use regex::Captures;

use super::{CATEGORY_HEADER_REGEX, PLACEHOLDER_HEADER_REGEX, VERSION_HEADER_REGEX};
use crate::model::Entry;
use crate::news::constants::{DEFAULT_TYPE, DEFAULT_VERSION, UNKNOWN_DATE, markers};

/// Whether lines are currently kept or dropped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum ScanState {
    /// Before the first release, or inside a `# Version ?` section
    Ignoring,
    /// Inside a dated release section
    Collecting,
}

/// Mutable state for one parse call
#[derive(Debug)]
pub(super) struct ParserState<'a> {
    /// Lines of the bullet being accumulated
    pending_lines: Vec<&'a str>,
    version: String,
    date: String,
    kind: String,
    codename: Option<String>,
    scan_state: ScanState,
    /// Flushed entries in document order
    entries: Vec<Entry>,
}

impl<'a> ParserState<'a> {
    pub(super) fn new() -> Self {
        Self {
            pending_lines: Vec::new(),
            version: DEFAULT_VERSION.to_string(),
            date: UNKNOWN_DATE.to_string(),
            kind: DEFAULT_TYPE.to_string(),
            codename: None,
            scan_state: ScanState::Ignoring,
            entries: Vec::new(),
        }
    }

    /// Feed one line (without its line terminator)
    pub(super) fn scan_line(&mut self, line: &'a str) {
        // Any header or new bullet closes the pending entry
        if line.starts_with(markers::HEADER) || line.starts_with(markers::BULLET) {
            self.flush();
        }

        if let Some(caps) = VERSION_HEADER_REGEX.captures(line) {
            self.open_release(&caps);
            return;
        }

        if PLACEHOLDER_HEADER_REGEX.is_match(line) {
            tracing::debug!("unreleased section, skipping until next version header");
            self.scan_state = ScanState::Ignoring;
            return;
        }

        if self.scan_state == ScanState::Ignoring {
            return;
        }

        if let Some(caps) = CATEGORY_HEADER_REGEX.captures(line) {
            self.kind = caps[1].to_string();
            return;
        }

        self.pending_lines.push(strip_bullet(line));
    }

    /// Flush the last entry and return everything collected
    pub(super) fn finish(mut self) -> Vec<Entry> {
        self.flush();
        self.entries
    }

    fn open_release(&mut self, caps: &Captures<'_>) {
        self.version = caps["version"].to_string();
        self.date = format!(
            "{}-{}-{}",
            zero_pad(&caps["year"], 4),
            zero_pad(&caps["month"], 2),
            zero_pad(&caps["day"], 2)
        );
        self.codename = caps.name("codename").map(|m| m.as_str().to_string());
        self.kind = DEFAULT_TYPE.to_string();
        self.scan_state = ScanState::Collecting;

        tracing::debug!(version = %self.version, date = %self.date, "version header");
    }

    /// Turn pending lines into an entry, if they hold any text
    fn flush(&mut self) {
        let lines = std::mem::take(&mut self.pending_lines);

        let Some(first) = lines.iter().position(|l| !is_blank(l)) else {
            return;
        };
        let last = lines.iter().rposition(|l| !is_blank(l)).unwrap_or(first);
        let content = lines[first..=last].join("\n");

        tracing::trace!(version = %self.version, kind = %self.kind, "entry");

        self.entries.push(Entry {
            content,
            version: self.version.clone(),
            date: self.date.clone(),
            kind: self.kind.clone(),
            codename: self.codename.clone(),
        });
    }
}

fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// Remove a leading `*` marker with the whitespace after it, then one indent
pub(super) fn strip_bullet(line: &str) -> &str {
    let line = match line.strip_prefix(markers::BULLET) {
        Some(rest) => rest.trim_start_matches(|c: char| c.is_ascii_whitespace()),
        None => line,
    };
    strip_indent(line)
}

/// Remove one two-character whitespace indent
fn strip_indent(line: &str) -> &str {
    let bytes = line.as_bytes();
    if bytes.len() >= markers::INDENT
        && bytes[..markers::INDENT].iter().all(u8::is_ascii_whitespace)
    {
        &line[markers::INDENT..]
    } else {
        line
    }
}

/// Left-pad a run of ASCII digits with zeros, like `%0Nd`
///
/// Works on the digit string so oversized numbers are kept as written.
pub(super) fn zero_pad(digits: &str, width: usize) -> String {
    let digits = digits.trim_start_matches('0');
    let digits = if digits.is_empty() { "0" } else { digits };
    format!("{:0>width$}", digits)
}
