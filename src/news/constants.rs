//! NEWS format constants
//!
//! Default values and markers recognized by the parser.

/// Version assigned to entries before any concrete version header
pub const DEFAULT_VERSION: &str = "HEAD";

/// Date assigned to entries whose release date is not known
pub const UNKNOWN_DATE: &str = "unknown";

/// Category assigned until the first `##` header of a release
pub const DEFAULT_TYPE: &str = "Other changes";

/// Default NEWS file looked up by the CLI
pub const DEFAULT_NEWS_FILE: &str = "NEWS.md";

/// Line markers
pub mod markers {
    /// Starts a header line (`# Version ...`, `## Category`)
    pub const HEADER: char = '#';
    /// Starts a bullet line
    pub const BULLET: char = '*';
    /// Indent removed from bullet and continuation lines
    pub const INDENT: usize = 2;
}
