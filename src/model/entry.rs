//! Release entry data model

use serde::Serialize;

/// A single bullet from a NEWS file, tagged with the release it belongs to
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    /// Bullet text without the `*` marker; continuation lines joined with `\n`
    pub content: String,

    /// Version string from the enclosing `# Version` header (`"HEAD"` if none)
    pub version: String,

    /// Release date as `YYYY-MM-DD`, or `"unknown"`
    pub date: String,

    /// Category label from the last `##` header (e.g. "New features")
    #[serde(rename = "type")]
    pub kind: String,

    /// Release codename, if the version header carried one
    pub codename: Option<String>,
}

impl Entry {
    /// First line of the content
    pub fn summary(&self) -> &str {
        self.content.lines().next().unwrap_or("")
    }

    /// Whether the content spans more than one line
    pub fn is_multiline(&self) -> bool {
        self.content.contains('\n')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(content: &str) -> Entry {
        Entry {
            content: content.to_string(),
            version: "1.0.0".to_string(),
            date: "2020-01-02".to_string(),
            kind: "Bug fixes".to_string(),
            codename: None,
        }
    }

    #[test]
    fn test_summary_single_line() {
        let e = entry("Fixed a crash");
        assert_eq!(e.summary(), "Fixed a crash");
        assert!(!e.is_multiline());
    }

    #[test]
    fn test_summary_multiline() {
        let e = entry("Fixed a crash\nwhen muxing empty files");
        assert_eq!(e.summary(), "Fixed a crash");
        assert!(e.is_multiline());
    }

    #[test]
    fn test_kind_serializes_as_type() {
        let json = serde_json::to_value(entry("x")).unwrap();
        assert_eq!(json["type"], "Bug fixes");
        assert!(json.get("kind").is_none());
        assert!(json["codename"].is_null());
    }
}
