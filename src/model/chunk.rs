//! Release chunk model
//!
//! A [`Chunk`] is a maximal run of consecutive entries sharing one version.
//! [`News`] is the ordered list of chunks for a whole file.

use serde::Serialize;

use super::Entry;

/// Consecutive entries that belong to the same version
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Chunk {
    version: String,
    entries: Vec<Entry>,
}

impl Chunk {
    pub(crate) fn new(version: String, entries: Vec<Entry>) -> Self {
        Self { version, entries }
    }

    /// Append an entry; the caller keeps versions consistent
    pub(crate) fn push(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    /// Version shared by every entry in this chunk
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Entries in document order
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Release date of the first entry
    pub fn date(&self) -> Option<&str> {
        self.entries.first().map(|e| e.date.as_str())
    }

    /// Release codename of the first entry, if any
    pub fn codename(&self) -> Option<&str> {
        self.entries.first().and_then(|e| e.codename.as_deref())
    }

    /// Group entries by category, in order of first appearance
    ///
    /// Unlike chunking, this merges non-adjacent entries of the same type:
    /// a release lists each category once.
    pub fn by_type(&self) -> Vec<(&str, Vec<&Entry>)> {
        let mut groups: Vec<(&str, Vec<&Entry>)> = Vec::new();

        for entry in &self.entries {
            match groups.iter_mut().find(|(kind, _)| *kind == entry.kind) {
                Some((_, members)) => members.push(entry),
                None => groups.push((entry.kind.as_str(), vec![entry])),
            }
        }

        groups
    }

    pub fn into_entries(self) -> Vec<Entry> {
        self.entries
    }
}

/// Parsed NEWS file: release chunks in document order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct News {
    chunks: Vec<Chunk>,
}

impl News {
    pub(crate) fn new(chunks: Vec<Chunk>) -> Self {
        Self { chunks }
    }

    /// Number of chunks (not distinct versions)
    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    pub fn chunks(&self) -> &[Chunk] {
        &self.chunks
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Chunk> {
        self.chunks.iter()
    }

    /// The topmost chunk, usually the newest release
    pub fn latest(&self) -> Option<&Chunk> {
        self.chunks.first()
    }

    /// All entries across chunks, in document order
    pub fn entries(&self) -> impl Iterator<Item = &Entry> {
        self.chunks.iter().flat_map(|c| c.entries.iter())
    }

    /// Chunk versions in order; a version repeats if its chunks are split
    pub fn versions(&self) -> Vec<&str> {
        self.chunks.iter().map(Chunk::version).collect()
    }

    pub fn into_chunks(self) -> Vec<Chunk> {
        self.chunks
    }
}

impl<'a> IntoIterator for &'a News {
    type Item = &'a Chunk;
    type IntoIter = std::slice::Iter<'a, Chunk>;

    fn into_iter(self) -> Self::IntoIter {
        self.chunks.iter()
    }
}

impl IntoIterator for News {
    type Item = Chunk;
    type IntoIter = std::vec::IntoIter<Chunk>;

    fn into_iter(self) -> Self::IntoIter {
        self.chunks.into_iter()
    }
}
