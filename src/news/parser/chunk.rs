//! Version chunking

use crate::model::{Chunk, Entry};

use super::Parser;

impl Parser {
    /// Collapse consecutive entries with the same version into chunks
    ///
    /// Run-length grouping: a version that reappears after a different one
    /// starts a new chunk instead of joining the earlier one.
    pub(super) fn chunk_by_version(entries: Vec<Entry>) -> Vec<Chunk> {
        entries.into_iter().fold(Vec::new(), |mut chunks: Vec<Chunk>, entry| {
            match chunks.last_mut() {
                Some(chunk) if chunk.version() == entry.version => chunk.push(entry),
                _ => chunks.push(Chunk::new(entry.version.clone(), vec![entry])),
            }
            chunks
        })
    }
}
