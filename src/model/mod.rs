//! Data models for news-parser
//!
//! Plain data produced by the NEWS parser: individual release entries
//! and the version chunks that group them.

mod chunk;
mod entry;

pub use chunk::{Chunk, News};
pub use entry::Entry;
