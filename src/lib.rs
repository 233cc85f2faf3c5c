//! news-parser - structured history from NEWS files
//!
//! Parses loosely structured changelog text (`# Version` headers, `##`
//! categories, `*` bullets) into release entries grouped by version.
//!
//! This library provides:
//! - [`news`]: NEWS parsing and file loading
//! - [`model`]: Entry and chunk data models
//! - [`cli`]: Command-line front end
//!
//! ```
//! use news_parser::news::Parser;
//!
//! let news = Parser::parse("# Version 1.0 2020-01-02\n* First release\n");
//! let chunk = news.latest().unwrap();
//! assert_eq!(chunk.version(), "1.0");
//! assert_eq!(chunk.entries()[0].content, "First release");
//! ```

pub mod cli;
pub mod model;
pub mod news;

pub use model::{Chunk, Entry, News};
pub use news::{NewsError, Parser, parse_news_file};
