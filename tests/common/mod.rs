//! Common test utilities for integration tests.
//!
//! This module provides a sample NEWS document and helpers for writing
//! NEWS files into temporary directories.
//!
//! Note: Each integration test file compiles as a separate crate,
//! so not all helpers are used in every test file. We suppress
//! dead_code warnings at the module level.

#![allow(dead_code)]
#![allow(unused_imports)]

pub mod news_file;

pub use news_file::NewsFile;

/// A NEWS document exercising every structural rule the parser knows
pub const SAMPLE_NEWS: &str = r#"<!-- This file is parsed by the release tooling. Keep the format. -->
# Version ?

## New features

* mkvmerge: work in progress that must not show up.

# Version 9.7.1 "Pandemonium" 2016-12-27

## Bug fixes

* mkvmerge: AC-3 parser: fixed detection of Dolby Digital Plus
  streams that start with a dependent frame.
* MKVToolNix GUI: fixed a crash when closing a tab
  <!-- see the bug tracker for details -->
  while a job was still running.

# Version 9.7.0 "Pandemonium" 2016-12-25

* Release notes header text.

## New features

* mkvextract: added a mode for extracting timestamps.

## Build system changes

* configure: requires a C++11 compiler now.

# Version 0.6.4 2003-8-7

* Initial public release.
"#;
