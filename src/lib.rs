//! tanzfm Library
//!
//! Core of the file-browsing shell: navigation history, clipboard, the
//! transfer engine and breadcrumb layout. The terminal front-end in `main.rs`
//! consumes these modules; tests exercise them directly.

pub mod config;
pub mod fs;
pub mod logic;
pub mod model;
pub mod services;
pub mod utils;

use serde::Deserialize;

/// Sort mode for directory listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortMode {
    #[default]
    Alphabetical, // Sort alphabetically
    LastModified, // Sort by last modified time
    FileSize,     // Sort by file size
}

impl SortMode {
    pub fn as_str(&self) -> &str {
        match self {
            SortMode::Alphabetical => "A-Z",
            SortMode::LastModified => "Timestamp",
            SortMode::FileSize => "Size",
        }
    }

    /// Next mode in the A-Z → Timestamp → Size cycle
    pub fn next(self) -> Self {
        match self {
            SortMode::Alphabetical => SortMode::LastModified,
            SortMode::LastModified => SortMode::FileSize,
            SortMode::FileSize => SortMode::Alphabetical,
        }
    }
}
