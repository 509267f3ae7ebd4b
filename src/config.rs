use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::logic::collision::DEFAULT_MAX_ATTEMPTS;
use crate::model::history::DuplicatePolicy;
use crate::SortMode;

/// Smallest chunk the copy loop will use, whatever the config says
pub const MIN_CHUNK_SIZE: usize = 4096;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Initial location (defaults to the home directory)
    pub start_dir: Option<PathBuf>,
    /// Whether navigating to the current location pushes a history entry
    pub history_duplicates: DuplicatePolicy,
    /// Bound on "(copy n)" candidates probed before giving up
    pub max_collision_attempts: u32,
    /// Bytes per read/write during file copies (cancellation granularity)
    pub copy_chunk_size: usize,
    pub show_hidden: bool,
    pub sort_mode: SortMode,
    pub vim_mode: bool,
    /// Session bookmarks seeded at startup; never written back
    pub bookmarks: Vec<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            start_dir: None,
            history_duplicates: DuplicatePolicy::Keep,
            max_collision_attempts: DEFAULT_MAX_ATTEMPTS,
            copy_chunk_size: 1024 * 1024,
            show_hidden: false,
            sort_mode: SortMode::Alphabetical,
            vim_mode: false,
            bookmarks: Vec::new(),
        }
    }
}

impl Config {
    /// Parse a YAML config document
    pub fn from_yaml(text: &str) -> anyhow::Result<Self> {
        // An empty file deserializes to unit, not to a struct
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(text)?)
    }

    /// Read and parse a config file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_yaml(&text)
    }

    /// Chunk size clamped to a sane minimum
    pub fn chunk_size(&self) -> usize {
        self.copy_chunk_size.max(MIN_CHUNK_SIZE)
    }
}
