//! Clipboard
//!
//! A single pending source set plus its mode. Owned by the `Model` and passed
//! to whoever pastes; there is no process-wide clipboard.

use std::path::{Path, PathBuf};

use crate::fs::FileSystem;
use crate::logic::errors::ErrorKind;
use crate::logic::path;
use crate::services::transfer::TransferOutcome;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipboardMode {
    Copy,
    Cut,
}

impl ClipboardMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClipboardMode::Copy => "copy",
            ClipboardMode::Cut => "cut",
        }
    }
}

/// Pending sources (non-empty, unique, first-seen order) and their mode
///
/// Every `set_copy`/`set_cut` stamps a fresh generation, so two entries only
/// compare equal when they are the same clipboard write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipboardEntry {
    sources: Vec<PathBuf>,
    mode: ClipboardMode,
    generation: u64,
}

impl ClipboardEntry {
    pub fn sources(&self) -> &[PathBuf] {
        &self.sources
    }

    pub fn mode(&self) -> ClipboardMode {
        self.mode
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[derive(Debug, Clone, Default)]
pub struct ClipboardController {
    entry: Option<ClipboardEntry>,
    /// Generation handed to the next entry
    next_generation: u64,
}

impl ClipboardController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the held entry with a Copy-mode source set
    pub fn set_copy(&mut self, sources: &[PathBuf], fs: &dyn FileSystem) -> Result<(), ErrorKind> {
        self.set(sources, ClipboardMode::Copy, fs)
    }

    /// Replace the held entry with a Cut-mode source set
    pub fn set_cut(&mut self, sources: &[PathBuf], fs: &dyn FileSystem) -> Result<(), ErrorKind> {
        self.set(sources, ClipboardMode::Cut, fs)
    }

    pub fn peek(&self) -> Option<&ClipboardEntry> {
        self.entry.as_ref()
    }

    pub fn clear(&mut self) {
        self.entry = None;
    }

    pub fn is_empty(&self) -> bool {
        self.entry.is_none()
    }

    /// Update the entry after `pasted` produced `outcomes`
    ///
    /// Copy entries stay for repeated pastes. Cut entries are dropped once
    /// every source has moved; sources that failed stay on the clipboard.
    /// Nothing changes if the clipboard was overwritten while the paste ran.
    pub fn complete_paste(&mut self, pasted: &ClipboardEntry, outcomes: &[TransferOutcome]) {
        if pasted.mode == ClipboardMode::Copy {
            return;
        }
        let Some(entry) = self.entry.as_mut() else {
            return;
        };
        if entry.generation != pasted.generation {
            log::debug!("clipboard: replaced during paste, keeping newer entry");
            return;
        }

        let failed: Vec<&Path> = outcomes
            .iter()
            .filter(|o| !o.succeeded())
            .map(|o| o.source.as_path())
            .collect();

        entry.sources.retain(|s| failed.contains(&s.as_path()));
        if entry.sources.is_empty() {
            log::debug!("clipboard: cut entry consumed");
            self.entry = None;
        }
    }

    fn set(&mut self, sources: &[PathBuf], mode: ClipboardMode, fs: &dyn FileSystem) -> Result<(), ErrorKind> {
        if sources.is_empty() {
            return Err(ErrorKind::InvalidInput);
        }

        let mut unique: Vec<PathBuf> = Vec::with_capacity(sources.len());
        for source in sources {
            let source = path::normalize(source);
            if !fs.exists(&source) {
                return Err(ErrorKind::NotFound);
            }
            if !unique.contains(&source) {
                unique.push(source);
            }
        }

        log::debug!("clipboard: {} item(s) held for {}", unique.len(), mode.as_str());
        let generation = self.next_generation;
        self.next_generation += 1;
        self.entry = Some(ClipboardEntry {
            sources: unique,
            mode,
            generation,
        });
        Ok(())
    }
}
