//! Places and bookmarks
//!
//! Well-known locations (home, media folders, trash) plus session bookmarks.
//! Bookmarks live for the session only and are never written to disk.

use std::path::{Path, PathBuf};

use crate::fs::{trash_files_dir, FileSystem};
use crate::logic::path;

/// A named shortcut to a directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Place {
    pub label: String,
    pub path: PathBuf,
}

impl Place {
    fn new(label: &str, path: PathBuf) -> Self {
        Self {
            label: label.to_string(),
            path,
        }
    }
}

/// Resolve the standard places that exist on this machine
pub fn standard_places(fs: &dyn FileSystem) -> Vec<Place> {
    let candidates = [
        ("Home", dirs::home_dir()),
        ("Desktop", dirs::desktop_dir()),
        ("Documents", dirs::document_dir()),
        ("Downloads", dirs::download_dir()),
        ("Music", dirs::audio_dir()),
        ("Pictures", dirs::picture_dir()),
        ("Videos", dirs::video_dir()),
        ("Trash", trash_files_dir()),
    ];

    let mut places: Vec<Place> = Vec::new();
    for (label, dir) in candidates {
        let Some(dir) = dir else { continue };
        // xdg falls back to $HOME for unset media dirs; list each path once
        if fs.is_dir(&dir) && !places.iter().any(|p| p.path == dir) {
            places.push(Place::new(label, dir));
        }
    }
    places
}

/// Session bookmarks, in insertion order
#[derive(Debug, Clone, Default)]
pub struct Bookmarks {
    paths: Vec<PathBuf>,
}

impl Bookmarks {
    pub fn new(seed: &[PathBuf]) -> Self {
        let mut bookmarks = Self::default();
        for p in seed {
            let p = path::normalize(p);
            if !bookmarks.contains(&p) {
                bookmarks.paths.push(p);
            }
        }
        bookmarks
    }

    /// Add `dir` if absent, remove it otherwise; returns whether it is now bookmarked
    pub fn toggle(&mut self, dir: &Path) -> bool {
        let dir = path::normalize(dir);
        if let Some(idx) = self.paths.iter().position(|p| *p == dir) {
            self.paths.remove(idx);
            false
        } else {
            self.paths.push(dir);
            true
        }
    }

    pub fn contains(&self, dir: &Path) -> bool {
        let dir = path::normalize(dir);
        self.paths.iter().any(|p| *p == dir)
    }

    pub fn list(&self) -> &[PathBuf] {
        &self.paths
    }

    /// Bookmarks as places, labelled by their last component
    pub fn as_places(&self) -> Vec<Place> {
        self.paths
            .iter()
            .map(|p| {
                let label = path::file_name(p).unwrap_or_else(|| p.display().to_string());
                Place::new(&label, p.clone())
            })
            .collect()
    }
}
