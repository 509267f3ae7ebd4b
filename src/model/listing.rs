//! Directory listing
//!
//! Visible entries of the current location after the hidden-file filter and
//! sort have been applied, plus the cursor and the select-all flag.

use std::path::{Path, PathBuf};

use crate::fs::{EntryInfo, FileSystem};
use crate::logic::errors::{classify_io_error, ErrorKind};
use crate::logic::sorting::sort_entries;
use crate::SortMode;

#[derive(Debug, Clone)]
pub struct ListingModel {
    /// Filtered and sorted entries
    pub entries: Vec<EntryInfo>,

    /// Cursor position within `entries`
    pub selected_index: Option<usize>,

    /// Every visible entry is selected (cleared by cursor movement)
    pub all_selected: bool,

    pub show_hidden: bool,
    pub sort_mode: SortMode,
    pub sort_reverse: bool,

    /// Unfiltered entries from the last read, so toggles don't hit the disk
    raw: Vec<EntryInfo>,
}

impl ListingModel {
    pub fn new(show_hidden: bool, sort_mode: SortMode) -> Self {
        Self {
            entries: Vec::new(),
            selected_index: None,
            all_selected: false,
            show_hidden,
            sort_mode,
            sort_reverse: false,
            raw: Vec::new(),
        }
    }

    /// Re-read `dir`, keeping the cursor on the same name when possible
    pub fn refresh(&mut self, dir: &Path, fs: &dyn FileSystem) -> Result<(), ErrorKind> {
        let raw = fs.list_entries(dir).map_err(|e| classify_io_error(&e))?;
        let keep = self.selected_entry().map(|e| e.name.clone());
        self.raw = raw;
        self.all_selected = false;
        self.rebuild(keep.as_deref());
        Ok(())
    }

    /// Load `dir` fresh, cursor on the first entry
    pub fn load(&mut self, dir: &Path, fs: &dyn FileSystem) -> Result<(), ErrorKind> {
        self.selected_index = None;
        self.refresh(dir, fs)?;
        self.selected_index = if self.entries.is_empty() { None } else { Some(0) };
        Ok(())
    }

    pub fn toggle_hidden(&mut self) {
        self.show_hidden = !self.show_hidden;
        let keep = self.selected_entry().map(|e| e.name.clone());
        self.rebuild(keep.as_deref());
    }

    pub fn cycle_sort(&mut self) {
        self.sort_mode = self.sort_mode.next();
        let keep = self.selected_entry().map(|e| e.name.clone());
        self.rebuild(keep.as_deref());
    }

    pub fn toggle_reverse(&mut self) {
        self.sort_reverse = !self.sort_reverse;
        let keep = self.selected_entry().map(|e| e.name.clone());
        self.rebuild(keep.as_deref());
    }

    pub fn selected_entry(&self) -> Option<&EntryInfo> {
        self.selected_index.and_then(|idx| self.entries.get(idx))
    }

    pub fn select_next(&mut self) {
        self.all_selected = false;
        if self.entries.is_empty() {
            return;
        }
        let next = match self.selected_index {
            Some(idx) if idx + 1 < self.entries.len() => idx + 1,
            Some(idx) => idx,
            None => 0,
        };
        self.selected_index = Some(next);
    }

    pub fn select_previous(&mut self) {
        self.all_selected = false;
        if self.entries.is_empty() {
            return;
        }
        let prev = self.selected_index.map(|idx| idx.saturating_sub(1)).unwrap_or(0);
        self.selected_index = Some(prev);
    }

    pub fn select_first(&mut self) {
        self.all_selected = false;
        self.selected_index = if self.entries.is_empty() { None } else { Some(0) };
    }

    pub fn select_last(&mut self) {
        self.all_selected = false;
        self.selected_index = self.entries.len().checked_sub(1);
    }

    pub fn select_all(&mut self) {
        self.all_selected = !self.entries.is_empty();
    }

    /// Paths the next copy/cut/trash applies to
    pub fn selected_paths(&self, dir: &Path) -> Vec<PathBuf> {
        if self.all_selected {
            self.entries.iter().map(|e| dir.join(&e.file_name)).collect()
        } else {
            self.selected_entry().map(|e| vec![dir.join(&e.file_name)]).unwrap_or_default()
        }
    }

    /// Move the cursor to `name` if it is visible
    pub fn select_name(&mut self, name: &str) -> bool {
        match self.entries.iter().position(|e| e.name == name) {
            Some(idx) => {
                self.selected_index = Some(idx);
                self.all_selected = false;
                true
            }
            None => false,
        }
    }

    fn rebuild(&mut self, keep: Option<&str>) {
        let mut entries: Vec<EntryInfo> = self
            .raw
            .iter()
            .filter(|e| self.show_hidden || !e.is_hidden())
            .cloned()
            .collect();
        sort_entries(&mut entries, self.sort_mode, self.sort_reverse);
        self.entries = entries;

        let by_name = keep.and_then(|name| self.entries.iter().position(|e| e.name == name));
        self.selected_index = match (by_name, self.selected_index) {
            (Some(idx), _) => Some(idx),
            (None, _) if self.entries.is_empty() => None,
            (None, Some(idx)) => Some(idx.min(self.entries.len() - 1)),
            (None, None) => Some(0),
        };
    }
}
