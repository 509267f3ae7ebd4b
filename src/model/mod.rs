//! Application Model
//!
//! State for one browsing session, split into focused sub-models:
//!
//! - **NavigationHistory**: current location, back/forward stacks
//! - **ClipboardController**: pending copy/cut source set
//! - **ListingModel**: entries of the current location, cursor, filters
//! - **Bookmarks**: session-only shortcuts
//! - **UiModel**: prompts, dialogs, toasts
//!
//! The model holds no threads or channels; the transfer worker lives in the
//! binary and reports back through `TransferResponse`s.

pub mod clipboard;
pub mod history;
pub mod listing;
pub mod places;
pub mod ui;

use std::path::Path;
use std::sync::Arc;

pub use clipboard::{ClipboardController, ClipboardEntry, ClipboardMode};
pub use history::{DuplicatePolicy, HistoryStep, NavigationHistory};
pub use listing::ListingModel;
pub use places::{Bookmarks, Place};
pub use ui::UiModel;

use crate::config::Config;
use crate::fs::FileSystem;
use crate::logic::errors::ErrorKind;
use crate::services::transfer::{TransferKind, TransferProgress};

/// A background transfer the front-end is waiting on
#[derive(Clone, Debug)]
pub struct ActiveTransfer {
    pub id: u64,
    pub kind: TransferKind,
    /// Clipboard entry to settle when the job finishes (pastes only)
    pub pasted: Option<ClipboardEntry>,
    pub progress: Option<TransferProgress>,
}

/// Root application model composed of focused sub-models
#[derive(Clone, Debug)]
pub struct Model {
    pub history: NavigationHistory,
    pub clipboard: ClipboardController,
    pub listing: ListingModel,
    pub bookmarks: Bookmarks,
    pub ui: UiModel,

    /// At most one transfer runs at a time
    pub active_transfer: Option<ActiveTransfer>,

    /// Free bytes on the volume of the current location, if known
    pub free_space: Option<u64>,
}

impl Model {
    /// Start a session at `start`
    pub fn new(start: &Path, fs: Arc<dyn FileSystem>, config: &Config) -> Result<Self, ErrorKind> {
        let history = NavigationHistory::new(start, fs, config.history_duplicates)?;
        Ok(Self {
            history,
            clipboard: ClipboardController::new(),
            listing: ListingModel::new(config.show_hidden, config.sort_mode),
            bookmarks: Bookmarks::new(&config.bookmarks),
            ui: UiModel::new(config.vim_mode),
            active_transfer: None,
            free_space: None,
        })
    }

    pub fn is_busy(&self) -> bool {
        self.active_transfer.is_some()
    }

    pub fn has_modal(&self) -> bool {
        self.ui.has_modal()
    }

    pub fn show_toast(&mut self, message: String) {
        self.ui.show_toast(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::RealFileSystem;
    use tempfile::TempDir;

    #[test]
    fn test_model_from_config() {
        let tmp = TempDir::new().unwrap();
        let config = Config {
            show_hidden: true,
            vim_mode: true,
            bookmarks: vec![tmp.path().to_path_buf()],
            ..Config::default()
        };

        let model = Model::new(tmp.path(), Arc::new(RealFileSystem), &config).unwrap();
        assert_eq!(model.history.current(), tmp.path());
        assert!(model.listing.show_hidden);
        assert!(model.ui.vim_mode);
        assert!(model.bookmarks.contains(tmp.path()));
        assert!(model.clipboard.is_empty());
        assert!(!model.is_busy());
    }

    #[test]
    fn test_model_rejects_missing_start() {
        let tmp = TempDir::new().unwrap();
        let result = Model::new(&tmp.path().join("missing"), Arc::new(RealFileSystem), &Config::default());
        assert_eq!(result.err(), Some(ErrorKind::NotFound));
    }
}
