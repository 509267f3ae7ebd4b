//! File operation orchestration methods
//!
//! Clipboard, paste, trash, new directory and rename. Copy/move/trash run on
//! the transfer worker; create and rename are quick and run inline.

use tanzfm::logic::errors::{describe, ErrorKind};
use tanzfm::model::ui::{PromptKind, PromptState};
use tanzfm::model::{ActiveTransfer, ClipboardEntry, ClipboardMode};
use tanzfm::services::{TransferItem, TransferJob, TransferRequest};

use crate::App;

impl App {
    /// Put the selection on the clipboard in `mode`
    pub(crate) fn clip_selection(&mut self, mode: ClipboardMode) {
        let sources = self.model.listing.selected_paths(self.model.history.current());
        if sources.is_empty() {
            return;
        }

        let result = match mode {
            ClipboardMode::Copy => self.model.clipboard.set_copy(&sources, &*self.fs),
            ClipboardMode::Cut => self.model.clipboard.set_cut(&sources, &*self.fs),
        };

        let verb = match mode {
            ClipboardMode::Copy => "Copied",
            ClipboardMode::Cut => "Cut",
        };
        let message = match result {
            Ok(()) => format!("{} {} item(s) to clipboard", verb, sources.len()),
            Err(kind) => format!("Error: {}", describe(kind)),
        };
        self.model.show_toast(message);
    }

    /// Paste the clipboard into the current location in the background
    pub(crate) fn paste(&mut self) {
        if self.model.is_busy() {
            self.model.show_toast("Error: a transfer is already running".to_string());
            return;
        }
        let Some(entry) = self.model.clipboard.peek().cloned() else {
            self.model.show_toast("Clipboard is empty".to_string());
            return;
        };

        let job = TransferJob::paste(&entry, self.model.history.current(), &*self.fs);
        self.start_transfer(job, Some(entry));
    }

    /// Ask for confirmation before trashing the selection
    pub(crate) fn request_trash(&mut self) {
        if self.model.is_busy() {
            self.model.show_toast("Error: a transfer is already running".to_string());
            return;
        }
        let paths = self.model.listing.selected_paths(self.model.history.current());
        if !paths.is_empty() {
            self.model.ui.confirm_trash = Some(paths);
        }
    }

    pub(crate) fn confirm_trash(&mut self) {
        let Some(paths) = self.model.ui.confirm_trash.take() else {
            return;
        };
        let items = paths.iter().map(|p| TransferItem::from_path(&*self.fs, p)).collect();
        self.start_transfer(TransferJob::trash(items), None);
    }

    /// Zip the selection into archives next to it, in the background
    pub(crate) fn compress_selection(&mut self) {
        if self.model.is_busy() {
            self.model.show_toast("Error: a transfer is already running".to_string());
            return;
        }
        let paths = self.model.listing.selected_paths(self.model.history.current());
        if paths.is_empty() {
            return;
        }
        let items = paths.iter().map(|p| TransferItem::from_path(&*self.fs, p)).collect();
        self.start_transfer(TransferJob::compress(items), None);
    }

    fn start_transfer(&mut self, job: TransferJob, pasted: Option<ClipboardEntry>) {
        let id = self.next_transfer_id;
        self.next_transfer_id += 1;

        let kind = job.kind;
        if self.transfer_tx.send(TransferRequest::Start { id, job }).is_err() {
            log::error!("transfer service is gone");
            self.model.show_toast("Error: transfer service unavailable".to_string());
            return;
        }

        self.model.active_transfer = Some(ActiveTransfer {
            id,
            kind,
            pasted,
            progress: None,
        });
    }

    pub(crate) fn cancel_transfer(&mut self) {
        if let Some(active) = &self.model.active_transfer {
            let _ = self.transfer_tx.send(TransferRequest::Cancel { id: active.id });
            self.model.show_toast("Cancelling...".to_string());
        }
    }

    pub(crate) fn begin_new_directory(&mut self) {
        self.model.ui.prompt = Some(PromptState::new(PromptKind::NewDirectory, ""));
    }

    pub(crate) fn begin_rename(&mut self) {
        if self.model.is_busy() {
            self.model.show_toast("Error: a transfer is already running".to_string());
            return;
        }
        let Some(entry) = self.model.listing.selected_entry() else {
            return;
        };
        let target = self.model.history.current().join(&entry.file_name);
        let name = entry.name.clone();
        self.model.ui.prompt = Some(PromptState::new(PromptKind::Rename { target }, &name));
    }

    /// Apply the prompt; collisions and bad names re-open it with the error
    pub(crate) fn submit_prompt(&mut self) {
        let Some(mut prompt) = self.model.ui.prompt.take() else {
            return;
        };
        let name = prompt.input.trim().to_string();

        let result = match &prompt.kind {
            PromptKind::NewDirectory => self.engine.create_directory(self.model.history.current(), &name),
            PromptKind::Rename { target } => self.engine.rename(target, &name),
        };

        match result {
            Ok(_) => {
                self.reload_listing(false);
                self.model.listing.select_name(&name);
            }
            Err(kind @ (ErrorKind::AlreadyExists | ErrorKind::InvalidInput)) => {
                prompt.error = Some(describe(kind).to_string());
                self.model.ui.prompt = Some(prompt);
            }
            Err(kind) => {
                self.model.show_toast(format!("Error: {}", describe(kind)));
                self.reload_listing(false);
            }
        }
    }
}
