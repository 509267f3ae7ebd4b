//! Transfer engine
//!
//! Copy, move, trash and zip compression over the `FileSystem` trait. Every top-level item
//! yields exactly one `TransferOutcome`; one failing item never aborts the
//! rest of the batch. Copy and move resolve name collisions with
//! `"(copy n)"` suffixes (compression does the same for its `.zip`), while `create_directory` and `rename` refuse
//! collisions so the caller can re-prompt.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::config::Config;
use crate::fs::FileSystem;
use crate::logic::collision::{resolve_collision, DEFAULT_MAX_ATTEMPTS};
use crate::logic::errors::{classify_io_error, is_cross_device, ErrorKind};
use crate::logic::path;
use crate::model::{ClipboardEntry, ClipboardMode, Model};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    File,
    Directory,
}

/// A top-level source handed to the engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferItem {
    pub source: PathBuf,
    pub kind: ItemKind,
}

impl TransferItem {
    /// Inspect `path` to decide its kind (missing paths count as files)
    pub fn from_path(fs: &dyn FileSystem, path: &Path) -> Self {
        let kind = if fs.is_dir(path) {
            ItemKind::Directory
        } else {
            ItemKind::File
        };
        Self {
            source: path::normalize(path),
            kind,
        }
    }

    fn is_dir(&self) -> bool {
        self.kind == ItemKind::Directory
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferStatus {
    Succeeded,
    Failed(ErrorKind),
}

/// Result for one top-level item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferOutcome {
    pub source: PathBuf,
    /// Name the item ended up with (after collision resolution)
    pub final_name: String,
    /// Full destination path; `None` for failures and trash
    pub destination: Option<PathBuf>,
    pub status: TransferStatus,
    /// Secondary problem on an otherwise successful item (`SourceNotRemoved`)
    pub warning: Option<ErrorKind>,
}

impl TransferOutcome {
    pub fn succeeded(&self) -> bool {
        self.status == TransferStatus::Succeeded
    }

    pub fn error(&self) -> Option<ErrorKind> {
        match self.status {
            TransferStatus::Failed(kind) => Some(kind),
            TransferStatus::Succeeded => None,
        }
    }

    fn success(source: &Path, final_name: String, destination: Option<PathBuf>) -> Self {
        Self {
            source: source.to_path_buf(),
            final_name,
            destination,
            status: TransferStatus::Succeeded,
            warning: None,
        }
    }

    fn failure(source: &Path, kind: ErrorKind) -> Self {
        Self {
            source: source.to_path_buf(),
            final_name: path::file_name(source).unwrap_or_default(),
            destination: None,
            status: TransferStatus::Failed(kind),
            warning: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransferOptions {
    /// Bound on "(copy n)" candidates per item
    pub max_collision_attempts: u32,
    /// Bytes per read/write; cancellation is checked between chunks
    pub chunk_size: usize,
}

impl Default for TransferOptions {
    fn default() -> Self {
        Self {
            max_collision_attempts: DEFAULT_MAX_ATTEMPTS,
            chunk_size: 1024 * 1024,
        }
    }
}

impl TransferOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            max_collision_attempts: config.max_collision_attempts,
            chunk_size: config.chunk_size(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferKind {
    Copy,
    Move,
    Trash,
    /// Zip each item into `<name>.zip` beside it
    Compress,
}

impl TransferKind {
    /// Past-tense verb for status messages
    pub fn past_tense(&self) -> &'static str {
        match self {
            TransferKind::Copy => "Copied",
            TransferKind::Move => "Moved",
            TransferKind::Trash => "Trashed",
            TransferKind::Compress => "Compressed",
        }
    }

    /// Progressive verb for the status bar
    pub fn progressive(&self) -> &'static str {
        match self {
            TransferKind::Copy => "Copying",
            TransferKind::Move => "Moving",
            TransferKind::Trash => "Trashing",
            TransferKind::Compress => "Compressing",
        }
    }
}

/// A batch of items and what to do with them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferJob {
    pub kind: TransferKind,
    pub items: Vec<TransferItem>,
    /// Destination directory; unused for trash and compress
    pub dest_dir: PathBuf,
}

impl TransferJob {
    pub fn copy(items: Vec<TransferItem>, dest_dir: &Path) -> Self {
        Self {
            kind: TransferKind::Copy,
            items,
            dest_dir: path::normalize(dest_dir),
        }
    }

    pub fn move_items(items: Vec<TransferItem>, dest_dir: &Path) -> Self {
        Self {
            kind: TransferKind::Move,
            items,
            dest_dir: path::normalize(dest_dir),
        }
    }

    pub fn trash(items: Vec<TransferItem>) -> Self {
        Self {
            kind: TransferKind::Trash,
            items,
            dest_dir: PathBuf::new(),
        }
    }

    pub fn compress(items: Vec<TransferItem>) -> Self {
        Self {
            kind: TransferKind::Compress,
            items,
            dest_dir: PathBuf::new(),
        }
    }

    /// Paste job for a clipboard entry into `dest_dir`
    pub fn paste(entry: &ClipboardEntry, dest_dir: &Path, fs: &dyn FileSystem) -> Self {
        let items = entry
            .sources()
            .iter()
            .map(|s| TransferItem::from_path(fs, s))
            .collect();
        match entry.mode() {
            ClipboardMode::Copy => Self::copy(items, dest_dir),
            ClipboardMode::Cut => Self::move_items(items, dest_dir),
        }
    }
}

/// Shared cancellation flag
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Snapshot reported while a job runs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferProgress {
    /// Zero-based index of the top-level item in progress
    pub item_index: usize,
    pub item_count: usize,
    /// Top-level source being processed
    pub current: PathBuf,
    /// Bytes copied so far for the current item
    pub bytes_copied: u64,
}

/// Per-item bookkeeping threaded through the recursive copy
struct Tracker<'a> {
    cancel: &'a CancelToken,
    report: &'a mut dyn FnMut(&TransferProgress),
    progress: TransferProgress,
}

impl Tracker<'_> {
    /// Report `n` bytes past `base` for the current item; `false` means stop
    fn on_chunk(&mut self, base: u64, n: u64) -> bool {
        self.progress.bytes_copied = base + n;
        (self.report)(&self.progress);
        !self.cancel.is_cancelled()
    }

    fn check_cancelled(&self) -> Result<(), ErrorKind> {
        if self.cancel.is_cancelled() {
            Err(ErrorKind::Cancelled)
        } else {
            Ok(())
        }
    }
}

/// Executes transfers against a `FileSystem`
#[derive(Clone)]
pub struct TransferEngine {
    fs: Arc<dyn FileSystem>,
    options: TransferOptions,
}

impl TransferEngine {
    pub fn new(fs: Arc<dyn FileSystem>, options: TransferOptions) -> Self {
        Self { fs, options }
    }

    pub fn fs(&self) -> &dyn FileSystem {
        &*self.fs
    }

    pub fn options(&self) -> TransferOptions {
        self.options
    }

    /// Copy `items` into `dest_dir`
    pub fn copy(&self, items: &[TransferItem], dest_dir: &Path) -> Vec<TransferOutcome> {
        let job = TransferJob::copy(items.to_vec(), dest_dir);
        self.execute(&job, &CancelToken::new(), &mut |_| {})
    }

    /// Move `items` into `dest_dir`
    pub fn move_items(&self, items: &[TransferItem], dest_dir: &Path) -> Vec<TransferOutcome> {
        let job = TransferJob::move_items(items.to_vec(), dest_dir);
        self.execute(&job, &CancelToken::new(), &mut |_| {})
    }

    /// Send `items` to the platform trash
    pub fn move_to_trash(&self, items: &[TransferItem]) -> Vec<TransferOutcome> {
        let job = TransferJob::trash(items.to_vec());
        self.execute(&job, &CancelToken::new(), &mut |_| {})
    }

    /// Zip each of `items` into an archive next to it
    pub fn compress(&self, items: &[TransferItem]) -> Vec<TransferOutcome> {
        let job = TransferJob::compress(items.to_vec());
        self.execute(&job, &CancelToken::new(), &mut |_| {})
    }

    /// Run `job`, checking `cancel` between items and between file chunks
    ///
    /// Items finished before cancellation keep their outcome; the item in
    /// flight and every item after it report `Failed(Cancelled)`.
    pub fn execute(
        &self,
        job: &TransferJob,
        cancel: &CancelToken,
        on_progress: &mut dyn FnMut(&TransferProgress),
    ) -> Vec<TransferOutcome> {
        let item_count = job.items.len();
        log::debug!(
            "{} {} item(s) to {}",
            job.kind.progressive(),
            item_count,
            job.dest_dir.display()
        );

        let mut outcomes = Vec::with_capacity(item_count);
        for (item_index, item) in job.items.iter().enumerate() {
            if cancel.is_cancelled() {
                outcomes.push(TransferOutcome::failure(&item.source, ErrorKind::Cancelled));
                continue;
            }

            let mut tracker = Tracker {
                cancel,
                report: &mut *on_progress,
                progress: TransferProgress {
                    item_index,
                    item_count,
                    current: item.source.clone(),
                    bytes_copied: 0,
                },
            };
            (tracker.report)(&tracker.progress);

            let outcome = match job.kind {
                TransferKind::Copy => self.copy_item(item, &job.dest_dir, &mut tracker),
                TransferKind::Move => self.move_item(item, &job.dest_dir, &mut tracker),
                TransferKind::Trash => self.trash_item(item),
                TransferKind::Compress => self.compress_item(item, &mut tracker),
            };

            match (&outcome.status, outcome.warning) {
                (TransferStatus::Failed(kind), _) => {
                    log::warn!("{}: {}", item.source.display(), kind)
                }
                (TransferStatus::Succeeded, Some(warning)) => {
                    log::warn!("{}: {}", item.source.display(), warning)
                }
                (TransferStatus::Succeeded, None) => {}
            }
            outcomes.push(outcome);
        }
        outcomes
    }

    /// Create `name` inside `dest_dir`; never auto-renames
    pub fn create_directory(&self, dest_dir: &Path, name: &str) -> Result<PathBuf, ErrorKind> {
        path::validate_name(name)?;
        if !self.fs.is_dir(dest_dir) {
            return Err(ErrorKind::NotFound);
        }
        let target = path::normalize(&dest_dir.join(name));
        if self.fs.exists(&target) {
            return Err(ErrorKind::AlreadyExists);
        }
        self.fs.create_dir(&target).map_err(|e| classify_io_error(&e))?;
        log::debug!("created directory {}", target.display());
        Ok(target)
    }

    /// Rename `item` within its parent; never auto-renames
    pub fn rename(&self, item: &Path, new_name: &str) -> Result<PathBuf, ErrorKind> {
        path::validate_name(new_name)?;
        let source = path::normalize(item);
        if !self.fs.exists(&source) {
            return Err(ErrorKind::NotFound);
        }
        let parent = path::parent(&source).ok_or(ErrorKind::InvalidInput)?;
        let target = parent.join(new_name);
        if target == source {
            return Ok(target);
        }
        if self.fs.exists(&target) {
            return Err(ErrorKind::AlreadyExists);
        }
        self.fs.rename(&source, &target).map_err(|e| classify_io_error(&e))?;
        log::debug!("renamed {} -> {}", source.display(), target.display());
        Ok(target)
    }

    fn copy_item(&self, item: &TransferItem, dest_dir: &Path, tracker: &mut Tracker<'_>) -> TransferOutcome {
        let (name, dest) = match self.prepare(item, dest_dir) {
            Ok(resolved) => resolved,
            Err(kind) => return TransferOutcome::failure(&item.source, kind),
        };

        match self.copy_entry(&item.source, &dest, item.is_dir(), tracker) {
            Ok(()) => TransferOutcome::success(&item.source, name, Some(dest)),
            Err(kind) => TransferOutcome::failure(&item.source, kind),
        }
    }

    fn move_item(&self, item: &TransferItem, dest_dir: &Path, tracker: &mut Tracker<'_>) -> TransferOutcome {
        // Already there: nothing to do, and no self-collision rename
        if path::parent(&item.source).as_deref() == Some(dest_dir) && self.fs.exists(&item.source) {
            let name = path::file_name(&item.source).unwrap_or_default();
            return TransferOutcome::success(&item.source, name, Some(item.source.clone()));
        }

        let (name, dest) = match self.prepare(item, dest_dir) {
            Ok(resolved) => resolved,
            Err(kind) => return TransferOutcome::failure(&item.source, kind),
        };

        match self.fs.rename(&item.source, &dest) {
            Ok(()) => return TransferOutcome::success(&item.source, name, Some(dest)),
            Err(e) if is_cross_device(&e) => {
                log::debug!("{}: cross-device, copying instead", item.source.display());
            }
            Err(e) => return TransferOutcome::failure(&item.source, classify_io_error(&e)),
        }

        // Source stays untouched unless the copy completes
        if let Err(kind) = self.copy_entry(&item.source, &dest, item.is_dir(), tracker) {
            return TransferOutcome::failure(&item.source, kind);
        }

        let mut outcome = TransferOutcome::success(&item.source, name, Some(dest));
        if let Err(e) = self.fs.remove(&item.source) {
            log::debug!("{}: could not remove source: {}", item.source.display(), e);
            outcome.warning = Some(ErrorKind::SourceNotRemoved);
        }
        outcome
    }

    fn trash_item(&self, item: &TransferItem) -> TransferOutcome {
        match self.fs.delete_to_trash(&item.source) {
            Ok(()) => {
                let name = path::file_name(&item.source).unwrap_or_default();
                TransferOutcome::success(&item.source, name, None)
            }
            Err(e) => TransferOutcome::failure(&item.source, classify_io_error(&e)),
        }
    }

    fn compress_item(&self, item: &TransferItem, tracker: &mut Tracker<'_>) -> TransferOutcome {
        let resolved = path::parent(&item.source)
            .ok_or(ErrorKind::InvalidInput)
            .and_then(|parent| self.archive_destination(item, &parent));
        let (name, dest) = match resolved {
            Ok(resolved) => resolved,
            Err(kind) => return TransferOutcome::failure(&item.source, kind),
        };

        let result = self
            .fs
            .compress(&item.source, &dest, self.options.chunk_size, &mut |n| tracker.on_chunk(0, n));
        match result {
            Ok(_) => {
                log::debug!("compressed {} -> {}", item.source.display(), dest.display());
                TransferOutcome::success(&item.source, name, Some(dest))
            }
            Err(e) => TransferOutcome::failure(&item.source, classify_io_error(&e)),
        }
    }

    /// Pick `<name>.zip` (or its first free "(copy n)" variant) inside `parent`
    fn archive_destination(&self, item: &TransferItem, parent: &Path) -> Result<(String, PathBuf), ErrorKind> {
        let name = path::file_name(&item.source).ok_or(ErrorKind::InvalidInput)?;
        if !self.fs.exists(&item.source) {
            return Err(ErrorKind::NotFound);
        }
        let final_name = resolve_collision(
            parent,
            &format!("{}.zip", name),
            false,
            self.options.max_collision_attempts,
            |p| self.fs.exists(p),
        )?;
        let dest = parent.join(&final_name);
        Ok((final_name, dest))
    }

    /// Validate a copy/move and pick the destination name
    fn prepare(&self, item: &TransferItem, dest_dir: &Path) -> Result<(String, PathBuf), ErrorKind> {
        let raw_name = item.source.file_name().ok_or(ErrorKind::InvalidInput)?;
        let name = raw_name.to_string_lossy().into_owned();
        if !self.fs.exists(&item.source) || !self.fs.is_dir(dest_dir) {
            return Err(ErrorKind::NotFound);
        }
        if item.is_dir() && path::is_within(dest_dir, &item.source) {
            return Err(ErrorKind::InvalidInput);
        }

        // Keep the on-disk name when it is free; it may not be valid UTF-8
        let direct = dest_dir.join(raw_name);
        if !self.fs.exists(&direct) {
            return Ok((name, direct));
        }

        let final_name = resolve_collision(
            dest_dir,
            &name,
            item.is_dir(),
            self.options.max_collision_attempts,
            |p| self.fs.exists(p),
        )?;
        let dest = dest_dir.join(&final_name);
        Ok((final_name, dest))
    }

    /// Copy a file or tree; directories are created before their children
    fn copy_entry(&self, src: &Path, dst: &Path, is_dir: bool, tracker: &mut Tracker<'_>) -> Result<(), ErrorKind> {
        if !is_dir {
            return self.copy_file(src, dst, tracker);
        }

        tracker.check_cancelled()?;
        self.fs.create_dir(dst).map_err(|e| classify_io_error(&e))?;
        let children = self.fs.list_entries(src).map_err(|e| classify_io_error(&e))?;
        for child in children {
            tracker.check_cancelled()?;
            self.copy_entry(&src.join(&child.file_name), &dst.join(&child.file_name), child.is_dir, tracker)?;
        }
        Ok(())
    }

    fn copy_file(&self, src: &Path, dst: &Path, tracker: &mut Tracker<'_>) -> Result<(), ErrorKind> {
        let base = tracker.progress.bytes_copied;
        let copied = self
            .fs
            .copy_file(src, dst, self.options.chunk_size, &mut |n| tracker.on_chunk(base, n))
            .map_err(|e| classify_io_error(&e))?;

        tracker.progress.bytes_copied = base + copied;
        Ok(())
    }
}

/// Paste the clipboard into the current location, blocking until done
///
/// Returns `None` when the clipboard is empty.
pub fn paste(model: &mut Model, engine: &TransferEngine) -> Option<Vec<TransferOutcome>> {
    let entry = model.clipboard.peek()?.clone();
    let job = TransferJob::paste(&entry, model.history.current(), engine.fs());
    let outcomes = engine.execute(&job, &CancelToken::new(), &mut |_| {});
    model.clipboard.complete_paste(&entry, &outcomes);
    Some(outcomes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::RealFileSystem;
    use std::fs;
    use tempfile::TempDir;

    fn engine() -> TransferEngine {
        TransferEngine::new(Arc::new(RealFileSystem), TransferOptions::default())
    }

    fn item(path: &Path) -> TransferItem {
        TransferItem::from_path(&RealFileSystem, path)
    }

    #[test]
    fn test_item_kind_detection() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("f"), b"x").unwrap();
        assert_eq!(item(&tmp.path().join("f")).kind, ItemKind::File);
        assert_eq!(item(tmp.path()).kind, ItemKind::Directory);
    }

    #[test]
    fn test_copy_into_same_dir_gets_suffix() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("a.txt");
        fs::write(&src, b"data").unwrap();

        let outcomes = engine().copy(&[item(&src)], tmp.path());
        assert_eq!(outcomes.len(), 1);
        assert_eq!(outcomes[0].final_name, "a (copy 1).txt");
        assert_eq!(fs::read(tmp.path().join("a (copy 1).txt")).unwrap(), b"data");
    }

    #[test]
    fn test_copy_tree_is_recursive() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("src");
        fs::create_dir_all(src.join("nested/deeper")).unwrap();
        fs::write(src.join("nested/deeper/f.txt"), b"deep").unwrap();
        fs::write(src.join("top.txt"), b"top").unwrap();
        let dest = tmp.path().join("dest");
        fs::create_dir(&dest).unwrap();

        let outcomes = engine().copy(&[item(&src)], &dest);
        assert!(outcomes[0].succeeded());
        assert_eq!(fs::read(dest.join("src/nested/deeper/f.txt")).unwrap(), b"deep");
        assert_eq!(fs::read(dest.join("src/top.txt")).unwrap(), b"top");
        assert!(src.join("top.txt").exists());
    }

    #[test]
    fn test_copy_dir_into_itself_is_invalid() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("d");
        fs::create_dir_all(src.join("inner")).unwrap();

        let outcomes = engine().copy(&[item(&src)], &src.join("inner"));
        assert_eq!(outcomes[0].status, TransferStatus::Failed(ErrorKind::InvalidInput));
    }

    #[test]
    fn test_move_renames_and_removes_source() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("a.txt");
        fs::write(&src, b"x").unwrap();
        let dest = tmp.path().join("dest");
        fs::create_dir(&dest).unwrap();

        let outcomes = engine().move_items(&[item(&src)], &dest);
        assert!(outcomes[0].succeeded());
        assert_eq!(outcomes[0].destination, Some(dest.join("a.txt")));
        assert!(!src.exists());
    }

    #[test]
    fn test_move_into_own_parent_is_noop() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("a.txt");
        fs::write(&src, b"x").unwrap();

        let outcomes = engine().move_items(&[item(&src)], tmp.path());
        assert!(outcomes[0].succeeded());
        assert_eq!(outcomes[0].final_name, "a.txt");
        assert!(!tmp.path().join("a (copy 1).txt").exists());
    }

    #[test]
    fn test_missing_source_fails_only_that_item() {
        let tmp = TempDir::new().unwrap();
        let good = tmp.path().join("good");
        fs::write(&good, b"x").unwrap();
        let dest = tmp.path().join("dest");
        fs::create_dir(&dest).unwrap();
        let ghost = TransferItem {
            source: tmp.path().join("ghost"),
            kind: ItemKind::File,
        };

        let outcomes = engine().copy(&[ghost, item(&good)], &dest);
        assert_eq!(outcomes[0].status, TransferStatus::Failed(ErrorKind::NotFound));
        assert!(outcomes[1].succeeded());
    }

    #[test]
    fn test_cancelled_token_fails_everything() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("a");
        fs::write(&src, b"x").unwrap();
        let cancel = CancelToken::new();
        cancel.cancel();

        let job = TransferJob::copy(vec![item(&src), item(&src)], tmp.path());
        let outcomes = engine().execute(&job, &cancel, &mut |_| {});
        assert!(outcomes.iter().all(|o| o.error() == Some(ErrorKind::Cancelled)));
    }

    #[test]
    fn test_progress_reports_bytes() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("big.bin");
        fs::write(&src, vec![0u8; 20_000]).unwrap();
        let dest = tmp.path().join("dest");
        fs::create_dir(&dest).unwrap();
        let engine = TransferEngine::new(
            Arc::new(RealFileSystem),
            TransferOptions {
                chunk_size: 4096,
                ..TransferOptions::default()
            },
        );

        let mut last = None;
        let job = TransferJob::copy(vec![item(&src)], &dest);
        engine.execute(&job, &CancelToken::new(), &mut |p| last = Some(p.clone()));

        let last = last.unwrap();
        assert_eq!(last.item_count, 1);
        assert_eq!(last.bytes_copied, 20_000);
    }

    #[test]
    fn test_create_directory_refuses_collision() {
        let tmp = TempDir::new().unwrap();
        let engine = engine();
        let created = engine.create_directory(tmp.path(), "new").unwrap();
        assert!(created.is_dir());
        assert_eq!(engine.create_directory(tmp.path(), "new"), Err(ErrorKind::AlreadyExists));
        assert_eq!(engine.create_directory(tmp.path(), "a/b"), Err(ErrorKind::InvalidInput));
    }

    #[test]
    fn test_rename() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("a"), b"x").unwrap();
        fs::write(tmp.path().join("b"), b"y").unwrap();
        let engine = engine();

        assert_eq!(engine.rename(&tmp.path().join("a"), "b"), Err(ErrorKind::AlreadyExists));
        assert_eq!(engine.rename(&tmp.path().join("a"), "c"), Ok(tmp.path().join("c")));
        assert_eq!(engine.rename(&tmp.path().join("a"), "d"), Err(ErrorKind::NotFound));
        assert_eq!(engine.rename(&tmp.path().join("c"), ""), Err(ErrorKind::InvalidInput));
    }
}
