//! Shared test fixtures
//!
//! `FaultyFs` wraps the real filesystem and injects failures on demand, so
//! permission errors, cross-device moves and stuck sources can be reproduced
//! even when the tests run as root on a single volume.

#![allow(dead_code)]

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use tanzfm::fs::{EntryInfo, FileSystem, RealFileSystem};

#[derive(Default)]
pub struct FaultyFs {
    inner: RealFileSystem,
    /// Sources whose copy fails with PermissionDenied
    unreadable: Mutex<HashSet<PathBuf>>,
    /// Paths whose removal fails with PermissionDenied
    unremovable: Mutex<HashSet<PathBuf>>,
    /// Every rename reports a cross-device error
    cross_device: AtomicBool,
    /// Contents dropped at the rename destination just before renaming
    squatter: Mutex<Option<Vec<u8>>>,
    /// Sleep before each chunk callback
    chunk_delay: Option<Duration>,
    /// Stand-in for the platform trash
    trash_dir: Option<PathBuf>,
}

impl FaultyFs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_trash(trash_dir: &Path) -> Self {
        Self {
            trash_dir: Some(trash_dir.to_path_buf()),
            ..Self::default()
        }
    }

    pub fn with_chunk_delay(delay: Duration) -> Self {
        Self {
            chunk_delay: Some(delay),
            ..Self::default()
        }
    }

    pub fn deny_read(&self, path: &Path) {
        self.unreadable.lock().unwrap().insert(path.to_path_buf());
    }

    pub fn deny_remove(&self, path: &Path) {
        self.unremovable.lock().unwrap().insert(path.to_path_buf());
    }

    pub fn force_cross_device(&self) {
        self.cross_device.store(true, Ordering::Relaxed);
    }

    /// Have another writer create the destination between the engine's
    /// existence check and the rename itself
    pub fn squat_on_rename(&self, contents: &[u8]) {
        *self.squatter.lock().unwrap() = Some(contents.to_vec());
    }
}

fn denied() -> io::Error {
    io::Error::new(io::ErrorKind::PermissionDenied, "injected")
}

impl FileSystem for FaultyFs {
    fn exists(&self, path: &Path) -> bool {
        self.inner.exists(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.inner.is_dir(path)
    }

    fn list_entries(&self, path: &Path) -> io::Result<Vec<EntryInfo>> {
        // Sorted so partial-copy assertions are deterministic
        let mut entries = self.inner.list_entries(path)?;
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }

    fn create_dir(&self, path: &Path) -> io::Result<()> {
        self.inner.create_dir(path)
    }

    fn rename(&self, src: &Path, dst: &Path) -> io::Result<()> {
        if self.cross_device.load(Ordering::Relaxed) {
            return Err(io::Error::new(io::ErrorKind::CrossesDevices, "injected"));
        }
        if let Some(contents) = self.squatter.lock().unwrap().as_deref() {
            fs::write(dst, contents)?;
        }
        self.inner.rename(src, dst)
    }

    fn copy_file(
        &self,
        src: &Path,
        dst: &Path,
        chunk_size: usize,
        on_chunk: &mut dyn FnMut(u64) -> bool,
    ) -> io::Result<u64> {
        if self.unreadable.lock().unwrap().contains(src) {
            return Err(denied());
        }
        let delay = self.chunk_delay;
        self.inner.copy_file(src, dst, chunk_size, &mut |n| {
            if let Some(delay) = delay {
                std::thread::sleep(delay);
            }
            on_chunk(n)
        })
    }

    fn compress(
        &self,
        src: &Path,
        archive: &Path,
        chunk_size: usize,
        on_chunk: &mut dyn FnMut(u64) -> bool,
    ) -> io::Result<u64> {
        if self.unreadable.lock().unwrap().contains(src) {
            return Err(denied());
        }
        let delay = self.chunk_delay;
        self.inner.compress(src, archive, chunk_size, &mut |n| {
            if let Some(delay) = delay {
                std::thread::sleep(delay);
            }
            on_chunk(n)
        })
    }

    fn remove(&self, path: &Path) -> io::Result<()> {
        if self.unremovable.lock().unwrap().contains(path) {
            return Err(denied());
        }
        self.inner.remove(path)
    }

    fn delete_to_trash(&self, path: &Path) -> io::Result<()> {
        let Some(trash) = &self.trash_dir else {
            return Err(io::Error::other("no trash configured"));
        };
        fs::symlink_metadata(path)?;
        let name = path.file_name().ok_or_else(|| io::Error::from(io::ErrorKind::InvalidInput))?;
        fs::rename(path, trash.join(name))
    }

    fn free_space(&self, path: &Path) -> io::Result<u64> {
        self.inner.free_space(path)
    }
}

/// Write `contents` to `dir/name`, creating parents, and return the path
pub fn write_file(dir: &Path, name: &str, contents: &[u8]) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, contents).unwrap();
    path
}

/// Create `dir/name` (and parents) and return the path
pub fn make_dir(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    fs::create_dir_all(&path).unwrap();
    path
}
