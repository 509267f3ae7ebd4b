//! Filesystem primitives
//!
//! The core only touches the disk through the `FileSystem` trait, so tests can
//! swap in a fault-injecting implementation and the presentation layer never
//! sees raw OS calls.

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use sysinfo::Disks;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// A single directory entry as reported by `list_entries`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryInfo {
    /// Name as stored on disk; join paths with this one
    pub file_name: OsString,
    /// Lossy UTF-8 rendering of `file_name` for display and sorting
    pub name: String,
    pub is_dir: bool,
    pub size: u64,
    pub modified: Option<SystemTime>,
}

impl EntryInfo {
    pub fn new(file_name: impl Into<OsString>, is_dir: bool, size: u64, modified: Option<SystemTime>) -> Self {
        let file_name = file_name.into();
        Self {
            name: file_name.to_string_lossy().into_owned(),
            file_name,
            is_dir,
            size,
            modified,
        }
    }

    pub fn is_hidden(&self) -> bool {
        self.name.starts_with('.')
    }
}

/// Filesystem operations consumed by navigation and transfers
pub trait FileSystem: Send + Sync {
    fn exists(&self, path: &Path) -> bool;

    fn is_dir(&self, path: &Path) -> bool;

    fn list_entries(&self, path: &Path) -> io::Result<Vec<EntryInfo>>;

    /// Create a single directory; the parent must exist
    fn create_dir(&self, path: &Path) -> io::Result<()>;

    /// Rename within a volume; fails with `AlreadyExists` instead of replacing `dst`
    fn rename(&self, src: &Path, dst: &Path) -> io::Result<()>;

    /// Copy one regular file in chunks
    ///
    /// `on_chunk` receives the bytes written so far before each chunk is
    /// written, and returns `false` to abort; the copy then fails with
    /// `io::ErrorKind::Interrupted`. It is called once more with the total
    /// when the copy is complete, and that return value is ignored. The
    /// destination must not exist yet.
    fn copy_file(
        &self,
        src: &Path,
        dst: &Path,
        chunk_size: usize,
        on_chunk: &mut dyn FnMut(u64) -> bool,
    ) -> io::Result<u64>;

    /// Remove a file or a whole directory tree
    fn remove(&self, path: &Path) -> io::Result<()>;

    /// Write `src` (a directory's contents, or a single file) into a new zip
    /// archive at `archive`
    ///
    /// `on_chunk` behaves as in `copy_file`, counting source bytes read. The
    /// archive must not exist yet; a failed or aborted archive is removed.
    fn compress(
        &self,
        src: &Path,
        archive: &Path,
        chunk_size: usize,
        on_chunk: &mut dyn FnMut(u64) -> bool,
    ) -> io::Result<u64>;

    /// Move a file or directory to the platform trash
    fn delete_to_trash(&self, path: &Path) -> io::Result<()>;

    /// Bytes available to the current user on the volume holding `path`
    fn free_space(&self, path: &Path) -> io::Result<u64>;
}

/// `FileSystem` backed by the real OS
#[derive(Debug, Clone, Copy, Default)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn exists(&self, path: &Path) -> bool {
        // Dangling symlinks still occupy the name
        fs::symlink_metadata(path).is_ok()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn list_entries(&self, path: &Path) -> io::Result<Vec<EntryInfo>> {
        let mut entries = Vec::new();
        for entry in fs::read_dir(path)? {
            let entry = entry?;
            // Entries can vanish between readdir and stat; skip them
            let Ok(meta) = entry.metadata() else {
                continue;
            };
            let is_dir = meta.is_dir() || (meta.file_type().is_symlink() && entry.path().is_dir());
            let size = if is_dir { 0 } else { meta.len() };
            entries.push(EntryInfo::new(entry.file_name(), is_dir, size, meta.modified().ok()));
        }
        Ok(entries)
    }

    fn create_dir(&self, path: &Path) -> io::Result<()> {
        fs::create_dir(path)
    }

    fn rename(&self, src: &Path, dst: &Path) -> io::Result<()> {
        // std has no portable no-replace rename; check as late as possible
        if fs::symlink_metadata(dst).is_ok() {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("{} already exists", dst.display()),
            ));
        }
        fs::rename(src, dst)
    }

    fn copy_file(
        &self,
        src: &Path,
        dst: &Path,
        chunk_size: usize,
        on_chunk: &mut dyn FnMut(u64) -> bool,
    ) -> io::Result<u64> {
        let mut reader = File::open(src)?;
        let meta = reader.metadata()?;
        let mut writer = File::options().write(true).create_new(true).open(dst)?;

        let mut buf = vec![0u8; chunk_size.max(4096)];
        let copied = pump(&mut reader, &mut writer, &mut buf, 0, on_chunk)?;
        writer.flush()?;
        on_chunk(copied);

        // Best effort: data is already written
        if let Ok(mtime) = meta.modified() {
            let _ = writer.set_modified(mtime);
        }
        let _ = fs::set_permissions(dst, meta.permissions());

        Ok(copied)
    }

    fn remove(&self, path: &Path) -> io::Result<()> {
        let meta = fs::symlink_metadata(path)?;
        if meta.is_dir() {
            fs::remove_dir_all(path)
        } else {
            fs::remove_file(path)
        }
    }

    fn compress(
        &self,
        src: &Path,
        archive: &Path,
        chunk_size: usize,
        on_chunk: &mut dyn FnMut(u64) -> bool,
    ) -> io::Result<u64> {
        let file = File::options().write(true).create_new(true).open(archive)?;
        let result = write_archive(file, src, chunk_size, on_chunk);
        if result.is_err() {
            let _ = fs::remove_file(archive);
        }
        let total = result?;
        on_chunk(total);
        Ok(total)
    }

    fn delete_to_trash(&self, path: &Path) -> io::Result<()> {
        // trash reports missing paths as a generic error; check first for a precise kind
        fs::symlink_metadata(path)?;
        trash::delete(path).map_err(|e| io::Error::other(e.to_string()))
    }

    fn free_space(&self, path: &Path) -> io::Result<u64> {
        let target = path.canonicalize()?;
        let disks = Disks::new_with_refreshed_list();

        // Longest mount point that contains the path wins
        disks
            .list()
            .iter()
            .filter(|disk| target.starts_with(disk.mount_point()))
            .max_by_key(|disk| disk.mount_point().as_os_str().len())
            .map(|disk| disk.available_space())
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("no mounted volume contains {}", target.display()),
                )
            })
    }
}

fn aborted() -> io::Error {
    io::Error::new(io::ErrorKind::Interrupted, "copy aborted")
}

/// Copy `reader` into `writer` chunk by chunk, asking `on_chunk` before each write
///
/// `done` is the byte count already reported for earlier files; the new
/// running total is returned.
fn pump(
    reader: &mut impl Read,
    writer: &mut impl Write,
    buf: &mut [u8],
    mut done: u64,
    on_chunk: &mut dyn FnMut(u64) -> bool,
) -> io::Result<u64> {
    loop {
        let n = match reader.read(buf) {
            Ok(0) => return Ok(done),
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        if !on_chunk(done) {
            return Err(aborted());
        }
        writer.write_all(&buf[..n])?;
        done += n as u64;
    }
}

/// Zip `src` into `file`; directory contents land at the archive root
fn write_archive(
    file: File,
    src: &Path,
    chunk_size: usize,
    on_chunk: &mut dyn FnMut(u64) -> bool,
) -> io::Result<u64> {
    let mut zip = ZipWriter::new(file);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
    let mut buf = vec![0u8; chunk_size.max(4096)];
    let mut total = 0;

    if !fs::metadata(src)?.is_dir() {
        let name = src
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or_else(|| io::Error::from(io::ErrorKind::InvalidInput))?;
        zip.start_file(name, options)?;
        total = pump(&mut File::open(src)?, &mut zip, &mut buf, total, on_chunk)?;
        zip.finish()?;
        return Ok(total);
    }

    // Depth-first, children sorted so archives are reproducible
    let mut pending = vec![(src.to_path_buf(), String::new())];
    while let Some((dir, prefix)) = pending.pop() {
        let mut children = fs::read_dir(&dir)?.collect::<io::Result<Vec<_>>>()?;
        children.sort_by_key(|c| c.file_name());

        let mut subdirs = Vec::new();
        for child in children {
            let name = format!("{}{}", prefix, child.file_name().to_string_lossy());
            let path = child.path();
            if child.file_type()?.is_dir() {
                zip.add_directory(format!("{}/", name), options)?;
                subdirs.push((path, format!("{}/", name)));
            } else if path.is_file() {
                zip.start_file(name, options)?;
                total = pump(&mut File::open(&path)?, &mut zip, &mut buf, total, on_chunk)?;
            }
            // Symlinked directories and dangling links are skipped
        }
        pending.extend(subdirs.into_iter().rev());
    }

    zip.finish()?;
    Ok(total)
}

/// Location of the freedesktop trash "files" directory, if one can be resolved
pub fn trash_files_dir() -> Option<PathBuf> {
    dirs::data_dir().map(|d| d.join("Trash").join("files"))
}
