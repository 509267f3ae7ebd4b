//! Path Utilities
//!
//! Lexical normalization and decomposition of absolute paths. Nothing in here
//! touches the filesystem.

use std::path::{Component, Path, PathBuf, MAIN_SEPARATOR_STR};

use super::errors::ErrorKind;

/// Normalize a path lexically
///
/// Removes `.` components, resolves `..` against the preceding component
/// (never climbing above the root) and drops trailing separators. The root
/// itself keeps its separator.
///
/// # Examples
/// ```
/// use std::path::{Path, PathBuf};
/// use tanzfm::logic::path::normalize;
///
/// assert_eq!(normalize(Path::new("/home/./user/../user/docs/")), PathBuf::from("/home/user/docs"));
/// assert_eq!(normalize(Path::new("/../..")), PathBuf::from("/"));
/// ```
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => out.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                // Popping a bare root is a no-op, so ".." never escapes it
                if out.file_name().is_some() {
                    out.pop();
                } else if !out.has_root() {
                    out.push("..");
                }
            }
            Component::Normal(name) => out.push(name),
        }
    }
    if out.as_os_str().is_empty() {
        out.push(".");
    }
    out
}

/// Resolve `target` against `base` and normalize the result
///
/// Absolute targets ignore `base`.
pub fn resolve(base: &Path, target: &Path) -> PathBuf {
    if target.is_absolute() {
        normalize(target)
    } else {
        normalize(&base.join(target))
    }
}

/// Split a path into root-to-leaf `(label, prefix)` pairs
///
/// Each prefix is the absolute path from the true root up to and including
/// that label. The bare root only appears as a segment when the path is the
/// root itself.
///
/// # Examples
/// ```
/// use std::path::{Path, PathBuf};
/// use tanzfm::logic::path::segments;
///
/// let segs = segments(Path::new("/home/user"));
/// assert_eq!(segs[0], ("home".to_string(), PathBuf::from("/home")));
/// assert_eq!(segs[1], ("user".to_string(), PathBuf::from("/home/user")));
/// ```
pub fn segments(path: &Path) -> Vec<(String, PathBuf)> {
    let path = normalize(path);
    let mut prefix = PathBuf::new();
    let mut out: Vec<(String, PathBuf)> = Vec::new();

    for component in path.components() {
        prefix.push(component.as_os_str());
        match component {
            Component::Prefix(drive) => {
                out.push((drive.as_os_str().to_string_lossy().into_owned(), prefix.clone()));
            }
            Component::RootDir => {
                // Drive segments navigate to the drive root, not the drive-relative cwd
                if let Some(last) = out.last_mut() {
                    last.1 = prefix.clone();
                }
            }
            Component::Normal(name) => {
                out.push((name.to_string_lossy().into_owned(), prefix.clone()));
            }
            Component::CurDir | Component::ParentDir => {}
        }
    }

    if out.is_empty() && path.has_root() {
        out.push((MAIN_SEPARATOR_STR.to_string(), prefix));
    }

    out
}

/// Final component of a path as an owned string
pub fn file_name(path: &Path) -> Option<String> {
    path.file_name().map(|n| n.to_string_lossy().into_owned())
}

/// Parent directory, or `None` at the root
pub fn parent(path: &Path) -> Option<PathBuf> {
    normalize(path).parent().map(Path::to_path_buf)
}

/// Split a file name into stem and extension
///
/// The extension starts at the last `.` that is not part of the leading dots,
/// so dotfiles have no extension.
///
/// # Examples
/// ```
/// use tanzfm::logic::path::split_extension;
///
/// assert_eq!(split_extension("a.txt"), ("a", ".txt"));
/// assert_eq!(split_extension("archive.tar.gz"), ("archive.tar", ".gz"));
/// assert_eq!(split_extension(".bashrc"), (".bashrc", ""));
/// assert_eq!(split_extension("README"), ("README", ""));
/// ```
pub fn split_extension(name: &str) -> (&str, &str) {
    let leading_dots = name.len() - name.trim_start_matches('.').len();
    match name[leading_dots..].rfind('.') {
        Some(idx) => name.split_at(leading_dots + idx),
        None => (name, ""),
    }
}

/// Reject names that cannot denote a single entry inside a directory
pub fn validate_name(name: &str) -> Result<(), ErrorKind> {
    let trimmed = name.trim();
    if trimmed.is_empty() || trimmed == "." || trimmed == ".." {
        return Err(ErrorKind::InvalidInput);
    }
    if name.contains('/') || name.contains(std::path::MAIN_SEPARATOR) || name.contains('\0') {
        return Err(ErrorKind::InvalidInput);
    }
    Ok(())
}

/// Whether `path` equals `ancestor` or lies somewhere beneath it
pub fn is_within(path: &Path, ancestor: &Path) -> bool {
    normalize(path).starts_with(normalize(ancestor))
}
