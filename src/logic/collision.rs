//! Name-collision resolution for copy and move
//!
//! When a destination name is taken, candidates are generated as
//! `"{stem} (copy {n}){ext}"` for files and `"{name} (copy {n})"` for
//! directories, probing `n = 1, 2, 3, ...` until a free name is found.

use std::path::Path;

use super::errors::ErrorKind;
use super::path::split_extension;

/// Default upper bound on candidates probed before giving up
pub const DEFAULT_MAX_ATTEMPTS: u32 = 4096;

/// Build the `n`-th candidate name for `name`
///
/// # Examples
/// ```
/// use tanzfm::logic::collision::candidate_name;
///
/// assert_eq!(candidate_name("a.txt", false, 1), "a (copy 1).txt");
/// assert_eq!(candidate_name("notes", true, 2), "notes (copy 2)");
/// // Directories never split on a dot
/// assert_eq!(candidate_name("v1.2", true, 1), "v1.2 (copy 1)");
/// ```
pub fn candidate_name(name: &str, is_dir: bool, n: u32) -> String {
    if is_dir {
        format!("{} (copy {})", name, n)
    } else {
        let (stem, ext) = split_extension(name);
        format!("{} (copy {}){}", stem, n, ext)
    }
}

/// Pick a free name for `name` inside `dest_dir`
///
/// Returns `name` unchanged if nothing by that name exists, otherwise the
/// first unused candidate. Fails with `ResourceExhausted` once
/// `max_attempts` candidates have all been taken.
///
/// # Arguments
/// * `dest_dir` - Directory the entry will be created in
/// * `name` - Desired entry name
/// * `is_dir` - Whether the entry is a directory (controls extension handling)
/// * `max_attempts` - Bound on the number of `(copy n)` candidates probed
/// * `exists` - Existence oracle, normally `FileSystem::exists`
pub fn resolve_collision(
    dest_dir: &Path,
    name: &str,
    is_dir: bool,
    max_attempts: u32,
    exists: impl Fn(&Path) -> bool,
) -> Result<String, ErrorKind> {
    if !exists(&dest_dir.join(name)) {
        return Ok(name.to_string());
    }

    for n in 1..=max_attempts {
        let candidate = candidate_name(name, is_dir, n);
        if !exists(&dest_dir.join(&candidate)) {
            return Ok(candidate);
        }
    }

    Err(ErrorKind::ResourceExhausted)
}
