//! Sorting comparison logic
//!
//! Pure functions for ordering directory entries across the sort modes.

use crate::fs::EntryInfo;
use crate::SortMode;
use std::cmp::Ordering;

/// Compare two directory entries according to the given sort mode
///
/// # Sort Rules
/// - Directories always come before files, even when reversed
/// - Within same type (dir/file), apply sort mode
/// - Case-insensitive name as tie-breaker
pub fn compare_entries(a: &EntryInfo, b: &EntryInfo, sort_mode: SortMode, reverse: bool) -> Ordering {
    if a.is_dir != b.is_dir {
        return if a.is_dir { Ordering::Less } else { Ordering::Greater };
    }

    let by_name = || a.name.to_lowercase().cmp(&b.name.to_lowercase());

    let result = match sort_mode {
        SortMode::Alphabetical => by_name(),
        // Newest first
        SortMode::LastModified => b.modified.cmp(&a.modified).then_with(by_name),
        // Largest first
        SortMode::FileSize => b.size.cmp(&a.size).then_with(by_name),
    };

    if reverse {
        result.reverse()
    } else {
        result
    }
}

/// Sort entries in place
pub fn sort_entries(entries: &mut [EntryInfo], sort_mode: SortMode, reverse: bool) {
    entries.sort_by(|a, b| compare_entries(a, b, sort_mode, reverse));
}
