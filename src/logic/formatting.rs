//! Formatting and display logic
//!
//! Pure functions for formatting sizes and timestamps for the file list and
//! status bar.

use chrono::{DateTime, Local};
use std::time::SystemTime;

/// Format a byte count into a compact, right-aligned 4-5 character string
///
/// # Examples
/// ```
/// use tanzfm::logic::formatting::format_human_size;
///
/// assert_eq!(format_human_size(0), "   0B");
/// assert_eq!(format_human_size(1536), " 1.5K");
/// assert_eq!(format_human_size(200 * 1024 * 1024), " 200M");
/// ```
pub fn format_human_size(size: u64) -> String {
    const UNITS: [&str; 5] = ["B", "K", "M", "G", "T"];

    if size < 1024 {
        return format!("{:>4}B", size);
    }

    let mut value = size as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    if value < 10.0 {
        format!("{:>4.1}{}", value, UNITS[unit])
    } else {
        format!("{:>4.0}{}", value, UNITS[unit])
    }
}

/// Format a modification time as local "YYYY-MM-DD HH:MM"
pub fn format_modified(modified: Option<SystemTime>) -> String {
    match modified {
        Some(time) => {
            let local: DateTime<Local> = time.into();
            local.format("%Y-%m-%d %H:%M").to_string()
        }
        None => String::new(),
    }
}

/// Format free space for the status bar (e.g. "12.4 GB free")
pub fn format_free_space(bytes: u64) -> String {
    format!("{} free", crate::utils::format_bytes(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_human_size_bytes() {
        assert_eq!(format_human_size(1), "   1B");
        assert_eq!(format_human_size(1023), "1023B");
    }

    #[test]
    fn test_format_human_size_units() {
        assert_eq!(format_human_size(1024), " 1.0K");
        assert_eq!(format_human_size(10 * 1024), "  10K");
        assert_eq!(format_human_size(3 * 1024 * 1024 * 1024), " 3.0G");
    }

    #[test]
    fn test_format_modified_none_is_empty() {
        assert_eq!(format_modified(None), "");
    }

    #[test]
    fn test_format_modified_shape() {
        let formatted = format_modified(Some(SystemTime::now()));
        // "YYYY-MM-DD HH:MM"
        assert_eq!(formatted.len(), 16);
        assert_eq!(&formatted[4..5], "-");
        assert_eq!(&formatted[10..11], " ");
    }

    #[test]
    fn test_format_free_space() {
        assert_eq!(format_free_space(2048), "2.00 KB free");
    }
}
