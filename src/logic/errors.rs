//! Error classification
//!
//! Maps raw `std::io::Error` values coming back from the filesystem onto the
//! small, closed set of error kinds the rest of the application reasons about.

use std::io;

/// Domain error kinds reported by navigation and transfer operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum ErrorKind {
    #[error("not found")]
    NotFound,
    #[error("permission denied")]
    PermissionDenied,
    #[error("already exists")]
    AlreadyExists,
    /// Only surfaced when the copy-then-delete fallback itself fails
    #[error("cannot move across devices")]
    CrossDeviceMove,
    /// Collision-resolution bound hit, or the destination ran out of space
    #[error("resource exhausted")]
    ResourceExhausted,
    #[error("cancelled")]
    Cancelled,
    /// History entry vanished from disk
    #[error("location no longer available")]
    LocationUnavailable,
    /// Data was moved but the source could not be removed afterwards
    #[error("source not removed")]
    SourceNotRemoved,
    /// Empty selection or malformed name
    #[error("invalid input")]
    InvalidInput,
    #[error("unknown error")]
    Unknown,
}

/// Classify an I/O error into an `ErrorKind`
///
/// # Examples
/// ```
/// use std::io;
/// use tanzfm::logic::errors::{classify_io_error, ErrorKind};
///
/// let err = io::Error::from(io::ErrorKind::PermissionDenied);
/// assert_eq!(classify_io_error(&err), ErrorKind::PermissionDenied);
/// ```
pub fn classify_io_error(err: &io::Error) -> ErrorKind {
    match err.kind() {
        io::ErrorKind::NotFound => ErrorKind::NotFound,
        io::ErrorKind::PermissionDenied | io::ErrorKind::ReadOnlyFilesystem => {
            ErrorKind::PermissionDenied
        }
        io::ErrorKind::AlreadyExists | io::ErrorKind::DirectoryNotEmpty => {
            ErrorKind::AlreadyExists
        }
        io::ErrorKind::CrossesDevices => ErrorKind::CrossDeviceMove,
        // Chunk callbacks abort a copy with Interrupted when the job is cancelled
        io::ErrorKind::Interrupted => ErrorKind::Cancelled,
        io::ErrorKind::StorageFull => ErrorKind::ResourceExhausted,
        io::ErrorKind::InvalidInput => ErrorKind::InvalidInput,
        _ => ErrorKind::Unknown,
    }
}

/// Whether an I/O error is the platform's "cross-device link" error
pub fn is_cross_device(err: &io::Error) -> bool {
    err.kind() == io::ErrorKind::CrossesDevices
}

/// Human-readable message for the status line and toasts
pub fn describe(kind: ErrorKind) -> &'static str {
    match kind {
        ErrorKind::NotFound => "No such file or directory",
        ErrorKind::PermissionDenied => "Permission denied",
        ErrorKind::AlreadyExists => "A file or folder with that name already exists",
        ErrorKind::CrossDeviceMove => "Could not move between devices",
        ErrorKind::ResourceExhausted => "No free name or space left at destination",
        ErrorKind::Cancelled => "Cancelled",
        ErrorKind::LocationUnavailable => "That location is no longer available",
        ErrorKind::SourceNotRemoved => "Moved, but the original could not be removed",
        ErrorKind::InvalidInput => "Invalid name or empty selection",
        ErrorKind::Unknown => "Unexpected error",
    }
}
