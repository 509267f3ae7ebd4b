//! Business Logic
//!
//! This module contains pure business logic functions that can be unit tested:
//! - breadcrumb: Width-constrained breadcrumb layout and hit testing
//! - collision: "(copy n)" name-collision resolution for copy/move
//! - errors: Error kinds and I/O error classification
//! - formatting: Human-readable sizes and timestamps
//! - path: Path normalization and decomposition
//! - sorting: Directory entry ordering

pub mod breadcrumb;
pub mod collision;
pub mod errors;
pub mod formatting;
pub mod path;
pub mod sorting;
