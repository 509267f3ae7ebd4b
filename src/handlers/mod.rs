//! Event Handlers
//!
//! - keyboard: user keyboard input
//! - mouse: breadcrumb clicks and wheel scrolling
//! - transfer: progress and completion from the transfer worker

pub mod keyboard;
pub mod mouse;
pub mod transfer;

// Re-export for convenience
pub use keyboard::handle_key;
pub use mouse::handle_mouse;
pub use transfer::handle_transfer_response;
