//! Services
//!
//! - transfer: copy/move/trash engine with collision resolution
//! - worker: background task runner for transfers (progress + cancellation)

pub mod transfer;
pub mod worker;

// Re-export commonly used types for convenience
pub use transfer::{
    paste, CancelToken, ItemKind, TransferEngine, TransferItem, TransferJob, TransferKind, TransferOptions,
    TransferOutcome, TransferProgress, TransferStatus,
};
pub use worker::{spawn_transfer_service, TransferRequest, TransferResponse};
