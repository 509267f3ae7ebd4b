//! App Orchestration Methods
//!
//! `impl App` blocks grouped by domain. Each one coordinates between the
//! model (`tanzfm::model`), the transfer engine/worker (`tanzfm::services`)
//! and the renderer (`crate::ui`).

pub(crate) mod file_ops;
pub(crate) mod navigation;
