//! Transfer Response Handler
//!
//! Applies progress and completion messages from the transfer worker.

use tanzfm::logic::errors::{describe, ErrorKind};
use tanzfm::services::{TransferKind, TransferOutcome, TransferResponse};

use crate::App;

pub fn handle_transfer_response(app: &mut App, response: TransferResponse) {
    match response {
        TransferResponse::Progress { id, progress } => {
            if let Some(active) = app.model.active_transfer.as_mut() {
                if active.id == id {
                    active.progress = Some(progress);
                }
            }
        }

        TransferResponse::Finished { id, kind, outcomes } => {
            if app.model.active_transfer.as_ref().map(|a| a.id) != Some(id) {
                log::debug!("ignoring result of stale transfer {}", id);
                return;
            }
            let Some(active) = app.model.active_transfer.take() else {
                return;
            };

            if let Some(pasted) = &active.pasted {
                app.model.clipboard.complete_paste(pasted, &outcomes);
            }

            app.reload_listing(false);
            if let Some(name) = outcomes.iter().find(|o| o.succeeded()).map(|o| o.final_name.clone()) {
                if kind != TransferKind::Trash {
                    app.model.listing.select_name(&name);
                }
            }
            app.model.show_toast(summarize_outcomes(kind, &outcomes));
        }
    }
}

/// One-line summary of a finished transfer for the toast
///
/// Failures are prefixed with "Error:" so the toast renders in red.
pub fn summarize_outcomes(kind: TransferKind, outcomes: &[TransferOutcome]) -> String {
    let total = outcomes.len();
    let succeeded = outcomes.iter().filter(|o| o.succeeded()).count();
    let not_removed = outcomes
        .iter()
        .filter(|o| o.warning == Some(ErrorKind::SourceNotRemoved))
        .count();

    if let Some(failed) = outcomes.iter().find(|o| !o.succeeded()) {
        let reason = failed.error().map(describe).unwrap_or("unknown error");
        return format!(
            "Error: {} {} of {}; {}: {}",
            kind.past_tense(),
            succeeded,
            total,
            failed.final_name,
            reason
        );
    }

    let what = match outcomes {
        [single] => single.final_name.clone(),
        _ => format!("{} items", total),
    };

    if not_removed > 0 {
        format!(
            "{} {}; {} source(s) could not be removed",
            kind.past_tense(),
            what,
            not_removed
        )
    } else {
        format!("{} {}", kind.past_tense(), what)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tanzfm::services::TransferStatus;

    fn outcome(name: &str, status: TransferStatus) -> TransferOutcome {
        TransferOutcome {
            source: PathBuf::from("/src").join(name),
            final_name: name.to_string(),
            destination: None,
            status,
            warning: None,
        }
    }

    #[test]
    fn test_single_success_names_the_item() {
        let msg = summarize_outcomes(TransferKind::Copy, &[outcome("a (copy 1).txt", TransferStatus::Succeeded)]);
        assert_eq!(msg, "Copied a (copy 1).txt");
    }

    #[test]
    fn test_many_successes_are_counted() {
        let outcomes = vec![
            outcome("a", TransferStatus::Succeeded),
            outcome("b", TransferStatus::Succeeded),
        ];
        assert_eq!(summarize_outcomes(TransferKind::Move, &outcomes), "Moved 2 items");
    }

    #[test]
    fn test_failure_is_an_error_message() {
        let outcomes = vec![
            outcome("a", TransferStatus::Succeeded),
            outcome("b", TransferStatus::Failed(ErrorKind::PermissionDenied)),
        ];
        let msg = summarize_outcomes(TransferKind::Copy, &outcomes);
        assert!(msg.starts_with("Error:"));
        assert!(msg.contains("1 of 2"));
        assert!(msg.contains("b:"));
    }

    #[test]
    fn test_compress_names_the_archive() {
        let msg = summarize_outcomes(TransferKind::Compress, &[outcome("album.zip", TransferStatus::Succeeded)]);
        assert_eq!(msg, "Compressed album.zip");
    }

    #[test]
    fn test_source_not_removed_warning() {
        let mut moved = outcome("a", TransferStatus::Succeeded);
        moved.warning = Some(ErrorKind::SourceNotRemoved);
        let msg = summarize_outcomes(TransferKind::Move, &[moved]);
        assert_eq!(msg, "Moved a; 1 source(s) could not be removed");
    }
}
