//! Background transfer service
//!
//! Runs `TransferJob`s off the UI thread. Each job gets its own blocking task
//! and `CancelToken`; progress and the final outcome list come back over an
//! unbounded channel so the event loop never waits on the disk.

use std::collections::HashMap;
use tokio::sync::mpsc;

use super::transfer::{CancelToken, TransferEngine, TransferJob, TransferKind, TransferOutcome, TransferProgress};

/// Requests accepted by the transfer service
#[derive(Debug, Clone)]
pub enum TransferRequest {
    /// Start `job`; `id` is chosen by the caller and echoed in responses
    Start { id: u64, job: TransferJob },

    /// Cancel a running job (ignored for unknown or finished ids)
    Cancel { id: u64 },
}

/// Responses emitted by the transfer service
#[derive(Debug, Clone)]
pub enum TransferResponse {
    Progress {
        id: u64,
        progress: TransferProgress,
    },

    Finished {
        id: u64,
        kind: TransferKind,
        outcomes: Vec<TransferOutcome>,
    },
}

/// Internal message for tracking completed jobs
enum InternalMessage {
    Completed(u64),
}

/// Spawn the transfer service worker
pub fn spawn_transfer_service(
    engine: TransferEngine,
) -> (
    mpsc::UnboundedSender<TransferRequest>,
    mpsc::UnboundedReceiver<TransferResponse>,
) {
    let (request_tx, mut request_rx) = mpsc::unbounded_channel::<TransferRequest>();
    let (response_tx, response_rx) = mpsc::unbounded_channel::<TransferResponse>();
    let (completion_tx, mut completion_rx) = mpsc::unbounded_channel::<InternalMessage>();

    tokio::spawn(async move {
        let mut running: HashMap<u64, CancelToken> = HashMap::new();

        loop {
            tokio::select! {
                request = request_rx.recv() => {
                    let Some(request) = request else {
                        // Front-end dropped its sender: stop everything still running
                        for token in running.values() {
                            token.cancel();
                        }
                        break;
                    };

                    match request {
                        TransferRequest::Start { id, job } => {
                            let token = CancelToken::new();
                            running.insert(id, token.clone());
                            start_job(engine.clone(), id, job, token, response_tx.clone(), completion_tx.clone());
                        }
                        TransferRequest::Cancel { id } => {
                            if let Some(token) = running.get(&id) {
                                log::debug!("transfer {}: cancel requested", id);
                                token.cancel();
                            }
                        }
                    }
                }

                Some(InternalMessage::Completed(id)) = completion_rx.recv() => {
                    running.remove(&id);
                }
            }
        }
    });

    (request_tx, response_rx)
}

fn start_job(
    engine: TransferEngine,
    id: u64,
    job: TransferJob,
    token: CancelToken,
    response_tx: mpsc::UnboundedSender<TransferResponse>,
    completion_tx: mpsc::UnboundedSender<InternalMessage>,
) {
    log::debug!("transfer {}: {} {} item(s)", id, job.kind.progressive(), job.items.len());

    tokio::task::spawn_blocking(move || {
        let progress_tx = response_tx.clone();
        let outcomes = engine.execute(&job, &token, &mut |progress| {
            let _ = progress_tx.send(TransferResponse::Progress {
                id,
                progress: progress.clone(),
            });
        });

        let failed = outcomes.iter().filter(|o| !o.succeeded()).count();
        log::debug!("transfer {}: finished, {} of {} failed", id, failed, outcomes.len());

        let _ = response_tx.send(TransferResponse::Finished {
            id,
            kind: job.kind,
            outcomes,
        });
        let _ = completion_tx.send(InternalMessage::Completed(id));
    });
}
