/*!
 * Background diff worker.
 *
 * Comparing two scripts is quadratic in their token counts, so interactive
 * callers hand revisions to a `DiffWorker` instead of diffing on every edit.
 * The worker waits until submissions have been quiet for the debounce window,
 * diffs the newest pair on a blocking thread, and publishes the result on a
 * watch channel. Results for requests that were superseded while they ran are
 * dropped.
 */

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use log::{debug, error, warn};
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

use crate::analysis::{compare_texts, ComparisonResult, DiffStats};

/// One comparison request
#[derive(Debug)]
struct DiffRequest {
    generation: u64,
    original: String,
    revised: String,
}

/// A published comparison
#[derive(Debug, Clone, PartialEq)]
pub struct DiffOutcome {
    /// Generation of the request this result answers
    pub generation: u64,
    pub result: ComparisonResult,
    pub stats: DiffStats,
}

/// Debounced, stale-suppressing diff runner.
///
/// Must be created inside a tokio runtime.
pub struct DiffWorker {
    sender: mpsc::UnboundedSender<DiffRequest>,
    outcomes: watch::Receiver<Option<DiffOutcome>>,
    latest_generation: Arc<AtomicU64>,
    handle: JoinHandle<()>,
}

impl DiffWorker {
    pub fn new(debounce: Duration) -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        let (publisher, outcomes) = watch::channel(None);
        let latest_generation = Arc::new(AtomicU64::new(0));

        let handle = tokio::spawn(run_worker(
            receiver,
            publisher,
            Arc::clone(&latest_generation),
            debounce,
        ));

        Self {
            sender,
            outcomes,
            latest_generation,
            handle,
        }
    }

    /// Queue a comparison.
    // @returns: Generation number of the request (starts at 1)
    pub fn submit(&self, original: impl Into<String>, revised: impl Into<String>) -> u64 {
        let generation = self.latest_generation.fetch_add(1, Ordering::SeqCst) + 1;
        let request = DiffRequest {
            generation,
            original: original.into(),
            revised: revised.into(),
        };

        if self.sender.send(request).is_err() {
            warn!("Diff worker is no longer running; request {} dropped", generation);
        }
        generation
    }

    /// Generation of the most recent submission, 0 if none
    pub fn latest_generation(&self) -> u64 {
        self.latest_generation.load(Ordering::SeqCst)
    }

    pub fn subscribe(&self) -> watch::Receiver<Option<DiffOutcome>> {
        self.outcomes.clone()
    }

    /// Last published outcome, if any
    pub fn latest(&self) -> Option<DiffOutcome> {
        self.outcomes.borrow().clone()
    }

    /// Wait until an outcome at or past `generation` is published.
    ///
    /// Returns `None` if the worker stops first.
    pub async fn wait_for(&self, generation: u64) -> Option<DiffOutcome> {
        let mut outcomes = self.subscribe();
        loop {
            let current = outcomes.borrow_and_update().clone();
            if let Some(outcome) = current {
                if outcome.generation >= generation {
                    return Some(outcome);
                }
            }
            if outcomes.changed().await.is_err() {
                return None;
            }
        }
    }

    /// Stop accepting requests, finish pending work and join the task
    pub async fn shutdown(self) -> Result<()> {
        drop(self.sender);
        self.handle.await.context("Diff worker task panicked")
    }
}

async fn run_worker(
    mut receiver: mpsc::UnboundedReceiver<DiffRequest>,
    publisher: watch::Sender<Option<DiffOutcome>>,
    latest_generation: Arc<AtomicU64>,
    debounce: Duration,
) {
    while let Some(first) = receiver.recv().await {
        let mut request = first;
        let mut closed = false;

        // Keep taking newer requests until the input settles
        loop {
            tokio::select! {
                next = receiver.recv() => match next {
                    Some(newer) => {
                        debug!("Request {} superseded by {}", request.generation, newer.generation);
                        request = newer;
                    }
                    None => {
                        closed = true;
                        break;
                    }
                },
                _ = tokio::time::sleep(debounce) => break,
            }
        }

        let DiffRequest { generation, original, revised } = request;
        let computed =
            tokio::task::spawn_blocking(move || compare_texts(&original, &revised)).await;

        match computed {
            Ok(result) => {
                if generation == latest_generation.load(Ordering::SeqCst) {
                    let stats = DiffStats::from_result(&result);
                    publisher.send_replace(Some(DiffOutcome { generation, result, stats }));
                    debug!("Published diff for request {}", generation);
                } else {
                    debug!("Dropping stale diff for request {}", generation);
                }
            }
            Err(e) => error!("Diff task for request {} failed: {}", generation, e),
        }

        if closed {
            break;
        }
    }
}
