//! Periodic promotion of expired, unfinished to-dos to `PAST_DUE`.
//!
//! [`PastDueSweeper::sweep`] scans every item that is not `DONE` and marks
//! the ones whose due date lies before the sweep's single "now" snapshot.
//! At most one sweep runs at a time: a tick that finds another sweep in
//! flight is skipped, not queued. [`run`] drives the sweeper on a fixed
//! delay measured from the end of one sweep to the start of the next.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use todos_core::clock::Clock;
use todos_db::{StoreError, ToDoStore};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// What a single sweep invocation did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SweepOutcome {
    /// Another sweep held the in-progress flag; nothing was read or written.
    Skipped,
    /// The sweep ran to the end. `marked` counts items newly moved to
    /// `PAST_DUE`; already past-due items are re-written but not counted.
    Completed { scanned: usize, marked: usize },
    /// A storage call failed; the error was logged and the batch abandoned
    /// until the next tick.
    Failed,
}

pub struct PastDueSweeper {
    store: Arc<dyn ToDoStore>,
    clock: Arc<dyn Clock>,
    in_progress: AtomicBool,
}

/// Clears the in-progress flag when dropped, so a failed, panicking or
/// cancelled sweep never wedges future ticks.
struct InProgressGuard<'a>(&'a AtomicBool);

impl Drop for InProgressGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl PastDueSweeper {
    pub fn new(store: Arc<dyn ToDoStore>, clock: Arc<dyn Clock>) -> Self {
        Self {
            store,
            clock,
            in_progress: AtomicBool::new(false),
        }
    }

    /// Whether a sweep currently holds the in-progress flag.
    pub fn is_running(&self) -> bool {
        self.in_progress.load(Ordering::Acquire)
    }

    /// Run one sweep unless another one is already in flight.
    ///
    /// Failures are logged and reported as [`SweepOutcome::Failed`]; they are
    /// never propagated to the scheduler.
    pub async fn sweep(&self) -> SweepOutcome {
        tracing::debug!("Attempting past-due sweep");

        if self
            .in_progress
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            tracing::debug!("Past-due sweep already in progress, skipping tick");
            return SweepOutcome::Skipped;
        }
        let _guard = InProgressGuard(&self.in_progress);

        match self.mark_past_due().await {
            Ok((scanned, marked)) => {
                if marked > 0 {
                    tracing::info!(scanned, marked, "Past-due sweep: marked overdue to-dos");
                } else {
                    tracing::debug!(scanned, "Past-due sweep: nothing overdue");
                }
                SweepOutcome::Completed { scanned, marked }
            }
            Err(e) => {
                tracing::error!(error = %e, "Past-due sweep failed");
                SweepOutcome::Failed
            }
        }
    }

    async fn mark_past_due(&self) -> Result<(usize, usize), StoreError> {
        let now = self.clock.now();
        let candidates = self.store.list_not_done().await?;
        let scanned = candidates.len();
        let mut marked = 0;

        for mut todo in candidates {
            let Some(next) = todo.status.sweep(todo.due_date, now) else {
                continue;
            };
            let previous = todo.status;
            todo.status = next;
            // A row deleted since the listing is simply gone; nothing to mark.
            let saved = self.store.save(&todo).await?;
            if saved.is_some() && previous != next {
                marked += 1;
            }
        }

        Ok((scanned, marked))
    }
}

/// Run the past-due sweep loop until `cancel` is triggered.
///
/// Sweeps immediately, then waits `delay` after each sweep finishes before
/// starting the next one.
pub async fn run(sweeper: Arc<PastDueSweeper>, delay: Duration, cancel: CancellationToken) {
    tracing::info!(delay_secs = delay.as_secs(), "Past-due sweep job started");

    loop {
        sweeper.sweep().await;

        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("Past-due sweep job stopping");
                break;
            }
            _ = tokio::time::sleep(delay) => {}
        }
    }
}

/// How a spawned sweep loop ended once shutdown began.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopOutcome {
    Stopped,
    /// The task panicked or was aborted.
    Failed,
    TimedOut,
}

/// Wait up to `timeout` for the task running [`run`] to finish after its
/// token was cancelled.
pub async fn await_stop(handle: JoinHandle<()>, timeout: Duration) -> StopOutcome {
    match tokio::time::timeout(timeout, handle).await {
        Ok(Ok(())) => {
            tracing::info!("Past-due sweep stopped");
            StopOutcome::Stopped
        }
        Ok(Err(e)) => {
            tracing::error!(error = %e, "Past-due sweep task failed");
            StopOutcome::Failed
        }
        Err(_) => {
            tracing::warn!("Past-due sweep did not stop in time");
            StopOutcome::TimedOut
        }
    }
}
