//! Deferred run completions.
//!
//! Each accepted run gets a spawned task that sleeps for the run delay and
//! then posts [`AppEvent::RunCompleted`] back to the main loop. The task's
//! abort handle is kept so pending completions can be cancelled on teardown.

use crate::app::event::{AppEvent, RunId};
use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::AbortHandle;

/// Handle to a pending completion.
#[derive(Debug)]
pub struct ScheduledRun {
    run_id: RunId,
    handle: AbortHandle,
}

impl ScheduledRun {
    pub fn run_id(&self) -> RunId {
        self.run_id
    }

    pub fn cancel(&self) {
        self.handle.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

pub struct Scheduler {
    event_tx: mpsc::UnboundedSender<AppEvent>,
    pending: HashMap<RunId, ScheduledRun>,
}

impl Scheduler {
    pub fn new(event_tx: mpsc::UnboundedSender<AppEvent>) -> Self {
        Self {
            event_tx,
            pending: HashMap::new(),
        }
    }

    /// Post `RunCompleted { run_id }` after `delay`. Must be called from
    /// within a tokio runtime.
    pub fn schedule_completion(&mut self, run_id: RunId, delay: Duration) {
        let tx = self.event_tx.clone();
        let join = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(AppEvent::RunCompleted { run_id });
        });
        tracing::debug!(run_id, delay_ms = delay.as_millis() as u64, "run completion scheduled");
        let scheduled = ScheduledRun {
            run_id,
            handle: join.abort_handle(),
        };
        if let Some(previous) = self.pending.insert(run_id, scheduled) {
            previous.cancel();
        }
    }

    /// Forget the handle once its completion has been delivered.
    pub fn completed(&mut self, run_id: RunId) -> Option<ScheduledRun> {
        self.pending.remove(&run_id)
    }

    pub fn cancel_all(&mut self) {
        for (run_id, scheduled) in self.pending.drain() {
            if !scheduled.is_finished() {
                tracing::debug!(run_id, "pending run completion cancelled");
            }
            scheduled.cancel();
        }
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }
}

impl Drop for Scheduler {
    fn drop(&mut self) {
        self.cancel_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::timeout;

    #[tokio::test]
    async fn test_completion_fires_once() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut scheduler = Scheduler::new(tx);
        scheduler.schedule_completion(7, Duration::from_millis(10));
        assert_eq!(scheduler.pending_count(), 1);

        let event = timeout(Duration::from_secs(2), rx.recv())
            .await
            .expect("completion should arrive")
            .expect("channel open");
        assert!(matches!(event, AppEvent::RunCompleted { run_id: 7 }));

        // Nothing else is delivered
        assert!(timeout(Duration::from_millis(50), rx.recv()).await.is_err());

        let done = scheduler.completed(7).expect("handle tracked");
        assert_eq!(done.run_id(), 7);
        assert_eq!(scheduler.pending_count(), 0);
    }

    #[tokio::test]
    async fn test_cancelled_completion_never_fires() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut scheduler = Scheduler::new(tx);
        scheduler.schedule_completion(1, Duration::from_millis(30));
        scheduler.cancel_all();
        assert_eq!(scheduler.pending_count(), 0);
        assert!(timeout(Duration::from_millis(100), rx.recv()).await.is_err());
    }

    #[tokio::test]
    async fn test_cancel_all_on_drop() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        {
            let mut scheduler = Scheduler::new(tx);
            scheduler.schedule_completion(1, Duration::from_millis(30));
            scheduler.schedule_completion(2, Duration::from_millis(30));
            assert_eq!(scheduler.pending_count(), 2);
        }
        // All senders are gone once the tasks are aborted
        let received = timeout(Duration::from_millis(200), rx.recv())
            .await
            .expect("channel should close");
        assert!(received.is_none());
    }
}
