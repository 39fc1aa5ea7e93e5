//! Cancellable delayed work.
//!
//! Simulated latency (assistant replies, verifier round-trips) is modelled as
//! a tokio task that sleeps and then runs a job. Dropping or cancelling the
//! `DelayedTask` aborts it, so a screen that is torn down before the delay
//! elapses never receives the late update.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::debug;

/// Handle to a job scheduled to run after a delay.
///
/// Must be created from within a tokio runtime.
#[derive(Debug)]
pub struct DelayedTask {
    label: &'static str,
    handle: JoinHandle<()>,
}

impl DelayedTask {
    /// Run `job` once `delay` has elapsed, unless cancelled first.
    pub fn spawn<F>(label: &'static str, delay: Duration, job: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            job();
        });
        Self { label, handle }
    }

    /// Abort the task. No-op if the job already ran.
    pub fn cancel(&self) {
        if !self.handle.is_finished() {
            debug!(task = self.label, "cancelling delayed task");
            self.handle.abort();
        }
    }

    /// True once the job has run or the task was aborted.
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for DelayedTask {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    };

    use super::*;

    #[tokio::test]
    async fn job_runs_after_delay() {
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&hits);
        let task = DelayedTask::spawn("test", Duration::from_millis(5), move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(hits.load(Ordering::SeqCst), 1);
        assert!(task.is_finished());
    }

    #[tokio::test]
    async fn cancelled_job_never_runs() {
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&hits);
        let task = DelayedTask::spawn("test", Duration::from_millis(20), move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        task.cancel();
        tokio::time::sleep(Duration::from_millis(60)).await;
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn dropping_the_handle_cancels() {
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&hits);
        drop(DelayedTask::spawn("test", Duration::from_millis(20), move || {
            counter.fetch_add(1, Ordering::SeqCst);
        }));

        tokio::time::sleep(Duration::from_millis(60)).await;
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }
}
