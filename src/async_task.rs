//! Cancellable background tasks for simulated network delays
//!
//! Views hand a closure and a delay to [`spawn_delayed`] and keep the returned
//! [`PendingTask`]. A worker thread waits out the delay and sends the closure's
//! result back over a channel; the view polls it on each tick.
//!
//! # Cancellation
//!
//! The handle owns the sending half of a cancellation channel. Dropping the
//! handle (the view was unmounted) or calling [`PendingTask::cancel`]
//! disconnects it, which wakes the worker early and it exits without running
//! the closure. A cancelled task never delivers a result.
//!
//! # Usage
//!
//! ```no_run
//! use std::time::Duration;
//! use penny::async_task::spawn_delayed;
//!
//! let mut task = spawn_delayed("sync", Duration::from_millis(1500), || "done");
//!
//! // In the event loop tick
//! if let Some(result) = task.try_recv() {
//!     println!("{}", result);
//! }
//! ```

use std::thread;
use std::time::Duration;

use crossbeam::channel::{bounded, Receiver, RecvTimeoutError, Sender, TryRecvError};

/// Poll state of a [`PendingTask`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskPoll<T> {
    Waiting,
    Ready(T),
    /// The worker went away without a result.
    Lost,
}

/// Handle to a delayed task. Dropping it cancels the task.
#[derive(Debug)]
pub struct PendingTask<T> {
    label: &'static str,
    result: Receiver<T>,
    cancel: Option<Sender<()>>,
}

/// Runs `work` on a background thread after `delay`, unless cancelled first.
pub fn spawn_delayed<T, F>(label: &'static str, delay: Duration, work: F) -> PendingTask<T>
where
    T: Send + 'static,
    F: FnOnce() -> T + Send + 'static,
{
    let (result_tx, result_rx) = bounded(1);
    let (cancel_tx, cancel_rx) = bounded::<()>(1);

    tracing::debug!(task = label, ?delay, "task spawned");
    thread::spawn(move || match cancel_rx.recv_timeout(delay) {
        Err(RecvTimeoutError::Timeout) => {
            let _ = result_tx.send(work());
            tracing::debug!(task = label, "task completed");
        }
        Ok(()) | Err(RecvTimeoutError::Disconnected) => {
            tracing::debug!(task = label, "task cancelled");
        }
    });

    PendingTask {
        label,
        result: result_rx,
        cancel: Some(cancel_tx),
    }
}

impl<T> PendingTask<T> {
    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn poll(&self) -> TaskPoll<T> {
        match self.result.try_recv() {
            Ok(value) => TaskPoll::Ready(value),
            Err(TryRecvError::Empty) => TaskPoll::Waiting,
            Err(TryRecvError::Disconnected) => TaskPoll::Lost,
        }
    }

    /// Returns the result if the task has finished.
    pub fn try_recv(&self) -> Option<T> {
        match self.poll() {
            TaskPoll::Ready(value) => Some(value),
            _ => None,
        }
    }

    /// Cancels the task; it will not deliver a result.
    pub fn cancel(mut self) {
        if let Some(tx) = self.cancel.take() {
            let _ = tx.try_send(());
        }
    }
}

impl<T> Drop for PendingTask<T> {
    fn drop(&mut self) {
        // Disconnecting the cancel channel wakes a worker that is still waiting.
        self.cancel.take();
    }
}

/// Polls an optional pending slot, clearing it once the task has finished.
pub fn take_ready<T>(slot: &mut Option<PendingTask<T>>) -> Option<T> {
    let outcome = slot.as_ref()?.poll();
    match outcome {
        TaskPoll::Waiting => None,
        TaskPoll::Ready(value) => {
            slot.take();
            Some(value)
        }
        TaskPoll::Lost => {
            if let Some(task) = slot.take() {
                tracing::warn!(task = task.label(), "task finished without a result");
            }
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;
    use std::time::Instant;

    fn wait_for<T>(task: &PendingTask<T>, timeout: Duration) -> Option<T> {
        let start = Instant::now();
        while start.elapsed() < timeout {
            if let Some(v) = task.try_recv() {
                return Some(v);
            }
            thread::sleep(Duration::from_millis(5));
        }
        None
    }

    #[test]
    fn test_task_not_ready_before_delay() {
        let task = spawn_delayed("slow", Duration::from_secs(5), || 1);
        assert_eq!(task.poll(), TaskPoll::Waiting);
    }

    #[test]
    fn test_task_completes_after_delay() {
        let task = spawn_delayed("fast", Duration::from_millis(10), || 42);
        assert_eq!(wait_for(&task, Duration::from_secs(2)), Some(42));
    }

    #[test]
    fn test_dropped_task_never_runs() {
        let ran = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&ran);
        let task = spawn_delayed("dropped", Duration::from_millis(50), move || {
            flag.store(true, Ordering::SeqCst);
        });
        drop(task);
        thread::sleep(Duration::from_millis(150));
        assert!(!ran.load(Ordering::SeqCst));
    }

    #[test]
    fn test_cancelled_task_never_runs() {
        let ran = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&ran);
        let task = spawn_delayed("cancelled", Duration::from_millis(50), move || {
            flag.store(true, Ordering::SeqCst);
        });
        task.cancel();
        thread::sleep(Duration::from_millis(150));
        assert!(!ran.load(Ordering::SeqCst));
    }

    #[test]
    fn test_take_ready_clears_slot() {
        let mut slot = Some(spawn_delayed("slot", Duration::from_millis(5), || "ok"));
        let start = Instant::now();
        let mut got = None;
        while got.is_none() && start.elapsed() < Duration::from_secs(2) {
            got = take_ready(&mut slot);
            thread::sleep(Duration::from_millis(5));
        }
        assert_eq!(got, Some("ok"));
        assert!(slot.is_none());
    }

    #[test]
    fn test_take_ready_on_empty_slot() {
        let mut slot: Option<PendingTask<u8>> = None;
        assert_eq!(take_ready(&mut slot), None);
    }
}
