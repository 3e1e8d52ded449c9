//! Cancellable one-shot timer.

use std::future::Future;
use std::time::Duration;

use tokio::task::JoinHandle;

/// A delayed task owned by whoever scheduled it.
///
/// Scheduling again or dropping the handle cancels the previous task.
/// Must be used from within a Tokio runtime.
#[derive(Debug, Default)]
pub struct Deferred {
    handle: Option<JoinHandle<()>>,
}

impl Deferred {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `task` after `delay`, cancelling anything already scheduled.
    pub fn schedule<F>(&mut self, delay: Duration, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.cancel();
        self.handle = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            task.await;
        }));
    }

    /// Abort the scheduled task. Returns whether one was still pending.
    pub fn cancel(&mut self) -> bool {
        match self.handle.take() {
            Some(handle) => {
                let pending = !handle.is_finished();
                handle.abort();
                pending
            }
            None => false,
        }
    }

    /// Forget the task without aborting it.
    ///
    /// The running task calls this on its own owner so that a later
    /// [`cancel`](Self::cancel) cannot abort it mid-flight.
    pub fn release(&mut self) {
        self.handle = None;
    }

    pub fn is_pending(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl Drop for Deferred {
    fn drop(&mut self) {
        self.cancel();
    }
}
