//! Delayed task scheduling
//!
//! Runs a one-shot task after a delay on a spawned tokio task. The task
//! can be cancelled while it is still waiting, and the outcome (success,
//! failure, cancellation) is reported through the join handle and the
//! logger.

use crate::errors::{LockBotError, ScheduleError};
use crate::logger::{self, LogTag};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Notify;
use tokio::task::JoinHandle;

/// Handle to a task scheduled to run once after a delay
pub struct ScheduledTask {
    name: String,
    cancel: Arc<Notify>,
    handle: JoinHandle<Result<(), ScheduleError>>,
}

/// Schedule `task` to run once after `delay`. The returned handle can
/// cancel the task while it is still waiting, and joining it yields the
/// task's outcome.
pub fn schedule<F, Fut>(name: &str, delay: Duration, task: F) -> ScheduledTask
where
    F: FnOnce() -> Fut + Send + 'static,
    Fut: Future<Output = Result<(), LockBotError>> + Send + 'static,
{
    let cancel = Arc::new(Notify::new());
    let cancel_inner = cancel.clone();
    let task_name = name.to_string();

    logger::info(
        LogTag::Scheduler,
        &format!("Scheduled '{}' in {}s", name, delay.as_secs_f64()),
    );

    let inner_name = task_name.clone();
    let handle = tokio::spawn(async move {
        tokio::select! {
            _ = tokio::time::sleep(delay) => {}
            _ = cancel_inner.notified() => {
                logger::warning(
                    LogTag::Scheduler,
                    &format!("'{}' cancelled before firing", inner_name),
                );
                return Err(ScheduleError::Cancelled);
            }
        }

        logger::info(LogTag::Scheduler, &format!("'{}' firing", inner_name));
        match task().await {
            Ok(()) => {
                logger::info(LogTag::Scheduler, &format!("'{}' completed", inner_name));
                Ok(())
            }
            Err(e) => {
                logger::error(
                    LogTag::Scheduler,
                    &format!("'{}' failed: {}", inner_name, e),
                );
                Err(ScheduleError::TaskFailed {
                    message: e.to_string(),
                })
            }
        }
    });

    ScheduledTask {
        name: task_name,
        cancel,
        handle,
    }
}

impl ScheduledTask {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Cancel the task if it has not fired yet. A task already running
    /// is not interrupted.
    pub fn cancel(&self) {
        self.cancel.notify_one();
    }

    /// Wait for the task's outcome
    pub async fn join(self) -> Result<(), ScheduleError> {
        match self.handle.await {
            Ok(result) => result,
            Err(e) => Err(ScheduleError::JoinFailed {
                message: e.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::TransactionError;
    use std::sync::atomic::{AtomicBool, Ordering};

    #[tokio::test]
    async fn test_task_fires_after_delay() {
        let fired = Arc::new(AtomicBool::new(false));
        let fired_inner = fired.clone();

        let task = schedule("fire-test", Duration::from_millis(10), move || async move {
            fired_inner.store(true, Ordering::SeqCst);
            Ok(())
        });

        assert!(task.join().await.is_ok());
        assert!(fired.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn test_cancel_before_fire() {
        let fired = Arc::new(AtomicBool::new(false));
        let fired_inner = fired.clone();

        let task = schedule("cancel-test", Duration::from_secs(60), move || async move {
            fired_inner.store(true, Ordering::SeqCst);
            Ok(())
        });

        task.cancel();
        match task.join().await {
            Err(ScheduleError::Cancelled) => {}
            other => panic!("expected Cancelled, got {:?}", other),
        }
        assert!(!fired.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn test_failure_is_reported() {
        let task = schedule("fail-test", Duration::from_millis(5), || async {
            Err(LockBotError::Transaction(TransactionError::SubmitFailed {
                instruction: "burn_tokens".to_string(),
                message: "boom".to_string(),
            }))
        });

        match task.join().await {
            Err(ScheduleError::TaskFailed { message }) => {
                assert!(message.contains("burn_tokens"));
            }
            other => panic!("expected TaskFailed, got {:?}", other),
        }
    }
}
