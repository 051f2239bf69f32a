//! Task manager for the store's requests
//!
//! Each request concern runs under its own [`TaskKey`]. Spawning under a key
//! that is still running aborts the older task, so a superseded request stops
//! using the network. The reducer drops stale results independently of this.

use std::collections::HashMap;
use std::future::Future;

use tokio::sync::mpsc;
use tokio::task::AbortHandle;
use tracing::debug;

use crate::action::Action;

/// Request concern a task belongs to
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum TaskKey {
    BlogList,
    BlogDetail,
    Submission,
}

impl TaskKey {
    pub fn name(&self) -> &'static str {
        match self {
            TaskKey::BlogList => "blog_list",
            TaskKey::BlogDetail => "blog_detail",
            TaskKey::Submission => "submission",
        }
    }
}

/// Spawns request futures and sends the action each one resolves to
///
/// # Type Parameters
///
/// - `A`: The action type that tasks produce
pub struct TaskManager<A> {
    tasks: HashMap<TaskKey, AbortHandle>,
    action_tx: mpsc::UnboundedSender<A>,
}

impl<A> TaskManager<A>
where
    A: Action,
{
    /// The `action_tx` channel receives the action of every completed task.
    pub fn new(action_tx: mpsc::UnboundedSender<A>) -> Self {
        Self {
            tasks: HashMap::new(),
            action_tx,
        }
    }

    /// Spawn a task, cancelling any running task with the same key.
    ///
    /// If the task is cancelled before completion, no action is sent.
    pub fn spawn<F>(&mut self, key: TaskKey, future: F) -> &mut Self
    where
        F: Future<Output = A> + Send + 'static,
    {
        self.cancel(key);

        let tx = self.action_tx.clone();
        let handle = tokio::spawn(async move {
            let action = future.await;
            // Receiver gone means the store was dropped
            let _ = tx.send(action);
        });

        debug!(task = key.name(), "Spawned task");
        self.tasks.insert(key, handle.abort_handle());
        self
    }

    /// Cancel a task by key; no-op if none is registered.
    pub fn cancel(&mut self, key: TaskKey) {
        if let Some(handle) = self.tasks.remove(&key) {
            if !handle.is_finished() {
                debug!(task = key.name(), "Aborting superseded task");
                handle.abort();
            }
        }
    }

    /// Whether any spawned task has not finished yet.
    pub fn has_pending(&self) -> bool {
        self.tasks.values().any(|handle| !handle.is_finished())
    }
}

impl<A> Drop for TaskManager<A> {
    fn drop(&mut self) {
        for (_, handle) in self.tasks.drain() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    #[derive(Clone, Debug)]
    enum TestAction {
        Done(usize),
    }

    impl Action for TestAction {
        fn name(&self) -> &'static str {
            "Done"
        }
    }

    #[tokio::test]
    async fn test_spawn_sends_action() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut tasks = TaskManager::new(tx);

        tasks.spawn(TaskKey::BlogList, async { TestAction::Done(42) });

        let action = tokio::time::timeout(Duration::from_millis(100), rx.recv())
            .await
            .expect("timeout")
            .expect("channel closed");

        assert!(matches!(action, TestAction::Done(42)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_spawn_cancels_previous_with_same_key() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut tasks = TaskManager::new(tx);
        let counter = Arc::new(AtomicUsize::new(0));

        let c1 = counter.clone();
        tasks.spawn(TaskKey::BlogList, async move {
            tokio::time::sleep(Duration::from_millis(100)).await;
            c1.fetch_add(1, Ordering::SeqCst);
            TestAction::Done(1)
        });

        let c2 = counter.clone();
        tasks.spawn(TaskKey::BlogList, async move {
            c2.fetch_add(10, Ordering::SeqCst);
            TestAction::Done(2)
        });

        let action = rx.recv().await.expect("channel closed");
        assert!(matches!(action, TestAction::Done(2)));

        tokio::time::sleep(Duration::from_millis(200)).await;
        assert_eq!(counter.load(Ordering::SeqCst), 10);
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_different_keys_run_side_by_side() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut tasks = TaskManager::new(tx);

        tasks.spawn(TaskKey::BlogList, async { TestAction::Done(1) });
        tasks.spawn(TaskKey::BlogDetail, async { TestAction::Done(2) });

        let mut seen = vec![];
        for _ in 0..2 {
            if let Some(TestAction::Done(n)) = rx.recv().await {
                seen.push(n);
            }
        }
        seen.sort();
        assert_eq!(seen, vec![1, 2]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_and_pending() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut tasks = TaskManager::new(tx);

        tasks.spawn(TaskKey::Submission, async {
            tokio::time::sleep(Duration::from_millis(100)).await;
            TestAction::Done(1)
        });
        assert!(tasks.has_pending());

        tasks.cancel(TaskKey::Submission);
        assert!(!tasks.has_pending());

        tokio::time::sleep(Duration::from_millis(150)).await;
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_task_key_names() {
        assert_eq!(TaskKey::BlogList.name(), "blog_list");
        assert_eq!(TaskKey::BlogDetail.name(), "blog_detail");
        assert_eq!(TaskKey::Submission.name(), "submission");
    }
}
