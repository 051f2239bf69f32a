//! The blog store: queue, reducer, and effect runner in one owner
//!
//! Actions enter through [`BlogStore::dispatch`] (or the intent helpers) and
//! are applied strictly in FIFO order by whoever drives the store with
//! [`BlogStore::step`], [`BlogStore::recv`] + [`BlogStore::apply`], or
//! [`BlogStore::run_until_idle`]. Requests run as spawned tasks that only send
//! result actions back into the same queue.

use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;
use tokio::sync::{mpsc, watch};
use tracing::debug;

use crate::action::BlogAction;
use crate::api::{AddBlogApi, BlogApi, Navigator};
use crate::effect::Effect;
use crate::error::ValidationError;
use crate::middleware::{ComposedMiddleware, LoggingMiddleware, Middleware};
use crate::model::DraftPost;
use crate::reducer::reduce;
use crate::state::BlogState;
use crate::tasks::{TaskKey, TaskManager};

/// How often `run_until_idle` rechecks running tasks while the queue is empty
const IDLE_POLL: Duration = Duration::from_millis(5);

/// State container for blogs, selection, and submission
pub struct BlogStore {
    state: BlogState,
    action_tx: mpsc::UnboundedSender<BlogAction>,
    action_rx: mpsc::UnboundedReceiver<BlogAction>,
    tasks: TaskManager<BlogAction>,
    blog_api: Arc<dyn BlogApi>,
    add_blog_api: Arc<dyn AddBlogApi>,
    navigator: Arc<dyn Navigator>,
    middleware: ComposedMiddleware<BlogAction>,
    snapshot_tx: watch::Sender<Arc<BlogState>>,
}

impl BlogStore {
    /// Create a store with empty state and dispatch logging enabled.
    pub fn new(
        blog_api: Arc<dyn BlogApi>,
        add_blog_api: Arc<dyn AddBlogApi>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        let state = BlogState::default();
        let (snapshot_tx, _) = watch::channel(Arc::new(state.clone()));
        let mut middleware = ComposedMiddleware::new();
        middleware.add(LoggingMiddleware::new());

        Self {
            state,
            tasks: TaskManager::new(action_tx.clone()),
            action_tx,
            action_rx,
            blog_api,
            add_blog_api,
            navigator,
            middleware,
            snapshot_tx,
        }
    }

    /// Add a middleware after the ones already installed.
    pub fn with_middleware<M: Middleware<BlogAction> + 'static>(mut self, middleware: M) -> Self {
        self.middleware.add(middleware);
        self
    }

    // ===== Intents =====

    /// Enqueue an action for the next `step`.
    pub fn dispatch(&self, action: BlogAction) {
        // The receiver lives in `self`, so sending cannot fail
        let _ = self.action_tx.send(action);
    }

    pub fn load_blogs(&self) {
        self.dispatch(BlogAction::BlogsLoad);
    }

    pub fn select_blog(&self, id: i64) {
        self.dispatch(BlogAction::BlogSelect { id });
    }

    /// Submit a draft and drive the queue until that submission settles.
    ///
    /// Actions already queued are applied first. Returns `true` when the
    /// backend accepted the draft; otherwise the message is in
    /// [`BlogState::error`]. A draft sent while another submission is in flight
    /// is ignored and reported as `false` once the earlier one settles.
    pub async fn add_blog(&mut self, draft: DraftPost) -> bool {
        while let Ok(action) = self.action_rx.try_recv() {
            self.apply(action);
        }

        let ours = if self.apply(BlogAction::BlogAdd { draft }) {
            self.state.requests.submission
        } else {
            None
        };

        while self.state.submitting {
            let Some(action) = self.action_rx.recv().await else {
                break;
            };
            let outcome = match &action {
                BlogAction::BlogDidAdd { request } if Some(*request) == ours => Some(true),
                BlogAction::BlogDidAddError { request, .. } if Some(*request) == ours => {
                    Some(false)
                }
                _ => None,
            };
            self.apply(action);
            if let Some(published) = outcome {
                return published;
            }
        }
        false
    }

    /// Submit an untyped JSON draft, e.g. one read from a file.
    ///
    /// The shape is checked with [`DraftPost::from_json`] before anything is
    /// queued, so a malformed draft leaves the store untouched.
    pub async fn add_blog_json(&mut self, raw: &Value) -> Result<bool, ValidationError> {
        let draft = DraftPost::from_json(raw)?;
        Ok(self.add_blog(draft).await)
    }

    // ===== Reads =====

    pub fn state(&self) -> &BlogState {
        &self.state
    }

    /// Immutable copy of the current state
    pub fn snapshot(&self) -> Arc<BlogState> {
        self.snapshot_tx.borrow().clone()
    }

    /// Receiver that sees a new snapshot after every state-changing action
    pub fn subscribe(&self) -> watch::Receiver<Arc<BlogState>> {
        self.snapshot_tx.subscribe()
    }

    /// Sender for producers outside the store, e.g. the UI loop
    pub fn action_tx(&self) -> mpsc::UnboundedSender<BlogAction> {
        self.action_tx.clone()
    }

    /// Whether any request task is still running
    pub fn has_pending_tasks(&self) -> bool {
        self.tasks.has_pending()
    }

    // ===== Driving the queue =====

    /// Wait for the next queued action. Cancel-safe, so it can sit in `tokio::select!`.
    pub async fn recv(&mut self) -> Option<BlogAction> {
        self.action_rx.recv().await
    }

    /// Run one action through middleware and the reducer, then start its effects.
    ///
    /// Returns whether the state changed.
    pub fn apply(&mut self, action: BlogAction) -> bool {
        self.middleware.before(&action);
        let result = reduce(&mut self.state, action.clone());
        self.middleware.after(&action, result.changed);

        if result.changed {
            self.snapshot_tx.send_replace(Arc::new(self.state.clone()));
        }
        for effect in result.effects {
            self.handle_effect(effect);
        }
        result.changed
    }

    /// Wait for and apply the next action.
    pub async fn step(&mut self) -> Option<bool> {
        let action = self.recv().await?;
        Some(self.apply(action))
    }

    /// Apply actions until the queue is empty and no request task is running.
    pub async fn run_until_idle(&mut self) {
        loop {
            while let Ok(action) = self.action_rx.try_recv() {
                self.apply(action);
            }
            if !self.tasks.has_pending() {
                // A task may have finished between the drain and the check
                match self.action_rx.try_recv() {
                    Ok(action) => {
                        self.apply(action);
                        continue;
                    }
                    Err(_) => break,
                }
            }
            // A task that already sent its result may not report finished yet
            tokio::select! {
                action = self.action_rx.recv() => match action {
                    Some(action) => {
                        self.apply(action);
                    }
                    None => break,
                },
                _ = tokio::time::sleep(IDLE_POLL) => {}
            }
        }
    }

    fn handle_effect(&mut self, effect: Effect) {
        match effect {
            Effect::FetchBlogs { request } => {
                let api = Arc::clone(&self.blog_api);
                self.tasks.spawn(TaskKey::BlogList, async move {
                    match api.get_blogs().await {
                        Ok(blogs) => BlogAction::BlogsDidLoad { request, blogs },
                        Err(e) => BlogAction::BlogsDidError {
                            request,
                            error: e.to_string(),
                        },
                    }
                });
            }
            Effect::LoadDetail { id } => {
                self.dispatch(BlogAction::BlogDetailLoad { id });
            }
            Effect::FetchBlogDetail { id, request } => {
                let api = Arc::clone(&self.blog_api);
                self.tasks.spawn(TaskKey::BlogDetail, async move {
                    match api.get_blog_by_id(id).await {
                        Ok(blog) => BlogAction::BlogDetailDidLoad { request, blog },
                        Err(e) => BlogAction::BlogDetailDidError {
                            request,
                            id,
                            error: e.to_string(),
                        },
                    }
                });
            }
            Effect::SubmitBlog { request, draft } => {
                let api = Arc::clone(&self.add_blog_api);
                self.tasks.spawn(TaskKey::Submission, async move {
                    match api.submit(&draft).await {
                        Ok(_) => BlogAction::BlogDidAdd { request },
                        Err(e) => BlogAction::BlogDidAddError {
                            request,
                            error: e.to_string(),
                        },
                    }
                });
            }
            Effect::Navigate(route) => {
                debug!(%route, "Navigating");
                self.navigator.navigate(route);
            }
        }
    }
}

impl std::fmt::Debug for BlogStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BlogStore")
            .field("state", &self.state)
            .field("middleware", &self.middleware)
            .finish_non_exhaustive()
    }
}
