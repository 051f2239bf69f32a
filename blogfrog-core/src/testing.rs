//! Test doubles and assertions for code built on the blog store
//!
//! - [`MockBlogApi`] / [`MockAddBlogApi`]: scripted collaborators with optional delays
//! - [`RecordingNavigator`]: remembers every navigation request
//! - [`ActionRecorder`]: middleware that keeps every dispatched action
//! - [`assert_emitted!`](crate::assert_emitted), [`assert_not_emitted!`](crate::assert_not_emitted),
//!   [`count_emitted!`](crate::count_emitted) for checking recorded actions
//!
//! # Example
//!
//! ```ignore
//! let api = Arc::new(MockBlogApi::new().with_blogs(vec![entry]));
//! let mut store = BlogStore::new(api, Arc::new(MockAddBlogApi::new()), Arc::new(NoopNavigator));
//! store.load_blogs();
//! store.run_until_idle().await;
//! assert_eq!(store.state().blogs(), &[entry]);
//! ```

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::action::Action;
use crate::api::{AddBlogApi, BlogApi, Navigator};
use crate::error::ApiError;
use crate::middleware::Middleware;
use crate::model::{BlogDetailEntry, BlogPreviewEntry, DraftPost};
use crate::route::Route;

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// One canned response
#[derive(Clone, Debug)]
struct Scripted<T> {
    result: Result<T, String>,
    delay: Duration,
}

impl<T: Clone> Scripted<T> {
    async fn play(self) -> Result<T, ApiError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        self.result.map_err(ApiError::Transport)
    }
}

/// Responses are used in order; the last one repeats once the script runs out.
fn next<T: Clone>(script: &mut VecDeque<Scripted<T>>) -> Option<Scripted<T>> {
    if script.len() > 1 {
        script.pop_front()
    } else {
        script.front().cloned()
    }
}

/// Scripted [`BlogApi`]
///
/// Errors are reported as [`ApiError::Transport`] so their message reaches
/// the state verbatim.
#[derive(Debug, Default)]
pub struct MockBlogApi {
    lists: Mutex<VecDeque<Scripted<Vec<BlogPreviewEntry>>>>,
    details: Mutex<HashMap<i64, VecDeque<Scripted<BlogDetailEntry>>>>,
    list_calls: Mutex<usize>,
    detail_calls: Mutex<Vec<i64>>,
}

impl MockBlogApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_blogs(self, blogs: Vec<BlogPreviewEntry>) -> Self {
        self.with_blogs_after(blogs, Duration::ZERO)
    }

    pub fn with_blogs_after(self, blogs: Vec<BlogPreviewEntry>, delay: Duration) -> Self {
        lock(&self.lists).push_back(Scripted {
            result: Ok(blogs),
            delay,
        });
        self
    }

    pub fn with_list_error(self, message: impl Into<String>) -> Self {
        lock(&self.lists).push_back(Scripted {
            result: Err(message.into()),
            delay: Duration::ZERO,
        });
        self
    }

    pub fn with_detail(self, blog: BlogDetailEntry) -> Self {
        self.with_detail_after(blog, Duration::ZERO)
    }

    pub fn with_detail_after(self, blog: BlogDetailEntry, delay: Duration) -> Self {
        lock(&self.details)
            .entry(blog.id)
            .or_default()
            .push_back(Scripted {
                result: Ok(blog),
                delay,
            });
        self
    }

    pub fn with_detail_error(self, id: i64, message: impl Into<String>) -> Self {
        lock(&self.details).entry(id).or_default().push_back(Scripted {
            result: Err(message.into()),
            delay: Duration::ZERO,
        });
        self
    }

    /// How often `get_blogs` was called
    pub fn list_calls(&self) -> usize {
        *lock(&self.list_calls)
    }

    /// Ids passed to `get_blog_by_id`, in call order
    pub fn detail_calls(&self) -> Vec<i64> {
        lock(&self.detail_calls).clone()
    }
}

#[async_trait]
impl BlogApi for MockBlogApi {
    async fn get_blogs(&self) -> Result<Vec<BlogPreviewEntry>, ApiError> {
        *lock(&self.list_calls) += 1;
        let scripted = next(&mut lock(&self.lists));
        match scripted {
            Some(scripted) => scripted.play().await,
            None => Ok(Vec::new()),
        }
    }

    async fn get_blog_by_id(&self, id: i64) -> Result<BlogDetailEntry, ApiError> {
        lock(&self.detail_calls).push(id);
        let scripted = lock(&self.details).get_mut(&id).and_then(next);
        match scripted {
            Some(scripted) => scripted.play().await,
            None => Err(ApiError::Transport(format!("blog {id} not found"))),
        }
    }
}

/// Scripted [`AddBlogApi`]
///
/// Only `create` is scripted; validation runs through the trait's `submit`.
/// Without a script every create succeeds.
#[derive(Debug, Default)]
pub struct MockAddBlogApi {
    responses: Mutex<VecDeque<Scripted<Value>>>,
    created: Mutex<Vec<DraftPost>>,
}

impl MockAddBlogApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_success_after(self, delay: Duration) -> Self {
        lock(&self.responses).push_back(Scripted {
            result: Ok(json!({ "status": "created" })),
            delay,
        });
        self
    }

    pub fn with_error(self, message: impl Into<String>) -> Self {
        lock(&self.responses).push_back(Scripted {
            result: Err(message.into()),
            delay: Duration::ZERO,
        });
        self
    }

    /// Drafts that reached `create`, in call order
    pub fn created(&self) -> Vec<DraftPost> {
        lock(&self.created).clone()
    }

    pub fn create_calls(&self) -> usize {
        lock(&self.created).len()
    }
}

#[async_trait]
impl AddBlogApi for MockAddBlogApi {
    async fn create(&self, draft: &DraftPost) -> Result<Value, ApiError> {
        lock(&self.created).push(draft.clone());
        let scripted = next(&mut lock(&self.responses));
        match scripted {
            Some(scripted) => scripted.play().await,
            None => Ok(json!({ "status": "created" })),
        }
    }
}

/// [`Navigator`] that records every requested route
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    routes: Mutex<Vec<Route>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn routes(&self) -> Vec<Route> {
        lock(&self.routes).clone()
    }

    pub fn count(&self) -> usize {
        lock(&self.routes).len()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: Route) {
        lock(&self.routes).push(route);
    }
}

/// Middleware that keeps a copy of every action that reaches the reducer
///
/// Clones share the same log, so keep one clone and install the other.
pub struct ActionRecorder<A> {
    actions: Arc<Mutex<Vec<A>>>,
}

impl<A> Clone for ActionRecorder<A> {
    fn clone(&self) -> Self {
        Self {
            actions: Arc::clone(&self.actions),
        }
    }
}

impl<A> Default for ActionRecorder<A> {
    fn default() -> Self {
        Self {
            actions: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl<A: Action> ActionRecorder<A> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn actions(&self) -> Vec<A> {
        lock(&self.actions).clone()
    }

    pub fn clear(&self) {
        lock(&self.actions).clear();
    }
}

impl<A: Action> Middleware<A> for ActionRecorder<A> {
    fn before(&mut self, action: &A) {
        lock(&self.actions).push(action.clone());
    }

    fn after(&mut self, _action: &A, _state_changed: bool) {}
}

/// Assert that an action matching a pattern was emitted.
///
/// # Example
///
/// ```ignore
/// let actions = recorder.actions();
/// assert_emitted!(actions, BlogAction::BlogDetailLoad { id: 5 });
/// ```
#[macro_export]
macro_rules! assert_emitted {
    ($actions:expr, $pattern:pat $(if $guard:expr)?) => {
        assert!(
            $actions.iter().any(|a| matches!(a, $pattern $(if $guard)?)),
            "Expected action matching `{}` to be emitted, but got: {:?}",
            stringify!($pattern),
            $actions
        );
    };
}

/// Assert that no action matching a pattern was emitted.
#[macro_export]
macro_rules! assert_not_emitted {
    ($actions:expr, $pattern:pat $(if $guard:expr)?) => {
        assert!(
            !$actions.iter().any(|a| matches!(a, $pattern $(if $guard)?)),
            "Expected action matching `{}` NOT to be emitted, but it was: {:?}",
            stringify!($pattern),
            $actions
        );
    };
}

/// Count how many actions match a pattern.
#[macro_export]
macro_rules! count_emitted {
    ($actions:expr, $pattern:pat $(if $guard:expr)?) => {
        $actions.iter().filter(|a| matches!(a, $pattern $(if $guard)?)).count()
    };
}
