//! Blog store and REST client for BlogFrog
//!
//! The store follows a Redux/Elm-inspired layout:
//!
//! - **Action** ([`BlogAction`]): intents such as `BlogsLoad` and the `Did*`
//!   results their requests produce
//! - **Reducer** ([`reduce`]): the only code that mutates [`BlogState`]; it performs
//!   no I/O and returns the [`Effect`]s to run
//! - **Store** ([`BlogStore`]): owns state and the FIFO action queue, runs effects
//!   as keyed tasks, and publishes immutable snapshots
//! - **Collaborators** ([`BlogApi`], [`AddBlogApi`], [`Navigator`]): the backend and
//!   the view, behind traits so tests can script them
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use blogfrog_core::{BlogStore, ClientConfig, HttpBlogApi, NoopNavigator};
//!
//! let api = Arc::new(HttpBlogApi::new(ClientConfig::default())?);
//! let mut store = BlogStore::new(api.clone(), api, Arc::new(NoopNavigator));
//!
//! store.load_blogs();
//! store.run_until_idle().await;
//! for blog in store.state().blogs() {
//!     println!("{}: {}", blog.id, blog.title);
//! }
//! ```
//!
//! # Supersede semantics
//!
//! Every list, detail, and submission request gets a [`RequestId`]. The reducer
//! remembers the latest id per concern and drops results carrying any other id,
//! so only the most recent `BlogsLoad` or `BlogSelect` ever lands in state.
//! The task manager additionally aborts superseded requests.

pub mod action;
pub mod api;
pub mod config;
pub mod effect;
pub mod error;
pub mod http;
pub mod middleware;
pub mod model;
pub mod reducer;
pub mod route;
pub mod state;
pub mod store;
pub mod tasks;
pub mod testing;

pub use action::{Action, BlogAction, RequestId};
pub use api::{AddBlogApi, BlogApi, Navigator, NoopNavigator};
pub use config::ClientConfig;
pub use effect::{DispatchResult, Effect};
pub use error::{ApiError, ValidationError};
pub use http::HttpBlogApi;
pub use middleware::{ComposedMiddleware, LoggingMiddleware, Middleware};
pub use model::{BlogDetailEntry, BlogPreviewEntry, DraftPost};
pub use reducer::reduce;
pub use route::{Route, UnknownRoute};
pub use state::BlogState;
pub use store::BlogStore;
pub use tasks::{TaskKey, TaskManager};
