//! Actions for the blog store
//!
//! Naming follows the intent/result convention:
//! - Prefix determines category: `BlogsLoad`, `BlogsDidLoad` -> "blogs"
//! - `Did` marks the result of an async request
//! - Result actions carry the [`RequestId`] of the request that produced them,
//!   so the reducer can drop superseded results

use std::fmt::Debug;

use crate::model::{BlogDetailEntry, BlogPreviewEntry, DraftPost};

/// Something that can be dispatched to a reducer and logged
///
/// - Clone: actions may be logged or recorded by middleware
/// - Send + 'static: result actions are produced on spawned tasks
pub trait Action: Clone + Debug + Send + 'static {
    /// Action name for logging and filtering
    fn name(&self) -> &'static str;

    /// Concern the action belongs to, e.g. `"blogs"`
    fn category(&self) -> Option<&'static str> {
        None
    }

    /// Concise one-line description; defaults to the `Debug` output
    fn summary(&self) -> String {
        format!("{:?}", self)
    }
}

/// Identifies one request issued by the store
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestId(pub u64);

/// Blog store actions
///
/// # Categories
/// - `blogs`: BlogsLoad, BlogsDidLoad, BlogsDidError
/// - `blog_detail`: BlogSelect, BlogDetailLoad, BlogDetailDidLoad, BlogDetailDidError
/// - `blog_add`: BlogAdd, BlogDidAdd, BlogDidAddError
#[derive(Clone, Debug, PartialEq)]
pub enum BlogAction {
    /// Intent: load all blog previews
    BlogsLoad,
    BlogsDidLoad {
        request: RequestId,
        blogs: Vec<BlogPreviewEntry>,
    },
    BlogsDidError {
        request: RequestId,
        error: String,
    },

    /// Intent: select one blog; always followed by `BlogDetailLoad` for the same id
    BlogSelect { id: i64 },
    BlogDetailLoad { id: i64 },
    BlogDetailDidLoad {
        request: RequestId,
        blog: BlogDetailEntry,
    },
    BlogDetailDidError {
        request: RequestId,
        id: i64,
        error: String,
    },

    /// Intent: publish a new post
    BlogAdd { draft: DraftPost },
    BlogDidAdd { request: RequestId },
    BlogDidAddError { request: RequestId, error: String },
}

impl Action for BlogAction {
    fn name(&self) -> &'static str {
        match self {
            BlogAction::BlogsLoad => "BlogsLoad",
            BlogAction::BlogsDidLoad { .. } => "BlogsDidLoad",
            BlogAction::BlogsDidError { .. } => "BlogsDidError",
            BlogAction::BlogSelect { .. } => "BlogSelect",
            BlogAction::BlogDetailLoad { .. } => "BlogDetailLoad",
            BlogAction::BlogDetailDidLoad { .. } => "BlogDetailDidLoad",
            BlogAction::BlogDetailDidError { .. } => "BlogDetailDidError",
            BlogAction::BlogAdd { .. } => "BlogAdd",
            BlogAction::BlogDidAdd { .. } => "BlogDidAdd",
            BlogAction::BlogDidAddError { .. } => "BlogDidAddError",
        }
    }

    fn category(&self) -> Option<&'static str> {
        match self {
            BlogAction::BlogsLoad
            | BlogAction::BlogsDidLoad { .. }
            | BlogAction::BlogsDidError { .. } => Some("blogs"),
            BlogAction::BlogSelect { .. }
            | BlogAction::BlogDetailLoad { .. }
            | BlogAction::BlogDetailDidLoad { .. }
            | BlogAction::BlogDetailDidError { .. } => Some("blog_detail"),
            BlogAction::BlogAdd { .. }
            | BlogAction::BlogDidAdd { .. }
            | BlogAction::BlogDidAddError { .. } => Some("blog_add"),
        }
    }

    fn summary(&self) -> String {
        match self {
            // Entry counts instead of full payloads
            BlogAction::BlogsDidLoad { request, blogs } => {
                format!("BlogsDidLoad {{ request: {}, count: {} }}", request.0, blogs.len())
            }
            BlogAction::BlogDetailDidLoad { request, blog } => {
                format!(
                    "BlogDetailDidLoad {{ request: {}, id: {} }}",
                    request.0, blog.id
                )
            }
            BlogAction::BlogAdd { draft } => {
                format!("BlogAdd {{ title: {:?} }}", truncate(&draft.title, 40))
            }
            BlogAction::BlogsDidError { error, .. }
            | BlogAction::BlogDetailDidError { error, .. }
            | BlogAction::BlogDidAddError { error, .. } => {
                format!("{}({:?})", self.name(), truncate(error, 40))
            }
            _ => format!("{:?}", self),
        }
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() > max {
        format!("{}...", s.chars().take(max - 3).collect::<String>())
    } else {
        s.to_string()
    }
}
