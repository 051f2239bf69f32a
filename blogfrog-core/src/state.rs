//! Store state - single source of truth for blog data
//!
//! Views only ever see `&BlogState` or an `Arc<BlogState>` snapshot; the
//! reducer is the only code that mutates it.

use crate::action::RequestId;
use crate::model::{BlogDetailEntry, BlogPreviewEntry};

/// Everything the views need to render blog data
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BlogState {
    /// Previews from the last successful list load
    pub blogs: Vec<BlogPreviewEntry>,

    /// Blog the user selected last
    pub selected_id: Option<i64>,

    /// Detail for `selected_id`, once loaded
    pub selected: Option<BlogDetailEntry>,

    /// A list or detail request from the latest intent is outstanding
    pub loading: bool,

    /// A new post is being submitted
    pub submitting: bool,

    /// Message of the last failed request
    pub error: Option<String>,

    pub(crate) requests: PendingRequests,
}

/// Which intent `loading` reports on
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum LoadIntent {
    List,
    Detail,
}

/// In-flight request ids per concern; results with any other id are stale
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct PendingRequests {
    last_issued: u64,
    pub(crate) blogs: Option<RequestId>,
    pub(crate) detail: Option<RequestId>,
    pub(crate) submission: Option<RequestId>,
    /// Latest list or select intent
    pub(crate) latest: Option<LoadIntent>,
    /// The current selection has no settled detail result yet
    pub(crate) detail_open: bool,
}

impl PendingRequests {
    pub(crate) fn issue(&mut self) -> RequestId {
        self.last_issued += 1;
        RequestId(self.last_issued)
    }

    /// Whether the latest list or select intent is still waiting for its result
    pub(crate) fn latest_outstanding(&self) -> bool {
        match self.latest {
            Some(LoadIntent::List) => self.blogs.is_some(),
            Some(LoadIntent::Detail) => self.detail_open,
            None => false,
        }
    }
}

impl BlogState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn blogs(&self) -> &[BlogPreviewEntry] {
        &self.blogs
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn submitting(&self) -> bool {
        self.submitting
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn selected(&self) -> Option<&BlogDetailEntry> {
        self.selected.as_ref()
    }

    pub fn selected_id(&self) -> Option<i64> {
        self.selected_id
    }

    /// Whether a list, detail or submission request is in flight
    pub fn has_pending_requests(&self) -> bool {
        self.requests.blogs.is_some()
            || self.requests.detail.is_some()
            || self.requests.submission.is_some()
    }
}
