//! Effects - side effects declared by the reducer
//!
//! The reducer never performs I/O. It returns [`DispatchResult`] describing
//! whether state changed and which effects the store must run afterwards.

use crate::action::RequestId;
use crate::model::DraftPost;
use crate::route::Route;

/// Side effects the blog reducer can request
#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    /// Fetch all previews from the list collaborator
    FetchBlogs { request: RequestId },
    /// Enqueue the follow-up `BlogDetailLoad` for a selection
    LoadDetail { id: i64 },
    /// Fetch one blog from the detail collaborator
    FetchBlogDetail { id: i64, request: RequestId },
    /// Validate and send a draft through the create collaborator
    SubmitBlog { request: RequestId, draft: DraftPost },
    /// Ask the navigation collaborator to switch pages
    Navigate(Route),
}

/// Result of running one action through a reducer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchResult<E> {
    /// Whether the state was modified by this action.
    pub changed: bool,
    /// Effects to be processed after dispatch.
    pub effects: Vec<E>,
}

impl<E> Default for DispatchResult<E> {
    fn default() -> Self {
        Self::unchanged()
    }
}

impl<E> DispatchResult<E> {
    #[inline]
    pub fn unchanged() -> Self {
        Self {
            changed: false,
            effects: vec![],
        }
    }

    #[inline]
    pub fn changed() -> Self {
        Self {
            changed: true,
            effects: vec![],
        }
    }

    /// No state change, one effect
    #[inline]
    pub fn effect(effect: E) -> Self {
        Self {
            changed: false,
            effects: vec![effect],
        }
    }

    #[inline]
    pub fn changed_with(effect: E) -> Self {
        Self {
            changed: true,
            effects: vec![effect],
        }
    }
}
