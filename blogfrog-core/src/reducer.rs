//! Reducer - (state, action) -> state plus effects
//!
//! All state transitions happen here. The reducer performs no I/O: requests
//! are described as [`Effect`]s and their outcomes come back as `Did*` actions.
//! Results whose request id is no longer the pending one are dropped, which is
//! what gives list loads and selections their latest-wins behaviour.

use tracing::debug;

use crate::action::{BlogAction, RequestId};
use crate::effect::{DispatchResult, Effect};
use crate::route::Route;
use crate::state::{BlogState, LoadIntent};

/// Apply one action to the blog state
///
/// Returns whether the state changed and the effects the store must run.
pub fn reduce(state: &mut BlogState, action: BlogAction) -> DispatchResult<Effect> {
    match action {
        // ===== List =====
        BlogAction::BlogsLoad => {
            let request = state.requests.issue();
            state.requests.blogs = Some(request);
            state.requests.latest = Some(LoadIntent::List);
            state.loading = true;
            state.error = None;
            DispatchResult::changed_with(Effect::FetchBlogs { request })
        }

        BlogAction::BlogsDidLoad { request, blogs } => {
            if !settle(&mut state.requests.blogs, request) {
                return stale("BlogsDidLoad", request);
            }
            // Replaced wholesale, never merged
            state.blogs = blogs;
            // A selection made after this load keeps the flag up
            state.loading = state.requests.latest_outstanding();
            state.error = None;
            DispatchResult::changed()
        }

        BlogAction::BlogsDidError { request, error } => {
            if !settle(&mut state.requests.blogs, request) {
                return stale("BlogsDidError", request);
            }
            // Previous blogs stay visible
            state.loading = false;
            state.error = Some(error);
            DispatchResult::changed()
        }

        // ===== Detail =====
        BlogAction::BlogSelect { id } => {
            state.selected_id = Some(id);
            state.selected = None;
            state.requests.detail = None;
            state.requests.latest = Some(LoadIntent::Detail);
            state.requests.detail_open = true;
            state.error = None;
            state.loading = true;
            DispatchResult::changed_with(Effect::LoadDetail { id })
        }

        BlogAction::BlogDetailLoad { id } => {
            if state.selected_id != Some(id) {
                debug!(id, selected_id = ?state.selected_id, "Dropping detail load for superseded selection");
                return DispatchResult::unchanged();
            }
            let request = state.requests.issue();
            state.requests.detail = Some(request);
            state.loading = true;
            state.error = None;
            DispatchResult::changed_with(Effect::FetchBlogDetail { id, request })
        }

        BlogAction::BlogDetailDidLoad { request, blog } => {
            if !settle(&mut state.requests.detail, request) {
                return stale("BlogDetailDidLoad", request);
            }
            state.requests.detail_open = false;
            state.loading = state.requests.latest_outstanding();
            if state.selected_id == Some(blog.id) {
                state.selected = Some(blog);
            } else {
                state.error = Some(format!(
                    "backend returned blog {} for a request of blog {}",
                    blog.id,
                    state.selected_id.unwrap_or_default()
                ));
            }
            DispatchResult::changed()
        }

        BlogAction::BlogDetailDidError { request, id, error } => {
            if state.selected_id != Some(id) || !settle(&mut state.requests.detail, request) {
                return stale("BlogDetailDidError", request);
            }
            state.requests.detail_open = false;
            state.loading = false;
            state.error = Some(error);
            DispatchResult::changed()
        }

        // ===== Submission =====
        BlogAction::BlogAdd { draft } => {
            if state.submitting {
                debug!("Ignoring BlogAdd while a submission is in flight");
                return DispatchResult::unchanged();
            }
            let request = state.requests.issue();
            state.requests.submission = Some(request);
            state.submitting = true;
            state.error = None;
            DispatchResult::changed_with(Effect::SubmitBlog { request, draft })
        }

        BlogAction::BlogDidAdd { request } => {
            if !settle(&mut state.requests.submission, request) {
                return stale("BlogDidAdd", request);
            }
            state.submitting = false;
            DispatchResult::changed_with(Effect::Navigate(Route::Overview))
        }

        BlogAction::BlogDidAddError { request, error } => {
            if !settle(&mut state.requests.submission, request) {
                return stale("BlogDidAddError", request);
            }
            state.submitting = false;
            state.error = Some(error);
            DispatchResult::changed()
        }
    }
}

/// Clear the pending slot if `request` is the one it holds
fn settle(pending: &mut Option<RequestId>, request: RequestId) -> bool {
    if *pending == Some(request) {
        *pending = None;
        true
    } else {
        false
    }
}

fn stale(action: &'static str, request: RequestId) -> DispatchResult<Effect> {
    debug!(action, request = request.0, "Dropping superseded result");
    DispatchResult::unchanged()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BlogDetailEntry, BlogPreviewEntry, DraftPost};

    fn preview(id: i64, title: &str) -> BlogPreviewEntry {
        BlogPreviewEntry {
            id,
            title: title.into(),
            content_preview: "..".into(),
            header_image_url: None,
        }
    }

    fn detail(id: i64) -> BlogDetailEntry {
        BlogDetailEntry {
            id,
            title: "T".into(),
            content: "C".into(),
            header_image_url: None,
        }
    }

    fn fetch_request(result: &DispatchResult<Effect>) -> RequestId {
        match result.effects.as_slice() {
            [Effect::FetchBlogs { request }] => *request,
            [Effect::FetchBlogDetail { request, .. }] => *request,
            [Effect::SubmitBlog { request, .. }] => *request,
            other => panic!("expected a single request effect, got {:?}", other),
        }
    }

    #[test]
    fn test_blogs_load_sets_loading_and_clears_error() {
        let mut state = BlogState {
            error: Some("old".into()),
            ..Default::default()
        };

        let result = reduce(&mut state, BlogAction::BlogsLoad);

        assert!(result.changed);
        assert!(state.loading);
        assert_eq!(state.error, None);
        assert!(matches!(result.effects[..], [Effect::FetchBlogs { .. }]));
    }

    #[test]
    fn test_blogs_did_load_replaces_list() {
        let mut state = BlogState {
            blogs: vec![preview(9, "old")],
            ..Default::default()
        };
        let request = fetch_request(&reduce(&mut state, BlogAction::BlogsLoad));

        let result = reduce(
            &mut state,
            BlogAction::BlogsDidLoad {
                request,
                blogs: vec![preview(1, "A")],
            },
        );

        assert!(result.changed);
        assert!(!state.loading);
        assert_eq!(state.blogs, vec![preview(1, "A")]);
    }

    #[test]
    fn test_blogs_did_error_keeps_stale_list() {
        let mut state = BlogState {
            blogs: vec![preview(1, "A")],
            ..Default::default()
        };
        let request = fetch_request(&reduce(&mut state, BlogAction::BlogsLoad));

        reduce(
            &mut state,
            BlogAction::BlogsDidError {
                request,
                error: "network down".into(),
            },
        );

        assert!(!state.loading);
        assert_eq!(state.error(), Some("network down"));
        assert_eq!(state.blogs, vec![preview(1, "A")]);
    }

    #[test]
    fn test_superseded_list_result_is_dropped() {
        let mut state = BlogState::default();
        let first = fetch_request(&reduce(&mut state, BlogAction::BlogsLoad));
        let second = fetch_request(&reduce(&mut state, BlogAction::BlogsLoad));
        assert_ne!(first, second);

        let result = reduce(
            &mut state,
            BlogAction::BlogsDidLoad {
                request: first,
                blogs: vec![preview(1, "stale")],
            },
        );
        assert!(!result.changed);
        assert!(state.loading, "latest request is still outstanding");
        assert!(state.blogs.is_empty());

        reduce(
            &mut state,
            BlogAction::BlogsDidLoad {
                request: second,
                blogs: vec![preview(2, "fresh")],
            },
        );
        assert!(!state.loading);
        assert_eq!(state.blogs, vec![preview(2, "fresh")]);
    }

    #[test]
    fn test_select_clears_previous_detail_and_chains_load() {
        let mut state = BlogState {
            selected_id: Some(1),
            selected: Some(detail(1)),
            error: Some("old".into()),
            ..Default::default()
        };

        let result = reduce(&mut state, BlogAction::BlogSelect { id: 5 });

        assert!(result.changed);
        assert_eq!(state.selected_id, Some(5));
        assert_eq!(state.selected, None);
        assert_eq!(state.error, None);
        assert!(state.loading);
        assert_eq!(result.effects, vec![Effect::LoadDetail { id: 5 }]);
    }

    #[test]
    fn test_detail_round_trip() {
        let mut state = BlogState::default();
        reduce(&mut state, BlogAction::BlogSelect { id: 5 });
        let request = fetch_request(&reduce(&mut state, BlogAction::BlogDetailLoad { id: 5 }));

        reduce(
            &mut state,
            BlogAction::BlogDetailDidLoad {
                request,
                blog: detail(5),
            },
        );

        assert_eq!(state.selected(), Some(&detail(5)));
        assert!(!state.loading);
        assert_eq!(state.error, None);
    }

    #[test]
    fn test_detail_load_for_superseded_selection_is_ignored() {
        let mut state = BlogState::default();
        reduce(&mut state, BlogAction::BlogSelect { id: 5 });
        reduce(&mut state, BlogAction::BlogSelect { id: 7 });

        let result = reduce(&mut state, BlogAction::BlogDetailLoad { id: 5 });

        assert!(!result.changed);
        assert!(result.effects.is_empty());
    }

    #[test]
    fn test_detail_result_after_reselect_is_dropped() {
        let mut state = BlogState::default();
        reduce(&mut state, BlogAction::BlogSelect { id: 5 });
        let request = fetch_request(&reduce(&mut state, BlogAction::BlogDetailLoad { id: 5 }));
        reduce(&mut state, BlogAction::BlogSelect { id: 7 });

        let result = reduce(
            &mut state,
            BlogAction::BlogDetailDidLoad {
                request,
                blog: detail(5),
            },
        );

        assert!(!result.changed);
        assert_eq!(state.selected, None);
        assert_eq!(state.selected_id, Some(7));
    }

    #[test]
    fn test_detail_error_leaves_selected_empty() {
        let mut state = BlogState::default();
        reduce(&mut state, BlogAction::BlogSelect { id: 5 });
        let request = fetch_request(&reduce(&mut state, BlogAction::BlogDetailLoad { id: 5 }));

        reduce(
            &mut state,
            BlogAction::BlogDetailDidError {
                request,
                id: 5,
                error: "404 Not Found".into(),
            },
        );

        assert!(!state.loading);
        assert_eq!(state.selected, None);
        assert_eq!(state.error(), Some("404 Not Found"));
    }

    #[test]
    fn test_mismatched_detail_id_is_reported() {
        let mut state = BlogState::default();
        reduce(&mut state, BlogAction::BlogSelect { id: 5 });
        let request = fetch_request(&reduce(&mut state, BlogAction::BlogDetailLoad { id: 5 }));

        reduce(
            &mut state,
            BlogAction::BlogDetailDidLoad {
                request,
                blog: detail(6),
            },
        );

        assert_eq!(state.selected, None);
        assert!(!state.loading);
        assert!(state.error.is_some());
    }

    #[test]
    fn test_add_sets_submitting_and_navigates_on_success() {
        let mut state = BlogState {
            error: Some("old".into()),
            ..Default::default()
        };
        let draft = DraftPost::new("Hi", "body");

        let result = reduce(
            &mut state,
            BlogAction::BlogAdd {
                draft: draft.clone(),
            },
        );
        assert!(state.submitting);
        assert_eq!(state.error, None);
        let request = fetch_request(&result);
        assert_eq!(result.effects, vec![Effect::SubmitBlog { request, draft }]);

        let result = reduce(&mut state, BlogAction::BlogDidAdd { request });
        assert!(!state.submitting);
        assert_eq!(result.effects, vec![Effect::Navigate(Route::Overview)]);
    }

    #[test]
    fn test_add_failure_keeps_error_without_navigation() {
        let mut state = BlogState::default();
        let request = fetch_request(&reduce(
            &mut state,
            BlogAction::BlogAdd {
                draft: DraftPost::new("", "x"),
            },
        ));

        let result = reduce(
            &mut state,
            BlogAction::BlogDidAddError {
                request,
                error: "validation failed: title is required".into(),
            },
        );

        assert!(!state.submitting);
        assert!(result.effects.is_empty());
        assert_eq!(state.error(), Some("validation failed: title is required"));
    }

    #[test]
    fn test_add_ignored_while_submitting() {
        let mut state = BlogState::default();
        reduce(
            &mut state,
            BlogAction::BlogAdd {
                draft: DraftPost::new("Hi", "one"),
            },
        );

        let result = reduce(
            &mut state,
            BlogAction::BlogAdd {
                draft: DraftPost::new("Hi", "two"),
            },
        );

        assert!(!result.changed);
        assert!(result.effects.is_empty());
    }

    #[test]
    fn test_reducer_is_deterministic() {
        let mut base = BlogState::default();
        reduce(&mut base, BlogAction::BlogsLoad);
        reduce(&mut base, BlogAction::BlogSelect { id: 3 });

        let actions = vec![
            BlogAction::BlogsLoad,
            BlogAction::BlogDetailLoad { id: 3 },
            BlogAction::BlogsDidError {
                request: RequestId(1),
                error: "x".into(),
            },
            BlogAction::BlogAdd {
                draft: DraftPost::new("Hi", "body"),
            },
        ];

        for action in actions {
            let mut a = base.clone();
            let mut b = base.clone();
            let ra = reduce(&mut a, action.clone());
            let rb = reduce(&mut b, action);
            assert_eq!(a, b);
            assert_eq!(ra, rb);
        }
    }

    #[test]
    fn test_failure_actions_always_clear_loading() {
        let mut state = BlogState::default();
        let list = fetch_request(&reduce(&mut state, BlogAction::BlogsLoad));
        reduce(&mut state, BlogAction::BlogSelect { id: 2 });
        let detail_request =
            fetch_request(&reduce(&mut state, BlogAction::BlogDetailLoad { id: 2 }));

        reduce(
            &mut state,
            BlogAction::BlogsDidError {
                request: list,
                error: "a".into(),
            },
        );
        assert!(!state.loading);

        reduce(
            &mut state,
            BlogAction::BlogDetailDidError {
                request: detail_request,
                id: 2,
                error: "b".into(),
            },
        );
        assert!(!state.loading);
    }

    #[test]
    fn test_list_result_keeps_loading_for_later_selection() {
        let mut state = BlogState::default();
        let list = fetch_request(&reduce(&mut state, BlogAction::BlogsLoad));
        reduce(&mut state, BlogAction::BlogSelect { id: 1 });

        reduce(
            &mut state,
            BlogAction::BlogsDidLoad {
                request: list,
                blogs: vec![preview(1, "A")],
            },
        );
        assert!(state.loading, "detail for the selection is still outstanding");
        assert_eq!(state.blogs, vec![preview(1, "A")]);

        let request = fetch_request(&reduce(&mut state, BlogAction::BlogDetailLoad { id: 1 }));
        assert!(state.loading);
        reduce(
            &mut state,
            BlogAction::BlogDetailDidLoad {
                request,
                blog: detail(1),
            },
        );
        assert!(!state.loading);
        assert_eq!(state.selected(), Some(&detail(1)));
    }

    #[test]
    fn test_detail_result_keeps_loading_for_later_list_load() {
        let mut state = BlogState::default();
        reduce(&mut state, BlogAction::BlogSelect { id: 1 });
        let request = fetch_request(&reduce(&mut state, BlogAction::BlogDetailLoad { id: 1 }));
        let list = fetch_request(&reduce(&mut state, BlogAction::BlogsLoad));

        reduce(
            &mut state,
            BlogAction::BlogDetailDidLoad {
                request,
                blog: detail(1),
            },
        );
        assert!(state.loading, "list reload is still outstanding");

        reduce(
            &mut state,
            BlogAction::BlogsDidLoad {
                request: list,
                blogs: vec![],
            },
        );
        assert!(!state.loading);
    }

    #[test]
    fn test_superseded_list_error_is_dropped() {
        let mut state = BlogState::default();
        let first = fetch_request(&reduce(&mut state, BlogAction::BlogsLoad));
        reduce(&mut state, BlogAction::BlogsLoad);

        let result = reduce(
            &mut state,
            BlogAction::BlogsDidError {
                request: first,
                error: "timed out".into(),
            },
        );

        assert!(!result.changed);
        assert!(state.loading);
        assert_eq!(state.error, None);
    }

    #[test]
    fn test_superseded_detail_error_is_dropped() {
        let mut state = BlogState::default();
        reduce(&mut state, BlogAction::BlogSelect { id: 5 });
        let old = fetch_request(&reduce(&mut state, BlogAction::BlogDetailLoad { id: 5 }));
        reduce(&mut state, BlogAction::BlogSelect { id: 7 });
        let current = fetch_request(&reduce(&mut state, BlogAction::BlogDetailLoad { id: 7 }));

        let result = reduce(
            &mut state,
            BlogAction::BlogDetailDidError {
                request: old,
                id: 5,
                error: "404 Not Found".into(),
            },
        );
        assert!(!result.changed);
        assert!(state.loading);
        assert_eq!(state.error, None);

        // Right selection, wrong request id
        let result = reduce(
            &mut state,
            BlogAction::BlogDetailDidError {
                request: RequestId(current.0 + 100),
                id: 7,
                error: "500".into(),
            },
        );
        assert!(!result.changed);
        assert!(state.loading);
        assert_eq!(state.error, None);
    }
}
