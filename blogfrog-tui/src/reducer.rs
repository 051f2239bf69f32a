//! UI reducer
//!
//! Mutates only [`UiState`]. Blog data is read from the store's state, and
//! any request the UI needs is returned as a [`BlogAction`] intent for the
//! app loop to dispatch.

use blogfrog_core::{BlogAction, BlogState, DispatchResult, Route};

use crate::action::UiAction;
use crate::form::FormState;
use crate::state::UiState;

pub fn reduce(ui: &mut UiState, blogs: &BlogState, action: UiAction) -> DispatchResult<BlogAction> {
    match action {
        UiAction::Navigate(route) => enter(ui, route),
        UiAction::Back => {
            if ui.route == Route::Overview {
                return DispatchResult::unchanged();
            }
            enter(ui, Route::Overview)
        }
        UiAction::Reload => match ui.route {
            Route::Overview => DispatchResult::effect(BlogAction::BlogsLoad),
            Route::Detail(id) => DispatchResult::effect(BlogAction::BlogSelect { id }),
            Route::AddBlog => DispatchResult::unchanged(),
        },

        // ===== List =====
        UiAction::ListNext => {
            let Some(cursor) = ui.cursor_in(blogs.blogs().len()) else {
                return DispatchResult::unchanged();
            };
            let next = (cursor + 1).min(blogs.blogs().len() - 1);
            move_cursor(ui, next)
        }
        UiAction::ListPrev => {
            let Some(cursor) = ui.cursor_in(blogs.blogs().len()) else {
                return DispatchResult::unchanged();
            };
            move_cursor(ui, cursor.saturating_sub(1))
        }
        UiAction::ListOpenSelected => {
            let selected = ui
                .cursor_in(blogs.blogs().len())
                .and_then(|i| blogs.blogs().get(i));
            match selected {
                Some(blog) => enter(ui, Route::Detail(blog.id)),
                None => DispatchResult::unchanged(),
            }
        }

        // ===== Form =====
        UiAction::FormTitleChange(title) => {
            ui.form.title = title;
            DispatchResult::changed()
        }
        UiAction::FormContentChange(content) => {
            ui.form.content = content;
            DispatchResult::changed()
        }
        UiAction::FormFocusNext => {
            ui.form.focus = ui.form.focus.next();
            DispatchResult::changed()
        }
        UiAction::FormSubmit => {
            let first_attempt = !ui.form.attempted;
            ui.form.attempted = true;
            if blogs.submitting() || !ui.form.is_valid() {
                return DispatchResult {
                    changed: first_attempt,
                    effects: vec![],
                };
            }
            DispatchResult::changed_with(BlogAction::BlogAdd {
                draft: ui.form.draft(),
            })
        }
        UiAction::FormReset => {
            ui.form = FormState::default();
            DispatchResult::changed()
        }

        UiAction::Tick => {
            ui.tick = ui.tick.wrapping_add(1);
            DispatchResult {
                changed: blogs.loading() || blogs.submitting(),
                effects: vec![],
            }
        }
        UiAction::Quit => {
            ui.quit = true;
            DispatchResult::changed()
        }
    }
}

/// Switch to `route` and issue the load intent that page needs
fn enter(ui: &mut UiState, route: Route) -> DispatchResult<BlogAction> {
    ui.route = route;
    match route {
        Route::Overview => DispatchResult::changed_with(BlogAction::BlogsLoad),
        Route::Detail(id) => DispatchResult::changed_with(BlogAction::BlogSelect { id }),
        Route::AddBlog => {
            ui.form = FormState::default();
            DispatchResult::changed()
        }
    }
}

fn move_cursor(ui: &mut UiState, next: usize) -> DispatchResult<BlogAction> {
    if ui.cursor == next {
        return DispatchResult::unchanged();
    }
    ui.cursor = next;
    DispatchResult::changed()
}
