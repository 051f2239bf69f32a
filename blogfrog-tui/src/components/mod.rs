//! Page components
//!
//! Each component renders from borrowed props and turns key events into
//! [`UiAction`](crate::action::UiAction)s. Nothing here mutates state directly.

pub mod add_blog_page;
pub mod blog_detail;
pub mod blog_list;
pub mod status_bar;
pub mod text_input;

use ratatui::{layout::Rect, Frame};

use crate::events::EventKind;

pub use add_blog_page::{AddBlogPage, AddBlogPageProps};
pub use blog_detail::{BlogDetail, BlogDetailProps};
pub use blog_list::{BlogList, BlogListProps};
pub use status_bar::{StatusBar, StatusBarProps};
pub use text_input::{TextInput, TextInputProps};

/// A UI element that renders based on props and emits actions
///
/// 1. Props contain all read-only data needed for rendering
/// 2. `handle_event` returns actions, never mutates external state
/// 3. `render` is a pure function of props plus internal UI state such as a cursor
pub trait Component<A> {
    /// Data required to render the component (read-only)
    type Props<'a>;

    /// Handle an event and return actions to dispatch
    ///
    /// Default implementation returns no actions (render-only components).
    #[allow(unused_variables)]
    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = A> {
        None::<A>
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>);
}
