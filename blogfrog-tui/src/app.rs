//! Event loop tying the terminal, the UI reducer, and the blog store together
//!
//! 1. Terminal event -> page component -> [`UiAction`]s
//! 2. [`UiAction`] -> UI reducer -> [`BlogAction`](blogfrog_core::BlogAction) intents for the store
//! 3. Store results and navigator routes flow back in through their queues
//! 4. Re-render whenever either side reports a change

use std::time::Duration;

use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Layout},
    Frame, Terminal,
};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use blogfrog_core::{Action, BlogState, BlogStore, Route};

use crate::action::UiAction;
use crate::components::{
    AddBlogPage, AddBlogPageProps, BlogDetail, BlogDetailProps, BlogList, BlogListProps,
    Component, StatusBar, StatusBarProps,
};
use crate::events::{spawn_event_poller, EventKind, LOOP_SLEEP, POLL_TIMEOUT};
use crate::reducer::reduce;
use crate::state::{UiState, TICK_MS};

/// UI state plus the page components that render it
pub struct App {
    pub ui: UiState,
    list: BlogList,
    detail: BlogDetail,
    add_page: AddBlogPage,
    status: StatusBar,
}

impl App {
    pub fn new(route: Route) -> Self {
        Self {
            ui: UiState::new(route),
            list: BlogList::new(),
            detail: BlogDetail,
            add_page: AddBlogPage::new(),
            status: StatusBar,
        }
    }

    pub fn render(&mut self, frame: &mut Frame, blogs: &BlogState) {
        let [page, status] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(frame.area());
        let spinner = self.ui.spinner();

        match self.ui.route {
            Route::Overview => {
                let props = BlogListProps {
                    state: blogs,
                    cursor: self.ui.cursor_in(blogs.blogs().len()),
                    spinner,
                    is_focused: true,
                };
                self.list.render(frame, page, props);
            }
            Route::Detail(id) => {
                let props = BlogDetailProps {
                    state: blogs,
                    id,
                    spinner,
                    is_focused: true,
                };
                self.detail.render(frame, page, props);
            }
            Route::AddBlog => {
                let props = AddBlogPageProps {
                    form: &self.ui.form,
                    submitting: blogs.submitting(),
                    spinner,
                    is_focused: true,
                };
                self.add_page.render(frame, page, props);
            }
        }

        let props = StatusBarProps {
            route: self.ui.route,
            state: blogs,
            spinner,
        };
        self.status.render(frame, status, props);
    }

    /// Route a terminal event to the page that owns the screen.
    pub fn map_event(&mut self, event: &EventKind, blogs: &BlogState) -> Vec<UiAction> {
        if let EventKind::Key(key) = event {
            if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                return vec![UiAction::Quit];
            }
        }

        match self.ui.route {
            Route::Overview => {
                let props = BlogListProps {
                    state: blogs,
                    cursor: self.ui.cursor_in(blogs.blogs().len()),
                    spinner: self.ui.spinner(),
                    is_focused: true,
                };
                self.list.handle_event(event, props)
            }
            Route::Detail(id) => {
                let props = BlogDetailProps {
                    state: blogs,
                    id,
                    spinner: self.ui.spinner(),
                    is_focused: true,
                };
                self.detail.handle_event(event, props)
            }
            Route::AddBlog => {
                let props = AddBlogPageProps {
                    form: &self.ui.form,
                    submitting: blogs.submitting(),
                    spinner: self.ui.spinner(),
                    is_focused: true,
                };
                self.add_page.handle_event(event, props)
            }
        }
    }

    /// Reduce a UI action and hand its intents to the store.
    ///
    /// Returns whether the UI state changed.
    pub fn apply(&mut self, action: UiAction, store: &BlogStore) -> bool {
        if action != UiAction::Tick {
            debug!(
                action = %action.summary(),
                category = action.category().unwrap_or("-"),
                "UI action"
            );
        }
        let result = reduce(&mut self.ui, store.state(), action);
        for intent in result.effects {
            store.dispatch(intent);
        }
        result.changed
    }

    pub fn should_quit(&self) -> bool {
        self.ui.quit
    }
}

/// Run until the user quits.
///
/// `ui_rx` is the receiving end of the channel given to
/// [`ChannelNavigator`](crate::navigation::ChannelNavigator).
pub async fn run<B: Backend>(
    terminal: &mut Terminal<B>,
    store: &mut BlogStore,
    app: &mut App,
    mut ui_rx: mpsc::UnboundedReceiver<UiAction>,
) -> anyhow::Result<()> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<EventKind>();
    let cancel_token = CancellationToken::new();
    let _poller = spawn_event_poller(event_tx, POLL_TIMEOUT, LOOP_SLEEP, cancel_token.clone());
    let mut tick = tokio::time::interval(Duration::from_millis(TICK_MS));

    info!(route = %app.ui.route, "Starting UI loop");
    app.apply(UiAction::Navigate(app.ui.route), store);
    let mut should_render = true;

    loop {
        if should_render {
            terminal.draw(|frame| app.render(frame, store.state()))?;
            should_render = false;
        }

        tokio::select! {
            Some(event) = event_rx.recv() => {
                if matches!(event, EventKind::Resize(..)) {
                    should_render = true;
                }
                for action in app.map_event(&event, store.state()) {
                    should_render |= app.apply(action, store);
                }
            }

            Some(action) = ui_rx.recv() => {
                should_render |= app.apply(action, store);
            }

            Some(action) = store.recv() => {
                should_render |= store.apply(action);
            }

            _ = tick.tick() => {
                should_render |= app.apply(UiAction::Tick, store);
            }
        }

        if app.should_quit() {
            break;
        }
    }

    info!("Quitting");
    cancel_token.cancel();
    Ok(())
}
