//! App + store wired together with scripted backends

use std::sync::Arc;

use tokio::sync::mpsc;

use blogfrog_core::testing::{MockAddBlogApi, MockBlogApi};
use blogfrog_core::{BlogDetailEntry, BlogPreviewEntry, BlogStore, DraftPost, Route};
use blogfrog_tui::testing::key_event;
use blogfrog_tui::{App, ChannelNavigator, UiAction};

const BODY: &str = "A long enough story about frogs that passes the fifty character rule.";

struct Harness {
    app: App,
    store: BlogStore,
    add_api: Arc<MockAddBlogApi>,
    ui_rx: mpsc::UnboundedReceiver<UiAction>,
}

impl Harness {
    fn new(route: Route, add_api: MockAddBlogApi) -> Self {
        let api = MockBlogApi::new()
            .with_blogs(vec![
                BlogPreviewEntry {
                    id: 1,
                    title: "First".into(),
                    content_preview: "one".into(),
                    header_image_url: None,
                },
                BlogPreviewEntry {
                    id: 2,
                    title: "Second".into(),
                    content_preview: "two".into(),
                    header_image_url: None,
                },
            ])
            .with_detail(BlogDetailEntry {
                id: 2,
                title: "Second".into(),
                content: "Full text".into(),
                header_image_url: None,
            });
        let add_api = Arc::new(add_api);
        let (ui_tx, ui_rx) = mpsc::unbounded_channel();
        let store = BlogStore::new(
            Arc::new(api),
            add_api.clone(),
            Arc::new(ChannelNavigator::new(ui_tx)),
        );
        Self {
            app: App::new(route),
            store,
            add_api,
            ui_rx,
        }
    }

    fn press(&mut self, key: &str) {
        let actions = self.app.map_event(&key_event(key), self.store.state());
        for action in actions {
            self.app.apply(action, &self.store);
        }
    }

    fn type_text(&mut self, text: &str) {
        for c in text.chars() {
            match c {
                ' ' => self.press("space"),
                c => self.press(&c.to_string()),
            }
        }
    }

    /// Settle the store, then feed navigator routes back into the app.
    async fn settle(&mut self) {
        loop {
            self.store.run_until_idle().await;
            let mut routed = false;
            while let Ok(action) = self.ui_rx.try_recv() {
                self.app.apply(action, &self.store);
                routed = true;
            }
            if !routed {
                break;
            }
        }
    }
}

#[tokio::test]
async fn browse_list_then_open_detail() {
    let mut h = Harness::new(Route::Overview, MockAddBlogApi::new());
    h.app.apply(UiAction::Navigate(Route::Overview), &h.store);
    h.settle().await;
    assert_eq!(h.store.state().blogs().len(), 2);

    h.press("j");
    h.press("enter");
    h.settle().await;

    assert_eq!(h.app.ui.route, Route::Detail(2));
    assert_eq!(h.store.state().selected_id(), Some(2));
    assert_eq!(h.store.state().selected().map(|b| b.content.as_str()), Some("Full text"));

    h.press("esc");
    h.settle().await;
    assert_eq!(h.app.ui.route, Route::Overview);
}

#[tokio::test]
async fn publishing_returns_to_overview() {
    let mut h = Harness::new(Route::AddBlog, MockAddBlogApi::new());
    h.app.apply(UiAction::Navigate(Route::AddBlog), &h.store);

    h.type_text("Frogs");
    h.press("tab");
    h.type_text(BODY);
    h.press("ctrl+s");
    h.settle().await;

    assert_eq!(h.add_api.created(), vec![DraftPost::new("Frogs", BODY)]);
    assert_eq!(h.app.ui.route, Route::Overview);
    assert_eq!(h.store.state().blogs().len(), 2);
    assert!(!h.store.state().submitting());
}

#[tokio::test]
async fn invalid_form_is_not_sent() {
    let mut h = Harness::new(Route::AddBlog, MockAddBlogApi::new());
    h.app.apply(UiAction::Navigate(Route::AddBlog), &h.store);

    h.type_text("Test");
    h.press("tab");
    h.type_text(BODY);
    h.press("ctrl+s");
    h.settle().await;

    assert_eq!(h.add_api.create_calls(), 0);
    assert!(h.app.ui.form.attempted);
    assert_eq!(h.app.ui.route, Route::AddBlog);
}

#[tokio::test]
async fn failed_publish_stays_on_form() {
    let mut h = Harness::new(Route::AddBlog, MockAddBlogApi::new().with_error("backend down"));
    h.app.apply(UiAction::Navigate(Route::AddBlog), &h.store);

    h.type_text("Frogs");
    h.press("tab");
    h.type_text(BODY);
    h.press("ctrl+s");
    h.settle().await;

    assert_eq!(h.app.ui.route, Route::AddBlog);
    assert_eq!(h.store.state().error(), Some("backend down"));
    assert_eq!(h.app.ui.form.title, "Frogs");
}
