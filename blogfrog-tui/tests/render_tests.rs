//! Whole-screen renders against ratatui's TestBackend

use blogfrog_core::{BlogDetailEntry, BlogPreviewEntry, BlogState, Route};
use blogfrog_tui::testing::render_to_string;
use blogfrog_tui::{App, UiAction};

fn preview(id: i64, title: &str, image: Option<&str>) -> BlogPreviewEntry {
    BlogPreviewEntry {
        id,
        title: title.into(),
        content_preview: format!("Preview of {title}"),
        header_image_url: image.map(Into::into),
    }
}

fn render(app: &mut App, state: &BlogState) -> String {
    render_to_string(120, 20, |frame| app.render(frame, state))
}

#[test]
fn overview_lists_titles_and_previews() {
    let mut state = BlogState::default();
    state.blogs = vec![
        preview(1, "Frogs in spring", Some("https://img.example/frog.png")),
        preview(2, "Pond life", Some("string")),
    ];
    let mut app = App::new(Route::Overview);

    let out = render(&mut app, &state);

    assert!(out.contains("BlogFrog"));
    assert!(out.contains("Frogs in spring"));
    assert!(out.contains("Preview of Pond life"));
    assert!(out.contains("▣ Frogs in spring"));
    assert!(out.contains("□ Pond life"));
    assert!(out.contains("reload"));
}

#[test]
fn overview_empty_and_loading() {
    let mut state = BlogState::default();
    let mut app = App::new(Route::Overview);
    assert!(render(&mut app, &state).contains("No blog entries yet."));

    state.loading = true;
    let out = render(&mut app, &state);
    assert!(out.contains("Loading blogs..."));
    assert!(out.contains("loading"));
}

#[test]
fn status_bar_shows_error() {
    let mut state = BlogState::default();
    state.error = Some("connection refused".into());
    let mut app = App::new(Route::Overview);

    assert!(render(&mut app, &state).contains("connection refused"));
}

#[test]
fn detail_shows_selected_blog() {
    let mut state = BlogState::default();
    state.selected_id = Some(7);
    state.selected = Some(BlogDetailEntry {
        id: 7,
        title: "Seven frogs".into(),
        content: "Once upon a time there were seven frogs.".into(),
        header_image_url: None,
    });
    let mut app = App::new(Route::Detail(7));

    let out = render(&mut app, &state);

    assert!(out.contains("Blog #7"));
    assert!(out.contains("Seven frogs"));
    assert!(out.contains("no header image"));
    assert!(out.contains("seven frogs."));
}

#[test]
fn detail_for_other_id_is_not_shown() {
    let mut state = BlogState::default();
    state.selected_id = Some(7);
    state.selected = Some(BlogDetailEntry {
        id: 7,
        title: "Seven frogs".into(),
        content: "Content".into(),
        header_image_url: None,
    });
    let mut app = App::new(Route::Detail(8));

    let out = render(&mut app, &state);

    assert!(!out.contains("Seven frogs"));
    assert!(out.contains("Loading blog 8..."));

    state.error = Some("blog 8 not found".into());
    let out = render(&mut app, &state);
    assert!(out.contains("Blog 8 could not be loaded."));
}

#[test]
fn add_page_hides_errors_until_submit_attempt() {
    let state = BlogState::default();
    let mut app = App::new(Route::AddBlog);
    app.ui.form.title = "test".into();

    let out = render(&mut app, &state);
    assert!(out.contains("New blog post"));
    assert!(!out.contains("Title must start with an uppercase letter"));

    app.ui.form.attempted = true;
    let out = render(&mut app, &state);
    assert!(out.contains("Title must start with an uppercase letter"));
    assert!(out.contains("Content is required"));
}

#[test]
fn add_page_shows_publishing() {
    let mut state = BlogState::default();
    state.submitting = true;
    let mut app = App::new(Route::AddBlog);

    assert!(render(&mut app, &state).contains("Publishing..."));
}

#[test]
fn spinner_advances_only_while_busy() {
    let mut state = BlogState::default();
    let mut ui = blogfrog_tui::UiState::new(Route::Overview);

    let idle = blogfrog_tui::reducer::reduce(&mut ui, &state, UiAction::Tick);
    assert!(!idle.changed);

    state.loading = true;
    let busy = blogfrog_tui::reducer::reduce(&mut ui, &state, UiAction::Tick);
    assert!(busy.changed);
}
