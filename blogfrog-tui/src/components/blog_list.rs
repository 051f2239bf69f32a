//! Overview page: every blog preview in a scrollable list

use crossterm::event::KeyCode;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use blogfrog_core::{BlogPreviewEntry, BlogState, Route};

use super::Component;
use crate::action::UiAction;
use crate::events::EventKind;

pub const IMAGE_MARKER: &str = "▣";
pub const NO_IMAGE_MARKER: &str = "□";

pub struct BlogListProps<'a> {
    pub state: &'a BlogState,
    /// Highlighted row, already clamped to the list
    pub cursor: Option<usize>,
    pub spinner: &'a str,
    pub is_focused: bool,
}

#[derive(Default)]
pub struct BlogList {
    list_state: ListState,
}

impl BlogList {
    pub fn new() -> Self {
        Self::default()
    }
}

fn item(blog: &BlogPreviewEntry) -> ListItem<'_> {
    let marker = if blog.header_image().is_some() {
        IMAGE_MARKER
    } else {
        NO_IMAGE_MARKER
    };
    ListItem::new(vec![
        Line::from(vec![
            Span::styled(format!("{marker} "), Style::default().fg(Color::DarkGray)),
            Span::styled(blog.title.as_str(), Style::default().bold()),
        ]),
        Line::from(Span::styled(
            format!("  {}", blog.content_preview),
            Style::default().fg(Color::Gray),
        )),
    ])
}

impl Component<UiAction> for BlogList {
    type Props<'a> = BlogListProps<'a>;

    fn handle_event<'p>(
        &mut self,
        event: &EventKind,
        props: Self::Props<'p>,
    ) -> Vec<UiAction>
    where
        'p: 'p,
    {
        if !props.is_focused {
            return vec![];
        }
        match event {
            EventKind::Key(key) => match key.code {
                KeyCode::Char('j') | KeyCode::Down => vec![UiAction::ListNext],
                KeyCode::Char('k') | KeyCode::Up => vec![UiAction::ListPrev],
                KeyCode::Enter => vec![UiAction::ListOpenSelected],
                KeyCode::Char('n') => vec![UiAction::Navigate(Route::AddBlog)],
                KeyCode::Char('r') | KeyCode::F(5) => vec![UiAction::Reload],
                KeyCode::Char('q') => vec![UiAction::Quit],
                _ => vec![],
            },
            _ => vec![],
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: BlogListProps<'_>) {
        let state = props.state;
        let title = if state.loading() {
            format!(" BlogFrog {} ", props.spinner)
        } else {
            " BlogFrog ".to_string()
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Rgb(80, 100, 80)))
            .title(title)
            .title_style(Style::default().fg(Color::Green).bold())
            .title_alignment(Alignment::Center);

        if state.blogs().is_empty() {
            let message = if state.loading() {
                "Loading blogs..."
            } else {
                "No blog entries yet."
            };
            let paragraph = Paragraph::new(message)
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(paragraph, area);
            return;
        }

        let items: Vec<ListItem> = state.blogs().iter().map(item).collect();
        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("› ");

        self.list_state.select(props.cursor);
        frame.render_stateful_widget(list, area, &mut self.list_state);
    }
}
