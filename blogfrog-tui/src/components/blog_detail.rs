//! Detail page for one blog

use crossterm::event::KeyCode;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style, Stylize},
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use blogfrog_core::BlogState;

use super::Component;
use crate::action::UiAction;
use crate::events::EventKind;

pub struct BlogDetailProps<'a> {
    pub state: &'a BlogState,
    /// Id from the route
    pub id: i64,
    pub spinner: &'a str,
    pub is_focused: bool,
}

#[derive(Default)]
pub struct BlogDetail;

impl Component<UiAction> for BlogDetail {
    type Props<'a> = BlogDetailProps<'a>;

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
                KeyCode::Esc | KeyCode::Backspace => vec![UiAction::Back],
                KeyCode::Char('r') | KeyCode::F(5) => vec![UiAction::Reload],
                KeyCode::Char('q') => vec![UiAction::Quit],
                _ => vec![],
            },
            _ => vec![],
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: BlogDetailProps<'_>) {
        let state = props.state;
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Rgb(80, 100, 80)))
            .title(format!(" Blog #{} ", props.id))
            .title_alignment(Alignment::Center);

        let blog = state
            .selected()
            .filter(|blog| state.selected_id() == Some(props.id) && blog.id == props.id);

        let Some(blog) = blog else {
            // Only a failure ends the wait; a settled list load does not
            let message = match state.error() {
                Some(_) => format!("Blog {} could not be loaded.", props.id),
                None => format!("{} Loading blog {}...", props.spinner, props.id),
            };
            let paragraph = Paragraph::new(message)
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(paragraph, area);
            return;
        };

        frame.render_widget(block.clone(), area);
        let inner = block.inner(area);
        let chunks = Layout::vertical([
            Constraint::Length(1), // Title
            Constraint::Length(1), // Header image
            Constraint::Length(1), // Spacer
            Constraint::Min(1),    // Content
        ])
        .split(inner);

        frame.render_widget(
            Paragraph::new(Line::from(blog.title.as_str()).bold().fg(Color::Green)),
            chunks[0],
        );

        let image = match blog.header_image() {
            Some(url) => format!("▣ {url}"),
            None => "□ no header image".to_string(),
        };
        frame.render_widget(
            Paragraph::new(image).style(Style::default().fg(Color::DarkGray)),
            chunks[1],
        );

        frame.render_widget(
            Paragraph::new(blog.content.as_str()).wrap(Wrap { trim: false }),
            chunks[3],
        );
    }
}
