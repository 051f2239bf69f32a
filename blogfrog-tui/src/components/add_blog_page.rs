//! Add-post page: title and content inputs plus publish controls

use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style, Stylize},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{Component, TextInput, TextInputProps};
use crate::action::UiAction;
use crate::events::EventKind;
use crate::form::{FormField, FormState};

pub struct AddBlogPageProps<'a> {
    pub form: &'a FormState,
    pub submitting: bool,
    pub spinner: &'a str,
    pub is_focused: bool,
}

#[derive(Default)]
pub struct AddBlogPage {
    title: TextInput,
    content: TextInput,
}

impl AddBlogPage {
    pub fn new() -> Self {
        Self::default()
    }

    fn title_props<'a>(form: &'a FormState, is_focused: bool) -> TextInputProps<'a, UiAction> {
        TextInputProps {
            value: &form.title,
            label: "Title",
            placeholder: "An exciting title",
            is_focused: is_focused && form.focus == FormField::Title,
            multiline: false,
            invalid: form.attempted && form.title_error().is_some(),
            on_change: UiAction::FormTitleChange,
            on_submit: Some(UiAction::FormFocusNext),
        }
    }

    fn content_props<'a>(form: &'a FormState, is_focused: bool) -> TextInputProps<'a, UiAction> {
        TextInputProps {
            value: &form.content,
            label: "Tell your story...",
            placeholder: "",
            is_focused: is_focused && form.focus == FormField::Content,
            multiline: true,
            invalid: form.attempted && form.content_error().is_some(),
            on_change: UiAction::FormContentChange,
            on_submit: None,
        }
    }
}

impl Component<UiAction> for AddBlogPage {
    type Props<'a> = AddBlogPageProps<'a>;

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
        let EventKind::Key(key) = event else {
            return vec![];
        };

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('s') => return vec![UiAction::FormSubmit],
                KeyCode::Char('r') => return vec![UiAction::FormReset],
                _ => {}
            }
        }
        match key.code {
            KeyCode::Tab | KeyCode::BackTab => return vec![UiAction::FormFocusNext],
            KeyCode::Esc => return vec![UiAction::Back],
            _ => {}
        }

        let form = props.form;
        match form.focus {
            FormField::Title => self
                .title
                .handle_event(event, Self::title_props(form, true))
                .into_iter()
                .collect(),
            FormField::Content => self
                .content
                .handle_event(event, Self::content_props(form, true))
                .into_iter()
                .collect(),
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: AddBlogPageProps<'_>) {
        let form = props.form;
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Rgb(80, 100, 80)))
            .title(" New blog post ")
            .title_style(Style::default().fg(Color::Green).bold())
            .title_alignment(Alignment::Center);
        frame.render_widget(block.clone(), area);
        let inner = block.inner(area);

        let errors = form.visible_errors();
        let chunks = Layout::vertical([
            Constraint::Length(3),                   // Title input
            Constraint::Min(5),                      // Content input
            Constraint::Length(errors.len() as u16), // Field errors
            Constraint::Length(1),                   // Publish state
        ])
        .split(inner);

        self.title
            .render(frame, chunks[0], Self::title_props(form, props.is_focused));
        self.content
            .render(frame, chunks[1], Self::content_props(form, props.is_focused));

        let error_lines: Vec<Line> = errors
            .iter()
            .map(|e| Line::from(format!("✗ {e}")).fg(Color::Red))
            .collect();
        frame.render_widget(Paragraph::new(error_lines), chunks[2]);

        let publish = if props.submitting {
            Line::from(format!("{} Publishing...", props.spinner)).fg(Color::Yellow)
        } else if form.is_valid() {
            Line::from("Ready to publish (Ctrl+S)").fg(Color::Green)
        } else {
            Line::from(format!(
                "{}/{} characters",
                form.content.chars().count(),
                crate::form::CONTENT_MIN_CHARS
            ))
            .fg(Color::DarkGray)
        };
        frame.render_widget(Paragraph::new(publish), chunks[3]);
    }
}
