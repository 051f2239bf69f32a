//! Text input used by the add-post form

use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::Component;
use crate::events::EventKind;

pub struct TextInputProps<'a, A> {
    pub value: &'a str,
    pub label: &'a str,
    /// Shown in gray while the value is empty
    pub placeholder: &'a str,
    pub is_focused: bool,
    /// Enter inserts a line break instead of submitting
    pub multiline: bool,
    /// Red border, e.g. after a failed publish attempt
    pub invalid: bool,
    pub on_change: fn(String) -> A,
    pub on_submit: Option<A>,
}

/// Editable text with a cursor
///
/// Emits `on_change` with the full new value for every edit.
#[derive(Default)]
pub struct TextInput {
    /// Cursor position (byte index)
    cursor: usize,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Put the cursor after the last character
    pub fn move_to_end(&mut self, value: &str) {
        self.cursor = value.len();
    }

    fn clamp_cursor(&mut self, value: &str) {
        self.cursor = self.cursor.min(value.len());
        while !value.is_char_boundary(self.cursor) {
            self.cursor -= 1;
        }
    }

    fn move_cursor_left(&mut self, value: &str) {
        if let Some((i, _)) = value[..self.cursor].char_indices().last() {
            self.cursor = i;
        }
    }

    fn move_cursor_right(&mut self, value: &str) {
        if let Some(c) = value[self.cursor..].chars().next() {
            self.cursor += c.len_utf8();
        }
    }

    fn insert_char(&mut self, value: &str, c: char) -> String {
        let mut new_value = String::with_capacity(value.len() + c.len_utf8());
        new_value.push_str(&value[..self.cursor]);
        new_value.push(c);
        new_value.push_str(&value[self.cursor..]);
        self.cursor += c.len_utf8();
        new_value
    }

    /// Backspace
    fn delete_char_before(&mut self, value: &str) -> Option<String> {
        let (char_start, _) = value[..self.cursor].char_indices().last()?;
        let mut new_value = String::with_capacity(value.len());
        new_value.push_str(&value[..char_start]);
        new_value.push_str(&value[self.cursor..]);
        self.cursor = char_start;
        Some(new_value)
    }

    /// Delete
    fn delete_char_at(&self, value: &str) -> Option<String> {
        let c = value[self.cursor..].chars().next()?;
        let mut new_value = String::with_capacity(value.len());
        new_value.push_str(&value[..self.cursor]);
        new_value.push_str(&value[self.cursor + c.len_utf8()..]);
        Some(new_value)
    }
}

impl<A> Component<A> for TextInput {
    type Props<'a> = TextInputProps<'a, A>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = A> {
        if !props.is_focused {
            return None;
        }
        let EventKind::Key(key) = event else {
            return None;
        };

        self.clamp_cursor(props.value);

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('a') => {
                    self.cursor = 0;
                    None
                }
                KeyCode::Char('e') => {
                    self.cursor = props.value.len();
                    None
                }
                // Clear the field
                KeyCode::Char('u') => {
                    self.cursor = 0;
                    Some((props.on_change)(String::new()))
                }
                _ => None,
            };
        }

        match key.code {
            KeyCode::Char(c) => {
                let new_value = self.insert_char(props.value, c);
                Some((props.on_change)(new_value))
            }
            KeyCode::Enter if props.multiline => {
                let new_value = self.insert_char(props.value, '\n');
                Some((props.on_change)(new_value))
            }
            KeyCode::Enter => props.on_submit,
            KeyCode::Backspace => self
                .delete_char_before(props.value)
                .map(|v| (props.on_change)(v)),
            KeyCode::Delete => self
                .delete_char_at(props.value)
                .map(|v| (props.on_change)(v)),
            KeyCode::Left => {
                self.move_cursor_left(props.value);
                None
            }
            KeyCode::Right => {
                self.move_cursor_right(props.value);
                None
            }
            KeyCode::Home => {
                self.cursor = 0;
                None
            }
            KeyCode::End => {
                self.cursor = props.value.len();
                None
            }
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        self.clamp_cursor(props.value);

        let (text, style) = if props.value.is_empty() {
            (props.placeholder, Style::default().fg(Color::DarkGray))
        } else {
            (props.value, Style::default())
        };

        let border_style = if props.invalid {
            Style::default().fg(Color::Red)
        } else if props.is_focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(format!(" {} ", props.label));

        let mut paragraph = Paragraph::new(text).style(style).block(block);
        if props.multiline {
            paragraph = paragraph.wrap(Wrap { trim: false });
        }
        frame.render_widget(paragraph, area);

        // Wrapped text has no stable cursor column, so only single-line shows one
        if props.is_focused && !props.multiline {
            let column = props.value[..self.cursor].chars().count() as u16;
            let cursor_x = area.x + 1 + column;
            if cursor_x < area.x + area.width.saturating_sub(1) {
                frame.set_cursor_position((cursor_x, area.y + 1));
            }
        }
    }
}
