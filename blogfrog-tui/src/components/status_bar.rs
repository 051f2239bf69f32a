use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use blogfrog_core::{BlogState, Route};

use super::Component;
use crate::action::UiAction;

pub struct StatusBarProps<'a> {
    pub route: Route,
    pub state: &'a BlogState,
    pub spinner: &'a str,
}

pub struct StatusBar;

fn hints(route: Route) -> &'static [(&'static str, &'static str)] {
    match route {
        Route::Overview => &[
            ("j/k", "move"),
            ("enter", "open"),
            ("n", "new"),
            ("r", "reload"),
            ("q", "quit"),
        ],
        Route::Detail(_) => &[("esc", "back"), ("r", "reload"), ("q", "quit")],
        Route::AddBlog => &[
            ("tab", "field"),
            ("ctrl+s", "publish"),
            ("ctrl+r", "reset"),
            ("esc", "back"),
        ],
    }
}

impl Component<UiAction> for StatusBar {
    type Props<'a> = StatusBarProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: StatusBarProps<'_>) {
        let state = props.state;
        let status = if let Some(error) = state.error() {
            Line::from(format!(" ⚠ {error}")).fg(Color::Red)
        } else if state.submitting() {
            Line::from(format!(" {} publishing", props.spinner)).fg(Color::Yellow)
        } else if state.loading() {
            Line::from(format!(" {} loading", props.spinner)).fg(Color::Yellow)
        } else {
            Line::from(format!(" {}", props.route)).fg(Color::DarkGray)
        };

        let mut spans = Vec::new();
        for (key, label) in hints(props.route) {
            spans.push(Span::styled(*key, Style::default().fg(Color::Cyan).bold()));
            spans.push(Span::styled(
                format!(" {label}  "),
                Style::default().fg(Color::DarkGray),
            ));
        }
        let help = Line::from(spans).right_aligned();

        let [left, right] =
            Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)]).areas(area);
        frame.render_widget(Paragraph::new(status), left);
        frame.render_widget(Paragraph::new(help), right);
    }
}
