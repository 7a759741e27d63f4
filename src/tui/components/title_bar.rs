//! # TitleBar Component
//!
//! Top line: app name, panel tabs, and the status text for the active panel.
//!
//! Stateless. Everything it shows arrives as props:
//! - `active`: the selected `Tab` (core state)
//! - `status`: `App::status()` for the active panel
//!
//! ```text
//! ActionDeck │ User Fetcher │ Posts │ Filter          Last action: posts
//! ```

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Tabs;

use crate::Tab;
use crate::tui::component::Component;

pub struct TitleBar {
    pub active: Tab,
    pub status: String,
}

impl TitleBar {
    pub fn new(active: Tab, status: String) -> Self {
        Self { active, status }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let status_width = (self.status.chars().count() as u16 + 1).min(area.width / 2);
        let [name_area, tabs_area, status_area] = Layout::horizontal([
            Constraint::Length(11),
            Constraint::Min(0),
            Constraint::Length(status_width),
        ])
        .areas(area);

        frame.render_widget(
            Span::styled(
                "ActionDeck",
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ),
            name_area,
        );

        let tabs = Tabs::new(Tab::ALL.iter().map(|t| t.label()))
            .select(self.active.index())
            .highlight_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED),
            )
            .divider("│");
        frame.render_widget(tabs, tabs_area);

        frame.render_widget(
            Line::from(Span::styled(
                self.status.as_str(),
                Style::default().fg(Color::DarkGray),
            ))
            .right_aligned(),
            status_area,
        );
    }
}
