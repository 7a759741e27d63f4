//! # Result View
//!
//! Pure projection of an `ActionState` onto what should be drawn, plus the
//! shared banners every fetch panel uses.
//!
//! ```text
//! pending ──► loading banner (stacked above whatever body follows)
//! error   ──► Error: <message>
//! result  ──► payload (panel-specific)
//! empty   ──► ready placeholder
//! ```

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Paragraph, Wrap};

use crate::core::action_state::ActionState;

#[derive(Debug, PartialEq)]
pub enum Body<'a, T> {
    Ready,
    Error(&'a str),
    Success(&'a T),
}

#[derive(Debug, PartialEq)]
pub struct ResultView<'a, T> {
    pub loading: bool,
    pub body: Body<'a, T>,
}

impl<'a, T> ResultView<'a, T> {
    pub fn of(state: &'a ActionState<T>) -> Self {
        let body = match (&state.error, &state.result) {
            (Some(message), _) => Body::Error(message.as_str()),
            (None, Some(result)) => Body::Success(result),
            (None, None) => Body::Ready,
        };
        Self {
            loading: state.pending,
            body,
        }
    }
}

pub const BANNER_HEIGHT: u16 = 3;

pub fn render_loading(frame: &mut Frame, area: Rect, message: &str) {
    let style = Style::default().fg(Color::Yellow);
    let banner = Paragraph::new(format!("⟳ {message}"))
        .style(style)
        .block(Block::bordered().border_style(style.add_modifier(Modifier::DIM)));
    frame.render_widget(banner, area);
}

pub fn render_error(frame: &mut Frame, area: Rect, message: &str) {
    let style = Style::default().fg(Color::Red);
    let banner = Paragraph::new(format!("✗ Error: {message}"))
        .style(style)
        .wrap(Wrap { trim: true })
        .block(Block::bordered().border_style(style));
    frame.render_widget(banner, area);
}

pub fn render_ready(frame: &mut Frame, area: Rect, hint: &str) {
    let placeholder = Paragraph::new(hint)
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::bordered().border_style(Style::default().fg(Color::DarkGray)));
    frame.render_widget(placeholder, area);
}
