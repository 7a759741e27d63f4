//! # User Panel
//!
//! ID form on top, result underneath. Follows the persistent state +
//! transient wrapper pattern:
//! - `UserPanelState` (the form field) lives in `TuiState`
//! - `UserPanel` is created each frame with borrowed state and the
//!   current `ActionState<User>` as a prop

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};

use crate::api::types::User;
use crate::core::action_state::ActionState;
use crate::core::input::UserQuery;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::form_field::{FieldEvent, FormField};
use crate::tui::components::result_view::{
    BANNER_HEIGHT, Body, ResultView, render_error, render_loading, render_ready,
};
use crate::tui::event::TuiEvent;

pub struct UserPanelState {
    pub field: FormField,
}

impl Default for UserPanelState {
    fn default() -> Self {
        Self::new()
    }
}

impl UserPanelState {
    pub fn new() -> Self {
        Self {
            field: FormField::new("Enter User ID (1-10):", "e.g., 1"),
        }
    }

    /// Returns a query when the form is submitted.
    pub fn handle_event(&mut self, event: &TuiEvent) -> Option<UserQuery> {
        match self.field.handle_event(event)? {
            FieldEvent::Submit(text) => Some(UserQuery::new(text)),
            FieldEvent::Changed(_) => None,
        }
    }
}

pub struct UserPanel<'a> {
    state: &'a mut UserPanelState,
    action: &'a ActionState<User>,
}

impl<'a> UserPanel<'a> {
    pub fn new(state: &'a mut UserPanelState, action: &'a ActionState<User>) -> Self {
        Self { state, action }
    }
}

impl Component for UserPanel<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let view = ResultView::of(self.action);
        let loading_height = if view.loading { BANNER_HEIGHT } else { 0 };

        let [field_area, button_area, loading_area, body_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(loading_height),
            Constraint::Min(0),
        ])
        .areas(area);

        // Disabled while a fetch is outstanding
        self.state.field.disabled = view.loading;
        self.state.field.render(frame, field_area);

        let button = if view.loading {
            Span::styled(" [ Loading... ] ", Style::default().fg(Color::DarkGray))
        } else {
            Span::styled(
                " [ Fetch User ] ",
                Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            )
        };
        frame.render_widget(Line::from(vec![button, Span::raw(" Enter to submit")]), button_area);

        if view.loading {
            render_loading(frame, loading_area, "Fetching user data...");
        }

        match view.body {
            Body::Ready => render_ready(frame, body_area, "Enter an ID and press Enter."),
            Body::Error(message) => {
                let [banner, _] =
                    Layout::vertical([Constraint::Length(BANNER_HEIGHT), Constraint::Min(0)])
                        .areas(body_area);
                render_error(frame, banner, message);
            }
            Body::Success(user) => render_user(frame, body_area, user),
        }
    }
}

/// Label/value pairs in display order.
pub fn user_fields(user: &User) -> Vec<(&'static str, String)> {
    vec![
        ("ID", user.id.to_string()),
        ("Name", user.name.clone()),
        ("Username", user.username.clone()),
        ("Email", user.email.clone()),
        ("Phone", user.phone.clone()),
        ("Website", user.website.clone()),
        ("Company", user.company_name().to_string()),
        ("Address", user.short_address()),
    ]
}

fn render_user(frame: &mut Frame, area: Rect, user: &User) {
    let label_style = Style::default().add_modifier(Modifier::BOLD);
    let lines: Vec<Line> = user_fields(user)
        .into_iter()
        .map(|(label, value)| {
            Line::from(vec![
                Span::styled(format!("{label}: "), label_style),
                Span::raw(value),
            ])
        })
        .collect();

    let green = Style::default().fg(Color::Green);
    let card = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(
            Block::bordered()
                .title("✓ User Information")
                .border_style(green)
                .title_style(green),
        );
    frame.render_widget(card, area);
}
