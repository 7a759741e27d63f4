//! # Filter Panel
//!
//! Search field plus the live-filtered name list. Every keystroke emits the
//! new term; the list itself comes from `FilterList::visible()`.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, List, ListItem};

use crate::core::filter::FilterList;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::form_field::{FieldEvent, FormField};
use crate::tui::event::TuiEvent;

pub struct FilterPanelState {
    pub field: FormField,
}

impl Default for FilterPanelState {
    fn default() -> Self {
        Self::new()
    }
}

impl FilterPanelState {
    pub fn new() -> Self {
        Self {
            field: FormField::new("Search users...", "type to filter"),
        }
    }

    /// Returns the new search term whenever the field changes.
    pub fn handle_event(&mut self, event: &TuiEvent) -> Option<String> {
        match self.field.handle_event(event)? {
            FieldEvent::Changed(term) => Some(term),
            FieldEvent::Submit(_) => None,
        }
    }
}

pub struct FilterPanel<'a> {
    state: &'a mut FilterPanelState,
    list: &'a FilterList,
}

impl<'a> FilterPanel<'a> {
    pub fn new(state: &'a mut FilterPanelState, list: &'a FilterList) -> Self {
        Self { state, list }
    }
}

impl Component for FilterPanel<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [field_area, list_area] =
            Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(area);

        self.state.field.render(frame, field_area);

        let items: Vec<ListItem> = self
            .list
            .visible()
            .into_iter()
            .map(|person| ListItem::new(Line::from(format!("• {}", person.name))))
            .collect();

        let block = Block::bordered().title("Users");
        if items.is_empty() {
            let empty = List::new([ListItem::new("No matches.")])
                .style(Style::default().fg(Color::DarkGray))
                .block(block);
            frame.render_widget(empty, list_area);
        } else {
            frame.render_widget(List::new(items).block(block), list_area);
        }
    }
}
