//! # FormField Component
//!
//! Single-line text field used as a trigger surface. Enter emits the raw
//! text; the parent packages it into a typed query.
//!
//! ## Props
//!
//! - `disabled`: set while the owning action is pending. A disabled field
//!   ignores edits and never emits `Submit`.
//!
//! The buffer is internal state and survives submission, like a form
//! input keeps its value after the request goes out.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

#[derive(Debug, Clone, PartialEq)]
pub enum FieldEvent {
    /// Enter pressed while enabled. Carries the text as typed.
    Submit(String),
    /// Buffer contents changed.
    Changed(String),
}

pub struct FormField {
    pub label: String,
    pub placeholder: String,
    /// Disabled while pending (Prop)
    pub disabled: bool,
    buffer: String,
    /// Byte offset of the cursor, always on a char boundary
    pos: usize,
}

impl FormField {
    pub fn new(label: impl Into<String>, placeholder: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            placeholder: placeholder.into(),
            disabled: false,
            buffer: String::new(),
            pos: 0,
        }
    }

    pub fn value(&self) -> &str {
        &self.buffer
    }

    fn prev_boundary(&self) -> usize {
        self.buffer[..self.pos]
            .char_indices()
            .next_back()
            .map_or(0, |(i, _)| i)
    }

    fn next_boundary(&self) -> usize {
        self.buffer[self.pos..]
            .chars()
            .next()
            .map_or(self.pos, |c| self.pos + c.len_utf8())
    }

    fn changed(&self) -> Option<FieldEvent> {
        Some(FieldEvent::Changed(self.buffer.clone()))
    }
}

impl Component for FormField {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_style = if self.disabled {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::Cyan)
        };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(self.label.as_str());

        let paragraph = if self.value().is_empty() {
            Paragraph::new(self.placeholder.as_str())
                .style(Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC))
        } else if self.disabled {
            Paragraph::new(self.buffer.as_str()).style(Style::default().fg(Color::DarkGray))
        } else {
            Paragraph::new(self.buffer.as_str())
        };
        frame.render_widget(paragraph.block(block), area);

        if !self.disabled && area.width > 2 && area.height > 2 {
            let offset = self.buffer[..self.pos].width() as u16;
            let x = area.x + 1 + offset.min(area.width - 3);
            frame.set_cursor_position((x, area.y + 1));
        }
    }
}

impl EventHandler for FormField {
    type Event = FieldEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        if self.disabled {
            return None;
        }
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.insert(self.pos, *c);
                self.pos += c.len_utf8();
                self.changed()
            }
            TuiEvent::Paste(text) => {
                // Single-line field
                let line: String = text.chars().filter(|c| *c != '\n' && *c != '\r').collect();
                self.buffer.insert_str(self.pos, &line);
                self.pos += line.len();
                self.changed()
            }
            TuiEvent::Backspace if self.pos > 0 => {
                let prev = self.prev_boundary();
                self.buffer.drain(prev..self.pos);
                self.pos = prev;
                self.changed()
            }
            TuiEvent::Delete if self.pos < self.buffer.len() => {
                let next = self.next_boundary();
                self.buffer.drain(self.pos..next);
                self.changed()
            }
            TuiEvent::CursorLeft => {
                self.pos = self.prev_boundary();
                None
            }
            TuiEvent::CursorRight => {
                self.pos = self.next_boundary();
                None
            }
            TuiEvent::CursorHome => {
                self.pos = 0;
                None
            }
            TuiEvent::CursorEnd => {
                self.pos = self.buffer.len();
                None
            }
            TuiEvent::Submit => Some(FieldEvent::Submit(self.buffer.clone())),
            _ => None,
        }
    }
}
