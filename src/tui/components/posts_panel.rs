//! # Posts Panel
//!
//! A button that fetches the latest posts and a scrollable list of cards.
//!
//! Cards are measured with `textwrap` before rendering so the `ScrollView`
//! canvas can be sized up front. The highlighted card is tracked by post id
//! rather than position, so a refetch that returns the same post keeps it
//! selected.

use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Position, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget, Wrap};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::api::types::Post;
use crate::core::action_state::ActionState;
use crate::tui::component::Component;
use crate::tui::components::result_view::{
    BANNER_HEIGHT, Body, ResultView, render_error, render_loading, render_ready,
};
use crate::tui::event::TuiEvent;

/// Borders (2) + "Post ID" footer (1)
const VERTICAL_OVERHEAD: u16 = 3;
/// Left/right borders + scrollbar column
const HORIZONTAL_OVERHEAD: u16 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostsEvent {
    Fetch,
}

#[derive(Default)]
pub struct PostsPanelState {
    pub scroll_state: ScrollViewState,
    pub selected_id: Option<u32>,
    /// Card heights from the last render, in list order
    heights: Vec<u16>,
    viewport_height: u16,
}

impl PostsPanelState {
    pub fn new() -> Self {
        Self::default()
    }

    /// `posts` is the list currently on screen, if any. Pending blocks `Fetch`.
    pub fn handle_event(
        &mut self,
        event: &TuiEvent,
        posts: Option<&[Post]>,
        pending: bool,
    ) -> Option<PostsEvent> {
        match event {
            TuiEvent::Submit if !pending => Some(PostsEvent::Fetch),
            TuiEvent::ScrollUp => {
                self.move_selection(posts.unwrap_or_default(), -1);
                None
            }
            TuiEvent::ScrollDown => {
                self.move_selection(posts.unwrap_or_default(), 1);
                None
            }
            _ => None,
        }
    }

    fn move_selection(&mut self, posts: &[Post], delta: i32) {
        if posts.is_empty() {
            return;
        }
        let current = self
            .selected_id
            .and_then(|id| posts.iter().position(|p| p.id == id));
        let next = match (current, delta < 0) {
            (None, _) => 0,
            (Some(i), true) => i.saturating_sub(1),
            (Some(i), false) => (i + 1).min(posts.len() - 1),
        };
        self.selected_id = posts.get(next).map(|p| p.id);
        self.scroll_to_index(next);
    }

    /// Scroll so the card at `idx` is fully visible (top-aligned if taller
    /// than the viewport).
    fn scroll_to_index(&mut self, idx: usize) {
        let Some(&height) = self.heights.get(idx) else {
            return;
        };
        let top = self.heights.iter().take(idx).copied().fold(0u16, u16::saturating_add);
        let bottom = top.saturating_add(height);
        let offset_y = self.scroll_state.offset().y;
        if top < offset_y || height > self.viewport_height {
            self.scroll_state.set_offset(Position { x: 0, y: top });
        } else if bottom > offset_y.saturating_add(self.viewport_height) {
            let y = bottom.saturating_sub(self.viewport_height);
            self.scroll_state.set_offset(Position { x: 0, y });
        }
    }
}

/// Predicted height of a card rendered at `width`, clamped to `u16::MAX`.
pub fn card_height(post: &Post, width: u16) -> u16 {
    let content_width = width.saturating_sub(HORIZONTAL_OVERHEAD);
    if content_width == 0 {
        return 1;
    }
    let options = || {
        textwrap::Options::new(content_width as usize)
            .break_words(true)
            .word_separator(textwrap::WordSeparator::AsciiSpace)
    };
    let lines = |text: &str| {
        let count = textwrap::wrap(text.trim(), options()).len().max(1);
        u16::try_from(count).unwrap_or(u16::MAX)
    };
    lines(&post.title)
        .saturating_add(lines(&post.body))
        .saturating_add(VERTICAL_OVERHEAD)
}

struct PostCard<'a> {
    post: &'a Post,
    selected: bool,
}

impl Widget for PostCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let accent = Style::default().fg(Color::Blue);
        let border = if self.selected {
            accent.add_modifier(Modifier::BOLD)
        } else {
            accent.add_modifier(Modifier::DIM)
        };
        let mut lines = vec![Line::from(Span::styled(
            self.post.title.trim().to_string(),
            accent.add_modifier(Modifier::BOLD),
        ))];
        lines.push(Line::from(self.post.body.trim().to_string()));
        lines.push(Line::from(Span::styled(
            format!("Post ID: {}", self.post.id),
            Style::default().fg(Color::DarkGray),
        )));

        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(Block::bordered().border_style(border))
            .render(area, buf);
    }
}

pub struct PostsPanel<'a> {
    state: &'a mut PostsPanelState,
    action: &'a ActionState<Vec<Post>>,
}

impl<'a> PostsPanel<'a> {
    pub fn new(state: &'a mut PostsPanelState, action: &'a ActionState<Vec<Post>>) -> Self {
        Self { state, action }
    }

    fn render_posts(&mut self, frame: &mut Frame, area: Rect, posts: &[Post]) {
        let content_width = area.width.saturating_sub(1);
        self.state.heights = posts.iter().map(|p| card_height(p, area.width)).collect();
        self.state.viewport_height = area.height;
        let total = self.state.heights.iter().copied().fold(0u16, u16::saturating_add);

        let mut scroll_view = ScrollView::new(Size::new(content_width, total))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        let mut y: u16 = 0;
        for (post, &height) in posts.iter().zip(&self.state.heights) {
            let card = PostCard {
                post,
                selected: self.state.selected_id == Some(post.id),
            };
            scroll_view.render_widget(card, Rect::new(0, y, content_width, height));
            y = y.saturating_add(height);
        }

        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll_state);
    }
}

impl Component for PostsPanel<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let view = ResultView::of(self.action);
        let loading_height = if view.loading { BANNER_HEIGHT } else { 0 };

        let [button_area, loading_area, body_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(loading_height),
            Constraint::Min(0),
        ])
        .areas(area);

        let button = if view.loading {
            Span::styled(" [ Loading... ] ", Style::default().fg(Color::DarkGray))
        } else {
            Span::styled(
                " [ Get Random Posts ] ",
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            )
        };
        frame.render_widget(
            Line::from(vec![button, Span::raw(" Enter to fetch, ↑/↓ to browse")]),
            button_area,
        );

        if view.loading {
            render_loading(frame, loading_area, "Fetching posts...");
        }

        match view.body {
            Body::Ready => render_ready(frame, body_area, "Press Enter to fetch posts."),
            Body::Error(message) => {
                let [banner, _] =
                    Layout::vertical([Constraint::Length(BANNER_HEIGHT), Constraint::Min(0)])
                        .areas(body_area);
                render_error(frame, banner, message);
            }
            Body::Success(posts) => {
                let block = Block::bordered().title("Random Posts");
                let inner = block.inner(body_area);
                frame.render_widget(block, body_area);
                if posts.is_empty() {
                    frame.render_widget(
                        Paragraph::new("No posts.").style(Style::default().fg(Color::DarkGray)),
                        inner,
                    );
                } else {
                    self.render_posts(frame, inner, posts);
                }
            }
        }
    }
}
