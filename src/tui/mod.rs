//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Loop
//!
//! ```text
//!  crossterm ──TuiEvent──► route_event ──Action──► update ──Effect──► spawn_fetch
//!                                                    ▲                    │
//!                                                    └──Action (mpsc)─────┘
//! ```
//!
//! Completions from background tasks come back over a channel and are
//! applied on this thread, so `App` is never shared. The loop only redraws
//! when an event or completion arrived.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::Duration;

use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;

use crate::api::{HttpPlaceholderApi, PlaceholderApi, perform};
use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::Tab;
use crate::tui::components::{FilterPanelState, PostsEvent, PostsPanelState, UserPanelState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub user_panel: UserPanelState,
    pub posts_panel: PostsPanelState,
    pub filter_panel: FilterPanelState,
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            user_panel: UserPanelState::new(),
            posts_panel: PostsPanelState::new(),
            filter_panel: FilterPanelState::new(),
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture, EnableBracketedPaste)?;
        info!("Terminal modes enabled (mouse, bracketed paste)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture, DisableBracketedPaste);
    }
}

/// Translate a terminal event into a core action for the active panel.
fn route_event(app: &App, tui: &mut TuiState, event: &TuiEvent) -> Option<Action> {
    match event {
        TuiEvent::Quit => return Some(Action::Quit),
        TuiEvent::NextTab => return Some(Action::SwitchTab(app.tab.next())),
        TuiEvent::PrevTab => return Some(Action::SwitchTab(app.tab.prev())),
        TuiEvent::Resize => return None,
        _ => {}
    }

    match app.tab {
        Tab::Users => {
            // Sync the disabled prop before the field sees the event, so a
            // second Enter before the next frame cannot double-submit
            tui.user_panel.field.disabled = app.user.is_pending();
            tui.user_panel.handle_event(event).map(Action::SubmitUser)
        }
        Tab::Posts => {
            let posts = app.posts.state().result.as_deref();
            tui.posts_panel
                .handle_event(event, posts, app.posts.is_pending())
                .map(|PostsEvent::Fetch| Action::RequestPosts(app.posts_query()))
        }
        Tab::Filter => tui.filter_panel.handle_event(event).map(Action::SearchChanged),
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let api: Arc<dyn PlaceholderApi> =
        Arc::new(HttpPlaceholderApi::new(Some(config.base_url.clone())));
    let mut app = App::from_config(&config);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for completions from background tasks
    let (tx, rx) = mpsc::channel();

    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        // Short timeout while a request is out so completions show promptly
        let busy = app.user.is_pending() || app.posts.is_pending();
        let timeout = if busy {
            Duration::from_millis(50)
        } else {
            Duration::from_millis(250)
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            needs_redraw = true;
            let Some(action) = route_event(&app, &mut tui, &event) else {
                continue;
            };
            debug!("Dispatching {:?}", action);
            match update(&mut app, action) {
                Effect::Quit => should_quit = true,
                Effect::None => {}
                effect => spawn_fetch(api.clone(), effect, tx.clone()),
            }
        }

        if should_quit {
            break;
        }

        // Handle background task completions
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            if update(&mut app, action) == Effect::Quit {
                should_quit = true;
            }
        }

        if should_quit {
            break;
        }
    }

    info!("Shutting down");
    ratatui::restore();
    Ok(())
}

fn spawn_fetch(api: Arc<dyn PlaceholderApi>, effect: Effect, tx: mpsc::Sender<Action>) {
    info!("Spawning fetch: {:?}", effect);
    tokio::spawn(async move {
        if let Some(action) = perform(api.as_ref(), effect).await
            && tx.send(action).is_err()
        {
            warn!("Failed to deliver completion: receiver dropped");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::UserQuery;
    use crate::test_support::test_app;

    fn type_str(app: &App, tui: &mut TuiState, text: &str) -> Vec<Action> {
        text.chars()
            .filter_map(|c| route_event(app, tui, &TuiEvent::InputChar(c)))
            .collect()
    }

    #[test]
    fn test_global_keys() {
        let app = test_app();
        let mut tui = TuiState::new();
        assert_eq!(route_event(&app, &mut tui, &TuiEvent::Quit), Some(Action::Quit));
        assert_eq!(
            route_event(&app, &mut tui, &TuiEvent::NextTab),
            Some(Action::SwitchTab(Tab::Posts))
        );
        assert_eq!(
            route_event(&app, &mut tui, &TuiEvent::PrevTab),
            Some(Action::SwitchTab(Tab::Filter))
        );
        assert_eq!(route_event(&app, &mut tui, &TuiEvent::Resize), None);
    }

    #[test]
    fn test_users_tab_submits_typed_query() {
        let app = test_app();
        let mut tui = TuiState::new();
        assert!(type_str(&app, &mut tui, "42").is_empty());
        assert_eq!(
            route_event(&app, &mut tui, &TuiEvent::Submit),
            Some(Action::SubmitUser(UserQuery::new("42")))
        );
    }

    #[test]
    fn test_users_tab_blocks_submit_while_pending() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        type_str(&app, &mut tui, "1");
        let effect = update(&mut app, Action::SubmitUser(UserQuery::new("1")));
        assert!(matches!(effect, Effect::FetchUser { .. }));

        assert_eq!(route_event(&app, &mut tui, &TuiEvent::Submit), None);
    }

    #[test]
    fn test_posts_tab_fetches_once_until_settled() {
        let mut app = test_app();
        app.tab = Tab::Posts;
        let mut tui = TuiState::new();
        assert_eq!(
            route_event(&app, &mut tui, &TuiEvent::Submit),
            Some(Action::RequestPosts(app.posts_query()))
        );
        let query = app.posts_query();
        update(&mut app, Action::RequestPosts(query));
        assert_eq!(route_event(&app, &mut tui, &TuiEvent::Submit), None);
    }

    #[test]
    fn test_filter_tab_emits_search_on_every_keystroke() {
        let mut app = test_app();
        app.tab = Tab::Filter;
        let mut tui = TuiState::new();
        assert_eq!(
            type_str(&app, &mut tui, "Ch"),
            vec![
                Action::SearchChanged("C".to_string()),
                Action::SearchChanged("Ch".to_string())
            ]
        );
    }
}
