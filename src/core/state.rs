//! # Application State
//!
//! Core business state for ActionDeck. Domain logic only, no TUI-specific
//! types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── tab: Tab                        // active panel
//! ├── user: ActionSlot<User>          // user fetch lifecycle
//! ├── posts: ActionSlot<Vec<Post>>    // posts fetch lifecycle
//! ├── filter: FilterList              // static list + search term
//! ├── posts_limit: u8                 // posts per fetch
//! └── last_action: Option<LastAction> // most recent applied completion
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use crate::Tab;
use crate::api::types::{Post, User};
use crate::core::action_state::ActionSlot;
use crate::core::config::{DEFAULT_POSTS_LIMIT, ResolvedConfig};
use crate::core::filter::{FilterList, default_people, people_from_names};
use crate::core::input::PostsQuery;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LastAction {
    User,
    Posts,
}

impl LastAction {
    pub fn label(self) -> &'static str {
        match self {
            LastAction::User => "user",
            LastAction::Posts => "posts",
        }
    }
}

pub struct App {
    pub tab: Tab,
    pub user: ActionSlot<User>,
    pub posts: ActionSlot<Vec<Post>>,
    pub filter: FilterList,
    pub posts_limit: u8,
    pub last_action: Option<LastAction>,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self {
            tab: Tab::default(),
            user: ActionSlot::new(),
            posts: ActionSlot::new(),
            filter: FilterList::new(default_people()),
            posts_limit: DEFAULT_POSTS_LIMIT,
            last_action: None,
        }
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self {
            tab: config.start_tab,
            filter: FilterList::new(people_from_names(&config.filter_names)),
            posts_limit: config.posts_limit,
            ..Self::new()
        }
    }

    /// Query for the next posts fetch.
    pub fn posts_query(&self) -> PostsQuery {
        PostsQuery {
            limit: self.posts_limit,
        }
    }

    /// Status line text for the active panel.
    pub fn status(&self) -> String {
        match self.tab {
            Tab::Users if self.user.is_pending() => "Loading user...".to_string(),
            Tab::Posts if self.posts.is_pending() => "Loading posts...".to_string(),
            Tab::Filter => {
                format!("{} of {} shown", self.filter.shown(), self.filter.people().len())
            }
            _ => match self.last_action {
                Some(action) => format!("Last action: {}", action.label()),
                None => "Ready".to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_app;

    #[test]
    fn test_app_new_defaults() {
        let app = test_app();
        assert_eq!(app.tab, Tab::Users);
        assert!(app.user.state().is_idle());
        assert!(app.posts.state().is_idle());
        assert_eq!(app.posts_limit, 3);
        assert_eq!(app.filter.people().len(), 4);
        assert_eq!(app.status(), "Ready");
    }

    #[test]
    fn test_status_reflects_pending_and_last_action() {
        let mut app = test_app();
        app.tab = Tab::Posts;
        let seq = app.posts.begin();
        assert_eq!(app.status(), "Loading posts...");

        app.posts.settle(seq, Ok(Vec::new()));
        app.last_action = Some(LastAction::Posts);
        assert_eq!(app.status(), "Last action: posts");
    }

    #[test]
    fn test_filter_status_counts_matches() {
        let mut app = test_app();
        app.tab = Tab::Filter;
        app.filter.set_term("li");
        assert_eq!(app.status(), "2 of 4 shown");
    }

    #[test]
    fn test_filter_status_reads_memoized_count() {
        let mut app = test_app();
        app.tab = Tab::Filter;
        app.filter.set_term("a");
        let runs = app.filter.recomputations();
        for _ in 0..5 {
            assert_eq!(app.status(), "2 of 4 shown");
        }
        assert_eq!(app.filter.recomputations(), runs);
    }

    #[test]
    fn test_from_config_applies_settings() {
        let config = ResolvedConfig {
            start_tab: Tab::Posts,
            base_url: "http://localhost".to_string(),
            posts_limit: 7,
            filter_names: vec!["Zed".to_string()],
        };
        let app = App::from_config(&config);
        assert_eq!(app.tab, Tab::Posts);
        assert_eq!(app.posts_limit, 7);
        assert_eq!(app.filter.people()[0].name, "Zed");
    }
}
