//! ActionDeck library exports for testing

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub mod api;
pub mod core;
pub mod tui;

#[cfg(test)]
pub mod test_support;

/// The panel shown in the main area.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Users,
    Posts,
    Filter,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Users, Tab::Posts, Tab::Filter];

    pub fn label(self) -> &'static str {
        match self {
            Tab::Users => "User Fetcher",
            Tab::Posts => "Posts",
            Tab::Filter => "Filter",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Tab::Users => 0,
            Tab::Posts => 1,
            Tab::Filter => 2,
        }
    }

    pub fn next(self) -> Self {
        match self {
            Tab::Users => Tab::Posts,
            Tab::Posts => Tab::Filter,
            Tab::Filter => Tab::Users,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Tab::Users => Tab::Filter,
            Tab::Posts => Tab::Users,
            Tab::Filter => Tab::Posts,
        }
    }

    /// Parses a tab name as used in env vars and config (`users`, `posts`, `filter`).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "users" => Some(Tab::Users),
            "posts" => Some(Tab::Posts),
            "filter" => Some(Tab::Filter),
            _ => None,
        }
    }
}
