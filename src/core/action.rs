//! # Actions
//!
//! Everything that can happen in ActionDeck becomes an `Action`.
//! User presses Enter on the ID field? That's `Action::SubmitUser(query)`.
//! The request comes back? That's `Action::UserSettled { seq, outcome }`.
//!
//! The `update()` function takes the current state and an action, mutates
//! the state, and returns an `Effect` describing any I/O the adapter should
//! perform. No side effects here. I/O happens elsewhere.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{debug, info};

use crate::Tab;
use crate::api::types::{Post, User};
use crate::core::error::ActionError;
use crate::core::input::{PostsQuery, UserId, UserQuery};
use crate::core::state::{App, LastAction};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// The user ID form was submitted.
    SubmitUser(UserQuery),
    /// A user fetch finished.
    UserSettled {
        seq: u64,
        outcome: Result<User, ActionError>,
    },
    /// The posts button was pressed.
    RequestPosts(PostsQuery),
    /// A posts fetch finished.
    PostsSettled {
        seq: u64,
        outcome: Result<Vec<Post>, ActionError>,
    },
    /// The filter search field changed.
    SearchChanged(String),
    SwitchTab(Tab),
    Quit,
}

/// I/O requested by `update()`, carried out by the adapter.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    Quit,
    FetchUser { seq: u64, id: UserId },
    FetchPosts { seq: u64, query: PostsQuery },
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::SubmitUser(query) => match query.validate() {
            Ok(id) => {
                let seq = app.user.begin();
                info!("User fetch triggered: id={}, seq={}", id.0, seq);
                Effect::FetchUser { seq, id }
            }
            Err(e) => {
                info!("User input rejected: {:?} ({})", query.user_id, e);
                app.user.reject(e);
                Effect::None
            }
        },
        Action::UserSettled { seq, outcome } => {
            if app.user.settle(seq, outcome) {
                app.last_action = Some(LastAction::User);
            }
            Effect::None
        }
        Action::RequestPosts(query) => {
            let seq = app.posts.begin();
            info!("Posts fetch triggered: limit={}, seq={}", query.limit, seq);
            Effect::FetchPosts { seq, query }
        }
        Action::PostsSettled { seq, outcome } => {
            if app.posts.settle(seq, outcome) {
                app.last_action = Some(LastAction::Posts);
            }
            Effect::None
        }
        Action::SearchChanged(term) => {
            debug!("Search term: {:?}", term);
            app.filter.set_term(term);
            Effect::None
        }
        Action::SwitchTab(tab) => {
            app.tab = tab;
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}
