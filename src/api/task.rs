//! Runs fetch effects and turns their results into completion actions.

use log::{debug, info};

use super::client::PlaceholderApi;
use crate::core::action::{Action, Effect};

/// Perform the I/O an `Effect` asks for.
///
/// Returns the completion action to feed back into `update()`, tagged with
/// the trigger's sequence number. Non-fetch effects yield `None`.
pub async fn perform(api: &dyn PlaceholderApi, effect: Effect) -> Option<Action> {
    match effect {
        Effect::FetchUser { seq, id } => {
            debug!("{}: fetching user {} (seq={})", api.name(), id.0, seq);
            let outcome = api.fetch_user(id).await;
            info!("User fetch settled: seq={}, ok={}", seq, outcome.is_ok());
            Some(Action::UserSettled { seq, outcome })
        }
        Effect::FetchPosts { seq, query } => {
            debug!("{}: fetching {} posts (seq={})", api.name(), query.limit, seq);
            let outcome = api.fetch_posts(query).await;
            info!("Posts fetch settled: seq={}, ok={}", seq, outcome.is_ok());
            Some(Action::PostsSettled { seq, outcome })
        }
        Effect::None | Effect::Quit => None,
    }
}
