//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::api::types::{Address, Company, Post, User};
use crate::api::PlaceholderApi;
use crate::core::error::ActionError;
use crate::core::input::{PostsQuery, UserId};
use crate::core::state::App;

/// A canned-response API that counts how often it was hit.
pub struct StubApi {
    user: Result<User, ActionError>,
    posts: Result<Vec<Post>, ActionError>,
    calls: AtomicUsize,
}

impl Default for StubApi {
    fn default() -> Self {
        Self {
            user: Err(ActionError::FetchFailed("User not found".to_string())),
            posts: Ok(Vec::new()),
            calls: AtomicUsize::new(0),
        }
    }
}

impl StubApi {
    pub fn with_user(mut self, user: Result<User, ActionError>) -> Self {
        self.user = user;
        self
    }

    pub fn with_posts(mut self, posts: Result<Vec<Post>, ActionError>) -> Self {
        self.posts = posts;
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PlaceholderApi for StubApi {
    fn name(&self) -> &str {
        "stub"
    }

    async fn fetch_user(&self, _id: UserId) -> Result<User, ActionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.user.clone()
    }

    async fn fetch_posts(&self, query: PostsQuery) -> Result<Vec<Post>, ActionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.posts
            .clone()
            .map(|posts| posts.into_iter().take(usize::from(query.limit)).collect())
    }
}

/// Creates a test App with default settings.
pub fn test_app() -> App {
    App::new()
}

/// A user shaped like JSONPlaceholder's; id 1 is Leanne Graham.
pub fn sample_user(id: u32) -> User {
    let name = if id == 1 {
        "Leanne Graham".to_string()
    } else {
        format!("User {id}")
    };
    User {
        id,
        name,
        username: "Bret".to_string(),
        email: "Sincere@april.biz".to_string(),
        phone: "1-770-736-8031 x56442".to_string(),
        website: "hildegard.org".to_string(),
        company: Some(Company {
            name: "Romaguera-Crona".to_string(),
        }),
        address: Some(Address {
            street: "Kulas Light".to_string(),
            suite: "Apt. 556".to_string(),
            city: "Gwenborough".to_string(),
            zipcode: "92998-3874".to_string(),
        }),
    }
}

pub fn sample_posts(count: u32) -> Vec<Post> {
    (1..=count)
        .map(|id| Post {
            id,
            user_id: 1,
            title: format!("Post title {id}"),
            body: format!("Body of post {id}"),
        })
        .collect()
}
