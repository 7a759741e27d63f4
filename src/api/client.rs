//! JSONPlaceholder client.
//!
//! Failures are kept apart as `ApiError` long enough to be logged, then
//! collapsed into `ActionError::FetchFailed` for display. The widget never
//! learns whether the network, the status code, or the body was at fault.

use std::fmt;

use async_trait::async_trait;
use log::{debug, info, warn};
use serde::de::DeserializeOwned;

use super::types::{Post, User};
use crate::core::error::ActionError;
use crate::core::input::{PostsQuery, UserId};

pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

const USER_NOT_FOUND: &str = "User not found";
const USER_FETCH_FAILED: &str = "Failed to fetch user";
const POSTS_FETCH_FAILED: &str = "Failed to fetch posts";

/// Transport-level failure detail. Logged, never displayed as-is.
#[derive(Debug)]
pub enum ApiError {
    /// Connection refused, DNS, TLS, or body read failure.
    Network(String),
    /// Server answered with a non-success status.
    Status(u16),
    /// Body was not the expected JSON.
    Parse(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "network error: {msg}"),
            ApiError::Status(status) => write!(f, "HTTP {status}"),
            ApiError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

/// Collapse into the single display-facing kind.
///
/// A bad status gets the widget's fixed message; anything else keeps the
/// underlying text, falling back to `fallback` if that is empty.
fn collapse(err: ApiError, status_message: &str, fallback: &str) -> ActionError {
    let message = match err {
        ApiError::Status(_) => status_message.to_string(),
        ApiError::Network(msg) | ApiError::Parse(msg) if !msg.trim().is_empty() => msg,
        _ => fallback.to_string(),
    };
    ActionError::FetchFailed(message)
}

/// The remote data source behind the fetch widgets.
#[async_trait]
pub trait PlaceholderApi: Send + Sync {
    /// Returns the name of the backend (for logs).
    fn name(&self) -> &str;

    async fn fetch_user(&self, id: UserId) -> Result<User, ActionError>;

    async fn fetch_posts(&self, query: PostsQuery) -> Result<Vec<Post>, ActionError>;
}

/// reqwest-backed implementation talking to a JSONPlaceholder-compatible server.
pub struct HttpPlaceholderApi {
    base_url: String,
    client: reqwest::Client,
}

impl HttpPlaceholderApi {
    pub fn new(base_url: Option<String>) -> Self {
        let base_url = base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        info!("GET {} {:?}", url, query);

        let response = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        debug!("Response status for {}: {}", url, status);
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        serde_json::from_str(&body).map_err(|e| ApiError::Parse(e.to_string()))
    }
}

#[async_trait]
impl PlaceholderApi for HttpPlaceholderApi {
    fn name(&self) -> &str {
        "jsonplaceholder"
    }

    async fn fetch_user(&self, id: UserId) -> Result<User, ActionError> {
        self.get_json::<User>(&format!("/users/{}", id.0), &[])
            .await
            .map_err(|e| {
                warn!("User {} fetch failed: {}", id.0, e);
                collapse(e, USER_NOT_FOUND, USER_FETCH_FAILED)
            })
    }

    async fn fetch_posts(&self, query: PostsQuery) -> Result<Vec<Post>, ActionError> {
        let limit = usize::from(query.limit);
        let mut posts = self
            .get_json::<Vec<Post>>("/posts", &[("_limit", query.limit.to_string())])
            .await
            .map_err(|e| {
                warn!("Posts fetch failed: {}", e);
                collapse(e, POSTS_FETCH_FAILED, POSTS_FETCH_FAILED)
            })?;
        if posts.len() > limit {
            debug!("Server ignored _limit ({} posts), truncating to {}", posts.len(), limit);
            posts.truncate(limit);
        }
        Ok(posts)
    }
}
