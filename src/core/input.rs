//! Typed form inputs handed from the trigger surfaces to the reducer.

use crate::core::error::ActionError;

pub const INVALID_USER_ID: &str = "Please enter a valid user ID";

/// Raw contents of the user ID form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserQuery {
    pub user_id: String,
}

impl UserQuery {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
        }
    }

    /// Checks the field locally. Surrounding whitespace is ignored.
    pub fn validate(&self) -> Result<UserId, ActionError> {
        let trimmed = self.user_id.trim();
        match trimmed.parse::<u32>() {
            Ok(id) if id > 0 => Ok(UserId(id)),
            _ => Err(ActionError::Validation(INVALID_USER_ID.to_string())),
        }
    }
}

/// A validated, positive user ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserId(pub u32);

/// Parameters for the posts fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PostsQuery {
    pub limit: u8,
}
