use std::fmt;

/// User-facing failure of a triggered action.
///
/// Every failure ends up as a single display string in `ActionState::error`.
/// The variant only records whether the network was ever touched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionError {
    /// Local input was rejected before any request was made.
    Validation(String),
    /// Network failure, non-success HTTP status, or a malformed body.
    FetchFailed(String),
}

impl ActionError {
    pub fn message(&self) -> &str {
        match self {
            ActionError::Validation(msg) | ActionError::FetchFailed(msg) => msg,
        }
    }
}

impl fmt::Display for ActionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for ActionError {}
