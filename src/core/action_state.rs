//! # Action State
//!
//! The lifecycle of one asynchronous operation, and the guard that keeps
//! out-of-order completions from clobbering newer results.
//!
//! ```text
//!   Idle ──begin()──► Pending ──settle(seq)──► Success | Failed
//!     │                  │  ▲                       │
//!     └──reject()──► Failed  └──────begin()─────────┘
//! ```
//!
//! Every trigger is stamped with a sequence number. A completion is only
//! applied if it carries the number of the most recent trigger; anything
//! older is dropped on the floor.

use log::debug;

use crate::core::error::ActionError;

/// Tri-state record of an async operation.
///
/// Exactly one of `result`/`error` is set once settled. Both are empty
/// before the first trigger.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionState<T> {
    pub result: Option<T>,
    pub error: Option<String>,
    pub pending: bool,
}

impl<T> Default for ActionState<T> {
    fn default() -> Self {
        Self {
            result: None,
            error: None,
            pending: false,
        }
    }
}

impl<T> ActionState<T> {
    pub fn succeeded(result: T) -> Self {
        Self {
            result: Some(result),
            error: None,
            pending: false,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            result: None,
            error: Some(message.into()),
            pending: false,
        }
    }

    pub fn from_outcome(outcome: Result<T, ActionError>) -> Self {
        match outcome {
            Ok(result) => Self::succeeded(result),
            Err(e) => Self::failed(e.to_string()),
        }
    }

    /// True before the first trigger has settled.
    pub fn is_idle(&self) -> bool {
        self.result.is_none() && self.error.is_none()
    }
}

/// Owns an `ActionState` and the sequence number of the latest trigger.
#[derive(Debug)]
pub struct ActionSlot<T> {
    state: ActionState<T>,
    issued: u64,
}

impl<T> Default for ActionSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ActionSlot<T> {
    pub fn new() -> Self {
        Self {
            state: ActionState::default(),
            issued: 0,
        }
    }

    pub fn state(&self) -> &ActionState<T> {
        &self.state
    }

    pub fn is_pending(&self) -> bool {
        self.state.pending
    }

    /// Sequence number of the most recent trigger (0 = never triggered).
    pub fn latest(&self) -> u64 {
        self.issued
    }

    /// Start a new request. Stale content stays visible under the pending flag.
    pub fn begin(&mut self) -> u64 {
        self.issued += 1;
        self.state.pending = true;
        self.issued
    }

    /// Settle synchronously without a request (bad input).
    ///
    /// Still counts as a trigger, so a request already in flight becomes stale.
    pub fn reject(&mut self, error: ActionError) {
        self.issued += 1;
        self.state = ActionState::failed(error.to_string());
    }

    /// Apply a completion. Returns false if `seq` is not the latest trigger.
    pub fn settle(&mut self, seq: u64, outcome: Result<T, ActionError>) -> bool {
        if seq != self.issued {
            debug!(
                "Discarding stale completion (seq={}, latest={})",
                seq, self.issued
            );
            return false;
        }
        self.state = ActionState::from_outcome(outcome);
        true
    }
}
