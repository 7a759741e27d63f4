//! # Core Application Logic
//!
//! This module contains ActionDeck's business logic.
//! It knows nothing about any specific UI technology or HTTP client.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • Effect (I/O request) │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                   ┌────────────┴────────────┐
//!                   ▼                         ▼
//!            ┌────────────┐            ┌────────────┐
//!            │    TUI     │            │    API     │
//!            │  Adapter   │──Effect───►│  perform() │
//!            │ (ratatui)  │◄──Action───│ (reqwest)  │
//!            └────────────┘            └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct, all application state in one place
//! - [`action`]: The `Action` enum and `update()` reducer
//! - [`action_state`]: `ActionState` and the sequence-guarded `ActionSlot`
//! - [`input`]: Typed form inputs and their validation
//! - [`filter`]: The memoized name filter
//! - [`config`]: Config file, env and CLI resolution

pub mod action;
pub mod action_state;
pub mod config;
pub mod error;
pub mod filter;
pub mod input;
pub mod state;
