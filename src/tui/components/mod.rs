//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! - `TitleBar`: app name, panel tabs, status text
//! - `result_view`: the `ActionState → ResultView` projection and its banners
//!
//! ### Stateful Components (Event-Driven)
//!
//! - `FormField`: single-line input that emits `Submit`/`Changed`
//! - `UserPanel`: ID form + user detail view
//! - `PostsPanel`: fetch button + scrollable post cards
//! - `FilterPanel`: search field + filtered list
//!
//! Panels follow the persistent state + transient wrapper pattern: the
//! `*State` struct lives in `TuiState`, the panel itself is built each
//! frame from borrowed state and core data passed in as props.
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── title_bar.rs     (Top status line)
//! ├── form_field.rs    (Trigger surface input)
//! ├── result_view.rs   (Loading / error / ready rendering)
//! ├── user_panel.rs    (User fetcher)
//! ├── posts_panel.rs   (Posts fetcher)
//! └── filter_panel.rs  (Memoized filter list)
//! ```

pub mod filter_panel;
pub mod form_field;
pub mod posts_panel;
pub mod result_view;
mod title_bar;
pub mod user_panel;

pub use filter_panel::{FilterPanel, FilterPanelState};
pub use posts_panel::{PostsEvent, PostsPanel, PostsPanelState};
pub use title_bar::TitleBar;
pub use user_panel::{UserPanel, UserPanelState};
