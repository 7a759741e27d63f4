pub mod client;
pub mod task;
pub mod types;

pub use client::{HttpPlaceholderApi, PlaceholderApi};
pub use task::perform;
pub use types::{Address, Company, Post, User};
