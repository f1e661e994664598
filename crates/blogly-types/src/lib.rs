pub mod action;
pub mod forms;
pub mod models;

pub use action::Action;
pub use models::{EntityKind, Post, Tag, User};
