//! Application state management module.
//!
//! This module contains the core state management for the application, including:
//! - Main `State` struct that holds the draft editor, question store and view state
//! - Navigation types (Mode, Focus, EditorField)
//! - Answer sheets for the preview and take views

mod answers;
mod navigation;

pub use answers::AnswerSheet;
pub use navigation::{EditorField, Focus, Mode};

#[path = "state_impl.rs"]
mod state_impl;

pub use state_impl::State;
