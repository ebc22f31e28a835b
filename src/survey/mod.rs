//! Survey domain module.
//!
//! This module contains everything about questions independent of the
//! terminal:
//! - `Question` and its per-type variants
//! - The draft being authored and its validation
//! - The question list store and its persisted snapshot

mod draft;
mod editor;
mod question;
pub mod snapshot;
mod store;
mod validation;

pub use draft::Draft;
pub use editor::DraftEditor;
pub use question::{
    Question, QuestionKind, QuestionType, MAX_OPTIONS, MIN_MULTI_SELECT_OPTIONS,
    SINGLE_SELECT_OPTIONS,
};
pub use store::{PublishOutcome, QuestionStore};
pub use validation::{validate, ValidationError};
