//! Draft editor: the draft plus the errors of its last commit attempt.

use super::draft::Draft;
use super::store::QuestionStore;
use super::validation::{validate, ValidationError};
use log::*;

/// Owns the draft and the error list shown under the form.
///
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftEditor {
    draft: Draft,
    errors: Vec<ValidationError>,
}

impl DraftEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut Draft {
        &mut self.draft
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Validate the draft and, when it passes, append it to `store` and start
    /// a fresh draft. A failed attempt replaces the error list and leaves the
    /// draft as it was. Returns whether a question was appended.
    ///
    pub fn commit(&mut self, store: &mut QuestionStore) -> bool {
        self.errors = validate(&self.draft);
        if !self.errors.is_empty() {
            debug!("Draft rejected with {} error(s)", self.errors.len());
            return false;
        }

        let question = match self.draft.to_question() {
            Some(question) => question,
            None => return false,
        };
        info!("Added question: {}", question);
        store.append(question);
        self.draft.reset();
        self.errors.clear();
        true
    }
}
