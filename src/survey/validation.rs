//! Commit-time checks on a draft.

use super::draft::Draft;
use super::question::{QuestionType, MIN_MULTI_SELECT_OPTIONS};

/// A user-correctable problem with the draft. The display text is what the
/// form shows.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please select a question type.")]
    MissingType,

    #[error("Please enter a question.")]
    MissingQuestion,

    #[error("Please provide at least two options for a multi-select question.")]
    TooFewOptions,
}

/// Run every check against the draft and return all failures in order.
/// An empty list means the draft can be committed.
///
pub fn validate(draft: &Draft) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if draft.question_type().is_none() {
        errors.push(ValidationError::MissingType);
    }

    if draft.question().trim().is_empty() {
        errors.push(ValidationError::MissingQuestion);
    }

    if draft.question_type() == Some(QuestionType::MultiSelect)
        && draft.options().len() < MIN_MULTI_SELECT_OPTIONS
    {
        errors.push(ValidationError::TooFewOptions);
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_draft_reports_type_and_question() {
        let errors = validate(&Draft::default());
        assert_eq!(
            errors,
            vec![ValidationError::MissingType, ValidationError::MissingQuestion]
        );
    }

    #[test]
    fn whitespace_question_is_missing() {
        let mut draft = Draft::default();
        draft.set_type(Some(QuestionType::SingleSelect));
        draft.set_question_text(" \t ");
        assert_eq!(validate(&draft), vec![ValidationError::MissingQuestion]);
    }

    #[test]
    fn all_checks_run_together() {
        let mut draft = Draft::default();
        draft.set_type(Some(QuestionType::MultiSelect));
        assert_eq!(
            validate(&draft),
            vec![
                ValidationError::MissingQuestion,
                ValidationError::TooFewOptions
            ]
        );
    }

    #[test]
    fn option_count_ignored_for_single_select() {
        let mut draft = Draft::default();
        draft.set_type(Some(QuestionType::SingleSelect));
        draft.set_question_text("Ready?");
        draft.remove_option(0);
        assert!(validate(&draft).is_empty());
    }

    #[test]
    fn messages() {
        assert_eq!(
            ValidationError::MissingType.to_string(),
            "Please select a question type."
        );
        assert_eq!(
            ValidationError::MissingQuestion.to_string(),
            "Please enter a question."
        );
        assert_eq!(
            ValidationError::TooFewOptions.to_string(),
            "Please provide at least two options for a multi-select question."
        );
    }
}
