//! Question records.

use std::fmt;

/// Options every single-select question carries.
///
pub const SINGLE_SELECT_OPTIONS: [&str; 2] = ["Yes", "No"];

/// Ceiling on the number of options a draft may hold.
///
pub const MAX_OPTIONS: usize = 4;

/// Fewest options a multi-select question may be committed with.
///
pub const MIN_MULTI_SELECT_OPTIONS: usize = 2;

/// Specifying the different question types.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuestionType {
    MultiSelect,
    SingleSelect,
}

impl QuestionType {
    /// Value used in snapshots and log output.
    ///
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionType::MultiSelect => "Multi-select",
            QuestionType::SingleSelect => "Single-select",
        }
    }

    /// Label shown by the type selector.
    ///
    pub fn label(&self) -> &'static str {
        match self {
            QuestionType::MultiSelect => "Multi-Select",
            QuestionType::SingleSelect => "Single-Select",
        }
    }

    /// Parse a selector value. Anything else reads as "no type selected".
    ///
    pub fn parse(value: &str) -> Option<QuestionType> {
        match value {
            "Multi-select" => Some(QuestionType::MultiSelect),
            "Single-select" => Some(QuestionType::SingleSelect),
            _ => None,
        }
    }

    /// Step through the selector values, with `None` as the unselected
    /// sentinel between the two ends.
    ///
    pub fn cycle(current: Option<QuestionType>, forward: bool) -> Option<QuestionType> {
        use QuestionType::*;
        match (current, forward) {
            (None, true) => Some(MultiSelect),
            (Some(MultiSelect), true) => Some(SingleSelect),
            (Some(SingleSelect), true) => None,
            (None, false) => Some(SingleSelect),
            (Some(SingleSelect), false) => Some(MultiSelect),
            (Some(MultiSelect), false) => None,
        }
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Type-specific part of a question.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionKind {
    MultiSelect { options: Vec<String> },
    SingleSelect,
}

/// Defines a committed survey question.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub question: String,
    pub kind: QuestionKind,
}

impl Question {
    pub fn multi_select(question: impl Into<String>, options: Vec<String>) -> Self {
        Question {
            question: question.into(),
            kind: QuestionKind::MultiSelect { options },
        }
    }

    pub fn single_select(question: impl Into<String>) -> Self {
        Question {
            question: question.into(),
            kind: QuestionKind::SingleSelect,
        }
    }

    pub fn question_type(&self) -> QuestionType {
        match self.kind {
            QuestionKind::MultiSelect { .. } => QuestionType::MultiSelect,
            QuestionKind::SingleSelect => QuestionType::SingleSelect,
        }
    }

    /// Options in display order.
    ///
    pub fn options(&self) -> Vec<&str> {
        match &self.kind {
            QuestionKind::MultiSelect { options } => options.iter().map(String::as_str).collect(),
            QuestionKind::SingleSelect => SINGLE_SELECT_OPTIONS.to_vec(),
        }
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} ({})",
            self.question_type(),
            self.question,
            self.options().join(" / ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_selector_values() {
        assert_eq!(
            QuestionType::parse("Multi-select"),
            Some(QuestionType::MultiSelect)
        );
        assert_eq!(
            QuestionType::parse("Single-select"),
            Some(QuestionType::SingleSelect)
        );
        assert_eq!(QuestionType::parse(""), None);
        assert_eq!(QuestionType::parse("multi-select"), None);
    }

    #[test]
    fn cycle_passes_through_unselected() {
        let mut current = None;
        let mut seen = vec![];
        for _ in 0..3 {
            current = QuestionType::cycle(current, true);
            seen.push(current);
        }
        assert_eq!(
            seen,
            vec![
                Some(QuestionType::MultiSelect),
                Some(QuestionType::SingleSelect),
                None
            ]
        );
        assert_eq!(
            QuestionType::cycle(None, false),
            Some(QuestionType::SingleSelect)
        );
    }

    #[test]
    fn single_select_options_are_fixed() {
        let question = Question::single_select("Do you like tea?");
        assert_eq!(question.options(), vec!["Yes", "No"]);
        assert_eq!(question.question_type(), QuestionType::SingleSelect);
    }

    #[test]
    fn display_summarises_question() {
        let question = Question::multi_select(
            "Pick fruits",
            vec!["Apple".to_string(), "Pear".to_string()],
        );
        assert_eq!(
            question.to_string(),
            "[Multi-select] Pick fruits (Apple / Pear)"
        );
    }
}
