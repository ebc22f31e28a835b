//! The question currently being authored.

use super::question::{Question, QuestionType, MAX_OPTIONS};

/// Mutable question under edit. Options start as a single empty entry.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draft {
    question_type: Option<QuestionType>,
    question: String,
    options: Vec<String>,
}

impl Default for Draft {
    fn default() -> Self {
        Draft {
            question_type: None,
            question: String::new(),
            options: vec![String::new()],
        }
    }
}

impl Draft {
    pub fn question_type(&self) -> Option<QuestionType> {
        self.question_type
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn set_type(&mut self, question_type: Option<QuestionType>) {
        self.question_type = question_type;
    }

    /// Move the type selector one step.
    ///
    pub fn cycle_type(&mut self, forward: bool) {
        self.question_type = QuestionType::cycle(self.question_type, forward);
    }

    pub fn set_question_text(&mut self, text: impl Into<String>) {
        self.question = text.into();
    }

    pub fn push_question_char(&mut self, c: char) {
        self.question.push(c);
    }

    pub fn pop_question_char(&mut self) {
        self.question.pop();
    }

    /// Overwrite the option at `index`. Out-of-range indices are ignored.
    ///
    pub fn set_option(&mut self, index: usize, text: impl Into<String>) {
        if let Some(option) = self.options.get_mut(index) {
            *option = text.into();
        }
    }

    pub fn push_option_char(&mut self, index: usize, c: char) {
        if let Some(option) = self.options.get_mut(index) {
            option.push(c);
        }
    }

    pub fn pop_option_char(&mut self, index: usize) {
        if let Some(option) = self.options.get_mut(index) {
            option.pop();
        }
    }

    /// Append an empty option. Returns false once the ceiling is reached.
    ///
    pub fn add_option(&mut self) -> bool {
        if self.options.len() >= MAX_OPTIONS {
            return false;
        }
        self.options.push(String::new());
        true
    }

    /// Remove the option at `index`. There is no lower bound here; the
    /// minimum is only checked at commit.
    ///
    pub fn remove_option(&mut self, index: usize) -> bool {
        if index >= self.options.len() {
            return false;
        }
        self.options.remove(index);
        true
    }

    /// Build the question this draft describes, or `None` while no type is
    /// selected. Single-select drafts ignore whatever options they hold.
    ///
    pub fn to_question(&self) -> Option<Question> {
        let question = match self.question_type? {
            QuestionType::MultiSelect => {
                Question::multi_select(self.question.clone(), self.options.clone())
            }
            QuestionType::SingleSelect => Question::single_select(self.question.clone()),
        };
        Some(question)
    }

    pub fn reset(&mut self) {
        *self = Draft::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_has_one_empty_option() {
        let draft = Draft::default();
        assert_eq!(draft.question_type(), None);
        assert_eq!(draft.question(), "");
        assert_eq!(draft.options(), &[String::new()]);
    }

    #[test]
    fn add_option_stops_at_ceiling() {
        let mut draft = Draft::default();
        assert!(draft.add_option());
        assert!(draft.add_option());
        assert!(draft.add_option());
        assert_eq!(draft.options().len(), MAX_OPTIONS);

        assert!(!draft.add_option());
        assert_eq!(draft.options().len(), MAX_OPTIONS);
    }

    #[test]
    fn remove_option_shifts_down_without_lower_bound() {
        let mut draft = Draft::default();
        draft.set_option(0, "a");
        draft.add_option();
        draft.set_option(1, "b");
        draft.add_option();
        draft.set_option(2, "c");

        assert!(draft.remove_option(0));
        assert_eq!(draft.options(), &["b".to_string(), "c".to_string()]);

        assert!(draft.remove_option(1));
        assert!(draft.remove_option(0));
        assert!(draft.options().is_empty());
        assert!(!draft.remove_option(0));
    }

    #[test]
    fn set_option_out_of_range_is_ignored() {
        let mut draft = Draft::default();
        draft.set_option(3, "ghost");
        assert_eq!(draft.options(), &[String::new()]);
    }

    #[test]
    fn char_editing() {
        let mut draft = Draft::default();
        for c in "Tea?".chars() {
            draft.push_question_char(c);
        }
        draft.pop_question_char();
        assert_eq!(draft.question(), "Tea");

        draft.push_option_char(0, 'x');
        draft.push_option_char(0, 'y');
        draft.pop_option_char(0);
        draft.push_option_char(5, 'z');
        assert_eq!(draft.options(), &["x".to_string()]);
    }

    #[test]
    fn to_question_respects_type() {
        let mut draft = Draft::default();
        draft.set_question_text("Coffee?");
        draft.set_option(0, "Espresso");
        assert_eq!(draft.to_question(), None);

        draft.set_type(Some(QuestionType::SingleSelect));
        assert_eq!(
            draft.to_question(),
            Some(Question::single_select("Coffee?"))
        );

        draft.set_type(Some(QuestionType::MultiSelect));
        assert_eq!(
            draft.to_question(),
            Some(Question::multi_select(
                "Coffee?",
                vec!["Espresso".to_string()]
            ))
        );
    }

    #[test]
    fn reset_restores_default() {
        let mut draft = Draft::default();
        draft.set_type(Some(QuestionType::MultiSelect));
        draft.set_question_text("Q");
        draft.add_option();
        draft.reset();
        assert_eq!(draft, Draft::default());
    }
}
