//! Selections made while answering a survey.
//!
//! Answers are view state only. Nothing outside the renderer reads them.

use crate::survey::{Question, QuestionKind};
use std::collections::{BTreeMap, BTreeSet};

/// Selected options per question plus a cursor over every option of every
/// question.
///
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerSheet {
    cursor: usize,
    selections: BTreeMap<usize, BTreeSet<usize>>,
}

/// Flatten the list into `(question, option)` pairs in display order.
///
fn slots(questions: &[Question]) -> Vec<(usize, usize)> {
    questions
        .iter()
        .enumerate()
        .flat_map(|(q, question)| (0..question.options().len()).map(move |o| (q, o)))
        .collect()
}

impl AnswerSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// The `(question, option)` pair under the cursor.
    ///
    pub fn cursor(&self, questions: &[Question]) -> Option<(usize, usize)> {
        let slots = slots(questions);
        slots
            .get(self.cursor.min(slots.len().saturating_sub(1)))
            .copied()
    }

    pub fn next(&mut self, questions: &[Question]) {
        let count = slots(questions).len();
        if count == 0 {
            return;
        }
        self.cursor = (self.cursor + 1).min(count - 1);
    }

    pub fn previous(&mut self, questions: &[Question]) {
        let count = slots(questions).len();
        self.cursor = self.cursor.min(count.saturating_sub(1)).saturating_sub(1);
    }

    /// Toggle the option under the cursor. A single-select question behaves
    /// like a radio group, a multi-select question like checkboxes.
    ///
    pub fn toggle(&mut self, questions: &[Question]) {
        let Some((q, o)) = self.cursor(questions) else {
            return;
        };
        let selected = self.selections.entry(q).or_default();
        match questions[q].kind {
            QuestionKind::SingleSelect => {
                selected.clear();
                selected.insert(o);
            }
            QuestionKind::MultiSelect { .. } => {
                if !selected.remove(&o) {
                    selected.insert(o);
                }
            }
        }
    }

    pub fn is_selected(&self, question: usize, option: usize) -> bool {
        self.selections
            .get(&question)
            .map(|selected| selected.contains(&option))
            .unwrap_or(false)
    }
}
