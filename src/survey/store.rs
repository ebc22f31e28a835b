//! Ordered, append-only list of committed questions.

use super::question::Question;
use super::snapshot::{self, SNAPSHOT_KEY};
use crate::storage::{KeyValueStore, StorageError};
use log::*;

/// What `publish` found.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublishOutcome {
    Published(usize),
    Empty,
}

/// Houses the committed questions.
///
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionStore {
    questions: Vec<Question>,
}

impl QuestionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn append(&mut self, question: Question) {
        self.questions.push(question);
    }

    /// Replace the list with the stored snapshot. Without a snapshot the
    /// list is left as it is.
    ///
    pub fn load(&mut self, storage: &dyn KeyValueStore) -> Result<(), StorageError> {
        match storage.get_item(SNAPSHOT_KEY)? {
            Some(text) => {
                self.questions = snapshot::decode(&text)?;
                info!("Loaded {} saved question(s)", self.questions.len());
            }
            None => debug!("No saved survey found"),
        }
        Ok(())
    }

    /// Overwrite the stored snapshot with the current list.
    ///
    pub fn persist(&self, storage: &mut dyn KeyValueStore) -> Result<(), StorageError> {
        let text = snapshot::encode(&self.questions)?;
        storage.set_item(SNAPSHOT_KEY, &text)?;
        info!("Survey submitted: {} question(s)", self.questions.len());
        self.report();
        Ok(())
    }

    /// Report the current list without touching it or the storage.
    ///
    pub fn publish(&self) -> PublishOutcome {
        if self.questions.is_empty() {
            warn!("Cannot publish survey without any questions.");
            return PublishOutcome::Empty;
        }
        info!("Survey published: {} question(s)", self.questions.len());
        self.report();
        PublishOutcome::Published(self.questions.len())
    }

    fn report(&self) {
        for (index, question) in self.questions.iter().enumerate() {
            info!("  {}. {}", index + 1, question);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use fake::faker::lorem::en::{Sentence, Words};
    use fake::Fake;

    fn sample_questions(count: usize) -> Vec<Question> {
        (0..count)
            .map(|i| {
                let text: String = Sentence(2..6).fake();
                if i % 2 == 0 {
                    Question::single_select(text)
                } else {
                    Question::multi_select(text, Words(2..5).fake())
                }
            })
            .collect()
    }

    #[test]
    fn append_keeps_order() {
        let questions = sample_questions(4);
        let mut store = QuestionStore::new();
        for question in questions.iter().cloned() {
            store.append(question);
        }
        assert_eq!(store.questions(), questions.as_slice());
    }

    #[test]
    fn persist_then_load_reproduces_list() {
        let mut storage = MemoryStorage::new();
        let mut store = QuestionStore::new();
        for question in sample_questions(5) {
            store.append(question);
        }
        store.persist(&mut storage).unwrap();

        let mut reloaded = QuestionStore::new();
        reloaded.load(&storage).unwrap();
        assert_eq!(reloaded, store);
    }

    #[test]
    fn load_without_snapshot_keeps_empty_list() {
        let storage = MemoryStorage::new();
        let mut store = QuestionStore::new();
        store.load(&storage).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn load_replaces_wholesale() {
        let mut storage = MemoryStorage::new();
        let mut saved = QuestionStore::new();
        saved.append(Question::single_select("Saved"));
        saved.persist(&mut storage).unwrap();

        let mut store = QuestionStore::new();
        store.append(Question::single_select("Unsaved"));
        store.append(Question::single_select("Also unsaved"));
        store.load(&storage).unwrap();
        assert_eq!(store.questions(), &[Question::single_select("Saved")]);
    }

    #[test]
    fn publish_empty_reports_and_does_not_persist() {
        let storage = MemoryStorage::new();
        let store = QuestionStore::new();
        assert_eq!(store.publish(), PublishOutcome::Empty);
        assert!(store.is_empty());
        assert_eq!(storage.get_item(SNAPSHOT_KEY).unwrap(), None);
    }

    #[test]
    fn publish_reports_contents_without_mutation() {
        let mut store = QuestionStore::new();
        for question in sample_questions(3) {
            store.append(question);
        }
        let before = store.clone();
        assert_eq!(store.publish(), PublishOutcome::Published(3));
        assert_eq!(store, before);
    }
}
