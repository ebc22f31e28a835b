use crate::config::{HotkeyContext, ViewHotkeys};
use crate::logger::LogEntries;
use crate::storage::{KeyValueStore, MemoryStorage};
use crate::survey::{Draft, DraftEditor, PublishOutcome, QuestionStore, QuestionType, ValidationError};
use crate::ui::Theme;
use log::*;

use super::answers::AnswerSheet;
use super::navigation::{EditorField, Focus, Mode};

/// Houses data representative of application state.
///
pub struct State {
    mode: Mode,
    focus: Focus,                  // Editor or preview pane (author mode only)
    editor_field: EditorField,     // Field under the cursor in the editor
    field_editing_mode: bool,      // Whether typing goes into the current field
    editor: DraftEditor,
    store: QuestionStore,
    storage: Box<dyn KeyValueStore>,
    preview_answers: AnswerSheet, // Selections in the author preview
    take_answers: AnswerSheet,    // Selections in take mode
    theme: Theme,
    hotkeys: ViewHotkeys,
    log_entries: LogEntries,
}

/// Defines default application state.
///
impl Default for State {
    fn default() -> State {
        State {
            mode: Mode::default(),
            focus: Focus::default(),
            editor_field: EditorField::default(),
            field_editing_mode: false,
            editor: DraftEditor::new(),
            store: QuestionStore::new(),
            storage: Box::new(MemoryStorage::new()),
            preview_answers: AnswerSheet::new(),
            take_answers: AnswerSheet::new(),
            theme: Theme::default(),
            hotkeys: ViewHotkeys::default(),
            log_entries: LogEntries::default(),
        }
    }
}

impl State {
    /// Return a new instance backed by the given snapshot storage.
    ///
    pub fn new(
        storage: Box<dyn KeyValueStore>,
        theme: Theme,
        hotkeys: ViewHotkeys,
        log_entries: LogEntries,
    ) -> Self {
        State {
            storage,
            theme,
            hotkeys,
            log_entries,
            ..State::default()
        }
    }

    /// Replace the question list with the saved snapshot. A snapshot that
    /// cannot be read is reported and the list stays empty.
    ///
    pub fn load_saved_questions(&mut self) {
        if let Err(e) = self.store.load(self.storage.as_ref()) {
            warn!("Failed to load saved survey: {}", e);
        }
    }

    pub fn current_mode(&self) -> Mode {
        self.mode
    }

    /// Switch screens. The draft and the question list are kept.
    ///
    pub fn switch_mode(&mut self, mode: Mode) {
        if self.mode != mode {
            debug!("Switching to {}", mode.title());
        }
        self.mode = mode;
        self.field_editing_mode = false;
    }

    pub fn current_focus(&self) -> Focus {
        self.focus
    }

    /// Move focus between the editor and the preview. The preview only
    /// exists once a question has been added.
    ///
    pub fn toggle_focus(&mut self) {
        self.field_editing_mode = false;
        self.focus = match self.focus {
            Focus::Editor if !self.store.is_empty() => Focus::Preview,
            _ => Focus::Editor,
        };
    }

    /// Which hotkey bindings apply right now.
    ///
    pub fn hotkey_context(&self) -> HotkeyContext {
        match (self.mode, self.focus) {
            (Mode::Take, _) => HotkeyContext::Take,
            (Mode::Author, Focus::Preview) => HotkeyContext::Preview,
            (Mode::Author, Focus::Editor) => HotkeyContext::Author,
        }
    }

    pub fn get_hotkeys(&self) -> &ViewHotkeys {
        &self.hotkeys
    }

    pub fn get_theme(&self) -> &Theme {
        &self.theme
    }

    pub fn draft(&self) -> &Draft {
        self.editor.draft()
    }

    pub fn validation_errors(&self) -> &[ValidationError] {
        self.editor.errors()
    }

    pub fn store(&self) -> &QuestionStore {
        &self.store
    }

    pub fn preview_answers(&self) -> &AnswerSheet {
        &self.preview_answers
    }

    pub fn take_answers(&self) -> &AnswerSheet {
        &self.take_answers
    }

    pub fn log_entries(&self) -> Vec<String> {
        match self.log_entries.lock() {
            Ok(entries) => entries.iter().cloned().collect(),
            Err(_) => vec![],
        }
    }

    pub fn editor_field(&self) -> EditorField {
        self.editor_field
    }

    pub fn is_field_editing_mode(&self) -> bool {
        self.field_editing_mode
    }

    /// Fields the editor currently shows, in order. The question text only
    /// appears once a type is chosen, option fields only for multi-select.
    ///
    pub fn editor_fields(&self) -> Vec<EditorField> {
        let draft = self.editor.draft();
        let mut fields = vec![EditorField::Type];
        if let Some(question_type) = draft.question_type() {
            fields.push(EditorField::Question);
            if question_type == QuestionType::MultiSelect {
                fields.extend((0..draft.options().len()).map(EditorField::Option));
            }
        }
        fields
    }

    fn clamp_editor_field(&mut self) {
        let fields = self.editor_fields();
        if fields.contains(&self.editor_field) {
            return;
        }
        self.field_editing_mode = false;
        self.editor_field = match self.editor_field {
            EditorField::Option(_) => fields.last().copied().unwrap_or_default(),
            _ => EditorField::Type,
        };
    }

    /// Move the cursor down within whichever pane has the keyboard.
    ///
    pub fn navigate_next(&mut self) {
        match self.hotkey_context() {
            HotkeyContext::Author => {
                let fields = self.editor_fields();
                if let Some(pos) = fields.iter().position(|f| *f == self.editor_field) {
                    if let Some(next) = fields.get(pos + 1) {
                        self.editor_field = *next;
                    }
                }
            }
            HotkeyContext::Preview => self.preview_answers.next(self.store.questions()),
            HotkeyContext::Take => self.take_answers.next(self.store.questions()),
        }
    }

    /// Move the cursor up within whichever pane has the keyboard.
    ///
    pub fn navigate_prev(&mut self) {
        match self.hotkey_context() {
            HotkeyContext::Author => {
                let fields = self.editor_fields();
                if let Some(pos) = fields.iter().position(|f| *f == self.editor_field) {
                    if pos > 0 {
                        self.editor_field = fields[pos - 1];
                    }
                }
            }
            HotkeyContext::Preview => self.preview_answers.previous(self.store.questions()),
            HotkeyContext::Take => self.take_answers.previous(self.store.questions()),
        }
    }

    /// Begin typing into the current field if it holds text.
    ///
    pub fn start_field_editing(&mut self) {
        if self.editor_field.is_text() {
            self.field_editing_mode = true;
        }
    }

    pub fn stop_field_editing(&mut self) {
        self.field_editing_mode = false;
    }

    pub fn input_char(&mut self, c: char) {
        let draft = self.editor.draft_mut();
        match self.editor_field {
            EditorField::Question => draft.push_question_char(c),
            EditorField::Option(i) => draft.push_option_char(i, c),
            EditorField::Type => {}
        }
    }

    pub fn backspace(&mut self) {
        let draft = self.editor.draft_mut();
        match self.editor_field {
            EditorField::Question => draft.pop_question_char(),
            EditorField::Option(i) => draft.pop_option_char(i),
            EditorField::Type => {}
        }
    }

    /// Step the type selector when it is the current field.
    ///
    pub fn cycle_type(&mut self, forward: bool) {
        if self.editor_field != EditorField::Type {
            return;
        }
        self.editor.draft_mut().cycle_type(forward);
        self.clamp_editor_field();
    }

    /// Append an option to a multi-select draft and move onto it.
    ///
    pub fn add_option(&mut self) {
        if self.editor.draft().question_type() != Some(QuestionType::MultiSelect) {
            return;
        }
        if self.editor.draft_mut().add_option() {
            self.editor_field = EditorField::Option(self.editor.draft().options().len() - 1);
        } else {
            debug!("Option limit reached");
        }
    }

    /// Remove the option under the cursor.
    ///
    pub fn remove_current_option(&mut self) {
        if let EditorField::Option(i) = self.editor_field {
            self.editor.draft_mut().remove_option(i);
            self.clamp_editor_field();
        }
    }

    /// Commit the draft into the question list.
    ///
    pub fn add_question(&mut self) -> bool {
        self.field_editing_mode = false;
        let added = self.editor.commit(&mut self.store);
        if added {
            self.editor_field = EditorField::Type;
        }
        added
    }

    pub fn publish(&self) -> PublishOutcome {
        self.store.publish()
    }

    /// Save the question list. Only available in take mode once there is
    /// something to save.
    ///
    pub fn submit(&mut self) -> bool {
        if self.mode != Mode::Take || self.store.is_empty() {
            return false;
        }
        match self.store.persist(self.storage.as_mut()) {
            Ok(()) => true,
            Err(e) => {
                error!("Failed to save survey: {}", e);
                false
            }
        }
    }

    /// Whether the submit action is offered.
    ///
    pub fn can_submit(&self) -> bool {
        self.mode == Mode::Take && !self.store.is_empty()
    }

    /// Toggle the answer under the cursor in the active answer sheet.
    ///
    pub fn toggle_answer(&mut self) {
        match self.hotkey_context() {
            HotkeyContext::Preview => self.preview_answers.toggle(self.store.questions()),
            HotkeyContext::Take => self.take_answers.toggle(self.store.questions()),
            HotkeyContext::Author => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::StorageError;
    use crate::survey::{snapshot::SNAPSHOT_KEY, Question};
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Storage double that shares its slot with the test.
    #[derive(Clone, Default)]
    struct SharedStorage(Rc<RefCell<MemoryStorage>>);

    impl KeyValueStore for SharedStorage {
        fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
            self.0.borrow().get_item(key)
        }

        fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
            self.0.borrow_mut().set_item(key, value)
        }
    }

    fn state_with(storage: &SharedStorage) -> State {
        State::new(
            Box::new(storage.clone()),
            Theme::default(),
            ViewHotkeys::default(),
            LogEntries::default(),
        )
    }

    fn type_text(state: &mut State, text: &str) {
        state.start_field_editing();
        for c in text.chars() {
            state.input_char(c);
        }
        state.stop_field_editing();
    }

    fn author_single_select(state: &mut State, text: &str) {
        state.cycle_type(false);
        state.navigate_next();
        type_text(state, text);
        assert!(state.add_question());
    }

    #[test]
    fn editor_fields_follow_type() {
        let mut state = State::default();
        assert_eq!(state.editor_fields(), vec![EditorField::Type]);

        state.cycle_type(true);
        assert_eq!(
            state.editor_fields(),
            vec![
                EditorField::Type,
                EditorField::Question,
                EditorField::Option(0)
            ]
        );

        state.cycle_type(true);
        assert_eq!(
            state.editor_fields(),
            vec![EditorField::Type, EditorField::Question]
        );
    }

    #[test]
    fn authoring_a_multi_select_question() {
        let mut state = State::default();
        state.cycle_type(true);
        state.navigate_next();
        type_text(&mut state, "Favourite colours?");
        state.navigate_next();
        assert_eq!(state.editor_field(), EditorField::Option(0));
        type_text(&mut state, "Red");
        state.add_option();
        assert_eq!(state.editor_field(), EditorField::Option(1));
        type_text(&mut state, "Blue");

        assert!(state.add_question());
        assert_eq!(
            state.store().questions(),
            &[Question::multi_select(
                "Favourite colours?",
                vec!["Red".to_string(), "Blue".to_string()]
            )]
        );
        assert_eq!(state.editor_field(), EditorField::Type);
        assert_eq!(state.draft(), &Draft::default());
    }

    #[test]
    fn add_option_stops_at_four() {
        let mut state = State::default();
        state.cycle_type(true);
        for _ in 0..10 {
            state.add_option();
        }
        assert_eq!(state.draft().options().len(), 4);
        assert_eq!(state.editor_field(), EditorField::Option(3));
    }

    #[test]
    fn add_option_ignored_for_single_select() {
        let mut state = State::default();
        state.cycle_type(false);
        state.add_option();
        assert_eq!(state.draft().options().len(), 1);
    }

    #[test]
    fn removing_last_option_moves_cursor() {
        let mut state = State::default();
        state.cycle_type(true);
        state.add_option();
        state.remove_current_option();
        assert_eq!(state.editor_field(), EditorField::Option(0));
        state.remove_current_option();
        assert!(state.draft().options().is_empty());
        assert_eq!(state.editor_field(), EditorField::Question);
    }

    #[test]
    fn failed_commit_keeps_draft_and_shows_errors() {
        let mut state = State::default();
        state.cycle_type(true);
        assert!(!state.add_question());
        assert_eq!(
            state.validation_errors(),
            &[
                ValidationError::MissingQuestion,
                ValidationError::TooFewOptions
            ]
        );
        assert_eq!(state.draft().question_type(), Some(QuestionType::MultiSelect));
        assert!(state.store().is_empty());
    }

    #[test]
    fn switching_modes_keeps_draft_and_list() {
        let mut state = State::default();
        author_single_select(&mut state, "Ready?");
        state.cycle_type(true);
        state.navigate_next();
        type_text(&mut state, "Half done");

        state.switch_mode(Mode::Take);
        state.switch_mode(Mode::Author);
        assert_eq!(state.draft().question(), "Half done");
        assert_eq!(state.store().len(), 1);
    }

    #[test]
    fn focus_only_moves_to_preview_with_questions() {
        let mut state = State::default();
        state.toggle_focus();
        assert_eq!(state.current_focus(), Focus::Editor);

        author_single_select(&mut state, "Ready?");
        state.toggle_focus();
        assert_eq!(state.hotkey_context(), HotkeyContext::Preview);
        state.toggle_answer();
        assert!(state.preview_answers().is_selected(0, 0));
        assert!(!state.take_answers().is_selected(0, 0));
    }

    #[test]
    fn submit_requires_take_mode_and_questions() {
        let storage = SharedStorage::default();
        let mut state = state_with(&storage);

        state.switch_mode(Mode::Take);
        assert!(!state.can_submit());
        assert!(!state.submit());
        assert_eq!(storage.get_item(SNAPSHOT_KEY).unwrap(), None);

        state.switch_mode(Mode::Author);
        author_single_select(&mut state, "Ready?");
        assert!(!state.submit());

        state.switch_mode(Mode::Take);
        assert!(state.can_submit());
        assert!(state.submit());
        assert!(storage.get_item(SNAPSHOT_KEY).unwrap().is_some());
    }

    #[test]
    fn submitted_questions_load_on_next_start() {
        let storage = SharedStorage::default();
        let mut state = state_with(&storage);
        author_single_select(&mut state, "Again?");
        state.switch_mode(Mode::Take);
        state.take_answers.toggle(state.store.questions());
        assert!(state.submit());

        let mut restarted = state_with(&storage);
        restarted.load_saved_questions();
        assert_eq!(restarted.store(), state.store());
        assert_eq!(restarted.take_answers(), &AnswerSheet::new());
    }

    #[test]
    fn corrupted_snapshot_starts_empty() {
        let storage = SharedStorage::default();
        storage
            .0
            .borrow_mut()
            .set_item(SNAPSHOT_KEY, "not json")
            .unwrap();
        let mut state = state_with(&storage);
        state.load_saved_questions();
        assert!(state.store().is_empty());
    }

    #[test]
    fn publish_does_not_touch_storage() {
        let storage = SharedStorage::default();
        let mut state = state_with(&storage);
        assert_eq!(state.publish(), PublishOutcome::Empty);
        author_single_select(&mut state, "Ready?");
        assert_eq!(state.publish(), PublishOutcome::Published(1));
        assert_eq!(storage.get_item(SNAPSHOT_KEY).unwrap(), None);
    }
}
