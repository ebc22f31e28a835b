use crate::config::hotkeys::{get_action_for_event, HotkeyAction};
use crate::error::AppResult;
use crate::state::{Mode, State};
use crossterm::{
    event,
    event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
};
use log::*;
use std::time::Duration;

/// Specify terminal event poll rate in milliseconds.
///
const TICK_RATE_IN_MS: u64 = 60;

/// Polls the terminal for input on the calling thread.
///
pub struct Handler {
    tick_rate: Duration,
}

impl Default for Handler {
    fn default() -> Self {
        Self::new()
    }
}

impl Handler {
    pub fn new() -> Self {
        Handler {
            tick_rate: Duration::from_millis(TICK_RATE_IN_MS),
        }
    }

    /// Wait up to one tick for the next terminal event and handle it.
    /// Returns result with value true if should continue or false if exit
    /// was requested.
    ///
    pub fn handle_next(&self, state: &mut State) -> AppResult<bool> {
        if !event::poll(self.tick_rate)? {
            return Ok(true);
        }
        match event::read()? {
            CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                Ok(handle_key(key, state))
            }
            _ => Ok(true),
        }
    }
}

/// Apply a key press to the state. Returns false when the user asked to quit.
///
pub fn handle_key(key: KeyEvent, state: &mut State) -> bool {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        debug!("Processing exit terminal event '{:?}'...", key);
        return false;
    }

    if state.is_field_editing_mode() {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Tab => state.stop_field_editing(),
            KeyCode::Backspace => state.backspace(),
            KeyCode::Char(c)
                if key.modifiers.difference(KeyModifiers::SHIFT).is_empty() =>
            {
                state.input_char(c)
            }
            _ => {}
        }
        return true;
    }

    match get_action_for_event(&key, state.hotkey_context(), state.get_hotkeys()) {
        Some(action) => handle_action(action, state),
        None => true,
    }
}

/// Apply a hotkey action. Returns false when the user asked to quit.
///
fn handle_action(action: HotkeyAction, state: &mut State) -> bool {
    debug!("Handling action {:?}", action);
    match action {
        HotkeyAction::Quit => return false,
        HotkeyAction::NavigateNext => state.navigate_next(),
        HotkeyAction::NavigatePrev => state.navigate_prev(),
        HotkeyAction::CreateSurvey => state.switch_mode(Mode::Author),
        HotkeyAction::TakeSurvey => state.switch_mode(Mode::Take),
        HotkeyAction::CycleTypeNext => state.cycle_type(true),
        HotkeyAction::CycleTypePrev => state.cycle_type(false),
        HotkeyAction::EditField => state.start_field_editing(),
        HotkeyAction::AddOption => state.add_option(),
        HotkeyAction::RemoveOption => state.remove_current_option(),
        HotkeyAction::AddQuestion => {
            state.add_question();
        }
        HotkeyAction::Publish => {
            state.publish();
        }
        HotkeyAction::SwitchFocus => state.toggle_focus(),
        HotkeyAction::ToggleAnswer => state.toggle_answer(),
        HotkeyAction::Submit => {
            state.submit();
        }
    }
    true
}
