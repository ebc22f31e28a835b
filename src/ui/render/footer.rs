use super::Frame;
use crate::config::hotkeys::{build_footer_text, HotkeyAction, HotkeyContext};
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{layout::Rect, widgets::Paragraph};

const EDITING_HINT: &str = " Type to edit, Backspace: delete, Esc/Enter: done";

/// Format hotkeys for the current context as a display string.
///
fn footer_text(state: &State) -> String {
    if state.is_field_editing_mode() {
        return EDITING_HINT.to_string();
    }

    let context = state.hotkey_context();
    let bindings = state.get_hotkeys().for_context(context);
    let mut actions = vec![(
        HotkeyAction::NavigateNext,
        "navigate",
        Some(HotkeyAction::NavigatePrev),
    )];
    match context {
        HotkeyContext::Author => {
            actions.push((
                HotkeyAction::CycleTypeNext,
                "question type",
                Some(HotkeyAction::CycleTypePrev),
            ));
            actions.push((HotkeyAction::EditField, "edit", None));
            actions.push((
                HotkeyAction::AddOption,
                "option",
                Some(HotkeyAction::RemoveOption),
            ));
            actions.push((HotkeyAction::AddQuestion, "add question", None));
            actions.push((HotkeyAction::Publish, "publish", None));
            if !state.store().is_empty() {
                actions.push((HotkeyAction::SwitchFocus, "preview", None));
            }
        }
        HotkeyContext::Preview => {
            actions.push((HotkeyAction::ToggleAnswer, "select", None));
            actions.push((HotkeyAction::Publish, "publish", None));
            actions.push((HotkeyAction::SwitchFocus, "editor", None));
        }
        HotkeyContext::Take => {
            actions.push((HotkeyAction::ToggleAnswer, "select", None));
            if state.can_submit() {
                actions.push((HotkeyAction::Submit, "submit", None));
            }
        }
    }
    actions.push((HotkeyAction::CreateSurvey, "create", None));
    actions.push((HotkeyAction::TakeSurvey, "take", None));
    actions.push((HotkeyAction::Quit, "quit", None));

    build_footer_text(bindings, &actions)
}

/// Render the hotkey hints.
///
pub fn footer(frame: &mut Frame, size: Rect, state: &State) {
    let paragraph =
        Paragraph::new(footer_text(state)).style(styling::muted_text_style(state.get_theme()));
    frame.render_widget(paragraph, size);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Mode;

    #[test]
    fn submit_hint_only_with_questions() {
        let mut state = State::default();
        state.switch_mode(Mode::Take);
        assert!(!footer_text(&state).contains("submit"));

        state.switch_mode(Mode::Author);
        state.cycle_type(false);
        state.navigate_next();
        state.start_field_editing();
        state.input_char('?');
        assert_eq!(footer_text(&state), EDITING_HINT);
        state.add_question();

        state.switch_mode(Mode::Take);
        assert!(footer_text(&state).contains(" s: submit"));
    }

    #[test]
    fn author_footer_lists_editor_actions() {
        let state = State::default();
        let text = footer_text(&state);
        assert!(text.contains(" c: add question"));
        assert!(text.contains(" +/-: option"));
        assert!(!text.contains("preview"));
    }
}
