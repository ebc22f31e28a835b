use super::questions::survey_questions;
use super::Frame;
use crate::config::HotkeyAction;
use crate::config::hotkeys::format_hotkey_display;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::Span,
    widgets::{Block, Borders, Paragraph},
};

/// Render the survey for answering, with the submit prompt once there is
/// something to submit.
///
pub fn take(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styling::active_block_border_style(theme))
        .title(Span::styled("Take Survey", styling::active_block_title_style()));

    if state.store().is_empty() {
        let empty = Paragraph::new("No questions yet. Switch to Create Survey to add some.")
            .block(block)
            .style(styling::muted_text_style(theme));
        frame.render_widget(empty, size);
        return;
    }

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(size);

    survey_questions(
        frame,
        rows[0],
        block,
        state.store().questions(),
        state.take_answers(),
        true,
        theme,
    );

    if state.can_submit() {
        let prompt = match state.get_hotkeys().take.get(&HotkeyAction::Submit) {
            Some(hotkey) => format!("[ Submit: {} ]", format_hotkey_display(hotkey)),
            None => "[ Submit ]".to_string(),
        };
        let submit = Paragraph::new(prompt)
            .style(styling::banner_style(theme))
            .alignment(Alignment::Center);
        frame.render_widget(submit, rows[1]);
    }
}
