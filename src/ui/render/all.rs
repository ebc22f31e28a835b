use super::author::author;
use super::footer::footer;
use super::header::header;
use super::log::log;
use super::take::take;
use super::Frame;
use crate::state::{Mode, State};
use ratatui::layout::{Constraint, Direction, Layout};

/// Render the whole screen according to state.
///
pub fn all(frame: &mut Frame, state: &State) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title and mode tabs
            Constraint::Min(8),    // Current mode
            Constraint::Length(7), // Log
            Constraint::Length(1), // Hotkeys
        ])
        .split(frame.size());

    header(frame, rows[0], state);
    match state.current_mode() {
        Mode::Author => author(frame, rows[1], state),
        Mode::Take => take(frame, rows[1], state),
    }
    log(frame, rows[2], state);
    footer(frame, rows[3], state);
}
