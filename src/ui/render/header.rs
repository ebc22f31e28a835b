use super::Frame;
use crate::state::{Mode, State};
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    text::Span,
    widgets::{Block, Borders, Tabs},
};

const TITLE: &str = "Welcome to Survey Tiger";

/// Render the title bar with the two mode switches.
///
pub fn header(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styling::normal_block_border_style(theme))
        .title(Span::styled(TITLE, styling::banner_style(theme)));

    let selected = match state.current_mode() {
        Mode::Author => 0,
        Mode::Take => 1,
    };
    let tabs = Tabs::new(vec![Mode::Author.title(), Mode::Take.title()])
        .block(block)
        .style(styling::muted_text_style(theme))
        .highlight_style(styling::active_list_item_style(theme))
        .select(selected);

    frame.render_widget(tabs, size);
}
