use super::Frame;
use crate::state::AnswerSheet;
use crate::survey::{Question, QuestionType};
use crate::ui::widgets::styling;
use crate::ui::Theme;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

/// Build the lines for a question list. Returns the lines and the index of
/// the line holding the cursor, if any.
///
pub fn question_lines(
    questions: &[Question],
    answers: &AnswerSheet,
    cursor: Option<(usize, usize)>,
    theme: &Theme,
) -> (Vec<Line<'static>>, Option<usize>) {
    let mut lines = vec![];
    let mut cursor_line = None;
    let heading = styling::normal_text_style(theme).add_modifier(Modifier::BOLD);

    for (q, question) in questions.iter().enumerate() {
        lines.push(Line::from(Span::styled(format!("Question {}", q + 1), heading)));
        lines.push(Line::from(format!("Type: {}", question.question_type())));
        lines.push(Line::from(format!("Question: {}", question.question)));
        lines.push(Line::from("Options:"));
        for (o, option) in question.options().into_iter().enumerate() {
            let selected = answers.is_selected(q, o);
            let marker = match (question.question_type(), selected) {
                (QuestionType::MultiSelect, true) => "[x]",
                (QuestionType::MultiSelect, false) => "[ ]",
                (QuestionType::SingleSelect, true) => "(•)",
                (QuestionType::SingleSelect, false) => "( )",
            };
            let style = if cursor == Some((q, o)) {
                cursor_line = Some(lines.len());
                styling::active_list_item_style(theme)
            } else {
                Style::default()
            };
            lines.push(Line::from(Span::styled(
                format!("  {} {}", marker, option),
                style,
            )));
        }
        lines.push(Line::from(""));
    }

    (lines, cursor_line)
}

/// Render the question list in answerable form. Used by both the author
/// preview and the take view.
///
pub fn survey_questions(
    frame: &mut Frame,
    size: Rect,
    block: Block,
    questions: &[Question],
    answers: &AnswerSheet,
    active: bool,
    theme: &Theme,
) {
    let cursor = if active { answers.cursor(questions) } else { None };
    let (lines, cursor_line) = question_lines(questions, answers, cursor, theme);

    // One row per line, so the cursor line index is also its row
    let inner_height = size.height.saturating_sub(2) as usize;
    let scroll = cursor_line
        .map(|line| (line + 1).saturating_sub(inner_height))
        .unwrap_or(0);

    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(styling::normal_text_style(theme))
        .scroll((scroll as u16, 0));
    frame.render_widget(paragraph, size);
}
