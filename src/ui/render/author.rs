use super::questions::survey_questions;
use super::Frame;
use crate::state::{EditorField, Focus, State};
use crate::survey::{QuestionType, MAX_OPTIONS, SINGLE_SELECT_OPTIONS};
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

const TYPE_PLACEHOLDER: &str = "Select Question Type";
const EDITING_CURSOR: &str = "▏";

/// Render the question editor and, once questions exist, the live preview.
///
pub fn author(frame: &mut Frame, size: Rect, state: &State) {
    if state.store().is_empty() {
        editor(frame, size, state);
        return;
    }

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(size);
    editor(frame, columns[0], state);
    preview(frame, columns[1], state);
}

fn pane_block(title: &'static str, active: bool, state: &State) -> Block<'static> {
    let theme = state.get_theme();
    let block = Block::default().borders(Borders::ALL);
    if active {
        block
            .border_style(styling::active_block_border_style(theme))
            .title(Span::styled(title, styling::active_block_title_style()))
    } else {
        block
            .border_style(styling::normal_block_border_style(theme))
            .title(title)
    }
}

fn editor(frame: &mut Frame, size: Rect, state: &State) {
    let active = state.current_focus() == Focus::Editor;
    let paragraph = Paragraph::new(editor_lines(state))
        .block(pane_block("Create Survey", active, state))
        .style(styling::normal_text_style(state.get_theme()))
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, size);
}

fn preview(frame: &mut Frame, size: Rect, state: &State) {
    let active = state.current_focus() == Focus::Preview;
    survey_questions(
        frame,
        size,
        pane_block("Survey Questions", active, state),
        state.store().questions(),
        state.preview_answers(),
        active,
        state.get_theme(),
    );
}

/// Build the form lines: type selector, question text, options and any
/// validation errors from the last commit attempt.
///
fn editor_lines(state: &State) -> Vec<Line<'static>> {
    let theme = state.get_theme();
    let draft = state.draft();
    let focused = state.current_focus() == Focus::Editor;
    let field_style = |field: EditorField| -> Style {
        if focused && state.editor_field() == field {
            styling::active_list_item_style(theme)
        } else {
            Style::default()
        }
    };
    let field_text = |field: EditorField, text: &str| -> String {
        if focused && state.is_field_editing_mode() && state.editor_field() == field {
            format!("{}{}", text, EDITING_CURSOR)
        } else {
            text.to_string()
        }
    };

    let mut lines = vec![];
    let type_label = draft
        .question_type()
        .map(|t| t.label())
        .unwrap_or(TYPE_PLACEHOLDER);
    lines.push(Line::from(vec![
        Span::raw("Question Type: "),
        Span::styled(format!("< {} >", type_label), field_style(EditorField::Type)),
    ]));

    if let Some(question_type) = draft.question_type() {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::raw("Question: "),
            Span::styled(
                field_text(EditorField::Question, draft.question()),
                field_style(EditorField::Question),
            ),
        ]));

        match question_type {
            QuestionType::MultiSelect => {
                for (i, option) in draft.options().iter().enumerate() {
                    let field = EditorField::Option(i);
                    lines.push(Line::from(vec![
                        Span::raw(format!("Option {}: ", i + 1)),
                        Span::styled(field_text(field, option), field_style(field)),
                    ]));
                }
                if draft.options().len() < MAX_OPTIONS {
                    lines.push(Line::from(Span::styled(
                        "+ add option",
                        styling::muted_text_style(theme),
                    )));
                }
            }
            QuestionType::SingleSelect => {
                for (i, option) in SINGLE_SELECT_OPTIONS.iter().enumerate() {
                    lines.push(Line::from(Span::styled(
                        format!("Option {}: {}", i + 1, option),
                        styling::muted_text_style(theme),
                    )));
                }
            }
        }
    }

    if !state.validation_errors().is_empty() {
        lines.push(Line::from(""));
        for error in state.validation_errors() {
            lines.push(Line::from(Span::styled(
                error.to_string(),
                styling::error_text_style(theme),
            )));
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(state: &State) -> Vec<String> {
        editor_lines(state)
            .iter()
            .map(|line| line.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    #[test]
    fn unselected_type_shows_only_selector() {
        let state = State::default();
        assert_eq!(rendered(&state), vec!["Question Type: < Select Question Type >"]);
    }

    #[test]
    fn single_select_shows_fixed_options() {
        let mut state = State::default();
        state.cycle_type(false);
        let lines = rendered(&state);
        assert_eq!(lines[0], "Question Type: < Single-Select >");
        assert!(lines.contains(&"Option 1: Yes".to_string()));
        assert!(lines.contains(&"Option 2: No".to_string()));
    }

    #[test]
    fn multi_select_shows_editable_options_and_errors() {
        let mut state = State::default();
        state.cycle_type(true);
        state.add_question();
        let lines = rendered(&state);
        assert!(lines.contains(&"Option 1: ".to_string()));
        assert!(lines.contains(&"+ add option".to_string()));
        assert!(lines.contains(&"Please enter a question.".to_string()));
        assert!(lines.contains(
            &"Please provide at least two options for a multi-select question.".to_string()
        ));
    }

    #[test]
    fn editing_field_shows_cursor() {
        let mut state = State::default();
        state.cycle_type(true);
        state.navigate_next();
        state.start_field_editing();
        state.input_char('Q');
        let lines = rendered(&state);
        assert_eq!(lines[2], format!("Question: Q{}", EDITING_CURSOR));
    }
}
