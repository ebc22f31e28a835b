//! Navigation-related state types.
//!
//! This module contains enums related to the mode switch, focus and the
//! fields of the question editor.

/// Specifying the two screens.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum Mode {
    #[default]
    Author,
    Take,
}

impl Mode {
    pub fn title(&self) -> &'static str {
        match self {
            Mode::Author => "Create Survey",
            Mode::Take => "Take Survey",
        }
    }
}

/// Specifying which pane of the author screen has focus.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum Focus {
    #[default]
    Editor,
    Preview,
}

/// Specifying the editor field under the cursor.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum EditorField {
    #[default]
    Type,
    Question,
    Option(usize), // Index into the draft options
}

impl EditorField {
    /// Whether the field accepts typed text.
    ///
    pub fn is_text(&self) -> bool {
        matches!(self, EditorField::Question | EditorField::Option(_))
    }
}
