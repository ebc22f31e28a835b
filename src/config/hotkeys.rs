//! Hotkey configuration management.
//!
//! This module defines the hotkey system for the application, including action types,
//! hotkey bindings, and default configurations per context.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;

/// Represents all possible actions that can be bound to hotkeys.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HotkeyAction {
    // Shared
    NavigateNext,
    NavigatePrev,
    CreateSurvey,
    TakeSurvey,
    Quit,

    // Question editor
    CycleTypeNext,
    CycleTypePrev,
    EditField,
    AddOption,
    RemoveOption,
    AddQuestion,
    Publish,
    SwitchFocus,

    // Answering (preview and take)
    ToggleAnswer,
    Submit,
}

/// Which part of the screen currently receives key presses.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HotkeyContext {
    Author,
    Preview,
    Take,
}

/// Represents a key combination (KeyCode + modifiers).
///
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Hotkey {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl Hotkey {
    fn plain(code: KeyCode) -> Self {
        Hotkey {
            code,
            modifiers: KeyModifiers::empty(),
        }
    }
}

/// Custom serialization for Hotkey.
///
impl Serialize for Hotkey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("Hotkey", 3)?;
        state.serialize_field("code", &KeyCodeSerde::from(self.code))?;
        if let KeyCode::Char(c) = self.code {
            state.serialize_field("char", &c)?;
        }
        state.serialize_field("modifiers", &KeyModifiersSerde::from(self.modifiers))?;
        state.end()
    }
}

/// Custom deserialization for Hotkey.
///
impl<'de> Deserialize<'de> for Hotkey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct HotkeyHelper {
            code: KeyCodeSerde,
            #[serde(default)]
            char: Option<char>,
            #[serde(default)]
            modifiers: KeyModifiersSerde,
        }

        let helper = HotkeyHelper::deserialize(deserializer)?;
        let code = match helper.code {
            KeyCodeSerde::Char => match helper.char {
                Some(c) => KeyCode::Char(c),
                None => {
                    return Err(serde::de::Error::custom(
                        "Char key code requires 'char' field",
                    ))
                }
            },
            KeyCodeSerde::Esc => KeyCode::Esc,
            KeyCodeSerde::Enter => KeyCode::Enter,
            KeyCodeSerde::Backspace => KeyCode::Backspace,
            KeyCodeSerde::Tab => KeyCode::Tab,
            KeyCodeSerde::Up => KeyCode::Up,
            KeyCodeSerde::Down => KeyCode::Down,
            KeyCodeSerde::Left => KeyCode::Left,
            KeyCodeSerde::Right => KeyCode::Right,
        };
        Ok(Hotkey {
            code,
            modifiers: helper.modifiers.into(),
        })
    }
}

/// Helper enum for serializing KeyCode.
///
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
enum KeyCodeSerde {
    Char,
    Esc,
    Enter,
    Backspace,
    Tab,
    Up,
    Down,
    Left,
    Right,
}

impl From<KeyCode> for KeyCodeSerde {
    fn from(code: KeyCode) -> Self {
        match code {
            KeyCode::Char(_) => KeyCodeSerde::Char,
            KeyCode::Esc => KeyCodeSerde::Esc,
            KeyCode::Enter => KeyCodeSerde::Enter,
            KeyCode::Backspace => KeyCodeSerde::Backspace,
            KeyCode::Tab => KeyCodeSerde::Tab,
            KeyCode::Up => KeyCodeSerde::Up,
            KeyCode::Down => KeyCodeSerde::Down,
            KeyCode::Left => KeyCodeSerde::Left,
            KeyCode::Right => KeyCodeSerde::Right,
            _ => KeyCodeSerde::Char, // Fallback for unsupported keys
        }
    }
}

/// Helper struct for serializing KeyModifiers.
///
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct KeyModifiersSerde {
    #[serde(default)]
    control: bool,
    #[serde(default)]
    shift: bool,
    #[serde(default)]
    alt: bool,
}

impl From<KeyModifiers> for KeyModifiersSerde {
    fn from(modifiers: KeyModifiers) -> Self {
        KeyModifiersSerde {
            control: modifiers.contains(KeyModifiers::CONTROL),
            shift: modifiers.contains(KeyModifiers::SHIFT),
            alt: modifiers.contains(KeyModifiers::ALT),
        }
    }
}

impl From<KeyModifiersSerde> for KeyModifiers {
    fn from(serde: KeyModifiersSerde) -> Self {
        let mut result = KeyModifiers::empty();
        if serde.control {
            result |= KeyModifiers::CONTROL;
        }
        if serde.shift {
            result |= KeyModifiers::SHIFT;
        }
        if serde.alt {
            result |= KeyModifiers::ALT;
        }
        result
    }
}

/// Maps hotkey actions to their key bindings for each context. Bindings
/// read from a config file are layered over the defaults of their view.
///
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewHotkeys {
    #[serde(deserialize_with = "author_overrides")]
    pub author: HashMap<HotkeyAction, Hotkey>,
    #[serde(deserialize_with = "preview_overrides")]
    pub preview: HashMap<HotkeyAction, Hotkey>,
    #[serde(deserialize_with = "take_overrides")]
    pub take: HashMap<HotkeyAction, Hotkey>,
}

/// A key bound to more than one action within the same view.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HotkeyConflict {
    pub context: HotkeyContext,
    pub hotkey: Hotkey,
    pub actions: Vec<HotkeyAction>,
}

fn merge_overrides<'de, D>(
    deserializer: D,
    mut bindings: HashMap<HotkeyAction, Hotkey>,
) -> Result<HashMap<HotkeyAction, Hotkey>, D::Error>
where
    D: Deserializer<'de>,
{
    let overrides = HashMap::<HotkeyAction, Hotkey>::deserialize(deserializer)?;
    bindings.extend(overrides);
    Ok(bindings)
}

fn author_overrides<'de, D>(deserializer: D) -> Result<HashMap<HotkeyAction, Hotkey>, D::Error>
where
    D: Deserializer<'de>,
{
    merge_overrides(deserializer, default_hotkeys().author)
}

fn preview_overrides<'de, D>(deserializer: D) -> Result<HashMap<HotkeyAction, Hotkey>, D::Error>
where
    D: Deserializer<'de>,
{
    merge_overrides(deserializer, default_hotkeys().preview)
}

fn take_overrides<'de, D>(deserializer: D) -> Result<HashMap<HotkeyAction, Hotkey>, D::Error>
where
    D: Deserializer<'de>,
{
    merge_overrides(deserializer, default_hotkeys().take)
}

impl Default for ViewHotkeys {
    fn default() -> Self {
        default_hotkeys()
    }
}

impl ViewHotkeys {
    /// Bindings for the given context.
    ///
    pub fn for_context(&self, context: HotkeyContext) -> &HashMap<HotkeyAction, Hotkey> {
        match context {
            HotkeyContext::Author => &self.author,
            HotkeyContext::Preview => &self.preview,
            HotkeyContext::Take => &self.take,
        }
    }

    /// Keys bound to several actions in one view, in a stable order.
    ///
    pub fn conflicts(&self) -> Vec<HotkeyConflict> {
        let mut conflicts = vec![];
        for context in [
            HotkeyContext::Author,
            HotkeyContext::Preview,
            HotkeyContext::Take,
        ] {
            let mut by_key: HashMap<&Hotkey, Vec<HotkeyAction>> = HashMap::new();
            for (action, hotkey) in self.for_context(context) {
                by_key.entry(hotkey).or_default().push(*action);
            }
            let mut found: Vec<HotkeyConflict> = by_key
                .into_iter()
                .filter(|(_, actions)| actions.len() > 1)
                .map(|(hotkey, mut actions)| {
                    actions.sort();
                    HotkeyConflict {
                        context,
                        hotkey: hotkey.clone(),
                        actions,
                    }
                })
                .collect();
            found.sort_by(|a, b| a.actions.cmp(&b.actions));
            conflicts.extend(found);
        }
        conflicts
    }
}

/// Returns default hotkey mappings for all contexts.
///
pub fn default_hotkeys() -> ViewHotkeys {
    let shared = [
        (HotkeyAction::NavigateNext, KeyCode::Char('j')),
        (HotkeyAction::NavigatePrev, KeyCode::Char('k')),
        (HotkeyAction::CreateSurvey, KeyCode::Char('1')),
        (HotkeyAction::TakeSurvey, KeyCode::Char('2')),
        (HotkeyAction::Quit, KeyCode::Char('q')),
    ];

    let mut author: HashMap<HotkeyAction, Hotkey> = shared
        .iter()
        .map(|(action, code)| (*action, Hotkey::plain(*code)))
        .collect();
    author.insert(HotkeyAction::CycleTypeNext, Hotkey::plain(KeyCode::Char('l')));
    author.insert(HotkeyAction::CycleTypePrev, Hotkey::plain(KeyCode::Char('h')));
    author.insert(HotkeyAction::EditField, Hotkey::plain(KeyCode::Enter));
    author.insert(HotkeyAction::AddOption, Hotkey::plain(KeyCode::Char('+')));
    author.insert(HotkeyAction::RemoveOption, Hotkey::plain(KeyCode::Char('-')));
    author.insert(HotkeyAction::AddQuestion, Hotkey::plain(KeyCode::Char('c')));
    author.insert(HotkeyAction::Publish, Hotkey::plain(KeyCode::Char('p')));
    author.insert(HotkeyAction::SwitchFocus, Hotkey::plain(KeyCode::Tab));

    let mut preview: HashMap<HotkeyAction, Hotkey> = shared
        .iter()
        .map(|(action, code)| (*action, Hotkey::plain(*code)))
        .collect();
    preview.insert(HotkeyAction::ToggleAnswer, Hotkey::plain(KeyCode::Char(' ')));
    preview.insert(HotkeyAction::Publish, Hotkey::plain(KeyCode::Char('p')));
    preview.insert(HotkeyAction::SwitchFocus, Hotkey::plain(KeyCode::Tab));

    let mut take: HashMap<HotkeyAction, Hotkey> = shared
        .iter()
        .map(|(action, code)| (*action, Hotkey::plain(*code)))
        .collect();
    take.insert(HotkeyAction::ToggleAnswer, Hotkey::plain(KeyCode::Char(' ')));
    take.insert(HotkeyAction::Submit, Hotkey::plain(KeyCode::Char('s')));

    ViewHotkeys {
        author,
        preview,
        take,
    }
}

/// Checks if a KeyEvent matches a Hotkey. Shift is ignored for character
/// keys since terminals report it for symbols such as `+`.
///
pub fn matches_hotkey(event: &KeyEvent, hotkey: &Hotkey) -> bool {
    if event.code != hotkey.code {
        return false;
    }
    match event.code {
        KeyCode::Char(_) => {
            event.modifiers.difference(KeyModifiers::SHIFT)
                == hotkey.modifiers.difference(KeyModifiers::SHIFT)
        }
        _ => event.modifiers == hotkey.modifiers,
    }
}

/// Gets the action for a KeyEvent in a specific context. When a key is bound
/// to several actions the one declared first in `HotkeyAction` wins.
///
pub fn get_action_for_event(
    event: &KeyEvent,
    context: HotkeyContext,
    hotkeys: &ViewHotkeys,
) -> Option<HotkeyAction> {
    hotkeys
        .for_context(context)
        .iter()
        .filter(|(_, hotkey)| matches_hotkey(event, hotkey))
        .map(|(action, _)| *action)
        .min()
}

/// Builds a footer text string from hotkey configurations.
/// Takes a list of tuples: (action, description, optional_second_action_for_paired_keys)
///
pub fn build_footer_text(
    hotkeys: &HashMap<HotkeyAction, Hotkey>,
    actions: &[(HotkeyAction, &str, Option<HotkeyAction>)],
) -> String {
    let parts: Vec<String> = actions
        .iter()
        .filter_map(|(action, description, paired_action)| {
            let hotkey = hotkeys.get(action)?;
            let paired = paired_action.and_then(|paired| hotkeys.get(&paired));
            Some(match paired {
                Some(paired_hotkey) => format!(
                    " {}/{}: {}",
                    format_hotkey_display(hotkey),
                    format_hotkey_display(paired_hotkey),
                    description
                ),
                None => format!(" {}: {}", format_hotkey_display(hotkey), description),
            })
        })
        .collect();
    parts.join(",")
}

/// Formats a hotkey for display in the footer.
///
pub fn format_hotkey_display(hotkey: &Hotkey) -> String {
    let mut parts = Vec::new();
    if hotkey.modifiers.contains(KeyModifiers::CONTROL) {
        parts.push("Ctrl");
    }
    if hotkey.modifiers.contains(KeyModifiers::SHIFT) {
        parts.push("Shift");
    }
    if hotkey.modifiers.contains(KeyModifiers::ALT) {
        parts.push("Alt");
    }

    let key_str = match &hotkey.code {
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::Up => "Up".to_string(),
        KeyCode::Down => "Down".to_string(),
        KeyCode::Left => "Left".to_string(),
        KeyCode::Right => "Right".to_string(),
        _ => "Unknown".to_string(),
    };

    if parts.is_empty() {
        key_str
    } else {
        format!("{}+{}", parts.join("+"), key_str)
    }
}
