//! Pure mapping from key events to form actions.
//!
//! `classify_key` decides what a key means; `FormApp::apply` performs it.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What a key press asks the form to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    /// Type a character into the focused field.
    Insert(char),
    /// Delete the last character of the focused field.
    Backspace,
    /// Clear the focused field.
    ClearField,
    /// Move focus to the next field.
    FocusNext,
    /// Move focus to the previous field.
    FocusPrev,
    /// Submit the form.
    Submit,
    /// Toggle the legend panel.
    ToggleLegend,
    /// Leave the form.
    Quit,
}

/// Characters a numeric field accepts when typed.
pub fn is_numeric_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E')
}

/// Map a key event to an action, or `None` if the key does nothing.
pub fn classify_key(key: KeyEvent) -> Option<FormAction> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('c') | KeyCode::Char('q') if ctrl => Some(FormAction::Quit),
        KeyCode::Char('u') if ctrl => Some(FormAction::ClearField),
        KeyCode::Char('l') if ctrl => Some(FormAction::ToggleLegend),
        KeyCode::Esc => Some(FormAction::Quit),

        KeyCode::Enter => Some(FormAction::Submit),
        KeyCode::Tab | KeyCode::Down => Some(FormAction::FocusNext),
        KeyCode::BackTab | KeyCode::Up => Some(FormAction::FocusPrev),
        KeyCode::Backspace => Some(FormAction::Backspace),
        KeyCode::Delete => Some(FormAction::ClearField),

        KeyCode::Char(c) if !ctrl && is_numeric_char(c) => Some(FormAction::Insert(c)),

        _ => None,
    }
}
