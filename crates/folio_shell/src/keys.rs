//! Translation from crossterm key events to the crate's key ids.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use folio_term::KeyId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyInput {
    /// Printable character to insert.
    Char(char),
    /// Named key, matched against keybindings.
    Named(KeyId),
}

/// Returns `None` for releases and keys the shell does not handle.
pub fn translate(event: &KeyEvent) -> Option<KeyInput> {
    if !matches!(event.kind, KeyEventKind::Press | KeyEventKind::Repeat) {
        return None;
    }

    let ctrl = event.modifiers.contains(KeyModifiers::CONTROL);
    let alt = event.modifiers.contains(KeyModifiers::ALT);

    let base = match event.code {
        KeyCode::Char(ch) if !ctrl && !alt => return Some(KeyInput::Char(ch)),
        KeyCode::Char(ch) => ch.to_ascii_lowercase().to_string(),
        KeyCode::Up => "up".to_string(),
        KeyCode::Down => "down".to_string(),
        KeyCode::Tab => "tab".to_string(),
        KeyCode::Enter => "enter".to_string(),
        KeyCode::Backspace => "backspace".to_string(),
        KeyCode::Esc => "esc".to_string(),
        _ => return None,
    };

    let mut id = String::new();
    if ctrl {
        id.push_str("ctrl+");
    }
    if alt {
        id.push_str("alt+");
    }
    id.push_str(&base);
    Some(KeyInput::Named(id))
}
