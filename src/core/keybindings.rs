//! Terminal keybindings.
//!
//! Keys are identified by the lowercase string form used across the crate
//! (`"up"`, `"tab"`, `"ctrl+c"`). Hosts translate their native key events to a
//! [`KeyId`] and ask [`TerminalKeybindings::action_for`] what to do.

use std::collections::HashMap;

use once_cell::sync::Lazy;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TerminalAction {
    HistoryPrevious,
    HistoryNext,
    CycleCompletion,
    Submit,
    DeleteCharBackward,
    ClearLine,
    Quit,
}

pub type KeyId = String;

pub static DEFAULT_TERMINAL_KEYBINDINGS: Lazy<HashMap<TerminalAction, Vec<KeyId>>> =
    Lazy::new(|| {
        use TerminalAction::*;

        let mut map = HashMap::new();
        map.insert(HistoryPrevious, vec!["up".to_string(), "ctrl+p".to_string()]);
        map.insert(HistoryNext, vec!["down".to_string(), "ctrl+n".to_string()]);
        map.insert(CycleCompletion, vec!["tab".to_string()]);
        map.insert(Submit, vec!["enter".to_string()]);
        map.insert(DeleteCharBackward, vec!["backspace".to_string()]);
        map.insert(ClearLine, vec!["ctrl+u".to_string()]);
        map.insert(Quit, vec!["ctrl+c".to_string(), "ctrl+d".to_string()]);
        map
    });

#[derive(Debug, Clone)]
pub struct TerminalKeybindings {
    by_key: HashMap<KeyId, TerminalAction>,
}

impl Default for TerminalKeybindings {
    fn default() -> Self {
        Self::new(HashMap::new())
    }
}

impl TerminalKeybindings {
    /// Defaults with per-action overrides. An override replaces every default
    /// key of that action.
    pub fn new(overrides: HashMap<TerminalAction, Vec<KeyId>>) -> Self {
        let mut by_key = HashMap::new();
        for (action, keys) in DEFAULT_TERMINAL_KEYBINDINGS.iter() {
            let keys = overrides.get(action).unwrap_or(keys);
            for key in keys {
                by_key.insert(normalize_key(key), *action);
            }
        }
        Self { by_key }
    }

    pub fn action_for(&self, key: &str) -> Option<TerminalAction> {
        self.by_key.get(&normalize_key(key)).copied()
    }

    pub fn keys_for(&self, action: TerminalAction) -> Vec<&str> {
        let mut keys: Vec<&str> = self
            .by_key
            .iter()
            .filter(|(_, bound)| **bound == action)
            .map(|(key, _)| key.as_str())
            .collect();
        keys.sort_unstable();
        keys
    }
}

fn normalize_key(key: &str) -> KeyId {
    key.trim().to_lowercase()
}
