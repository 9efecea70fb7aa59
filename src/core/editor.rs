//! Single-line editor state: buffer, history navigation, and completion cycling.

use tracing::debug;
use unicode_segmentation::UnicodeSegmentation;

use crate::core::autocomplete::{completion_value, AutocompleteProvider};
use crate::core::history::InputHistory;

pub struct LineEditor {
    buffer: String,
    history: InputHistory,
    suggestions: Vec<String>,
    suggestion_cursor: Option<usize>,
    provider: Box<dyn AutocompleteProvider>,
}

impl std::fmt::Debug for LineEditor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LineEditor")
            .field("buffer", &self.buffer)
            .field("history", &self.history)
            .field("suggestions", &self.suggestions)
            .field("suggestion_cursor", &self.suggestion_cursor)
            .finish_non_exhaustive()
    }
}

impl LineEditor {
    pub fn new(provider: Box<dyn AutocompleteProvider>) -> Self {
        Self {
            buffer: String::new(),
            history: InputHistory::default(),
            suggestions: Vec::new(),
            suggestion_cursor: None,
            provider,
        }
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn history(&self) -> &InputHistory {
        &self.history
    }

    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    pub fn suggestion_cursor(&self) -> Option<usize> {
        self.suggestion_cursor
    }

    /// Replaces the whole buffer as if the user had typed it.
    pub fn replace_input(&mut self, text: impl Into<String>) {
        self.buffer = text.into();
        self.on_buffer_edited();
    }

    pub fn insert_char(&mut self, ch: char) {
        self.buffer.push(ch);
        self.on_buffer_edited();
    }

    pub fn insert_str(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        self.buffer.push_str(text);
        self.on_buffer_edited();
    }

    /// Removes the last grapheme cluster. No-op on an empty buffer.
    pub fn delete_char_backward(&mut self) {
        let Some((index, _)) = self.buffer.grapheme_indices(true).next_back() else {
            return;
        };
        self.buffer.truncate(index);
        self.on_buffer_edited();
    }

    pub fn clear_buffer(&mut self) {
        if self.buffer.is_empty() {
            return;
        }
        self.buffer.clear();
        self.on_buffer_edited();
    }

    pub fn history_previous(&mut self) {
        if let Some(entry) = self.history.previous() {
            self.load_history_text(entry);
        }
    }

    pub fn history_next(&mut self) {
        if let Some(entry) = self.history.next() {
            self.load_history_text(entry);
        }
    }

    /// Tab semantics: a single candidate is accepted and the list closes;
    /// several candidates are cycled through with the list kept open.
    pub fn cycle_completion(&mut self) {
        match self.suggestions.len() {
            0 => {}
            1 => {
                self.buffer = completion_value(&self.suggestions[0]);
                self.suggestions.clear();
                self.suggestion_cursor = None;
            }
            len => {
                let next = match self.suggestion_cursor {
                    Some(index) => (index + 1) % len,
                    None => 0,
                };
                self.suggestion_cursor = Some(next);
                self.buffer = completion_value(&self.suggestions[next]);
            }
        }
        debug!(buffer = %self.buffer, cursor = ?self.suggestion_cursor, "completion cycled");
    }

    /// Takes a candidate verbatim, without the trailing-space rule.
    pub fn accept_suggestion(&mut self, index: usize) {
        let Some(value) = self.suggestions.get(index).cloned() else {
            return;
        };
        self.buffer = value;
        self.suggestions.clear();
        self.suggestion_cursor = None;
    }

    /// Takes the trimmed buffer for submission, records it in history, and
    /// resets the editor. Blank buffers are left untouched and yield `None`.
    pub fn take_submission(&mut self) -> Option<String> {
        let submitted = self.buffer.trim().to_string();
        if submitted.is_empty() {
            return None;
        }

        self.history.record_entry(submitted.clone());
        self.buffer.clear();
        self.suggestions.clear();
        self.suggestion_cursor = None;
        Some(submitted)
    }

    fn on_buffer_edited(&mut self) {
        self.suggestion_cursor = None;
        self.refresh_suggestions();
    }

    fn refresh_suggestions(&mut self) {
        self.suggestions = if self.buffer.trim().is_empty() {
            Vec::new()
        } else {
            self.provider.suggest(&self.buffer)
        };
    }

    fn load_history_text(&mut self, text: String) {
        self.buffer = text;
        self.suggestions.clear();
        self.suggestion_cursor = None;
    }
}
