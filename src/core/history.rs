//! Submitted-command history with a navigation cursor.

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct InputHistory {
    entries: Vec<String>,
    cursor: Option<usize>,
}

impl InputHistory {
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// `None` while the buffer holds free-typed text.
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn record_entry(&mut self, text: String) {
        self.entries.push(text);
        self.cursor = None;
    }

    /// Steps toward the oldest entry, starting from the newest when unset.
    /// Stays on the oldest entry once reached. Returns the text to load.
    pub fn previous(&mut self) -> Option<String> {
        if self.entries.is_empty() {
            return None;
        }

        let new_cursor = match self.cursor {
            Some(index) => index.saturating_sub(1).min(self.entries.len() - 1),
            None => self.entries.len() - 1,
        };

        self.cursor = Some(new_cursor);
        Some(self.entries[new_cursor].clone())
    }

    /// Steps toward the newest entry. Walking past it unsets the cursor and
    /// yields an empty buffer; an unset cursor yields `None`.
    pub fn next(&mut self) -> Option<String> {
        let current = self.cursor?;

        let next = current + 1;
        if next >= self.entries.len() {
            self.cursor = None;
            return Some(String::new());
        }

        self.cursor = Some(next);
        Some(self.entries[next].clone())
    }
}
