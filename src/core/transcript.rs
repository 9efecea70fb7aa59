//! Visible log of submitted commands and their results.

use crate::core::command::ResultKind;
use crate::core::payload::Payload;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranscriptEntry {
    Command(String),
    Result { kind: ResultKind, payload: Payload },
}

/// Append-only, except for [`Transcript::clear`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    entries: Vec<TranscriptEntry>,
}

impl Transcript {
    pub fn entries(&self) -> &[TranscriptEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn push_command(&mut self, text: impl Into<String>) {
        self.entries.push(TranscriptEntry::Command(text.into()));
    }

    pub fn push_result(&mut self, kind: ResultKind, payload: Payload) {
        self.entries.push(TranscriptEntry::Result { kind, payload });
    }

    pub fn push_exchange(&mut self, command: impl Into<String>, kind: ResultKind, payload: Payload) {
        self.push_command(command);
        self.push_result(kind, payload);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
