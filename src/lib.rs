//! Command-terminal core for the portfolio's dev mode.
//!
//! A [`Session`] owns a single-line editor with history and completion, validates
//! submitted lines against the command catalog, renders typed results, and keeps
//! the visible transcript. Side effects leave through three collaborator traits
//! ([`ThemeSink`], [`ModeSink`], [`ContactSink`]) implemented by the host.
//!
//! Invariant: every non-blank submission lands in history exactly once, whether
//! or not it names a valid command.

pub mod config;
pub mod logging;

pub mod core;

/// Autocomplete providers.
pub use crate::core::autocomplete::{
    completion_value, AutocompleteProvider, CatalogAutocompleteProvider,
};

/// Commands, results, and the invocation error taxonomy.
pub use crate::core::command::{CommandError, CommandId, CommandResult, Mode, ResultKind, Theme};

/// Line editor and history.
pub use crate::core::editor::LineEditor;
pub use crate::core::history::InputHistory;

/// Keybinding configuration and default mappings.
pub use crate::core::keybindings::{
    KeyId, TerminalAction, TerminalKeybindings, DEFAULT_TERMINAL_KEYBINDINGS,
};

/// Parsing, rendering, and payloads.
pub use crate::core::parser::{validate, Invocation};
pub use crate::core::payload::{Fragment, Payload};
pub use crate::core::render::{dispatch, render, RenderContext};

/// Session pipeline and collaborator interfaces.
pub use crate::core::session::{
    ActionOutcome, ContactSink, ModeSink, PendingModeSwitch, Session, SessionOptions,
    SubmitOutcome, ThemeSink,
};
pub use crate::core::transcript::{Transcript, TranscriptEntry};

/// Width helpers for laying out payload text.
pub use crate::core::text::width::{pad_to_width, truncate_to_width, visible_width};

pub use crate::config::EnvConfig;
pub use folio_content::Content;
