//! Command identifiers, result kinds, and the invocation error taxonomy.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::core::payload::Payload;

/// Commands with a built-in renderer. Catalog entries outside this set are
/// descriptor-only and answer with their description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandId {
    Help,
    About,
    Projects,
    Open,
    Skills,
    Timeline,
    Contact,
    Inspect,
    Theme,
    Mode,
    Clear,
}

impl CommandId {
    pub const ALL: [CommandId; 11] = [
        CommandId::Help,
        CommandId::About,
        CommandId::Projects,
        CommandId::Open,
        CommandId::Skills,
        CommandId::Timeline,
        CommandId::Contact,
        CommandId::Inspect,
        CommandId::Theme,
        CommandId::Mode,
        CommandId::Clear,
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.name() == name)
    }

    pub fn name(self) -> &'static str {
        match self {
            CommandId::Help => "help",
            CommandId::About => "about",
            CommandId::Projects => "projects",
            CommandId::Open => "open",
            CommandId::Skills => "skills",
            CommandId::Timeline => "timeline",
            CommandId::Contact => "contact",
            CommandId::Inspect => "inspect",
            CommandId::Theme => "theme",
            CommandId::Mode => "mode",
            CommandId::Clear => "clear",
        }
    }

    /// Whether the command takes an open-ended list of identifier arguments.
    pub fn takes_identifier_list(self) -> bool {
        matches!(self, CommandId::Open)
    }
}

impl fmt::Display for CommandId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

/// Exact, case-sensitive match on the literal.
impl FromStr for Theme {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Hr,
    Dev,
}

impl Mode {
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Hr => "hr",
            Mode::Dev => "dev",
        }
    }
}

impl FromStr for Mode {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "hr" => Ok(Mode::Hr),
            "dev" => Ok(Mode::Dev),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultKind {
    Success,
    Error,
    Info,
    Clear,
    ModeSwitch,
    Contact,
}

/// Outcome of one invocation. Produced once, consumed by the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandResult {
    Success(Payload),
    Error(Payload),
    Info(Payload),
    Clear,
    ModeSwitch { mode: Mode, payload: Payload },
    Contact,
}

impl CommandResult {
    pub fn kind(&self) -> ResultKind {
        match self {
            CommandResult::Success(_) => ResultKind::Success,
            CommandResult::Error(_) => ResultKind::Error,
            CommandResult::Info(_) => ResultKind::Info,
            CommandResult::Clear => ResultKind::Clear,
            CommandResult::ModeSwitch { .. } => ResultKind::ModeSwitch,
            CommandResult::Contact => ResultKind::Contact,
        }
    }

    /// Display payload; empty for purely behavioral kinds.
    pub fn payload(&self) -> Payload {
        match self {
            CommandResult::Success(payload)
            | CommandResult::Error(payload)
            | CommandResult::Info(payload)
            | CommandResult::ModeSwitch { payload, .. } => payload.clone(),
            CommandResult::Clear | CommandResult::Contact => Payload::empty(),
        }
    }

    pub fn into_payload(self) -> Payload {
        match self {
            CommandResult::Success(payload)
            | CommandResult::Error(payload)
            | CommandResult::Info(payload)
            | CommandResult::ModeSwitch { payload, .. } => payload,
            CommandResult::Clear | CommandResult::Contact => Payload::empty(),
        }
    }
}

impl From<CommandError> for CommandResult {
    fn from(error: CommandError) -> Self {
        CommandResult::Error(Payload::text(error.to_string()))
    }
}

/// Every way a single invocation can be rejected. None of these are fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Command not found: \"{name}\". Type help for available commands.")]
    UnknownCommand { name: String },

    #[error("Usage: {usage}")]
    UsageMismatch { usage: String },

    #[error("Project not found: \"{}\". Type projects to list available items.", .ids.join(", "))]
    UnknownIdentifier { ids: Vec<String> },

    #[error("Usage: {usage}")]
    InvalidLiteral { usage: String },
}
