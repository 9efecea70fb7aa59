//! Read-only datasets behind the portfolio terminal: the command catalog,
//! profile, projects, skills, timeline, and terminal UI strings.
//!
//! Every loader validates after parsing, so a [`Content`] value always has a
//! catalog of unique lowercase single-token names and unique project ids.

mod content;
mod error;
mod schema;

pub use content::{
    Content, JsonSources, COMMANDS_FILE, PROFILE_FILE, PROJECTS_FILE, SKILLS_FILE, TIMELINE_FILE,
    UI_STRINGS_FILE,
};
pub use error::ContentError;
pub use schema::{
    CommandCatalog, CommandDescriptor, ContactDetails, Profile, Project, Skill, SkillCategory,
    TerminalStrings, TimelineEntry, UiStrings,
};
