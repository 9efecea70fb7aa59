#![allow(dead_code)]

use std::sync::Arc;

use folio_content::{Content, JsonSources};
use folio_term::{ContactSink, Mode, ModeSink, Session, SessionOptions, Theme, ThemeSink};

const COMMANDS: &str = r#"{
  "commands": [
    { "name": "help", "usage": "help", "description": "List available commands" },
    { "name": "about", "usage": "about", "description": "About me" },
    { "name": "projects", "usage": "projects", "description": "List projects" },
    { "name": "open", "usage": "open <id> [id...]", "description": "Show project details", "hasArgs": true },
    { "name": "skills", "usage": "skills", "description": "Skills" },
    { "name": "timeline", "usage": "timeline", "description": "Milestones" },
    { "name": "philosophy", "usage": "philosophy", "description": "Prefer boring systems." },
    { "name": "contact", "usage": "contact", "description": "Contact form" },
    { "name": "inspect", "usage": "inspect", "description": "Runtime state" },
    { "name": "theme", "usage": "theme <light|dark>", "description": "Switch theme", "hasArgs": true, "subcommands": ["light", "dark"] },
    { "name": "mode", "usage": "mode <hr|dev>", "description": "Switch view", "hasArgs": true, "subcommands": ["hr", "dev"] },
    { "name": "clear", "usage": "clear", "description": "Clear the terminal" }
  ]
}"#;

const PROFILE: &str = r#"{
  "name": "Test Person",
  "role": "Engineer",
  "tagline": "Builds things",
  "longDescription": "Long description.",
  "contact": { "email": "t@example.com", "phone": "1", "linkedin": "in/t", "location": "Nowhere" }
}"#;

const PROJECTS: &str = r#"{
  "items": [
    { "id": "alpha", "title": "Alpha", "shortDescription": "a", "detailedDescription": "Alpha detail", "stack": ["Rust"], "architectureNotes": "Alpha notes", "featured": true },
    { "id": "album", "title": "Album", "shortDescription": "b", "detailedDescription": "Album detail", "stack": ["Go"], "architectureNotes": "Album notes" },
    { "id": "beta", "title": "Beta", "shortDescription": "c", "detailedDescription": "Beta detail", "stack": [], "architectureNotes": "Beta notes" }
  ]
}"#;

const SKILLS: &str = r#"{
  "categories": [
    { "name": "Languages", "items": [{ "id": "rust", "name": "Rust", "proficiencyLevel": 90 }] }
  ]
}"#;

const TIMELINE: &str = r#"{
  "entries": [
    { "id": "one", "versionTag": "v1.0", "year": 2020, "title": "Start", "description": "Began." }
  ]
}"#;

const UI_STRINGS: &str = r#"{
  "terminal": { "prompt": "guest$", "welcomeMessage": "Welcome. Type help.", "placeholder": "type..." }
}"#;

pub fn fixture_content() -> Arc<Content> {
    let content = Content::from_json_parts(JsonSources {
        commands: COMMANDS,
        profile: PROFILE,
        projects: PROJECTS,
        skills: SKILLS,
        timeline: TIMELINE,
        ui_strings: UI_STRINGS,
    })
    .expect("fixture content is valid");
    Arc::new(content)
}

#[derive(Debug, Default)]
pub struct HostSpy {
    pub themes: Vec<Theme>,
    pub modes: Vec<Mode>,
    pub contact_opens: usize,
}

impl ThemeSink for HostSpy {
    fn set_theme(&mut self, theme: Theme) {
        self.themes.push(theme);
    }
}

impl ModeSink for HostSpy {
    fn set_mode(&mut self, mode: Mode) {
        self.modes.push(mode);
    }
}

impl ContactSink for HostSpy {
    fn open_contact(&mut self) {
        self.contact_opens += 1;
    }
}

pub fn quiet_options() -> SessionOptions {
    SessionOptions {
        welcome: false,
        ..SessionOptions::default()
    }
}

pub fn session() -> Session<HostSpy> {
    Session::new(fixture_content(), HostSpy::default(), quiet_options())
}

pub fn submit(session: &mut Session<HostSpy>, line: &str) -> folio_term::SubmitOutcome {
    session.replace_input(line);
    session.on_submit()
}
