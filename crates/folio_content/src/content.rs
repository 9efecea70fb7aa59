use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::ContentError;
use crate::schema::{
    CommandCatalog, Profile, Project, ProjectsFile, SkillCategory, SkillsFile, TimelineEntry,
    TimelineFile, UiStrings,
};

pub const COMMANDS_FILE: &str = "commands.json";
pub const PROFILE_FILE: &str = "profile.json";
pub const PROJECTS_FILE: &str = "projects.json";
pub const SKILLS_FILE: &str = "skills.json";
pub const TIMELINE_FILE: &str = "timeline.json";
pub const UI_STRINGS_FILE: &str = "ui_strings.json";

/// Raw JSON documents, one per dataset file.
#[derive(Debug, Clone, Copy)]
pub struct JsonSources<'a> {
    pub commands: &'a str,
    pub profile: &'a str,
    pub projects: &'a str,
    pub skills: &'a str,
    pub timeline: &'a str,
    pub ui_strings: &'a str,
}

impl JsonSources<'static> {
    pub fn builtin() -> Self {
        Self {
            commands: include_str!("../data/commands.json"),
            profile: include_str!("../data/profile.json"),
            projects: include_str!("../data/projects.json"),
            skills: include_str!("../data/skills.json"),
            timeline: include_str!("../data/timeline.json"),
            ui_strings: include_str!("../data/ui_strings.json"),
        }
    }
}

/// Read-only datasets consumed by the command terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Content {
    pub catalog: CommandCatalog,
    pub profile: Profile,
    pub projects: Vec<Project>,
    pub skills: Vec<SkillCategory>,
    pub timeline: Vec<TimelineEntry>,
    pub ui: UiStrings,
}

impl Content {
    /// Datasets compiled into the crate.
    pub fn builtin() -> Result<Self, ContentError> {
        Self::from_json_parts(JsonSources::builtin())
    }

    /// Loads every dataset file from `dir`. All six files are required.
    pub fn load_dir(dir: &Path) -> Result<Self, ContentError> {
        let commands = read_file(dir, COMMANDS_FILE)?;
        let profile = read_file(dir, PROFILE_FILE)?;
        let projects = read_file(dir, PROJECTS_FILE)?;
        let skills = read_file(dir, SKILLS_FILE)?;
        let timeline = read_file(dir, TIMELINE_FILE)?;
        let ui_strings = read_file(dir, UI_STRINGS_FILE)?;

        Self::from_json_parts(JsonSources {
            commands: &commands,
            profile: &profile,
            projects: &projects,
            skills: &skills,
            timeline: &timeline,
            ui_strings: &ui_strings,
        })
    }

    pub fn from_json_parts(sources: JsonSources<'_>) -> Result<Self, ContentError> {
        let catalog: CommandCatalog = parse(COMMANDS_FILE, sources.commands)?;
        let profile: Profile = parse(PROFILE_FILE, sources.profile)?;
        let projects: ProjectsFile = parse(PROJECTS_FILE, sources.projects)?;
        let skills: SkillsFile = parse(SKILLS_FILE, sources.skills)?;
        let timeline: TimelineFile = parse(TIMELINE_FILE, sources.timeline)?;
        let ui: UiStrings = parse(UI_STRINGS_FILE, sources.ui_strings)?;

        let content = Self {
            catalog,
            profile,
            projects: projects.items,
            skills: skills.categories,
            timeline: timeline.entries,
            ui,
        };
        content.validate()?;
        Ok(content)
    }

    pub fn project(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|project| project.id == id)
    }

    pub fn project_ids(&self) -> impl Iterator<Item = &str> {
        self.projects.iter().map(|project| project.id.as_str())
    }

    fn validate(&self) -> Result<(), ContentError> {
        validate_catalog(&self.catalog)?;

        let mut seen = HashSet::new();
        for project in &self.projects {
            if !is_single_token(&project.id) {
                return Err(ContentError::InvalidProjectId {
                    id: project.id.clone(),
                });
            }
            if !seen.insert(project.id.as_str()) {
                return Err(ContentError::DuplicateProjectId {
                    id: project.id.clone(),
                });
            }
        }

        for skill in self.skills.iter().flat_map(|category| category.items.iter()) {
            if skill.proficiency_level > 100 {
                return Err(ContentError::InvalidProficiency {
                    skill: skill.name.clone(),
                    value: skill.proficiency_level,
                });
            }
        }

        Ok(())
    }
}

fn validate_catalog(catalog: &CommandCatalog) -> Result<(), ContentError> {
    let mut seen = HashSet::new();

    for command in catalog.iter() {
        let name = command.name.as_str();
        if !is_single_token(name) {
            return Err(ContentError::invalid_catalog(
                name,
                "name must be a single non-empty token",
            ));
        }
        if name != name.to_lowercase() {
            return Err(ContentError::invalid_catalog(name, "name must be lowercase"));
        }
        if !seen.insert(name) {
            return Err(ContentError::invalid_catalog(name, "name appears more than once"));
        }

        if let Some(subcommands) = command.subcommands() {
            if !command.has_args {
                return Err(ContentError::invalid_catalog(
                    name,
                    "subcommands require hasArgs to be true",
                ));
            }
            if subcommands.is_empty() {
                return Err(ContentError::invalid_catalog(
                    name,
                    "subcommand set must not be empty",
                ));
            }
            let mut members = HashSet::new();
            if subcommands
                .iter()
                .any(|sub| !is_single_token(sub) || !members.insert(sub.as_str()))
            {
                return Err(ContentError::invalid_catalog(
                    name,
                    "subcommands must be unique single tokens",
                ));
            }
        }
    }

    Ok(())
}

fn is_single_token(value: &str) -> bool {
    !value.is_empty() && !value.chars().any(char::is_whitespace)
}

fn read_file(dir: &Path, file: &'static str) -> Result<String, ContentError> {
    let path = dir.join(file);
    fs::read_to_string(&path).map_err(|source| ContentError::io("reading dataset", &path, source))
}

fn parse<T: DeserializeOwned>(file: &'static str, json: &str) -> Result<T, ContentError> {
    serde_json::from_str(json).map_err(|source| ContentError::json(file, source))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_content_parses_and_validates() {
        let content = Content::builtin().expect("builtin datasets are valid");

        assert!(content.catalog.find("help").is_some());
        assert!(content.catalog.find("open").is_some_and(|open| open.has_args));
        assert!(!content.projects.is_empty());
        assert!(content.project("atlas").is_some());
    }

    #[test]
    fn single_token_rejects_whitespace_and_empty() {
        assert!(is_single_token("atlas"));
        assert!(!is_single_token(""));
        assert!(!is_single_token("two words"));
        assert!(!is_single_token("tab\there"));
    }
}
