//! Built-in command renderers.
//!
//! Renderers only read the datasets. Each returns the typed result for one
//! validated invocation, or the [`CommandError`] that explains why not.

use std::collections::HashSet;
use std::time::Duration;

use folio_content::{Content, Project};
use tracing::debug;

use crate::core::command::{CommandError, CommandId, CommandResult, Mode, Theme};
use crate::core::parser::Invocation;
use crate::core::payload::{Fragment, Payload};

pub struct RenderContext<'a> {
    pub content: &'a Content,
    /// Time since the session started, reported by `inspect`.
    pub elapsed: Duration,
}

/// Routes a validated invocation to its renderer, or answers descriptor-only
/// commands with their description.
pub fn dispatch(invocation: &Invocation, ctx: &RenderContext<'_>) -> CommandResult {
    let Some(id) = invocation.id else {
        let description = ctx
            .content
            .catalog
            .find(&invocation.command)
            .map(|descriptor| descriptor.description.clone())
            .unwrap_or_default();
        return CommandResult::Info(Payload::text(description));
    };

    debug!(command = %id, args = ?invocation.args, "dispatching");
    render(id, &invocation.args, ctx).unwrap_or_else(CommandResult::from)
}

pub fn render(
    id: CommandId,
    args: &[String],
    ctx: &RenderContext<'_>,
) -> Result<CommandResult, CommandError> {
    let content = ctx.content;
    match id {
        CommandId::Help => Ok(CommandResult::Info(help(content))),
        CommandId::About => Ok(CommandResult::Success(about(content))),
        CommandId::Projects => Ok(CommandResult::Success(projects(content))),
        CommandId::Open => open(content, args).map(CommandResult::Success),
        CommandId::Skills => Ok(CommandResult::Success(skills(content))),
        CommandId::Timeline => Ok(CommandResult::Success(timeline(content))),
        CommandId::Contact => Ok(CommandResult::Contact),
        CommandId::Inspect => Ok(CommandResult::Info(inspect(content, ctx.elapsed))),
        CommandId::Theme => theme(args, &usage_for(content, id)),
        CommandId::Mode => mode(args, &usage_for(content, id)),
        CommandId::Clear => Ok(CommandResult::Clear),
    }
}

fn help(content: &Content) -> Payload {
    let mut payload = Payload::new(vec![Fragment::Heading("Available Commands:".to_string())]);
    for descriptor in content.catalog.iter() {
        payload.push(Fragment::Columns(vec![
            descriptor.usage.clone(),
            descriptor.description.clone(),
        ]));
    }
    payload
}

fn about(content: &Content) -> Payload {
    let profile = &content.profile;
    let contact = &profile.contact;
    Payload::new(vec![
        Fragment::Heading(profile.name.clone()),
        Fragment::Muted(format!("{} · {}", profile.role, profile.tagline)),
        Fragment::Text(profile.long_description.clone()),
        Fragment::Spacer,
        contact_field("email", "Email:", &contact.email),
        contact_field("iphone", "Phone:", &contact.phone),
        contact_field("globe_with_meridians", "LinkedIn:", &contact.linkedin),
        contact_field("round_pushpin", "Location:", &contact.location),
    ])
}

fn contact_field(shortcode: &str, fallback: &str, value: &str) -> Fragment {
    let label = emojis::get_by_shortcode(shortcode)
        .map(|emoji| emoji.as_str().to_string())
        .unwrap_or_else(|| fallback.to_string());
    Fragment::Field {
        label,
        value: value.to_string(),
    }
}

fn projects(content: &Content) -> Payload {
    let mut payload = Payload::new(vec![Fragment::Heading(format!(
        "Projects ({})",
        content.projects.len()
    ))]);
    for project in &content.projects {
        let mut header = vec![project.id.clone()];
        if project.featured {
            header.push("★ featured".to_string());
        }
        payload.push(Fragment::Columns(header));
        payload.push(Fragment::Text(project.title.clone()));
        payload.push(Fragment::Muted(project.short_description.clone()));
    }
    payload.push(Fragment::Muted("Use `open <id>` to view details".to_string()));
    payload
}

fn open(content: &Content, args: &[String]) -> Result<Payload, CommandError> {
    let mut seen = HashSet::new();
    let unique: Vec<&str> = args
        .iter()
        .map(String::as_str)
        .filter(|id| seen.insert(*id))
        .collect();

    let unknown: Vec<String> = unique
        .iter()
        .filter(|id| content.project(id).is_none())
        .map(|id| id.to_string())
        .collect();
    if !unknown.is_empty() {
        return Err(CommandError::UnknownIdentifier { ids: unknown });
    }

    let mut payload = Payload::empty();
    for (index, project) in unique.iter().filter_map(|id| content.project(id)).enumerate() {
        if index > 0 {
            payload.push(Fragment::Spacer);
        }
        push_project_detail(&mut payload, project);
    }
    Ok(payload)
}

fn push_project_detail(payload: &mut Payload, project: &Project) {
    payload.push(Fragment::Heading(project.title.clone()));
    payload.push(Fragment::Text(project.detailed_description.clone()));
    payload.push(Fragment::Tags {
        label: "Stack:".to_string(),
        items: project.stack.clone(),
    });
    payload.push(Fragment::Field {
        label: "Architecture:".to_string(),
        value: project.architecture_notes.clone(),
    });
}

fn skills(content: &Content) -> Payload {
    let mut payload = Payload::empty();
    for (index, category) in content.skills.iter().enumerate() {
        if index > 0 {
            payload.push(Fragment::Spacer);
        }
        payload.push(Fragment::Heading(category.name.clone()));
        for skill in &category.items {
            payload.push(Fragment::Meter {
                label: skill.name.clone(),
                percent: skill.proficiency_level,
            });
        }
    }
    payload
}

fn timeline(content: &Content) -> Payload {
    Payload::new(
        content
            .timeline
            .iter()
            .map(|entry| {
                Fragment::Columns(vec![
                    entry.version_tag.clone(),
                    entry.year.to_string(),
                    entry.title.clone(),
                    entry.description.clone(),
                ])
            })
            .collect(),
    )
}

fn inspect(content: &Content, elapsed: Duration) -> Payload {
    let field = |label: &str, value: String| Fragment::Field {
        label: label.to_string(),
        value,
    };
    Payload::new(vec![
        Fragment::Heading("Runtime State".to_string()),
        field("Modules loaded:", loaded_modules(content).join(", ")),
        field("Projects:", content.projects.len().to_string()),
        field("Skill categories:", content.skills.len().to_string()),
        field("Timeline entries:", content.timeline.len().to_string()),
        field("Render time:", format!("{}ms", elapsed.as_millis())),
    ])
}

/// Dataset modules that carry data in this session, in load order.
fn loaded_modules(content: &Content) -> Vec<&'static str> {
    [
        ("commands", !content.catalog.is_empty()),
        ("profile", true),
        ("projects", !content.projects.is_empty()),
        ("skills", !content.skills.is_empty()),
        ("timeline", !content.timeline.is_empty()),
    ]
    .into_iter()
    .filter_map(|(name, loaded)| loaded.then_some(name))
    .collect()
}

fn usage_for(content: &Content, id: CommandId) -> String {
    content
        .catalog
        .find(id.name())
        .map(|descriptor| descriptor.usage.clone())
        .unwrap_or_else(|| id.name().to_string())
}

fn theme(args: &[String], usage: &str) -> Result<CommandResult, CommandError> {
    let theme: Theme = single_literal(args, usage)?;
    Ok(CommandResult::Success(Payload::text(format!(
        "Theme switched to {theme}"
    ))))
}

fn mode(args: &[String], usage: &str) -> Result<CommandResult, CommandError> {
    let mode: Mode = single_literal(args, usage)?;
    Ok(CommandResult::ModeSwitch {
        mode,
        payload: Payload::text(format!(
            "Switching to {} mode...",
            mode.as_str().to_uppercase()
        )),
    })
}

fn single_literal<T: std::str::FromStr>(args: &[String], usage: &str) -> Result<T, CommandError> {
    args.first()
        .and_then(|value| value.parse().ok())
        .ok_or_else(|| CommandError::InvalidLiteral {
            usage: usage.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_content::CommandCatalog;
    use pretty_assertions::assert_eq;

    fn ctx(content: &Content) -> RenderContext<'_> {
        RenderContext {
            content,
            elapsed: Duration::from_millis(1234),
        }
    }

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn theme_rejects_non_literals() {
        let content = Content::builtin().expect("builtin content");
        let result = render(CommandId::Theme, &args(&["purple"]), &ctx(&content));
        assert_eq!(
            result,
            Err(CommandError::InvalidLiteral {
                usage: "theme <light|dark>".to_string()
            })
        );
    }

    #[test]
    fn literal_errors_use_catalog_usage() {
        let mut content = Content::builtin().expect("builtin content");
        let mut commands: Vec<_> = content.catalog.iter().cloned().collect();
        for descriptor in &mut commands {
            if descriptor.name == "mode" {
                descriptor.usage = "mode hr|dev".to_string();
            }
        }
        content.catalog = CommandCatalog::new(commands);

        let result = render(CommandId::Mode, &args(&["sideways"]), &ctx(&content));
        assert_eq!(
            result,
            Err(CommandError::InvalidLiteral {
                usage: "mode hr|dev".to_string()
            })
        );
    }

    #[test]
    fn mode_switch_carries_target_mode() {
        let content = Content::builtin().expect("builtin content");
        let result = render(CommandId::Mode, &args(&["hr"]), &ctx(&content)).expect("valid mode");
        assert_eq!(
            result,
            CommandResult::ModeSwitch {
                mode: Mode::Hr,
                payload: Payload::text("Switching to HR mode..."),
            }
        );
    }

    #[test]
    fn inspect_reports_counts_and_elapsed() {
        let content = Content::builtin().expect("builtin content");
        let result = render(CommandId::Inspect, &[], &ctx(&content)).expect("inspect renders");
        let text = result.payload().plain_text();

        assert!(text.contains(&format!("Projects: {}", content.projects.len())));
        assert!(text.contains("Render time: 1234ms"));
        assert!(text.contains("Modules loaded: commands, profile, projects, skills, timeline"));
    }

    #[test]
    fn inspect_lists_only_datasets_with_entries() {
        let mut content = Content::builtin().expect("builtin content");
        content.timeline.clear();
        content.skills.clear();

        let result = render(CommandId::Inspect, &[], &ctx(&content)).expect("inspect renders");
        assert!(result
            .payload()
            .plain_text()
            .contains("Modules loaded: commands, profile, projects\n"));
    }

    #[test]
    fn open_skips_duplicates_in_request_order() {
        let content = Content::builtin().expect("builtin content");
        let payload = open(&content, &args(&["relay", "atlas", "relay"])).expect("known ids");

        let headings: Vec<&Fragment> = payload
            .fragments()
            .iter()
            .filter(|fragment| matches!(fragment, Fragment::Heading(_)))
            .collect();
        assert_eq!(
            headings,
            vec![
                &Fragment::Heading("Relay".to_string()),
                &Fragment::Heading("Atlas Object Store".to_string()),
            ]
        );
    }
}
