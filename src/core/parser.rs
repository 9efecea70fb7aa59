//! Splits a submitted line into a command and arguments and checks it against
//! the catalog's arity rules.

use folio_content::{CommandCatalog, CommandDescriptor};

use crate::core::command::{CommandError, CommandId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Lowercased command name as found in the catalog.
    pub command: String,
    pub args: Vec<String>,
    /// Built-in renderer for the command; `None` for descriptor-only commands.
    pub id: Option<CommandId>,
}

pub fn validate(catalog: &CommandCatalog, input: &str) -> Result<Invocation, CommandError> {
    let mut tokens = input.split_whitespace();
    let command = tokens.next().unwrap_or_default().to_lowercase();
    let args: Vec<String> = tokens.map(str::to_string).collect();

    let Some(descriptor) = catalog.find(&command) else {
        return Err(CommandError::UnknownCommand { name: command });
    };

    let id = CommandId::from_name(&command);
    check_arity(descriptor, id, &args)?;

    Ok(Invocation { command, args, id })
}

fn check_arity(
    descriptor: &CommandDescriptor,
    id: Option<CommandId>,
    args: &[String],
) -> Result<(), CommandError> {
    let usage_error = || CommandError::UsageMismatch {
        usage: descriptor.usage.clone(),
    };

    if !descriptor.has_args {
        return if args.is_empty() { Ok(()) } else { Err(usage_error()) };
    }

    if args.is_empty() {
        return Err(usage_error());
    }

    if let Some(subcommands) = descriptor.subcommands() {
        return match args {
            [only] if subcommands.contains(only) => Ok(()),
            _ => Err(usage_error()),
        };
    }

    if id.is_some_and(CommandId::takes_identifier_list) {
        return Ok(());
    }

    if args.len() > 1 {
        return Err(usage_error());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn descriptor(name: &str, usage: &str, has_args: bool, subs: Option<&[&str]>) -> CommandDescriptor {
        CommandDescriptor {
            name: name.to_string(),
            usage: usage.to_string(),
            description: format!("{name} description"),
            has_args,
            subcommands: subs.map(|subs| subs.iter().map(|sub| sub.to_string()).collect()),
        }
    }

    fn catalog() -> CommandCatalog {
        CommandCatalog::new(vec![
            descriptor("help", "help", false, None),
            descriptor("open", "open <id> [id...]", true, None),
            descriptor("theme", "theme <light|dark>", true, Some(&["light", "dark"])),
            descriptor("echo", "echo <word>", true, None),
        ])
    }

    fn usage(text: &str) -> CommandError {
        CommandError::UsageMismatch {
            usage: text.to_string(),
        }
    }

    #[test]
    fn command_name_is_case_insensitive_but_args_are_not() {
        let invocation = validate(&catalog(), "  THEME   dark ").expect("valid invocation");
        assert_eq!(
            invocation,
            Invocation {
                command: "theme".to_string(),
                args: vec!["dark".to_string()],
                id: Some(CommandId::Theme),
            }
        );

        assert_eq!(validate(&catalog(), "theme Dark"), Err(usage("theme <light|dark>")));
    }

    #[test]
    fn unknown_command_names_lowercased_token() {
        assert_eq!(
            validate(&catalog(), "Sudo rm"),
            Err(CommandError::UnknownCommand {
                name: "sudo".to_string()
            })
        );
    }

    #[test]
    fn argless_command_rejects_arguments() {
        assert!(validate(&catalog(), "help").is_ok());
        assert_eq!(validate(&catalog(), "help me"), Err(usage("help")));
    }

    #[test]
    fn arg_commands_require_at_least_one() {
        assert_eq!(validate(&catalog(), "open"), Err(usage("open <id> [id...]")));
        assert_eq!(validate(&catalog(), "echo"), Err(usage("echo <word>")));
    }

    #[test]
    fn subcommand_sets_require_exactly_one_member() {
        assert_eq!(
            validate(&catalog(), "theme dark light"),
            Err(usage("theme <light|dark>"))
        );
        assert_eq!(
            validate(&catalog(), "theme purple"),
            Err(usage("theme <light|dark>"))
        );
    }

    #[test]
    fn open_accepts_any_number_of_ids() {
        let invocation = validate(&catalog(), "open a b c a").expect("open is variadic");
        assert_eq!(invocation.args, vec!["a", "b", "c", "a"]);
    }

    #[test]
    fn single_argument_commands_reject_extras() {
        assert!(validate(&catalog(), "echo hi").is_ok());
        assert_eq!(validate(&catalog(), "echo hi there"), Err(usage("echo <word>")));
    }

    #[test]
    fn descriptor_only_commands_have_no_renderer_id() {
        let invocation = validate(&catalog(), "echo hi").expect("valid invocation");
        assert_eq!(invocation.id, None);
    }
}
