//! Autocomplete providers.
//!
//! Completion has two tiers: a bare command name completes against the catalog,
//! and `<command> <partial>` completes the argument when the command declares an
//! argument vocabulary (a closed subcommand set or an identifier list).

use std::sync::Arc;

use folio_content::Content;

use crate::core::command::CommandId;

pub trait AutocompleteProvider {
    /// Full replacement candidates for `input`, in display order.
    fn suggest(&self, input: &str) -> Vec<String>;
}

/// Where argument candidates for a command come from.
#[derive(Debug, Clone, PartialEq, Eq)]
enum ArgumentVocabulary<'a> {
    /// Exactly one argument from a fixed set.
    Closed(&'a [String]),
    /// Any number of distinct identifiers.
    Identifiers(Vec<&'a str>),
}

#[derive(Debug, Clone)]
pub struct CatalogAutocompleteProvider {
    content: Arc<Content>,
}

impl CatalogAutocompleteProvider {
    pub fn new(content: Arc<Content>) -> Self {
        Self { content }
    }

    fn vocabulary(&self, command: &str) -> Option<ArgumentVocabulary<'_>> {
        if let Some(subcommands) = self
            .content
            .catalog
            .find(command)
            .and_then(|descriptor| descriptor.subcommands())
        {
            return Some(ArgumentVocabulary::Closed(subcommands));
        }

        match CommandId::from_name(command) {
            Some(id) if id.takes_identifier_list() => Some(ArgumentVocabulary::Identifiers(
                self.content.project_ids().collect(),
            )),
            _ => None,
        }
    }

    fn command_suggestions(&self, partial: &str) -> Vec<String> {
        self.content
            .catalog
            .names()
            .filter(|name| name.starts_with(partial))
            .map(str::to_string)
            .collect()
    }
}

impl AutocompleteProvider for CatalogAutocompleteProvider {
    fn suggest(&self, input: &str) -> Vec<String> {
        let normalized = input.to_lowercase();
        let normalized = normalized.trim();
        if normalized.is_empty() {
            return Vec::new();
        }

        let Some((command, partial)) = normalized.split_once(' ') else {
            return self.command_suggestions(normalized);
        };

        match self.vocabulary(command) {
            Some(ArgumentVocabulary::Closed(subcommands)) => subcommands
                .iter()
                .filter(|sub| sub.starts_with(partial))
                .map(|sub| format!("{command} {sub}"))
                .collect(),
            Some(ArgumentVocabulary::Identifiers(ids)) => {
                complete_identifier_list(command, partial, &ids)
            }
            None => Vec::new(),
        }
    }
}

/// Completes the last whitespace-separated token of `partial` against `ids`,
/// skipping identifiers already named earlier in the list.
fn complete_identifier_list(command: &str, partial: &str, ids: &[&str]) -> Vec<String> {
    let tokens: Vec<&str> = partial.split_whitespace().collect();
    let (taken, last) = match tokens.split_last() {
        Some((last, taken)) => (taken, *last),
        None => (&[][..], ""),
    };

    ids.iter()
        .filter(|id| id.starts_with(last) && !taken.contains(*id))
        .map(|id| {
            let mut invocation = String::from(command);
            for token in taken.iter().chain(std::iter::once(id)) {
                invocation.push(' ');
                invocation.push_str(token);
            }
            invocation
        })
        .collect()
}

/// Buffer text after accepting `suggestion` via the completion action.
///
/// Single-token suggestions get a trailing space so the next argument can be
/// typed immediately; multi-token suggestions are already delimited.
pub fn completion_value(suggestion: &str) -> String {
    if suggestion.contains(' ') {
        suggestion.to_string()
    } else {
        format!("{suggestion} ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn identifier_list_completes_last_token_only() {
        let ids = ["alpha", "album", "beta"];

        assert_eq!(
            complete_identifier_list("open", "al", &ids),
            vec!["open alpha".to_string(), "open album".to_string()]
        );
        assert_eq!(
            complete_identifier_list("open", "alpha  a", &ids),
            vec!["open alpha album".to_string()]
        );
    }

    #[test]
    fn identifier_list_with_empty_partial_offers_everything() {
        let ids = ["alpha", "beta"];
        assert_eq!(
            complete_identifier_list("open", "", &ids),
            vec!["open alpha".to_string(), "open beta".to_string()]
        );
    }

    #[test]
    fn completion_value_pads_single_tokens_only() {
        assert_eq!(completion_value("about"), "about ");
        assert_eq!(completion_value("theme dark"), "theme dark");
    }
}
