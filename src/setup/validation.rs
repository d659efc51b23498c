//! The item-validation enablement flow: backend selection, schema selection
//! session, and the generated pipeline settings.

use super::prompts;
use super::terminal::Terminal;
use super::SetupError;
use crate::config::{is_truthy_value, Project, SettingsStore};
use crate::schemas::{
    find_schema_candidates, DiscoveryError, SchemaCandidate, ValidationBackend,
    VALIDATION_BACKENDS,
};
use crossterm::style::Stylize;

pub const PIPELINE_SETTING: &str = "ITEM_PIPELINES";
pub const PIPELINE_LINE: &str = "ITEM_PIPELINES = {\"crawlmon.pipelines.ItemValidation\": 800}";

/// Runs the whole optional validation flow. Every failure path here is a
/// user-visible notice, not an error: monitor setup has already been
/// persisted and must survive an aborted validation flow.
pub fn enable_validation(
    term: &mut dyn Terminal,
    project: &Project,
    store: &mut dyn SettingsStore,
) -> Result<(), SetupError> {
    if !term.confirm(prompts::VALIDATION_ENABLE)? {
        return Ok(());
    }
    let Some(backend) = select_backend(term)? else {
        return Ok(());
    };
    let candidates = match find_schema_candidates(project, store, backend) {
        Ok(candidates) => candidates,
        Err(DiscoveryError::BackendNotInstalled(plugin)) => {
            term.echo("");
            term.echo(&prompts::module_error(plugin).red().on_white().to_string());
            return Ok(());
        }
        Err(err) => return Err(SetupError::Discovery(err)),
    };
    if candidates.is_empty() {
        term.echo(prompts::NO_SCHEMAS);
        return Ok(());
    }
    let accepted = select_schemas(term, candidates)?;
    if accepted.is_empty() {
        term.echo(prompts::NO_ITEMS_ADDED);
        return Ok(());
    }

    let mut lines = vec![format_schema_setting(backend, &accepted)];
    let pipeline_configured = store
        .get(PIPELINE_SETTING)
        .map(|value| is_truthy_value(&value))
        .unwrap_or(false);
    if !pipeline_configured {
        lines.push(PIPELINE_LINE.to_string());
    }
    store.append_lines(&lines)?;
    term.echo(prompts::VALIDATION_RESPONSE);
    Ok(())
}

/// Numbered pick of one of the two validation backends, with the usual
/// retry-or-abort protocol on invalid input.
pub fn select_backend(term: &mut dyn Terminal) -> Result<Option<ValidationBackend>, SetupError> {
    loop {
        let names: Vec<&str> = VALIDATION_BACKENDS
            .iter()
            .map(|backend| backend.plugin_name())
            .collect();
        let raw = term.prompt(&prompts::backend_question(&render_numbered(&names)))?;
        if let Some(index) = parse_selection(&raw, VALIDATION_BACKENDS.len()) {
            return Ok(Some(VALIDATION_BACKENDS[index]));
        }
        if !term.confirm(prompts::INVALID_BACKEND)? {
            return Ok(None);
        }
    }
}

/// One selection session over the discovered candidates. A chosen candidate
/// moves from remaining to accepted and never reappears; after a failed
/// parse the list is re-rendered from the current remaining state, which may
/// already reflect earlier removals.
pub fn select_schemas(
    term: &mut dyn Terminal,
    candidates: Vec<SchemaCandidate>,
) -> Result<Vec<SchemaCandidate>, SetupError> {
    let mut remaining = candidates;
    let mut accepted = Vec::new();
    while !remaining.is_empty() {
        let names: Vec<&str> = remaining
            .iter()
            .map(|candidate| candidate.name.as_str())
            .collect();
        let raw = term.prompt(&prompts::schema_question(&render_numbered(&names)))?;
        match parse_selection(&raw, remaining.len()) {
            Some(index) => {
                accepted.push(remaining.remove(index));
                if remaining.is_empty() {
                    break;
                }
                if !term.confirm(prompts::SCHEMA_LIST_CONFIRM)? {
                    break;
                }
            }
            None => {
                if !term.confirm(prompts::SCHEMA_LIST_ERROR)? {
                    break;
                }
            }
        }
    }
    Ok(accepted)
}

/// `[1] first\n[2] second\n...` for the current list order.
fn render_numbered(names: &[&str]) -> String {
    names
        .iter()
        .enumerate()
        .map(|(index, name)| format!("[{}] {name}", index + 1))
        .collect::<Vec<_>>()
        .join("\n")
}

/// 1-based selection into a list of `len` items, as a 0-based index.
fn parse_selection(raw: &str, len: usize) -> Option<usize> {
    let picked: usize = raw.trim().parse().ok()?;
    (1..=len).contains(&picked).then(|| picked - 1)
}

pub fn format_schema_setting(backend: ValidationBackend, accepted: &[SchemaCandidate]) -> String {
    let parts: Vec<String> = accepted
        .iter()
        .map(|candidate| format!("{:?}: {:?}", candidate.name, candidate.path))
        .collect();
    format!("{} = {{{}}}", backend.setting(), parts.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbered_rendering_is_one_based_in_list_order() {
        assert_eq!(
            render_numbered(&["alpha", "beta"]),
            "[1] alpha\n[2] beta"
        );
    }

    #[test]
    fn selection_parsing_rejects_out_of_range_and_garbage() {
        assert_eq!(parse_selection("1", 2), Some(0));
        assert_eq!(parse_selection(" 2 ", 2), Some(1));
        assert_eq!(parse_selection("0", 2), None);
        assert_eq!(parse_selection("3", 2), None);
        assert_eq!(parse_selection("-10", 2), None);
        assert_eq!(parse_selection("first", 2), None);
    }

    #[test]
    fn schema_setting_line_is_a_dictionary_literal() {
        let accepted = vec![
            SchemaCandidate {
                name: "item".to_string(),
                path: "/p/item.json".to_string(),
            },
            SchemaCandidate {
                name: "page".to_string(),
                path: "/p/page.json".to_string(),
            },
        ];
        assert_eq!(
            format_schema_setting(ValidationBackend::JsonSchema, &accepted),
            "CRAWLMON_VALIDATION_SCHEMAS = {\"item\": \"/p/item.json\", \"page\": \"/p/page.json\"}"
        );
    }
}
