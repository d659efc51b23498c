use crate::cli::{help_text, parse_cli_verb, CliVerb};
use crate::config::{is_truthy_value, FileSettingsStore, Project, SettingsStore, SUITE_FILE_NAME};
use crate::monitors::find_monitor_modules;
use crate::setup::collect::collect_monitors;
use crate::setup::prompts;
use crate::setup::terminal::{ScriptedTerminal, StdTerminal, Terminal};
use crate::setup::validation::enable_validation;
use crate::setup::SetupError;
use crate::shared::logging::append_setup_log_line;
use crate::templates::write_monitor_suite;
use std::path::Path;

pub const ENABLED_SETTING: &str = "CRAWLMON_ENABLED";
pub const EXTENSIONS_SETTING: &str = "EXTENSIONS";

const GENERATED_COMMENT: &str = "# Settings generated by the crawlmon CLI";
const ENABLED_LINE: &str = "CRAWLMON_ENABLED = true";
const EXTENSIONS_LINE: &str = "EXTENSIONS = {\"crawlmon.extensions.Monitoring\": 500}";
const EXTENSIONS_MERGE_LINE: &str = "EXTENSIONS += {\"crawlmon.extensions.Monitoring\": 500}";

pub fn run_cli(args: Vec<String>) -> Result<String, String> {
    let Some(verb_raw) = args.first() else {
        return Ok(help_text());
    };
    match parse_cli_verb(verb_raw) {
        CliVerb::Setup => cmd_setup(),
        CliVerb::Version => Ok(format!("crawlmon {}", env!("CARGO_PKG_VERSION"))),
        CliVerb::Unknown => Err(format!("unknown command `{verb_raw}`\n{}", help_text())),
    }
}

pub fn cmd_setup() -> Result<String, String> {
    let cwd = std::env::current_dir()
        .map_err(|err| format!("failed to resolve current directory: {err}"))?;
    let mut term = make_terminal();
    cmd_setup_in(&cwd, term.as_mut())
}

/// Setup with an explicit starting directory and terminal, so tests and the
/// scripted path share the interactive code exactly.
pub fn cmd_setup_in(start: &Path, term: &mut dyn Terminal) -> Result<String, String> {
    // Environment guard: outside a project the command reports and exits
    // cleanly without touching any file.
    let Some(root) = Project::locate_from(start) else {
        return Ok(prompts::PROJECT_ERROR.to_string());
    };
    let project = Project::open(&root).map_err(|err| err.to_string())?;
    let mut store = FileSettingsStore::open(project.settings_path());
    let suite_path = run_setup(&project, &mut store, term).map_err(|err| err.to_string())?;
    Ok(format!("monitor suite written to {}", suite_path.display()))
}

fn make_terminal() -> Box<dyn Terminal> {
    if let Ok(raw) = std::env::var("CRAWLMON_SETUP_SCRIPT") {
        return Box::new(ScriptedTerminal::from_script(&raw));
    }
    Box::new(StdTerminal)
}

fn run_setup(
    project: &Project,
    store: &mut FileSettingsStore,
    term: &mut dyn Terminal,
) -> Result<std::path::PathBuf, SetupError> {
    if store.has(ENABLED_SETTING) {
        term.echo(prompts::ALREADY_ENABLED);
    } else {
        store.append_lines(&base_monitor_settings(project, store))?;
        term.echo(prompts::ENABLED);
        let _ = append_setup_log_line(&project.root, "setup: monitoring enabled");
    }

    let modules = find_monitor_modules()?;
    let collected = collect_monitors(term, store, &modules)?;
    store.append_lines(&collected.settings)?;
    let suite_path = write_monitor_suite(project, &collected.enabled)?;
    let _ = append_setup_log_line(
        &project.root,
        &format!(
            "setup: enabled {} monitors, appended {} settings",
            collected.enabled.len(),
            collected.settings.len()
        ),
    );
    term.echo(prompts::MONITOR_RESPONSE);

    enable_validation(term, project, store)?;
    Ok(suite_path)
}

fn base_monitor_settings(project: &Project, store: &dyn SettingsStore) -> Vec<String> {
    let extensions_configured = store
        .get(EXTENSIONS_SETTING)
        .map(|value| is_truthy_value(&value))
        .unwrap_or(false);
    vec![
        GENERATED_COMMENT.to_string(),
        ENABLED_LINE.to_string(),
        format!(
            "CRAWLMON_MONITOR_SUITE = {:?}",
            format!("{}/{}", project.manifest.bot_name.trim(), SUITE_FILE_NAME)
        ),
        if extensions_configured {
            // Merge form: the project already registers extensions and an
            // appended plain assignment would shadow them.
            EXTENSIONS_MERGE_LINE.to_string()
        } else {
            EXTENSIONS_LINE.to_string()
        },
    ]
}
