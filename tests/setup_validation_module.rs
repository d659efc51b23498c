use crawlmon::config::{ConfigError, Manifest, Project, SettingsStore};
use crawlmon::schemas::{SchemaCandidate, ValidationBackend};
use crawlmon::setup::terminal::ScriptedTerminal;
use crawlmon::setup::validation::{
    enable_validation, select_backend, select_schemas, PIPELINE_LINE,
};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

#[derive(Default)]
struct MemStore {
    values: BTreeMap<String, String>,
    appended: Vec<String>,
}

impl SettingsStore for MemStore {
    fn has(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn append_lines(&mut self, lines: &[String]) -> Result<(), ConfigError> {
        self.appended.extend_from_slice(lines);
        Ok(())
    }
}

fn candidate(name: &str) -> SchemaCandidate {
    SchemaCandidate {
        name: name.to_string(),
        path: format!("/schemas/{name}.json"),
    }
}

fn project_at(root: &Path, plugins: &[&str]) -> Project {
    Project {
        root: root.to_path_buf(),
        manifest: Manifest {
            bot_name: "mybot".to_string(),
            plugins: plugins.iter().map(|p| p.to_string()).collect(),
        },
    }
}

#[test]
fn schemas_are_accepted_in_pick_order() {
    let mut term = ScriptedTerminal::new(["2", "y", "1"]);
    let accepted = select_schemas(&mut term, vec![candidate("alpha"), candidate("beta")])
        .expect("selection runs");
    assert_eq!(
        accepted,
        vec![candidate("beta"), candidate("alpha")],
        "second pick first, then the remaining one"
    );
}

#[test]
fn out_of_range_pick_then_declined_retry_returns_accepted_so_far() {
    let mut term = ScriptedTerminal::new(["5", "n"]);
    let accepted = select_schemas(&mut term, vec![candidate("alpha"), candidate("beta")])
        .expect("selection runs");
    assert!(accepted.is_empty());
    assert_eq!(term.prompts.len(), 1);
}

#[test]
fn failed_pick_rerenders_from_the_current_remaining_list() {
    // Remove beta first, then feed an invalid pick: the re-render must show
    // the already-shrunk list, not the original one.
    let mut term = ScriptedTerminal::new(["2", "y", "9", "y", "1", "n"]);
    let accepted = select_schemas(
        &mut term,
        vec![candidate("alpha"), candidate("beta"), candidate("gamma")],
    )
    .expect("selection runs");

    assert_eq!(accepted[0], candidate("beta"));
    assert_eq!(accepted[1], candidate("alpha"));
    let shrunk_listing = "[1] alpha\n[2] gamma";
    assert!(term.prompts[1].contains(shrunk_listing));
    assert!(
        term.prompts[2].contains(shrunk_listing),
        "re-render after the failed pick reflects the current remaining list"
    );
}

#[test]
fn declining_more_schemas_stops_the_session() {
    let mut term = ScriptedTerminal::new(["1", "n"]);
    let accepted = select_schemas(&mut term, vec![candidate("alpha"), candidate("beta")])
        .expect("selection runs");
    assert_eq!(accepted, vec![candidate("alpha")]);
}

#[test]
fn exhausting_the_candidates_ends_without_a_continue_question() {
    let mut term = ScriptedTerminal::new(["1"]);
    let accepted =
        select_schemas(&mut term, vec![candidate("alpha")]).expect("selection runs");
    assert_eq!(accepted, vec![candidate("alpha")]);
    assert!(term.confirms.is_empty());
}

#[test]
fn backend_selection_retries_on_invalid_pick() {
    let mut term = ScriptedTerminal::new(["0", "y", "2"]);
    let backend = select_backend(&mut term).expect("selection runs");
    assert_eq!(backend, Some(ValidationBackend::DataModel));
    assert_eq!(term.prompts.len(), 2);
}

#[test]
fn backend_selection_aborts_when_retry_is_declined() {
    let mut term = ScriptedTerminal::new(["first", "n"]);
    let backend = select_backend(&mut term).expect("selection runs");
    assert_eq!(backend, None);
}

#[test]
fn validation_flow_is_skipped_when_declined_upfront() {
    let dir = tempdir().expect("tempdir");
    let project = project_at(dir.path(), &["jsonschema"]);
    let mut store = MemStore::default();
    let mut term = ScriptedTerminal::new(["n"]);

    enable_validation(&mut term, &project, &mut store).expect("flow runs");

    assert!(store.appended.is_empty());
    assert!(term.prompts.is_empty());
}

#[test]
fn missing_backend_plugin_surfaces_an_install_notice() {
    let dir = tempdir().expect("tempdir");
    let project = project_at(dir.path(), &[]);
    let mut store = MemStore::default();
    let mut term = ScriptedTerminal::new(["y", "1"]);

    enable_validation(&mut term, &project, &mut store).expect("flow aborts gracefully");

    assert!(store.appended.is_empty());
    assert!(term
        .echoes
        .iter()
        .any(|echo| echo.contains("You need to install the jsonschema plugin")));
}

#[test]
fn empty_discovery_surfaces_the_no_schemas_notice() {
    let dir = tempdir().expect("tempdir");
    fs::create_dir_all(dir.path().join("mybot")).expect("bot dir");
    let project = project_at(dir.path(), &["jsonschema"]);
    let mut store = MemStore::default();
    let mut term = ScriptedTerminal::new(["y", "1"]);

    enable_validation(&mut term, &project, &mut store).expect("flow aborts gracefully");

    assert!(store.appended.is_empty());
    assert!(term
        .echoes
        .iter()
        .any(|echo| echo.contains("no available item validation schemas")));
}

#[test]
fn accepting_nothing_surfaces_the_no_items_notice() {
    let dir = tempdir().expect("tempdir");
    let bot_dir = dir.path().join("mybot");
    fs::create_dir_all(&bot_dir).expect("bot dir");
    fs::write(bot_dir.join("item.json"), "{\"type\": \"object\"}").expect("schema file");
    let project = project_at(dir.path(), &["jsonschema"]);
    let mut store = MemStore::default();
    let mut term = ScriptedTerminal::new(["y", "1", "9", "n"]);

    enable_validation(&mut term, &project, &mut store).expect("flow runs");

    assert!(store.appended.is_empty());
    assert!(term
        .echoes
        .iter()
        .any(|echo| echo.contains("No items added for validation.")));
}

#[test]
fn accepted_schemas_append_the_dictionary_line_and_the_pipeline_line() {
    let dir = tempdir().expect("tempdir");
    let bot_dir = dir.path().join("mybot");
    fs::create_dir_all(&bot_dir).expect("bot dir");
    fs::write(bot_dir.join("item.json"), "{\"type\": \"object\"}").expect("schema file");
    let project = project_at(dir.path(), &["jsonschema"]);
    let mut store = MemStore::default();
    let mut term = ScriptedTerminal::new(["y", "1", "1"]);

    enable_validation(&mut term, &project, &mut store).expect("flow runs");

    assert_eq!(store.appended.len(), 2);
    assert!(store.appended[0].starts_with("CRAWLMON_VALIDATION_SCHEMAS = {\"item\": "));
    assert_eq!(store.appended[1], PIPELINE_LINE);
    assert!(term
        .echoes
        .iter()
        .any(|echo| echo.contains("Item validation enabled successfully!")));
}

#[test]
fn pipeline_line_is_not_duplicated_when_already_configured() {
    let dir = tempdir().expect("tempdir");
    let bot_dir = dir.path().join("mybot");
    fs::create_dir_all(&bot_dir).expect("bot dir");
    fs::write(bot_dir.join("item.json"), "{\"type\": \"object\"}").expect("schema file");
    let project = project_at(dir.path(), &["jsonschema"]);
    let mut store = MemStore::default();
    store.values.insert(
        "ITEM_PIPELINES".to_string(),
        "{\"other.Pipeline\": 100}".to_string(),
    );
    let mut term = ScriptedTerminal::new(["y", "1", "1"]);

    enable_validation(&mut term, &project, &mut store).expect("flow runs");

    assert_eq!(store.appended.len(), 1);
    assert!(store.appended[0].starts_with("CRAWLMON_VALIDATION_SCHEMAS"));
}
