//! Generation of the monitor suite file from the embedded template.

use crate::config::{ConfigError, Project};
use crate::setup::collect::EnabledMonitor;
use crate::shared::fs_atomic::atomic_write_file;
use std::fs;
use std::path::PathBuf;

const SUITE_TEMPLATE: &str = include_str!("assets/monitor_suite.yaml.tmpl");

/// Renders `{{token}}` placeholders through `resolve`. Unknown tokens are
/// the resolver's call; unclosed or empty placeholders fail outright.
pub fn render_template_with_placeholders<F>(
    template: &str,
    mut resolve: F,
) -> Result<String, String>
where
    F: FnMut(&str) -> Result<String, String>,
{
    let mut rendered = String::new();
    let mut cursor = template;

    while let Some(start) = cursor.find("{{") {
        rendered.push_str(&cursor[..start]);
        let after_open = &cursor[start + 2..];
        let Some(close_offset) = after_open.find("}}") else {
            return Err("unclosed placeholder in template".to_string());
        };
        let token = after_open[..close_offset].trim();
        if token.is_empty() {
            return Err("empty placeholder in template".to_string());
        }
        rendered.push_str(&resolve(token)?);
        cursor = &after_open[close_offset + 2..];
    }

    rendered.push_str(cursor);
    Ok(rendered)
}

/// One suite entry per enabled monitor, indented for the template's
/// `monitors:` block.
pub fn suite_entries(enabled: &[EnabledMonitor]) -> String {
    enabled
        .iter()
        .map(|monitor| format!("    - {}.{}", monitor.path, monitor.id))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_monitor_suite(
    project: &Project,
    enabled: &[EnabledMonitor],
) -> Result<String, ConfigError> {
    render_template_with_placeholders(SUITE_TEMPLATE, |token| match token {
        "bot_name" => Ok(project.manifest.bot_name.trim().to_string()),
        "monitors" => Ok(suite_entries(enabled)),
        _ => Err(format!("unsupported suite placeholder `{{{{{token}}}}}`")),
    })
    .map_err(ConfigError::Template)
}

/// Rewrites the generated suite file from the template. The file is fully
/// regenerated on every run, unlike the settings file which is append-only.
pub fn write_monitor_suite(
    project: &Project,
    enabled: &[EnabledMonitor],
) -> Result<PathBuf, ConfigError> {
    let body = render_monitor_suite(project, enabled)?;
    let path = project.suite_path();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| ConfigError::CreateDir {
            path: parent.display().to_string(),
            source,
        })?;
    }
    atomic_write_file(&path, body.as_bytes()).map_err(|source| ConfigError::Write {
        path: path.display().to_string(),
        source,
    })?;
    Ok(path)
}
