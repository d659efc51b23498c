//! The prompt/validate/retry loop and the per-monitor collection pass.

use super::input::{
    format_setting, is_valid, parse_count, parse_list, parse_named_counts, SettingValue,
};
use super::prompts;
use super::terminal::Terminal;
use super::SetupError;
use crate::config::SettingsStore;
use crate::monitors::{MonitorModule, SettingKind};

/// A monitor the user turned on, referenced the way the suite file needs it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnabledMonitor {
    pub path: String,
    pub id: String,
}

#[derive(Debug, Default)]
pub struct CollectedMonitors {
    pub enabled: Vec<EnabledMonitor>,
    pub settings: Vec<String>,
}

/// Prompts for one setting value of the given kind, re-prompting on invalid
/// input for as long as the user consents. `None` means the user gave up;
/// the caller simply emits no setting for this monitor.
///
/// There is deliberately no iteration cap: the loop is bounded by the user
/// declining the retry question, not by a counter.
pub fn collect_setting_value(
    term: &mut dyn Terminal,
    kind: SettingKind,
    description: &str,
) -> Result<Option<SettingValue>, SetupError> {
    loop {
        let primary = term.prompt(&prompts::setting_question(kind, description))?;
        // Dict settings buffer a second answer: the key list that shares the
        // numeric value just collected.
        let secondary = if kind == SettingKind::Dict {
            Some(term.prompt(&prompts::setting_question(SettingKind::List, description))?)
        } else {
            None
        };

        let accepted = match kind {
            SettingKind::Dict => {
                let keys = secondary.as_deref().unwrap_or("");
                if is_valid(&primary, SettingKind::Dict) && is_valid(keys, SettingKind::List) {
                    parse_named_counts(keys, &primary).map(SettingValue::NamedCounts)
                } else {
                    None
                }
            }
            SettingKind::List => {
                is_valid(&primary, kind).then(|| SettingValue::Names(parse_list(&primary)))
            }
            SettingKind::LimitLeast | SettingKind::LimitMost => {
                if is_valid(&primary, kind) {
                    parse_count(&primary).map(SettingValue::Count)
                } else {
                    None
                }
            }
        };

        if let Some(value) = accepted {
            return Ok(Some(value));
        }
        if !term.confirm(prompts::SETTING_ERROR)? {
            return Ok(None);
        }
    }
}

/// Walks the monitor registry in order, asking per monitor whether to enable
/// it and collecting its setting. A monitor whose setting key is already
/// configured is still enabled but skipped for input, with a notice.
pub fn collect_monitors(
    term: &mut dyn Terminal,
    store: &dyn SettingsStore,
    modules: &[MonitorModule],
) -> Result<CollectedMonitors, SetupError> {
    let mut collected = CollectedMonitors::default();
    for module in modules {
        for descriptor in &module.monitors {
            if !term.confirm(&prompts::enable_monitor(&descriptor.name))? {
                continue;
            }
            collected.enabled.push(EnabledMonitor {
                path: module.path.clone(),
                id: descriptor.id.clone(),
            });
            if store.has(&descriptor.setting) {
                term.echo(&prompts::setting_already_setup(&descriptor.name));
                continue;
            }
            if let Some(value) =
                collect_setting_value(term, descriptor.setting_type, &descriptor.description)?
            {
                collected.settings.push(format_setting(descriptor, &value));
            }
        }
    }
    Ok(collected)
}
