//! Validation and parsing of raw prompt answers, and formatting of the
//! accepted value into a settings line.

use crate::monitors::{MonitorDescriptor, SettingKind};
use std::collections::BTreeMap;

/// Typed value collected for one monitor setting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingValue {
    Count(u64),
    Names(Vec<String>),
    NamedCounts(BTreeMap<String, u64>),
}

/// Whether a raw answer matches the expected shape for `kind`. Numeric kinds
/// (including the dict value) require a base-10 integer strictly greater
/// than zero; the list kind only requires a non-blank answer. Never panics.
pub fn is_valid(raw: &str, kind: SettingKind) -> bool {
    match kind {
        SettingKind::List => !raw.trim().is_empty(),
        SettingKind::LimitLeast | SettingKind::LimitMost | SettingKind::Dict => {
            matches!(raw.trim().parse::<i64>(), Ok(value) if value > 0)
        }
    }
}

pub fn parse_count(raw: &str) -> Option<u64> {
    raw.trim().parse().ok()
}

/// Splits on commas and trims each element. Order and duplicates are
/// preserved; only the whole answer was validated, not each element.
pub fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',').map(|item| item.trim().to_string()).collect()
}

/// One shared count for every key in the comma-list; duplicate keys collapse.
pub fn parse_named_counts(keys: &str, value: &str) -> Option<BTreeMap<String, u64>> {
    let value = parse_count(value)?;
    Some(
        parse_list(keys)
            .into_iter()
            .map(|key| (key, value))
            .collect(),
    )
}

pub fn render_value(value: &SettingValue) -> String {
    match value {
        SettingValue::Count(count) => count.to_string(),
        SettingValue::Names(items) => {
            let parts: Vec<String> = items.iter().map(|item| format!("{item:?}")).collect();
            format!("[{}]", parts.join(", "))
        }
        SettingValue::NamedCounts(map) => {
            let parts: Vec<String> = map
                .iter()
                .map(|(key, count)| format!("{key:?}: {count}"))
                .collect();
            format!("{{{}}}", parts.join(", "))
        }
    }
}

/// Fills the descriptor's `{}` slot with the rendered value, producing the
/// line appended to the settings file.
pub fn format_setting(descriptor: &MonitorDescriptor, value: &SettingValue) -> String {
    descriptor
        .setting_template
        .replacen("{}", &render_value(value), 1)
}
