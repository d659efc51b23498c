use crate::config::ConfigError;
use serde::Deserialize;

/// Shape of a monitor's configurable value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SettingKind {
    LimitLeast,
    LimitMost,
    List,
    Dict,
}

impl SettingKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::LimitLeast => "limit_least",
            Self::LimitMost => "limit_most",
            Self::List => "list",
            Self::Dict => "dict",
        }
    }
}

impl std::fmt::Display for SettingKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct MonitorDescriptor {
    /// Suite entry name, unique within its module.
    pub id: String,
    /// Display name used in prompts.
    pub name: String,
    /// Settings key this monitor reads.
    pub setting: String,
    /// Settings line template with a `{}` slot for the collected value.
    pub setting_template: String,
    pub setting_type: SettingKind,
    /// Short plural phrase interpolated into the prompt questions.
    pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MonitorModule {
    /// Framework path the suite file references for this module's monitors.
    pub path: String,
    pub monitors: Vec<MonitorDescriptor>,
}

const MONITOR_REGISTRY: &str = include_str!("assets/monitors.yaml");

/// Ordered collection of the built-in monitor modules shipped with the
/// add-on. Prompt order follows registry order.
pub fn find_monitor_modules() -> Result<Vec<MonitorModule>, ConfigError> {
    serde_yaml::from_str(MONITOR_REGISTRY).map_err(|source| ConfigError::Parse {
        path: "builtin monitor registry".to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_registry_parses_and_covers_every_setting_kind() {
        let modules = find_monitor_modules().expect("registry parses");
        assert!(!modules.is_empty());

        let descriptors: Vec<&MonitorDescriptor> = modules
            .iter()
            .flat_map(|module| module.monitors.iter())
            .collect();
        for kind in [
            SettingKind::LimitLeast,
            SettingKind::LimitMost,
            SettingKind::List,
            SettingKind::Dict,
        ] {
            assert!(
                descriptors.iter().any(|d| d.setting_type == kind),
                "registry is missing a {kind} monitor"
            );
        }
        for descriptor in &descriptors {
            assert!(
                descriptor.setting_template.contains("{}"),
                "template for {} has no value slot",
                descriptor.id
            );
            assert!(descriptor.setting_template.starts_with(&descriptor.setting));
        }
    }
}
