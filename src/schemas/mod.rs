//! Discovery of item schema candidates eligible for validation, one
//! collaborator per validation backend.

use crate::config::{Project, SettingsStore};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationBackend {
    JsonSchema,
    DataModel,
}

pub const VALIDATION_BACKENDS: [ValidationBackend; 2] =
    [ValidationBackend::JsonSchema, ValidationBackend::DataModel];

impl ValidationBackend {
    /// Plugin name the project manifest must list for this backend.
    pub fn plugin_name(self) -> &'static str {
        match self {
            Self::JsonSchema => "jsonschema",
            Self::DataModel => "datamodel",
        }
    }

    /// Settings key holding the enabled schemas for this backend.
    pub fn setting(self) -> &'static str {
        match self {
            Self::JsonSchema => "CRAWLMON_VALIDATION_SCHEMAS",
            Self::DataModel => "CRAWLMON_VALIDATION_MODELS",
        }
    }
}

impl std::fmt::Display for ValidationBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.plugin_name())
    }
}

/// A discovered schema eligible for enablement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaCandidate {
    pub name: String,
    pub path: String,
}

#[derive(Debug, thiserror::Error)]
pub enum DiscoveryError {
    #[error("the `{0}` plugin is not installed in this project")]
    BackendNotInstalled(&'static str),
    #[error("failed to scan {path}: {source}")]
    Scan {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Walks the bot directory for schema files the chosen backend understands.
/// Candidates already present in the backend's settings key are filtered
/// out; the result is name-ordered so repeated runs render the same list.
pub fn find_schema_candidates(
    project: &Project,
    store: &dyn SettingsStore,
    backend: ValidationBackend,
) -> Result<Vec<SchemaCandidate>, DiscoveryError> {
    if !project.has_plugin(backend.plugin_name()) {
        return Err(DiscoveryError::BackendNotInstalled(backend.plugin_name()));
    }
    let mut candidates = Vec::new();
    walk_schema_files(&project.bot_dir(), backend, &mut candidates)?;

    let configured = store.get(backend.setting()).unwrap_or_default();
    candidates.retain(|candidate| !configured.contains(&format!("{:?}", candidate.name)));
    candidates.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(candidates)
}

fn walk_schema_files(
    dir: &Path,
    backend: ValidationBackend,
    out: &mut Vec<SchemaCandidate>,
) -> Result<(), DiscoveryError> {
    let entries = fs::read_dir(dir).map_err(|source| DiscoveryError::Scan {
        path: dir.display().to_string(),
        source,
    })?;
    for entry in entries {
        let entry = entry.map_err(|source| DiscoveryError::Scan {
            path: dir.display().to_string(),
            source,
        })?;
        let path = entry.path();
        if path.is_dir() {
            walk_schema_files(&path, backend, out)?;
            continue;
        }
        if let Some(name) = candidate_name(&path, backend) {
            out.push(SchemaCandidate {
                name,
                path: path.display().to_string(),
            });
        }
    }
    Ok(())
}

/// `Some(stem)` when the file belongs to the backend and actually parses.
/// Unreadable or malformed files are skipped, never fatal.
fn candidate_name(path: &Path, backend: ValidationBackend) -> Option<String> {
    let file_name = path.file_name()?.to_str()?;
    let stem = match backend {
        ValidationBackend::JsonSchema => file_name.strip_suffix(".json")?,
        ValidationBackend::DataModel => file_name.strip_suffix(".model.yaml")?,
    };
    if stem.is_empty() {
        return None;
    }
    let body = fs::read_to_string(path).ok()?;
    let parses = match backend {
        ValidationBackend::JsonSchema => serde_json::from_str::<serde_json::Value>(&body).is_ok(),
        ValidationBackend::DataModel => serde_yaml::from_str::<serde_yaml::Value>(&body).is_ok(),
    };
    parses.then(|| stem.to_string())
}
