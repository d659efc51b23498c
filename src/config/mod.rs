mod error;
mod store;

pub use error::ConfigError;
pub use store::{is_truthy_value, FileSettingsStore, SettingsStore};

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const MANIFEST_FILE_NAME: &str = "crawler.yaml";
pub const SETTINGS_FILE_NAME: &str = "settings.cfg";
pub const SUITE_FILE_NAME: &str = "monitor_suite.yaml";

/// Project manifest at the root of a crawler project. Its presence marks
/// the directory as a project.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Manifest {
    pub bot_name: String,
    #[serde(default)]
    pub plugins: Vec<String>,
}

impl Manifest {
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let body = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let manifest: Manifest =
            serde_yaml::from_str(&body).map_err(|source| ConfigError::Parse {
                path: path.display().to_string(),
                source,
            })?;
        manifest.validate()?;
        Ok(manifest)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let bot_name = self.bot_name.trim();
        if bot_name.is_empty() {
            return Err(ConfigError::Manifest("bot_name must be non-empty".to_string()));
        }
        if bot_name.contains(['/', '\\']) {
            return Err(ConfigError::Manifest(
                "bot_name must not contain path separators".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct Project {
    pub root: PathBuf,
    pub manifest: Manifest,
}

impl Project {
    /// Walks up from `start` looking for the manifest file. `None` means the
    /// command is running outside a crawler project.
    pub fn locate_from(start: &Path) -> Option<PathBuf> {
        let mut current = Some(start);
        while let Some(dir) = current {
            if dir.join(MANIFEST_FILE_NAME).is_file() {
                return Some(dir.to_path_buf());
            }
            current = dir.parent();
        }
        None
    }

    pub fn open(root: &Path) -> Result<Self, ConfigError> {
        let manifest = Manifest::from_path(&root.join(MANIFEST_FILE_NAME))?;
        Ok(Self {
            root: root.to_path_buf(),
            manifest,
        })
    }

    pub fn bot_dir(&self) -> PathBuf {
        self.root.join(self.manifest.bot_name.trim())
    }

    pub fn settings_path(&self) -> PathBuf {
        self.bot_dir().join(SETTINGS_FILE_NAME)
    }

    pub fn suite_path(&self) -> PathBuf {
        self.bot_dir().join(SUITE_FILE_NAME)
    }

    pub fn has_plugin(&self, name: &str) -> bool {
        self.manifest
            .plugins
            .iter()
            .any(|plugin| plugin.trim() == name)
    }
}
