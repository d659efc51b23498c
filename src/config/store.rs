use super::ConfigError;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

/// Read/append access to the target project's settings file. The wizard only
/// ever appends; it never rewrites or reorders existing lines.
pub trait SettingsStore {
    fn has(&self, key: &str) -> bool;
    fn get(&self, key: &str) -> Option<String>;
    fn append_lines(&mut self, lines: &[String]) -> Result<(), ConfigError>;
}

/// Treats `{}`, `[]`, `false` and blank values as unset. Used for settings
/// like `EXTENSIONS` where an empty collection means "nothing registered".
pub fn is_truthy_value(raw: &str) -> bool {
    let trimmed = raw.trim();
    !(trimmed.is_empty() || trimmed == "{}" || trimmed == "[]" || trimmed == "false")
}

/// Line-oriented settings file. Lookup scans `KEY = value` assignments; the
/// last assignment for a key wins, matching how the framework itself reads
/// the file.
pub struct FileSettingsStore {
    path: PathBuf,
}

impl FileSettingsStore {
    pub fn open(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    fn read_body(&self) -> String {
        fs::read_to_string(&self.path).unwrap_or_default()
    }

    fn lookup(&self, key: &str) -> Option<String> {
        let body = self.read_body();
        let mut found = None;
        for line in body.lines() {
            if line.trim_start().starts_with('#') {
                continue;
            }
            let Some((name, value)) = line.split_once('=') else {
                continue;
            };
            let name = name.trim_end_matches('+').trim();
            if name == key {
                found = Some(value.trim().to_string());
            }
        }
        found
    }
}

impl SettingsStore for FileSettingsStore {
    fn has(&self, key: &str) -> bool {
        self.lookup(key).is_some()
    }

    fn get(&self, key: &str) -> Option<String> {
        self.lookup(key)
    }

    fn append_lines(&mut self, lines: &[String]) -> Result<(), ConfigError> {
        if lines.is_empty() {
            return Ok(());
        }
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| ConfigError::CreateDir {
                path: parent.display().to_string(),
                source,
            })?;
        }
        let mut file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|source| ConfigError::Write {
                path: self.path.display().to_string(),
                source,
            })?;
        let body = format!("\n{}\n", lines.join("\n"));
        file.write_all(body.as_bytes())
            .map_err(|source| ConfigError::Write {
                path: self.path.display().to_string(),
                source,
            })
    }
}
