use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

pub const STATE_DIR: &str = ".crawlmon";

pub fn setup_log_path(project_root: &Path) -> PathBuf {
    project_root.join(STATE_DIR).join("logs/setup.log")
}

pub fn append_setup_log_line(project_root: &Path, line: &str) -> std::io::Result<()> {
    let path = setup_log_path(project_root);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)?;
    writeln!(file, "{line}")
}
