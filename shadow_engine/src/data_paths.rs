//! Where the engine looks for files on disk.
use std::env;
use std::path::{Path, PathBuf};

/// Environment variable that names a config file explicitly.
pub const CONFIG_ENV: &str = "SHADOW_CONFIG";
pub const CONFIG_FILE: &str = "shadow.toml";

/// Candidate config locations in priority order.
pub fn config_candidates() -> Vec<PathBuf> {
    let mut candidates = Vec::new();
    if let Some(explicit) = env::var_os(CONFIG_ENV) {
        candidates.push(PathBuf::from(explicit));
    }
    candidates.push(PathBuf::from(CONFIG_FILE));
    candidates.push(Path::new("shadow_engine/data").join(CONFIG_FILE));
    if let Some(dir) = dirs::config_dir() {
        candidates.push(dir.join("shadow").join(CONFIG_FILE));
    }
    candidates
}

/// The first config file that actually exists, if any.
pub fn config_path() -> Option<PathBuf> {
    first_existing(config_candidates())
}

fn first_existing(candidates: impl IntoIterator<Item = PathBuf>) -> Option<PathBuf> {
    candidates.into_iter().find(|candidate| candidate.is_file())
}

/// Location of the line-editor history file.
pub fn history_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join("shadow_engine").join("history.txt"))
}
