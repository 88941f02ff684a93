//! Input loading. `text` implements the canonical line-based format from
//! the external-interfaces section; `json` loads/saves a full `Instance`
//! snapshot, in the teacher's `load_json_file` idiom.

pub mod json;
pub mod text;

pub use json::{load_instance_snapshot, save_instance_snapshot};
pub use text::load_instance_from_dir;

use crate::error::Result;
use crate::types::SolverConfig;
use std::fs;
use std::path::Path;

/// Loads `config.toml` next to the instance data, or falls back to
/// defaults — mirrors the teacher's `load_config_or_default`.
pub fn load_config_or_default(path: &Path) -> SolverConfig {
    if path.exists() {
        match fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).unwrap_or_default(),
            Err(_) => SolverConfig::default(),
        }
    } else {
        SolverConfig::default()
    }
}

pub(crate) fn read_lines(path: &Path) -> Result<Vec<String>> {
    use crate::error::SchedulerError;
    let content = fs::read_to_string(path).map_err(|e| SchedulerError::FileRead {
        path: path.display().to_string(),
        source: e,
    })?;
    Ok(content
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
        .map(str::to_string)
        .collect())
}
