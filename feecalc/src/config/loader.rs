// src/config/loader.rs
use crate::config::{CONFIG_FILE_NAME, Config};
use anyhow::{Context as _, Result};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Finds the nearest `.feecalc.toml`, starting in `dir` and walking up
/// through its parents.
#[inline]
#[must_use]
pub fn find_config_file(dir: &Path) -> Option<PathBuf> {
    let mut current_dir = dir.to_path_buf();
    let mut visited = HashSet::new();

    while !visited.contains(&current_dir) {
        visited.insert(current_dir.clone());

        let config_file = current_dir.join(CONFIG_FILE_NAME);
        if config_file.is_file() {
            return Some(config_file);
        }

        match current_dir.parent() {
            Some(parent) => current_dir = parent.to_path_buf(),
            None => break,
        }
    }

    None
}

/// Loads the nearest config file above `dir`, or the defaults if there is
/// none.
///
/// # Errors
///
/// This function may return an error if:
/// * A config file exists but cannot be read
/// * The file is not valid TOML or has unknown keys
#[inline]
pub fn load_config(dir: &Path) -> Result<Config> {
    match find_config_file(dir) {
        Some(path) => load_config_file(&path),
        None => {
            tracing::debug!(dir = %dir.display(), "no config file found, using defaults");
            Ok(Config::default())
        }
    }
}

/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_config_file(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
    tracing::info!(path = %path.display(), "loaded config");
    Ok(config)
}
