use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Optional settings merged under CLI flags. The first existing file wins:
/// `$STRICTAPT_CONFIG`, `~/.config/strictapt/config.toml`,
/// `/etc/strictapt/config.toml`. A missing file is not an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct Config {
    pub loop_limit: Option<usize>,
    pub apt_get_options: Option<Vec<String>>,
    pub install_recommends: Option<bool>,
}

impl Config {
    pub(crate) fn load() -> Result<Self> {
        for path in candidate_paths() {
            if !path.exists() {
                continue;
            }
            let raw = fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            return Self::from_toml_str(&raw)
                .with_context(|| format!("failed to parse config: {}", path.display()));
        }
        Ok(Self::default())
    }

    pub(crate) fn from_toml_str(raw: &str) -> Result<Self> {
        Ok(toml::from_str(raw)?)
    }
}

fn candidate_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Ok(explicit) = std::env::var("STRICTAPT_CONFIG") {
        if !explicit.is_empty() {
            paths.push(PathBuf::from(explicit));
        }
    }
    if let Ok(home) = std::env::var("HOME") {
        paths.push(PathBuf::from(home).join(".config/strictapt/config.toml"));
    }
    paths.push(PathBuf::from("/etc/strictapt/config.toml"));
    paths
}
