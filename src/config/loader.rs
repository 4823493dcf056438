use anyhow::{Context, Result};
use std::path::Path;

use super::types::GameConfig;

pub fn load_config(path: &Path) -> Result<GameConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let config: GameConfig = toml::from_str(&content)
        .with_context(|| format!("parsing config {}", path.display()))?;
    config
        .validate()
        .with_context(|| format!("invalid config {}", path.display()))?;
    Ok(config)
}

/// Like [`load_config`], but a missing file yields the built-in defaults.
pub fn load_or_default(path: &Path) -> Result<GameConfig> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(GameConfig::default());
    }
    load_config(path)
}
