use std::path::{Path, PathBuf};

use crate::error::ConfigError;

use super::types::AppConfig;

pub const CONFIG_FILE_NAME: &str = "topicguard.toml";

pub const ENV_MATCH_MODE: &str = "TOPICGUARD_MATCH_MODE";
pub const ENV_TOKENIZER: &str = "TOPICGUARD_TOKENIZER";

/// `./topicguard.toml`, then `~/.topicguard/config.toml`.
pub fn default_config_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(CONFIG_FILE_NAME)];
    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".topicguard").join("config.toml"));
    }
    paths
}

/// First config file found in [`default_config_paths`], or defaults; then env overrides.
pub fn load_default() -> Result<AppConfig, ConfigError> {
    let mut cfg = match default_config_paths().into_iter().find(|p| p.exists()) {
        Some(path) => read_file(&path)?,
        None => AppConfig::default(),
    };
    apply_env_overrides(&mut cfg, |key| std::env::var(key).ok())?;
    cfg.validate()?;
    Ok(cfg)
}

/// Loads an explicit config file. `~` is expanded; a missing file is an error.
pub fn load_from(path: &str) -> Result<AppConfig, ConfigError> {
    let expanded = PathBuf::from(shellexpand::tilde(path).into_owned());
    if !expanded.exists() {
        return Err(ConfigError::NotFound(expanded));
    }
    let mut cfg = read_file(&expanded)?;
    apply_env_overrides(&mut cfg, |key| std::env::var(key).ok())?;
    cfg.validate()?;
    Ok(cfg)
}

fn read_file(path: &Path) -> Result<AppConfig, ConfigError> {
    let s = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let cfg = toml::from_str::<AppConfig>(&s).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), "config loaded");
    Ok(cfg)
}

/// Blank values are ignored; unparseable ones are rejected.
pub fn apply_env_overrides<F>(cfg: &mut AppConfig, lookup: F) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(v) = lookup(ENV_MATCH_MODE) {
        if !v.trim().is_empty() {
            cfg.match_mode = v.parse().map_err(|_| ConfigError::EnvInvalid {
                key: ENV_MATCH_MODE.to_string(),
                value: v.clone(),
            })?;
        }
    }

    if let Some(v) = lookup(ENV_TOKENIZER) {
        if !v.trim().is_empty() {
            cfg.tokenizer = v.parse().map_err(|_| ConfigError::EnvInvalid {
                key: ENV_TOKENIZER.to_string(),
                value: v.clone(),
            })?;
        }
    }

    Ok(())
}
