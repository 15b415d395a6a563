//! Initialize the configuration directory: create `~/.ticketbot` and a default `config.json`.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::config::Config;

/// Create the config directory and a default config file if they do not exist.
/// An existing config file is left untouched. Returns the config directory.
pub fn init_config_dir(config_path: &Path) -> Result<PathBuf> {
    let config_dir = config_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(config_dir)
        .with_context(|| format!("creating config directory {}", config_dir.display()))?;

    if config_path.exists() {
        log::debug!("config already exists at {}, skipping", config_path.display());
    } else {
        let default_config = serde_json::to_string_pretty(&Config::default())
            .context("serializing default config")?;
        std::fs::write(config_path, default_config)
            .with_context(|| format!("writing default config to {}", config_path.display()))?;
        log::info!("created default config at {}", config_path.display());
    }

    Ok(config_dir.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::load_config;

    fn temp_dir(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("ticketbot-init-{}-{}", name, std::process::id()))
    }

    #[test]
    fn writes_loadable_default_config() {
        let dir = temp_dir("fresh");
        let path = dir.join("config.json");
        let _ = std::fs::remove_dir_all(&dir);

        let created = init_config_dir(&path).unwrap();
        assert_eq!(created, dir);
        let (config, _) = load_config(Some(path)).unwrap();
        assert_eq!(config.gateway.port, 5001);
        assert_eq!(config.ticket_sink.list_name, "To Do");

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn keeps_existing_config() {
        let dir = temp_dir("existing");
        let path = dir.join("config.json");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(&path, r#"{"gateway":{"port":7000}}"#).unwrap();

        init_config_dir(&path).unwrap();
        let (config, _) = load_config(Some(path)).unwrap();
        assert_eq!(config.gateway.port, 7000);

        let _ = std::fs::remove_dir_all(&dir);
    }
}
