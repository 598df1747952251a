use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub db: DbConfig,
    #[serde(default)]
    pub registry: RegistryConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DbConfig {
    pub path: PathBuf,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct RegistryConfig {
    /// Override the detected hostname recorded as a file's origin.
    #[serde(default)]
    pub host: Option<String>,
    /// Create a unique index on (path, name, host) at init, so re-registering
    /// the same physical file fails with a constraint error instead of
    /// silently adding a second row.
    #[serde(default)]
    pub enforce_natural_key: bool,
}

pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: Config = toml::from_str(&content).with_context(|| "Failed to parse config file")?;

    if let Some(ref host) = config.registry.host {
        if host.is_empty() {
            anyhow::bail!("registry.host must be non-empty when set");
        }
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_minimal_config() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("dupereg.toml");
        fs::write(&path, "[db]\npath = \"./data/dupereg.sqlite\"\n").unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.db.path, PathBuf::from("./data/dupereg.sqlite"));
        assert_eq!(config.registry.host, None);
        assert!(!config.registry.enforce_natural_key);
    }

    #[test]
    fn test_load_full_config() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("dupereg.toml");
        fs::write(
            &path,
            "[db]\npath = \"/tmp/r.sqlite\"\n\n[registry]\nhost = \"alpha\"\nenforce_natural_key = true\n",
        )
        .unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.registry.host.as_deref(), Some("alpha"));
        assert!(config.registry.enforce_natural_key);
    }

    #[test]
    fn test_empty_host_override_rejected() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("dupereg.toml");
        fs::write(&path, "[db]\npath = \"/tmp/r.sqlite\"\n\n[registry]\nhost = \"\"\n").unwrap();
        assert!(load_config(&path).is_err());
    }
}
