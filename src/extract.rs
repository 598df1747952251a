//! Metadata extraction: filesystem path → candidate [`FileRecord`].
//!
//! The path is canonicalized before splitting, so two different relative
//! spellings of the same physical file always produce the same directory
//! string. Hashing runs last, after all cheap metadata is gathered, since it
//! dominates cost for large files.
//!
//! Callers must check that the path is a regular file first; the register
//! flow does that before touching the registry.

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use std::path::Path;
use std::time::SystemTime;

use crate::config::Config;
use crate::digest;
use crate::models::FileRecord;

pub fn extract(config: &Config, path: &Path) -> Result<FileRecord> {
    let canonical = path
        .canonicalize()
        .with_context(|| format!("failed to resolve {}", path.display()))?;

    let name = canonical
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    let directory = canonical
        .parent()
        .map(|p| p.to_string_lossy().to_string())
        .unwrap_or_default();

    let metadata = std::fs::metadata(&canonical)
        .with_context(|| format!("failed to stat {}", canonical.display()))?;
    let size = metadata.len();

    let modified_time = metadata
        .modified()
        .unwrap_or(SystemTime::UNIX_EPOCH);
    // Many Linux filesystems report no creation time; fall back to mtime.
    let created_time = metadata.created().unwrap_or(modified_time);

    let host = resolve_host(config)?;

    // Hash last: everything above is cheap, this is not.
    let sha256 = digest::digest_file(&canonical)?;

    Ok(FileRecord {
        name,
        directory,
        size,
        host,
        created: format_local(created_time),
        modified: format_local(modified_time),
        sha256,
    })
}

/// Origin host for new records: config override wins, otherwise the
/// machine's network hostname.
pub fn resolve_host(config: &Config) -> Result<String> {
    if let Some(ref host) = config.registry.host {
        return Ok(host.clone());
    }
    whoami::fallible::hostname().context("failed to determine local hostname")
}

fn format_local(t: SystemTime) -> String {
    DateTime::<Local>::from(t)
        .format("%Y-%m-%d %H:%M:%S")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn test_config(host: Option<&str>) -> Config {
        Config {
            db: crate::config::DbConfig {
                path: "unused.sqlite".into(),
            },
            registry: crate::config::RegistryConfig {
                host: host.map(String::from),
                enforce_natural_key: false,
            },
        }
    }

    #[test]
    fn test_extract_populates_record() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("notes.txt");
        fs::write(&path, b"some bytes").unwrap();

        let config = test_config(Some("alpha"));
        let record = extract(&config, &path).unwrap();

        assert_eq!(record.name, "notes.txt");
        assert_eq!(record.size, 10);
        assert_eq!(record.host, "alpha");
        assert_eq!(record.sha256.len(), 64);
        assert!(Path::new(&record.directory).is_absolute());
        assert!(Path::new(&record.directory).exists());
        // Fixed-format local timestamps.
        assert_eq!(record.created.len(), 19);
        assert_eq!(record.modified.len(), 19);
    }

    #[test]
    fn test_relative_spellings_yield_same_directory() {
        let tmp = TempDir::new().unwrap();
        let sub = tmp.path().join("sub");
        fs::create_dir(&sub).unwrap();
        let path = sub.join("file.txt");
        fs::write(&path, b"x").unwrap();

        let config = test_config(Some("alpha"));
        let direct = extract(&config, &path).unwrap();
        let dotted = extract(&config, &sub.join(".").join("file.txt")).unwrap();

        assert_eq!(direct.directory, dotted.directory);
        assert_eq!(direct.name, dotted.name);
    }

    #[test]
    fn test_detected_host_nonempty_without_override() {
        let config = test_config(None);
        let host = resolve_host(&config).unwrap();
        assert!(!host.is_empty());
    }

    #[test]
    fn test_extract_missing_file_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let config = test_config(Some("alpha"));
        let err = extract(&config, &tmp.path().join("gone.txt")).unwrap_err();
        assert!(err.to_string().contains("failed to resolve"));
    }
}
