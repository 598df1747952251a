//! Core data models for the duplicate-file registry.
//!
//! A [`FileRecord`] is the candidate built from a live filesystem path; it
//! only becomes a registry row after passing validation. A
//! [`RegisteredCopy`] is what identity lookup returns for content that has
//! been seen before.

use std::path::{Path, PathBuf};

/// Candidate record describing one physical file, built per invocation.
///
/// Field bounds mirror the registry schema: `name` ≤ 128 chars, `directory`
/// ≤ 256, `host` ≤ 64, `size` within the store's signed 64-bit range,
/// `sha256` exactly 64 lowercase hex chars. Bounds are enforced by the
/// validator, not here.
#[derive(Debug, Clone)]
pub struct FileRecord {
    /// Basename only, no path separators.
    pub name: String,
    /// Canonical absolute path of the containing directory.
    pub directory: String,
    /// File size in bytes.
    pub size: u64,
    /// Hostname of the machine that observed the file.
    pub host: String,
    /// Filesystem creation time, `YYYY-MM-DD HH:MM:SS` local.
    pub created: String,
    /// Filesystem modification time, `YYYY-MM-DD HH:MM:SS` local.
    pub modified: String,
    /// SHA-256 of the full byte stream, lowercase hex.
    pub sha256: String,
}

impl FileRecord {
    /// Full path of the file this record describes.
    pub fn full_path(&self) -> PathBuf {
        Path::new(&self.directory).join(&self.name)
    }
}

/// One previously registered physical copy, as returned by identity lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisteredCopy {
    pub host: String,
    pub directory: String,
    pub name: String,
}

impl RegisteredCopy {
    pub fn full_path(&self) -> PathBuf {
        Path::new(&self.directory).join(&self.name)
    }
}
