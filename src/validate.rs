//! Admission validation for candidate records.
//!
//! Every check runs regardless of earlier failures, so one invocation
//! surfaces every problem with a file at once. The result is a value — the
//! validator keeps no state between calls.

use crate::models::FileRecord;

/// Registry column bounds.
pub const MAX_NAME_LEN: usize = 128;
pub const MAX_DIRECTORY_LEN: usize = 256;
pub const MAX_HOST_LEN: usize = 64;
/// Largest size the store's signed 64-bit column can hold.
pub const MAX_SIZE: u64 = i64::MAX as u64;
/// Hex length of a 256-bit digest.
pub const DIGEST_LEN: usize = 64;

/// Outcome of validating one candidate record.
///
/// `ok` reflects hard checks only; soft warnings (zero-size) appear in
/// `diagnostics` without affecting admission.
#[derive(Debug, Clone)]
pub struct Validation {
    pub ok: bool,
    pub diagnostics: Vec<String>,
}

pub fn validate(record: &FileRecord) -> Validation {
    let mut diagnostics = Vec::new();
    let mut ok = true;

    // Name: non-empty, bounded, no path separators. Bounds count characters,
    // not bytes, so multibyte names are not penalized.
    if record.name.is_empty() {
        diagnostics.push("File name is empty.".to_string());
        ok = false;
    }
    let name_chars = record.name.chars().count();
    if name_chars > MAX_NAME_LEN {
        diagnostics.push(format!(
            "File name {} has {} characters, but the registry limit is {}.",
            record.name, name_chars, MAX_NAME_LEN
        ));
        ok = false;
    }
    if record.name.contains('/') {
        diagnostics.push(format!(
            "File name {} contains a forward slash, which would be confused with a path.",
            record.name
        ));
        ok = false;
    }
    if record.name.contains('\\') {
        diagnostics.push(format!(
            "File name {} contains a back slash, which would be confused with a path.",
            record.name
        ));
        ok = false;
    }

    // Directory: non-empty, bounded, must exist locally.
    if record.directory.is_empty() {
        diagnostics.push("File directory is empty.".to_string());
        ok = false;
    } else if !std::path::Path::new(&record.directory).exists() {
        diagnostics.push(format!(
            "File directory {} does not exist.",
            record.directory
        ));
        ok = false;
    }
    let directory_chars = record.directory.chars().count();
    if directory_chars > MAX_DIRECTORY_LEN {
        diagnostics.push(format!(
            "File directory {} has {} characters, but the registry limit is {}.",
            record.directory, directory_chars, MAX_DIRECTORY_LEN
        ));
        ok = false;
    }

    // Size: bounded above by the store's integer range. Negative sizes are
    // unrepresentable here; zero is admitted with a warning.
    if record.size > MAX_SIZE {
        diagnostics.push(format!(
            "File size {} will not fit in the registry's 64-bit integer column.",
            record.size
        ));
        ok = false;
    }
    if record.size == 0 {
        diagnostics.push(
            "File is empty; a size of zero matches every other empty file in the registry."
                .to_string(),
        );
    }

    // Origin host: non-empty, bounded.
    if record.host.is_empty() {
        diagnostics.push("Origin host is empty.".to_string());
        ok = false;
    }
    let host_chars = record.host.chars().count();
    if host_chars > MAX_HOST_LEN {
        diagnostics.push(format!(
            "Origin host {} has {} characters, but the registry limit is {}.",
            record.host, host_chars, MAX_HOST_LEN
        ));
        ok = false;
    }

    // Digest: exact length, lowercase hex.
    if record.sha256.len() != DIGEST_LEN {
        diagnostics.push(format!(
            "Digest {} has {} characters, but a SHA-256 hex digest has exactly {}.",
            record.sha256,
            record.sha256.len(),
            DIGEST_LEN
        ));
        ok = false;
    } else if !record
        .sha256
        .chars()
        .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase())
    {
        diagnostics.push(format!(
            "Digest {} contains characters outside lowercase hex.",
            record.sha256
        ));
        ok = false;
    }

    Validation { ok, diagnostics }
}
