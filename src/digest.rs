//! Streaming SHA-256 content digest.
//!
//! The digest is the sole basis of content identity, so it is computed over
//! the full byte stream in bounded chunks — memory use stays flat no matter
//! how large the file is. Output is the 64-character lowercase hex form.

use anyhow::{Context, Result};
use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Chunk size for streaming reads.
pub const DIGEST_CHUNK_BYTES: usize = 1024 * 1024;

/// Compute the SHA-256 hex digest of a file's contents.
pub fn digest_file(path: &Path) -> Result<String> {
    digest_file_chunked(path, DIGEST_CHUNK_BYTES)
}

/// Same as [`digest_file`] with an explicit chunk size. The result is
/// identical for any chunk size > 0; the parameter exists so tests can pin
/// that down.
pub fn digest_file_chunked(path: &Path, chunk_bytes: usize) -> Result<String> {
    debug_assert!(chunk_bytes > 0, "chunk size must be > 0");

    let mut file = File::open(path)
        .with_context(|| format!("failed to open {} for hashing", path.display()))?;

    let mut hasher = Sha256::new();
    let mut buf = vec![0u8; chunk_bytes];
    loop {
        let n = file
            .read(&mut buf)
            .with_context(|| format!("read failed while hashing {}", path.display()))?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }

    Ok(format!("{:x}", hasher.finalize()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    /// SHA-256 of the empty byte stream.
    const EMPTY_SHA256: &str = "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";

    #[test]
    fn test_empty_file_digest() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("empty.txt");
        fs::write(&path, b"").unwrap();
        assert_eq!(digest_file(&path).unwrap(), EMPTY_SHA256);
    }

    #[test]
    fn test_known_digest() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("abc.bin");
        fs::write(&path, b"abc").unwrap();
        assert_eq!(
            digest_file(&path).unwrap(),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_chunking_invariance() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("data.bin");
        // Not a multiple of any of the chunk sizes below.
        let data: Vec<u8> = (0..10_007).map(|i| (i % 251) as u8).collect();
        fs::write(&path, &data).unwrap();

        let reference = digest_file(&path).unwrap();
        for chunk in [1, 7, 256, 4096, 10_007, 1024 * 1024] {
            assert_eq!(
                digest_file_chunked(&path, chunk).unwrap(),
                reference,
                "digest changed with chunk size {}",
                chunk
            );
        }
    }

    #[test]
    fn test_output_is_lowercase_hex_64() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("x");
        fs::write(&path, b"hello").unwrap();
        let digest = digest_file(&path).unwrap();
        assert_eq!(digest.len(), 64);
        assert!(digest.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    #[should_panic(expected = "chunk size must be > 0")]
    fn test_zero_chunk_size_is_rejected() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("x");
        fs::write(&path, b"hello").unwrap();
        let _ = digest_file_chunked(&path, 0);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("vanished.txt");
        let err = digest_file(&path).unwrap_err();
        assert!(err.to_string().contains("failed to open"));
    }
}
