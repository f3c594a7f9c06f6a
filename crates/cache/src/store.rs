//! On-disk cache store

use crate::entry::CacheEntry;
use crate::key::CacheKey;
use polyrun_core::{Error, Result};
use polyrun_utils::write_atomic;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Cache rooted at an explicit directory.
///
/// Reads never fail: a missing, unreadable, or malformed record is a miss.
/// Writes replace the whole record atomically, and nothing here deletes
/// individual entries.
#[derive(Debug, Clone)]
pub struct CacheStore {
    root: PathBuf,
}

impl CacheStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Location of the record for `key`
    pub fn entry_path(&self, key: &CacheKey) -> PathBuf {
        self.root
            .join(key.shard())
            .join(format!("{}.json", key.as_str()))
    }

    /// Look up a record. Every failure mode is reported as `None`.
    pub async fn get(&self, key: &CacheKey) -> Option<CacheEntry> {
        let path = self.entry_path(key);

        let raw = match fs::read(&path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(key = %key, "no cache record");
                return None;
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "unreadable cache record");
                return None;
            }
        };

        match serde_json::from_slice::<CacheEntry>(&raw) {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ignoring corrupt cache record");
                None
            }
        }
    }

    /// Store a record, replacing any previous one for the same key
    pub async fn put(&self, key: &CacheKey, entry: &CacheEntry) -> Result<()> {
        let path = self.entry_path(key);
        let payload = serde_json::to_vec_pretty(entry).map_err(|e| Error::Json {
            message: "failed to serialize cache entry".to_string(),
            source: e,
        })?;

        write_atomic(&path, &payload).await?;
        tracing::debug!(path = %path.display(), "wrote cache record");
        Ok(())
    }

    /// Remove the whole cache directory. A missing directory is not an error.
    pub async fn clear(&self) -> Result<()> {
        match fs::remove_dir_all(&self.root).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(Error::file_system(&self.root, "remove cache directory", e)),
        }
    }
}
