//! RAII guard for ephemeral working directories.
//!
//! A `WorkspaceGuard` owns a freshly created, uniquely named directory and
//! removes it either through an explicit [`WorkspaceGuard::close`] or when the
//! guard is dropped. Dropping covers early returns, `?` propagation, panics that
//! unwind, and cancelled futures that held the guard.

use polyrun_core::{Error, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub struct WorkspaceGuard {
    path: PathBuf,
    cleanup_on_drop: bool,
}

impl WorkspaceGuard {
    /// Create `<root>/<prefix><uuid>`, creating `root` first if necessary
    pub fn create(root: &Path, prefix: &str) -> Result<Self> {
        fs::create_dir_all(root)
            .map_err(|e| Error::file_system(root, "create workspace root", e))?;

        let path = root.join(format!("{prefix}{}", Uuid::new_v4().simple()));
        // create_dir, not create_dir_all: a collision must fail instead of sharing
        fs::create_dir(&path)
            .map_err(|e| Error::file_system(path.clone(), "create workspace directory", e))?;

        tracing::debug!(workspace = %path.display(), "created workspace");

        Ok(Self {
            path,
            cleanup_on_drop: true,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Remove the directory now and report failures.
    ///
    /// A directory that is already gone counts as success.
    pub fn close(mut self) -> Result<()> {
        self.cleanup_on_drop = false;
        remove_tolerant(&self.path)
            .map_err(|e| Error::file_system(self.path.clone(), "remove workspace directory", e))
    }
}

impl Drop for WorkspaceGuard {
    fn drop(&mut self) {
        if !self.cleanup_on_drop {
            return;
        }
        if let Err(e) = remove_tolerant(&self.path) {
            tracing::warn!(
                workspace = %self.path.display(),
                error = %e,
                "failed to remove workspace directory"
            );
        }
    }
}

fn remove_tolerant(path: &Path) -> std::io::Result<()> {
    match fs::remove_dir_all(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e),
    }
}
