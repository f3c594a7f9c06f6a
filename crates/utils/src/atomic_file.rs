//! Atomic file operations to prevent readers from observing half-written files

use polyrun_core::{Error, Result};
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use uuid::Uuid;

/// Write data to a file atomically by writing to a temporary sibling and renaming.
///
/// The parent directory is created if needed. Concurrent writers to the same
/// path race, and the last rename wins.
pub async fn write_atomic(path: &Path, content: &[u8]) -> Result<()> {
    let parent = path.parent().ok_or_else(|| {
        Error::configuration(format!(
            "invalid file path '{}': no parent directory",
            path.display()
        ))
    })?;

    fs::create_dir_all(parent)
        .await
        .map_err(|e| Error::file_system(parent, "create parent directory", e))?;

    // Same directory as the target so the rename never crosses filesystems
    let temp_path = parent.join(format!(".{}.tmp", Uuid::new_v4()));

    if let Err(e) = write_and_sync(&temp_path, content).await {
        let _ = fs::remove_file(&temp_path).await;
        return Err(e);
    }

    if let Err(e) = fs::rename(&temp_path, path).await {
        let _ = fs::remove_file(&temp_path).await;
        return Err(Error::file_system(path, "atomic rename", e));
    }

    Ok(())
}

/// Write string content to a file atomically
pub async fn write_atomic_string(path: &Path, content: &str) -> Result<()> {
    write_atomic(path, content.as_bytes()).await
}

async fn write_and_sync(temp_path: &Path, content: &[u8]) -> Result<()> {
    let mut file = fs::File::create(temp_path)
        .await
        .map_err(|e| Error::file_system(temp_path, "create temporary file", e))?;

    file.write_all(content)
        .await
        .map_err(|e| Error::file_system(temp_path, "write to temporary file", e))?;

    file.sync_all()
        .await
        .map_err(|e| Error::file_system(temp_path, "sync temporary file", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_atomic_write() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("entry.json");

        write_atomic_string(&file_path, "{\"a\":1}").await.unwrap();

        let content = std::fs::read_to_string(&file_path).unwrap();
        assert_eq!(content, "{\"a\":1}");
    }

    #[tokio::test]
    async fn test_atomic_write_creates_parent_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("ab").join("cd").join("entry.json");

        write_atomic_string(&file_path, "nested").await.unwrap();

        assert_eq!(std::fs::read_to_string(&file_path).unwrap(), "nested");
    }

    #[tokio::test]
    async fn test_atomic_write_overwrites_and_leaves_no_temp_files() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("entry.json");

        std::fs::write(&file_path, "old").unwrap();
        write_atomic_string(&file_path, "new").await.unwrap();

        assert_eq!(std::fs::read_to_string(&file_path).unwrap(), "new");
        let leftovers: Vec<_> = std::fs::read_dir(temp_dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
            .collect();
        assert!(leftovers.is_empty());
    }
}
