//! Slot stored as a file on local disk.

use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use super::slot::{PersistenceSlot, SlotError, SlotResult};
use async_trait::async_trait;
use tempfile::NamedTempFile;
use tracing::debug;

/// A slot backed by a single file.
///
/// Each write goes to its own uniquely named temporary file in the target
/// directory, which is then persisted over the target. Readers never observe
/// a half-written document, and concurrent writers never share a temp file.
#[derive(Debug, Clone)]
pub struct FileSlot {
    path: PathBuf,
}

impl FileSlot {
    /// Creates a slot at `path`. Nothing is touched on disk until the first
    /// write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn dir(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }
}

/// Writes `value` to a fresh temp file in `dir` and renames it onto `target`.
///
/// The temp file is deleted if any step before the rename fails.
fn write_atomic(dir: &Path, target: &Path, value: &str) -> std::io::Result<()> {
    std::fs::create_dir_all(dir)?;

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(value.as_bytes())?;
    tmp.flush()?;
    tmp.as_file_mut().sync_all()?;

    tmp.persist(target).map_err(|e| e.error)?;
    Ok(())
}

#[async_trait]
impl PersistenceSlot for FileSlot {
    async fn get(&self) -> SlotResult<Option<String>> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => {
                debug!(path = %self.path.display(), bytes = contents.len(), "Slot read");
                Ok(Some(contents))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn set(&self, value: &str) -> SlotResult<()> {
        let dir = self.dir().to_path_buf();
        let target = self.path.clone();
        let contents = value.to_string();

        tokio::task::spawn_blocking(move || write_atomic(&dir, &target, &contents))
            .await
            .map_err(|e| SlotError::Operation(format!("File write task failed: {}", e)))??;

        debug!(path = %self.path.display(), bytes = value.len(), "Slot written");
        Ok(())
    }

    async fn remove(&self) -> SlotResult<()> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => {
                debug!(path = %self.path.display(), "Slot removed");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }

    async fn health_check(&self) -> bool {
        match tokio::fs::metadata(&self.path).await {
            Ok(meta) => meta.is_file(),
            Err(e) => e.kind() == ErrorKind::NotFound,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use tempfile::tempdir;

    fn dir_entries(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[tokio::test]
    async fn test_missing_file_reads_as_empty() {
        let dir = tempdir().unwrap();
        let slot = FileSlot::new(dir.path().join("history.json"));
        assert_eq!(slot.get().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_set_creates_parent_and_reads_back() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("nested");
        let slot = FileSlot::new(nested.join("history.json"));

        slot.set(r#"[{"id":"1","original":"a.com","short":"https://x.y/1"}]"#)
            .await
            .unwrap();

        let contents = slot.get().await.unwrap().unwrap();
        assert!(contents.contains("\"id\":\"1\""));
        assert_eq!(dir_entries(&nested), ["history.json"]);

        slot.remove().await.unwrap();
        assert_eq!(slot.get().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_set_replaces_previous_value() {
        let dir = tempdir().unwrap();
        let slot = FileSlot::new(dir.path().join("history.json"));

        slot.set("[1]").await.unwrap();
        slot.set("[2]").await.unwrap();

        assert_eq!(slot.get().await.unwrap().as_deref(), Some("[2]"));
    }

    #[tokio::test]
    async fn test_remove_missing_is_ok() {
        let dir = tempdir().unwrap();
        let slot = FileSlot::new(dir.path().join("history.json"));
        assert!(slot.remove().await.is_ok());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_writers_to_same_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("history.json");
        let first = "a".repeat(200 * 1024);
        let second = "b".repeat(200 * 1024);

        for _ in 0..50 {
            let a = Arc::new(FileSlot::new(&path));
            let b = Arc::new(FileSlot::new(&path));
            let (va, vb) = (first.clone(), second.clone());

            let (ra, rb) = tokio::join!(
                tokio::spawn(async move { a.set(&va).await }),
                tokio::spawn(async move { b.set(&vb).await }),
            );
            ra.unwrap().unwrap();
            rb.unwrap().unwrap();

            let stored = std::fs::read_to_string(&path).unwrap();
            assert!(stored == first || stored == second);
        }

        assert_eq!(dir_entries(dir.path()), ["history.json"]);
    }

    #[tokio::test]
    async fn test_health_check() {
        let dir = tempdir().unwrap();
        let slot = FileSlot::new(dir.path().join("history.json"));
        assert!(slot.health_check().await);

        let not_a_file = FileSlot::new(dir.path());
        assert!(!not_a_file.health_check().await);
    }
}
