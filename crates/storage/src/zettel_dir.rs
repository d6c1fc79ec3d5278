//! Zettel sinks: a zettelkasten directory and an in-memory collector.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::fs;
use tokio::sync::Mutex;
use tracing::info;

use super::{Result, ZettelSink};

/// Writes zettels into a directory, creating it on first use.
pub struct ZettelDir {
    dir: PathBuf,
}

impl ZettelDir {
    /// Create a sink for `dir`.
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }
}

#[async_trait::async_trait]
impl ZettelSink for ZettelDir {
    async fn write_zettel(&self, filename: &str, contents: &str) -> Result<PathBuf> {
        fs::create_dir_all(&self.dir).await?;
        let path = self.dir.join(filename);
        fs::write(&path, contents.as_bytes()).await?;
        info!("{} written.", filename);
        Ok(path)
    }
}

/// Keeps zettels in memory, for dry runs and tests.
#[derive(Clone, Default)]
pub struct MemorySink {
    written: Arc<Mutex<Vec<(String, String)>>>,
}

impl MemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, in order.
    pub async fn written(&self) -> Vec<(String, String)> {
        self.written.lock().await.clone()
    }

    /// Contents of the last zettel written under `filename`.
    pub async fn get(&self, filename: &str) -> Option<String> {
        self.written
            .lock()
            .await
            .iter()
            .rev()
            .find(|(name, _)| name == filename)
            .map(|(_, contents)| contents.clone())
    }
}

#[async_trait::async_trait]
impl ZettelSink for MemorySink {
    async fn write_zettel(&self, filename: &str, contents: &str) -> Result<PathBuf> {
        self.written
            .lock()
            .await
            .push((filename.to_string(), contents.to_string()));
        info!("{} collected.", filename);
        Ok(PathBuf::from(filename))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_zettel_dir_creates_and_writes() {
        let dir = tempfile::tempdir().unwrap();
        let sink = ZettelDir::new(dir.path().join("zettelkasten"));

        let path = sink.write_zettel("a.md", "# A").await.unwrap();
        assert_eq!(path, dir.path().join("zettelkasten").join("a.md"));
        assert_eq!(fs::read_to_string(&path).await.unwrap(), "# A");

        sink.write_zettel("a.md", "# B").await.unwrap();
        assert_eq!(fs::read_to_string(&path).await.unwrap(), "# B");
    }

    #[tokio::test]
    async fn test_memory_sink() {
        let sink = MemorySink::new();
        sink.write_zettel("x.md", "one").await.unwrap();
        sink.write_zettel("y.md", "two").await.unwrap();
        sink.write_zettel("x.md", "three").await.unwrap();

        assert_eq!(sink.written().await.len(), 3);
        assert_eq!(sink.get("x.md").await.as_deref(), Some("three"));
        assert!(sink.get("z.md").await.is_none());
    }
}
