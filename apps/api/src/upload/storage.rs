use std::io;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

/// The uploads directory. Files are addressed by their sanitized name.
#[derive(Debug, Clone)]
pub struct UploadStorage {
    root: PathBuf,
}

impl UploadStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path_for(&self, filename: &str) -> PathBuf {
        self.root.join(filename)
    }

    pub async fn ensure_root(&self) -> io::Result<()> {
        tokio::fs::create_dir_all(&self.root).await
    }

    pub async fn save(&self, filename: &str, bytes: &[u8]) -> io::Result<PathBuf> {
        self.ensure_root().await?;
        let path = self.path_for(filename);
        tokio::fs::write(&path, bytes).await?;
        Ok(path)
    }

    /// Removes one stored file. A missing file is not an error.
    pub async fn remove(&self, path: &Path) {
        match tokio::fs::remove_file(path).await {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => warn!("Failed to remove {}: {e}", path.display()),
        }
    }

    /// Deletes every stored file and recreates the empty directory.
    pub async fn wipe(&self) -> io::Result<()> {
        match tokio::fs::remove_dir_all(&self.root).await {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => return Err(e),
        }
        self.ensure_root().await?;
        info!("Upload directory {} wiped", self.root.display());
        Ok(())
    }
}
