//! services/web/src/adapters/images.rs
//!
//! Filesystem implementation of the `ImageStore` port.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use bytes::Bytes;
use sitio_core::ports::{ImageStore, PortError, PortResult};

/// Stores cover images as plain files in one directory.
#[derive(Clone, Debug)]
pub struct FsImageStore {
    dir: PathBuf,
}

impl FsImageStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PortResult<PathBuf> {
        // Keys are generated by the catalog, but never let one escape the directory.
        if key.is_empty() || key.contains(['/', '\\']) || key.starts_with('.') {
            return Err(PortError::Invalid(format!("invalid image key '{}'", key)));
        }
        Ok(self.dir.join(key))
    }
}

#[async_trait]
impl ImageStore for FsImageStore {
    async fn store(&self, key: &str, data: Bytes) -> PortResult<()> {
        let path = self.path_for(key)?;
        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| PortError::Unexpected(e.to_string()))?;
        tokio::fs::write(&path, &data)
            .await
            .map_err(|e| PortError::Unexpected(e.to_string()))
    }

    async fn remove(&self, key: &str) -> PortResult<()> {
        let path = self.path_for(key)?;
        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(PortError::Unexpected(e.to_string())),
        }
    }
}
