//! Static asset store
//!
//! The stylesheet is served from an optional on-disk bundle. When no bundle is
//! configured, or it cannot produce the file, the router falls back to the
//! embedded [`FALLBACK_CSS`].

mod fallback;

use std::path::{Component, Path, PathBuf};

use async_trait::async_trait;
use thiserror::Error;

pub use fallback::FALLBACK_CSS;

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("Invalid asset path: {0}")]
    InvalidPath(String),

    #[error("Failed to read asset: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone)]
pub struct Asset {
    pub content_type: &'static str,
    pub body: Vec<u8>,
}

#[async_trait]
pub trait AssetStore: Send + Sync {
    /// Look up the asset for a request path. `Ok(None)` is a miss.
    async fn fetch(&self, path: &str) -> Result<Option<Asset>, AssetError>;
}

/// Serves files from a directory on disk
pub struct DirAssetStore {
    root: PathBuf,
}

impl DirAssetStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn resolve(&self, path: &str) -> Result<PathBuf, AssetError> {
        let relative = Path::new(path.trim_start_matches('/'));
        let safe = relative
            .components()
            .all(|c| matches!(c, Component::Normal(_)));
        if !safe || relative.as_os_str().is_empty() {
            return Err(AssetError::InvalidPath(path.to_string()));
        }
        Ok(self.root.join(relative))
    }
}

#[async_trait]
impl AssetStore for DirAssetStore {
    async fn fetch(&self, path: &str) -> Result<Option<Asset>, AssetError> {
        let file = self.resolve(path)?;

        match tokio::fs::read(&file).await {
            Ok(body) => Ok(Some(Asset {
                content_type: content_type_for(&file),
                body,
            })),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

fn content_type_for(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("css") => "text/css",
        Some("js") => "text/javascript",
        Some("html") => "text/html;charset=UTF-8",
        Some("svg") => "image/svg+xml",
        Some("png") => "image/png",
        _ => "application/octet-stream",
    }
}
