//! On-disk store for generated product images.
//!
//! Images are written under a single uploads directory with per-call unique
//! filenames (design id + timestamp); the directory listing is the only
//! catalog. There is no content addressing and no crash-consistency guarantee
//! beyond what the filesystem provides.

use std::path::{Path, PathBuf};

use jiff::{Timestamp, Zoned};
use serde::{Deserialize, Serialize};

use super::TRACING_TARGET;
use crate::{Error, Result};

/// File extensions the listing treats as images.
const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "bmp"];

/// A catalog entry for one stored image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredImage {
    /// Bare filename within the uploads directory.
    pub filename: String,
    /// File size in bytes.
    pub size: u64,
    /// Last modification time.
    pub created: Timestamp,
}

/// Store for generated image files under an uploads directory.
#[derive(Debug, Clone)]
pub struct ImageStore {
    root: PathBuf,
}

impl ImageStore {
    /// Opens the store, creating the uploads directory if needed.
    pub async fn init(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        tokio::fs::create_dir_all(&root).await.map_err(|e| {
            Error::internal_error()
                .with_message(format!("cannot create uploads directory {}", root.display()))
                .with_source(e)
        })?;

        tracing::debug!(
            target: TRACING_TARGET,
            root = %root.display(),
            "Image store initialized"
        );

        Ok(Self { root })
    }

    /// Returns the uploads directory path.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Writes PNG bytes for a design and returns the created file path.
    ///
    /// The filename embeds the design id and a second-resolution timestamp,
    /// so concurrent requests never contend for the same file.
    pub async fn save_png(&self, design_id: &str, data: &[u8]) -> Result<PathBuf> {
        let stamp = Zoned::now().strftime("%Y%m%d_%H%M%S").to_string();
        let filename = format!("design_{design_id}_{stamp}.png");
        let path = self.root.join(&filename);

        tokio::fs::write(&path, data).await.map_err(|e| {
            Error::internal_error()
                .with_message(format!("cannot write image {}", path.display()))
                .with_source(e)
        })?;

        tracing::info!(
            target: TRACING_TARGET,
            path = %path.display(),
            size = data.len(),
            "Image saved"
        );

        Ok(path)
    }

    /// Lists stored images, newest first.
    ///
    /// Non-image files are skipped; entries whose metadata cannot be read are
    /// logged and skipped rather than failing the whole listing.
    pub async fn list(&self) -> Result<Vec<StoredImage>> {
        let mut entries = tokio::fs::read_dir(&self.root).await.map_err(|e| {
            Error::internal_error()
                .with_message(format!("cannot read uploads directory {}", self.root.display()))
                .with_source(e)
        })?;

        let mut images = Vec::new();
        while let Some(entry) = entries.next_entry().await.map_err(Error::from)? {
            let path = entry.path();
            if !is_image_file(&path) {
                continue;
            }

            let filename = match path.file_name().and_then(|n| n.to_str()) {
                Some(name) => name.to_owned(),
                None => continue,
            };

            let metadata = match entry.metadata().await {
                Ok(metadata) => metadata,
                Err(error) => {
                    tracing::warn!(
                        target: TRACING_TARGET,
                        filename = %filename,
                        error = %error,
                        "Skipping unreadable image entry"
                    );
                    continue;
                }
            };

            let created = metadata
                .modified()
                .ok()
                .and_then(|t| Timestamp::try_from(t).ok())
                .unwrap_or_default();

            images.push(StoredImage {
                filename,
                size: metadata.len(),
                created,
            });
        }

        images.sort_by(|a, b| b.created.cmp(&a.created));
        Ok(images)
    }

    /// Resolves a bare filename to its path, if the file exists in the store.
    ///
    /// Filenames carrying path separators or parent components are rejected,
    /// so callers can pass untrusted input directly.
    pub async fn resolve(&self, filename: &str) -> Option<PathBuf> {
        if filename.is_empty()
            || filename.contains(['/', '\\'])
            || filename.contains("..")
        {
            return None;
        }

        let path = self.root.join(filename);
        match tokio::fs::try_exists(&path).await {
            Ok(true) => Some(path),
            _ => None,
        }
    }
}

fn is_image_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            IMAGE_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn store() -> (tempfile::TempDir, ImageStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = ImageStore::init(dir.path().join("uploads")).await.unwrap();
        (dir, store)
    }

    #[tokio::test]
    async fn save_creates_unique_png() {
        let (_dir, store) = store().await;
        let path = store.save_png("prompt_0", b"not-really-a-png").await.unwrap();
        assert!(path.exists());
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(name.starts_with("design_prompt_0_"));
        assert!(name.ends_with(".png"));
    }

    #[tokio::test]
    async fn list_only_returns_images() {
        let (_dir, store) = store().await;
        store.save_png("prompt_0", b"png bytes").await.unwrap();
        tokio::fs::write(store.root().join("notes.txt"), b"text")
            .await
            .unwrap();

        let images = store.list().await.unwrap();
        assert_eq!(images.len(), 1);
        assert!(images[0].filename.ends_with(".png"));
        assert_eq!(images[0].size, 9);
    }

    #[tokio::test]
    async fn resolve_rejects_traversal() {
        let (_dir, store) = store().await;
        let path = store.save_png("prompt_0", b"png").await.unwrap();
        let name = path.file_name().unwrap().to_str().unwrap();

        assert!(store.resolve(name).await.is_some());
        assert!(store.resolve("../secrets.png").await.is_none());
        assert!(store.resolve("a/b.png").await.is_none());
        assert!(store.resolve("missing.png").await.is_none());
    }
}
