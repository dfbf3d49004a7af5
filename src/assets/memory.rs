//! In-memory asset store.
//!
//! Keeps uploaded images in a map and records every backend call, so
//! callers can assert on what would have been sent to the hosted store.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::RwLock;

use super::client::AssetError;
use super::image_ref::{folder_path, DeleteOutcome, ImageRef};
use super::transform::Transformation;
use super::AssetStore;

/// A call received by the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreCall {
    Upload {
        folder: String,
        transformation: String,
    },
    Destroy {
        public_id: String,
    },
}

/// Asset store backed by a `HashMap`
pub struct MemoryAssetStore {
    base_url: String,
    next_id: AtomicU64,
    assets: RwLock<HashMap<String, String>>,
    calls: RwLock<Vec<StoreCall>>,
}

impl MemoryAssetStore {
    pub fn new() -> Self {
        Self::with_base_url("https://assets.invalid/image/upload")
    }

    /// Use a custom prefix for generated URLs
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            next_id: AtomicU64::new(1),
            assets: RwLock::new(HashMap::new()),
            calls: RwLock::new(Vec::new()),
        }
    }

    /// Every call made so far, in order
    pub async fn calls(&self) -> Vec<StoreCall> {
        self.calls.read().await.clone()
    }

    /// Number of assets currently stored
    pub async fn len(&self) -> usize {
        self.assets.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.assets.read().await.is_empty()
    }

    pub async fn contains(&self, public_id: &str) -> bool {
        self.assets.read().await.contains_key(public_id)
    }
}

impl Default for MemoryAssetStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AssetStore for MemoryAssetStore {
    fn name(&self) -> &str {
        "memory"
    }

    async fn upload(&self, data: &str, folder: Option<&str>) -> Result<ImageRef, AssetError> {
        let folder = folder_path(folder);
        self.calls.write().await.push(StoreCall::Upload {
            folder: folder.clone(),
            transformation: Transformation::thumbnail().to_string(),
        });

        if !data.starts_with("data:") {
            return Err(AssetError::Api {
                status: 400,
                message: "Invalid image file".to_string(),
            });
        }

        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let public_id = format!("{}/img{:06}", folder, id);
        let url = format!("{}/{}.png", self.base_url, public_id);

        self.assets
            .write()
            .await
            .insert(public_id.clone(), data.to_string());

        tracing::debug!(public_id = %public_id, "Stored image in memory");
        Ok(ImageRef::new(url, public_id))
    }

    async fn delete_by_id(&self, public_id: &str) -> Result<DeleteOutcome, AssetError> {
        self.calls.write().await.push(StoreCall::Destroy {
            public_id: public_id.to_string(),
        });

        match self.assets.write().await.remove(public_id) {
            Some(_) => Ok(DeleteOutcome::Deleted),
            None => Ok(DeleteOutcome::NotFound),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DATA_URL: &str = "data:image/png;base64,iVBORw0KGgo=";

    #[tokio::test]
    async fn test_upload_records_folder_and_transformation() {
        let store = MemoryAssetStore::new();
        let image = store.upload(DATA_URL, None).await.unwrap();

        assert!(image.public_id.starts_with("billedy/entities/"));
        assert_eq!(
            store.calls().await,
            vec![StoreCall::Upload {
                folder: "billedy/entities".to_string(),
                transformation: "c_fill,h_128,w_128/q_auto/f_auto".to_string(),
            }]
        );
    }

    #[tokio::test]
    async fn test_two_uploads_create_two_assets() {
        let store = MemoryAssetStore::new();
        let a = store.upload(DATA_URL, Some("accounts")).await.unwrap();
        let b = store.upload(DATA_URL, Some("accounts")).await.unwrap();

        assert_ne!(a.public_id, b.public_id);
        assert_eq!(store.len().await, 2);
    }

    #[tokio::test]
    async fn test_delete_by_url_round_trip() {
        let store = MemoryAssetStore::new();
        let image = store.upload(DATA_URL, Some("categories")).await.unwrap();

        assert_eq!(store.delete(&image.url).await.unwrap(), DeleteOutcome::Deleted);
        assert_eq!(store.delete(&image.url).await.unwrap(), DeleteOutcome::NotFound);
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_delete_foreign_url_makes_no_call() {
        let store = MemoryAssetStore::new();
        let outcome = store.delete("https://example.com/a.png").await.unwrap();

        assert_eq!(outcome, DeleteOutcome::Skipped);
        assert!(store.calls().await.is_empty());
    }

    #[tokio::test]
    async fn test_upload_rejects_non_data_url() {
        let store = MemoryAssetStore::new();
        let err = store.upload("hello", None).await.unwrap_err();
        assert!(matches!(err, AssetError::Api { status: 400, .. }));
        assert!(store.is_empty().await);
    }
}
