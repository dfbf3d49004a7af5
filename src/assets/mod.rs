//! Image Assets
//!
//! Upload and delete entity images on the hosted asset store.
//!
//! ## Architecture
//!
//! - **AssetStore**: the seam the API layer depends on
//! - **CloudinaryClient**: signed REST client for the hosted store
//! - **MemoryAssetStore**: in-process store for tests and dry runs
//!
//! ## Lifecycle
//!
//! 1. A data URL is uploaded under `billedy/<folder>` with the thumbnail
//!    transformation (128x128 fill, auto quality, auto format)
//! 2. The returned [`ImageRef`] is stored on the owning entity
//! 3. Deletion uses the stored public id, or derives it from the URL

mod client;
mod data_url;
mod image_ref;
mod memory;
mod transform;

pub use client::{sign_params, AssetError, CloudinaryClient, CloudinaryConfig, DEFAULT_API_BASE};
pub use data_url::{encode_data_url, mime_for_path, DataUrl, DataUrlError};
pub use image_ref::{
    folder_path, is_valid_folder, is_valid_public_id, public_id_from_url, DeleteOutcome, ImageRef, DEFAULT_FOLDER,
    NAMESPACE,
};
pub use memory::{MemoryAssetStore, StoreCall};
pub use transform::{CropMode, TransformStep, Transformation, THUMBNAIL_SIZE};

use async_trait::async_trait;

/// Common trait for image asset backends
#[async_trait]
pub trait AssetStore: Send + Sync {
    /// Backend name, used in logs and health output
    fn name(&self) -> &str;

    /// Upload a data URL under `billedy/<folder>` (default `entities`)
    async fn upload(&self, data: &str, folder: Option<&str>) -> Result<ImageRef, AssetError>;

    /// Destroy an asset by its storage identifier
    async fn delete_by_id(&self, public_id: &str) -> Result<DeleteOutcome, AssetError>;

    /// Destroy the asset behind a URL.
    ///
    /// URLs outside the `billedy/` namespace yield [`DeleteOutcome::Skipped`]
    /// without contacting the backend.
    async fn delete(&self, url: &str) -> Result<DeleteOutcome, AssetError> {
        match public_id_from_url(url) {
            Some(public_id) => self.delete_by_id(&public_id).await,
            None => {
                tracing::warn!(url = %url, "Cannot derive public id, skipping delete");
                Ok(DeleteOutcome::Skipped)
            }
        }
    }

    /// Check that the backend is reachable with the configured credentials
    async fn health_check(&self) -> Result<(), AssetError> {
        Ok(())
    }
}
