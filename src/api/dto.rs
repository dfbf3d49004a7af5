//! Data Transfer Objects
//!
//! Request and response types for the API endpoints.
//! These types are serialized/deserialized to/from JSON.

use serde::{Deserialize, Serialize};

use crate::assets::{DeleteOutcome, ImageRef};

// ============================================
// IMAGE DTOs
// ============================================

/// Image upload request
#[derive(Debug, Deserialize, Serialize)]
pub struct UploadImageRequest {
    /// Base64 data URL of the image
    pub data: String,
    /// Folder under the `billedy/` namespace (default: `entities`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder: Option<String>,
}

/// Image upload response
#[derive(Debug, Deserialize, Serialize)]
pub struct UploadImageResponse {
    /// Secure URL of the transformed image
    pub url: String,
    /// Identifier to keep for later deletion
    pub public_id: String,
}

impl From<ImageRef> for UploadImageResponse {
    fn from(image: ImageRef) -> Self {
        Self {
            url: image.url,
            public_id: image.public_id,
        }
    }
}

/// Image delete request; `public_id` wins when both are given
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DeleteImageRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_id: Option<String>,
}

/// Image delete response
#[derive(Debug, Deserialize, Serialize)]
pub struct DeleteImageResponse {
    pub result: DeleteOutcome,
}

// ============================================
// HEALTH DTOs
// ============================================

/// Full health status
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// "healthy" or "degraded"
    pub status: String,
    /// Asset backend name
    pub asset_store: String,
    /// "ok" or the backend error
    pub asset_store_status: String,
    pub uptime_seconds: u64,
    pub version: String,
}
