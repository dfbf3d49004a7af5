//! Cloudinary REST API Client
//!
//! Signed client for the hosted image store. Uploads go through the fixed
//! thumbnail transformation; deletes destroy by public id.

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

use super::image_ref::{folder_path, DeleteOutcome, ImageRef};
use super::transform::Transformation;
use super::AssetStore;

/// Default host for the upload and admin APIs
pub const DEFAULT_API_BASE: &str = "https://api.cloudinary.com";

/// Parameters that are sent but never signed
const UNSIGNED_PARAMS: &[&str] = &["file", "api_key", "resource_type", "cloud_name"];

/// Cloudinary REST API client
pub struct CloudinaryClient {
    client: Client,
    config: CloudinaryConfig,
    transformation: Transformation,
}

/// Credentials and endpoint settings for the asset host
#[derive(Clone)]
pub struct CloudinaryConfig {
    /// Account cloud name
    pub cloud_name: String,
    /// Public API key
    pub api_key: String,
    /// API secret used for request signatures
    pub api_secret: String,
    /// API host (overridable for tests)
    pub api_base: String,
    /// Request timeout in milliseconds
    pub request_timeout_ms: u64,
}

impl Default for CloudinaryConfig {
    fn default() -> Self {
        Self {
            cloud_name: String::new(),
            api_key: String::new(),
            api_secret: String::new(),
            api_base: DEFAULT_API_BASE.to_string(),
            request_timeout_ms: 30_000,
        }
    }
}

impl fmt::Debug for CloudinaryConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CloudinaryConfig")
            .field("cloud_name", &self.cloud_name)
            .field("api_key", &self.api_key)
            .field("api_secret", &"<redacted>")
            .field("api_base", &self.api_base)
            .field("request_timeout_ms", &self.request_timeout_ms)
            .finish()
    }
}

impl CloudinaryConfig {
    pub fn new(
        cloud_name: impl Into<String>,
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
    ) -> Self {
        Self {
            cloud_name: cloud_name.into(),
            api_key: api_key.into(),
            api_secret: api_secret.into(),
            ..Default::default()
        }
    }

    /// Parse a `cloudinary://<api_key>:<api_secret>@<cloud_name>` URL
    pub fn from_url(url: &str) -> Result<Self, AssetError> {
        let rest = url
            .trim()
            .strip_prefix("cloudinary://")
            .ok_or_else(|| AssetError::Config("URL must start with cloudinary://".to_string()))?;

        let (credentials, cloud_name) = rest
            .rsplit_once('@')
            .ok_or_else(|| AssetError::Config("URL is missing '@<cloud_name>'".to_string()))?;

        let (api_key, api_secret) = credentials
            .split_once(':')
            .ok_or_else(|| AssetError::Config("URL is missing '<key>:<secret>'".to_string()))?;

        let config = Self::new(cloud_name.trim_end_matches('/'), api_key, api_secret);
        config.validate()?;
        Ok(config)
    }

    /// Check that all three credentials are present
    pub fn validate(&self) -> Result<(), AssetError> {
        let missing: Vec<&str> = [
            ("cloud_name", &self.cloud_name),
            ("api_key", &self.api_key),
            ("api_secret", &self.api_secret),
        ]
        .iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| *name)
        .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(AssetError::Config(format!(
                "missing credentials: {}",
                missing.join(", ")
            )))
        }
    }

    fn endpoint(&self, action: &str) -> String {
        format!(
            "{}/v1_1/{}/{}",
            self.api_base.trim_end_matches('/'),
            self.cloud_name,
            action
        )
    }
}

impl CloudinaryClient {
    /// Create a new client with the given configuration
    pub fn new(config: CloudinaryConfig) -> Result<Self, AssetError> {
        config.validate()?;

        let client = Client::builder()
            .timeout(std::time::Duration::from_millis(config.request_timeout_ms))
            .build()
            .map_err(AssetError::Request)?;

        Ok(Self {
            client,
            config,
            transformation: Transformation::thumbnail(),
        })
    }

    /// Get the current configuration
    pub fn config(&self) -> &CloudinaryConfig {
        &self.config
    }

    /// Transformation requested for every upload
    pub fn transformation(&self) -> &Transformation {
        &self.transformation
    }

    /// Add timestamp, api key and signature to a parameter set
    fn signed_form(
        &self,
        mut params: BTreeMap<&'static str, String>,
        timestamp: i64,
    ) -> BTreeMap<&'static str, String> {
        params.insert("timestamp", timestamp.to_string());
        let signature = sign_params(&params, &self.config.api_secret);

        params.insert("api_key", self.config.api_key.clone());
        params.insert("signature", signature);
        params.insert("signature_algorithm", "sha256".to_string());
        params
    }

    async fn post_form<T: DeserializeOwned>(
        &self,
        url: &str,
        form: &BTreeMap<&'static str, String>,
    ) -> Result<T, AssetError> {
        let response = self
            .client
            .post(url)
            .form(form)
            .send()
            .await
            .map_err(classify_transport_error)?;

        let status = response.status();
        if status.is_success() {
            response.json::<T>().await.map_err(|e| {
                AssetError::InvalidResponse(format!("failed to decode response: {}", e))
            })
        } else {
            let text = response.text().await.unwrap_or_default();
            Err(AssetError::Api {
                status: status.as_u16(),
                message: vendor_error_message(&text),
            })
        }
    }
}

#[async_trait]
impl AssetStore for CloudinaryClient {
    fn name(&self) -> &str {
        "cloudinary"
    }

    async fn upload(&self, data: &str, folder: Option<&str>) -> Result<ImageRef, AssetError> {
        let folder = folder_path(folder);
        tracing::debug!(folder = %folder, bytes = data.len(), "Uploading image");

        let mut params = BTreeMap::new();
        params.insert("folder", folder.clone());
        params.insert("transformation", self.transformation.to_string());

        let mut form = self.signed_form(params, chrono::Utc::now().timestamp());
        form.insert("file", data.to_string());

        let uploaded: UploadResponse = self
            .post_form(&self.config.endpoint("image/upload"), &form)
            .await?;

        tracing::info!(public_id = %uploaded.public_id, folder = %folder, "Image uploaded");
        Ok(ImageRef::new(uploaded.secure_url, uploaded.public_id))
    }

    async fn delete_by_id(&self, public_id: &str) -> Result<DeleteOutcome, AssetError> {
        let mut params = BTreeMap::new();
        params.insert("public_id", public_id.to_string());

        let form = self.signed_form(params, chrono::Utc::now().timestamp());
        let destroyed: DestroyResponse = self
            .post_form(&self.config.endpoint("image/destroy"), &form)
            .await?;

        match destroyed.result.as_str() {
            "ok" => {
                tracing::info!(public_id = %public_id, "Image deleted");
                Ok(DeleteOutcome::Deleted)
            }
            "not found" => {
                tracing::debug!(public_id = %public_id, "Image already gone");
                Ok(DeleteOutcome::NotFound)
            }
            other => Err(AssetError::InvalidResponse(format!(
                "unexpected destroy result: {}",
                other
            ))),
        }
    }

    async fn health_check(&self) -> Result<(), AssetError> {
        let response = self
            .client
            .get(self.config.endpoint("ping"))
            .basic_auth(&self.config.api_key, Some(&self.config.api_secret))
            .send()
            .await
            .map_err(classify_transport_error)?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(AssetError::Unavailable)
        }
    }
}

/// Compute the request signature for a parameter set.
///
/// Parameters are sorted by name, joined as `k=v&k=v`, suffixed with the
/// secret and digested with SHA-256.
pub fn sign_params(params: &BTreeMap<&str, String>, api_secret: &str) -> String {
    let to_sign = params
        .iter()
        .filter(|(key, value)| !UNSIGNED_PARAMS.contains(*key) && !value.is_empty())
        .map(|(key, value)| format!("{}={}", key, value))
        .collect::<Vec<_>>()
        .join("&");

    let mut hasher = Sha256::new();
    hasher.update(to_sign.as_bytes());
    hasher.update(api_secret.as_bytes());
    hex::encode(hasher.finalize())
}

fn classify_transport_error(e: reqwest::Error) -> AssetError {
    if e.is_timeout() {
        AssetError::Timeout
    } else if e.is_connect() {
        AssetError::Unavailable
    } else {
        AssetError::Request(e)
    }
}

/// Pull `error.message` out of a vendor error body, falling back to the raw text
fn vendor_error_message(body: &str) -> String {
    serde_json::from_str::<ErrorEnvelope>(body)
        .map(|envelope| envelope.error.message)
        .unwrap_or_else(|_| body.to_string())
}

// ============================================
// Response DTOs
// ============================================

#[derive(Debug, Deserialize)]
struct UploadResponse {
    secure_url: String,
    public_id: String,
}

#[derive(Debug, Deserialize)]
struct DestroyResponse {
    result: String,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorMessage,
}

#[derive(Debug, Deserialize)]
struct ErrorMessage {
    message: String,
}

// ============================================
// Errors
// ============================================

/// Errors that can occur when talking to the asset host
#[derive(Error, Debug)]
pub enum AssetError {
    #[error("Asset store misconfigured: {0}")]
    Config(String),

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Asset store unavailable")]
    Unavailable,

    #[error("Request timeout")]
    Timeout,

    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}
