//! HTTP API Client
//!
//! Functions for talking to the Billedy image API.

use gloo_net::http::Request;

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:8082/api/v1";

const API_URL_KEY: &str = "billedy_api_url";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let stored = web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|s| s.get_item(API_URL_KEY).ok().flatten());

    normalize_base(stored.as_deref().unwrap_or(DEFAULT_API_BASE))
}

fn normalize_base(url: &str) -> String {
    let url = url.trim();
    if url.is_empty() {
        return DEFAULT_API_BASE.to_string();
    }
    url.trim_end_matches('/').to_string()
}

/// Server health URL, which lives outside the versioned API prefix
fn health_url(api_base: &str) -> String {
    let root = api_base.strip_suffix("/api/v1").unwrap_or(api_base);
    format!("{}/health", root)
}

// ============ Response Types ============

#[derive(Debug, Clone, serde::Deserialize)]
pub struct UploadedImage {
    pub url: String,
    pub public_id: String,
}

#[derive(Debug, serde::Deserialize)]
pub struct DeleteResult {
    pub result: String,
}

#[derive(Debug, serde::Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub asset_store: String,
    pub asset_store_status: String,
}

#[derive(Debug, serde::Deserialize)]
struct ApiError {
    error: ApiErrorBody,
}

#[derive(Debug, serde::Deserialize)]
struct ApiErrorBody {
    message: String,
}

async fn error_message(response: gloo_net::http::Response) -> String {
    match response.json::<ApiError>().await {
        Ok(body) => body.error.message,
        Err(_) => format!("Request failed with status {}", response.status()),
    }
}

// ============ API Functions ============

/// Upload an image given as a base64 data URL
pub async fn upload_image(data: &str, folder: Option<&str>) -> Result<UploadedImage, String> {
    #[derive(serde::Serialize)]
    struct UploadRequest<'a> {
        data: &'a str,
        #[serde(skip_serializing_if = "Option::is_none")]
        folder: Option<&'a str>,
    }

    let api_base = get_api_base();

    let response = Request::post(&format!("{}/images", api_base))
        .json(&UploadRequest { data, folder })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    response.json().await
        .map_err(|e| format!("Parse error: {}", e))
}

#[derive(Debug, serde::Serialize)]
struct DeleteRequest<'a> {
    public_id: &'a str,
}

/// Delete an image by the public id stored when it was uploaded
pub async fn delete_image_by_id(public_id: &str) -> Result<String, String> {
    let api_base = get_api_base();

    let response = Request::delete(&format!("{}/images", api_base))
        .json(&DeleteRequest { public_id })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    let result: DeleteResult = response.json().await
        .map_err(|e| format!("Parse error: {}", e))?;

    Ok(result.result)
}

/// Check server and asset store health
pub async fn check_health() -> Result<HealthResponse, String> {
    let response = Request::get(&health_url(&get_api_base()))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    response.json().await
        .map_err(|e| format!("Parse error: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_base() {
        assert_eq!(normalize_base("http://host/api/v1/"), "http://host/api/v1");
        assert_eq!(normalize_base("  "), DEFAULT_API_BASE);
    }

    #[test]
    fn test_delete_request_sends_public_id() {
        let body = serde_json::to_value(DeleteRequest { public_id: "billedy/accounts/img000001" })
            .unwrap();
        assert_eq!(body, serde_json::json!({ "public_id": "billedy/accounts/img000001" }));
    }

    #[test]
    fn test_health_url() {
        assert_eq!(health_url(DEFAULT_API_BASE), "http://localhost:8082/health");
        assert_eq!(health_url("http://proxy/billedy"), "http://proxy/billedy/health");
    }
}
