//! Image Routes
//!
//! Upload and delete entity images on the asset store.
//!
//! - POST /api/v1/images - Upload a data URL
//! - DELETE /api/v1/images - Delete by public id or URL

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::api::dto::{
    DeleteImageRequest, DeleteImageResponse, UploadImageRequest, UploadImageResponse,
};
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::assets::{is_valid_folder, is_valid_public_id, DataUrl, DeleteOutcome, NAMESPACE};

/// POST /api/v1/images
///
/// Upload an image given as a base64 data URL.
pub async fn upload_image(
    State(state): State<Arc<AppState>>,
    Json(req): Json<UploadImageRequest>,
) -> ApiResult<(StatusCode, Json<UploadImageResponse>)> {
    validate_upload_request(&req)?;

    let image = state.assets.upload(&req.data, req.folder.as_deref()).await?;

    Ok((StatusCode::CREATED, Json(image.into())))
}

/// DELETE /api/v1/images
///
/// Delete an image by its stored public id, or by deriving the id from its URL.
pub async fn delete_image(
    State(state): State<Arc<AppState>>,
    Json(req): Json<DeleteImageRequest>,
) -> ApiResult<Json<DeleteImageResponse>> {
    let outcome = match (req.public_id.as_deref(), req.url.as_deref()) {
        (Some(public_id), _) => {
            validate_public_id(public_id)?;
            state.assets.delete_by_id(public_id).await?
        }
        (None, Some(url)) => state.assets.delete(url).await?,
        (None, None) => {
            return Err(ApiError::Validation(
                "Either 'url' or 'public_id' is required".to_string(),
            ))
        }
    };

    if outcome == DeleteOutcome::Skipped {
        return Err(ApiError::Unprocessable(format!(
            "URL is outside the '{}/' namespace",
            NAMESPACE
        )));
    }

    Ok(Json(DeleteImageResponse { result: outcome }))
}

fn validate_upload_request(req: &UploadImageRequest) -> ApiResult<()> {
    DataUrl::parse(&req.data).map_err(|e| ApiError::Validation(format!("data: {}", e)))?;

    if let Some(folder) = req.folder.as_deref() {
        if !is_valid_folder(folder) {
            return Err(ApiError::Validation(format!(
                "folder '{}' must be path segments of letters, digits, '_' or '-'",
                folder
            )));
        }
    }

    Ok(())
}

fn validate_public_id(public_id: &str) -> ApiResult<()> {
    if is_valid_public_id(public_id) {
        Ok(())
    } else {
        Err(ApiError::Validation(format!(
            "public_id must be a path under '{}/'",
            NAMESPACE
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::public_id_from_url;

    #[test]
    fn test_validate_upload_request() {
        let ok = UploadImageRequest {
            data: "data:image/png;base64,aGVsbG8=".to_string(),
            folder: Some("accounts".to_string()),
        };
        assert!(validate_upload_request(&ok).is_ok());

        let bad_data = UploadImageRequest {
            data: "hello".to_string(),
            folder: None,
        };
        assert!(matches!(
            validate_upload_request(&bad_data),
            Err(ApiError::Validation(_))
        ));

        let bad_folder = UploadImageRequest {
            data: "data:image/png;base64,aGVsbG8=".to_string(),
            folder: Some("../secrets".to_string()),
        };
        assert!(validate_upload_request(&bad_folder).is_err());
    }

    #[test]
    fn test_validate_public_id() {
        assert!(validate_public_id("billedy/accounts/abc123").is_ok());
        assert!(validate_public_id("billedy/").is_err());
        assert!(validate_public_id("other/accounts/abc123").is_err());
        assert!(validate_public_id("billedy/../outside").is_err());
    }

    #[test]
    fn test_validate_public_id_accepts_derived_ids() {
        let derived = public_id_from_url("https://cdn.example.com/billedy/v1.2/logo.jpg").unwrap();
        assert!(validate_public_id(&derived).is_ok());
    }
}
