//! Image upload endpoint handler

use axum::{
    extract::{FromRequest, Multipart, Request, State},
    http::header::CONTENT_TYPE,
};
use bytes::Bytes;
use tracing::info;

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json, UploadImageRequest, UploadImageResponse};
use crate::domain::{decode_base64_image, ImageFormat};

/// Multipart field and JSON key carrying the image
const IMAGE_FIELD: &str = "image";

/// POST /upload
///
/// Accepts either a `multipart/form-data` body with an `image` file field or a
/// JSON body `{"image": "<base64>"}` (a `data:` URL prefix is allowed).
pub async fn upload_image(
    State(state): State<AppState>,
    request: Request,
) -> Result<Json<UploadImageResponse>, ApiError> {
    let (format, data) = if is_multipart(&request) {
        let multipart = Multipart::from_request(request, &state)
            .await
            .map_err(|e| ApiError::new(e.status(), e.body_text()))?;
        read_multipart_image(multipart).await?
    } else {
        let Json(body) = Json::<UploadImageRequest>::from_request(request, &state).await?;
        let payload = body
            .image()
            .ok_or_else(|| ApiError::bad_request("Missing 'image' in request"))?;
        let decoded = decode_base64_image(payload)?;
        (decoded.format, decoded.data)
    };

    let asset = state.asset_store.store(format, data).await?;

    info!(
        store = state.asset_store.store_name(),
        filename = %asset.filename,
        format = %asset.format,
        "Stored uploaded image"
    );

    Ok(Json(UploadImageResponse { url: asset.url }))
}

fn is_multipart(request: &Request) -> bool {
    request
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("multipart/form-data"))
}

async fn read_multipart_image(mut multipart: Multipart) -> Result<(ImageFormat, Bytes), ApiError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::new(e.status(), e.body_text()))?
    {
        if field.name() != Some(IMAGE_FIELD) {
            continue;
        }

        let filename = field.file_name().unwrap_or_default().trim().to_string();
        if filename.is_empty() {
            return Err(ApiError::bad_request("No selected file"));
        }

        let format = ImageFormat::from_filename(&filename)?;
        let data = field
            .bytes()
            .await
            .map_err(|e| ApiError::new(e.status(), e.body_text()))?;

        if data.is_empty() {
            return Err(ApiError::bad_request("Uploaded file is empty"));
        }

        return Ok((format, data));
    }

    Err(ApiError::bad_request("Missing 'image' file in request"))
}
