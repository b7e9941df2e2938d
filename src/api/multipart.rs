//! Multipart assembly for the shop profile endpoints.
//!
//! `PUT`/`PATCH /api/my_shop/` always take a multipart body: scalar fields as
//! form text (nested objects JSON-stringified), plus an optional `image`
//! file part. The image argument is either a public URL (fetched here and
//! streamed into the part) or a base64 data URI (decoded to bytes). A failed
//! image fetch aborts the whole operation so the write endpoint is never
//! reached with a half-built profile.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use reqwest::multipart::{Form, Part};
use serde_json::{Map, Value};

use super::error::{ApiError, ApiResult};

/// Form field carrying the shop image.
const IMAGE_FIELD: &str = "image";

/// Fixed filename for the uploaded image part.
const IMAGE_FILENAME: &str = "image.jpg";

/// Build the multipart form for a shop profile write.
///
/// `fields` is the JSON-serialized parameter object; entries with null
/// values (unset optionals) are omitted.
pub async fn shop_profile_form(
    fields: &Map<String, Value>,
    media: &reqwest::Client,
) -> ApiResult<Form> {
    let mut form = Form::new();

    for (key, value) in fields {
        if key == IMAGE_FIELD || value.is_null() {
            continue;
        }
        let text = match value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        form = form.text(key.clone(), text);
    }

    if let Some(image) = fields.get(IMAGE_FIELD).and_then(Value::as_str) {
        if let Some(part) = image_part(image, media).await? {
            form = form.part(IMAGE_FIELD, part);
        }
    }

    Ok(form)
}

/// Resolve the image argument into a file part.
///
/// Returns `Ok(None)` when the value matches neither supported format, in
/// which case the write proceeds without an image.
async fn image_part(image: &str, media: &reqwest::Client) -> ApiResult<Option<Part>> {
    if image.starts_with("http") {
        let response = media
            .get(image)
            .send()
            .await
            .map_err(|e| ApiError::Transport {
                message: format!("Image download failed: {e}"),
            })?;

        if !response.status().is_success() {
            return Err(ApiError::Transport {
                message: format!("Image download failed: HTTP {}", response.status().as_u16()),
            });
        }

        let part = Part::stream(reqwest::Body::wrap_stream(response.bytes_stream()))
            .file_name(IMAGE_FILENAME);
        Ok(Some(part))
    } else if image.starts_with("data:image") {
        let payload = image.split_once(',').map(|(_, data)| data).unwrap_or("");
        let bytes = BASE64.decode(payload).map_err(|e| ApiError::Transport {
            message: format!("Invalid base64 image data: {e}"),
        })?;
        Ok(Some(Part::bytes(bytes).file_name(IMAGE_FILENAME)))
    } else {
        Ok(None)
    }
}
