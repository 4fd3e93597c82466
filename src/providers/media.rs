/**
 * Media Provider
 *
 * Uploads images to Cloudinary through its unsigned upload API and
 * returns the hosted HTTPS URL. Used for user avatars and card covers.
 */

use std::time::Duration;

use axum::extract::Multipart;
use reqwest::multipart;
use reqwest::Client;
use serde::Deserialize;

use crate::error::ApiError;
use crate::server::config::AppConfig;
use crate::validation::require_upload;

/// A file received from a multipart request, ready to upload
#[derive(Clone, Debug)]
pub struct UploadedFile {
    pub bytes: Vec<u8>,
    pub file_name: String,
    pub content_type: String,
}

/// Pull the named file field out of a multipart request
///
/// Skips unrelated fields, validates the mime type and size, and
/// returns `None` when the request carries no field by that name.
pub async fn read_upload(
    multipart: &mut Multipart,
    field_name: &str,
) -> Result<Option<UploadedFile>, ApiError> {
    while let Some(field) = multipart.next_field().await.map_err(|e| {
        tracing::warn!("Failed to read multipart field: {:?}", e);
        ApiError::validation("Invalid multipart request")
    })? {
        if field.name() != Some(field_name) {
            continue;
        }

        let file_name = field.file_name().unwrap_or("upload").to_string();
        let content_type = field.content_type().unwrap_or("").to_string();
        let bytes = field.bytes().await.map_err(|e| {
            tracing::warn!("Failed to read multipart body: {:?}", e);
            ApiError::validation("Invalid multipart request")
        })?;

        require_upload(&content_type, bytes.len())?;

        return Ok(Some(UploadedFile {
            bytes: bytes.to_vec(),
            file_name,
            content_type,
        }));
    }

    Ok(None)
}

/// Subset of the Cloudinary upload response the API cares about
#[derive(Debug, Deserialize)]
struct UploadResponse {
    secure_url: String,
}

/// Image hosting client
///
/// Uploads go to an unsigned upload preset, so no request signing is
/// needed. Cloning is cheap; clones share the `reqwest` connection pool.
#[derive(Clone)]
pub struct MediaStore {
    client: Client,
    cloud_name: String,
    upload_preset: String,
}

impl MediaStore {
    /// Build a media store from loaded configuration
    pub fn new(config: &AppConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_default();

        Self {
            client,
            cloud_name: config.cloudinary_cloud_name.clone(),
            upload_preset: config.cloudinary_upload_preset.clone(),
        }
    }

    /// Upload an image and return its hosted URL
    ///
    /// # Arguments
    ///
    /// * `file` - The validated upload from the multipart request
    /// * `folder` - Target folder on the hosting side (`users`, `card-covers`)
    pub async fn upload(&self, file: UploadedFile, folder: &str) -> Result<String, ApiError> {
        let url = format!(
            "https://api.cloudinary.com/v1_1/{}/image/upload",
            self.cloud_name
        );

        let part = multipart::Part::bytes(file.bytes)
            .file_name(file.file_name)
            .mime_str(&file.content_type)
            .map_err(|e| {
                tracing::error!("Failed to set MIME type for upload: {:?}", e);
                ApiError::internal("Failed to upload file")
            })?;

        let form = multipart::Form::new()
            .text("upload_preset", self.upload_preset.clone())
            .text("folder", folder.to_string())
            .part("file", part);

        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Media API request failed: {:?}", e);
                ApiError::internal("Failed to upload file")
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_else(|_| status.to_string());
            tracing::error!("Media API error ({}): {}", status, text);
            return Err(ApiError::internal("Failed to upload file"));
        }

        let uploaded: UploadResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse media API response: {:?}", e);
            ApiError::internal("Failed to upload file")
        })?;

        Ok(uploaded.secure_url)
    }
}
