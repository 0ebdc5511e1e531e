//! # Upload boundary
//!
//! Records point at their image through a public URL plus the id the external
//! asset store knows it by. [`Uploader`] is that boundary: one image file in,
//! one [`UploadedAsset`] out, completed asynchronously.
//!
//! [`MockUploader`] stands in for a real asset host. It waits a moment, then
//! returns the file itself as a `data:` URI and a fabricated token. That is
//! enough to display the image locally, but it is not a shareable asset.
//!
//! Uploads have no cancellation hook of their own: dropping the future
//! abandons the upload, and [`upload_with_timeout`] bounds how long a caller
//! waits.

use crate::error::{DeskError, Result};
use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use chrono::Utc;
use std::path::Path;
use std::time::Duration;
use tracing::debug;

/// Where an asset is filed in the external store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetFolder {
    Gallery,
    Faculty,
}

impl AssetFolder {
    fn mock_prefix(&self) -> &'static str {
        match self {
            AssetFolder::Gallery => "mock",
            AssetFolder::Faculty => "faculty",
        }
    }
}

/// A file picked by the user, fully read into memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, mime: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime: mime.into(),
            bytes,
        }
    }

    pub async fn read(path: &Path) -> Result<Self> {
        let bytes = tokio::fs::read(path).await.map_err(DeskError::Io)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Ok(Self::new(name, mime_for_path(path), bytes))
    }

    pub fn is_image(&self) -> bool {
        self.mime.starts_with("image/")
    }
}

pub fn mime_for_path(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        "bmp" => "image/bmp",
        "avif" => "image/avif",
        "ico" => "image/x-icon",
        "tif" | "tiff" => "image/tiff",
        _ => "application/octet-stream",
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedAsset {
    /// Public URL (or data URI) of the stored image.
    pub url: String,
    /// Reference to the asset in the external store.
    pub external_id: String,
}

#[async_trait(?Send)]
pub trait Uploader {
    async fn upload(&self, file: &SelectedFile, folder: AssetFolder) -> Result<UploadedAsset>;
}

/// Encodes the file as a data URI after a fixed delay.
#[derive(Debug, Clone)]
pub struct MockUploader {
    delay: Duration,
}

impl MockUploader {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for MockUploader {
    fn default() -> Self {
        Self::new(Duration::from_millis(1000))
    }
}

#[async_trait(?Send)]
impl Uploader for MockUploader {
    async fn upload(&self, file: &SelectedFile, folder: AssetFolder) -> Result<UploadedAsset> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        let url = format!("data:{};base64,{}", file.mime, STANDARD.encode(&file.bytes));
        let external_id = format!("{}_{}", folder.mock_prefix(), Utc::now().timestamp_millis());
        debug!(file = %file.name, %external_id, "mock upload complete");
        Ok(UploadedAsset { url, external_id })
    }
}

/// Runs an upload, failing with [`DeskError::Upload`] if it takes longer
/// than `limit`.
pub async fn upload_with_timeout<U: Uploader + ?Sized>(
    uploader: &U,
    file: &SelectedFile,
    folder: AssetFolder,
    limit: Duration,
) -> Result<UploadedAsset> {
    match tokio::time::timeout(limit, uploader.upload(file, folder)).await {
        Ok(outcome) => outcome,
        Err(_) => Err(DeskError::Upload(format!(
            "no response after {}s",
            limit.as_secs_f32()
        ))),
    }
}
