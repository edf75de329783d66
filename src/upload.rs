use std::path::{Path, PathBuf};

use anyhow::Context;
use axum::body::Bytes;
use chrono::Utc;
use uuid::Uuid;

use crate::error::{AppError, AppResult};

pub const REJECTED_FILE: &str = "Sadece resim dosyası yüklenebilir!";

const ACCEPTED_EXTENSIONS: [&str; 4] = ["jpeg", "jpg", "png", "webp"];
const ACCEPTED_MIME_TYPES: [&str; 4] = ["image/jpeg", "image/jpg", "image/png", "image/webp"];

/// An image attachment that passed the extension and content-type checks.
/// Only the lowercased extension survives from the client filename.
#[derive(Debug, Clone)]
pub struct SwatchUpload {
    extension: String,
    data: Bytes,
}

impl SwatchUpload {
    /// Check the declared filename and content type. Runs before the body is read.
    pub fn check(file_name: &str, content_type: Option<&str>) -> AppResult<String> {
        let extension = Path::new(file_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .filter(|ext| ACCEPTED_EXTENSIONS.contains(&ext.as_str()));

        let mime_ok = content_type
            .map(|ct| ct.split(';').next().unwrap_or("").trim().to_ascii_lowercase())
            .is_some_and(|ct| ACCEPTED_MIME_TYPES.contains(&ct.as_str()));

        match extension {
            Some(ext) if mime_ok => Ok(ext),
            _ => Err(AppError::Validation(REJECTED_FILE.into())),
        }
    }

    pub fn new(extension: String, data: Bytes) -> Self {
        Self { extension, data }
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Generated storage name: `<unix millis>-<8 hex chars>.<ext>`.
pub fn generate_file_name(extension: &str) -> String {
    let suffix = Uuid::new_v4().simple().to_string();
    format!(
        "{}-{}.{}",
        Utc::now().timestamp_millis(),
        &suffix[..8],
        extension
    )
}

/// The directory swatch files live in. Shared by every request; uniqueness of
/// generated names is the only collision guard.
#[derive(Debug, Clone)]
pub struct UploadStore {
    dir: PathBuf,
}

impl UploadStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub async fn ensure_dir(&self) -> anyhow::Result<()> {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .with_context(|| format!("creating upload dir {}", self.dir.display()))
    }

    /// Write the upload under a fresh name and return that name.
    pub async fn store(&self, upload: &SwatchUpload) -> anyhow::Result<String> {
        self.ensure_dir().await?;
        let file_name = generate_file_name(upload.extension());
        let path = self.dir.join(&file_name);
        tokio::fs::write(&path, &upload.data)
            .await
            .with_context(|| format!("writing swatch {}", path.display()))?;
        tracing::debug!(file = %file_name, bytes = upload.len(), "swatch stored");
        Ok(file_name)
    }

    /// Best-effort removal of a stored file whose row never made it to the database.
    pub async fn discard(&self, file_name: &str) {
        let path = self.dir.join(file_name);
        if let Err(err) = tokio::fs::remove_file(&path).await {
            tracing::warn!(error = %err, file = %file_name, "failed to remove orphaned swatch");
        }
    }
}
