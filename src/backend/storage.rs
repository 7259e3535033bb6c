//! Thumbnail Storage
//!
//! Thumbnails arrive base64-encoded in the create-post payload. This
//! module decodes them, writes the bytes under a uniquely named file in
//! the configured thumbnail directory and hands back the stable public
//! URL that gets persisted on the post record. The directory itself is
//! served by the router under `/thumbnails`.

use std::path::PathBuf;

use base64::{prelude::BASE64_STANDARD, Engine};
use uuid::Uuid;

use crate::backend::error::ApiError;

#[derive(Debug, Clone)]
pub struct ThumbnailStore {
    dir: PathBuf,
    public_base: String,
}

impl ThumbnailStore {
    pub fn new(dir: impl Into<PathBuf>, public_base: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            public_base: public_base.into().trim_end_matches('/').to_string(),
        }
    }

    /// Decode a base64 image payload, write it to a uniquely named file
    /// and return the public URL to persist on the post.
    pub async fn save(&self, encoded: &str) -> Result<String, ApiError> {
        let bytes = BASE64_STANDARD
            .decode(encoded.trim())
            .map_err(|e| ApiError::Validation(format!("Invalid base64 thumbnail data: {e}")))?;

        let filename = format!("{}.png", Uuid::new_v4());

        tokio::fs::create_dir_all(&self.dir).await?;
        tokio::fs::write(self.dir.join(&filename), bytes).await?;

        Ok(format!("{}/thumbnails/{}", self.public_base, filename))
    }

    /// Directory thumbnails are written to (served under `/thumbnails`).
    pub fn dir(&self) -> &std::path::Path {
        &self.dir
    }
}
