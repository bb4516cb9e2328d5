use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use uuid::Uuid;

use crate::core::models::CapturedImage;
use crate::global_constants::{
    LOG_TAG_IMAGE_STORE, STORED_IMAGE_EXTENSION, STORED_IMAGE_JPEG_QUALITY, STORED_IMAGE_PREFIX,
};

/// JPEG files on local storage, keyed by a generated filename.
///
/// Nothing locks individual files: operations on distinct names are
/// independent, operations on the same name may interleave.
pub struct LocalImageStore {
    directory: PathBuf,
}

impl LocalImageStore {
    pub fn new(directory: PathBuf) -> Self {
        Self { directory }
    }

    pub fn in_documents_directory() -> Result<Self> {
        let directory = dirs::document_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find document directory"))?;

        Ok(Self::new(directory))
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    fn generate_filename() -> String {
        format!(
            "{}{}.{}",
            STORED_IMAGE_PREFIX,
            Uuid::new_v4(),
            STORED_IMAGE_EXTENSION
        )
    }

    pub fn save_image(&self, image: &CapturedImage) -> Result<String> {
        let jpeg_data = image
            .encode_jpeg(STORED_IMAGE_JPEG_QUALITY)
            .context("failed to encode image for local storage")?;

        let filename = Self::generate_filename();
        let path = self.directory.join(&filename);

        std::fs::write(&path, jpeg_data)
            .with_context(|| format!("failed to write {}", path.display()))?;

        log::info!("{} saved {}", LOG_TAG_IMAGE_STORE, filename);
        Ok(filename)
    }

    /// Returns `None` when the file is missing or cannot be decoded.
    pub fn load_image(&self, filename: &str) -> Option<CapturedImage> {
        let path = self.directory.join(filename);
        if !path.exists() {
            log::debug!("{} no image named {}", LOG_TAG_IMAGE_STORE, filename);
            return None;
        }

        match image::open(&path)
            .map_err(anyhow::Error::from)
            .and_then(CapturedImage::from_dynamic_image)
        {
            Ok(image) => Some(image),
            Err(error) => {
                log::warn!(
                    "{} failed to decode {}: {}",
                    LOG_TAG_IMAGE_STORE,
                    filename,
                    error
                );
                None
            }
        }
    }

    pub fn delete_image(&self, filename: &str) {
        let path = self.directory.join(filename);
        match std::fs::remove_file(&path) {
            Ok(()) => log::info!("{} deleted {}", LOG_TAG_IMAGE_STORE, filename),
            Err(error) => log::debug!(
                "{} could not delete {}: {}",
                LOG_TAG_IMAGE_STORE,
                filename,
                error
            ),
        }
    }
}
