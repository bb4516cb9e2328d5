use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};

use crate::core::interfaces::ports::ImageCaptureAdapter;
use crate::core::models::CapturedImage;
use crate::global_constants::LOG_TAG_PICKER;

/// Picks images from a fixed list of files, one per capture. Once the list
/// is exhausted every further capture is treated as cancelled.
pub struct PathListImagePicker {
    pending_paths: Mutex<VecDeque<PathBuf>>,
}

impl PathListImagePicker {
    pub fn new(paths: Vec<PathBuf>) -> Self {
        log::debug!("{} queued {} image paths", LOG_TAG_PICKER, paths.len());
        Self {
            pending_paths: Mutex::new(paths.into()),
        }
    }

    pub fn remaining(&self) -> usize {
        self.pending_paths
            .lock()
            .map(|paths| paths.len())
            .unwrap_or_default()
    }
}

impl ImageCaptureAdapter for PathListImagePicker {
    fn capture_image(&self) -> Result<Option<CapturedImage>> {
        let next_path = self
            .pending_paths
            .lock()
            .map_err(|_| anyhow::anyhow!("image picker queue lock poisoned"))?
            .pop_front();

        let Some(path) = next_path else {
            log::debug!("{} no more images to pick", LOG_TAG_PICKER);
            return Ok(None);
        };

        log::info!("{} picking image {:?}", LOG_TAG_PICKER, path);

        let decoded = image::open(&path)
            .with_context(|| format!("failed to decode image at {}", path.display()))?;

        Ok(Some(CapturedImage::from_dynamic_image(decoded)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_test_png(directory: &std::path::Path, name: &str, width: u32) -> PathBuf {
        let path = directory.join(name);
        image::RgbaImage::from_pixel(width, 2, image::Rgba([1, 2, 3, 255]))
            .save(&path)
            .unwrap();
        path
    }

    #[test]
    fn test_capture_image_returns_images_in_order() {
        let temp_dir = tempfile::tempdir().unwrap();
        let first = write_test_png(temp_dir.path(), "first.png", 3);
        let second = write_test_png(temp_dir.path(), "second.png", 5);
        let picker = PathListImagePicker::new(vec![first, second]);

        let first_image = picker.capture_image().unwrap().unwrap();
        let second_image = picker.capture_image().unwrap().unwrap();

        assert_eq!(first_image.width, 3);
        assert_eq!(second_image.width, 5);
        assert_eq!(picker.remaining(), 0);
    }

    #[test]
    fn test_capture_image_after_exhaustion_is_cancelled() {
        let picker = PathListImagePicker::new(vec![]);

        assert!(picker.capture_image().unwrap().is_none());
    }

    #[test]
    fn test_capture_image_fails_for_undecodable_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("broken.png");
        std::fs::write(&path, b"not an image").unwrap();
        let picker = PathListImagePicker::new(vec![path]);

        let error = picker.capture_image().unwrap_err();

        assert!(error.to_string().contains("failed to decode image"));
        assert_eq!(picker.remaining(), 0);
    }
}
