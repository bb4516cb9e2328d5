use std::sync::Arc;

use anyhow::Result;
use futures::future::join_all;

use crate::core::interfaces::adapters::ImageHostingService;
use crate::core::interfaces::ports::ImageCaptureAdapter;
use crate::core::models::{CapturedImage, ImageUploadOutcome, SubmissionReport};
use crate::global_constants::LOG_TAG_SESSION;

/// Images captured for one submission, uploaded together on finalize.
pub struct SubmissionSession {
    capture_adapter: Arc<dyn ImageCaptureAdapter>,
    image_hosting_service: Arc<dyn ImageHostingService>,
    captured_images: Vec<CapturedImage>,
}

impl SubmissionSession {
    pub fn build(
        capture_adapter: Arc<dyn ImageCaptureAdapter>,
        image_hosting_service: Arc<dyn ImageHostingService>,
    ) -> Self {
        Self {
            capture_adapter,
            image_hosting_service,
            captured_images: Vec::new(),
        }
    }

    /// Returns whether an image was appended.
    pub fn capture(&mut self) -> Result<bool> {
        match self.capture_adapter.capture_image()? {
            Some(image) => {
                log::info!(
                    "{} captured {}x{} image, {} in session",
                    LOG_TAG_SESSION,
                    image.width,
                    image.height,
                    self.captured_images.len() + 1
                );
                self.captured_images.push(image);
                Ok(true)
            }
            None => {
                log::debug!("{} capture cancelled", LOG_TAG_SESSION);
                Ok(false)
            }
        }
    }

    pub fn captured_images(&self) -> &[CapturedImage] {
        &self.captured_images
    }

    pub fn len(&self) -> usize {
        self.captured_images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.captured_images.is_empty()
    }

    /// Uploads every captured image concurrently and waits for all of them.
    /// Outcomes are reported in capture order; a failed upload does not stop the rest.
    pub async fn finalize(&self) -> SubmissionReport {
        if self.captured_images.is_empty() {
            log::warn!("{} finalize called with no captured images", LOG_TAG_SESSION);
            return SubmissionReport::default();
        }

        log::info!(
            "{} uploading {} images",
            LOG_TAG_SESSION,
            self.captured_images.len()
        );

        let image_hosting_service = &self.image_hosting_service;
        let uploads = self
            .captured_images
            .iter()
            .enumerate()
            .map(move |(position, image)| async move {
                let result = image_hosting_service.upload_image(image).await;
                match &result {
                    Ok(url) => {
                        log::info!("{} image {} uploaded: {}", LOG_TAG_SESSION, position, url)
                    }
                    Err(error) => {
                        log::error!(
                            "{} image {} upload failed: {}",
                            LOG_TAG_SESSION,
                            position,
                            error
                        )
                    }
                }
                ImageUploadOutcome { position, result }
            });

        let report = SubmissionReport::from_outcomes(join_all(uploads).await);

        log::info!(
            "{} submission finished: {} succeeded, {} failed",
            LOG_TAG_SESSION,
            report.succeeded(),
            report.failed()
        );

        report
    }
}
