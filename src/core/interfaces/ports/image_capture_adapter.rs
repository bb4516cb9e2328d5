use anyhow::Result;

use crate::core::models::CapturedImage;

pub trait ImageCaptureAdapter: Send + Sync {
    /// `Ok(None)` means the user cancelled the capture.
    fn capture_image(&self) -> Result<Option<CapturedImage>>;
}
