use async_trait::async_trait;

use crate::core::models::{CapturedImage, UploadResult};

#[async_trait]
pub trait ImageHostingService: Send + Sync {
    async fn upload_image(&self, image: &CapturedImage) -> UploadResult;
}
