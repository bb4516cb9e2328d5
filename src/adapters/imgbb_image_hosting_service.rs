use async_trait::async_trait;
use reqwest::multipart::{Form, Part};

use crate::core::interfaces::adapters::ImageHostingService;
use crate::core::models::{AppSettings, CapturedImage, UploadError, UploadResult};
use crate::global_constants::{
    IMGBB_EXPIRATION_FIELD, IMGBB_IMAGE_FIELD, LOG_TAG_IMGBB, UPLOAD_CONTENT_TYPE,
    UPLOAD_FILE_NAME, UPLOAD_JPEG_QUALITY,
};

pub struct ImgbbImageHostingService {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
    expiration_seconds: Option<u64>,
}

impl ImgbbImageHostingService {
    pub fn new(api_url: String, api_key: String, expiration_seconds: Option<u64>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url,
            api_key,
            expiration_seconds,
        }
    }

    pub fn from_settings(settings: &AppSettings) -> Self {
        Self::new(
            settings.image_hosting_api_url.clone(),
            settings.image_hosting_api_key.clone(),
            settings.image_expiration_seconds,
        )
    }

    fn build_upload_url(&self) -> String {
        format!("{}?key={}", self.api_url, self.api_key)
    }

    fn build_upload_form(&self, jpeg_data: Vec<u8>) -> Result<Form, UploadError> {
        let image_part = Part::bytes(jpeg_data)
            .file_name(UPLOAD_FILE_NAME)
            .mime_str(UPLOAD_CONTENT_TYPE)?;

        let form = Form::new().part(IMGBB_IMAGE_FIELD, image_part);

        Ok(match self.expiration_seconds {
            Some(seconds) => form.text(IMGBB_EXPIRATION_FIELD, seconds.to_string()),
            None => form,
        })
    }

    fn extract_hosted_url(response_text: String) -> UploadResult {
        let hosted_url = serde_json::from_str::<serde_json::Value>(&response_text)
            .ok()
            .and_then(|json| json["data"]["url"].as_str().map(str::to_string));

        match hosted_url {
            Some(url) => Ok(url),
            None => {
                log::debug!("{} unexpected response body: {}", LOG_TAG_IMGBB, response_text);
                Err(UploadError::InvalidResponse {
                    raw_body: response_text,
                })
            }
        }
    }
}

#[async_trait]
impl ImageHostingService for ImgbbImageHostingService {
    async fn upload_image(&self, image: &CapturedImage) -> UploadResult {
        let jpeg_data = image.encode_jpeg(UPLOAD_JPEG_QUALITY)?;

        log::info!(
            "{} uploading {}x{} image ({} bytes)",
            LOG_TAG_IMGBB,
            image.width,
            image.height,
            jpeg_data.len()
        );

        let form = self.build_upload_form(jpeg_data)?;
        let response = self
            .client
            .post(self.build_upload_url())
            .multipart(form)
            .send()
            .await?;

        log::debug!("{} response status: {}", LOG_TAG_IMGBB, response.status());
        let response_text = response.text().await?;

        let image_url = Self::extract_hosted_url(response_text)?;

        log::info!("{} Image uploaded successfully: {}", LOG_TAG_IMGBB, image_url);
        Ok(image_url)
    }
}
