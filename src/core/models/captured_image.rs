use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, RgbaImage};

use crate::core::models::UploadError;
use crate::global_constants::LOG_TAG_CAPTURED_IMAGE;

#[derive(Clone, PartialEq)]
pub struct CapturedImage {
    pub width: u32,
    pub height: u32,
    raw_data: Vec<u8>,
}

impl std::fmt::Debug for CapturedImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CapturedImage")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}

impl CapturedImage {
    pub fn build_from_raw_data(
        width_pixels: u32,
        height_pixels: u32,
        raw_rgba_data: Vec<u8>,
    ) -> anyhow::Result<Self> {
        let expected_length = width_pixels as usize * height_pixels as usize * 4;
        if raw_rgba_data.len() != expected_length {
            anyhow::bail!(
                "RGBA buffer holds {} bytes, expected {} for {}x{}",
                raw_rgba_data.len(),
                expected_length,
                width_pixels,
                height_pixels
            );
        }

        log::debug!(
            "{} building image: {}x{}",
            LOG_TAG_CAPTURED_IMAGE,
            width_pixels,
            height_pixels
        );

        Ok(Self {
            width: width_pixels,
            height: height_pixels,
            raw_data: raw_rgba_data,
        })
    }

    pub fn from_dynamic_image(image: DynamicImage) -> anyhow::Result<Self> {
        let rgba = image.into_rgba8();
        let (width, height) = rgba.dimensions();

        Self::build_from_raw_data(width, height, rgba.into_raw())
    }

    #[cfg(test)]
    pub fn raw_data(&self) -> &[u8] {
        &self.raw_data
    }

    pub fn to_dynamic_image(&self) -> Option<DynamicImage> {
        RgbaImage::from_raw(self.width, self.height, self.raw_data.clone())
            .map(DynamicImage::ImageRgba8)
    }

    /// JPEG carries no alpha channel, so pixels are flattened to RGB first.
    pub fn encode_jpeg(&self, quality: u8) -> Result<Vec<u8>, UploadError> {
        let image = self.to_dynamic_image().ok_or_else(|| {
            UploadError::Encoding("pixel buffer does not match image dimensions".to_string())
        })?;
        let rgb = DynamicImage::ImageRgb8(image.to_rgb8());

        let mut encoded = Vec::new();
        let encoder = JpegEncoder::new_with_quality(&mut encoded, quality);
        rgb.write_with_encoder(encoder)
            .map_err(|error| UploadError::Encoding(error.to_string()))?;

        Ok(encoded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_from_raw_data_keeps_dimensions() {
        let image = CapturedImage::build_from_raw_data(4, 2, vec![0u8; 4 * 2 * 4]).unwrap();

        assert_eq!(image.width, 4);
        assert_eq!(image.height, 2);
        assert_eq!(image.raw_data().len(), 32);
    }

    #[test]
    fn test_build_from_raw_data_rejects_short_buffer() {
        let result = CapturedImage::build_from_raw_data(4, 4, vec![0u8; 10]);

        assert!(result.is_err());
    }

    #[test]
    fn test_encode_jpeg_produces_jpeg_magic_bytes() {
        let image = CapturedImage::build_from_raw_data(8, 8, vec![200u8; 8 * 8 * 4]).unwrap();

        let encoded = image.encode_jpeg(80).unwrap();

        assert_eq!(&encoded[..2], &[0xFF, 0xD8]);
    }

    #[test]
    fn test_to_dynamic_image_keeps_pixels() {
        let image = CapturedImage::build_from_raw_data(2, 1, vec![1, 2, 3, 4, 5, 6, 7, 8]).unwrap();

        let dynamic = image.to_dynamic_image().unwrap();

        assert_eq!(dynamic.to_rgba8().into_raw(), vec![1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_from_dynamic_image_converts_to_rgba() {
        let rgb = image::RgbImage::from_pixel(3, 5, image::Rgb([10, 20, 30]));

        let captured = CapturedImage::from_dynamic_image(DynamicImage::ImageRgb8(rgb)).unwrap();

        assert_eq!(captured.width, 3);
        assert_eq!(captured.height, 5);
        assert_eq!(&captured.raw_data()[..4], &[10, 20, 30, 255]);
    }

    #[test]
    fn test_debug_output_omits_pixel_data() {
        let image = CapturedImage::build_from_raw_data(1, 1, vec![1, 2, 3, 4]).unwrap();

        let debug = format!("{:?}", image);

        assert!(debug.contains("width: 1"));
        assert!(!debug.contains("raw_data"));
    }
}
