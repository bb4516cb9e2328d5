use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};

use crate::adapters::{ImgbbImageHostingService, LocalImageStore, PathListImagePicker};
use crate::core::interfaces::adapters::ImageHostingService;
use crate::core::models::{AppSettings, CapturedImage, SubmissionReport};
use crate::core::orchestrators::SubmissionSession;
use crate::global_constants::{
    LOG_TAG_MAIN, USER_MESSAGE_NOTHING_CAPTURED, USER_MESSAGE_PARTIAL_FAILURE,
    USER_MESSAGE_SUBMITTED,
};

pub async fn run_submit(paths: Vec<PathBuf>) -> Result<()> {
    let settings = AppSettings::initialize()?;
    let image_hosting_service = Arc::new(ImgbbImageHostingService::from_settings(settings));

    let report = submit_images(paths, image_hosting_service).await?;

    if report.total() == 0 {
        println!("{}", USER_MESSAGE_NOTHING_CAPTURED);
        return Ok(());
    }

    for outcome in &report.outcomes {
        match &outcome.result {
            Ok(url) => println!("  [{}] uploaded: {}", outcome.position + 1, url),
            Err(error) => println!("  [{}] failed: {}", outcome.position + 1, error),
        }
    }

    log::debug!(
        "{} hosted urls: {:?}",
        LOG_TAG_MAIN,
        report.uploaded_urls()
    );

    if report.is_complete_success() {
        println!("{}", USER_MESSAGE_SUBMITTED);
        Ok(())
    } else {
        println!("{}", USER_MESSAGE_PARTIAL_FAILURE);
        anyhow::bail!(
            "{} of {} uploads failed",
            report.failed(),
            report.total()
        )
    }
}

/// Captures every path into one session and finalizes it.
pub async fn submit_images(
    paths: Vec<PathBuf>,
    image_hosting_service: Arc<dyn ImageHostingService>,
) -> Result<SubmissionReport> {
    let picker = Arc::new(PathListImagePicker::new(paths));
    let mut session = SubmissionSession::build(picker.clone(), image_hosting_service);

    while picker.remaining() > 0 {
        if let Err(error) = session.capture() {
            log::error!("{} capture failed: {:#}", LOG_TAG_MAIN, error);
            println!("  skipped: {:#}", error);
        }
    }

    if session.is_empty() {
        return Ok(SubmissionReport::default());
    }

    println!("Captured {} screenshots:", session.len());
    for (position, image) in session.captured_images().iter().enumerate() {
        println!("  [{}] {}x{}", position + 1, image.width, image.height);
    }

    Ok(session.finalize().await)
}

pub fn build_image_store(settings: &AppSettings) -> Result<LocalImageStore> {
    match &settings.image_store_directory {
        Some(directory) => {
            std::fs::create_dir_all(directory)
                .with_context(|| format!("creating image store at {}", directory.display()))?;
            Ok(LocalImageStore::new(directory.clone()))
        }
        None => LocalImageStore::in_documents_directory(),
    }
}

pub fn run_store_save(path: &Path) -> Result<()> {
    let store = build_image_store(AppSettings::initialize()?)?;
    let decoded = image::open(path)
        .with_context(|| format!("failed to decode image at {}", path.display()))?;

    let filename = store.save_image(&CapturedImage::from_dynamic_image(decoded)?)?;
    log::info!(
        "{} stored {} in {}",
        LOG_TAG_MAIN,
        filename,
        store.directory().display()
    );
    println!("{}", filename);
    Ok(())
}

pub fn run_store_load(filename: &str, output: &Path) -> Result<()> {
    let store = build_image_store(AppSettings::initialize()?)?;
    let image = store
        .load_image(filename)
        .ok_or_else(|| anyhow::anyhow!("no stored image named {}", filename))?;

    export_image(&image, output)?;
    println!("{}", output.display());
    Ok(())
}

pub fn run_store_delete(filename: &str) -> Result<()> {
    let store = build_image_store(AppSettings::initialize()?)?;
    store.delete_image(filename);
    Ok(())
}

fn export_image(image: &CapturedImage, output: &Path) -> Result<()> {
    let dynamic_image = image
        .to_dynamic_image()
        .ok_or_else(|| anyhow::anyhow!("stored image has inconsistent dimensions"))?;

    // Formats without alpha (e.g. JPEG) reject RGBA buffers.
    dynamic_image
        .to_rgb8()
        .save(output)
        .with_context(|| format!("failed to write {}", output.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{UploadError, UploadResult};
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct RecordingImageHostingService {
        uploaded: Mutex<usize>,
    }

    #[async_trait]
    impl ImageHostingService for RecordingImageHostingService {
        async fn upload_image(&self, image: &CapturedImage) -> UploadResult {
            *self.uploaded.lock().unwrap() += 1;
            if image.width == 1 {
                return Err(UploadError::Encoding("too small".to_string()));
            }
            Ok(format!("https://hosted.test/{}", image.width))
        }
    }

    fn write_test_png(directory: &Path, name: &str, width: u32) -> PathBuf {
        let path = directory.join(name);
        image::RgbaImage::from_pixel(width, 4, image::Rgba([9, 9, 9, 255]))
            .save(&path)
            .unwrap();
        path
    }

    #[tokio::test]
    async fn test_submit_images_skips_unreadable_files() {
        let temp_dir = tempfile::tempdir().unwrap();
        let good = write_test_png(temp_dir.path(), "good.png", 6);
        let missing = temp_dir.path().join("missing.png");
        let hosting = Arc::new(RecordingImageHostingService {
            uploaded: Mutex::new(0),
        });

        let report = submit_images(vec![good, missing], hosting.clone())
            .await
            .unwrap();

        assert_eq!(report.total(), 1);
        assert!(report.is_complete_success());
        assert_eq!(*hosting.uploaded.lock().unwrap(), 1);
    }

    #[tokio::test]
    async fn test_submit_images_reports_failed_uploads() {
        let temp_dir = tempfile::tempdir().unwrap();
        let tiny = write_test_png(temp_dir.path(), "tiny.png", 1);
        let wide = write_test_png(temp_dir.path(), "wide.png", 8);
        let hosting = Arc::new(RecordingImageHostingService {
            uploaded: Mutex::new(0),
        });

        let report = submit_images(vec![tiny, wide], hosting).await.unwrap();

        assert_eq!(report.failed(), 1);
        assert_eq!(report.uploaded_urls(), vec!["https://hosted.test/8"]);
    }

    #[test]
    fn test_build_image_store_creates_configured_directory() {
        let temp_dir = tempfile::tempdir().unwrap();
        let store_dir = temp_dir.path().join("store");
        let settings = AppSettings {
            image_store_directory: Some(store_dir.clone()),
            ..AppSettings::default()
        };

        let store = build_image_store(&settings).unwrap();

        assert!(store_dir.is_dir());
        assert_eq!(store.directory(), store_dir.as_path());
    }

    #[test]
    fn test_export_image_writes_jpeg() {
        let temp_dir = tempfile::tempdir().unwrap();
        let output = temp_dir.path().join("export.jpg");
        let image = CapturedImage::build_from_raw_data(4, 4, vec![100u8; 64]).unwrap();

        export_image(&image, &output).unwrap();

        let exported = image::open(&output).unwrap();
        assert_eq!(exported.width(), 4);
    }
}
