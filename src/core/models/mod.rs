mod app_settings;
mod captured_image;
mod submission_report;
mod upload_result;

pub use app_settings::AppSettings;
pub use captured_image::CapturedImage;
pub use submission_report::{ImageUploadOutcome, SubmissionReport};
pub use upload_result::{UploadError, UploadResult};
