pub const APPLICATION_NAME: &str = "screenshot-submit";

pub const LOG_TAG_MAIN: &str = "[MAIN]";
pub const LOG_TAG_IMGBB: &str = "[IMGBB]";
pub const LOG_TAG_CAPTURED_IMAGE: &str = "[CAPTURED_IMAGE]";
pub const LOG_TAG_SESSION: &str = "[SESSION]";
pub const LOG_TAG_IMAGE_STORE: &str = "[IMAGE_STORE]";
pub const LOG_TAG_PICKER: &str = "[PICKER]";
pub const LOG_TAG_RECEIVER: &str = "[RECEIVER]";
pub const LOG_TAG_SETTINGS: &str = "[SETTINGS]";

pub const IMGBB_API_URL: &str = "https://api.imgbb.com/1/upload";
pub const IMGBB_IMAGE_FIELD: &str = "image";
pub const IMGBB_EXPIRATION_FIELD: &str = "expiration";

pub const UPLOAD_FILE_NAME: &str = "screenshot.jpg";
pub const UPLOAD_CONTENT_TYPE: &str = "image/jpeg";
pub const UPLOAD_JPEG_QUALITY: u8 = 80;

pub const STORED_IMAGE_PREFIX: &str = "screenshot-";
pub const STORED_IMAGE_EXTENSION: &str = "jpg";
pub const STORED_IMAGE_JPEG_QUALITY: u8 = 90;

pub const SETTINGS_DIRECTORY_NAME: &str = "screenshot-submit";
pub const SETTINGS_FILE_NAME: &str = "settings.json";
pub const ENV_API_KEY: &str = "SCREENSHOT_SUBMIT_API_KEY";

pub const ENV_RECEIVER_HOST: &str = "SCREENSHOT_RECEIVER_HOST";
pub const ENV_RECEIVER_PORT: &str = "SCREENSHOT_RECEIVER_PORT";
pub const ENV_RECEIVER_UPLOAD_DIR: &str = "SCREENSHOT_RECEIVER_UPLOAD_DIR";

pub const DEFAULT_RECEIVER_HOST: &str = "0.0.0.0";
pub const DEFAULT_RECEIVER_PORT: u16 = 3000;
pub const DEFAULT_RECEIVER_UPLOAD_DIR: &str = "uploads";

pub const RECEIVER_UPLOAD_ROUTE: &str = "/upload";
pub const RECEIVER_FILE_FIELD: &str = "screenshot";
pub const RECEIVER_SUCCESS_MESSAGE: &str = "Screenshot uploaded successfully.";

pub const USER_MESSAGE_SUBMITTED: &str = "Your screenshots have been submitted.";
pub const USER_MESSAGE_PARTIAL_FAILURE: &str =
    "Some screenshots could not be uploaded. Please try again.";
pub const USER_MESSAGE_NOTHING_CAPTURED: &str = "No screenshots were captured.";
