mod image_capture_adapter;

pub use image_capture_adapter::ImageCaptureAdapter;
