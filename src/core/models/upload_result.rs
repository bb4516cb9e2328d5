use thiserror::Error;

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("image could not be encoded as JPEG: {0}")]
    Encoding(String),

    #[error("upload request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("invalid response from image host")]
    InvalidResponse { raw_body: String },
}

/// Hosted URL on success.
pub type UploadResult = Result<String, UploadError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_response_display_hides_raw_body() {
        let error = UploadError::InvalidResponse {
            raw_body: "{\"status\":400}".to_string(),
        };

        assert_eq!(error.to_string(), "invalid response from image host");
        assert!(matches!(error, UploadError::InvalidResponse { .. }));
    }

    #[test]
    fn test_encoding_error_carries_reason() {
        let error = UploadError::Encoding("unsupported".to_string());

        assert!(error.to_string().contains("unsupported"));
    }
}
