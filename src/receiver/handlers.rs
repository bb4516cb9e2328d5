//! `POST /upload`: stores the `screenshot` file field under a
//! timestamp-prefixed name. Content, size and type are not validated.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::extract::multipart::Field;
use axum::extract::{Multipart, State};
use axum::Json;
use serde::Serialize;
use tokio::io::AsyncWriteExt;

use crate::global_constants::{LOG_TAG_RECEIVER, RECEIVER_FILE_FIELD, RECEIVER_SUCCESS_MESSAGE};
use crate::receiver::errors::AppError;

#[derive(Clone)]
pub struct ReceiverState {
    upload_dir: Arc<PathBuf>,
}

impl ReceiverState {
    pub fn new(upload_dir: PathBuf) -> Self {
        Self {
            upload_dir: Arc::new(upload_dir),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UploadAcknowledgement {
    pub message: String,
}

/// Millisecond prefix only; two uploads of the same name in the same
/// millisecond map to the same file.
pub fn build_stored_filename(timestamp_millis: i64, original_filename: &str) -> Option<String> {
    let base_name = Path::new(original_filename).file_name()?.to_str()?;
    Some(format!("{}-{}", timestamp_millis, base_name))
}

pub async fn upload_screenshot(
    State(state): State<ReceiverState>,
    mut multipart: Multipart,
) -> Result<Json<UploadAcknowledgement>, AppError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(RECEIVER_FILE_FIELD) {
            continue;
        }

        let original_filename = field
            .file_name()
            .map(str::to_string)
            .ok_or_else(|| AppError::bad_request("`screenshot` field carries no filename"))?;
        let stored_filename =
            build_stored_filename(chrono::Utc::now().timestamp_millis(), &original_filename)
                .ok_or_else(|| {
                    AppError::bad_request(format!("unusable filename `{}`", original_filename))
                })?;

        let destination = state.upload_dir.join(&stored_filename);
        let bytes_written = persist_field(field, &destination).await?;

        log::info!(
            "{} Received file: {} ({} bytes) stored as {}",
            LOG_TAG_RECEIVER,
            original_filename,
            bytes_written,
            stored_filename
        );

        return Ok(Json(UploadAcknowledgement {
            message: RECEIVER_SUCCESS_MESSAGE.to_string(),
        }));
    }

    log::warn!("{} upload without a `screenshot` field", LOG_TAG_RECEIVER);
    Err(AppError::bad_request("missing `screenshot` file field"))
}

/// Streams the field to disk, removing the partial file if the body fails.
async fn persist_field(mut field: Field<'_>, destination: &Path) -> Result<u64, AppError> {
    let mut file = tokio::fs::File::create(destination).await.map_err(|err| {
        AppError::internal(format!("failed to create {}: {}", destination.display(), err))
    })?;

    let mut bytes_written = 0u64;
    let outcome: Result<(), AppError> = async {
        while let Some(chunk) = field.chunk().await? {
            file.write_all(&chunk)
                .await
                .map_err(|err| AppError::internal(format!("failed to write upload: {}", err)))?;
            bytes_written += chunk.len() as u64;
        }
        file.flush()
            .await
            .map_err(|err| AppError::internal(format!("failed to flush upload: {}", err)))
    }
    .await;

    if let Err(err) = outcome {
        drop(file);
        if let Err(remove_err) = tokio::fs::remove_file(destination).await {
            log::warn!(
                "{} failed to remove partial upload {}: {}",
                LOG_TAG_RECEIVER,
                destination.display(),
                remove_err
            );
        }
        return Err(err);
    }

    Ok(bytes_written)
}
